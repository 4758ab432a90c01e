use anchor_lang::prelude::*;

/// Point-oracle mapping for one NFT mint.
///
/// Written only by the farm's configured point oracle. A missing mapping is
/// not an error anywhere in the program: it reads as weight zero.
#[account]
#[derive(Default)]
pub struct NftPoint {
    pub farm: Pubkey,
    pub nft_mint: Pubkey,
    pub point: u64,
    pub bump: u8,
}

impl NftPoint {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;
}
