use anchor_lang::prelude::*;

/// Box-reward credit balance for one user.
///
/// NFT-pool payouts land here instead of moving tokens: the game backend
/// converts the credit into loot boxes. Credit-only from this program's side.
#[account]
#[derive(Default)]
pub struct BoxReward {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl BoxReward {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;
}
