use anchor_lang::prelude::*;

/// Custody record for one staked NFT.
///
/// The underlying token sits in a farm-authority escrow for the lifetime of
/// the deposit. Withdrawal flips `is_active` instead of closing the account so
/// the same NFT can be re-deposited later through `init_if_needed`.
#[account]
#[derive(Default)]
pub struct NftDeposit {
    pub farm: Pubkey,
    pub depositor: Pubkey,
    pub nft_mint: Pubkey,

    /// Staking weight snapshotted from the point oracle at deposit time.
    pub point: u64,
    pub deposited_at: i64,

    pub is_active: bool,
    pub bump: u8,
}

impl NftDeposit {
    pub const LEN: usize = 8 + (32 * 3) + 8 + 8 + 1 + 1;

    /// True once the minimum holding duration has elapsed for this deposit.
    pub fn is_mature(&self, now: i64, min_hold_duration: i64) -> bool {
        now.saturating_sub(self.deposited_at) >= min_hold_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maturity_boundary_is_inclusive() {
        let deposit = NftDeposit {
            deposited_at: 5_000,
            ..Default::default()
        };
        let thirty_days = 30 * 86_400;
        assert!(!deposit.is_mature(5_000 + thirty_days - 1, thirty_days));
        assert!(deposit.is_mature(5_000 + thirty_days, thirty_days));
        assert!(deposit.is_mature(5_000 + thirty_days + 1, thirty_days));
    }
}
