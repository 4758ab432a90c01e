use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::FarmError;

/// Per-pool, per-user stake position.
///
/// For the NFT pool `amount` is the sum of the user's deposited staking
/// points and `nft_count`/`first_deposit_at` drive the hold-duration gates.
/// Zeroed, never closed, on full withdrawal.
#[account]
#[derive(Default)]
pub struct UserStake {
    pub owner: Pubkey,
    pub pool: Pubkey,

    /// Staked token amount, or summed points for the NFT pool.
    pub amount: u64,
    /// `amount * acc_reward_per_share / PRECISION` at the last settlement.
    pub reward_debt: u128,
    pub total_claimed: u64,

    /// Number of active NFT deposits (NFT pool only).
    pub nft_count: u64,
    /// Timestamp of the earliest deposit in the current holding streak
    /// (NFT pool only); zero while no deposit is active.
    pub first_deposit_at: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 16 + 8 + 8 + 8 + 1;

    /// Reward accrued since the last settlement:
    /// `amount * acc / PRECISION - reward_debt`.
    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        let accumulated = (self.amount as u128)
            .checked_mul(acc_reward_per_share)
            .ok_or(FarmError::MathOverflow)?
            .checked_div(PRECISION)
            .ok_or(FarmError::MathOverflow)?;
        let pending = accumulated
            .checked_sub(self.reward_debt)
            .ok_or(FarmError::MathUnderflow)?;
        Ok(u64::try_from(pending).map_err(|_| FarmError::MathOverflow)?)
    }

    /// Re-snapshot the debt after a payout or stake change.
    pub fn reset_debt(&mut self, acc_reward_per_share: u128) -> Result<()> {
        self.reward_debt = (self.amount as u128)
            .checked_mul(acc_reward_per_share)
            .ok_or(FarmError::MathOverflow)?
            .checked_div(PRECISION)
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }

    /// True once the minimum holding duration has elapsed since the earliest
    /// active NFT deposit.
    pub fn hold_duration_elapsed(&self, now: i64, min_hold_duration: i64) -> bool {
        self.first_deposit_at > 0
            && now.saturating_sub(self.first_deposit_at) >= min_hold_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_zero_right_after_reset() {
        let mut user = UserStake::default();
        user.amount = 12_345;
        user.reset_debt(987 * PRECISION / 100).unwrap();
        assert_eq!(user.pending_reward(987 * PRECISION / 100).unwrap(), 0);
    }

    #[test]
    fn pending_tracks_accumulator_growth() {
        let mut user = UserStake::default();
        user.amount = 500;
        user.reset_debt(2 * PRECISION).unwrap();
        // accumulator advances by 3 whole tokens per share
        let acc = 5 * PRECISION;
        assert_eq!(user.pending_reward(acc).unwrap(), 1_500);
    }

    #[test]
    fn hold_gate_respects_streak_start() {
        let mut user = UserStake::default();
        assert!(!user.hold_duration_elapsed(1_000_000, 0));

        user.first_deposit_at = 1_000;
        user.nft_count = 1;
        assert!(!user.hold_duration_elapsed(1_000 + 86_399, 86_400));
        assert!(user.hold_duration_elapsed(1_000 + 86_400, 86_400));
    }
}
