use anchor_lang::prelude::*;

use crate::constants::MAX_TRANCHES;
use crate::error::VestingError;

/// One locked amount with its own unlock time.
///
/// A tranche's index in the recipient's list is stable and serves as the
/// external claim handle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tranche {
    pub amount: u64,
    pub unlock_time: i64,
    pub claimed: bool,
}

impl Tranche {
    pub const LEN: usize = 8 + 8 + 1;
}

/// Per-recipient vesting ledger: an append-only sequence of tranches.
#[account]
pub struct VestingAccount {
    pub recipient: Pubkey,
    pub tranches: Vec<Tranche>,
    /// Sum of all amounts ever locked for this recipient.
    pub total_locked: u64,
    /// Sum of all amounts paid out; equals the claimed tranches' total.
    pub total_claimed: u64,
    pub bump: u8,
}

impl VestingAccount {
    pub const LEN: usize = 8 + 32 + (4 + Tranche::LEN * MAX_TRANCHES) + 8 + 8 + 1;

    /// Append a tranche unlocking at `unlock_time`. Returns its index.
    pub fn push_tranche(&mut self, amount: u64, unlock_time: i64) -> Result<u64> {
        require!(
            self.tranches.len() < MAX_TRANCHES,
            VestingError::TrancheLimitReached
        );
        self.tranches.push(Tranche {
            amount,
            unlock_time,
            claimed: false,
        });
        self.total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(self.tranches.len() as u64 - 1)
    }

    /// Mark every payable tranche among `indices` claimed and return the
    /// total owed. Missing, immature and already-claimed indices are skipped
    /// silently so batch callers never fail halfway.
    pub fn take_payable(&mut self, indices: &[u64], now: i64) -> Result<(u64, u64)> {
        let mut total = 0u64;
        let mut paid_count = 0u64;
        for &index in indices {
            let Some(tranche) = self.tranches.get_mut(index as usize) else {
                continue;
            };
            if tranche.claimed || now < tranche.unlock_time {
                continue;
            }
            tranche.claimed = true;
            total = total
                .checked_add(tranche.amount)
                .ok_or(VestingError::MathOverflow)?;
            paid_count += 1;
        }
        self.total_claimed = self
            .total_claimed
            .checked_add(total)
            .ok_or(VestingError::MathOverflow)?;
        Ok((total, paid_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> VestingAccount {
        VestingAccount {
            recipient: Pubkey::new_unique(),
            tranches: vec![],
            total_locked: 0,
            total_claimed: 0,
            bump: 255,
        }
    }

    #[test]
    fn indices_are_stable_and_counted() {
        let mut vesting = account();
        assert_eq!(vesting.push_tranche(100, 1_000).unwrap(), 0);
        assert_eq!(vesting.push_tranche(200, 2_000).unwrap(), 1);
        assert_eq!(vesting.tranches.len(), 2);
        assert_eq!(vesting.total_locked, 300);
    }

    #[test]
    fn immature_and_missing_indices_are_skipped() {
        let mut vesting = account();
        vesting.push_tranche(100, 1_000).unwrap();
        vesting.push_tranche(200, 2_000).unwrap();

        // index 5 does not exist, index 1 is immature
        let (total, count) = vesting.take_payable(&[0, 1, 5], 1_500).unwrap();
        assert_eq!(total, 100);
        assert_eq!(count, 1);
        assert_eq!(vesting.total_claimed, 100);
    }

    #[test]
    fn unlock_pays_exactly_once() {
        let mut vesting = account();
        vesting.push_tranche(100, 1_000).unwrap();

        let (first, _) = vesting.take_payable(&[0], 1_000).unwrap();
        assert_eq!(first, 100);

        // Second unlock of the same index changes nothing.
        let (second, count) = vesting.take_payable(&[0], 9_999).unwrap();
        assert_eq!(second, 0);
        assert_eq!(count, 0);
        assert_eq!(vesting.total_claimed, 100);
    }

    #[test]
    fn duplicate_indices_in_one_batch_pay_once() {
        let mut vesting = account();
        vesting.push_tranche(100, 0).unwrap();
        let (total, count) = vesting.take_payable(&[0, 0, 0], 10).unwrap();
        assert_eq!(total, 100);
        assert_eq!(count, 1);
    }

    #[test]
    fn claimed_total_matches_claimed_tranches() {
        let mut vesting = account();
        for i in 0..6 {
            vesting.push_tranche(100, i * 100).unwrap();
        }
        let all: Vec<u64> = (0..6).collect();
        vesting.take_payable(&all, 250).unwrap();

        let claimed_sum: u64 = vesting
            .tranches
            .iter()
            .filter(|tranche| tranche.claimed)
            .map(|tranche| tranche.amount)
            .sum();
        assert_eq!(vesting.total_claimed, claimed_sum);
        assert_eq!(claimed_sum, 300); // unlock times 0, 100, 200
    }
}
