use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINTS_DENOMINATOR, MAX_ENTRIES};
use crate::error::AirdropError;

/// One linear-release entry, created by a successful `claim`.
///
/// The locked remainder stays untouchable through the cliff, then unlocks in
/// equal steps at `created_at + cliff + k * period` for `k = 1..=count`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub total_locked: u64,
    pub released: u64,
    pub created_at: i64,
}

impl ReleaseEntry {
    pub const LEN: usize = 8 + 8 + 8;

    /// Amount unlocked by `now`, released or not.
    pub fn matured(&self, now: i64, cliff: i64, period: i64, count: u8) -> Result<u64> {
        if count == 0 || period <= 0 {
            return Ok(self.total_locked);
        }
        let elapsed = now
            .saturating_sub(self.created_at)
            .saturating_sub(cliff);
        if elapsed < period {
            return Ok(0);
        }
        let periods = (elapsed / period).min(count as i64) as u128;
        let matured = (self.total_locked as u128)
            .checked_mul(periods)
            .ok_or(AirdropError::MathOverflow)?
            .checked_div(count as u128)
            .ok_or(AirdropError::MathOverflow)?;
        Ok(u64::try_from(matured).map_err(|_| AirdropError::MathOverflow)?)
    }

    /// Newly releasable amount: matured minus already released.
    pub fn releasable(&self, now: i64, cliff: i64, period: i64, count: u8) -> Result<u64> {
        let matured = self.matured(now, cliff, period, count)?;
        matured
            .checked_sub(self.released)
            .ok_or(AirdropError::MathUnderflow.into())
    }
}

/// Status snapshot returned by `get_user_status`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStatus {
    /// Sum of amounts eligible for release right now.
    pub claimable: u64,
    /// Sum of amounts still locked.
    pub lock: u64,
}

/// Per-recipient airdrop ledger.
#[account]
pub struct AirdropAccount {
    pub recipient: Pubkey,
    /// Sum of all claim amounts ever registered.
    pub total_allotted: u64,
    /// Sum of all payouts, immediate and released.
    pub total_paid: u64,
    /// Set when the recipient misses the activation window; permanent.
    pub burnt: bool,
    /// Timestamp of the first accepted claim; zero until activated.
    pub activated_at: i64,
    pub entries: Vec<ReleaseEntry>,
    pub bump: u8,
}

impl AirdropAccount {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1 + 8 + (4 + ReleaseEntry::LEN * MAX_ENTRIES) + 1;

    /// Register an accepted claim: the immediate share is considered paid at
    /// once, the remainder becomes a new release entry. Returns the
    /// immediately payable amount.
    pub fn register_claim(&mut self, amount: u64, immediate_bps: u16, now: i64) -> Result<u64> {
        require!(
            self.entries.len() < MAX_ENTRIES,
            AirdropError::EntryLimitReached
        );

        let immediate = (amount as u128)
            .checked_mul(immediate_bps as u128)
            .ok_or(AirdropError::MathOverflow)?
            .checked_div(BASIS_POINTS_DENOMINATOR as u128)
            .ok_or(AirdropError::MathOverflow)? as u64;
        let locked = amount
            .checked_sub(immediate)
            .ok_or(AirdropError::MathUnderflow)?;

        self.entries.push(ReleaseEntry {
            total_locked: locked,
            released: 0,
            created_at: now,
        });
        self.total_allotted = self
            .total_allotted
            .checked_add(amount)
            .ok_or(AirdropError::MathOverflow)?;
        self.total_paid = self
            .total_paid
            .checked_add(immediate)
            .ok_or(AirdropError::MathOverflow)?;
        if self.activated_at == 0 {
            self.activated_at = now;
        }

        Ok(immediate)
    }

    /// Release whatever entry `index` has matured since its last release.
    /// An out-of-range index is a no-op, like a fully-released entry.
    pub fn release_entry(
        &mut self,
        index: u64,
        now: i64,
        cliff: i64,
        period: i64,
        count: u8,
    ) -> Result<u64> {
        let Some(entry) = self.entries.get_mut(index as usize) else {
            return Ok(0);
        };
        let releasable = entry.releasable(now, cliff, period, count)?;
        entry.released = entry
            .released
            .checked_add(releasable)
            .ok_or(AirdropError::MathOverflow)?;
        self.total_paid = self
            .total_paid
            .checked_add(releasable)
            .ok_or(AirdropError::MathOverflow)?;
        Ok(releasable)
    }

    /// Release every maturable portion across all entries.
    pub fn release_all(&mut self, now: i64, cliff: i64, period: i64, count: u8) -> Result<u64> {
        let mut total = 0u64;
        for entry in self.entries.iter_mut() {
            let releasable = entry.releasable(now, cliff, period, count)?;
            entry.released = entry
                .released
                .checked_add(releasable)
                .ok_or(AirdropError::MathOverflow)?;
            total = total
                .checked_add(releasable)
                .ok_or(AirdropError::MathOverflow)?;
        }
        self.total_paid = self
            .total_paid
            .checked_add(total)
            .ok_or(AirdropError::MathOverflow)?;
        Ok(total)
    }

    /// Current `{claimable, lock}` split across all entries.
    pub fn status(&self, now: i64, cliff: i64, period: i64, count: u8) -> Result<UserStatus> {
        let mut claimable = 0u64;
        let mut lock = 0u64;
        for entry in self.entries.iter() {
            let matured = entry.matured(now, cliff, period, count)?;
            claimable = claimable
                .checked_add(
                    matured
                        .checked_sub(entry.released)
                        .ok_or(AirdropError::MathUnderflow)?,
                )
                .ok_or(AirdropError::MathOverflow)?;
            lock = lock
                .checked_add(
                    entry
                        .total_locked
                        .checked_sub(matured)
                        .ok_or(AirdropError::MathUnderflow)?,
                )
                .ok_or(AirdropError::MathOverflow)?;
        }
        Ok(UserStatus { claimable, lock })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const CLIFF: i64 = DEFAULT_CLIFF_SECONDS;
    const PERIOD: i64 = DEFAULT_RELEASE_PERIOD;
    const COUNT: u8 = DEFAULT_RELEASE_COUNT;

    fn day(n: i64) -> i64 {
        n * SECONDS_PER_DAY
    }

    fn account() -> AirdropAccount {
        AirdropAccount {
            recipient: Pubkey::new_unique(),
            total_allotted: 0,
            total_paid: 0,
            burnt: false,
            activated_at: 0,
            entries: vec![],
            bump: 255,
        }
    }

    fn assert_conservation(account: &AirdropAccount, now: i64) {
        let status = account.status(now, CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(
            status.claimable + status.lock,
            account.total_allotted - account.total_paid
        );
    }

    #[test]
    fn immediate_share_is_paid_up_front() {
        let mut account = account();
        let immediate = account
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();
        assert_eq!(immediate, 25);
        assert_eq!(account.total_allotted, 100);
        assert_eq!(account.total_paid, 25);
        assert_eq!(account.entries[0].total_locked, 75);
        assert_eq!(account.activated_at, 0); // now was 0; first nonzero claim sets it

        assert_conservation(&account, 0);
    }

    #[test]
    fn nothing_releases_before_the_cliff_gate() {
        let mut account = account();
        account
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();

        for now in [day(1), day(31), day(59)] {
            assert_eq!(account.release_all(now, CLIFF, PERIOD, COUNT).unwrap(), 0);
            assert_conservation(&account, now);
        }
    }

    #[test]
    fn releases_step_monthly_after_the_cliff() {
        let mut account = account();
        account
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();

        assert_eq!(account.release_all(day(60), CLIFF, PERIOD, COUNT).unwrap(), 25);
        assert_eq!(account.release_all(day(90), CLIFF, PERIOD, COUNT).unwrap(), 25);
        assert_eq!(account.release_all(day(120), CLIFF, PERIOD, COUNT).unwrap(), 25);
        assert_eq!(account.total_paid, 100);

        // Past the horizon nothing is left.
        assert_eq!(account.release_all(day(500), CLIFF, PERIOD, COUNT).unwrap(), 0);
        let status = account.status(day(500), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(status, UserStatus { claimable: 0, lock: 0 });
    }

    #[test]
    fn release_is_idempotent_within_a_period() {
        let mut account = account();
        account
            .register_claim(200, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();

        assert_eq!(account.release_all(day(60), CLIFF, PERIOD, COUNT).unwrap(), 50);
        // Nothing new has matured two days later.
        assert_eq!(account.release_entry(0, day(62), CLIFF, PERIOD, COUNT).unwrap(), 0);
        assert_eq!(account.release_all(day(62), CLIFF, PERIOD, COUNT).unwrap(), 0);
        assert_conservation(&account, day(62));
    }

    #[test]
    fn out_of_range_entry_is_a_noop() {
        let mut account = account();
        account
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();
        assert_eq!(account.release_entry(7, day(120), CLIFF, PERIOD, COUNT).unwrap(), 0);
    }

    #[test]
    fn skipped_periods_are_caught_up_not_lost() {
        let mut account = account();
        account
            .register_claim(200, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();

        // First release claimed late, at day 121: all three chunks at once.
        assert_eq!(
            account.release_all(day(121), CLIFF, PERIOD, COUNT).unwrap(),
            150
        );
        assert_eq!(account.total_paid, 200);
    }

    #[test]
    fn remaining_balance_is_nonincreasing_over_time() {
        let mut account = account();
        account
            .register_claim(300, DEFAULT_IMMEDIATE_RELEASE_BPS, day(1))
            .unwrap();
        account
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, day(2))
            .unwrap();

        let mut previous = u64::MAX;
        for now in [day(2), day(30), day(61), day(62), day(95), day(122), day(200)] {
            let status = account.status(now, CLIFF, PERIOD, COUNT).unwrap();
            let remaining = status.claimable + status.lock;
            assert!(remaining <= previous);
            assert_conservation(&account, now);
            previous = remaining;
        }
    }

    #[test]
    fn reference_two_claimer_timeline() {
        // Mirrors the production trace: 100 and 200 allotted at day 0, first
        // locked chunks at day 60, fully released by day 120.
        let mut first = account();
        let mut second = account();
        first
            .register_claim(100, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();
        second
            .register_claim(200, DEFAULT_IMMEDIATE_RELEASE_BPS, 0)
            .unwrap();

        // Day 31: only the immediate quarter has been paid.
        assert_eq!(first.release_all(day(31), CLIFF, PERIOD, COUNT).unwrap(), 0);
        assert_eq!(second.release_all(day(31), CLIFF, PERIOD, COUNT).unwrap(), 0);
        assert_eq!(first.total_paid, 25);
        assert_eq!(second.total_paid, 50);

        let status = first.status(day(31), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(status.claimable + status.lock, 75);
        let status = second.status(day(31), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(status.claimable + status.lock, 150);

        // First claimer keeps claiming monthly, second catches up late.
        first.release_all(day(61), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(first.total_paid, 50);
        first.release_all(day(91), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(first.total_paid, 75);
        first.release_all(day(121), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(first.total_paid, 100);
        second.release_all(day(121), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(second.total_paid, 200);

        // Further claims are no-ops.
        assert_eq!(first.release_all(day(151), CLIFF, PERIOD, COUNT).unwrap(), 0);
        assert_eq!(second.release_all(day(151), CLIFF, PERIOD, COUNT).unwrap(), 0);
        let status = first.status(day(151), CLIFF, PERIOD, COUNT).unwrap();
        assert_eq!(status, UserStatus { claimable: 0, lock: 0 });
    }
}
