use anchor_lang::prelude::*;

/// Global airdrop configuration.
///
/// The release schedule lives here rather than as hardcoded numbers; the
/// defaults in `constants` are copied in at initialization.
#[account]
pub struct AirdropConfig {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,

    /// When claiming opens; zero while unset.
    pub start_claim_ts: i64,
    /// A recipient's first claim must land within this window after
    /// `start_claim_ts` or their whole allotment is forfeited.
    pub grace_period: i64,

    /// Share of each claim paid out immediately, in basis points.
    pub immediate_release_bps: u16,
    /// Cliff before the locked remainder starts releasing.
    pub cliff_seconds: i64,
    /// Length of one release period.
    pub release_period_seconds: i64,
    /// Number of release periods until an entry is fully unlocked.
    pub release_count: u8,

    pub bump: u8,
    pub vault_bump: u8,
}

impl AirdropConfig {
    pub const LEN: usize = 8 + (32 * 3) + 8 + 8 + 2 + 8 + 8 + 1 + 2;

    pub fn claim_started(&self, now: i64) -> bool {
        self.start_claim_ts > 0 && now >= self.start_claim_ts
    }

    /// True while first claims are still accepted.
    pub fn window_open(&self, now: i64) -> bool {
        self.claim_started(now) && now <= self.start_claim_ts.saturating_add(self.grace_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn config() -> AirdropConfig {
        AirdropConfig {
            authority: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            start_claim_ts: 0,
            grace_period: DEFAULT_GRACE_PERIOD,
            immediate_release_bps: DEFAULT_IMMEDIATE_RELEASE_BPS,
            cliff_seconds: DEFAULT_CLIFF_SECONDS,
            release_period_seconds: DEFAULT_RELEASE_PERIOD,
            release_count: DEFAULT_RELEASE_COUNT,
            bump: 255,
            vault_bump: 255,
        }
    }

    #[test]
    fn window_tracks_activation() {
        let mut cfg = config();
        assert!(!cfg.claim_started(i64::MAX));

        cfg.start_claim_ts = 1_000;
        assert!(!cfg.claim_started(999));
        assert!(cfg.window_open(1_000));
        assert!(cfg.window_open(1_000 + DEFAULT_GRACE_PERIOD));
        assert!(!cfg.window_open(1_001 + DEFAULT_GRACE_PERIOD));
    }
}
