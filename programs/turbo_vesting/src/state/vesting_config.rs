use anchor_lang::prelude::*;

use crate::constants::MAX_LOCKERS;

/// Global vesting configuration.
///
/// `lockers` is a capability list: only identities on it may create tranches.
/// The lock period is fixed at deployment and may be zero.
#[account]
pub struct VestingConfig {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,

    /// Seconds between `lock` and the tranche's unlock time.
    pub lock_period: i64,

    /// Addresses allowed to call `lock`.
    pub lockers: Vec<Pubkey>,

    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingConfig {
    pub const LEN: usize = 8 + (32 * 3) + 8 + (4 + 32 * MAX_LOCKERS) + 2;

    pub fn is_locker(&self, key: &Pubkey) -> bool {
        self.lockers.iter().any(|locker| locker == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locker_membership() {
        let locker = Pubkey::new_unique();
        let config = VestingConfig {
            authority: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            lock_period: 0,
            lockers: vec![locker],
            bump: 255,
            vault_bump: 255,
        };
        assert!(config.is_locker(&locker));
        assert!(!config.is_locker(&Pubkey::new_unique()));
    }
}
