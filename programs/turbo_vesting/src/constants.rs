//! Program constants for the Turbo Vesting program.

use anchor_lang::prelude::*;

/// Seed for deriving the vesting config PDA
pub const VESTING_CONFIG_SEED: &[u8] = b"vesting_config";

/// Seed for deriving the vesting vault PDA
pub const VESTING_VAULT_SEED: &[u8] = b"vesting_vault";

/// Seed for deriving per-recipient vesting account PDAs
pub const VESTING_ACCOUNT_SEED: &[u8] = b"vesting_account";

/// Maximum number of addresses on the locker allow-list
pub const MAX_LOCKERS: usize = 16;

/// Maximum number of tranches per recipient
pub const MAX_TRANCHES: usize = 64;
