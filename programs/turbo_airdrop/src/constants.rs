//! Program constants for the Turbo Airdrop program.
//!
//! The release schedule values are deployment configuration, copied into the
//! config account at initialization.

use anchor_lang::prelude::*;

/// Seed for deriving the airdrop config PDA
pub const AIRDROP_CONFIG_SEED: &[u8] = b"airdrop_config";

/// Seed for deriving the airdrop vault PDA
pub const AIRDROP_VAULT_SEED: &[u8] = b"airdrop_vault";

/// Seed for deriving per-recipient airdrop account PDAs
pub const AIRDROP_ACCOUNT_SEED: &[u8] = b"airdrop_account";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Maximum number of release entries per recipient
pub const MAX_ENTRIES: usize = 16;

/// Grace period after activation during which a recipient must make their
/// first claim or forfeit the whole allotment (2 days)
pub const DEFAULT_GRACE_PERIOD: i64 = 2 * SECONDS_PER_DAY;

/// Share of each claim paid out immediately (25%)
pub const DEFAULT_IMMEDIATE_RELEASE_BPS: u16 = 2_500;

/// Cliff before the locked remainder starts releasing (30 days)
pub const DEFAULT_CLIFF_SECONDS: i64 = 30 * SECONDS_PER_DAY;

/// Length of one release period (30 days)
pub const DEFAULT_RELEASE_PERIOD: i64 = 30 * SECONDS_PER_DAY;

/// Number of release periods until an entry is fully unlocked
pub const DEFAULT_RELEASE_COUNT: u8 = 3;
