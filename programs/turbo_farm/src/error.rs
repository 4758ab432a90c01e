//! Error types for the Turbo Farm program.
//!
//! Every failure mode carries its own variant so callers can diagnose a
//! rejection without inspecting program state.

use anchor_lang::prelude::*;

/// Custom error codes for the Turbo Farm program.
#[error_code]
pub enum FarmError {
    // ========== Authorization ==========

    /// Caller is not the farm authority.
    #[msg("Unauthorized: caller is not the farm authority")]
    Unauthorized,

    /// Caller is not the configured point oracle.
    #[msg("Unauthorized: caller is not the point oracle")]
    NotPointOracle,

    /// Signer does not own the targeted stake or deposit.
    #[msg("Unauthorized: caller does not own this stake")]
    NotStakeOwner,

    // ========== Preconditions ==========

    /// Staking operations are paused by the admin.
    #[msg("Staking is currently paused")]
    StakingPaused,

    /// Cannot deposit, withdraw or fund with a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Withdrawal amount exceeds the caller's staked balance.
    #[msg("Withdraw amount exceeds staked balance")]
    InsufficientStakedBalance,

    /// Fungible-pool operation targeted at the NFT pool.
    #[msg("This pool holds NFTs - use the NFT deposit/withdraw path")]
    NotFungiblePool,

    /// `claim` called on the NFT pool; NFT rewards have their own claim path.
    #[msg("NFT pool rewards must be claimed through claim_nft_rewards")]
    NftPoolClaimPath,

    /// NFT operation attempted while no NFT pool exists.
    #[msg("No NFT pool has been added to this farm")]
    NoNftPool,

    /// A second NFT pool cannot be added.
    #[msg("The farm already has an NFT pool")]
    NftPoolAlreadyExists,

    /// The targeted NFT is already staked.
    #[msg("NFT is already deposited")]
    NftAlreadyStaked,

    /// The caller has no active NFT deposits.
    #[msg("No active NFT deposits for this user")]
    NoActiveDeposits,

    /// The targeted NFT deposit record has already been withdrawn.
    #[msg("NFT deposit is not active")]
    DepositNotActive,

    /// No rewards are available to claim.
    #[msg("No rewards available to claim")]
    NoRewardsAvailable,

    // ========== Time locks ==========

    /// NFT rewards cannot be claimed before the minimum hold duration.
    #[msg("Minimum NFT holding duration has not elapsed - rewards not claimable yet")]
    HoldDurationNotElapsed,

    /// The NFT cannot be withdrawn before the minimum hold duration.
    #[msg("NFT is still locked - minimum holding duration has not elapsed")]
    NftStillLocked,

    // ========== Math ==========

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow,

    // ========== Account validation ==========

    /// The remaining-accounts sweep must carry every pool, in id order.
    #[msg("All pool accounts must be passed, ordered by pool id")]
    PoolAccountsMismatch,

    /// A passed pool account does not match its expected PDA.
    #[msg("Pool account does not match expected PDA")]
    InvalidPoolAccount,

    /// A passed NFT deposit account does not match its expected PDA.
    #[msg("NFT deposit account does not match expected PDA")]
    InvalidDepositAccount,

    /// A passed escrow account does not match its expected PDA.
    #[msg("Escrow account does not match expected PDA")]
    InvalidEscrowAccount,

    /// A token account failed mint or owner validation.
    #[msg("Token account mint or owner mismatch")]
    InvalidTokenAccount,

    /// The reward vault does not hold enough tokens for the payout.
    #[msg("Insufficient reward vault funds for payout")]
    InsufficientRewardFunds,
}
