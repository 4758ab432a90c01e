use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub user: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ClaimEvent {
    pub user: Pubkey,
    pub pool_id: u64,
    pub reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct NftDepositEvent {
    pub user: Pubkey,
    pub nft_mint: Pubkey,
    pub point: u64,
    pub timestamp: i64,
}

#[event]
pub struct NftWithdrawEvent {
    pub user: Pubkey,
    pub nft_mint: Pubkey,
    pub point: u64,
    pub timestamp: i64,
}

#[event]
pub struct BoxRewardCreditedEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateChangedEvent {
    pub old_rate: u64,
    pub new_rate: u64,
    pub timestamp: i64,
}
