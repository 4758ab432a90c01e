use anchor_lang::prelude::*;

#[event]
pub struct ClaimRegisteredEvent {
    pub recipient: Pubkey,
    pub amount: u64,
    pub immediate: u64,
    pub locked: u64,
    pub timestamp: i64,
}

#[event]
pub struct VestingReleasedEvent {
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct AirdropBurntEvent {
    pub recipient: Pubkey,
    pub timestamp: i64,
}
