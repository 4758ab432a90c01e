use anchor_lang::prelude::*;

#[event]
pub struct LockEvent {
    pub locker: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub unlock_time: i64,
    pub tranche_index: u64,
}

#[event]
pub struct UnlockEvent {
    pub recipient: Pubkey,
    pub amount: u64,
    pub tranches_paid: u64,
    pub timestamp: i64,
}

#[event]
pub struct LockersChangedEvent {
    pub enabled: bool,
    pub count: u64,
    pub timestamp: i64,
}
