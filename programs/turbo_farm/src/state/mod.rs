//! State structures for the Turbo Farm program.

pub mod box_reward;
pub mod farm;
pub mod nft_deposit;
pub mod nft_point;
pub mod pool;
pub mod user_stake;

pub use box_reward::*;
pub use farm::*;
pub use nft_deposit::*;
pub use nft_point::*;
pub use pool::*;
pub use user_stake::*;
