//! Instruction handlers for the Turbo Farm program.

pub mod add_pool;
pub mod admin;
pub mod claim;
pub mod claim_nft;
pub mod deposit;
pub mod deposit_nft;
pub mod fund_rewards;
pub mod initialize;
pub mod set_nft_point;
pub mod withdraw;
pub mod withdraw_all_nfts;
pub mod withdraw_nft;

pub use add_pool::*;
pub use admin::*;
pub use claim::*;
pub use claim_nft::*;
pub use deposit::*;
pub use deposit_nft::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use set_nft_point::*;
pub use withdraw::*;
pub use withdraw_all_nfts::*;
pub use withdraw_nft::*;
