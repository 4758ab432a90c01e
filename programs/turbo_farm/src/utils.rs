//! Shared helpers: remaining-accounts processing and box-reward crediting.

use anchor_lang::prelude::*;

use crate::constants::{NFT_POINT_SEED, POOL_SEED};
use crate::error::FarmError;
use crate::events::BoxRewardCreditedEvent;
use crate::state::{BoxReward, Farm, NftPoint, Pool};

/// Force-settle every pool of the farm up to `now`.
///
/// `pool_accounts` must carry all `farm.pool_count` pool accounts ordered by
/// pool id; each is verified against its expected PDA, settled under the
/// farm's *current* parameters and written back. Reward-rate and weight
/// changes call this first so historical accrual is computed under the old
/// parameters.
///
/// `set_alloc` optionally rewrites one pool's allocation weight after its
/// settlement; the pool's previous weight is returned so the caller can
/// adjust `total_alloc_point`.
pub fn sync_all_pools<'info>(
    farm: &Farm,
    farm_key: &Pubkey,
    program_id: &Pubkey,
    pool_accounts: &[AccountInfo<'info>],
    now: i64,
    set_alloc: Option<(u64, u64)>,
) -> Result<Option<u64>> {
    require!(
        pool_accounts.len() as u64 == farm.pool_count,
        FarmError::PoolAccountsMismatch
    );

    let mut previous_alloc = None;

    for (index, pool_info) in pool_accounts.iter().enumerate() {
        let pool_id = index as u64;
        let pool_id_bytes = pool_id.to_le_bytes();

        let (expected_key, _bump) = Pubkey::find_program_address(
            &[POOL_SEED, farm_key.as_ref(), &pool_id_bytes],
            program_id,
        );
        require!(
            pool_info.key() == expected_key,
            FarmError::InvalidPoolAccount
        );

        let mut pool_data = pool_info.try_borrow_mut_data()?;
        let mut pool = Pool::try_deserialize(&mut pool_data.as_ref())?;

        pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;

        if let Some((target_id, new_alloc)) = set_alloc {
            if target_id == pool_id {
                previous_alloc = Some(pool.alloc_point);
                pool.alloc_point = new_alloc;
            }
        }

        let mut writer = pool_data.as_mut();
        pool.try_serialize(&mut writer)?;
    }

    if let Some((target_id, _)) = set_alloc {
        if previous_alloc.is_none() {
            msg!("pool {} not found in sweep", target_id);
            return Err(FarmError::InvalidPoolAccount.into());
        }
    }

    Ok(previous_alloc)
}

/// Look up an NFT's staking weight from the point oracle mapping.
///
/// A missing, foreign or malformed mapping account resolves to weight 0; a
/// weightless token must never fail a deposit.
pub fn resolve_nft_point(
    farm_key: &Pubkey,
    nft_mint: &Pubkey,
    point_info: &AccountInfo,
    program_id: &Pubkey,
) -> u64 {
    let (expected_key, _bump) = Pubkey::find_program_address(
        &[NFT_POINT_SEED, farm_key.as_ref(), nft_mint.as_ref()],
        program_id,
    );
    if point_info.key() != expected_key || point_info.owner != program_id {
        return 0;
    }

    let point_data = match point_info.try_borrow_data() {
        Ok(data) => data,
        Err(_) => return 0,
    };
    match NftPoint::try_deserialize(&mut point_data.as_ref()) {
        Ok(mapping) => mapping.point,
        Err(_) => 0,
    }
}

/// Credit a user's box-reward balance, initializing the account on first use.
///
/// The box-credit payout path never moves tokens; the game backend converts
/// the credit into loot boxes off-program.
pub fn credit_box_reward(
    box_reward: &mut Account<BoxReward>,
    farm: &Account<Farm>,
    user: &Pubkey,
    bump: u8,
    amount: u64,
    now: i64,
) -> Result<()> {
    if box_reward.owner == Pubkey::default() {
        box_reward.farm = farm.key();
        box_reward.owner = *user;
        box_reward.bump = bump;
    }
    box_reward.amount = box_reward
        .amount
        .checked_add(amount)
        .ok_or(FarmError::MathOverflow)?;

    emit!(BoxRewardCreditedEvent {
        user: *user,
        amount,
        timestamp: now,
    });
    msg!("Credited {} box rewards to {}", amount, user);

    Ok(())
}
