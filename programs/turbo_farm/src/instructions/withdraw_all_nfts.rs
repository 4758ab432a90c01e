//! Withdraw-everything handler for the NFT pool.
//!
//! Processes the caller's deposits in `remaining_accounts`, three accounts
//! per NFT: `[deposit record, escrow, destination token account]`. Every
//! processed deposit must be mature; the pool is settled once and the pending
//! reward credited once, then each NFT is returned in turn.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::events::NftWithdrawEvent;
use crate::utils::credit_box_reward;
use crate::state::{BoxReward, Farm, NftDeposit, Pool, UserStake};

/// Number of remaining accounts per withdrawn NFT.
const ACCOUNTS_PER_NFT: usize = 3;

/// Accounts required for withdrawing all NFTs.
#[derive(Accounts)]
pub struct WithdrawAllNfts<'info> {
    /// The user withdrawing their NFTs.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The farm.
    #[account(
        seeds = [FARM_SEED, farm.reward_mint.as_ref()],
        bump = farm.bump
    )]
    pub farm: Account<'info, Farm>,

    /// The NFT pool.
    #[account(
        mut,
        seeds = [POOL_SEED, farm.key().as_ref(), &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.farm == farm.key() @ FarmError::InvalidPoolAccount,
        constraint = pool.is_nft() @ FarmError::NoNftPool
    )]
    pub pool: Account<'info, Pool>,

    /// User's stake account on the NFT pool.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ FarmError::NotStakeOwner
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's box-reward balance.
    #[account(
        init_if_needed,
        payer = user,
        space = BoxReward::LEN,
        seeds = [BOX_REWARD_SEED, farm.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub box_reward: Account<'info, BoxReward>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw every NFT passed in `remaining_accounts`.
pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, WithdrawAllNfts<'info>>) -> Result<()> {
    let remaining = ctx.remaining_accounts;
    require!(
        !remaining.is_empty() && remaining.len() % ACCOUNTS_PER_NFT == 0,
        FarmError::InvalidDepositAccount
    );
    require!(
        ctx.accounts.user_stake.nft_count > 0,
        FarmError::NoActiveDeposits
    );

    let farm = &ctx.accounts.farm;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let min_hold = farm.min_nft_hold_duration;
    let farm_key = farm.key();
    let user_key = ctx.accounts.user.key();

    // Settle once; every deposit shares the same accumulator state.
    let pool = &mut ctx.accounts.pool;
    pool.settle(now, farm.reward_per_second, farm.total_alloc_point)?;
    let acc = pool.acc_reward_per_share;

    let pending = ctx.accounts.user_stake.pending_reward(acc)?;
    if pending > 0 {
        credit_box_reward(
            &mut ctx.accounts.box_reward,
            &ctx.accounts.farm,
            &user_key,
            ctx.bumps.box_reward,
            pending,
            now,
        )?;
        ctx.accounts.user_stake.total_claimed = ctx
            .accounts
            .user_stake
            .total_claimed
            .checked_add(pending)
            .ok_or(FarmError::MathOverflow)?;
    }

    let reward_mint_key = ctx.accounts.farm.reward_mint;
    let seeds = &[
        FARM_SEED,
        reward_mint_key.as_ref(),
        &[ctx.accounts.farm.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let mut withdrawn_points = 0u64;
    let mut withdrawn_count = 0u64;

    for chunk in remaining.chunks(ACCOUNTS_PER_NFT) {
        let deposit_info = &chunk[0];
        let escrow_info = &chunk[1];
        let destination_info = &chunk[2];

        let mut deposit = {
            let deposit_data = deposit_info.try_borrow_data()?;
            NftDeposit::try_deserialize(&mut deposit_data.as_ref())?
        };

        let (expected_deposit, _bump) = Pubkey::find_program_address(
            &[
                NFT_DEPOSIT_SEED,
                farm_key.as_ref(),
                deposit.nft_mint.as_ref(),
            ],
            ctx.program_id,
        );
        require!(
            deposit_info.key() == expected_deposit,
            FarmError::InvalidDepositAccount
        );
        require!(deposit.depositor == user_key, FarmError::NotStakeOwner);
        require!(deposit.is_active, FarmError::DepositNotActive);
        require!(deposit.is_mature(now, min_hold), FarmError::NftStillLocked);

        let (expected_escrow, _bump) = Pubkey::find_program_address(
            &[
                NFT_ESCROW_SEED,
                farm_key.as_ref(),
                deposit.nft_mint.as_ref(),
            ],
            ctx.program_id,
        );
        require!(
            escrow_info.key() == expected_escrow,
            FarmError::InvalidEscrowAccount
        );

        require!(
            destination_info.owner == &token::ID,
            FarmError::InvalidTokenAccount
        );
        let destination = {
            let destination_data = destination_info.try_borrow_data()?;
            TokenAccount::try_deserialize(&mut destination_data.as_ref())?
        };
        require!(
            destination.mint == deposit.nft_mint && destination.owner == user_key,
            FarmError::InvalidTokenAccount
        );

        // Deactivate the record before moving the token.
        deposit.is_active = false;
        {
            let mut deposit_data = deposit_info.try_borrow_mut_data()?;
            let mut writer = deposit_data.as_mut();
            deposit.try_serialize(&mut writer)?;
        }

        let cpi_accounts = Transfer {
            from: escrow_info.clone(),
            to: destination_info.clone(),
            authority: ctx.accounts.farm.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::transfer(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
            1,
        )?;

        emit!(NftWithdrawEvent {
            user: user_key,
            nft_mint: deposit.nft_mint,
            point: deposit.point,
            timestamp: now,
        });

        withdrawn_points = withdrawn_points
            .checked_add(deposit.point)
            .ok_or(FarmError::MathOverflow)?;
        withdrawn_count = withdrawn_count
            .checked_add(1)
            .ok_or(FarmError::MathOverflow)?;
    }

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.amount = user_stake
        .amount
        .checked_sub(withdrawn_points)
        .ok_or(FarmError::MathUnderflow)?;
    user_stake.nft_count = user_stake
        .nft_count
        .checked_sub(withdrawn_count)
        .ok_or(FarmError::MathUnderflow)?;
    if user_stake.nft_count == 0 {
        user_stake.first_deposit_at = 0;
    }
    user_stake.reset_debt(acc)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_sub(withdrawn_points)
        .ok_or(FarmError::MathUnderflow)?;

    msg!("Withdrew {} NFTs", withdrawn_count);

    Ok(())
}
