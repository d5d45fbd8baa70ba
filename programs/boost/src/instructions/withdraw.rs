use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for withdrawing the remaining balance
 *
 * After the claim window ends, the owner reclaims whatever the guard never
 * unlocked. The boost account stays open with balance zero, so the campaign
 * record and every claim receipt remain auditable.
 *
 * Access Control: Only the owner can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawRemaining<'info> {
    /// The boost to withdraw from
    /// - Balance is swept to zero; the account is not closed
    #[account(
        mut,
        seeds = [BOOST_SEED.as_bytes(), boost.id.to_le_bytes().as_ref()],
        bump = boost.bump
    )]
    pub boost: Account<'info, Boost>,

    /// Token vault containing the remaining tokens
    /// - Controlled by the boost PDA
    /// - Derived from: ["vault", boost_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), boost.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the remaining tokens
    /// - Must be owned by the owner
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = boost.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the boost's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == boost.token_mint @ BoostError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the boost
    /// - Must match the owner stored in the boost state
    #[account(
        mut,
        constraint = owner.key() == boost.owner @ BoostError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws the remaining balance after the claim window ends
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Rules:
 * - The window must have ended (claims that would race this sweep are
 *   already rejected as BoostEnded)
 * - There must be a balance left; a drained boost cannot be swept again
 * - Only the owner can call this function
 */
pub fn handle_withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
    let boost = &mut ctx.accounts.boost;

    let now = Clock::get()?.unix_timestamp;
    let remaining = boost.withdrawable(now)?;

    // Sweep through the same debit path claims use
    boost.debit(remaining)?;

    let id_bytes = boost.id.to_le_bytes();
    let boost_bump = boost.bump;
    let boost_key = boost.key();

    let seeds = &[BOOST_SEED.as_bytes(), id_bytes.as_ref(), &[boost_bump]];
    let signer_seeds = &[&seeds[..]];

    transfer_token(
        ctx.accounts.boost.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        remaining,
        ctx.accounts.token_mint.decimals,
        Some(signer_seeds),
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(RemainingWithdrawn {
        boost: boost_key,
        owner: ctx.accounts.owner.key(),
        amount: remaining,
    });

    Ok(())
}
