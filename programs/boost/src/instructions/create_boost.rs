use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new boost
 *
 * This instruction initializes a new claim campaign with a sequential id:
 * - Creates or updates the global counter PDA that assigns boost ids
 * - Creates the boost PDA holding the campaign parameters
 * - Creates a token vault PDA to hold the deposit
 * - Transfers the deposit from the owner into the vault atomically
 *
 * Access Control: Only the owner (depositor) can create a boost
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateBoost<'info> {
    /// Global counter account (PDA) assigning sequential boost ids
    /// - Derived from: ["boost_count"]
    #[account(
        init_if_needed,
        payer = owner,
        space = BoostCounter::LEN,
        seeds = [COUNTER_SEED.as_bytes()],
        bump
    )]
    pub counter: Account<'info, BoostCounter>,

    /// The main boost account (PDA)
    /// - Stores all campaign parameters and the remaining balance
    /// - Derived from: ["boost", counter.count + 1]
    /// - `init` rejects reuse, so an id can never be taken twice
    #[account(
        init,
        payer = owner,
        space = Boost::LEN,
        seeds = [
            BOOST_SEED.as_bytes(),
            (counter.count + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub boost: Account<'info, Boost>,

    /// Token vault account (PDA) that holds the deposit
    /// - Controlled by the boost PDA as token authority
    /// - Derived from: ["vault", boost_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = boost,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), boost.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the deposit
    /// - Must be owned by the owner signer
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the boost
    /// - Funds the deposit and can sweep the remainder after the window ends
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new boost with a sequential id and deposits its token pool
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens deposited for distribution
 * @param guard - Ethereum-style address whose signatures authorize claims
 * @param start_time - Start of the claim window (inclusive); 0 for "starts immediately"
 * @param end_time - End of the claim window (exclusive); i64::MAX for "never expires"
 */
pub fn handle_create_boost(
    ctx: Context<CreateBoost>,
    amount: u64,
    guard: [u8; 20],
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    require!(amount > 0, BoostError::InvalidDepositAmount);
    require!(guard != [0u8; 20], BoostError::InvalidGuard);
    require!(start_time <= end_time, BoostError::InvalidWindow);

    let counter = &mut ctx.accounts.counter;
    let boost = &mut ctx.accounts.boost;

    // Assign the next sequential id with overflow protection
    let id = counter
        .count
        .checked_add(1)
        .ok_or(BoostError::ArithmeticOverflow)?;
    counter.count = id;

    boost.bump = ctx.bumps.boost;
    boost.id = id;
    boost.owner = ctx.accounts.owner.key();
    boost.guard = guard;
    boost.token_mint = ctx.accounts.token_mint.key();
    boost.token_vault = ctx.accounts.token_vault.key();
    boost.initial_amount = amount;
    boost.balance = amount;
    boost.start_time = start_time;
    boost.end_time = end_time;

    // Transfer the deposit from owner to vault in the same transaction,
    // so a boost record never exists without its backing tokens
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for owner-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(BoostCreated {
        boost: boost.key(),
        id,
        owner: ctx.accounts.owner.key(),
        guard,
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        amount,
        start_time,
        end_time,
    });

    Ok(())
}
