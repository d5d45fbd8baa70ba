use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{claim_digest, recover_signer, transfer_token};

/**
 * Account context for claiming from a boost
 *
 * Redeems one guard-signed entitlement: verifies the window, the claim
 * receipt, and the signature, then debits the boost balance and transfers
 * the amount from the vault to the recipient.
 *
 * Access Control: Permissionless submission. The recipient does not need to
 * sign; the guard's signature binds the payout to the recipient's address.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The boost being claimed from
    /// - Balance is debited on success
    #[account(
        mut,
        seeds = [BOOST_SEED.as_bytes(), boost.id.to_le_bytes().as_ref()],
        bump = boost.bump
    )]
    pub boost: Account<'info, Boost>,

    /// Claim receipt for this (boost, recipient) pair
    /// - Created on first claim; a marked receipt blocks any replay
    /// - Derived from: ["claim", boost_key, recipient]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimReceipt::LEN,
        seeds = [CLAIM_SEED.as_bytes(), boost.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub claim_receipt: Account<'info, ClaimReceipt>,

    /// Token vault holding the boost's deposit
    /// - Controlled by the boost PDA
    /// - Derived from: ["vault", boost_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), boost.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The recipient of the claim
    /// CHECK: Bound by the guard signature, which covers this address
    pub recipient: AccountInfo<'info>,

    /// Recipient's token account to receive the tokens
    /// - Must be owned by the recipient
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = boost.token_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the boost's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == boost.token_mint @ BoostError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// Transaction fee payer, also funds the claim receipt account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a single guard-signed claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount the guard authorized for this recipient
 * @param signature - 65-byte recoverable secp256k1 signature from the guard
 *
 * Validation order (most specific failure first, no mutation until all
 * checks pass):
 * 1. Claim window contains the current time
 * 2. Receipt not already marked
 * 3. Signature recovers to the boost's guard over the full claim domain
 * 4. Balance covers the amount (checked by the debit itself)
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, signature: [u8; 65]) -> Result<()> {
    let boost = &mut ctx.accounts.boost;
    let claim_receipt = &mut ctx.accounts.claim_receipt;
    let recipient = ctx.accounts.recipient.key();

    // ===== VALIDATION PHASE =====

    let now = Clock::get()?.unix_timestamp;
    boost.check_active(now)?;

    require!(!claim_receipt.claimed, BoostError::RecipientAlreadyClaimed);

    let digest = claim_digest(CHAIN_ID, &crate::ID, boost.id, &recipient, amount);
    let signer = recover_signer(&digest, &signature);
    require!(signer == Some(boost.guard), BoostError::InvalidSignature);

    // ===== EFFECTS PHASE (State Updates) =====

    // Debit fails InsufficientBalance before any state is touched
    boost.debit(amount)?;
    claim_receipt.claimed = true;

    let id_bytes = boost.id.to_le_bytes();
    let boost_bump = boost.bump;
    let boost_key = boost.key();
    let remaining_balance = boost.balance;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[BOOST_SEED.as_bytes(), id_bytes.as_ref(), &[boost_bump]];
    let signer_seeds = &[&seeds[..]];

    transfer_token(
        ctx.accounts.boost.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer_seeds),
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(BoostClaimed {
        boost: boost_key,
        recipient,
        amount,
        balance: remaining_balance,
    });

    Ok(())
}
