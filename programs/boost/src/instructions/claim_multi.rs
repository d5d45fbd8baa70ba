use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{claim_digest, recover_signer, transfer_token};

/**
 * Account context for claiming on behalf of multiple recipients
 *
 * Settles a batch of guard-signed entitlements against one boost as a
 * single atomic unit. The per-recipient accounts travel in
 * `remaining_accounts` as consecutive pairs:
 *
 *   [claim receipt PDA, recipient token account] * recipients.len()
 *
 * The receipt PDA for recipient R is ["claim", boost_key, R]; it must not
 * exist yet (it is created and marked here).
 *
 * Access Control: Permissionless submission; every payout is bound to its
 * recipient by the guard's signature.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimMulti<'info> {
    /// The boost being claimed from
    /// - Balance is debited once by the batch total on success
    #[account(
        mut,
        seeds = [BOOST_SEED.as_bytes(), boost.id.to_le_bytes().as_ref()],
        bump = boost.bump
    )]
    pub boost: Account<'info, Boost>,

    /// Token vault holding the boost's deposit
    /// - Controlled by the boost PDA
    /// - Derived from: ["vault", boost_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), boost.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the boost's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == boost.token_mint @ BoostError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// Transaction fee payer, also funds the claim receipt accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for receipt account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Sums a batch's amounts with overflow protection.
pub fn batch_total(amounts: &[u64]) -> Result<u64> {
    let mut total: u64 = 0;
    for amount in amounts {
        total = total
            .checked_add(*amount)
            .ok_or(BoostError::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// Validates a batch's replay-sensitive inputs, reporting the first error
/// in index order.
///
/// Checks that the recipient, amount, signature, and claimed-flag slices
/// have matching lengths, that no recipient appears twice in the batch,
/// and that no entry has already been redeemed. `already_claimed[i]` is
/// the receipt flag read for `recipients[i]`. Pure: performs no account
/// access and no mutation.
pub fn check_batch_entries(
    recipients: &[Pubkey],
    amounts: &[u64],
    signatures: &[[u8; 65]],
    already_claimed: &[bool],
) -> Result<()> {
    require!(
        recipients.len() == amounts.len() && recipients.len() == signatures.len(),
        BoostError::LengthMismatch
    );
    require!(
        recipients.len() == already_claimed.len(),
        BoostError::LengthMismatch
    );

    for (i, recipient) in recipients.iter().enumerate() {
        // A marked receipt or a duplicate entry in this batch
        require!(
            !recipients[..i].contains(recipient),
            BoostError::RecipientAlreadyClaimed
        );
        require!(!already_claimed[i], BoostError::RecipientAlreadyClaimed);
    }

    Ok(())
}

/**
 * Processes a batch of guard-signed claims, all-or-nothing
 *
 * @param ctx - The account context; remaining accounts carry the per-recipient pairs
 * @param recipients - Recipient addresses, one per entitlement
 * @param amounts - Guard-authorized amount per recipient
 * @param signatures - 65-byte recoverable guard signature per recipient
 *
 * The batch is validated in full before anything is mutated:
 * 1. Vector lengths and the remaining-accounts pairing must agree
 * 2. The claim window is checked once for the whole batch
 * 3. Receipt PDA addresses are checked and their claimed flags gathered
 * 4. Replay (prior receipt or in-batch duplicate) is rejected across the
 *    batch, first offending index wins
 * 5. Per index: guard signature, recipient token account
 * 6. The batch total is checked against the balance as a sum, then the
 *    balance is debited once
 *
 * Only then are receipts created and transfers performed, with one
 * BoostClaimed event per recipient. Any failure aborts the whole
 * transaction, so no entry of a failing batch is ever redeemed.
 */
pub fn handle_claim_multi<'info>(
    ctx: Context<'_, '_, 'info, 'info, ClaimMulti<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
    signatures: Vec<[u8; 65]>,
) -> Result<()> {
    require!(
        recipients.len() == amounts.len() && recipients.len() == signatures.len(),
        BoostError::LengthMismatch
    );
    require!(
        ctx.remaining_accounts.len() == recipients.len() * 2,
        BoostError::LengthMismatch
    );

    let boost = &ctx.accounts.boost;
    let boost_key = boost.key();

    // ===== VALIDATION PHASE (no mutation) =====

    let now = Clock::get()?.unix_timestamp;
    boost.check_active(now)?;

    // Walk the receipt PDAs once, collecting bumps and claimed flags
    let mut receipt_bumps = Vec::with_capacity(recipients.len());
    let mut already_claimed = Vec::with_capacity(recipients.len());
    for (i, recipient) in recipients.iter().enumerate() {
        let receipt_info = &ctx.remaining_accounts[2 * i];
        let (expected_receipt, receipt_bump) = Pubkey::find_program_address(
            &[CLAIM_SEED.as_bytes(), boost_key.as_ref(), recipient.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(
            receipt_info.key(),
            expected_receipt,
            BoostError::InvalidClaimReceipt
        );
        receipt_bumps.push(receipt_bump);

        if receipt_info.data_is_empty() {
            already_claimed.push(false);
        } else {
            let receipt_data = receipt_info.try_borrow_data()?;
            let receipt = ClaimReceipt::try_deserialize(&mut &receipt_data[..])?;
            already_claimed.push(receipt.claimed);
        }
    }

    // Replay and duplicate rejection across the whole batch
    check_batch_entries(&recipients, &amounts, &signatures, &already_claimed)?;

    for (i, recipient) in recipients.iter().enumerate() {
        let digest = claim_digest(CHAIN_ID, &crate::ID, boost.id, recipient, amounts[i]);
        require!(
            recover_signer(&digest, &signatures[i]) == Some(boost.guard),
            BoostError::InvalidSignature
        );

        let token_account_info = &ctx.remaining_accounts[2 * i + 1];
        let token_account = InterfaceAccount::<TokenAccount>::try_from(token_account_info)?;
        require!(
            token_account.mint == boost.token_mint,
            BoostError::TokenMintMismatch
        );
        require_keys_eq!(
            token_account.owner,
            *recipient,
            BoostError::InvalidRecipientTokenAccount
        );
    }

    // Sufficiency is checked once against the sum, so the batch settles
    // against the shared balance as a whole
    let total = batch_total(&amounts)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let boost = &mut ctx.accounts.boost;
    let starting_balance = boost.balance;
    boost.debit(total)?;

    let id_bytes = boost.id.to_le_bytes();
    let boost_bump = boost.bump;
    let decimals = ctx.accounts.token_mint.decimals;

    let seeds = &[BOOST_SEED.as_bytes(), id_bytes.as_ref(), &[boost_bump]];
    let signer_seeds = &[&seeds[..]];

    let rent = Rent::get()?;
    let receipt_lamports = rent.minimum_balance(ClaimReceipt::LEN);
    let mut running_balance = starting_balance;

    // ===== INTERACTIONS PHASE (Receipts and Transfers) =====

    for (i, recipient) in recipients.iter().enumerate() {
        let receipt_info = &ctx.remaining_accounts[2 * i];
        let token_account_info = &ctx.remaining_accounts[2 * i + 1];
        let receipt_seeds = &[
            CLAIM_SEED.as_bytes(),
            boost_key.as_ref(),
            recipient.as_ref(),
            &[receipt_bumps[i]],
        ];

        // Create the receipt account at its PDA. A lamport balance may
        // already exist at the address, in which case the account must be
        // topped up, allocated, and assigned instead of created outright.
        if receipt_info.lamports() == 0 {
            system_program::create_account(
                CpiContext::new_with_signer(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::CreateAccount {
                        from: ctx.accounts.payer.to_account_info(),
                        to: receipt_info.clone(),
                    },
                    &[&receipt_seeds[..]],
                ),
                receipt_lamports,
                ClaimReceipt::LEN as u64,
                &crate::ID,
            )?;
        } else {
            let top_up = receipt_lamports.saturating_sub(receipt_info.lamports());
            if top_up > 0 {
                system_program::transfer(
                    CpiContext::new(
                        ctx.accounts.system_program.to_account_info(),
                        system_program::Transfer {
                            from: ctx.accounts.payer.to_account_info(),
                            to: receipt_info.clone(),
                        },
                    ),
                    top_up,
                )?;
            }
            system_program::allocate(
                CpiContext::new_with_signer(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::Allocate {
                        account_to_allocate: receipt_info.clone(),
                    },
                    &[&receipt_seeds[..]],
                ),
                ClaimReceipt::LEN as u64,
            )?;
            system_program::assign(
                CpiContext::new_with_signer(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::Assign {
                        account_to_assign: receipt_info.clone(),
                    },
                    &[&receipt_seeds[..]],
                ),
                &crate::ID,
            )?;
        }

        // Mark the receipt as redeemed
        let receipt = ClaimReceipt { claimed: true };
        let mut serialized: Vec<u8> = Vec::new();
        receipt.try_serialize(&mut serialized)?;
        let mut receipt_data = receipt_info.try_borrow_mut_data()?;
        receipt_data[..serialized.len()].copy_from_slice(&serialized);
        drop(receipt_data);

        transfer_token(
            ctx.accounts.boost.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            token_account_info.clone(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amounts[i],
            decimals,
            Some(signer_seeds),
        )?;

        // Total was validated against the starting balance, so this
        // cannot underflow
        running_balance -= amounts[i];

        emit_cpi!(BoostClaimed {
            boost: boost_key,
            recipient: *recipient,
            amount: amounts[i],
            balance: running_balance,
        });
    }

    Ok(())
}
