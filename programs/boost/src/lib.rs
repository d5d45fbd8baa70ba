use anchor_lang::prelude::*;

declare_id!("BstGxWkUrqcyGJzSDgbLGB2oK9jxJpSjGEY6gBrJ8tLb");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Boost Program
 *
 * A Solana program for distributing a fixed token deposit to recipients
 * authorized by a guard's off-chain signatures.
 *
 * Key Features:
 * - Guard-signed claim authorization via secp256k1 recovery
 * - Signature domain binding (chain, program, boost, recipient, amount)
 * - One claim per (boost, recipient), enforced by receipt PDAs
 * - Time-bounded claim windows with open-ended sentinels
 * - Atomic batched claims settled against a shared balance
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Counter PDA: Assigns sequential boost ids
 * - Boost PDA: Stores campaign parameters and the remaining balance
 * - Token Vault PDA: Holds the deposit under boost authority
 * - Claim Receipt PDAs: Mark redeemed (boost, recipient) entitlements
 *
 * Workflow:
 * 1. Owner creates a boost and deposits tokens
 * 2. The guard signs (chain, program, boost, recipient, amount) tuples off-chain
 * 3. Recipients redeem signatures within the claim window, singly or batched
 * 4. Owner withdraws whatever remains after the window ends
 */
#[program]
pub mod boost {
    use super::*;

    /**
     * Creates a new boost
     *
     * Initializes a claim campaign with a sequential id, creates its vault,
     * and transfers the deposit from the owner in the same transaction.
     *
     * @param ctx - Account context containing counter, boost, vault, and owner accounts
     * @param amount - Amount of tokens to deposit for distribution
     * @param guard - Ethereum-style address whose signatures authorize claims
     * @param start_time - Start of the claim window (inclusive); 0 for "starts immediately"
     * @param end_time - End of the claim window (exclusive); i64::MAX for "never expires"
     *
     * Access Control: Owner only
     */
    pub fn create_boost(
        ctx: Context<CreateBoost>,
        amount: u64,
        guard: [u8; 20],
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        handle_create_boost(ctx, amount, guard, start_time, end_time)
    }

    /**
     * Claims tokens with a guard signature
     *
     * Redeems one entitlement: the signature must recover to the boost's
     * guard over the claim digest for this recipient and amount.
     *
     * @param ctx - Account context containing boost, receipt, vault, and recipient accounts
     * @param amount - Amount the guard authorized for this recipient
     * @param signature - 65-byte recoverable secp256k1 signature from the guard
     *
     * Access Control: Any caller with a valid guard signature
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, signature: [u8; 65]) -> Result<()> {
        handle_claim(ctx, amount, signature)
    }

    /**
     * Claims tokens for multiple recipients atomically
     *
     * Settles a batch of entitlements against one boost. The whole batch is
     * validated first and the sum checked against the balance once; any
     * invalid entry fails the entire batch.
     *
     * @param ctx - Account context; remaining accounts carry one
     *   (claim receipt, recipient token account) pair per recipient
     * @param recipients - Recipient addresses
     * @param amounts - Guard-authorized amount per recipient
     * @param signatures - Guard signature per recipient
     *
     * Access Control: Any caller with valid guard signatures
     */
    pub fn claim_multi<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimMulti<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
        signatures: Vec<[u8; 65]>,
    ) -> Result<()> {
        handle_claim_multi(ctx, recipients, amounts, signatures)
    }

    /**
     * Withdraws the remaining balance after the window ends
     *
     * Sweeps undistributed tokens back to the owner. The boost record and
     * all claim receipts stay open for auditability.
     *
     * @param ctx - Account context containing boost, vault, and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
        handle_withdraw_remaining(ctx)
    }
}
