use anchor_lang::prelude::*;

/**
 * Claim receipt account
 *
 * Marks a (boost, recipient) entitlement as redeemed. One receipt per pair,
 * created the first time the pair claims.
 *
 * Derivation: ["claim", boost_key, recipient]
 *
 * Design Notes:
 * - Write-once: the flag is set exactly once and never cleared
 * - Never closed, so a redeemed entitlement can never be replayed and the
 *   claim history stays auditable
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimReceipt {
    /// Whether this (boost, recipient) entitlement has been redeemed
    pub claimed: bool,
}

impl ClaimReceipt {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimReceipt>();
}
