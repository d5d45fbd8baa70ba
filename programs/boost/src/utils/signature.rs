use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::constants::{CLAIM_DOMAIN, ETH_SIGNED_MESSAGE_PREFIX};

/// Ethereum-style address derived from a secp256k1 public key
pub type GuardAddress = [u8; 20];

/**
 * Claim signature codec
 *
 * Builds the exact digest a guard signs to authorize one claim, and recovers
 * the signing address from a candidate signature. Both functions are pure:
 * no account access, no clock, no side effects.
 *
 * The digest binds the full claim domain:
 * - chain id and program id, so a signature is not portable across
 *   chains or deployments
 * - boost id, so it cannot be replayed against another boost
 * - recipient and amount, so it pays exactly one entitlement
 */

/// Computes the digest the guard must sign to authorize
/// `(chain_id, program_id, boost_id, recipient, amount)`.
///
/// The inner keccak hash covers the domain tag and all five fields; the
/// outer hash applies the Ethereum signed-message envelope so guards can
/// sign with stock EVM wallet tooling.
pub fn claim_digest(
    chain_id: u64,
    program_id: &Pubkey,
    boost_id: u64,
    recipient: &Pubkey,
    amount: u64,
) -> [u8; 32] {
    let message = keccak::hashv(&[
        CLAIM_DOMAIN,
        &chain_id.to_be_bytes(),
        program_id.as_ref(),
        &boost_id.to_be_bytes(),
        recipient.as_ref(),
        &amount.to_be_bytes(),
    ]);
    keccak::hashv(&[ETH_SIGNED_MESSAGE_PREFIX, message.as_ref()]).to_bytes()
}

/// Recovers the Ethereum-style address that produced `signature` over
/// `digest`.
///
/// The signature is 64 bytes of r || s followed by a one-byte recovery id
/// (0 or 1). Returns `None` for an out-of-range recovery id or when
/// recovery fails; never panics.
pub fn recover_signer(digest: &[u8; 32], signature: &[u8; 65]) -> Option<GuardAddress> {
    let recovery_id = signature[64];
    if recovery_id > 1 {
        return None;
    }
    let pubkey = secp256k1_recover(digest, recovery_id, &signature[..64]).ok()?;
    Some(eth_address(&pubkey.to_bytes()))
}

/// Derives the Ethereum-style address of an uncompressed secp256k1 public
/// key (last 20 bytes of its keccak hash).
pub fn eth_address(pubkey: &[u8; 64]) -> GuardAddress {
    let hash = keccak::hash(pubkey);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash.to_bytes()[12..]);
    address
}
