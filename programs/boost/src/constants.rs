use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the boost program.
 * These constants control signature domain separation, PDA derivation, and
 * other program behavior.
 */

#[constant]
/// ===== SIGNATURE DOMAIN CONSTANTS =====

/// Numeric chain identifier baked into every claim digest
/// - Configured per deployment (mainnet, devnet, localnet builds differ)
/// - Combined with the program id, makes guard signatures non-portable
///   across deployments
pub const CHAIN_ID: u64 = 101;

/// Fixed domain tag prefixed to the claim message before hashing
/// - Separates boost claim digests from any other message the guard key
///   might sign
pub const CLAIM_DOMAIN: &[u8] = b"boost-claim-v1";

/// Ethereum signed-message prefix applied to the inner digest
/// - Guards sign with standard EVM wallet tooling, which wraps the
///   32-byte payload in this envelope before hashing
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// ===== PDA SEED CONSTANTS =====

/// Seed for the global boost counter PDA derivation
/// - Used in: ["boost_count"]
/// - Single counter account assigning sequential boost ids
pub const COUNTER_SEED: &str = "boost_count";

/// Seed for boost PDA derivation
/// - Used in: ["boost", boost_id]
/// - Creates a unique boost account per sequential id
pub const BOOST_SEED: &str = "boost";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", boost_key]
/// - Creates a unique vault for each boost
/// - Ensures the vault is controlled by the boost PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim receipt PDA derivation
/// - Used in: ["claim", boost_key, recipient]
/// - One receipt per (boost, recipient) pair
/// - Marks an entitlement as redeemed and prevents double-claiming
pub const CLAIM_SEED: &str = "claim";
