use anchor_lang::prelude::*;

/**
 * Global boost counter account
 *
 * Tracks the number of boosts ever created so new boosts receive
 * sequential ids.
 *
 * Derivation: ["boost_count"]
 *
 * Lifecycle:
 * 1. Created on first boost creation (using init_if_needed)
 * 2. Incremented with each subsequent creation
 */
#[account]
#[derive(Default, Debug)]
pub struct BoostCounter {
    /// Number of boosts created; the next boost id is count + 1
    pub count: u64,
}

impl BoostCounter {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<BoostCounter>();
}
