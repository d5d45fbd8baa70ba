use anchor_lang::prelude::*;

use crate::error::BoostError;

/**
 * Main boost state account
 *
 * This struct represents one claim campaign: a fixed token deposit that a
 * guard authority unlocks to individual recipients by signature.
 *
 * Derivation: ["boost", id]
 *
 * Lifecycle:
 * 1. Created during create_boost (deposit transferred in atomically)
 * 2. Balance debited by successful claims during the window
 * 3. Remainder swept by the owner after the window ends
 * 4. Never closed; the record persists for auditability
 */
#[account]
#[derive(Default, Debug)]
pub struct Boost {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Sequential id of this boost
    /// - Assigned from the global counter at creation
    pub id: u64,

    /// Owner of the boost
    /// - Deposited the tokens at creation
    /// - Can withdraw the remaining balance after the window ends
    pub owner: Pubkey,

    /// Guard address (Ethereum-style, keccak of the secp256k1 public key)
    /// - Signatures recovering to this address authorize claims
    /// - Immutable after creation
    pub guard: [u8; 20],

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the deposit, controlled by the boost PDA
    /// - Derived from: ["vault", boost_key]
    pub token_vault: Pubkey,

    /// Amount of tokens deposited at creation
    /// - Never changes; upper bound on lifetime debits
    pub initial_amount: u64,

    /// Remaining undistributed balance
    /// - Only ever decreased, and only through `debit`
    pub balance: u64,

    /// Start of the claim window (Unix timestamp, inclusive)
    /// - 0 means the boost is claimable immediately
    pub start_time: i64,

    /// End of the claim window (Unix timestamp, exclusive)
    /// - i64::MAX means the boost never expires
    pub end_time: i64,
}

impl Boost {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Boost>();

    /// Checks that `now` falls inside the claim window `[start_time, end_time)`.
    pub fn check_active(&self, now: i64) -> Result<()> {
        require!(now >= self.start_time, BoostError::BoostNotStarted);
        require!(now < self.end_time, BoostError::BoostEnded);
        Ok(())
    }

    /// Returns the amount the owner may sweep back.
    ///
    /// Sweeping is allowed only once the window has ended, and only while
    /// something is left; a drained boost cannot be swept again, so no
    /// zero-amount withdrawals are ever observable.
    pub fn withdrawable(&self, now: i64) -> Result<u64> {
        require!(now >= self.end_time, BoostError::BoostNotEnded);
        require!(self.balance > 0, BoostError::NothingToWithdraw);
        Ok(self.balance)
    }

    /// Reduces the remaining balance by `amount`.
    ///
    /// The single point of balance mutation: claims and the post-window
    /// sweep both go through here. Fails without mutating when `amount`
    /// exceeds the remaining balance.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(error!(BoostError::InsufficientBalance))?;
        Ok(())
    }
}
