use anchor_lang::prelude::*;

/// Event emitted when a new boost is created
#[event]
pub struct BoostCreated {
    /// The boost account public key
    pub boost: Pubkey,
    /// Sequential id of the boost
    pub id: u64,
    /// Owner who created the boost and deposited the tokens
    pub owner: Pubkey,
    /// Guard address whose signatures authorize claims
    pub guard: [u8; 20],
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Amount of tokens deposited
    pub amount: u64,
    /// Start of the claim window (Unix timestamp, inclusive)
    pub start_time: i64,
    /// End of the claim window (Unix timestamp, exclusive)
    pub end_time: i64,
}

/// Event emitted once per recipient on a successful claim
#[event]
pub struct BoostClaimed {
    /// The boost account public key
    pub boost: Pubkey,
    /// Recipient credited by this claim
    pub recipient: Pubkey,
    /// Amount of tokens transferred to the recipient
    pub amount: u64,
    /// Remaining undistributed balance after this claim
    pub balance: u64,
}

/// Event emitted when the owner sweeps the remainder after the window ends
#[event]
pub struct RemainingWithdrawn {
    /// The boost account public key
    pub boost: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}
