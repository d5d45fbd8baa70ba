use anchor_lang::prelude::*;

#[error_code]
pub enum BoostError {
    // Creation errors
    #[msg("Deposit amount must be greater than zero")]
    InvalidDepositAmount,
    #[msg("Guard address cannot be the zero address")]
    InvalidGuard,
    #[msg("Claim window start must not be after its end")]
    InvalidWindow,

    // Time validation errors
    #[msg("Boost has not started")]
    BoostNotStarted,
    #[msg("Boost has ended")]
    BoostEnded,
    #[msg("Boost has not ended yet")]
    BoostNotEnded,
    #[msg("No remaining balance to withdraw")]
    NothingToWithdraw,

    // Claim validation errors
    #[msg("Recipient has already claimed from this boost")]
    RecipientAlreadyClaimed,
    #[msg("Signature does not recover to the boost guard")]
    InvalidSignature,
    #[msg("Insufficient boost balance for this claim")]
    InsufficientBalance,

    // Batch shape errors
    #[msg("Recipients, amounts, signatures, and accounts must have matching lengths")]
    LengthMismatch,
    #[msg("Claim receipt account does not match the expected address")]
    InvalidClaimReceipt,
    #[msg("Token account is not owned by the named recipient")]
    InvalidRecipientTokenAccount,

    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the boost's token mint")]
    TokenMintMismatch,
}
