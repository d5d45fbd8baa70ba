pub mod test_state;

use anchor_lang::error::Error;

use crate::error::BoostError;

/// Extracts the numeric error code from an Anchor error.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected an AnchorError, got {other:?}"),
    }
}

/// The numeric code a handler failing with `expected` would return.
pub fn code_of(expected: BoostError) -> u32 {
    error_code(Error::from(expected))
}
