pub mod signature;
pub mod token;

pub use signature::*;
pub use token::*;
