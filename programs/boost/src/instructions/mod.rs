pub mod claim;
pub mod claim_multi;
pub mod create_boost;
pub mod withdraw;

pub use claim::*;
pub use claim_multi::*;
pub use create_boost::*;
pub use withdraw::*;
