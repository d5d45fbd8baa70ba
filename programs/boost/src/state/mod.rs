pub mod boost_state;
pub mod claim_state;
pub mod counter_state;

pub use boost_state::*;
pub use claim_state::*;
pub use counter_state::*;
