pub mod add_schedule;
pub mod claim;
pub mod deposit_tokens;
pub mod emit_vesting_quote;
pub mod initialize;
pub mod transfer_ownership;
pub mod views;

pub use add_schedule::*;
pub use claim::*;
pub use deposit_tokens::*;
pub use emit_vesting_quote::*;
pub use initialize::*;
pub use transfer_ownership::*;
pub use views::*;
