//! Host-independent vesting engine.
//!
//! Every operation takes the current time and its collaborators explicitly:
//! an [`AccessControl`] policy deciding who may mutate the store, and a
//! [`Ledger`] moving tokens out of the engine's holding. On-chain handlers
//! plug in [`SignerAuthority`] and [`TokenVault`]; tests plug in doubles.

pub mod access;
pub mod claim;
pub mod factory;
pub mod ledger;

#[cfg(test)]
pub(crate) mod testing;

pub use access::*;
pub use claim::*;
pub use factory::*;
pub use ledger::*;
