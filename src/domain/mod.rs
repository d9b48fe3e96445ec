//! Pure domain records (Customer, Debt, Supplier, Invoice, Payment) and the
//! in-memory ledger that owns them. No I/O, no prompts, no storage.

pub mod common;
pub mod customer;
pub mod ledger;
pub mod supplier;

pub use common::*;
pub use customer::*;
pub use ledger::*;
pub use supplier::*;
