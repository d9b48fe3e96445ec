//! Key-value persistence of record lists.
//!
//! The store is a flat mirror with no referential integrity of its own:
//! every mutation is followed by saving the affected list under its key.
//! Saving the five lists is per-key, not transactional across them.

pub mod json_backend;

pub use json_backend::JsonStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::ledger::Ledger;
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Storage keys for the five record lists.
pub mod keys {
    pub const CUSTOMERS: &str = "customers";
    pub const DEBTS: &str = "debts";
    pub const SUPPLIERS: &str = "suppliers";
    pub const INVOICES: &str = "supplier_invoices";
    pub const PAYMENTS: &str = "supplier_payments";
}

/// Flat blob store for named record lists. Loading a key that was never
/// written yields an empty list; saving fully overwrites prior contents.
pub trait BlobStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>>;
    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()>;
}

/// Loads every record list into a fresh ledger.
pub fn load_ledger<S: BlobStore>(store: &S) -> Result<Ledger> {
    Ok(Ledger {
        customers: store.load(keys::CUSTOMERS)?,
        debts: store.load(keys::DEBTS)?,
        suppliers: store.load(keys::SUPPLIERS)?,
        invoices: store.load(keys::INVOICES)?,
        payments: store.load(keys::PAYMENTS)?,
    })
}

/// Mirrors every record list to the store, key by key.
pub fn save_ledger<S: BlobStore>(store: &S, ledger: &Ledger) -> Result<()> {
    store.save(keys::CUSTOMERS, &ledger.customers)?;
    store.save(keys::DEBTS, &ledger.debts)?;
    store.save(keys::SUPPLIERS, &ledger.suppliers)?;
    store.save(keys::INVOICES, &ledger.invoices)?;
    store.save(keys::PAYMENTS, &ledger.payments)?;
    Ok(())
}
