#![doc(test(attr(deny(warnings))))]

//! Almacén Core offers the bookkeeping primitives behind a small store's
//! accounts: money owed by customers, money owed to suppliers, due-date
//! alerting, and spreadsheet import/export of the underlying records.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod prompt;
pub mod sheet;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Almacén Core tracing initialized.");
    });
}
