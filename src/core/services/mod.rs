pub mod alert_service;
pub mod balance_service;
pub mod customer_service;
pub mod import_service;
pub mod supplier_service;

pub use alert_service::{AlertService, DueAlert, DueAlerts};
pub use balance_service::BalanceService;
pub use customer_service::CustomerService;
pub use import_service::{DebtImportReport, ImportService, SupplierImportReport};
pub use supplier_service::{InvoiceInput, SupplierService};

use crate::errors::LedgerError;
use crate::sheet::SheetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error("{0}")]
    Invalid(String),
}

/// Entry-time numeric validation shared by every money field.
pub(crate) fn ensure_positive_amount(amount: f64, what: &str) -> ServiceResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ServiceError::Invalid(format!(
            "{} amount must be a number greater than zero",
            what
        )));
    }
    Ok(())
}
