//! Validated CRUD helpers for suppliers, their invoices and payments.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::time::Clock;
use crate::domain::common::RecordId;
use crate::domain::ledger::Ledger;
use crate::domain::supplier::{Invoice, Payment, Supplier};
use crate::errors::LedgerError;
use crate::prompt::Prompter;

use super::{ensure_positive_amount, ServiceError, ServiceResult};

/// Form fields for entering or editing an invoice. A non-finite or negative
/// rejection is treated as absent and normalized to 0.
#[derive(Debug, Clone)]
pub struct InvoiceInput {
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub number: String,
    pub amount: f64,
    pub rejection: f64,
}

impl InvoiceInput {
    fn normalized_rejection(&self) -> f64 {
        if self.rejection.is_finite() && self.rejection >= 0.0 {
            self.rejection
        } else {
            0.0
        }
    }

    fn validate(&self) -> ServiceResult<()> {
        ensure_positive_amount(self.amount, "Invoice")?;
        if self.number.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Invoice number cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

pub struct SupplierService;

impl SupplierService {
    /// Registers a new supplier and returns its identifier.
    pub fn add(ledger: &mut Ledger, clock: &dyn Clock, name: &str) -> ServiceResult<RecordId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Invalid("Supplier name cannot be empty".into()));
        }
        let supplier = Supplier::new(RecordId::at(clock.now()), trimmed);
        Ok(ledger.add_supplier(supplier))
    }

    /// Records an invoice against an existing supplier.
    pub fn add_invoice(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        supplier_id: RecordId,
        input: InvoiceInput,
    ) -> ServiceResult<RecordId> {
        input.validate()?;
        if ledger.supplier(supplier_id).is_none() {
            return Err(LedgerError::UnknownSupplier(supplier_id).into());
        }
        let invoice = Invoice::new(
            RecordId::at(clock.now()),
            supplier_id,
            input.issue_date,
            input.due_date,
            input.number.trim(),
            input.amount,
            input.normalized_rejection(),
        );
        Ok(ledger.add_invoice(invoice))
    }

    /// Rewrites an invoice's fields from the edit form.
    pub fn edit_invoice(ledger: &mut Ledger, id: RecordId, input: InvoiceInput) -> ServiceResult<()> {
        input.validate()?;
        let rejection = input.normalized_rejection();
        let invoice = ledger
            .invoice_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Invoice not found".into()))?;
        invoice.issue_date = input.issue_date;
        invoice.due_date = input.due_date;
        invoice.number = input.number.trim().to_string();
        invoice.amount = input.amount;
        invoice.rejection = rejection;
        Ok(())
    }

    pub fn remove_invoice(ledger: &mut Ledger, id: RecordId) -> ServiceResult<Invoice> {
        ledger
            .remove_invoice(id)
            .ok_or_else(|| ServiceError::Invalid("Invoice not found".into()))
    }

    /// Records a payment towards an existing supplier.
    pub fn add_payment(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        supplier_id: RecordId,
        amount: f64,
        date: NaiveDate,
    ) -> ServiceResult<RecordId> {
        ensure_positive_amount(amount, "Payment")?;
        if ledger.supplier(supplier_id).is_none() {
            return Err(LedgerError::UnknownSupplier(supplier_id).into());
        }
        let payment = Payment::new(RecordId::at(clock.now()), supplier_id, amount, date);
        Ok(ledger.add_payment(payment))
    }

    /// Rewrites a payment's amount and date.
    pub fn edit_payment(
        ledger: &mut Ledger,
        id: RecordId,
        amount: f64,
        date: NaiveDate,
    ) -> ServiceResult<()> {
        ensure_positive_amount(amount, "Payment")?;
        let payment = ledger
            .payment_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Payment not found".into()))?;
        payment.amount = amount;
        payment.date = date;
        Ok(())
    }

    pub fn remove_payment(ledger: &mut Ledger, id: RecordId) -> ServiceResult<Payment> {
        ledger
            .remove_payment(id)
            .ok_or_else(|| ServiceError::Invalid("Payment not found".into()))
    }

    /// Deletes a supplier and every invoice and payment referencing it,
    /// gated on the prompter. Returns `false` when declined.
    pub fn remove(ledger: &mut Ledger, prompter: &dyn Prompter, id: RecordId) -> ServiceResult<bool> {
        if ledger.supplier(id).is_none() {
            return Err(ServiceError::Invalid("Supplier not found".into()));
        }
        if !prompter.confirm(
            "¿Estás seguro de eliminar este proveedor? Se borrarán TODAS sus facturas y pagos asociados.",
        ) {
            return Ok(false);
        }
        let (invoices, payments) = ledger.remove_supplier_cascade(id);
        debug!(
            supplier = %id,
            invoices_removed = invoices,
            payments_removed = payments,
            "supplier removed"
        );
        Ok(true)
    }
}
