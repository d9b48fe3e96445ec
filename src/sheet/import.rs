//! Parses tabular rows back into ledger records.
//!
//! Parsing is best-effort per row: a row whose required cells are missing,
//! non-numeric, or date-unparseable simply contributes nothing. The
//! all-or-nothing decision happens later, at the confirmation boundary.

use crate::domain::common::RecordId;
use crate::domain::customer::{Customer, Debt};
use crate::domain::supplier::{Invoice, Payment};

use super::dates::parse_date_cell;
use super::{Cell, Row};

const INVOICE_DATE_COL: usize = 0;
const INVOICE_DUE_COL: usize = 1;
const INVOICE_NUMBER_COL: usize = 2;
const INVOICE_AMOUNT_COL: usize = 3;
const INVOICE_REJECTION_COL: usize = 4;
const PAYMENT_DATE_COL: usize = 8;
const PAYMENT_AMOUNT_COL: usize = 9;

/// Records recovered from a customer debt sheet. Customers are synthesized
/// for names with no case-insensitive match among those already known.
#[derive(Debug, Clone, Default)]
pub struct DebtBatch {
    pub new_customers: Vec<Customer>,
    pub debts: Vec<Debt>,
}

/// Records recovered from a supplier sheet, all attributed to the selected
/// supplier.
#[derive(Debug, Clone, Default)]
pub struct SupplierBatch {
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
}

/// Scans `[CLIENTE, FECHA, MONTO]` data rows (header at row 0).
///
/// A row is accepted only when the name is non-empty, the date parses, and
/// the amount is numeric. Names resolve against `known_customers` first and
/// then against customers synthesized earlier in the same batch, so several
/// rows naming one new customer share a single id. Synthesized ids offset
/// `base_id` by the row index to stay collision-free within the batch.
pub fn parse_debt_rows(rows: &[Row], known_customers: &[Customer], base_id: RecordId) -> DebtBatch {
    let mut batch = DebtBatch::default();
    for (index, row) in rows.iter().enumerate().skip(1) {
        let name = match row.first().and_then(Cell::to_text) {
            Some(name) if !name.trim().is_empty() => name,
            _ => continue,
        };
        let date = match row.get(1).and_then(parse_date_cell) {
            Some(date) => date,
            None => continue,
        };
        let amount = match row.get(2).and_then(Cell::as_number) {
            Some(amount) => amount,
            None => continue,
        };

        let normalized = name.trim().to_lowercase();
        let resolved = known_customers
            .iter()
            .chain(batch.new_customers.iter())
            .find(|customer| customer.name.trim().to_lowercase() == normalized)
            .map(|customer| customer.id);
        let customer_id = match resolved {
            Some(id) => id,
            None => {
                let customer = Customer::new(base_id.offset(index as i64), name.trim());
                let id = customer.id;
                batch.new_customers.push(customer);
                id
            }
        };
        batch
            .debts
            .push(Debt::new(base_id.offset(index as i64), customer_id, amount, date));
    }
    batch
}

/// Scans a supplier sheet's two column groups independently: invoices at
/// A-E, payments at I-J. A row may contribute an invoice, a payment, both,
/// or neither. Payment ids offset past the row count so an invoice and a
/// payment from the same row never collide.
pub fn parse_supplier_rows(rows: &[Row], supplier_id: RecordId, base_id: RecordId) -> SupplierBatch {
    let mut batch = SupplierBatch::default();
    let row_count = rows.len() as i64;
    for (index, row) in rows.iter().enumerate().skip(1) {
        if let (Some(date), Some(amount)) = (
            row.get(INVOICE_DATE_COL).and_then(parse_date_cell),
            row.get(INVOICE_AMOUNT_COL).and_then(Cell::as_number),
        ) {
            let due_date = row.get(INVOICE_DUE_COL).and_then(parse_date_cell);
            let number = row
                .get(INVOICE_NUMBER_COL)
                .and_then(Cell::to_text)
                .unwrap_or_default();
            let rejection = row
                .get(INVOICE_REJECTION_COL)
                .and_then(Cell::as_number)
                .filter(|rejection| rejection.is_finite() && *rejection >= 0.0)
                .unwrap_or(0.0);
            batch.invoices.push(Invoice::new(
                base_id.offset(index as i64),
                supplier_id,
                date,
                due_date,
                number,
                amount,
                rejection,
            ));
        }

        if let (Some(date), Some(amount)) = (
            row.get(PAYMENT_DATE_COL).and_then(parse_date_cell),
            row.get(PAYMENT_AMOUNT_COL).and_then(Cell::as_number),
        ) {
            batch.payments.push(Payment::new(
                base_id.offset(index as i64 + row_count),
                supplier_id,
                amount,
                date,
            ));
        }
    }
    batch
}
