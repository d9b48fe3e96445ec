//! Pure aggregation over record lists; no mutation, no I/O.

use crate::domain::common::RecordId;
use crate::domain::customer::Debt;
use crate::domain::supplier::{Invoice, Payment};

pub struct BalanceService;

impl BalanceService {
    /// Total a customer still owes: the sum of their debt amounts.
    /// An id with no matching debts yields 0.
    pub fn customer_balance(customer_id: RecordId, debts: &[Debt]) -> f64 {
        debts
            .iter()
            .filter(|debt| debt.customer_id == customer_id)
            .map(|debt| debt.amount)
            .sum()
    }

    /// Outstanding balance towards a supplier: invoiced amounts minus
    /// rejections minus payments. The result is signed and unclamped;
    /// negative means the supplier was overpaid.
    pub fn supplier_balance(
        supplier_id: RecordId,
        invoices: &[Invoice],
        payments: &[Payment],
    ) -> f64 {
        let invoiced: f64 = invoices
            .iter()
            .filter(|invoice| invoice.supplier_id == supplier_id)
            .map(|invoice| invoice.amount)
            .sum();
        let rejected: f64 = invoices
            .iter()
            .filter(|invoice| invoice.supplier_id == supplier_id)
            .map(|invoice| invoice.rejection)
            .sum();
        let paid: f64 = payments
            .iter()
            .filter(|payment| payment.supplier_id == supplier_id)
            .map(|payment| payment.amount)
            .sum();
        invoiced - rejected - paid
    }
}
