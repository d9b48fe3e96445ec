use crate::domain::common::RecordId;
use crate::domain::customer::{Customer, Debt};
use crate::domain::supplier::{Invoice, Payment, Supplier};

/// In-memory application state: the five record lists the store mirrors.
///
/// The ledger itself enforces nothing; referential and numeric invariants
/// are checked by the service layer before every mutation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub customers: Vec<Customer>,
    pub debts: Vec<Debt>,
    pub suppliers: Vec<Supplier>,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(&self, id: RecordId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn supplier(&self, id: RecordId) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    pub fn debt_mut(&mut self, id: RecordId) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|debt| debt.id == id)
    }

    pub fn invoice_mut(&mut self, id: RecordId) -> Option<&mut Invoice> {
        self.invoices.iter_mut().find(|invoice| invoice.id == id)
    }

    pub fn payment_mut(&mut self, id: RecordId) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|payment| payment.id == id)
    }

    pub fn add_customer(&mut self, customer: Customer) -> RecordId {
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    pub fn add_debt(&mut self, debt: Debt) -> RecordId {
        let id = debt.id;
        self.debts.push(debt);
        id
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> RecordId {
        let id = supplier.id;
        self.suppliers.push(supplier);
        id
    }

    pub fn add_invoice(&mut self, invoice: Invoice) -> RecordId {
        let id = invoice.id;
        self.invoices.push(invoice);
        id
    }

    pub fn add_payment(&mut self, payment: Payment) -> RecordId {
        let id = payment.id;
        self.payments.push(payment);
        id
    }

    pub fn remove_debt(&mut self, id: RecordId) -> Option<Debt> {
        let index = self.debts.iter().position(|debt| debt.id == id)?;
        Some(self.debts.remove(index))
    }

    pub fn remove_invoice(&mut self, id: RecordId) -> Option<Invoice> {
        let index = self.invoices.iter().position(|invoice| invoice.id == id)?;
        Some(self.invoices.remove(index))
    }

    pub fn remove_payment(&mut self, id: RecordId) -> Option<Payment> {
        let index = self.payments.iter().position(|payment| payment.id == id)?;
        Some(self.payments.remove(index))
    }

    /// Removes a customer together with every debt referencing it.
    /// Returns the number of debts removed.
    pub fn remove_customer_cascade(&mut self, id: RecordId) -> usize {
        self.customers.retain(|customer| customer.id != id);
        let before = self.debts.len();
        self.debts.retain(|debt| debt.customer_id != id);
        before - self.debts.len()
    }

    /// Removes a supplier together with its invoices and payments.
    /// Returns the removed (invoices, payments) counts.
    pub fn remove_supplier_cascade(&mut self, id: RecordId) -> (usize, usize) {
        self.suppliers.retain(|supplier| supplier.id != id);
        let invoices_before = self.invoices.len();
        self.invoices.retain(|invoice| invoice.supplier_id != id);
        let payments_before = self.payments.len();
        self.payments.retain(|payment| payment.supplier_id != id);
        (
            invoices_before - self.invoices.len(),
            payments_before - self.payments.len(),
        )
    }

    pub fn debts_of(&self, customer_id: RecordId) -> impl Iterator<Item = &Debt> {
        self.debts
            .iter()
            .filter(move |debt| debt.customer_id == customer_id)
    }

    pub fn invoices_of(&self, supplier_id: RecordId) -> impl Iterator<Item = &Invoice> {
        self.invoices
            .iter()
            .filter(move |invoice| invoice.supplier_id == supplier_id)
    }

    pub fn payments_of(&self, supplier_id: RecordId) -> impl Iterator<Item = &Payment> {
        self.payments
            .iter()
            .filter(move |payment| payment.supplier_id == supplier_id)
    }
}
