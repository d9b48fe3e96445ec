//! Validated CRUD helpers for customers and their debts.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::time::Clock;
use crate::domain::common::RecordId;
use crate::domain::customer::{Customer, Debt};
use crate::domain::ledger::Ledger;
use crate::errors::LedgerError;
use crate::prompt::Prompter;

use super::{ensure_positive_amount, ServiceError, ServiceResult};

pub struct CustomerService;

impl CustomerService {
    /// Registers a new customer and returns its identifier.
    pub fn add(ledger: &mut Ledger, clock: &dyn Clock, name: &str) -> ServiceResult<RecordId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Invalid("Customer name cannot be empty".into()));
        }
        let customer = Customer::new(RecordId::at(clock.now()), trimmed);
        Ok(ledger.add_customer(customer))
    }

    /// Records a new debt against an existing customer.
    pub fn add_debt(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        customer_id: RecordId,
        amount: f64,
        date: NaiveDate,
    ) -> ServiceResult<RecordId> {
        ensure_positive_amount(amount, "Debt")?;
        if ledger.customer(customer_id).is_none() {
            return Err(LedgerError::UnknownCustomer(customer_id).into());
        }
        let debt = Debt::new(RecordId::at(clock.now()), customer_id, amount, date);
        Ok(ledger.add_debt(debt))
    }

    /// Rewrites a debt's amount and date.
    pub fn edit_debt(
        ledger: &mut Ledger,
        id: RecordId,
        amount: f64,
        date: NaiveDate,
    ) -> ServiceResult<()> {
        ensure_positive_amount(amount, "Debt")?;
        let debt = ledger
            .debt_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Debt not found".into()))?;
        debt.amount = amount;
        debt.date = date;
        Ok(())
    }

    /// Removes a single debt, returning the removed instance.
    pub fn remove_debt(ledger: &mut Ledger, id: RecordId) -> ServiceResult<Debt> {
        ledger
            .remove_debt(id)
            .ok_or_else(|| ServiceError::Invalid("Debt not found".into()))
    }

    /// Deletes a customer and every debt that references it, gated on the
    /// prompter. Returns `false` when declined; nothing is touched then.
    pub fn remove(ledger: &mut Ledger, prompter: &dyn Prompter, id: RecordId) -> ServiceResult<bool> {
        if ledger.customer(id).is_none() {
            return Err(ServiceError::Invalid("Customer not found".into()));
        }
        if !prompter.confirm(
            "¿Estás seguro de eliminar este cliente? Se borrarán TODAS sus deudas asociadas.",
        ) {
            return Ok(false);
        }
        let removed = ledger.remove_customer_cascade(id);
        debug!(customer = %id, debts_removed = removed, "customer removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::prompt::AutoPrompter;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut ledger = Ledger::new();
        let err = CustomerService::add(&mut ledger, &clock(), "   ").expect_err("must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(ledger.customers.is_empty());
    }

    #[test]
    fn non_positive_debt_is_rejected() {
        let mut ledger = Ledger::new();
        let ana = CustomerService::add(&mut ledger, &clock(), "Ana").unwrap();
        let err = CustomerService::add_debt(&mut ledger, &clock(), ana, 0.0, date(2024, 1, 10))
            .expect_err("zero amount must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(ledger.debts.is_empty());
    }

    #[test]
    fn debt_requires_existing_customer() {
        let mut ledger = Ledger::new();
        let err =
            CustomerService::add_debt(&mut ledger, &clock(), RecordId(99), 10.0, date(2024, 1, 10))
                .expect_err("unknown customer must fail");
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::UnknownCustomer(_))
        ));
    }

    #[test]
    fn declined_removal_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let ana = CustomerService::add(&mut ledger, &clock(), "Ana").unwrap();
        CustomerService::add_debt(&mut ledger, &clock(), ana, 100.0, date(2024, 1, 10)).unwrap();

        let removed =
            CustomerService::remove(&mut ledger, &AutoPrompter { answer: false }, ana).unwrap();

        assert!(!removed);
        assert_eq!(ledger.customers.len(), 1);
        assert_eq!(ledger.debts.len(), 1);
    }
}
