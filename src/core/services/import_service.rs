//! Confirm-gated merge of parsed sheet rows into the ledger.

use tracing::info;

use crate::core::time::Clock;
use crate::domain::common::RecordId;
use crate::domain::ledger::Ledger;
use crate::errors::LedgerError;
use crate::prompt::Prompter;
use crate::sheet::import::{parse_debt_rows, parse_supplier_rows};
use crate::sheet::{Row, SheetCodec};

use super::ServiceResult;

/// Counts merged by a confirmed debt-sheet import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtImportReport {
    pub new_customers: usize,
    pub debts: usize,
}

/// Counts merged by a confirmed supplier-sheet import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplierImportReport {
    pub invoices: usize,
    pub payments: usize,
}

pub struct ImportService;

impl ImportService {
    /// Reads a customer debt workbook and, once the user confirms the
    /// discovered count, merges the records into the ledger. Returns `None`
    /// when the confirmation is declined; the parsed batch is discarded
    /// whole in that case.
    pub fn import_debts(
        ledger: &mut Ledger,
        prompter: &dyn Prompter,
        clock: &dyn Clock,
        codec: &dyn SheetCodec,
        bytes: &[u8],
    ) -> ServiceResult<Option<DebtImportReport>> {
        let rows = Self::parse_sheet(codec, bytes, prompter)?;
        let batch = parse_debt_rows(&rows, &ledger.customers, RecordId::at(clock.now()));

        let message = format!(
            "Se encontraron {} deudas. ¿Deseas agregarlas?",
            batch.debts.len()
        );
        if !prompter.confirm(&message) {
            return Ok(None);
        }

        let report = DebtImportReport {
            new_customers: batch.new_customers.len(),
            debts: batch.debts.len(),
        };
        ledger.customers.extend(batch.new_customers);
        ledger.debts.extend(batch.debts);
        info!(
            customers = report.new_customers,
            debts = report.debts,
            "debt sheet imported"
        );
        prompter.notify("¡Datos importados con éxito!");
        Ok(Some(report))
    }

    /// Reads a supplier workbook (invoices at A-E, payments at I-J) for the
    /// selected supplier and merges after confirmation. Returns `None` when
    /// declined.
    pub fn import_supplier_sheet(
        ledger: &mut Ledger,
        prompter: &dyn Prompter,
        clock: &dyn Clock,
        codec: &dyn SheetCodec,
        supplier_id: RecordId,
        bytes: &[u8],
    ) -> ServiceResult<Option<SupplierImportReport>> {
        let supplier_name = ledger
            .supplier(supplier_id)
            .ok_or(LedgerError::UnknownSupplier(supplier_id))?
            .name
            .clone();
        let rows = Self::parse_sheet(codec, bytes, prompter)?;
        let batch = parse_supplier_rows(&rows, supplier_id, RecordId::at(clock.now()));

        let message = format!(
            "Se encontraron {} facturas y {} pagos. ¿Deseas agregarlos a {}?",
            batch.invoices.len(),
            batch.payments.len(),
            supplier_name
        );
        if !prompter.confirm(&message) {
            return Ok(None);
        }

        let report = SupplierImportReport {
            invoices: batch.invoices.len(),
            payments: batch.payments.len(),
        };
        ledger.invoices.extend(batch.invoices);
        ledger.payments.extend(batch.payments);
        info!(
            supplier = %supplier_id,
            invoices = report.invoices,
            payments = report.payments,
            "supplier sheet imported"
        );
        prompter.notify("¡Datos importados con éxito!");
        Ok(Some(report))
    }

    /// Decodes workbook bytes; a codec failure aborts the import with one
    /// generic bad-file notification and no partial merge.
    fn parse_sheet(
        codec: &dyn SheetCodec,
        bytes: &[u8],
        prompter: &dyn Prompter,
    ) -> ServiceResult<Vec<Row>> {
        match codec.parse(bytes) {
            Ok(rows) => Ok(rows),
            Err(err) => {
                prompter.notify(
                    "Hubo un error al leer el archivo. Asegúrate de que tenga el formato que genera la app.",
                );
                Err(err.into())
            }
        }
    }
}
