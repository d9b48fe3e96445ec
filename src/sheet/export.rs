//! Builds report sheets from ledger records.

use chrono::NaiveDate;

use crate::currency::{format_date, LocaleConfig, CURRENCY_CELL_FORMAT};
use crate::domain::common::RecordId;
use crate::domain::ledger::Ledger;
use crate::errors::LedgerError;

use super::{Cell, CellStyle, Row, SheetDoc};

/// Display label when a debt's customer no longer exists.
pub const UNKNOWN_CUSTOMER_LABEL: &str = "Cliente Desconocido";

/// Column where the payments table starts in a supplier report (column I).
pub const PAYMENTS_ORIGIN_COL: usize = 8;

/// One sheet of all customer debts: `[CLIENTE, FECHA, MONTO]`, one row per
/// debt joined with its customer's name, sorted by that name. Currency
/// formatting is pinned to the MONTO column.
pub fn debts_report(ledger: &Ledger, locale: &LocaleConfig) -> SheetDoc {
    let mut entries: Vec<(String, NaiveDate, f64)> = ledger
        .debts
        .iter()
        .map(|debt| {
            let name = ledger
                .customer(debt.customer_id)
                .map(|customer| customer.name.clone())
                .unwrap_or_else(|| UNKNOWN_CUSTOMER_LABEL.to_string());
            (name, debt.date, debt.amount)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut rows: Vec<Row> = Vec::with_capacity(entries.len() + 1);
    rows.push(vec![
        Cell::Text("CLIENTE".into()),
        Cell::Text("FECHA".into()),
        Cell::Text("MONTO".into()),
    ]);
    let mut styles = Vec::with_capacity(entries.len());
    for (name, date, amount) in entries {
        styles.push(CellStyle {
            row: rows.len(),
            col: 2,
            number_format: CURRENCY_CELL_FORMAT.into(),
        });
        rows.push(vec![
            Cell::Text(name),
            Cell::Text(format_date(locale, date)),
            Cell::Number(amount),
        ]);
    }

    SheetDoc {
        sheet_name: "Deudas de Clientes".into(),
        file_name: "Reporte_Deudas_Clientes.xlsx".into(),
        rows,
        styles,
    }
}

/// One sheet for a single supplier: invoices at columns A-E
/// `[FECHA, VENCIMIENTO, N°, MONTO, RECHAZO]` and payments at columns I-J
/// `[FECHA, MONTO]`, both newest first as shown on screen. Currency
/// formatting is pinned to the MONTO, RECHAZO and payment MONTO columns.
pub fn supplier_report(
    ledger: &Ledger,
    supplier_id: RecordId,
    locale: &LocaleConfig,
) -> Result<SheetDoc, LedgerError> {
    let supplier = ledger
        .supplier(supplier_id)
        .ok_or(LedgerError::UnknownSupplier(supplier_id))?;

    let mut invoices: Vec<_> = ledger.invoices_of(supplier_id).collect();
    invoices.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    let mut payments: Vec<_> = ledger.payments_of(supplier_id).collect();
    payments.sort_by(|a, b| b.date.cmp(&a.date));

    let data_rows = invoices.len().max(payments.len());
    let mut rows: Vec<Row> = Vec::with_capacity(data_rows + 1);
    let mut header = vec![Cell::Empty; PAYMENTS_ORIGIN_COL + 2];
    header[0] = Cell::Text("FECHA".into());
    header[1] = Cell::Text("VENCIMIENTO".into());
    header[2] = Cell::Text("N°".into());
    header[3] = Cell::Text("MONTO".into());
    header[4] = Cell::Text("RECHAZO".into());
    header[PAYMENTS_ORIGIN_COL] = Cell::Text("FECHA".into());
    header[PAYMENTS_ORIGIN_COL + 1] = Cell::Text("MONTO".into());
    rows.push(header);

    let mut styles = Vec::new();
    for index in 0..data_rows {
        let row_index = index + 1;
        let mut row = vec![Cell::Empty; PAYMENTS_ORIGIN_COL + 2];
        if let Some(invoice) = invoices.get(index) {
            row[0] = Cell::Text(format_date(locale, invoice.issue_date));
            row[1] = match invoice.due_date {
                Some(due) => Cell::Text(format_date(locale, due)),
                None => Cell::Empty,
            };
            row[2] = Cell::Text(invoice.number.clone());
            row[3] = Cell::Number(invoice.amount);
            row[4] = Cell::Number(invoice.rejection);
            for col in [3, 4] {
                styles.push(CellStyle {
                    row: row_index,
                    col,
                    number_format: CURRENCY_CELL_FORMAT.into(),
                });
            }
        }
        if let Some(payment) = payments.get(index) {
            row[PAYMENTS_ORIGIN_COL] = Cell::Text(format_date(locale, payment.date));
            row[PAYMENTS_ORIGIN_COL + 1] = Cell::Number(payment.amount);
            styles.push(CellStyle {
                row: row_index,
                col: PAYMENTS_ORIGIN_COL + 1,
                number_format: CURRENCY_CELL_FORMAT.into(),
            });
        }
        rows.push(row);
    }

    Ok(SheetDoc {
        sheet_name: supplier.name.clone(),
        file_name: format!("Reporte_{}.xlsx", supplier.name),
        rows,
        styles,
    })
}
