mod common;

use almacen_core::currency::{LocaleConfig, CURRENCY_CELL_FORMAT};
use almacen_core::domain::common::RecordId;
use almacen_core::domain::customer::{Customer, Debt};
use almacen_core::domain::ledger::Ledger;
use almacen_core::domain::supplier::{Invoice, Payment, Supplier};
use almacen_core::sheet::export::{
    debts_report, supplier_report, PAYMENTS_ORIGIN_COL, UNKNOWN_CUSTOMER_LABEL,
};
use almacen_core::sheet::import::parse_supplier_rows;
use almacen_core::sheet::Cell;

use common::date;

fn text_of(cell: &Cell) -> &str {
    match cell {
        Cell::Text(text) => text,
        other => panic!("expected text cell, got {other:?}"),
    }
}

#[test]
fn debts_report_sorts_by_name_and_labels_orphans() {
    let mut ledger = Ledger::new();
    let zulema = ledger.add_customer(Customer::new(RecordId(1), "Zulema"));
    let ana = ledger.add_customer(Customer::new(RecordId(2), "Ana"));
    ledger.add_debt(Debt::new(RecordId(10), zulema, 80.0, date(2024, 1, 2)));
    ledger.add_debt(Debt::new(RecordId(11), ana, 100.0, date(2024, 1, 3)));
    // Debt whose customer was deleted out from under it.
    ledger.add_debt(Debt::new(RecordId(12), RecordId(99), 5.0, date(2024, 1, 4)));

    let locale = LocaleConfig::default();
    let doc = debts_report(&ledger, &locale);

    assert_eq!(doc.file_name, "Reporte_Deudas_Clientes.xlsx");
    assert_eq!(
        doc.rows[0],
        vec![
            Cell::Text("CLIENTE".into()),
            Cell::Text("FECHA".into()),
            Cell::Text("MONTO".into()),
        ]
    );
    let names: Vec<_> = doc.rows[1..].iter().map(|row| text_of(&row[0])).collect();
    assert_eq!(names, vec!["Ana", UNKNOWN_CUSTOMER_LABEL, "Zulema"]);
    assert_eq!(text_of(&doc.rows[3][1]), "02/01/2024");
    assert_eq!(doc.rows[3][2], Cell::Number(80.0));
    assert!(doc
        .styles
        .iter()
        .all(|style| style.col == 2 && style.number_format == CURRENCY_CELL_FORMAT));
    assert_eq!(doc.styles.len(), 3);
}

fn acme_ledger() -> (Ledger, RecordId) {
    let mut ledger = Ledger::new();
    let acme = ledger.add_supplier(Supplier::new(RecordId(1), "ACME"));
    ledger.add_invoice(Invoice::new(
        RecordId(10),
        acme,
        date(2024, 1, 2),
        Some(date(2024, 1, 9)),
        "A-1",
        500.0,
        50.0,
    ));
    ledger.add_invoice(Invoice::new(
        RecordId(11),
        acme,
        date(2024, 1, 5),
        None,
        "A-2",
        300.0,
        0.0,
    ));
    ledger.add_payment(Payment::new(RecordId(20), acme, 200.0, date(2024, 1, 6)));
    (ledger, acme)
}

#[test]
fn supplier_report_places_payments_at_column_i() {
    let (ledger, acme) = acme_ledger();
    let locale = LocaleConfig::default();
    let doc = supplier_report(&ledger, acme, &locale).unwrap();

    assert_eq!(doc.file_name, "Reporte_ACME.xlsx");
    assert_eq!(doc.sheet_name, "ACME");
    assert_eq!(text_of(&doc.rows[0][0]), "FECHA");
    assert_eq!(text_of(&doc.rows[0][4]), "RECHAZO");
    assert_eq!(text_of(&doc.rows[0][PAYMENTS_ORIGIN_COL]), "FECHA");

    // Invoices newest first; the dueless invoice leaves VENCIMIENTO empty.
    assert_eq!(text_of(&doc.rows[1][2]), "A-2");
    assert_eq!(doc.rows[1][1], Cell::Empty);
    assert_eq!(text_of(&doc.rows[2][2]), "A-1");
    assert_eq!(text_of(&doc.rows[2][1]), "09/01/2024");

    assert_eq!(text_of(&doc.rows[1][PAYMENTS_ORIGIN_COL]), "06/01/2024");
    assert_eq!(doc.rows[1][PAYMENTS_ORIGIN_COL + 1], Cell::Number(200.0));
    // Second data row has no payment.
    assert_eq!(doc.rows[2][PAYMENTS_ORIGIN_COL], Cell::Empty);

    assert!(doc
        .styles
        .iter()
        .any(|style| style.row == 1 && style.col == PAYMENTS_ORIGIN_COL + 1));
    assert!(doc
        .styles
        .iter()
        .all(|style| style.number_format == CURRENCY_CELL_FORMAT));
}

#[test]
fn unknown_supplier_report_fails() {
    let ledger = Ledger::new();
    let locale = LocaleConfig::default();
    assert!(supplier_report(&ledger, RecordId(42), &locale).is_err());
}

#[test]
fn supplier_report_roundtrips_through_import() {
    let (ledger, acme) = acme_ledger();
    let locale = LocaleConfig::default();
    let doc = supplier_report(&ledger, acme, &locale).unwrap();

    let batch = parse_supplier_rows(&doc.rows, acme, RecordId(5000));

    assert_eq!(batch.invoices.len(), 2);
    assert_eq!(batch.payments.len(), 1);

    // Export order is newest first, so compare against A-2 then A-1.
    assert_eq!(batch.invoices[0].number, "A-2");
    assert_eq!(batch.invoices[0].amount, 300.0);
    assert_eq!(batch.invoices[0].issue_date, date(2024, 1, 5));
    assert_eq!(batch.invoices[0].due_date, None);

    assert_eq!(batch.invoices[1].number, "A-1");
    assert_eq!(batch.invoices[1].amount, 500.0);
    assert_eq!(batch.invoices[1].rejection, 50.0);
    assert_eq!(batch.invoices[1].issue_date, date(2024, 1, 2));
    assert_eq!(batch.invoices[1].due_date, Some(date(2024, 1, 9)));

    assert_eq!(batch.payments[0].amount, 200.0);
    assert_eq!(batch.payments[0].date, date(2024, 1, 6));
}
