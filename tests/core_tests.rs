use std::sync::Arc;

use fakturka::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn invoice() -> Invoice {
    Invoice::with_counter(&InvoiceCounter::new())
}

fn tax_free(name: &str, price: Decimal) -> Arc<Product> {
    Product::tax_free(name, price).unwrap().shared()
}

fn dairy(name: &str, price: Decimal) -> Arc<Product> {
    Product::dairy(name, price).unwrap().shared()
}

fn other(name: &str, price: Decimal) -> Arc<Product> {
    Product::other(name, price).unwrap().shared()
}

// --- Totals ---

#[test]
fn empty_invoice_has_zero_totals() {
    let inv = invoice();
    assert_eq!(inv.net_total(), Decimal::ZERO);
    assert_eq!(inv.tax_total(), Decimal::ZERO);
    assert_eq!(inv.gross_total(), Decimal::ZERO);
}

#[test]
fn tax_free_net_equals_gross() {
    let mut inv = invoice();
    inv.add_product(&tax_free("Warzywa", dec!(199.99))).unwrap();
    assert_eq!(inv.net_total(), inv.gross_total());
}

#[test]
fn net_total_for_many_products() {
    let mut inv = invoice();
    inv.add_product(&tax_free("Owoce", dec!(200))).unwrap();
    inv.add_product(&dairy("Maslanka", dec!(100))).unwrap();
    inv.add_product(&other("Wino", dec!(10))).unwrap();
    assert_eq!(inv.net_total(), dec!(310));
}

#[test]
fn tax_total_for_many_products() {
    let mut inv = invoice();
    // tax: 0
    inv.add_product(&tax_free("Pampersy", dec!(200))).unwrap();
    // tax: 8
    inv.add_product(&dairy("Kefir", dec!(100))).unwrap();
    // tax: 2.30
    inv.add_product(&other("Piwko", dec!(10))).unwrap();
    assert_eq!(inv.tax_total(), dec!(10.30));
}

#[test]
fn gross_total_for_many_products() {
    let mut inv = invoice();
    inv.add_product(&tax_free("Maskotki", dec!(200))).unwrap();
    inv.add_product(&dairy("Maslo", dec!(100))).unwrap();
    inv.add_product(&other("Chipsy", dec!(10))).unwrap();
    assert_eq!(inv.gross_total(), dec!(320.30));
}

#[test]
fn net_total_with_quantities() {
    let mut inv = invoice();
    // 2 × 5 = 10
    inv.add_product_qty(&tax_free("Kubek", dec!(5)), 2).unwrap();
    // 3 × 10 = 30
    inv.add_product_qty(&dairy("Kozi Serek", dec!(10)), 3).unwrap();
    // 1000 × 0.01 = 10
    inv.add_product_qty(&other("Pinezka", dec!(0.01)), 1000).unwrap();
    assert_eq!(inv.net_total(), dec!(50));
}

#[test]
fn gross_total_with_quantities() {
    let mut inv = invoice();
    // 10
    inv.add_product_qty(&tax_free("Chleb", dec!(5)), 2).unwrap();
    // 32.40
    inv.add_product_qty(&dairy("Chedar", dec!(10)), 3).unwrap();
    // 12.30
    inv.add_product_qty(&other("Pinezka", dec!(0.01)), 1000).unwrap();
    assert_eq!(inv.gross_total(), dec!(54.70));
}

#[test]
fn totals_change_after_more_lines() {
    let mut inv = invoice();
    let milk = dairy("Mleko", dec!(2.50));
    inv.add_product(&milk).unwrap();
    assert_eq!(inv.gross_total(), dec!(2.70));
    inv.add_product_qty(&milk, 3).unwrap();
    assert_eq!(inv.net_total(), dec!(10));
    assert_eq!(inv.gross_total(), dec!(10.80));
}

// --- Quantity validation ---

#[test]
fn zero_quantity_rejected() {
    let mut inv = invoice();
    let err = inv
        .add_product_qty(&tax_free("Tablet", dec!(1678)), 0)
        .unwrap_err();
    assert!(matches!(err, FakturaError::InvalidArgument(_)));
    assert_eq!(inv.line_count(), 0);
}

#[test]
fn negative_quantity_rejected() {
    let mut inv = invoice();
    let err = inv
        .add_product_qty(&dairy("Zsiadle mleko", dec!(5.55)), -1)
        .unwrap_err();
    assert!(matches!(err, FakturaError::InvalidArgument(_)));
    assert_eq!(inv.line_count(), 0);
}

// --- Numbering ---

#[test]
fn first_invoice_from_fresh_counter_is_one() {
    let counter = InvoiceCounter::new();
    assert_eq!(Invoice::with_counter(&counter).number(), 1);
}

#[test]
fn invoice_numbers_in_sequence() {
    let counter = InvoiceCounter::new();
    let first = Invoice::with_counter(&counter);
    let second = Invoice::with_counter(&counter);
    assert!(second.number() > first.number());
    assert_ne!(first.number(), second.number());
}

#[test]
fn number_of_single_invoice_is_stable() {
    let inv = invoice();
    assert_eq!(inv.number(), inv.number());
}

#[test]
fn global_numbers_increase() {
    let first = Invoice::new();
    let second = Invoice::new();
    assert!(first.number() > 0);
    assert!(second.number() > first.number());
}

#[test]
fn counter_continues_from_start_value() {
    let counter = InvoiceCounter::starting_at(100).unwrap();
    let inv = Invoice::with_counter(&counter);
    assert_eq!(inv.number(), 100);
    assert_eq!(counter.peek(), 101);
}

// --- Text rendering ---

#[test]
fn printed_invoice_has_number() {
    let inv = invoice();
    assert!(inv.as_text().contains(&format!("nr {}", inv.number())));
}

#[test]
fn printed_product_details() {
    let mut inv = invoice();
    inv.add_product_qty(&tax_free("Chleb", dec!(5)), 10).unwrap();
    assert!(inv.as_text().contains("Chleb 10 50.00"));
}

#[test]
fn printed_many_product_details() {
    let mut inv = invoice();
    inv.add_product_qty(&tax_free("Bulka", dec!(1)), 10).unwrap();
    inv.add_product_qty(&tax_free("Maslo", dec!(2)), 10).unwrap();
    inv.add_product_qty(&tax_free("Banan", dec!(5)), 10).unwrap();

    let text = inv.as_text();
    assert!(text.contains("Bulka 10 10.00\nMaslo 10 20.00\nBanan 10 50.00"));
    assert!(text.contains("Liczba pozycji: 30"));
}

#[test]
fn same_product_twice_prints_one_line() {
    let mut inv = invoice();
    let bulka = tax_free("Bulka", dec!(1));
    inv.add_product_qty(&bulka, 10).unwrap();
    inv.add_product_qty(&bulka, 2).unwrap();

    let text = inv.as_text();
    assert!(text.contains("Bulka 12 12.00"));
    assert_eq!(text.matches("Bulka").count(), 1);
}

#[test]
fn separately_built_equal_products_print_two_lines() {
    let mut inv = invoice();
    inv.add_product_qty(&tax_free("Bulka", dec!(1)), 10).unwrap();
    inv.add_product_qty(&tax_free("Bulka", dec!(1)), 2).unwrap();

    let text = inv.as_text();
    assert!(text.contains("Bulka 10 10.00\nBulka 2 2.00"));
    assert!(text.contains("Liczba pozycji: 12"));
}

#[test]
fn printed_line_total_is_net() {
    let mut inv = invoice();
    inv.add_product_qty(&other("Wino", dec!(10)), 2).unwrap();
    assert!(inv.as_text().contains("Wino 2 20.00"));
}

#[test]
fn full_text_snapshot() {
    let counter = InvoiceCounter::starting_at(7).unwrap();
    let mut inv = Invoice::with_counter(&counter);
    inv.add_product_qty(&tax_free("Kubek", dec!(5)), 2).unwrap();
    inv.add_product_qty(&dairy("Kozi Serek", dec!(10)), 3).unwrap();
    inv.add_product_qty(&other("Pinezka", dec!(0.01)), 1000).unwrap();

    insta::assert_snapshot!(inv.as_text(), @r"
    Faktura nr 7
    Kubek 2 10.00
    Kozi Serek 3 30.00
    Pinezka 1000 10.00
    Liczba pozycji: 1005
    ");
}

#[test]
fn empty_invoice_text() {
    let counter = InvoiceCounter::new();
    let inv = Invoice::with_counter(&counter);
    assert_eq!(inv.as_text(), "Faktura nr 1\nLiczba pozycji: 0");
}
