//! End-to-end procurement flows across the supplier and purchasing contexts.

use acme_core::{AggregateRoot, SequentialIds};
use acme_purchasing::{ProductId, PurchaseOrder};
use acme_shared::{Address, Money};
use acme_suppliers::{Supplier, SupplierId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup_tracing() {
    // Ignored if another test already installed it.
    acme_observability::init();
}

fn springfield() -> anyhow::Result<Address> {
    Ok(Address::new(
        "Main",
        "123",
        "Springfield",
        None,
        "00000",
        "US",
    )?)
}

fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn order_two_products_and_total_them() -> anyhow::Result<()> {
    setup_tracing();

    let mut order = PurchaseOrder::new("PO-1001", SupplierId::new("SUP-1")?, jan_first(), "USD")?;
    order.add_item(ProductId::generate(), 3, Decimal::new(1000, 2))?;
    order.add_item(ProductId::generate(), 2, Decimal::new(500, 2))?;

    assert_eq!(order.items().len(), 2);
    assert_eq!(order.calculate_total()?, Money::new(Decimal::new(4000, 2), "USD")?);
    Ok(())
}

#[test]
fn two_letter_currency_is_rejected() -> anyhow::Result<()> {
    let err = PurchaseOrder::new("PO-1002", SupplierId::new("SUP-1")?, jan_first(), "US")
        .unwrap_err();
    assert_eq!(err.argument(), Some("currency"));
    Ok(())
}

#[test]
fn supplier_with_explicit_id() -> anyhow::Result<()> {
    let supplier = Supplier::new("SUP-1", "Acme Corp", springfield()?)?;
    assert_eq!(supplier.id().identifier(), "SUP-1");

    let err = Supplier::new("", "Acme Corp", springfield()?).unwrap_err();
    assert_eq!(err.argument(), Some("id"));
    Ok(())
}

#[test]
fn address_renders_missing_region_as_empty_slot() -> anyhow::Result<()> {
    assert_eq!(
        springfield()?.to_string(),
        "Main 123, Springfield, , 00000, US"
    );
    Ok(())
}

#[test]
fn registered_supplier_places_an_order() -> anyhow::Result<()> {
    setup_tracing();

    let mut ids = SequentialIds::default();
    let supplier = Supplier::register_with("Acme Corp", springfield()?, &mut ids)?;
    let widget = ProductId::generate_with(&mut ids);
    let gadget = ProductId::generate_with(&mut ids);

    let mut order = PurchaseOrder::new("PO-2001", supplier.id().clone(), jan_first(), "EUR")?;
    order.add_item(widget, 10, Decimal::new(199, 2))?;
    order.add_item(gadget, 1, Decimal::new(25, 0))?;
    order.add_item(widget, 5, Decimal::new(199, 2))?;

    assert_eq!(order.supplier_id(), supplier.id());
    let lines: Vec<String> = order
        .items()
        .iter()
        .map(|item| item.calculate_item_total().map(|m| m.to_string()))
        .collect::<Result<_, _>>()?;
    assert_eq!(lines, vec!["19.90 EUR", "25 EUR", "9.95 EUR"]);
    assert_eq!(order.calculate_total()?.to_string(), "54.85 EUR");
    Ok(())
}

#[test]
fn failed_add_leaves_order_intact_and_usable() -> anyhow::Result<()> {
    let mut order = PurchaseOrder::new("PO-3001", SupplierId::generate(), jan_first(), "USD")?;
    order.add_item(ProductId::generate(), 1, Decimal::ONE)?;
    let before = order.calculate_total()?;

    assert!(order.add_item(ProductId::generate(), 0, Decimal::ONE).is_err());
    assert!(order.add_item(ProductId::generate(), 1, Decimal::ZERO).is_err());

    assert_eq!(order.items().len(), 1);
    assert_eq!(order.calculate_total()?, before);

    order.add_item(ProductId::generate(), 1, Decimal::ONE)?;
    assert_eq!(order.calculate_total()?.amount(), Decimal::from(2));
    Ok(())
}

#[test]
fn persisted_order_is_rebuilt_by_replay() -> anyhow::Result<()> {
    let mut ids = SequentialIds::default();
    let mut order = PurchaseOrder::new("PO-4001", SupplierId::new("SUP-9")?, jan_first(), "JPY")?;
    for quantity in 1..=5 {
        order.add_item(ProductId::generate_with(&mut ids), quantity, Decimal::from(100))?;
    }

    let stored = serde_json::to_string(&order)?;
    let restored: PurchaseOrder = serde_json::from_str(&stored)?;

    assert_eq!(restored, order);
    assert_eq!(restored.id(), "PO-4001");
    assert_eq!(restored.calculate_total()?.to_string(), "1500 JPY");
    Ok(())
}
