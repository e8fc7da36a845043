use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::{AggregateRoot, DomainError, DomainResult};
use acme_shared::{CurrencyCode, Money};
use acme_suppliers::SupplierId;

use crate::product::ProductId;

/// Purchase order line: a product, how many, and at what unit price.
///
/// Lines are created by [`PurchaseOrder::add_item`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderItemRecord")]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl PurchaseOrderItem {
    /// Validates the line on its own. Rejects non-positive quantities and
    /// lines whose total would not fit in a decimal.
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity",
                "must be greater than zero",
            ));
        }
        if line_amount(&unit_price, quantity).is_none() {
            return Err(DomainError::invalid_argument(
                "quantity",
                "line total exceeds the representable range",
            ));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// `unit_price * quantity`, in the unit price's currency.
    pub fn calculate_item_total(&self) -> DomainResult<Money> {
        let amount = line_amount(&self.unit_price, self.quantity)
            .ok_or_else(|| DomainError::invariant("purchase order line total overflow"))?;
        Money::in_currency(amount, self.unit_price.currency_code().clone())
    }
}

fn line_amount(unit_price: &Money, quantity: i64) -> Option<Decimal> {
    unit_price.amount().checked_mul(Decimal::from(quantity))
}

#[derive(Deserialize)]
struct PurchaseOrderItemRecord {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl TryFrom<PurchaseOrderItemRecord> for PurchaseOrderItem {
    type Error = DomainError;

    fn try_from(r: PurchaseOrderItemRecord) -> Result<Self, Self::Error> {
        Self::new(r.product_id, r.quantity, r.unit_price)
    }
}

/// Aggregate root: PurchaseOrder.
///
/// Every line is priced in the order's own currency: [`PurchaseOrder::add_item`]
/// takes only an amount and wraps it with `self.currency`, so a mixed-currency
/// order cannot be built. Lines are append-only and exposed as a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderRecord", into = "PurchaseOrderRecord")]
pub struct PurchaseOrder {
    order_number: String,
    supplier_id: SupplierId,
    order_date: NaiveDate,
    currency: CurrencyCode,
    items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrder {
    /// Only the currency is validated; any order number text is kept as given.
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: NaiveDate,
        currency: &str,
    ) -> DomainResult<Self> {
        let currency = CurrencyCode::parse(currency)?;

        Ok(Self {
            order_number: order_number.into(),
            supplier_id,
            order_date,
            currency,
            items: Vec::new(),
        })
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }

    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    /// Append a line priced at `unit_price_amount` in the order's currency.
    ///
    /// Both `quantity` and `unit_price_amount` must be strictly positive. On
    /// error the order is left untouched.
    ///
    /// The overflow check re-sums the existing lines, so each call is O(n) in
    /// the number of lines and building an n-line order costs O(n²).
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<()> {
        let item = self
            .prepare_item(product_id, quantity, unit_price_amount)
            .inspect_err(|err| {
                tracing::debug!(
                    order_number = %self.order_number,
                    %product_id,
                    quantity,
                    error = %err,
                    "purchase order item rejected"
                );
            })?;

        self.items.push(item);
        tracing::debug!(
            order_number = %self.order_number,
            %product_id,
            quantity,
            %unit_price_amount,
            line_no = self.items.len(),
            "purchase order item added"
        );
        Ok(())
    }

    /// Sum of all line totals in the order's currency (zero when empty).
    pub fn calculate_total(&self) -> DomainResult<Money> {
        let total = self
            .sum_items()
            .ok_or_else(|| DomainError::invariant("purchase order total overflow"))?;
        Money::in_currency(total, self.currency.clone())
    }

    fn prepare_item(
        &self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<PurchaseOrderItem> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity",
                "must be greater than zero",
            ));
        }
        if unit_price_amount <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "unit_price_amount",
                "must be greater than zero",
            ));
        }

        let unit_price = Money::in_currency(unit_price_amount, self.currency.clone())?;
        let item = PurchaseOrderItem::new(product_id, quantity, unit_price)?;

        // Keep the running total representable so `calculate_total` cannot overflow.
        let fits = self
            .sum_items()
            .zip(line_amount(item.unit_price(), item.quantity()))
            .and_then(|(total, line)| total.checked_add(line))
            .is_some();
        if !fits {
            return Err(DomainError::invalid_argument(
                "unit_price_amount",
                "order total exceeds the representable range",
            ));
        }

        Ok(item)
    }

    fn sum_items(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(line_amount(item.unit_price(), item.quantity())?)
        })
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }
}

/// Storage shape of a purchase order: the header plus its lines in insertion order.
#[derive(Serialize, Deserialize)]
struct PurchaseOrderRecord {
    order_number: String,
    supplier_id: SupplierId,
    order_date: NaiveDate,
    currency: String,
    items: Vec<PurchaseOrderItem>,
}

impl From<PurchaseOrder> for PurchaseOrderRecord {
    fn from(order: PurchaseOrder) -> Self {
        Self {
            order_number: order.order_number,
            supplier_id: order.supplier_id,
            order_date: order.order_date,
            currency: order.currency.into(),
            items: order.items,
        }
    }
}

/// Rebuild by replaying the header and then `add_item` for each stored line.
impl TryFrom<PurchaseOrderRecord> for PurchaseOrder {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderRecord) -> Result<Self, Self::Error> {
        let mut order = Self::new(
            record.order_number,
            record.supplier_id,
            record.order_date,
            &record.currency,
        )?;

        for item in record.items {
            if item.unit_price().currency() != order.currency() {
                return Err(DomainError::invalid_argument(
                    "unit_price",
                    format!(
                        "currency {} does not match order currency {}",
                        item.unit_price().currency(),
                        order.currency()
                    ),
                ));
            }
            order.add_item(item.product_id(), item.quantity(), item.unit_price().amount())?;
        }

        Ok(order)
    }
}
