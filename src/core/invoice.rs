use std::fmt;
use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::{FakturaError, Result};
use super::numbering::InvoiceCounter;
use super::text;
use super::types::Product;

#[derive(Debug)]
struct Line {
    product: Arc<Product>,
    quantity: u64,
}

/// An invoice: a numbered, insertion-ordered list of product lines.
///
/// Lines are keyed by the identity of the `Arc<Product>` passed to
/// [`add_product`](Self::add_product). Adding the same `Arc` again increases
/// the quantity of its existing line; a separately constructed product with
/// the same name and price gets a line of its own.
///
/// Totals are recomputed from the lines on every call. Additions that would
/// push a line amount or a total out of the `Decimal` range are rejected, so
/// the queries never overflow.
#[derive(Debug)]
pub struct Invoice {
    number: u64,
    lines: Vec<Line>,
}

impl Invoice {
    /// Create an empty invoice numbered from the process-wide counter.
    pub fn new() -> Self {
        Self::with_counter(InvoiceCounter::global())
    }

    /// Create an empty invoice numbered from `counter`.
    pub fn with_counter(counter: &InvoiceCounter) -> Self {
        let number = counter.next_number();
        tracing::debug!(number, "issued invoice");
        Self {
            number,
            lines: Vec::new(),
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Add one unit of `product`.
    pub fn add_product(&mut self, product: &Arc<Product>) -> Result<()> {
        self.add_product_qty(product, 1)
    }

    /// Add `quantity` units of `product`.
    ///
    /// Fails without touching the invoice when `quantity` is zero or negative,
    /// when the merged or total quantity would overflow, or when any line
    /// amount or invoice total would leave the `Decimal` range.
    pub fn add_product_qty(&mut self, product: &Arc<Product>, quantity: i64) -> Result<()> {
        let quantity = u64::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                FakturaError::invalid(format!("quantity must be positive, got {quantity}"))
            })?;

        let position = self
            .lines
            .iter()
            .position(|line| Arc::ptr_eq(&line.product, product));
        let line_quantity = match position {
            Some(i) => self.lines[i].quantity.checked_add(quantity),
            None => Some(quantity),
        };
        let total_fits = self.total_quantity().checked_add(quantity).is_some();
        let line_quantity = line_quantity.filter(|_| total_fits).ok_or_else(|| {
            FakturaError::invalid(format!("quantity of '{}' would overflow", product.name()))
        })?;

        self.check_amounts(position, product, line_quantity)
            .ok_or_else(|| {
                FakturaError::invalid(format!(
                    "amounts for {line_quantity} × '{}' exceed the supported range",
                    product.name()
                ))
            })?;

        match position {
            Some(i) => self.lines[i].quantity = line_quantity,
            None => self.lines.push(Line {
                product: Arc::clone(product),
                quantity,
            }),
        }
        Ok(())
    }

    /// Replays the totals with `product` at `line_quantity`, in the same order
    /// and with the same operations as [`net_total`](Self::net_total) and
    /// [`gross_total`](Self::gross_total). `None` means some step overflows.
    fn check_amounts(
        &self,
        position: Option<usize>,
        product: &Product,
        line_quantity: u64,
    ) -> Option<()> {
        let quantities = self.lines.iter().enumerate().map(|(i, line)| {
            let qty = if Some(i) == position {
                line_quantity
            } else {
                line.quantity
            };
            (&*line.product, qty)
        });
        let appended = position.is_none().then_some((product, line_quantity));

        let mut net = Decimal::ZERO;
        let mut gross = Decimal::ZERO;
        for (product, qty) in quantities.chain(appended) {
            let qty = Decimal::from(qty);
            net = net.checked_add(product.price().checked_mul(qty)?)?;
            gross = gross.checked_add(product.price_with_tax().checked_mul(qty)?)?;
        }
        Some(())
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = InvoiceLine<'_>> {
        self.lines.iter().map(|line| InvoiceLine {
            product: &line.product,
            quantity: line.quantity,
        })
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the quantities of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Accumulated quantity of this exact product instance, if present.
    pub fn quantity_of(&self, product: &Arc<Product>) -> Option<u64> {
        self.lines
            .iter()
            .find(|line| Arc::ptr_eq(&line.product, product))
            .map(|line| line.quantity)
    }

    /// Σ price × quantity.
    pub fn net_total(&self) -> Decimal {
        self.lines().map(|line| line.net_total()).sum()
    }

    /// Σ price with tax × quantity.
    pub fn gross_total(&self) -> Decimal {
        self.lines().map(|line| line.gross_total()).sum()
    }

    /// Gross minus net.
    pub fn tax_total(&self) -> Decimal {
        self.gross_total() - self.net_total()
    }

    /// Render the invoice as plain text, rounding amounts with
    /// [`MONEY_ROUNDING`](text::MONEY_ROUNDING).
    pub fn as_text(&self) -> String {
        text::render(self, text::MONEY_ROUNDING)
    }

    /// Render with an explicit rounding strategy for printed amounts.
    pub fn as_text_with(&self, strategy: RoundingStrategy) -> String {
        text::render(self, strategy)
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Read-only view of one invoice line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InvoiceLine<'a> {
    product: &'a Product,
    quantity: u64,
}

impl<'a> InvoiceLine<'a> {
    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// price × quantity.
    pub fn net_total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }

    /// price with tax × quantity.
    pub fn gross_total(&self) -> Decimal {
        self.product.price_with_tax() * Decimal::from(self.quantity)
    }
}
