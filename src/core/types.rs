use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{FakturaError, Result};

/// Tax category of a product. Each category carries a fixed tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxCategory {
    /// Not taxed (0%).
    TaxFree,
    /// Reduced rate for dairy products (8%).
    Dairy,
    /// Standard rate for everything else (23%).
    Other,
}

impl TaxCategory {
    /// Tax rate as a decimal fraction (0.08 for 8%).
    pub fn rate(&self) -> Decimal {
        match self {
            Self::TaxFree => Decimal::ZERO,
            Self::Dairy => dec!(0.08),
            Self::Other => dec!(0.23),
        }
    }

    /// Short code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaxFree => "TAX_FREE",
            Self::Dairy => "DAIRY",
            Self::Other => "OTHER",
        }
    }

    /// Parse from code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TAX_FREE" => Some(Self::TaxFree),
            "DAIRY" => Some(Self::Dairy),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A purchasable item: name, net unit price and tax category.
///
/// Immutable after construction. Invoices key their lines by the identity of
/// the `Arc<Product>` they were given, not by field equality, so this type
/// deliberately does not implement `PartialEq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    price: Decimal,
    tax_rate: Decimal,
    category: TaxCategory,
}

impl Product {
    /// Create a product in the given tax category.
    ///
    /// Fails when `name` is empty, `price` is below zero, or the price with
    /// tax would not fit in a `Decimal`. A price of exactly zero is accepted.
    pub fn new(name: impl Into<String>, price: Decimal, category: TaxCategory) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FakturaError::invalid("product name must not be empty"));
        }
        if price < Decimal::ZERO {
            return Err(FakturaError::invalid(format!(
                "product price must not be negative, got {price}"
            )));
        }
        let tax_rate = category.rate();
        if price
            .checked_mul(tax_rate)
            .and_then(|tax| price.checked_add(tax))
            .is_none()
        {
            return Err(FakturaError::invalid(format!(
                "price {price} with {} tax exceeds the supported range",
                category.code()
            )));
        }
        Ok(Self {
            name,
            price,
            tax_rate,
            category,
        })
    }

    /// Tax-free product (0%).
    pub fn tax_free(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(name, price, TaxCategory::TaxFree)
    }

    /// Dairy product (8%).
    pub fn dairy(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(name, price, TaxCategory::Dairy)
    }

    /// Product taxed at the standard rate (23%).
    pub fn other(name: impl Into<String>, price: Decimal) -> Result<Self> {
        Self::new(name, price, TaxCategory::Other)
    }

    /// Wrap in an `Arc` so the same instance can be added to invoices.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Net unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn category(&self) -> TaxCategory {
        self.category
    }

    /// `price + price * tax_rate`, unrounded.
    pub fn price_with_tax(&self) -> Decimal {
        self.price + self.price * self.tax_rate
    }
}

/// Wire shape accepted when deserializing a [`Product`]. The tax rate is
/// always taken from the category.
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    price: Decimal,
    category: TaxCategory,
}

impl TryFrom<ProductRecord> for Product {
    type Error = FakturaError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::new(record.name, record.price, record.category)
    }
}
