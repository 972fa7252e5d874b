//! # fakturka
//!
//! Small invoicing library: products in three fixed tax categories and an
//! invoice that aggregates them into net, tax and gross totals and renders a
//! plain-text summary.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use fakturka::core::*;
//! use rust_decimal_macros::dec;
//!
//! let counter = InvoiceCounter::new();
//! let mut invoice = Invoice::with_counter(&counter);
//!
//! let bread = Product::tax_free("Chleb", dec!(5)).unwrap().shared();
//! let kefir = Product::dairy("Kefir", dec!(100)).unwrap().shared();
//!
//! invoice.add_product_qty(&bread, 2).unwrap();
//! invoice.add_product(&kefir).unwrap();
//!
//! assert_eq!(invoice.number(), 1);
//! assert_eq!(invoice.net_total(), dec!(110));
//! assert_eq!(invoice.gross_total(), dec!(118));
//! assert_eq!(invoice.tax_total(), dec!(8));
//! assert_eq!(
//!     invoice.as_text(),
//!     "Faktura nr 1\nChleb 2 10.00\nKefir 1 100.00\nLiczba pozycji: 3"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Products, invoices, numbering, text rendering |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
