//! Core invoicing types, totals, numbering and text rendering.
//!
//! Products are shared as `Arc<Product>` and invoice lines are keyed by
//! pointer identity: adding the same `Arc` twice merges quantities, while two
//! separately constructed products with equal fields stay on separate lines.

mod error;
mod invoice;
mod numbering;
pub mod text;
mod types;

pub use error::*;
pub use invoice::*;
pub use numbering::*;
pub use text::MONEY_ROUNDING;
pub use types::*;
