//! Plain-text invoice rendering.
//!
//! ```text
//! Faktura nr <number>
//! <name> <quantity> <line net total>
//! ...
//! Liczba pozycji: <sum of quantities>
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline. Money is
//! printed with exactly two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

use super::invoice::Invoice;

/// Rounding used for printed amounts: banker's rounding (ties go to the even
/// cent), so `0.125` prints as `0.12` and `0.135` as `0.14`.
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Format an amount with exactly two decimal places.
pub fn format_money(amount: Decimal, strategy: RoundingStrategy) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, strategy);
    rounded.rescale(2);
    rounded.to_string()
}

pub(crate) fn render(invoice: &Invoice, strategy: RoundingStrategy) -> String {
    let mut out = format!("Faktura nr {}", invoice.number());
    for line in invoice.lines() {
        out.push_str(&format!(
            "\n{} {} {}",
            line.product().name(),
            line.quantity(),
            format_money(line.net_total(), strategy)
        ));
    }
    out.push_str(&format!("\nLiczba pozycji: {}", invoice.total_quantity()));
    out
}
