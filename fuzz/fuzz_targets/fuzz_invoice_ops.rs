#![no_main]

use std::sync::Arc;

use fakturka::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

/// One operation per 22 bytes: flags, 96-bit price mantissa, scale, quantity.
const OP_LEN: usize = 22;

fuzz_target!(|data: &[u8]| {
    // Must not panic — rejected arguments are fine, panics are bugs.
    let counter = InvoiceCounter::new();
    let mut invoice = Invoice::with_counter(&counter);
    let mut products: Vec<Arc<Product>> = Vec::new();

    for op in data.chunks_exact(OP_LEN) {
        let flags = op[0];
        let category = match flags % 3 {
            0 => TaxCategory::TaxFree,
            1 => TaxCategory::Dairy,
            _ => TaxCategory::Other,
        };

        let mut mantissa = [0u8; 16];
        mantissa[..12].copy_from_slice(&op[1..13]);
        let mut mantissa = i128::from_le_bytes(mantissa);
        if flags & 0x20 != 0 {
            mantissa = -mantissa;
        }
        let price = Decimal::from_i128_with_scale(mantissa, u32::from(op[13]) % 29);

        let mut quantity = [0u8; 8];
        quantity.copy_from_slice(&op[14..22]);
        let quantity = i64::from_le_bytes(quantity);

        let reuse = flags & 0x80 != 0 && !products.is_empty();
        let product = if reuse {
            Arc::clone(&products[usize::from(op[1]) % products.len()])
        } else {
            let name = if flags & 0x40 != 0 { "" } else { "Item" };
            match Product::new(name, price, category) {
                Ok(p) => {
                    let p = p.shared();
                    products.push(Arc::clone(&p));
                    p
                }
                Err(_) => continue,
            }
        };

        let before_lines = invoice.line_count();
        let before_qty = invoice.quantity_of(&product);
        if invoice.add_product_qty(&product, quantity).is_err() {
            assert_eq!(invoice.line_count(), before_lines);
            assert_eq!(invoice.quantity_of(&product), before_qty);
        }

        let net = invoice.net_total();
        let gross = invoice.gross_total();
        assert_eq!(invoice.tax_total(), gross - net);
        let _ = invoice.total_quantity();
    }

    let _ = invoice.as_text();
});
