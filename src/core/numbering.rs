use std::sync::atomic::{AtomicU64, Ordering};

use super::error::{FakturaError, Result};

static GLOBAL: InvoiceCounter = InvoiceCounter::new();

/// Sequential invoice number source.
///
/// Numbers start at 1 (or the value given to [`starting_at`](Self::starting_at))
/// and increase by one for every issued invoice. Issuing is a single atomic
/// fetch-add, so a counter shared between threads never hands out the same
/// number twice and numbers drawn later are always greater.
#[derive(Debug)]
pub struct InvoiceCounter {
    next_number: AtomicU64,
}

impl InvoiceCounter {
    /// Create a counter starting at 1.
    pub const fn new() -> Self {
        Self {
            next_number: AtomicU64::new(1),
        }
    }

    /// Create a counter continuing from a given number.
    pub fn starting_at(next_number: u64) -> Result<Self> {
        if next_number == 0 {
            return Err(FakturaError::invalid("invoice numbers start at 1"));
        }
        Ok(Self {
            next_number: AtomicU64::new(next_number),
        })
    }

    /// The process-wide counter used by [`Invoice::new`](super::Invoice::new).
    /// It starts at 1 and is never reset.
    pub fn global() -> &'static InvoiceCounter {
        &GLOBAL
    }

    /// Issue the next number.
    pub fn next_number(&self) -> u64 {
        self.next_number.fetch_add(1, Ordering::Relaxed)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> u64 {
        self.next_number.load(Ordering::Relaxed)
    }
}

impl Default for InvoiceCounter {
    fn default() -> Self {
        Self::new()
    }
}
