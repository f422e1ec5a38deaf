//! Per-request bounds on solver work.

/// Largest amount accepted when no limit is configured.
pub const DEFAULT_MAX_AMOUNT: usize = 1_000_000;

/// Most distinct denominations accepted when no limit is configured.
pub const DEFAULT_MAX_DENOMINATIONS: usize = 100;

/// Bounds applied while validating requests.
///
/// The solver allocates one table slot per unit of the amount and visits
/// every distinct denomination per slot, so together the two ceilings cap
/// memory and time per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    max_amount: usize,
    max_denominations: usize,
}

impl ValidationLimits {
    /// Limits with the given amount ceiling and the default denomination cap.
    #[must_use]
    pub const fn new(max_amount: usize) -> Self {
        Self {
            max_amount,
            max_denominations: DEFAULT_MAX_DENOMINATIONS,
        }
    }

    /// Replace the cap on distinct denominations.
    #[must_use]
    pub const fn with_max_denominations(mut self, max_denominations: usize) -> Self {
        self.max_denominations = max_denominations;
        self
    }

    /// Largest accepted amount, inclusive.
    #[must_use]
    pub const fn max_amount(&self) -> usize {
        self.max_amount
    }

    /// Most distinct denominations a request may carry, inclusive.
    #[must_use]
    pub const fn max_denominations(&self) -> usize {
        self.max_denominations
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AMOUNT)
    }
}
