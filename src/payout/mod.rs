//! Faan to dollar conversion.
//!
//! Hands below the qualifying minimum pay nothing; from the minimum up the
//! payout doubles per faan until a fixed cap.

/// One payout tier table. Swappable through `PayoutSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTable {
    /// Minimum qualifying hand value in faan.
    pub min_faan: i64,
    /// Dollar payout of a minimum hand.
    pub base: i64,
    /// Faan count at which the cap is reached.
    pub cap_threshold: i64,
    /// Dollar payout at and above the threshold.
    pub cap: i64,
}

/// 一二蚊 table: $32 at 3 faan, doubling to a $1,024 cap at 8 faan.
/// This is the canonical table.
pub const CLASSIC_TABLE: PayoutTable = PayoutTable {
    min_faan: 3,
    base: 32,
    cap_threshold: 8,
    cap: 1024,
};

/// Half-rate variant: $16 at 3 faan, same $1,024 cap reached at 9 faan.
pub const HALF_RATE_TABLE: PayoutTable = PayoutTable {
    min_faan: 3,
    base: 16,
    cap_threshold: 9,
    cap: 1024,
};

impl PayoutTable {
    /// Payout for a winning hand worth `faan`. Total over all integers:
    /// anything below the minimum, zero and negative included, pays 0.
    pub fn payout(&self, faan: i64) -> i64 {
        if faan < self.min_faan {
            return 0;
        }
        if faan >= self.cap_threshold {
            return self.cap;
        }
        // Exponent is bounded by the table shape: faan < cap_threshold,
        // so the shift stays far below 63 bits.
        self.base << (faan - self.min_faan)
    }
}

/// Payout under the canonical table.
pub fn calculate_payout(faan: i64) -> i64 {
    CLASSIC_TABLE.payout(faan)
}
