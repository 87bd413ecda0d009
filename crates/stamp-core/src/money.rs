//! # Money Module
//!
//! Provides the `Amount` type for exact decimal values.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.60 + 0.45 - 1.05 = -0.00000000000000011  ❌ goal "not met"!       │
//! │                                                                         │
//! │  The search subtracts every chosen value from the goal and the cap,    │
//! │  then compares against zero. One ulp of drift flips an exact match     │
//! │  into a miss, or a cap hit into a prune.                               │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    0.60 + 0.45 - 1.05 = 0.00  (exactly)                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use stamp_core::money::Amount;
//!
//! let stamp = Amount::new(Decimal::new(60, 2)); // 0.60
//! let goal = Amount::new(Decimal::new(100, 2)); // 1.00
//!
//! let remaining = goal - stamp - stamp;
//! assert!(remaining.is_negative());
//! assert_eq!(remaining.negated().to_string(), "0.20");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// =============================================================================
// Amount Type
// =============================================================================

/// An exact decimal amount (stamp value, goal, cap, overage).
///
/// ## Design Decisions
/// - **Signed**: remaining goal and remaining budget go negative during search
/// - **Scale preserved**: `0.60` displays as `0.60`, the way it was typed
/// - **Numeric equality**: `1.0 == 1.00`
///
/// ## Where Amount is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Stamp.value ──┬──► remaining goal   (goal - Σ values)                 │
/// │                └──► remaining budget (cap  - Σ values)                 │
/// │                                                                         │
/// │  SearchResult.overage ──► total = goal + overage ──► "    1.20"        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Wraps a decimal value.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the underlying decimal.
    #[inline]
    pub const fn decimal(&self) -> Decimal {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the value with its sign flipped.
    ///
    /// Zero stays a positive zero so it never renders as `-0.00`.
    pub fn negated(&self) -> Self {
        let mut value = -self.0;
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Amount(value)
    }

    /// Checks whether the value has no fractional part.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Renders the value with exactly `places` decimal places.
    ///
    /// Rounds half to even, then pads with zeros.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stamp_core::money::Amount;
    ///
    /// let total = Amount::new(Decimal::new(120, 2)); // 1.20
    /// assert_eq!(total.to_fixed(6), "1.200000");
    /// ```
    pub fn to_fixed(&self, places: u32) -> String {
        let mut value = self
            .0
            .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
        value.rescale(places);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        value.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the decimal exactly as stored, scale included.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, amount| acc + amount)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, amount| acc + *amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
