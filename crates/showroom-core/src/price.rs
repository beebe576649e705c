//! # Price Module
//!
//! Provides the `Dollars` type for vehicle prices.
//!
//! Vehicle prices are listed in whole dollars: there is no minor unit
//! anywhere in the inventory. Keeping them as unsigned integers makes a
//! negative sticker price unrepresentable once a draft has been committed.
//!
//! ## Usage
//! ```rust
//! use showroom_core::price::Dollars;
//!
//! let price = Dollars::from_whole(28_500);
//! assert_eq!(price.to_string(), "$28,500");
//!
//! // Averages round half up, like the stats cards always have.
//! let avg = Dollars::average(28_500 + 32_000, 2);
//! assert_eq!(avg.whole(), 30_250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Dollars Type
// =============================================================================

/// A non-negative amount of whole dollars.
///
/// Newtype structs serialize as their inner value, so the render surface
/// sees `"price": 28500`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Dollars(u64);

impl Dollars {
    /// Creates a price from whole dollars.
    #[inline]
    pub const fn from_whole(dollars: u64) -> Self {
        Dollars(dollars)
    }

    /// Returns the amount in whole dollars.
    #[inline]
    pub const fn whole(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Dollars(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Average of `total` spread over `count` items, rounded half up.
    ///
    /// ## Rounding
    /// `(2 * total + count) / (2 * count)` is `floor(total / count + 0.5)`
    /// computed without floating point. An empty set averages to zero.
    ///
    /// ```rust
    /// use showroom_core::price::Dollars;
    ///
    /// assert_eq!(Dollars::average(0, 0), Dollars::zero());
    /// assert_eq!(Dollars::average(5, 2).whole(), 3); // 2.5 → 3
    /// assert_eq!(Dollars::average(7, 3).whole(), 2); // 2.33 → 2
    /// ```
    ///
    /// `total` is a `u128` so callers can sum any number of `u64` prices
    /// without overflow. The mean of `u64` prices always fits back in `u64`.
    pub fn average(total: u128, count: usize) -> Self {
        if count == 0 {
            return Dollars::zero();
        }

        let count = count as u128;
        let rounded = (2 * total + count) / (2 * count);
        Dollars(u64::try_from(rounded).unwrap_or(u64::MAX))
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an integer with comma thousands separators (`15000` → `15,000`).
///
/// Used for prices and odometer readings alike.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", group_thousands(self.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl From<u64> for Dollars {
    fn from(dollars: u64) -> Self {
        Dollars(dollars)
    }
}

impl Add for Dollars {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Dollars(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Dollars {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Dollars {
    fn sum<I: Iterator<Item = Dollars>>(iter: I) -> Self {
        iter.fold(Dollars::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
