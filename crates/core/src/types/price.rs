//! Unit prices as authored on the menu page.
//!
//! Menu prices are written in Brazilian real notation (`R$ 1.234,56`): a
//! period groups thousands and a comma separates the cents. Amounts are kept
//! as `f64` so that a price which fails to parse travels through the cart as
//! NaN, the same value the page would have displayed.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::Quantity;

/// Currency marker stripped from display strings before parsing.
pub const CURRENCY_PREFIX: &str = "R$";

/// Leading decimal number; trailing text such as `(3 copos)` is ignored.
static AMOUNT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("Invalid regex")
});

/// A non-localised unit amount in the single fixed currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Get the raw amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Whether the amount came from text that did not parse.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Whether the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Parse a menu display string such as `R$ 1.234,56`.
    ///
    /// Strips the currency prefix, drops thousands separators, turns the
    /// decimal comma into a period and trims, then reads the longest leading
    /// number. Text that does not start with a number yields NaN.
    ///
    /// ```rust
    /// # use menu_cart_core::Price;
    /// assert_eq!(Price::parse_display("R$ 1.234,56").amount(), 1234.56);
    /// assert_eq!(Price::parse_display("R$ 8,00 (3 copos)").amount(), 8.0);
    /// assert!(Price::parse_display("sob consulta").is_nan());
    /// ```
    #[must_use]
    pub fn parse_display(text: &str) -> Self {
        let cleaned = text
            .replacen(CURRENCY_PREFIX, "", 1)
            .replace('.', "")
            .replace(',', ".");
        let amount = AMOUNT_PREFIX_RE
            .find(cleaned.trim())
            .and_then(|number| number.as_str().parse().ok())
            .unwrap_or(f64::NAN);
        Self(amount)
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0 * f64::from(quantity.get()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            let sign = if self.0 < 0.0 { "-" } else { "" };
            return write!(f, "{sign}Infinity");
        }
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// NaN is written as `null` by JSON encoders, so read it back the same way.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(|amount| Self(amount.unwrap_or(f64::NAN)))
    }
}
