//! Line item quantities.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a leading count marker such as `(2 unidades)`.
static QUANTITY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\s").expect("Invalid regex"));

/// A positive unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, or `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        match NonZeroU32::new(count) {
            Some(count) => Some(Self(count)),
            None => None,
        }
    }

    /// Get the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Read the count from a parenthesised marker in menu text.
    ///
    /// The first `(<digits><whitespace>` wins. Text without a marker, or
    /// whose marker is zero or does not fit a `u32`, counts as one unit.
    ///
    /// ```rust
    /// # use menu_cart_core::Quantity;
    /// assert_eq!(Quantity::parse_marker("(2 unidades) R$ 10,00").get(), 2);
    /// assert_eq!(Quantity::parse_marker("R$ 10,00").get(), 1);
    /// ```
    #[must_use]
    pub fn parse_marker(text: &str) -> Self {
        QUANTITY_MARKER_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::ONE)
    }

    /// Sum of two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}
