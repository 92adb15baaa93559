//! Product prices in Indian Rupees.
//!
//! The catalog stores whole-rupee amounts (no paise). Display follows the
//! `en-IN` convention: the last three digits are grouped together and the
//! remaining digits in pairs, so `123456` renders as `₹1,23,456`.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Whole-rupee price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₹";

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    /// Returns the amount in whole rupees.
    #[must_use]
    pub const fn rupees(self) -> u64 {
        self.0
    }

    /// Format with the rupee symbol and Indian digit grouping.
    #[must_use]
    pub fn display(self) -> String {
        format!("{}{}", Self::SYMBOL, group_indian(self.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Group digits as `xx,xx,xxx`.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Sanity `number` fields may carry a fractional part; round to rupees.
        let raw = f64::deserialize(deserializer)?;
        if !raw.is_finite() || raw < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "price must be a non-negative number, got {raw}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(raw.round() as u64))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::new(0).display(), "₹0");
        assert_eq!(Price::new(999).display(), "₹999");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Price::new(8_999).display(), "₹8,999");
        assert_eq!(Price::new(12_999).display(), "₹12,999");
        assert_eq!(Price::new(123_456).display(), "₹1,23,456");
        assert_eq!(Price::new(12_345_678).display(), "₹1,23,45,678");
    }

    #[test]
    fn test_deserialize_integer_and_float() {
        let p: Price = serde_json::from_str("15999").unwrap();
        assert_eq!(p.rupees(), 15_999);
        let p: Price = serde_json::from_str("18999.4").unwrap();
        assert_eq!(p.rupees(), 18_999);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }

    #[test]
    fn test_ordering_follows_amount() {
        assert!(Price::new(100) < Price::new(101));
    }
}
