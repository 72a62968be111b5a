//! Validated input fields for shopping list items
//!
//! Construction is the only place input is checked; the query layer binds
//! these values as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Optionally signed decimal text with up to 10 integer digits and up to 2
/// fractional digits. Matches the NUMERIC(12, 2) column.
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?(\d{1,10})(?:\.(\d{1,2}))?$").expect("invalid price regex")
});

/// Item name (free-form, non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Category label. The set is open; only blank labels are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "category" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Price as decimal text, normalized to two fractional digits.
///
/// The database hands NUMERIC(12, 2) back as `"5.50"`, so normalizing here
/// keeps an insert-then-read round trip textually identical. Negative
/// amounts (refunds, discounts) are allowed; a negative zero becomes `"0.00"`
/// like it does in Postgres.
///
/// # Example
/// ```
/// use shoplist_core::models::Price;
///
/// assert_eq!(Price::new("5.5").unwrap().as_str(), "5.50");
/// assert_eq!(Price::new("10").unwrap().as_str(), "10.00");
/// assert_eq!(Price::new("-2.5").unwrap().as_str(), "-2.50");
/// assert!(Price::new("1.234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(String);

impl Price {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "price" });
        }

        let caps = PRICE_RE
            .captures(s)
            .ok_or(ValidationError::InvalidFormat {
                field: "price",
                reason: "must be a decimal with at most two fractional digits",
            })?;

        let whole = caps[2].trim_start_matches('0');
        let whole = if whole.is_empty() { "0" } else { whole };
        let fraction = caps.get(3).map(|m| m.as_str()).unwrap_or("");

        let is_zero = whole == "0" && fraction.bytes().all(|b| b == b'0');
        let sign = if caps.get(1).is_some() && !is_zero { "-" } else { "" };

        Ok(Self(format!("{}{}.{:0<2}", sign, whole, fraction)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_conversions {
    ($($ty:ident),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    )*};
}

string_conversions!(ItemName, Category, Price);
