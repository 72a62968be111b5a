//! Outcome of single-row writes

use serde::Serialize;

/// How many rows an update or delete touched.
///
/// `id` is the primary key, so a statement filtered on it reaches at most
/// one row. `Zero` is an ordinary outcome; callers decide whether it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Affected {
    Zero,
    One,
}

impl Affected {
    pub fn from_rows(rows_affected: u64) -> Self {
        if rows_affected == 0 {
            Self::Zero
        } else {
            Self::One
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }

    pub fn count(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}
