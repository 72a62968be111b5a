//! Pagination for the shopping list report

use serde::Serialize;

use super::ValidationError;

/// Fixed page size for the shopping list pagination report
pub const SHOPPING_LIST_PAGE_SIZE: u32 = 6;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Build pagination for the shopping list report (6 per page).
    ///
    /// Pages are 1-indexed. Page 0 or a negative page is rejected rather
    /// than producing a negative OFFSET.
    pub fn new(page: i64) -> Result<Self, ValidationError> {
        Self::with_page_size(page, SHOPPING_LIST_PAGE_SIZE)
    }

    pub fn with_page_size(page: i64, per_page: u32) -> Result<Self, ValidationError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(ValidationError::OutOfRange {
                field: "page",
                value: page,
            })?;

        if per_page == 0 {
            return Err(ValidationError::OutOfRange {
                field: "per_page",
                value: 0,
            });
        }

        Ok(Self { page, per_page })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: SHOPPING_LIST_PAGE_SIZE,
        }
    }
}
