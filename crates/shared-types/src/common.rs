use serde::{Deserialize, Serialize};

use crate::AppError;

/// Response wrapper every endpoint answers with: `{ success, message?, data? }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A falsy `success` becomes a `Rejected` error carrying the server message.
    pub fn into_result(self, fallback: &str) -> Result<Option<T>, AppError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(AppError::rejected(message))
        }
    }
}

/// Fixed page size of the branch table.
pub const BRANCH_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` rows: `ceil(total / per_page)`.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Rows shown on 1-indexed `page`: `[per_page * (page - 1), per_page * page)`, clipped.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = per_page.saturating_mul(page - 1);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Client-side pager over an in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self { page: 1, per_page }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        page_count(total, self.per_page)
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advance one page, never past the last page (and never below page 1).
    pub fn next(&mut self, total: usize) {
        let last = self.total_pages(total).max(1);
        self.page = (self.page + 1).min(last);
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.page, self.per_page)
    }
}
