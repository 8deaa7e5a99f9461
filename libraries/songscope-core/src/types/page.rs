//! Paginated result sets

use crate::query::Pagination;
use serde::{Deserialize, Serialize};

/// One page of a filtered result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the whole filtered set, independent of paging
    pub total_count: u64,
    /// 1-based page number that was requested
    pub page: u64,
    /// Always at least 1, even for an empty set
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total_count,
            page: pagination.page(),
            total_pages: pagination.total_pages(total_count),
        }
    }
}
