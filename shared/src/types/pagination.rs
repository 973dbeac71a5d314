//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Raw pagination query parameters
///
/// Values are signed so that out-of-range input can be clamped instead of
/// rejected. A value of `0` is treated the same as an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Resolve against the configured defaults
    pub fn resolve(&self, config: &PaginationConfig) -> PaginationResult {
        get_pagination_params(self, config.default_limit, config.max_limit)
    }
}

/// Offset/limit pair ready for a database query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    pub skip: u64,
    pub take: u32,
    pub page: u32,
    pub limit: u32,
}

/// Clamp page/limit and convert them to an offset/limit pair
///
/// `page` is at least 1; `limit` lies in `1..=max_limit`.
pub fn get_pagination_params(
    params: &PaginationParams,
    default_limit: u32,
    max_limit: u32,
) -> PaginationResult {
    let page = params.page.filter(|p| *p != 0).unwrap_or(1).max(1);
    let page = u32::try_from(page).unwrap_or(u32::MAX);

    let limit = params
        .limit
        .filter(|l| *l != 0)
        .unwrap_or(i64::from(default_limit))
        .max(1)
        .min(i64::from(max_limit.max(1)));
    let limit = u32::try_from(limit).unwrap_or(1);

    let skip = u64::from(page - 1) * u64::from(limit);

    PaginationResult {
        skip,
        take: limit,
        page,
        limit,
    }
}

/// `ceil(total / limit)`; zero when `limit` is zero
pub fn calculate_total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination block of a paginated envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: calculate_total_pages(total, limit),
        }
    }

    /// Whether there's a next page
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
