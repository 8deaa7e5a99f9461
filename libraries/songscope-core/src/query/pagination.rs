//! Page number and page size handling

/// Per-endpoint page size policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u64,
    pub max_size: u64,
}

impl PageLimits {
    /// Both sizes are at least 1 and the default never exceeds the maximum
    pub fn new(default_size: u64, max_size: u64) -> Self {
        let max_size = max_size.max(1);
        Self {
            default_size: default_size.clamp(1, max_size),
            max_size,
        }
    }
}

/// A validated `(page, limit)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Build from raw request values
    ///
    /// - `page`: missing, unparsable or `< 1` becomes 1
    /// - `limit`: missing, unparsable or `< 1` becomes the default size;
    ///   anything above the maximum is clamped to it
    ///
    /// The whole trimmed value must be an integer, so `2.5` and `10abc` are
    /// unparsable rather than read as `2` and `10`.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, limits: PageLimits) -> Self {
        let page = page
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);

        let limit = limit
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|&l| l >= 1)
            .map_or(limits.default_size, |l| l.min(limits.max_size));

        Self::new(page, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// `(page - 1) * limit`, saturating instead of overflowing
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `max(1, ceil(total / limit))`
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit).max(1)
    }
}
