//! Request normalization for the list queries
//!
//! Request parameters are accepted as optional strings and turned into fully
//! validated [`SongQuery`] / [`ArtistQuery`] values. Normalization never
//! fails: every malformed value is replaced by a safe default, so storage
//! backends only ever see allow-listed columns and in-range numbers.

mod pagination;
mod range;
mod sort;
mod time;

pub use pagination::{PageLimits, Pagination};
pub use range::{RangeField, RangeFilter, MAX_POPULARITY_BOUND};
pub use sort::{ArtistSort, SongSort, SortOrder};
pub use time::TimePeriod;

use serde::Deserialize;

/// A fully normalized song list request
#[derive(Debug, Clone, PartialEq)]
pub struct SongQuery {
    /// Case-insensitive substring matched against track, artist and album
    pub search: Option<String>,
    /// Exact album types; empty means any
    pub album_types: Vec<String>,
    pub ranges: Vec<RangeFilter>,
    pub time: TimePeriod,
    pub sort: SongSort,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl SongQuery {
    /// No filters, default sort
    pub fn new(pagination: Pagination) -> Self {
        Self {
            search: None,
            album_types: Vec::new(),
            ranges: Vec::new(),
            time: TimePeriod::All,
            sort: SongSort::default(),
            order: SortOrder::default(),
            pagination,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = normalize_search(Some(search.into()));
        self
    }

    pub fn with_album_types(mut self, album_types: &str) -> Self {
        self.album_types = split_album_types(Some(album_types));
        self
    }

    /// Add a range, replacing any existing one on the same field
    pub fn with_range(mut self, range: RangeFilter) -> Self {
        self.ranges.retain(|r| r.field != range.field);
        self.ranges.push(range);
        self
    }

    pub fn with_time(mut self, time: TimePeriod) -> Self {
        self.time = time;
        self
    }

    pub fn sorted_by(mut self, sort: SongSort, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

/// A fully normalized artist list request
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistQuery {
    pub search: Option<String>,
    pub sort: ArtistSort,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl ArtistQuery {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            search: None,
            sort: ArtistSort::default(),
            order: SortOrder::default(),
            pagination,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = normalize_search(Some(search.into()));
        self
    }

    pub fn sorted_by(mut self, sort: ArtistSort, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }
}

/// Raw parameters of the basic song list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SongListParams {
    /// Search, sort and paging only; no range predicates
    pub fn into_query(self, limits: PageLimits) -> SongQuery {
        SongQuery {
            search: normalize_search(self.search),
            album_types: Vec::new(),
            ranges: Vec::new(),
            time: TimePeriod::All,
            sort: SongSort::parse(self.sort.as_deref()),
            order: SortOrder::parse(self.order.as_deref()),
            pagination: Pagination::from_params(
                self.page.as_deref(),
                self.limit.as_deref(),
                limits,
            ),
        }
    }
}

/// Raw parameters of the advanced song filter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongFilterParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub min_danceability: Option<String>,
    pub max_danceability: Option<String>,
    pub min_energy: Option<String>,
    pub max_energy: Option<String>,
    pub min_valence: Option<String>,
    pub max_valence: Option<String>,
    pub min_streams: Option<String>,
    pub max_streams: Option<String>,
    pub min_views: Option<String>,
    pub max_views: Option<String>,
    /// Comma-joined for multi-select
    pub album_type: Option<String>,
    pub time: Option<String>,
}

impl SongFilterParams {
    /// All five range predicates are always present, defaulted when unset
    pub fn into_query(self, limits: PageLimits) -> SongQuery {
        let ranges = RangeField::ALL
            .into_iter()
            .map(|field| {
                let (min, max) = self.bounds(field);
                RangeFilter::from_params(field, min, max)
            })
            .collect();

        SongQuery {
            album_types: split_album_types(self.album_type.as_deref()),
            ranges,
            time: TimePeriod::parse(self.time.as_deref()),
            sort: SongSort::parse(self.sort.as_deref()),
            order: SortOrder::parse(self.order.as_deref()),
            pagination: Pagination::from_params(
                self.page.as_deref(),
                self.limit.as_deref(),
                limits,
            ),
            search: normalize_search(self.search),
        }
    }

    fn bounds(&self, field: RangeField) -> (Option<&str>, Option<&str>) {
        let (min, max) = match field {
            RangeField::Danceability => (&self.min_danceability, &self.max_danceability),
            RangeField::Energy => (&self.min_energy, &self.max_energy),
            RangeField::Valence => (&self.min_valence, &self.max_valence),
            RangeField::Streams => (&self.min_streams, &self.max_streams),
            RangeField::Views => (&self.min_views, &self.max_views),
        };
        (min.as_deref(), max.as_deref())
    }
}

/// Raw parameters of the artist list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ArtistListParams {
    pub fn into_query(self, limits: PageLimits) -> ArtistQuery {
        ArtistQuery {
            search: normalize_search(self.search),
            sort: ArtistSort::parse(self.sort.as_deref()),
            order: SortOrder::parse(self.order.as_deref()),
            pagination: Pagination::from_params(
                self.page.as_deref(),
                self.limit.as_deref(),
                limits,
            ),
        }
    }
}

fn normalize_search(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn split_album_types(raw: Option<&str>) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for value in raw.unwrap_or_default().split(',') {
        let value = value.trim();
        if !value.is_empty() && !types.iter().any(|t| t == value) {
            types.push(value.to_string());
        }
    }
    types
}
