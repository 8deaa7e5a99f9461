//! Property-based tests for request normalization
//!
//! Uses proptest to verify that no caller input escapes the allow-lists
//! and that page math holds for arbitrary sizes.

use proptest::prelude::*;
use songscope_core::query::{
    ArtistSort, PageLimits, Pagination, RangeField, RangeFilter, SongFilterParams, SongSort,
    SortOrder,
};

fn allowed_song_columns() -> Vec<&'static str> {
    SongSort::ALL.iter().map(|s| s.column()).collect()
}

proptest! {
    /// Property: any sort key outside the allow-list normalizes to `stream`
    #[test]
    fn unknown_sort_keys_use_default(raw in "\\PC{0,40}") {
        prop_assume!(!allowed_song_columns().contains(&raw.as_str()));
        prop_assert_eq!(SongSort::parse(Some(&raw)), SongSort::Stream);
    }

    /// Property: the artist allow-list behaves the same way
    #[test]
    fn unknown_artist_sort_keys_use_default(raw in "[a-z_ ;']{0,30}") {
        let allowed: Vec<&str> = ArtistSort::ALL.iter().map(|s| s.column()).collect();
        prop_assume!(!allowed.contains(&raw.as_str()));
        prop_assert_eq!(ArtistSort::parse(Some(&raw)), ArtistSort::TotalStreams);
    }

    /// Property: only case variants of "asc" sort ascending
    #[test]
    fn order_is_desc_unless_asc(raw in "\\PC{0,10}") {
        let expected = if raw.eq_ignore_ascii_case("asc") { SortOrder::Asc } else { SortOrder::Desc };
        prop_assert_eq!(SortOrder::parse(Some(&raw)), expected);
    }

    /// Property: totalPages == max(1, ceil(total / limit))
    #[test]
    fn total_pages_formula(total in 0u64..10_000_000, limit in 1u64..1_000) {
        let pagination = Pagination::new(1, limit);
        let expected = std::cmp::max(1, (total + limit - 1) / limit);
        prop_assert_eq!(pagination.total_pages(total), expected);
    }

    /// Property: normalized pagination always stays within the configured limits
    #[test]
    fn pagination_within_limits(
        page in proptest::option::of("\\PC{0,12}"),
        limit in proptest::option::of("-?[0-9]{0,12}"),
        default_size in 1u64..200,
        max_size in 1u64..200,
    ) {
        let limits = PageLimits::new(default_size, max_size);
        let p = Pagination::from_params(page.as_deref(), limit.as_deref(), limits);
        prop_assert!(p.page() >= 1);
        prop_assert!(p.limit() >= 1);
        prop_assert!(p.limit() <= limits.max_size);
        prop_assert_eq!(p.offset(), (p.page() - 1).saturating_mul(p.limit()));
    }

    /// Property: a parsed range bound is either the caller's finite number or the default
    #[test]
    fn range_bounds_are_finite(min in "\\PC{0,12}", max in "\\PC{0,12}") {
        for field in RangeField::ALL {
            let range = RangeFilter::from_params(field, Some(&min), Some(&max));
            prop_assert!(range.min.is_finite());
            prop_assert!(range.max.is_finite());
        }
    }

    /// Property: filter queries always carry exactly one range per field
    #[test]
    fn filter_query_has_every_range(
        min_energy in proptest::option::of("\\PC{0,8}"),
        max_views in proptest::option::of("[0-9]{0,12}"),
    ) {
        let params = SongFilterParams {
            min_energy,
            max_views,
            ..Default::default()
        };
        let query = params.into_query(PageLimits::new(10, 100));
        prop_assert_eq!(query.ranges.len(), RangeField::ALL.len());
        for field in RangeField::ALL {
            prop_assert_eq!(query.ranges.iter().filter(|r| r.field == field).count(), 1);
        }
    }
}
