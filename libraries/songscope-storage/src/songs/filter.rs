//! Predicate and ordering clauses shared by the song queries
//!
//! Only static column names from the `songscope_core::query` allow-lists are
//! pushed as SQL text; every caller-supplied value goes through `push_bind`.

use chrono::NaiveDate;
use songscope_core::query::{Pagination, SongQuery, SortOrder};
use sqlx::{QueryBuilder, Sqlite};

/// Projection of a full `Song` row
pub(crate) const SONG_COLUMNS: &str = "id, track, artist, album, album_type, \
     stream, views, likes, comments, \
     danceability, energy, valence, acousticness, instrumentalness, \
     tempo, song_key, duration_ms, url_spotify, url_youtube, release_date";

const LIKE_ESCAPE: &str = " ESCAPE '\\'";

/// Opens the WHERE clause on the first predicate, joins later ones with AND
pub(crate) struct Conditions {
    any: bool,
}

impl Conditions {
    pub(crate) fn new() -> Self {
        Self { any: false }
    }

    pub(crate) fn next(&mut self, qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(if self.any { " AND " } else { " WHERE " });
        self.any = true;
    }
}

/// Case folding applied to the `*_folded` columns and to every needle
/// compared against them
pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// `%needle%`, case-folded, with LIKE wildcards in the needle escaped
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in fold_case(needle).chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `<column> LIKE ? ESCAPE '\'` with the folded needle bound
///
/// `column` must be one of the `*_folded` columns.
pub(crate) fn push_like(qb: &mut QueryBuilder<'_, Sqlite>, column: &'static str, needle: &str) {
    qb.push(column)
        .push(" LIKE ")
        .push_bind(like_pattern(needle))
        .push(LIKE_ESCAPE);
}

/// Append the WHERE clause for every filter in `query`
///
/// `today` anchors the release-date window.
pub(crate) fn push_song_predicates(
    qb: &mut QueryBuilder<'_, Sqlite>,
    query: &SongQuery,
    today: NaiveDate,
) {
    let mut conditions = Conditions::new();

    if let Some(search) = &query.search {
        conditions.next(qb);
        qb.push("(");
        push_like(qb, "track_folded", search);
        qb.push(" OR ");
        push_like(qb, "artist_folded", search);
        qb.push(" OR ");
        push_like(qb, "album_folded", search);
        qb.push(")");
    }

    if !query.album_types.is_empty() {
        conditions.next(qb);
        qb.push("album_type IN (");
        let mut separated = qb.separated(", ");
        for album_type in &query.album_types {
            separated.push_bind(album_type.clone());
        }
        separated.push_unseparated(")");
    }

    for range in &query.ranges {
        conditions.next(qb);
        qb.push(range.field.column())
            .push(" BETWEEN ")
            .push_bind(range.min)
            .push(" AND ")
            .push_bind(range.max);
    }

    if let Some(start) = query.time.window_start(today) {
        // Undated rows never fall inside a window
        conditions.next(qb);
        qb.push("release_date >= ").push_bind(start);
    }
}

/// ` ORDER BY <column> <dir>, <tie_break> ASC`
pub(crate) fn push_order(
    qb: &mut QueryBuilder<'_, Sqlite>,
    column: &'static str,
    order: SortOrder,
    tie_break: &'static str,
) {
    qb.push(" ORDER BY ")
        .push(column)
        .push(" ")
        .push(order.as_sql())
        .push(", ")
        .push(tie_break)
        .push(" ASC");
}

/// ` LIMIT ? OFFSET ?`
pub(crate) fn push_page(qb: &mut QueryBuilder<'_, Sqlite>, pagination: &Pagination) {
    qb.push(" LIMIT ")
        .push_bind(to_sql_int(pagination.limit()))
        .push(" OFFSET ")
        .push_bind(to_sql_int(pagination.offset()));
}

/// SQLite integers are signed; anything larger is past every row anyway
pub(crate) fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use songscope_core::query::{
        Pagination, RangeField, RangeFilter, SongQuery, SongSort, TimePeriod,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn build(query: &SongQuery) -> String {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM songs");
        push_song_predicates(&mut qb, query, today());
        qb.sql().to_string()
    }

    #[test]
    fn like_pattern_folds_non_ascii_case() {
        assert_eq!(like_pattern("BEYONCÉ"), "%beyoncé%");
        assert_eq!(like_pattern("Måneskin"), "%måneskin%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("abba"), "%abba%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn no_filters_means_no_where_clause() {
        let query = SongQuery::new(Pagination::new(1, 10));
        assert_eq!(build(&query), "SELECT COUNT(*) FROM songs");
    }

    #[test]
    fn search_is_bound_not_interpolated() {
        let query = SongQuery::new(Pagination::new(1, 10)).with_search("'; DROP TABLE songs; --");
        let sql = build(&query);
        assert!(!sql.contains("DROP"));
        assert!(sql.contains(
            "(track_folded LIKE ? ESCAPE '\\' OR artist_folded LIKE ? ESCAPE '\\' \
             OR album_folded LIKE ? ESCAPE '\\')"
        ));
    }

    #[test]
    fn predicates_are_conjoined() {
        let query = SongQuery::new(Pagination::new(1, 10))
            .with_album_types("single,album")
            .with_range(RangeFilter::new(RangeField::Danceability, 0.7, 1.0))
            .with_range(RangeFilter::unconstrained(RangeField::Streams))
            .with_time(TimePeriod::Year);
        let sql = build(&query);
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM songs WHERE album_type IN (?, ?) \
             AND danceability BETWEEN ? AND ? \
             AND stream BETWEEN ? AND ? \
             AND release_date >= ?"
        );
    }

    #[test]
    fn order_uses_static_column_and_tie_break() {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id FROM songs");
        push_order(&mut qb, SongSort::Energy.column(), SortOrder::Asc, "id");
        push_page(&mut qb, &Pagination::new(3, 10));
        assert_eq!(
            qb.sql(),
            "SELECT id FROM songs ORDER BY energy ASC, id ASC LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn oversized_offsets_saturate() {
        assert_eq!(to_sql_int(u64::MAX), i64::MAX);
        assert_eq!(to_sql_int(42), 42);
    }
}
