//! Integration tests for the artists vertical slice
//!
//! Tests per-artist aggregation including:
//! - Totals and averages recomputed from the songs table
//! - Allow-listed sorting with a stable name tie-break
//! - Search and paging over the aggregate rows
//! - Artist detail lookup, including the not-found case


use songscope_core::query::{
    ArtistListParams, ArtistQuery, ArtistSort, PageLimits, Pagination, SortOrder,
};
use test_helpers::*;

fn first_page(limit: u64) -> ArtistQuery {
    ArtistQuery::new(Pagination::new(1, limit))
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_defaults_to_total_streams_desc() {
    let test_db = TestDb::seeded().await;

    let page = songscope_storage::artists::list(test_db.pool(), &first_page(10))
        .await
        .expect("Failed to list artists");

    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 1);

    let names: Vec<_> = page.items.iter().map(|a| a.artist.as_str()).collect();
    assert_eq!(
        names,
        vec!["Artist 4", "Artist 3", "Artist 2", "Artist 1", "Artist 0"]
    );

    let top = &page.items[0];
    assert_eq!(top.track_count, 5);
    // Songs 4, 9, 14, 19, 24
    assert_eq!(top.total_streams, 75_000_000);
    assert_eq!(top.total_views, 37_500_000);
}

#[tokio::test]
async fn test_averages_cover_every_song() {
    let test_db = TestDb::seeded().await;

    let page = songscope_storage::artists::list(test_db.pool(), &first_page(10))
        .await
        .unwrap();
    let artist = page.items.iter().find(|a| a.artist == "Artist 3").unwrap();

    // Songs 3, 8, 13, 18, 23; only song 3 is danceable
    let avg = artist.avg_danceability.unwrap();
    assert!((avg - 0.48).abs() < 1e-9, "got {avg}");
    assert!((artist.avg_energy.unwrap() - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_sort_by_name_ascending() {
    let test_db = TestDb::seeded().await;

    let query = first_page(10).sorted_by(ArtistSort::Artist, SortOrder::Asc);
    let page = songscope_storage::artists::list(test_db.pool(), &query)
        .await
        .unwrap();

    let names: Vec<_> = page.items.iter().map(|a| a.artist.as_str()).collect();
    assert_eq!(
        names,
        vec!["Artist 0", "Artist 1", "Artist 2", "Artist 3", "Artist 4"]
    );
}

#[tokio::test]
async fn test_equal_aggregates_break_ties_by_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    insert_songs(
        pool,
        &[
            song("One", "Zeta", 100),
            song("Two", "Alpha", 100),
            song("Three", "Mid", 100),
        ],
    )
    .await;

    let query = first_page(10).sorted_by(ArtistSort::TrackCount, SortOrder::Desc);
    let page = songscope_storage::artists::list(pool, &query).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|a| a.artist.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[tokio::test]
async fn test_unknown_sort_falls_back_to_total_streams() {
    let test_db = TestDb::seeded().await;

    let query = ArtistListParams {
        sort: Some("popularity".to_string()),
        order: Some("ASC".to_string()),
        ..Default::default()
    }
    .into_query(PageLimits::new(10, 100));
    assert_eq!(query.sort, ArtistSort::TotalStreams);

    let page = songscope_storage::artists::list(test_db.pool(), &query)
        .await
        .unwrap();
    assert_eq!(page.items[0].artist, "Artist 0");
}

#[tokio::test]
async fn test_search_and_paging() {
    let test_db = TestDb::seeded().await;
    let pool = test_db.pool();

    let page = songscope_storage::artists::list(pool, &first_page(10).with_search("artist 3"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].artist, "Artist 3");

    let query = ArtistQuery::new(Pagination::new(3, 2));
    let page = songscope_storage::artists::list(pool, &query).await.unwrap();
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].artist, "Artist 0");
}

#[tokio::test]
async fn test_unknown_counts_sum_to_zero() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let sparse = songscope_core::NewSong::new("Demo", "Garage Band", "", "");
    insert_songs(pool, &[sparse]).await;

    let page = songscope_storage::artists::list(pool, &first_page(10)).await.unwrap();
    let artist = &page.items[0];

    assert_eq!(artist.track_count, 1);
    assert_eq!(artist.total_streams, 0);
    assert_eq!(artist.total_views, 0);
    assert_eq!(artist.avg_danceability, None);
}

#[tokio::test]
async fn test_empty_database_has_one_empty_page() {
    let test_db = TestDb::new().await;

    let page = songscope_storage::artists::list(test_db.pool(), &first_page(10))
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_get_artist_detail() {
    let test_db = TestDb::seeded().await;

    let detail = songscope_storage::artists::get_by_name(test_db.pool(), "Artist 2")
        .await
        .expect("Query failed")
        .expect("Artist not found");

    assert_eq!(detail.artist.artist, "Artist 2");
    assert_eq!(detail.artist.track_count, 5);

    // Songs 2, 7, 12, 17, 22, most streamed first
    let tracks: Vec<_> = detail.songs.iter().map(|s| s.track.as_str()).collect();
    assert_eq!(
        tracks,
        vec!["Track 22", "Track 17", "Track 12", "Track 07", "Track 02"]
    );

    assert_eq!(detail.album_types.len(), 2);
    assert_eq!(detail.album_types[0].album_type, "album");
    assert_eq!(detail.album_types[0].count, 3);
    assert_eq!(detail.album_types[1].album_type, "single");
    assert_eq!(detail.album_types[1].count, 2);
    // Songs 7 and 17
    assert_eq!(detail.album_types[1].total_streams, 26_000_000);
}

#[tokio::test]
async fn test_get_artist_ignores_case() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    insert_songs(pool, &[song("Dancing Queen", "ABBA", 10)]).await;

    let detail = songscope_storage::artists::get_by_name(pool, "abba")
        .await
        .unwrap()
        .expect("Case-insensitive lookup failed");

    assert_eq!(detail.artist.artist, "ABBA");
    assert_eq!(detail.songs.len(), 1);
}

#[tokio::test]
async fn test_get_artist_folds_non_ascii_case() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    insert_songs(
        pool,
        &[
            song("Beggin'", "MÅNESKIN", 10),
            song("CUFF IT", "BEYONCÉ", 20),
        ],
    )
    .await;

    let detail = songscope_storage::artists::get_by_name(pool, "måneskin")
        .await
        .unwrap()
        .expect("Non-ASCII lookup failed");
    assert_eq!(detail.artist.artist, "MÅNESKIN");
    assert_eq!(detail.songs.len(), 1);

    let page = songscope_storage::artists::list(pool, &first_page(10).with_search("beyoncé"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].artist, "BEYONCÉ");
}

#[tokio::test]
async fn test_get_artist_requires_full_name() {
    let test_db = TestDb::seeded().await;
    let pool = test_db.pool();

    let partial = songscope_storage::artists::get_by_name(pool, "Artist")
        .await
        .unwrap();
    assert!(partial.is_none());

    let missing = songscope_storage::artists::get_by_name(pool, "Nobody")
        .await
        .expect("Query failed");
    assert!(missing.is_none());
}
