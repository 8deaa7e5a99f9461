use crate::songs::{fold_case, push_like, push_order, push_page, Conditions, SONG_COLUMNS};
use songscope_core::{
    error::Result,
    query::ArtistQuery,
    types::{AlbumTypeBreakdown, ArtistAggregate, ArtistDetail, Page, Song},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Aggregate projection, grouped by `artist`
///
/// Sums over all-NULL groups report 0, averages stay NULL.
pub(crate) const ARTIST_AGGREGATE_COLUMNS: &str = "artist, \
     COUNT(*) AS track_count, \
     COALESCE(SUM(stream), 0) AS total_streams, \
     COALESCE(SUM(views), 0) AS total_views, \
     AVG(danceability) AS avg_danceability, \
     AVG(energy) AS avg_energy, \
     AVG(valence) AS avg_valence, \
     AVG(acousticness) AS avg_acousticness, \
     AVG(instrumentalness) AS avg_instrumentalness";

/// Get one page of artist aggregates
pub async fn list(pool: &SqlitePool, query: &ArtistQuery) -> Result<Page<ArtistAggregate>> {
    let mut tx = pool.begin().await?;

    let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(DISTINCT artist) FROM songs");
    push_artist_search(&mut count, query);
    let total: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

    let mut select =
        QueryBuilder::<Sqlite>::new(format!("SELECT {ARTIST_AGGREGATE_COLUMNS} FROM songs"));
    push_artist_search(&mut select, query);
    select.push(" GROUP BY artist");
    push_order(&mut select, query.sort.column(), query.order, "artist");
    push_page(&mut select, &query.pagination);
    let items: Vec<ArtistAggregate> = select.build_query_as().fetch_all(&mut *tx).await?;

    tx.commit().await?;

    Ok(Page::new(
        items,
        u64::try_from(total).unwrap_or_default(),
        &query.pagination,
    ))
}

/// Get an artist's aggregate, songs and album-type breakdown
///
/// The name matches exactly, ignoring case. Returns `None` when no song is
/// credited to the artist.
pub async fn get_by_name(pool: &SqlitePool, name: &str) -> Result<Option<ArtistDetail>> {
    let mut tx = pool.begin().await?;

    let aggregate: Option<ArtistAggregate> = sqlx::query_as(&format!(
        "SELECT {ARTIST_AGGREGATE_COLUMNS}
         FROM songs
         WHERE artist_folded = ?
         GROUP BY artist
         ORDER BY track_count DESC, artist ASC
         LIMIT 1"
    ))
    .bind(fold_case(name))
    .fetch_optional(&mut *tx)
    .await?;

    let Some(aggregate) = aggregate else {
        tx.commit().await?;
        return Ok(None);
    };

    let songs: Vec<Song> = sqlx::query_as(&format!(
        "SELECT {SONG_COLUMNS}
         FROM songs
         WHERE artist = ?
         ORDER BY stream DESC, id ASC"
    ))
    .bind(&aggregate.artist)
    .fetch_all(&mut *tx)
    .await?;

    let album_types: Vec<AlbumTypeBreakdown> = sqlx::query_as(
        "SELECT album_type,
                COUNT(*) AS count,
                COALESCE(SUM(stream), 0) AS total_streams,
                COALESCE(SUM(views), 0) AS total_views
         FROM songs
         WHERE artist = ?
         GROUP BY album_type
         ORDER BY album_type",
    )
    .bind(&aggregate.artist)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(ArtistDetail {
        artist: aggregate,
        songs,
        album_types,
    }))
}

fn push_artist_search(qb: &mut QueryBuilder<'_, Sqlite>, query: &ArtistQuery) {
    if let Some(search) = &query.search {
        let mut conditions = Conditions::new();
        conditions.next(qb);
        push_like(qb, "artist_folded", search);
    }
}
