mod filter;

pub(crate) use filter::{
    fold_case, push_like, push_order, push_page, to_sql_int, Conditions, SONG_COLUMNS,
};

use chrono::{NaiveDate, Utc};
use songscope_core::{
    error::Result,
    query::SongQuery,
    types::{FilterOptions, NewSong, Page, Song, SongId, SongListing},
};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

/// Get one page of songs matching `query`, plus the size of the full match
pub async fn list(pool: &SqlitePool, query: &SongQuery) -> Result<Page<Song>> {
    list_as_of(pool, query, Utc::now().date_naive()).await
}

/// Same as [`list`] with the release-date window anchored at `today`
pub async fn list_as_of(
    pool: &SqlitePool,
    query: &SongQuery,
    today: NaiveDate,
) -> Result<Page<Song>> {
    // Count and fetch share one read transaction (and so one snapshot)
    let mut tx = pool.begin().await?;
    let page = fetch_page(&mut *tx, query, today).await?;
    tx.commit().await?;

    Ok(page)
}

/// Get one page of songs and the filter options from a single snapshot
pub async fn browse(pool: &SqlitePool, query: &SongQuery) -> Result<SongListing> {
    browse_as_of(pool, query, Utc::now().date_naive()).await
}

/// Same as [`browse`] with the release-date window anchored at `today`
pub async fn browse_as_of(
    pool: &SqlitePool,
    query: &SongQuery,
    today: NaiveDate,
) -> Result<SongListing> {
    let mut tx = pool.begin().await?;
    let page = fetch_page(&mut *tx, query, today).await?;
    let filters = fetch_filter_options(&mut *tx).await?;
    tx.commit().await?;

    Ok(SongListing { page, filters })
}

/// Get the distinct artists and non-empty album types, alphabetically
pub async fn filter_options(pool: &SqlitePool) -> Result<FilterOptions> {
    let mut tx = pool.begin().await?;
    let options = fetch_filter_options(&mut *tx).await?;
    tx.commit().await?;

    Ok(options)
}

async fn fetch_page(
    conn: &mut SqliteConnection,
    query: &SongQuery,
    today: NaiveDate,
) -> Result<Page<Song>> {
    let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM songs");
    filter::push_song_predicates(&mut count, query, today);
    let total: i64 = count.build_query_scalar().fetch_one(&mut *conn).await?;

    let mut select = QueryBuilder::<Sqlite>::new(format!("SELECT {SONG_COLUMNS} FROM songs"));
    filter::push_song_predicates(&mut select, query, today);
    push_order(&mut select, query.sort.column(), query.order, "id");
    push_page(&mut select, &query.pagination);
    let items: Vec<Song> = select.build_query_as().fetch_all(&mut *conn).await?;

    tracing::debug!(
        total,
        returned = items.len(),
        page = query.pagination.page(),
        sort = query.sort.column(),
        "Listed songs"
    );

    Ok(Page::new(
        items,
        u64::try_from(total).unwrap_or_default(),
        &query.pagination,
    ))
}

async fn fetch_filter_options(conn: &mut SqliteConnection) -> Result<FilterOptions> {
    let artists: Vec<String> =
        sqlx::query_scalar("SELECT DISTINCT artist FROM songs ORDER BY artist")
            .fetch_all(&mut *conn)
            .await?;

    // Rows without an album type have nothing to offer the filter control
    let album_types: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT album_type FROM songs WHERE album_type != '' ORDER BY album_type",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(FilterOptions {
        artists,
        album_types,
    })
}

/// Insert a single song after validating it
pub async fn create(pool: &SqlitePool, song: &NewSong) -> Result<SongId> {
    song.validate()?;
    let mut conn = pool.acquire().await?;
    Ok(insert(&mut *conn, song).await?)
}

/// Insert many songs in one transaction; nothing is written if any fails
pub async fn create_many(pool: &SqlitePool, songs: &[NewSong]) -> Result<u64> {
    for song in songs {
        song.validate()?;
    }

    let mut tx = pool.begin().await?;
    for song in songs {
        insert(&mut *tx, song).await?;
    }
    tx.commit().await?;

    Ok(songs.len() as u64)
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    song: &NewSong,
) -> std::result::Result<SongId, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO songs (
            track, artist, album, album_type,
            stream, views, likes, comments,
            danceability, energy, valence, acousticness, instrumentalness,
            tempo, song_key, duration_ms, url_spotify, url_youtube, release_date,
            track_folded, artist_folded, album_folded
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.track)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(&song.album_type)
    .bind(song.stream)
    .bind(song.views)
    .bind(song.likes)
    .bind(song.comments)
    .bind(song.danceability)
    .bind(song.energy)
    .bind(song.valence)
    .bind(song.acousticness)
    .bind(song.instrumentalness)
    .bind(song.tempo)
    .bind(song.song_key)
    .bind(song.duration_ms)
    .bind(&song.url_spotify)
    .bind(&song.url_youtube)
    .bind(song.release_date)
    .bind(filter::fold_case(&song.track))
    .bind(filter::fold_case(&song.artist))
    .bind(filter::fold_case(&song.album))
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
