use crate::artists::ARTIST_AGGREGATE_COLUMNS;
use crate::songs::to_sql_int;
use songscope_core::{
    error::Result,
    types::{AlbumTypeStats, ArtistAggregate, DashboardStats, PlatformStat, SummaryStats},
};
use sqlx::SqlitePool;

/// Collection-wide totals plus the top `top_n` artists and tracks by streams
pub async fn dashboard(pool: &SqlitePool, top_n: u64) -> Result<DashboardStats> {
    let top_n = to_sql_int(top_n);
    let mut tx = pool.begin().await?;

    let stats: SummaryStats = sqlx::query_as(
        "SELECT COUNT(*) AS total_songs,
                COUNT(DISTINCT artist) AS unique_artists,
                COALESCE(SUM(stream), 0) AS total_streams,
                COALESCE(SUM(views), 0) AS total_views
         FROM songs",
    )
    .fetch_one(&mut *tx)
    .await?;

    let top_artists: Vec<ArtistAggregate> = sqlx::query_as(&format!(
        "SELECT {ARTIST_AGGREGATE_COLUMNS}
         FROM songs
         GROUP BY artist
         ORDER BY total_streams DESC, artist ASC
         LIMIT ?"
    ))
    .bind(top_n)
    .fetch_all(&mut *tx)
    .await?;

    let genre_stats: Vec<AlbumTypeStats> = sqlx::query_as(
        "SELECT album_type,
                COUNT(*) AS track_count,
                AVG(stream) AS avg_streams,
                AVG(views) AS avg_views
         FROM songs
         GROUP BY album_type
         ORDER BY track_count DESC, album_type ASC",
    )
    .fetch_all(&mut *tx)
    .await?;

    let platform_stats: Vec<PlatformStat> = sqlx::query_as(
        "SELECT id, track, artist, stream, views
         FROM songs
         WHERE stream IS NOT NULL
         ORDER BY stream DESC, id ASC
         LIMIT ?",
    )
    .bind(top_n)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(DashboardStats {
        stats,
        top_artists,
        genre_stats,
        platform_stats,
    })
}
