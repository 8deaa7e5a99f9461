//! Loading the song dataset from CSV
//!
//! Reads the column layout of the public "Spotify and YouTube" dataset
//! (`Artist`, `Track`, `Album`, `Album_type`, `Stream`, `Views`, ...). Column
//! names are also accepted in lowercase and unknown columns are ignored.

use crate::error::{Result, StorageError};
use crate::songs;
use chrono::NaiveDate;
use serde::Deserialize;
use songscope_core::types::NewSong;
use sqlx::SqlitePool;
use std::path::Path;

/// Outcome of an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    /// Rows that failed to parse or violated the record invariants
    pub skipped: u64,
}

/// Parsed rows ready to be written
#[derive(Debug, Clone, Default)]
pub struct ParsedDataset {
    pub songs: Vec<NewSong>,
    pub skipped: u64,
}

#[derive(Debug, Deserialize)]
struct CsvSong {
    #[serde(rename = "Artist", alias = "artist")]
    artist: String,
    #[serde(rename = "Track", alias = "track")]
    track: String,
    #[serde(rename = "Album", alias = "album", default)]
    album: String,
    #[serde(rename = "Album_type", alias = "album_type", default)]
    album_type: String,

    #[serde(rename = "Stream", alias = "stream", default, deserialize_with = "csv::invalid_option")]
    stream: Option<f64>,
    #[serde(rename = "Views", alias = "views", default, deserialize_with = "csv::invalid_option")]
    views: Option<f64>,
    #[serde(rename = "Likes", alias = "likes", default, deserialize_with = "csv::invalid_option")]
    likes: Option<f64>,
    #[serde(rename = "Comments", alias = "comments", default, deserialize_with = "csv::invalid_option")]
    comments: Option<f64>,

    #[serde(rename = "Danceability", alias = "danceability", default, deserialize_with = "csv::invalid_option")]
    danceability: Option<f64>,
    #[serde(rename = "Energy", alias = "energy", default, deserialize_with = "csv::invalid_option")]
    energy: Option<f64>,
    #[serde(rename = "Valence", alias = "valence", default, deserialize_with = "csv::invalid_option")]
    valence: Option<f64>,
    #[serde(rename = "Acousticness", alias = "acousticness", default, deserialize_with = "csv::invalid_option")]
    acousticness: Option<f64>,
    #[serde(rename = "Instrumentalness", alias = "instrumentalness", default, deserialize_with = "csv::invalid_option")]
    instrumentalness: Option<f64>,

    #[serde(rename = "Tempo", alias = "tempo", default, deserialize_with = "csv::invalid_option")]
    tempo: Option<f64>,
    #[serde(rename = "Key", alias = "key", alias = "song_key", default, deserialize_with = "csv::invalid_option")]
    song_key: Option<f64>,
    #[serde(rename = "Duration_ms", alias = "duration_ms", default, deserialize_with = "csv::invalid_option")]
    duration_ms: Option<f64>,

    #[serde(rename = "Url_spotify", alias = "url_spotify", default)]
    url_spotify: Option<String>,
    #[serde(rename = "Url_youtube", alias = "url_youtube", default)]
    url_youtube: Option<String>,

    #[serde(rename = "Release_date", alias = "release_date", default, deserialize_with = "csv::invalid_option")]
    release_date: Option<NaiveDate>,
}

impl CsvSong {
    fn into_new_song(self) -> NewSong {
        NewSong {
            track: self.track,
            artist: self.artist,
            album: self.album,
            album_type: self.album_type,
            stream: to_whole(self.stream),
            views: to_whole(self.views),
            likes: to_whole(self.likes),
            comments: to_whole(self.comments),
            danceability: self.danceability,
            energy: self.energy,
            valence: self.valence,
            acousticness: self.acousticness,
            instrumentalness: self.instrumentalness,
            tempo: self.tempo,
            song_key: to_whole(self.song_key),
            duration_ms: to_whole(self.duration_ms),
            url_spotify: non_empty(self.url_spotify),
            url_youtube: non_empty(self.url_youtube),
            release_date: self.release_date,
        }
    }
}

/// Counts are often exported as floats (`1040234854.0`)
fn to_whole(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.is_finite()).map(|v| v.round() as i64)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse CSV rows, skipping rows that are malformed or invalid
pub fn parse_csv<R: std::io::Read>(reader: R) -> Result<ParsedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Fail early on an unreadable header instead of skipping every row
    reader.headers()?;

    let mut dataset = ParsedDataset::default();
    for (index, row) in reader.deserialize::<CsvSong>().enumerate() {
        // Line 1 is the header
        let line = index + 2;

        let song = match row {
            Ok(row) => row.into_new_song(),
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping unreadable row");
                dataset.skipped += 1;
                continue;
            }
        };

        if let Err(e) = song.validate() {
            tracing::warn!(line, error = %e, "Skipping invalid row");
            dataset.skipped += 1;
            continue;
        }

        dataset.songs.push(song);
    }

    Ok(dataset)
}

/// Write parsed songs in a single transaction
pub async fn write_dataset(pool: &SqlitePool, dataset: ParsedDataset) -> Result<ImportSummary> {
    let mut tx = pool.begin().await?;
    for song in &dataset.songs {
        songs::insert(&mut *tx, song).await?;
    }
    tx.commit().await?;

    let summary = ImportSummary {
        imported: dataset.songs.len() as u64,
        skipped: dataset.skipped,
    };
    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "Dataset import finished"
    );
    Ok(summary)
}

/// Import every valid row of `reader`
pub async fn import_csv<R: std::io::Read>(pool: &SqlitePool, reader: R) -> Result<ImportSummary> {
    let dataset = parse_csv(reader)?;
    write_dataset(pool, dataset).await
}

/// Import a CSV file, parsing it off the async runtime
pub async fn import_csv_file(pool: &SqlitePool, path: &Path) -> Result<ImportSummary> {
    tracing::info!(path = %path.display(), "Importing dataset");

    let file = std::fs::File::open(path)?;
    let dataset = tokio::task::spawn_blocking(move || parse_csv(std::io::BufReader::new(file)))
        .await
        .map_err(|e| StorageError::Import(e.to_string()))??;

    write_dataset(pool, dataset).await
}
