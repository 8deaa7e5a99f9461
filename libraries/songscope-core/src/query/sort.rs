//! Allow-listed sort keys
//!
//! Sort keys arrive as free text from the caller. They are only ever turned
//! into SQL through the `column()` lookups below, which return static column
//! names; anything outside the allow-list silently becomes the default key.

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `"ASC"` in any letter case is ascending; everything else is descending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Sortable song columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SongSort {
    #[default]
    Stream,
    Views,
    Track,
    Artist,
    Album,
    Likes,
    Comments,
    Danceability,
    Energy,
    Valence,
}

impl SongSort {
    pub const ALL: [SongSort; 10] = [
        SongSort::Stream,
        SongSort::Views,
        SongSort::Track,
        SongSort::Artist,
        SongSort::Album,
        SongSort::Likes,
        SongSort::Comments,
        SongSort::Danceability,
        SongSort::Energy,
        SongSort::Valence,
    ];

    /// Exact match against the allow-list, falling back to `stream`
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::ALL.into_iter().find(|s| s.column() == value))
            .unwrap_or_default()
    }

    pub fn column(self) -> &'static str {
        match self {
            SongSort::Stream => "stream",
            SongSort::Views => "views",
            SongSort::Track => "track",
            SongSort::Artist => "artist",
            SongSort::Album => "album",
            SongSort::Likes => "likes",
            SongSort::Comments => "comments",
            SongSort::Danceability => "danceability",
            SongSort::Energy => "energy",
            SongSort::Valence => "valence",
        }
    }
}

/// Sortable artist aggregate columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtistSort {
    #[default]
    TotalStreams,
    TotalViews,
    Artist,
    TrackCount,
    AvgDanceability,
    AvgEnergy,
}

impl ArtistSort {
    pub const ALL: [ArtistSort; 6] = [
        ArtistSort::TotalStreams,
        ArtistSort::TotalViews,
        ArtistSort::Artist,
        ArtistSort::TrackCount,
        ArtistSort::AvgDanceability,
        ArtistSort::AvgEnergy,
    ];

    /// Exact match against the allow-list, falling back to `total_streams`
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::ALL.into_iter().find(|s| s.column() == value))
            .unwrap_or_default()
    }

    /// Name of the aggregate alias in the artist projection
    pub fn column(self) -> &'static str {
        match self {
            ArtistSort::TotalStreams => "total_streams",
            ArtistSort::TotalViews => "total_views",
            ArtistSort::Artist => "artist",
            ArtistSort::TrackCount => "track_count",
            ArtistSort::AvgDanceability => "avg_danceability",
            ArtistSort::AvgEnergy => "avg_energy",
        }
    }
}
