mod artist;
mod page;
mod song;
mod stats;

pub use artist::{AlbumTypeBreakdown, ArtistAggregate, ArtistDetail};
pub use page::Page;
pub use song::{NewSong, Song, SongId};
pub use stats::{
    AlbumTypeStats, DashboardStats, FilterOptions, PlatformStat, SongListing, SummaryStats,
};
