//! Discogs data model
//!
//! Domain records deserialized from the API (`models`) and the query
//! types that render listing criteria to parameters (`query`).

mod models;
mod query;

pub use models::{
    Artist, ArtistRelease, ArtistReleasesPage, EntityRef, Format, Image, Label, LabelRelease,
    LabelReleasesPage, Master, MasterVersionsPage, Release, ReleaseArtist, ReleaseLabel,
    ReleaseVersion, SearchResult, SearchResultsPage, Track, Video,
};
pub use query::{SearchQuery, SearchType, Sort, SortField, SortOrder};
