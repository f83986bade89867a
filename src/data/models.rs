//! Discogs domain records
//!
//! Wire shapes for the database endpoints: single entities (release,
//! master, artist, label), the per-endpoint listing items, and the
//! paged envelopes that wrap them. Fields the API omits or nulls are
//! `Option` or defaulted; nothing here fails on a sparse record.

use crate::pagination::{Page, PageInfo, PagedResponse};
use serde::Deserialize;

// ============================================================================
// Shared nested records
// ============================================================================

/// An image attached to an entity
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub uri: Option<String>,
    pub uri150: Option<String>,
    pub resource_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// An embedded video on a release or master
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub uri: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub embed: Option<bool>,
}

/// One tracklist entry
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default, rename = "type_")]
    pub track_type: Option<String>,
}

/// An artist credit on a release or master
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseArtist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub anv: String,
    #[serde(default)]
    pub join: String,
    #[serde(default)]
    pub role: String,
    pub resource_url: Option<String>,
}

/// A label credit on a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseLabel {
    pub id: u64,
    pub name: String,
    pub catno: Option<String>,
    pub entity_type: Option<String>,
    pub resource_url: Option<String>,
}

/// A physical format of a release
#[derive(Debug, Clone, Deserialize)]
pub struct Format {
    pub name: String,
    pub qty: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// A related artist or label (alias, member, sublabel)
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRef {
    pub id: u64,
    pub name: String,
    pub resource_url: Option<String>,
}

// ============================================================================
// Single entities
// ============================================================================

/// A release
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    pub year: Option<u32>,
    pub released: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub labels: Vec<ReleaseLabel>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub videos: Vec<Video>,
    pub master_id: Option<u64>,
    pub notes: Option<String>,
    pub uri: Option<String>,
    pub resource_url: Option<String>,
    pub thumb: Option<String>,
    pub data_quality: Option<String>,
}

/// A master release
#[derive(Debug, Clone, Deserialize)]
pub struct Master {
    pub id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub main_release: Option<u64>,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub videos: Vec<Video>,
    pub versions_url: Option<String>,
    pub uri: Option<String>,
    pub resource_url: Option<String>,
    pub data_quality: Option<String>,
}

/// An artist
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub realname: Option<String>,
    pub profile: Option<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub namevariations: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<EntityRef>,
    #[serde(default)]
    pub members: Vec<EntityRef>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub releases_url: Option<String>,
    pub uri: Option<String>,
    pub resource_url: Option<String>,
    pub data_quality: Option<String>,
}

/// A label
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub profile: Option<String>,
    pub contact_info: Option<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub sublabels: Vec<EntityRef>,
    pub parent_label: Option<EntityRef>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub releases_url: Option<String>,
    pub uri: Option<String>,
    pub resource_url: Option<String>,
    pub data_quality: Option<String>,
}

// ============================================================================
// Listing items
// ============================================================================

/// One version of a master release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseVersion {
    pub id: u64,
    pub title: String,
    pub format: Option<String>,
    pub label: Option<String>,
    pub catno: Option<String>,
    pub country: Option<String>,
    pub released: Option<String>,
    pub status: Option<String>,
    pub thumb: Option<String>,
    pub resource_url: Option<String>,
}

/// A release or master associated with an artist
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRelease {
    pub id: u64,
    pub title: String,
    /// `"release"` or `"master"`
    #[serde(rename = "type")]
    pub release_type: Option<String>,
    pub main_release: Option<u64>,
    pub artist: Option<String>,
    pub role: Option<String>,
    pub year: Option<u32>,
    pub format: Option<String>,
    pub label: Option<String>,
    pub status: Option<String>,
    pub thumb: Option<String>,
    pub resource_url: Option<String>,
}

/// A release associated with a label
#[derive(Debug, Clone, Deserialize)]
pub struct LabelRelease {
    pub id: u64,
    pub title: String,
    pub artist: Option<String>,
    pub catno: Option<String>,
    pub format: Option<String>,
    pub year: Option<u32>,
    pub status: Option<String>,
    pub thumb: Option<String>,
    pub resource_url: Option<String>,
}

/// One database search hit
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    /// `"release"`, `"master"`, `"artist"` or `"label"`
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub country: Option<String>,
    /// The search endpoint reports years as strings
    pub year: Option<String>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub barcode: Vec<String>,
    pub catno: Option<String>,
    pub master_id: Option<u64>,
    pub master_url: Option<String>,
    pub thumb: Option<String>,
    pub cover_image: Option<String>,
    pub uri: Option<String>,
    pub resource_url: Option<String>,
}

// ============================================================================
// Paged envelopes
// ============================================================================

/// Envelope for `/masters/{id}/versions`
#[derive(Debug, Clone, Deserialize)]
pub struct MasterVersionsPage {
    pub pagination: PageInfo,
    #[serde(default)]
    pub versions: Vec<ReleaseVersion>,
}

impl PagedResponse for MasterVersionsPage {
    type Item = ReleaseVersion;

    fn into_page(self) -> Page<ReleaseVersion> {
        Page::new(self.versions, self.pagination)
    }
}

/// Envelope for `/artists/{id}/releases`
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistReleasesPage {
    pub pagination: PageInfo,
    #[serde(default)]
    pub releases: Vec<ArtistRelease>,
}

impl PagedResponse for ArtistReleasesPage {
    type Item = ArtistRelease;

    fn into_page(self) -> Page<ArtistRelease> {
        Page::new(self.releases, self.pagination)
    }
}

/// Envelope for `/labels/{id}/releases`
#[derive(Debug, Clone, Deserialize)]
pub struct LabelReleasesPage {
    pub pagination: PageInfo,
    #[serde(default)]
    pub releases: Vec<LabelRelease>,
}

impl PagedResponse for LabelReleasesPage {
    type Item = LabelRelease;

    fn into_page(self) -> Page<LabelRelease> {
        Page::new(self.releases, self.pagination)
    }
}

/// Envelope for `/database/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultsPage {
    pub pagination: PageInfo,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl PagedResponse for SearchResultsPage {
    type Item = SearchResult;

    fn into_page(self) -> Page<SearchResult> {
        Page::new(self.results, self.pagination)
    }
}
