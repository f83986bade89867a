//! Query types for listing endpoints
//!
//! `SearchQuery` builds the `/database/search` criteria; `Sort`
//! carries the optional ordering for artist releases. Both render to
//! plain query parameters, which is all the transport layer needs.

/// Entity kind filter for database search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Release,
    Master,
    Artist,
    Label,
}

impl SearchType {
    /// Wire value of the `type` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Master => "master",
            Self::Artist => "artist",
            Self::Label => "label",
        }
    }
}

/// Search criteria for the database search endpoint
///
/// Every field is optional; set the ones the search should filter on.
///
/// ```
/// use discogs_client::data::{SearchQuery, SearchType};
///
/// let query = SearchQuery::new()
///     .query("nevermind")
///     .search_type(SearchType::Release)
///     .artist("nirvana")
///     .year("1991");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    query: Option<String>,
    search_type: Option<SearchType>,
    title: Option<String>,
    artist: Option<String>,
    label: Option<String>,
    genre: Option<String>,
    style: Option<String>,
    country: Option<String>,
    year: Option<String>,
    format: Option<String>,
    catno: Option<String>,
    barcode: Option<String>,
    track: Option<String>,
}

impl SearchQuery {
    /// Create an empty search
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query string
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Restrict results to one entity kind
    #[must_use]
    pub fn search_type(mut self, t: SearchType) -> Self {
        self.search_type = Some(t);
        self
    }

    /// Filter by title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Filter by artist name
    #[must_use]
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Filter by label name
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Filter by genre
    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Filter by style
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Filter by release country
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Filter by release year
    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Filter by format (e.g. `"vinyl"`)
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Filter by catalog number
    #[must_use]
    pub fn catno(mut self, catno: impl Into<String>) -> Self {
        self.catno = Some(catno.into());
        self
    }

    /// Filter by barcode
    #[must_use]
    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Filter by track title
    #[must_use]
    pub fn track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Render to query parameters
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let mut push = |key: &str, value: &Option<String>| {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        };

        push("q", &self.query);
        push(
            "type",
            &self.search_type.map(|t| t.as_str().to_string()),
        );
        push("title", &self.title);
        push("artist", &self.artist);
        push("label", &self.label);
        push("genre", &self.genre);
        push("style", &self.style);
        push("country", &self.country);
        push("year", &self.year);
        push("format", &self.format);
        push("catno", &self.catno);
        push("barcode", &self.barcode);
        push("track", &self.track);
        params
    }
}

/// Sortable fields for artist releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Year,
    Title,
    Format,
}

impl SortField {
    /// Wire value of the `sort` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Title => "title",
            Self::Format => "format",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value of the `sort_order` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Ordering specification for artist releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Sort {
    /// Ascending sort on a field
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on a field
    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    /// Render to query parameters
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("sort".to_string(), self.field.as_str().to_string()),
            ("sort_order".to_string(), self.order.as_str().to_string()),
        ]
    }
}
