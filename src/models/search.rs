use serde::{Deserialize, Serialize};

pub const NO_RESULTS: &str = "No results found";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogArtist {
    pub name: String,
    pub id: Option<String>,
}

/// One catalog entry, as ordered by the catalog.
///
/// Album, artist and playlist cards carry no video id, so every field the
/// proxy relies on is optional here.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogResult {
    pub result_type: Option<String>,
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub artists: Vec<CatalogArtist>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchResponse {
    Found {
        #[serde(rename = "videoId")]
        video_id: String,
        title: String,
        artist: String,
    },
    NotFound {
        error: String,
    },
}

impl SearchResponse {
    pub fn not_found() -> Self {
        SearchResponse::NotFound {
            error: NO_RESULTS.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    Songs,
    Videos,
    Albums,
    Artists,
    Playlists,
}

impl SearchFilter {
    /// Opaque `params` token the catalog uses to restrict a search to one
    /// result type.
    pub fn params(self) -> String {
        let kind = match self {
            SearchFilter::Songs => "II",
            SearchFilter::Videos => "IQ",
            SearchFilter::Albums => "IY",
            SearchFilter::Artists => "Ig",
            SearchFilter::Playlists => "Io",
        };
        format!("EgWKAQ{}AWoMEA4QChADEAQQCRAF", kind)
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default)]
    pub filter: Option<SearchFilter>,
}
