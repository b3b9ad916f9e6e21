use serde::{Deserialize, Serialize};

use crate::filters::{display_value, Filters};

/// How filter values are embedded in the path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathEncoding {
    /// Embed the value as-is. Query parameters are still encoded.
    #[default]
    Raw,
    /// Percent-encode the value like a query parameter.
    Encoded,
}

/// API path chosen from the active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPath {
    Venue(String),
    Publisher(String),
    Search(String),
    All,
}

impl ApiPath {
    /// Picks the path by precedence: venue, publisher, search, then none.
    pub fn select(filters: &Filters) -> Self {
        if let Some(venue) = filters.venue() {
            Self::Venue(display_value(venue))
        } else if let Some(publisher) = filters.publisher() {
            Self::Publisher(display_value(publisher))
        } else if let Some(search) = filters.search() {
            Self::Search(display_value(search))
        } else {
            Self::All
        }
    }

    /// Path segment relative to the API base, always ending in `/`.
    pub fn segment(&self, encoding: PathEncoding) -> String {
        let (prefix, value) = match self {
            Self::Venue(v) => ("venue", v),
            Self::Publisher(p) => ("publisher", p),
            Self::Search(s) => ("search", s),
            Self::All => return "search/".to_string(),
        };
        let value = match encoding {
            PathEncoding::Raw => value.clone(),
            PathEncoding::Encoded => urlencoding::encode(value).into_owned(),
        };
        format!("{}/{}/", prefix, value)
    }
}
