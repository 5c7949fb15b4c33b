//! Search domain models.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Backend lookup strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Engine {
    /// Search engine results scraped and reconciled by the service.
    #[default]
    Local,
    /// AI-assisted web search.
    Deepsearch,
}

/// A single user-initiated lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    pub engine: Engine,
}

impl SearchRequest {
    /// Builds a request, or `None` when the query is blank.
    ///
    /// Surrounding whitespace is dropped before sending; inner text is kept as typed.
    pub fn new(query: impl Into<String>, engine: Engine) -> Option<Self> {
        let query = query.into();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            query: trimmed.to_string(),
            engine,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// One candidate extraction reported by the service.
///
/// A missing or `null` field reads as empty so one bad entry cannot sink the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub method: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Agreement between the chosen number and the extracted candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consensus {
    pub agreeing: usize,
    pub total: usize,
}

/// Classified outcome of a settled lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The query was judged outside the medical domain.
    OffTopic,
    /// In-domain query without a resolved number.
    NotFound,
    Found {
        query_echo: String,
        phone_number: String,
        primary_source: String,
        details: Vec<SourceDetail>,
    },
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Per-source breakdown; empty unless `Found`.
    pub fn details(&self) -> &[SourceDetail] {
        match self {
            Self::Found { details, .. } => details,
            _ => &[],
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        match self {
            Self::Found { phone_number, .. } => Some(phone_number),
            _ => None,
        }
    }

    /// How many details carry exactly the chosen number.
    pub fn consensus(&self) -> Option<Consensus> {
        match self {
            Self::Found {
                phone_number,
                details,
                ..
            } => Some(Consensus {
                agreeing: details.iter().filter(|d| d.phone == *phone_number).count(),
                total: details.len(),
            }),
            _ => None,
        }
    }
}
