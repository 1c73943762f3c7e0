//! Product metadata record.

use super::MetadataRow;
use crate::error::{PalateError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// The fields of one metadata line that the recommender uses.
///
/// Other columns (`tech1`, `date`, `imageURLHighRes`, ...) are ignored.
/// Missing or `null` strings read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Song or album title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Free-text description paragraphs; anything but a list of strings
    /// reads as absent
    #[serde(default, deserialize_with = "paragraphs")]
    pub description: Option<Vec<String>>,
    /// Artist or label
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,
    /// Amazon product identifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub asin: String,
}

impl Product {
    /// Build a product by hand.
    pub fn new<I, S>(title: &str, brand: &str, asin: &str, description: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            description: Some(description.into_iter().map(Into::into).collect()),
            brand: brand.to_string(),
            asin: asin.to_string(),
        }
    }

    /// Parse the product fields of a loaded row.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::Json`] when a used field has the wrong type.
    pub fn from_row(row: &MetadataRow, path: &Path) -> Result<Self> {
        Self::deserialize(&row.fields).map_err(|source| PalateError::Json {
            path: path.to_path_buf(),
            line: Some(row.line),
            source,
        })
    }

    /// True when title, brand and asin are all non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.brand.is_empty() && !self.asin.is_empty()
    }

    /// Title followed by the description paragraphs, space separated.
    ///
    /// A missing description contributes an empty string, so the result
    /// always contains the separating space.
    #[must_use]
    pub fn combined_text(&self) -> String {
        let description = self
            .description
            .as_deref()
            .map(|parts| parts.join(" "))
            .unwrap_or_default();
        format!("{} {}", self.title, description)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Paragraphs {
    List(Vec<String>),
    Other(serde::de::IgnoredAny),
}

fn paragraphs<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<Paragraphs>::deserialize(deserializer)? {
        Some(Paragraphs::List(parts)) => Some(parts),
        Some(Paragraphs::Other(_)) | None => None,
    })
}
