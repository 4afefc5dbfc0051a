use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single catalog entry, as delivered by the JSON sources.
///
/// Records are addressed by two coordinates: a *local index* (position in
/// the loaded category list) and a *global id* (local index + category
/// offset). Bookmarks always use the global id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "THUMBNAIL")]
    pub thumbnail: String,
}

/// The category pages of the site. Each one is a slice of a single
/// conceptual global record space; `General` is the superset and doubles
/// as the search corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Music,
    Movies,
    Sports,
}

impl Category {
    /// Fixed offset mapping local indexes into the global id space.
    pub fn offset(&self) -> usize {
        match self {
            Category::General => 0,
            Category::Music => 4729,
            Category::Movies => 3411,
            Category::Sports => 6009,
        }
    }

    /// File name of the category's record source.
    pub fn source_file(&self) -> &'static str {
        match self {
            Category::General => "data.json",
            Category::Music => "music.json",
            Category::Movies => "movies.json",
            Category::Sports => "sports.json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::General => "All videos",
            Category::Music => "Music",
            Category::Movies => "Movies",
            Category::Sports => "Sports",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            Category::General,
            Category::Music,
            Category::Movies,
            Category::Sports,
        ]
    }
}

/// Decodes a record source. The source must be a JSON array; an element
/// that is not a valid record is skipped with a warning instead of
/// failing the whole load.
pub fn decode_records(file: &str, raw: &str) -> Result<Vec<VideoRecord>, CatalogError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| CatalogError::Load {
            file: file.to_string(),
            reason: format!("not a JSON array: {e}"),
        })?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<VideoRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                let err = CatalogError::Data {
                    index,
                    reason: e.to_string(),
                };
                log::warn!("skipping record in {file}: {err}");
            }
        }
    }
    Ok(records)
}
