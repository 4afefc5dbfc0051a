use catalog_core::error::CatalogError;
use catalog_core::record::{decode_records, Category, VideoRecord};
use gloo_net::http::Request;

use crate::env_variable_utils::DATA_BASE_URL;

/// Fetches the record list for a category page.
pub async fn fetch_catalog(category: Category) -> Result<Vec<VideoRecord>, CatalogError> {
    fetch_records(category.source_file()).await
}

/// Fetches the superset list used exclusively for search. Runs
/// concurrently with the category fetch; they write to distinct slots.
pub async fn fetch_search_corpus() -> Result<Vec<VideoRecord>, CatalogError> {
    fetch_records(Category::General.source_file()).await
}

async fn fetch_records(file: &str) -> Result<Vec<VideoRecord>, CatalogError> {
    let url = format!("{}/{}", &*DATA_BASE_URL, file);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| CatalogError::Load {
            file: file.to_string(),
            reason: format!("network error: {e}"),
        })?;

    if !response.ok() {
        return Err(CatalogError::Load {
            file: file.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let raw = response.text().await.map_err(|e| CatalogError::Load {
        file: file.to_string(),
        reason: format!("failed to read body: {e}"),
    })?;

    decode_records(file, &raw)
}
