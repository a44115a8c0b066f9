//! Runtime-fetched static assets.
use disaster_core::{Catalog, CatalogError};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("asset responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fetch and parse the item catalog spreadsheet.
///
/// # Errors
///
/// Returns an error if the request fails, answers with a non-2xx status, or
/// the body is not a usable workbook.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, AssetError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| AssetError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(AssetError::Status(response.status()));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|err| AssetError::Fetch(err.to_string()))?;
    Ok(Catalog::from_xlsx_bytes(&bytes)?)
}
