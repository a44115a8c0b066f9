//! Helpers for constructing URLs that respect the deployment base path.
use disaster_core::ClientConfig;

/// Prefix a static asset path with the deployment base.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/play` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/play` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Client configuration with compile-time overrides applied.
///
/// `DISASTER_API_BASE` replaces the default backend origin.
#[must_use]
pub fn client_config() -> ClientConfig {
    ClientConfig::default().with_api_base(option_env!("DISASTER_API_BASE"))
}

/// URL of the item catalog spreadsheet.
#[must_use]
pub fn catalog_url(config: &ClientConfig) -> String {
    asset_path(&config.catalog_path)
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, catalog_url, client_config, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("resource/water.png"), "/resource/water.png");
        assert_eq!(asset_path("/resource/logo.png"), "/resource/logo.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("resource/water.png", "/play"),
            "/play/resource/water.png"
        );
        assert_eq!(
            super::asset_path_with_base("/Items.xlsx", "/play/"),
            "/play/Items.xlsx"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/play/"),
            Some(String::from("/play"))
        );
    }

    #[test]
    fn default_config_points_at_local_backend_and_catalog() {
        let config = client_config();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(catalog_url(&config), "/Items.xlsx");
    }
}
