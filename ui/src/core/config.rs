//! Backend endpoint configuration.
//!
//! The audit backend is an external service; everything this crate talks to
//! lives under one base URL. Resolution order:
//! 1. `API_URL` process environment variable (native targets only).
//! 2. `API_URL` captured at compile time (the only option for wasm builds).
//! 3. The localhost default used by the backend's dev setup.

use once_cell::sync::Lazy;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

static API_BASE_URL: Lazy<String> = Lazy::new(resolve);

/// Base URL for all backend requests, without a trailing slash.
pub fn api_base_url() -> &'static str {
    API_BASE_URL.as_str()
}

fn resolve() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(url) = std::env::var("API_URL").ok().as_deref().and_then(normalize) {
        return url;
    }

    option_env!("API_URL")
        .and_then(normalize)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(
            normalize("https://audit.example.com/api/"),
            Some("https://audit.example.com/api".to_string())
        );
    }

    #[test]
    fn normalize_rejects_blank_values() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("///"), None);
    }

    #[test]
    fn default_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
