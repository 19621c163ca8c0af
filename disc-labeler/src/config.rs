//! Environment-driven configuration with documented defaults.

use std::path::PathBuf;

/// Runtime configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_base_url: String,
    pub store_collection: String,
    pub store_auth_token: Option<String>,
    pub output_dir: PathBuf,
    pub pdf_path: PathBuf,
    pub create_placeholders: bool,
    pub placeholder_prefix: String,
    pub placeholder_count: u32,
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_base_url: "http://localhost:8080/api".into(),
            store_collection: "discmain".into(),
            store_auth_token: None,
            output_dir: "qr_codes".into(),
            pdf_path: "Disc_QR_Codes.pdf".into(),
            create_placeholders: false,
            placeholder_prefix: "disc".into(),
            placeholder_count: 20,
            font_path: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// the defaults above for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            store_base_url: env_or("STORE_BASE_URL", defaults.store_base_url),
            store_collection: env_or("STORE_COLLECTION", defaults.store_collection),
            store_auth_token: env_opt("STORE_AUTH_TOKEN"),
            output_dir: env_or("OUTPUT_DIR", defaults.output_dir),
            pdf_path: env_or("PDF_PATH", defaults.pdf_path),
            create_placeholders: env_flag("CREATE_PLACEHOLDERS", defaults.create_placeholders),
            placeholder_prefix: env_or("PLACEHOLDER_PREFIX", defaults.placeholder_prefix),
            placeholder_count: parse_u32(
                &std::env::var("PLACEHOLDER_COUNT").unwrap_or_default(),
                defaults.placeholder_count,
            ),
            font_path: env_opt("FONT_PATH").map(PathBuf::from),
        }
    }
}

fn env_or<T: From<String>>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => T::from(v),
        _ => default,
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v == "true" || v == "1",
        _ => default,
    }
}

fn parse_u32(s: &str, default: u32) -> u32 {
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stable() {
        let config = AppConfig::default();
        assert_eq!(config.store_collection, "discmain");
        assert_eq!(config.output_dir, PathBuf::from("qr_codes"));
        assert_eq!(config.pdf_path, PathBuf::from("Disc_QR_Codes.pdf"));
        assert_eq!(config.placeholder_prefix, "disc");
        assert_eq!(config.placeholder_count, 20);
        assert!(!config.create_placeholders);
    }

    #[test]
    fn parse_u32_falls_back_on_garbage() {
        assert_eq!(parse_u32("7", 20), 7);
        assert_eq!(parse_u32("", 20), 20);
        assert_eq!(parse_u32("nope", 20), 20);
    }
}
