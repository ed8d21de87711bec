use std::env;
use std::time::Duration;

use crate::error::{ContentError, Result};

pub const DEFAULT_TABLE: &str = "anna_ivanova_table";
pub const DEFAULT_BUCKET: &str = "annagavrilova";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PROBE_LIMIT: usize = 30;
pub const DEFAULT_PROBE_BATCH: usize = 6;

/// Where the remote content lives and how hard to look for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub anon_key: String,
    pub table: String,
    pub bucket: String,
    pub slideshow_prefix: String,
    pub video_prefix: String,
    pub timeout: Duration,
    /// Upper bound on guessed video slots.
    pub probe_limit: usize,
    /// Slots probed per discovery batch.
    pub probe_batch: usize,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            slideshow_prefix: "slideshow".to_string(),
            video_prefix: "videos".to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            probe_limit: DEFAULT_PROBE_LIMIT,
            probe_batch: DEFAULT_PROBE_BATCH,
        }
    }

    /// Reads the store settings from the environment. `Ok(None)` means the
    /// site runs on bundled content only.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let (Some(url), Some(key)) = (non_empty("SUPABASE_URL"), non_empty("SUPABASE_ANON_KEY"))
        else {
            return Ok(None);
        };
        if url::Url::parse(&url).is_err() {
            return Err(ContentError::config(format!("SUPABASE_URL is not a URL: {url}")));
        }

        let mut config = Self::new(url, key);
        if let Some(table) = non_empty("PORTFOLIO_TABLE") {
            config.table = table;
        }
        if let Some(bucket) = non_empty("PORTFOLIO_BUCKET") {
            config.bucket = bucket;
        }
        if let Some(prefix) = non_empty("PORTFOLIO_SLIDESHOW_PREFIX") {
            config.slideshow_prefix = prefix;
        }
        if let Some(prefix) = non_empty("PORTFOLIO_VIDEO_PREFIX") {
            config.video_prefix = prefix;
        }
        if let Some(ms) = non_empty("PORTFOLIO_FETCH_TIMEOUT_MS") {
            config.timeout = Duration::from_millis(parse_number("PORTFOLIO_FETCH_TIMEOUT_MS", &ms)?);
        }
        if let Some(limit) = non_empty("PORTFOLIO_PROBE_LIMIT") {
            config.probe_limit = parse_number("PORTFOLIO_PROBE_LIMIT", &limit)?;
        }
        if let Some(batch) = non_empty("PORTFOLIO_PROBE_BATCH") {
            config.probe_batch = parse_number("PORTFOLIO_PROBE_BATCH", &batch)?;
        }
        if config.probe_batch == 0 {
            return Err(ContentError::config("PORTFOLIO_PROBE_BATCH must be at least 1"));
        }
        Ok(Some(config))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ContentError::config(format!("{key} is not a number: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_credentials_means_static_mode() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])).unwrap(), None);
        assert_eq!(
            StoreConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")])).unwrap(),
            None
        );
        assert_eq!(
            StoreConfig::from_lookup(lookup(&[
                ("SUPABASE_URL", "https://x.supabase.co"),
                ("SUPABASE_ANON_KEY", "  ")
            ]))
            .unwrap(),
            None
        );
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.base_url, "https://x.supabase.co");
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(config.bucket, DEFAULT_BUCKET);
        assert_eq!(config.timeout, Duration::from_millis(5_000));
        assert_eq!(config.probe_limit, 30);
    }

    #[test]
    fn test_overrides_and_errors() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORTFOLIO_TABLE", "sections"),
            ("PORTFOLIO_FETCH_TIMEOUT_MS", "250"),
            ("PORTFOLIO_PROBE_BATCH", "3"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.table, "sections");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.probe_batch, 3);

        let bad_number = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORTFOLIO_PROBE_LIMIT", "lots"),
        ]));
        assert!(matches!(bad_number, Err(ContentError::Config { .. })));

        let zero_batch = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORTFOLIO_PROBE_BATCH", "0"),
        ]));
        assert!(matches!(zero_batch, Err(ContentError::Config { .. })));

        let bad_url = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "nope"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]));
        assert!(bad_url.is_err());
    }
}
