use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::content::{ContentSource, PortfolioPayload, PortfolioSection, RemoteContent};
use crate::error::{ContentError, Result};
use crate::fallback;

const CLIENT_INFO: &str = "presenter-portfolio";

/// Client for the hosted database and its object storage.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub(crate) client: reqwest::Client,
    pub(crate) config: StoreConfig,
}

/// Shared with server functions through Leptos context.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: Option<ContentStore>,
}

impl AppState {
    /// Builds the store from the environment. Misconfiguration is logged and
    /// leaves the site on bundled content.
    pub fn from_env() -> Self {
        let store = match StoreConfig::from_env() {
            Ok(Some(config)) => match ContentStore::new(config) {
                Ok(store) => Some(store),
                Err(e) => {
                    warn!("Couldn't build content store client: {e}");
                    None
                }
            },
            Ok(None) => {
                info!("Content store not configured, serving bundled content");
                None
            }
            Err(e) => {
                warn!("{e}; serving bundled content");
                None
            }
        };
        Self { store }
    }
}

impl ContentStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|_| ContentError::config("SUPABASE_ANON_KEY is not a valid header value"))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|_| ContentError::config("SUPABASE_ANON_KEY is not a valid header value"))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("x-client-info", HeaderValue::from_static(CLIENT_INFO));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ContentError::from_request)?;
        Ok(Self { client, config })
    }

    /// All portfolio rows, ordered by `section_order`. Rows that don't decode
    /// are skipped; only a body that isn't a JSON array fails.
    pub async fn fetch_sections(&self) -> Result<Vec<PortfolioSection>> {
        let url = format!("{}/rest/v1/{}", self.config.base_url, self.config.table);
        debug!(%url, "Fetching portfolio sections");
        let res = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "section_order.asc")])
            .send()
            .await
            .map_err(ContentError::from_request)?;

        let body = checked_body(res).await?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(PortfolioSection::decode_rows(rows))
    }
}

/// Reads a response body, turning non-2xx answers into errors.
pub(crate) async fn checked_body(res: reqwest::Response) -> Result<String> {
    let status = res.status();
    let body = res.text().await.map_err(ContentError::from_request)?;
    if !status.is_success() {
        return Err(ContentError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Gathers page content, substituting bundled content for anything the
/// store can't provide. Never fails.
pub async fn load_portfolio(store: Option<&ContentStore>) -> PortfolioPayload {
    let Some(store) = store else {
        return fallback::payload();
    };

    let mut reachable = true;
    let mut payload = match store.fetch_sections().await {
        Ok(sections) if sections.is_empty() => {
            info!("Content store is empty, using bundled content");
            fallback::payload()
        }
        Ok(sections) => {
            info!(count = sections.len(), "Loaded portfolio sections");
            let data = RemoteContent::from_sections(sections)
                .merge_with(&fallback::portfolio())
                .sanitized();
            PortfolioPayload {
                data,
                source: ContentSource::Remote,
                video_cursor: None,
            }
        }
        Err(e) => {
            warn!("Couldn't load content, using bundled content: {e}");
            reachable = matches!(e, ContentError::Status { .. });
            fallback::payload()
        }
    };

    // storage lives on the same host; don't wait on it twice
    if !reachable {
        return payload;
    }

    if payload.data.photos.is_empty() {
        match store.list_slideshow().await {
            Ok(photos) => payload.data.photos = photos,
            Err(e) => warn!("Couldn't list slideshow: {e}"),
        }
    }

    let batch = store.probe_videos(0).await;
    payload.data.append_videos(batch.items);
    payload.video_cursor = batch.next_offset;

    payload
}
