use std::sync::LazyLock;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Deserialize;
use serde_json::json;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::content::{MediaItem, MediaKind, VideoBatch};
use crate::error::{ContentError, Result};
use crate::media::{is_image_file, public_object_url, video_candidates};
use crate::store::{checked_body, ContentStore};

const SLIDESHOW_LIMIT: usize = 100;
const PROBE_CACHE_TTL: Duration = Duration::from_secs(600);

/// Discovered video batches keyed by storage location and starting slot.
pub static GLOBAL_PROBE_CACHE: LazyLock<DashMap<(String, usize), (Instant, VideoBatch)>> =
    LazyLock::new(DashMap::new);

#[derive(Deserialize, Debug)]
struct StorageObject {
    name: String,
}

impl ContentStore {
    /// Images in the slideshow folder, sorted by name.
    pub async fn list_slideshow(&self) -> Result<Vec<MediaItem>> {
        let config = &self.config;
        let url = format!(
            "{}/storage/v1/object/list/{}",
            config.base_url, config.bucket
        );
        let body = json!({
            "prefix": config.slideshow_prefix,
            "limit": SLIDESHOW_LIMIT,
            "offset": 0,
            "sortBy": { "column": "name", "order": "asc" },
        });
        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ContentError::from_request)?;
        let body = checked_body(res).await?;
        let objects: Vec<StorageObject> = serde_json::from_str(&body)?;

        let prefix = config.slideshow_prefix.trim_matches('/');
        let photos = objects
            .into_iter()
            .filter(|o| is_image_file(&o.name))
            .enumerate()
            .map(|(i, o)| MediaItem {
                id: format!("photo-{i}"),
                kind: MediaKind::Image,
                url: public_object_url(
                    &config.base_url,
                    &config.bucket,
                    &format!("{prefix}/{}", o.name),
                ),
                title: Some(o.name),
                caption: format!("Фото {}", i + 1),
            })
            .collect::<Vec<_>>();
        info!(count = photos.len(), "Listed slideshow images");
        Ok(photos)
    }

    /// HEAD request against the object's public URL. Any answer other than
    /// a 2xx counts as missing; no answer at all is an error.
    pub async fn object_exists(&self, path: &str) -> Result<bool> {
        let url = public_object_url(&self.config.base_url, &self.config.bucket, path);
        match self.client.head(&url).send().await {
            Ok(res) => Ok(res.status().is_success()),
            Err(e) => {
                debug!(%url, "Probe failed: {e}");
                Err(ContentError::from_request(e))
            }
        }
    }

    async fn probe_slot(&self, slot: usize) -> Result<Option<String>> {
        for candidate in video_candidates(&self.config.video_prefix, slot) {
            if self.object_exists(&candidate).await? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    fn probe_scope(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url, self.config.bucket, self.config.video_prefix
        )
    }

    /// Guesses video filenames for one batch of slots starting at `offset`.
    ///
    /// Slots are probed concurrently; dropping the returned future aborts
    /// any probes still in flight. Discovery ends at `probe_limit` or at the
    /// first batch that turns up nothing. Batches where some probe got no
    /// answer aren't cached and don't end discovery.
    pub async fn probe_videos(&self, offset: usize) -> VideoBatch {
        let limit = self.config.probe_limit;
        if offset >= limit {
            return VideoBatch::default();
        }
        let key = (self.probe_scope(), offset);
        if let Some(entry) = GLOBAL_PROBE_CACHE.get(&key) {
            let (at, batch) = entry.value();
            if at.elapsed() < PROBE_CACHE_TTL {
                return batch.clone();
            }
        }

        let end = (offset + self.config.probe_batch).min(limit);
        let mut probes = JoinSet::new();
        for slot in offset..end {
            let store = self.clone();
            probes.spawn(async move { (slot, store.probe_slot(slot).await) });
        }

        let mut found = Vec::new();
        // a slot that got no answer might still hold a video
        let mut incomplete = false;
        while let Some(res) = probes.join_next().await {
            match res {
                Ok((slot, Ok(Some(path)))) => found.push((slot, path)),
                Ok((_, Ok(None))) => {}
                Ok((slot, Err(e))) => {
                    warn!(slot, "Couldn't probe video slot: {e}");
                    incomplete = true;
                }
                Err(e) => {
                    warn!("Probe task failed: {e}");
                    incomplete = true;
                }
            }
        }
        found.sort_by_key(|(slot, _)| *slot);

        let items = found
            .into_iter()
            .map(|(slot, path)| MediaItem {
                id: format!("probe-{slot}"),
                kind: MediaKind::Video,
                url: public_object_url(&self.config.base_url, &self.config.bucket, &path),
                title: Some(format!("Видео {}", slot + 1)),
                caption: String::new(),
            })
            .collect::<Vec<_>>();
        let next_offset = if (items.is_empty() && !incomplete) || end >= limit {
            None
        } else {
            Some(end)
        };
        info!(offset, found = items.len(), ?next_offset, "Probed video slots");

        let batch = VideoBatch { items, next_offset };
        if incomplete {
            debug!(offset, "Not caching a batch with failed probes");
        } else {
            GLOBAL_PROBE_CACHE.insert(key, (Instant::now(), batch.clone()));
        }
        batch
    }
}
