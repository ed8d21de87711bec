use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::media::{is_contact_url, is_renderable_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub name: String,
    pub title: String,
    /// Rich text, rendered as HTML.
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsContent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    Instagram,
    Telegram,
    External,
}

impl From<&str> for ContactIcon {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "mail" | "email" => Self::Mail,
            "instagram" => Self::Instagram,
            "telegram" | "send" => Self::Telegram,
            _ => Self::External,
        }
    }
}

impl ContactItem {
    pub fn new(platform: &str, url: &str, icon: &str) -> Self {
        Self {
            platform: platform.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn icon_kind(&self) -> ContactIcon {
        ContactIcon::from(self.icon.as_str())
    }

    /// Short human-readable handle: the address for mail links, `@name`
    /// for social profiles and the bare host for anything else.
    pub fn handle(&self) -> String {
        let url = self.url.trim();
        if let Some(addr) = url.strip_prefix("mailto:") {
            return addr.split('?').next().unwrap_or(addr).to_string();
        }
        let Ok(parsed) = url::Url::parse(url) else {
            return String::new();
        };
        let host = parsed.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let first_segment = parsed
            .path_segments()
            .and_then(|mut s| s.find(|seg| !seg.is_empty()).map(str::to_string));
        match (host, first_segment) {
            ("instagram.com" | "t.me" | "telegram.me", Some(name)) => format!("@{name}"),
            _ => host.to_string(),
        }
    }
}

/// Email, Instagram and Telegram, shown when no contacts are supplied.
pub fn default_contacts() -> Vec<ContactItem> {
    vec![
        ContactItem::new("Email", "mailto:kirido@mail.ru", "Mail"),
        ContactItem::new("Instagram", "https://instagram.com/annakirido", "Instagram"),
        ContactItem::new("Telegram", "https://t.me/Angavrilova", "Telegram"),
    ]
}

pub fn contacts_or_default(contacts: &[ContactItem]) -> Vec<ContactItem> {
    if contacts.is_empty() {
        default_contacts()
    } else {
        contacts.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    About,
    Skills,
    Photos,
    Videos,
    Audio,
    Contacts,
    #[serde(other)]
    Unknown,
}

/// One row of the remote portfolio table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSection {
    pub section_type: SectionType,
    #[serde(default)]
    pub section_title: Option<String>,
    #[serde(default)]
    pub section_order: i64,
    #[serde(default)]
    pub content: Value,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PortfolioSection {
    /// Decodes table rows one at a time, dropping any that don't fit.
    pub fn decode_rows(rows: Vec<Value>) -> Vec<PortfolioSection> {
        rows.into_iter()
            .enumerate()
            .filter_map(|(i, row)| match serde_json::from_value(row) {
                Ok(section) => Some(section),
                Err(e) => {
                    log::warn!("Skipping portfolio row {i}: {e}");
                    None
                }
            })
            .collect()
    }
}

/// Accepts RFC 3339 as well as zone-less `timestamp` columns (read as UTC).
/// Anything else becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let Some(raw) = raw.as_str() else {
        return Ok(None);
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|at| at.and_utc()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub about: Option<AboutContent>,
    #[serde(default)]
    pub skills: Option<SkillsContent>,
    #[serde(default)]
    pub photos: Vec<MediaItem>,
    #[serde(default)]
    pub videos: Vec<MediaItem>,
    #[serde(default)]
    pub audio: Vec<MediaItem>,
    #[serde(default)]
    pub contacts: Vec<ContactItem>,
}

impl PortfolioData {
    /// Drops media and contacts whose links could never render.
    pub fn sanitized(mut self) -> Self {
        let before = self.photos.len() + self.videos.len() + self.audio.len();
        self.photos.retain(|m| is_renderable_url(&m.url));
        self.videos.retain(|m| is_renderable_url(&m.url));
        self.audio.retain(|m| is_renderable_url(&m.url));
        let dropped = before - (self.photos.len() + self.videos.len() + self.audio.len());
        if dropped > 0 {
            log::warn!("Dropped {dropped} media items with unusable URLs");
        }
        self.contacts.retain(|c| is_contact_url(&c.url));
        self
    }

    /// Neither a profile nor a single contact is available.
    pub fn is_offline(&self) -> bool {
        self.about.is_none() && self.contacts.is_empty()
    }

    /// Appends videos whose URL isn't already present.
    pub fn append_videos(&mut self, items: impl IntoIterator<Item = MediaItem>) {
        for item in items {
            if !self.videos.iter().any(|v| v.url == item.url) {
                self.videos.push(item);
            }
        }
    }
}

/// Where the page content ended up coming from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    Remote,
    Fallback,
}

/// Everything the page needs for its first render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPayload {
    pub data: PortfolioData,
    pub source: ContentSource,
    /// Next slot for video discovery, if more videos might exist.
    pub video_cursor: Option<usize>,
}

/// Videos found by one round of storage probing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoBatch {
    pub items: Vec<MediaItem>,
    pub next_offset: Option<usize>,
}

/// Content decoded from the remote store. `None` means the store did not
/// supply that section at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteContent {
    pub about: Option<AboutContent>,
    pub skills: Option<SkillsContent>,
    pub photos: Option<Vec<MediaItem>>,
    pub videos: Option<Vec<MediaItem>>,
    pub audio: Option<Vec<MediaItem>>,
    pub contacts: Option<Vec<ContactItem>>,
}

impl RemoteContent {
    pub fn from_sections(mut sections: Vec<PortfolioSection>) -> Self {
        sections.sort_by_key(|s| s.section_order);
        let mut remote = Self::default();
        for section in sections {
            let content = section.content;
            match section.section_type {
                SectionType::About => remote.about = decode_section(&content, "about"),
                SectionType::Skills => remote.skills = decode_section(&content, "skills"),
                SectionType::Photos => {
                    remote.photos = Some(media_items(&content, MediaKind::Image, false))
                }
                SectionType::Videos => {
                    remote.videos = Some(media_items(&content, MediaKind::Video, true))
                }
                SectionType::Audio => {
                    remote.audio = Some(media_items(&content, MediaKind::Audio, false))
                }
                SectionType::Contacts => remote.contacts = Some(contact_items(&content)),
                SectionType::Unknown => {
                    log::debug!(
                        "Ignoring unknown section '{}'",
                        section.section_title.as_deref().unwrap_or_default()
                    )
                }
            }
        }
        remote
    }

    /// Every section the store supplied wins; the rest come from `fallback`.
    pub fn merge_with(self, fallback: &PortfolioData) -> PortfolioData {
        PortfolioData {
            about: self.about.or_else(|| fallback.about.clone()),
            skills: self.skills.or_else(|| fallback.skills.clone()),
            photos: self.photos.unwrap_or_else(|| fallback.photos.clone()),
            videos: self.videos.unwrap_or_else(|| fallback.videos.clone()),
            audio: self.audio.unwrap_or_else(|| fallback.audio.clone()),
            contacts: self.contacts.unwrap_or_else(|| fallback.contacts.clone()),
        }
    }
}

fn decode_section<T: serde::de::DeserializeOwned>(content: &Value, name: &str) -> Option<T> {
    match serde_json::from_value(content.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Couldn't decode '{name}' section: {e}");
            None
        }
    }
}

fn items_of(content: &Value) -> &[Value] {
    content
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn media_items(content: &Value, kind: MediaKind, flatten: bool) -> Vec<MediaItem> {
    let mut out = Vec::new();
    collect_media(items_of(content), kind, flatten, &mut out);
    out
}

fn collect_media(items: &[Value], kind: MediaKind, flatten: bool, out: &mut Vec<MediaItem>) {
    for item in items {
        match item.get("items").and_then(Value::as_array) {
            Some(nested) if flatten => collect_media(nested, kind, flatten, out),
            _ => out.extend(media_item(item, kind)),
        }
    }
}

fn value_as_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn media_item(value: &Value, default_kind: MediaKind) -> Option<MediaItem> {
    let id = value_as_string(value.get("id"))?;
    let url = value.get("url")?.as_str()?.to_string();
    let kind = value
        .get("type")
        .and_then(|t| serde_json::from_value(t.clone()).ok())
        .unwrap_or(default_kind);
    Some(MediaItem {
        id,
        kind,
        url,
        title: value.get("title").and_then(Value::as_str).map(str::to_string),
        caption: value
            .get("caption")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

fn contact_items(content: &Value) -> Vec<ContactItem> {
    items_of(content)
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}
