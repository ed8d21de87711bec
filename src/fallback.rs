use std::sync::LazyLock;

use rust_embed::Embed;

use crate::content::{ContentSource, PortfolioData, PortfolioPayload};
use crate::error::{ContentError, Result};

const FALLBACK_FILE: &str = "fallback.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

static FALLBACK: LazyLock<PortfolioData> = LazyLock::new(|| match load() {
    Ok(data) => data,
    Err(e) => {
        log::error!("{e}");
        PortfolioData::default()
    }
});

/// Parses the bundled dataset.
pub fn load() -> Result<PortfolioData> {
    let file = Assets::get(FALLBACK_FILE).ok_or_else(|| ContentError::Fallback {
        message: format!("{FALLBACK_FILE} is not bundled"),
    })?;
    let data: PortfolioData = serde_json::from_slice(&file.data)?;
    Ok(data.sanitized())
}

/// The bundled dataset, or an empty one if it couldn't be read.
pub fn portfolio() -> PortfolioData {
    FALLBACK.clone()
}

/// A payload built purely from bundled content.
pub fn payload() -> PortfolioPayload {
    PortfolioPayload {
        data: portfolio(),
        source: ContentSource::Fallback,
        video_cursor: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_contacts;

    #[test]
    fn test_fallback_loads() {
        let data = load().expect("bundled fallback should parse");
        let about = data.about.expect("fallback should have a profile");
        assert_eq!(about.name, "Анна Гаврилова");
        assert!(data.skills.is_some());
        assert!(data.photos.is_empty());
        assert!(data.videos.is_empty());
        assert!(data.audio.is_empty());
    }

    #[test]
    fn test_fallback_contacts_match_defaults() {
        assert_eq!(portfolio().contacts, default_contacts());
    }

    #[test]
    fn test_fallback_is_never_offline() {
        assert!(!portfolio().is_offline());
    }

    #[test]
    fn test_fallback_payload() {
        let payload = payload();
        assert_eq!(payload.source, ContentSource::Fallback);
        assert_eq!(payload.video_cursor, None);
        assert_eq!(payload.data, portfolio());
    }
}
