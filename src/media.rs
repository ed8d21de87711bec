use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use url::Url;

static VK_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"vk\.com/video(-?\d+)_(\d+)").expect("VK pattern should compile")
});
static YOUTUBE_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})")
        .expect("YouTube pattern should compile")
});
static RUTUBE_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rutube\.ru/video/([0-9A-Za-z]+)").expect("RuTube pattern should compile")
});
static IMAGE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\.(jpg|jpeg|png|gif|webp)$")
        .case_insensitive(true)
        .build()
        .expect("image pattern should compile")
});
static VIDEO_FILE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\.(mp4|webm|mov|m4v)(\?.*)?$")
        .case_insensitive(true)
        .build()
        .expect("video pattern should compile")
});

/// Shown in place of a photo that fails to load.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg?auto=compress&cs=tinysrgb&w=800";

/// Extensions tried, in order, for every guessed video slot.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// True for absolute http(s) URLs and site-relative paths.
pub fn is_renderable_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    if url.starts_with('/') && !url.starts_with("//") {
        return true;
    }
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Like [`is_renderable_url`] but also accepts `mailto:` and `tel:` links.
pub fn is_contact_url(url: &str) -> bool {
    if is_renderable_url(url) {
        return true;
    }
    match Url::parse(url.trim()) {
        Ok(parsed) if parsed.scheme() == "mailto" => parsed.path().contains('@'),
        Ok(parsed) if parsed.scheme() == "tel" => !parsed.path().is_empty(),
        _ => false,
    }
}

pub fn is_image_file(name: &str) -> bool {
    IMAGE_FILE.is_match(name)
}

pub fn is_video_file(name: &str) -> bool {
    VIDEO_FILE.is_match(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Played through an `<iframe>` from a hosting platform.
    Embed(String),
    /// Played directly with a `<video>` element.
    File(String),
}

impl VideoSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Embed(u) | Self::File(u) => u,
        }
    }
}

/// Works out how a video URL should be played, converting platform page
/// links into their embeddable player URLs.
pub fn video_source(url: &str) -> Option<VideoSource> {
    let url = url.trim();
    if !is_renderable_url(url) {
        return None;
    }
    if is_video_file(url) {
        return Some(VideoSource::File(url.to_string()));
    }
    if let Some(caps) = VK_VIDEO.captures(url) {
        return Some(VideoSource::Embed(format!(
            "https://vk.com/video_ext.php?oid={}&id={}&hd=2",
            &caps[1], &caps[2]
        )));
    }
    if url.contains("video_ext.php") || url.contains("/embed/") {
        return Some(VideoSource::Embed(url.to_string()));
    }
    if let Some(caps) = YOUTUBE_VIDEO.captures(url) {
        return Some(VideoSource::Embed(format!(
            "https://www.youtube.com/embed/{}",
            &caps[1]
        )));
    }
    if let Some(caps) = RUTUBE_VIDEO.captures(url) {
        return Some(VideoSource::Embed(format!(
            "https://rutube.ru/play/embed/{}",
            &caps[1]
        )));
    }
    Some(VideoSource::Embed(url.to_string()))
}

pub fn platform_name(url: &str) -> &'static str {
    if url.contains("vk.com") {
        "VK"
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        "YouTube"
    } else if url.contains("rutube.ru") {
        "RuTube"
    } else {
        "Видео"
    }
}

/// Label for the link that opens a video outside the player.
pub fn watch_link_label(url: &str) -> String {
    match video_source(url) {
        Some(VideoSource::File(_)) => "Открыть видео".to_string(),
        _ => format!("Смотреть на {}", platform_name(url)),
    }
}

/// Public download URL for an object in a storage bucket.
pub fn public_object_url(base: &str, bucket: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    match Url::parse(base) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments
                    .pop_if_empty()
                    .extend(["storage", "v1", "object", "public", bucket])
                    .extend(path.split('/').filter(|s| !s.is_empty()));
            }
            url.to_string()
        }
        Err(_) => format!(
            "{base}/storage/v1/object/public/{bucket}/{}",
            path.trim_start_matches('/')
        ),
    }
}

/// Candidate object paths for one guessed video slot (zero-based).
pub fn video_candidates(prefix: &str, slot: usize) -> Vec<String> {
    let prefix = prefix.trim_matches('/');
    VIDEO_EXTENSIONS
        .iter()
        .map(|ext| {
            if prefix.is_empty() {
                format!("video{}.{ext}", slot + 1)
            } else {
                format!("{prefix}/video{}.{ext}", slot + 1)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderable_urls() {
        assert!(is_renderable_url("https://example.com/a.jpg"));
        assert!(is_renderable_url("  http://example.com  "));
        assert!(is_renderable_url("/images/local.png"));

        assert!(!is_renderable_url(""));
        assert!(!is_renderable_url("   "));
        assert!(!is_renderable_url("not a url"));
        assert!(!is_renderable_url("https://"));
        assert!(!is_renderable_url("//cdn.example.com/a.png"));
        assert!(!is_renderable_url("javascript:alert(1)"));
        assert!(!is_renderable_url("ftp://example.com/file"));
    }

    #[test]
    fn test_contact_urls() {
        assert!(is_contact_url("mailto:kirido@mail.ru"));
        assert!(is_contact_url("tel:+79990000000"));
        assert!(is_contact_url("https://t.me/Angavrilova"));
        assert!(!is_contact_url("mailto:"));
        assert!(!is_contact_url(""));
    }

    #[test]
    fn test_file_types() {
        assert!(is_image_file("photo.JPG"));
        assert!(is_image_file("a.webp"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("jpg"));

        assert!(is_video_file("clip.mp4"));
        assert!(is_video_file("https://x.co/v/clip.MOV?token=1"));
        assert!(!is_video_file("clip.mp3"));
    }

    #[test]
    fn test_vk_conversion() {
        let src = video_source("https://vk.com/video-26548409_456273982").unwrap();
        assert_eq!(
            src,
            VideoSource::Embed(
                "https://vk.com/video_ext.php?oid=-26548409&id=456273982&hd=2".to_string()
            )
        );

        let already = "https://vk.com/video_ext.php?oid=1&id=2";
        assert_eq!(
            video_source(already),
            Some(VideoSource::Embed(already.to_string()))
        );
    }

    #[test]
    fn test_youtube_and_rutube_conversion() {
        assert_eq!(
            video_source("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap().url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            video_source("https://youtu.be/dQw4w9WgXcQ").unwrap().url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            video_source("https://rutube.ru/video/abc123def456/").unwrap().url(),
            "https://rutube.ru/play/embed/abc123def456"
        );
    }

    #[test]
    fn test_direct_files_and_bad_urls() {
        assert_eq!(
            video_source("https://cdn.example.com/videos/video1.mp4"),
            Some(VideoSource::File(
                "https://cdn.example.com/videos/video1.mp4".to_string()
            ))
        );
        assert_eq!(video_source(""), None);
        assert_eq!(video_source("garbage"), None);
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(platform_name("https://vk.com/video1_2"), "VK");
        assert_eq!(platform_name("https://youtu.be/x"), "YouTube");
        assert_eq!(platform_name("https://rutube.ru/video/x"), "RuTube");
        assert_eq!(platform_name("https://example.com"), "Видео");
    }

    #[test]
    fn test_watch_link_label() {
        assert_eq!(
            watch_link_label("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "Смотреть на YouTube"
        );
        assert_eq!(watch_link_label("https://vk.com/video-1_2"), "Смотреть на VK");
        assert_eq!(
            watch_link_label("https://cdn.example.com/videos/video1.mp4"),
            "Открыть видео"
        );
    }

    #[test]
    fn test_public_object_url() {
        assert_eq!(
            public_object_url("https://proj.supabase.co/", "bucket", "slideshow/a b.jpg"),
            "https://proj.supabase.co/storage/v1/object/public/bucket/slideshow/a%20b.jpg"
        );
    }

    #[test]
    fn test_video_candidates() {
        assert_eq!(
            video_candidates("/videos/", 0),
            vec!["videos/video1.mp4", "videos/video1.webm", "videos/video1.mov"]
        );
        assert_eq!(video_candidates("", 4)[0], "video5.mp4");
    }
}
