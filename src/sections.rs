use crate::content::PortfolioData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    About,
    Skills,
    Photos,
    Videos,
    Audio,
    Contacts,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        Self::About,
        Self::Skills,
        Self::Photos,
        Self::Videos,
        Self::Audio,
        Self::Contacts,
    ];

    /// Element id used as the scroll target.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Photos => "photos",
            Self::Videos => "videos",
            Self::Audio => "audio",
            Self::Contacts => "contacts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "Обо мне",
            Self::Skills => "Навыки",
            Self::Photos => "Фотогалерея",
            Self::Videos => "Видеопортфолио",
            Self::Audio => "Аудио",
            Self::Contacts => "Контакты",
        }
    }
}

/// Sections to render, in page order. Contacts always shows since it has
/// its own defaults; everything else needs content.
pub fn visible_sections(data: &PortfolioData) -> Vec<SectionKind> {
    SectionKind::ALL
        .into_iter()
        .filter(|kind| match kind {
            SectionKind::About => data.about.is_some(),
            SectionKind::Skills => data.skills.is_some(),
            SectionKind::Photos => !data.photos.is_empty(),
            SectionKind::Videos => !data.videos.is_empty(),
            SectionKind::Audio => !data.audio.is_empty(),
            SectionKind::Contacts => true,
        })
        .collect()
}

/// Index of the full-height section nearest the top of the viewport.
pub fn active_section_index(scroll_y: f64, viewport_height: f64, count: usize) -> usize {
    if count == 0 || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return 0;
    }
    let raw = (scroll_y.max(0.0) / viewport_height).round();
    if !raw.is_finite() {
        return 0;
    }
    (raw as usize).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MediaItem, MediaKind};
    use crate::fallback;

    #[test]
    fn test_empty_data_shows_only_contacts() {
        assert_eq!(
            visible_sections(&PortfolioData::default()),
            vec![SectionKind::Contacts]
        );
    }

    #[test]
    fn test_fallback_sections() {
        // empty media lists are left out of the page and the navigation
        assert_eq!(
            visible_sections(&fallback::portfolio()),
            vec![SectionKind::About, SectionKind::Skills, SectionKind::Contacts]
        );
    }

    #[test]
    fn test_media_sections_appear_with_content() {
        let mut data = fallback::portfolio();
        data.videos.push(MediaItem {
            id: "v1".to_string(),
            kind: MediaKind::Video,
            url: "https://vk.com/video1_2".to_string(),
            title: None,
            caption: String::new(),
        });
        assert_eq!(
            visible_sections(&data),
            vec![
                SectionKind::About,
                SectionKind::Skills,
                SectionKind::Videos,
                SectionKind::Contacts
            ]
        );
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors: Vec<_> = SectionKind::ALL.iter().map(|k| k.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_titles() {
        assert_eq!(SectionKind::Photos.title(), "Фотогалерея");
        assert_eq!(SectionKind::Videos.title(), "Видеопортфолио");
        assert_eq!(SectionKind::Contacts.title(), "Контакты");
    }

    #[test]
    fn test_active_section_index() {
        assert_eq!(active_section_index(0.0, 800.0, 4), 0);
        assert_eq!(active_section_index(390.0, 800.0, 4), 0);
        assert_eq!(active_section_index(410.0, 800.0, 4), 1);
        assert_eq!(active_section_index(1600.0, 800.0, 4), 2);
        assert_eq!(active_section_index(99_999.0, 800.0, 4), 3);
        assert_eq!(active_section_index(-50.0, 800.0, 4), 0);
        assert_eq!(active_section_index(500.0, f64::INFINITY, 4), 0);
        assert_eq!(active_section_index(500.0, 0.0, 4), 0);
        assert_eq!(active_section_index(500.0, 800.0, 0), 0);
    }
}
