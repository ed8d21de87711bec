use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::content::MediaItem;
use crate::media::is_renderable_url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Повтор выкл.",
            Self::All => "Повтор всех",
            Self::One => "Повтор одного",
        }
    }
}

/// Player settings remembered between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPrefs {
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    items: Vec<MediaItem>,
    // playback order as indices into `items`
    order: Vec<usize>,
    // position within `order`
    position: Option<usize>,
    shuffle: bool,
    repeat: RepeatMode,
}

fn shuffle_indices(indices: &mut [usize], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
}

impl Playlist {
    pub fn new(items: Vec<MediaItem>) -> Self {
        let mut playlist = Self::default();
        playlist.extend(items, 0);
        playlist
    }

    /// Items in their natural (gallery) order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.position.map(|p| &self.items[self.order[p]])
    }

    /// URLs are unique within a playlist; ids from the store are not.
    pub fn current_url(&self) -> Option<&str> {
        self.current().map(|item| item.url.as_str())
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn prefs(&self) -> PlaybackPrefs {
        PlaybackPrefs {
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
    }

    /// Makes the item at `url` current. Returns false if it isn't listed.
    pub fn select(&mut self, url: &str) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.url == url) else {
            return false;
        };
        self.position = self.order.iter().position(|&i| i == idx);
        self.position.is_some()
    }

    pub fn next(&mut self) -> Option<&MediaItem> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        self.position = match self.position {
            None => Some(0),
            Some(p) if p + 1 < len => Some(p + 1),
            Some(_) if self.repeat == RepeatMode::All => Some(0),
            Some(_) => return None,
        };
        self.current()
    }

    pub fn prev(&mut self) -> Option<&MediaItem> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        self.position = match self.position {
            None => Some(0),
            Some(p) if p > 0 => Some(p - 1),
            Some(_) if self.repeat == RepeatMode::All => Some(len - 1),
            Some(_) => Some(0),
        };
        self.current()
    }

    /// What to play once the current item finishes.
    pub fn on_ended(&mut self) -> Option<&MediaItem> {
        if self.repeat == RepeatMode::One && self.position.is_some() {
            return self.current();
        }
        self.next()
    }

    /// Shuffling keeps the current item at the head of the new order.
    pub fn set_shuffle(&mut self, on: bool, seed: u64) {
        let current = self.position.map(|p| self.order[p]);
        self.shuffle = on;
        if on {
            let mut rest: Vec<usize> = (0..self.items.len())
                .filter(|&i| Some(i) != current)
                .collect();
            shuffle_indices(&mut rest, seed);
            self.order = current.into_iter().chain(rest).collect();
            self.position = current.map(|_| 0);
        } else {
            self.order = (0..self.items.len()).collect();
            self.position = current;
        }
    }

    /// Appends newly discovered items, skipping unplayable URLs and ones
    /// already listed. Returns how many were added.
    pub fn extend(&mut self, items: Vec<MediaItem>, seed: u64) -> usize {
        let start = self.items.len();
        for item in items {
            if !is_renderable_url(&item.url) {
                log::debug!("Skipping playlist item {} without a usable URL", item.id);
                continue;
            }
            if self.items.iter().any(|i| i.url == item.url) {
                continue;
            }
            self.items.push(item);
        }
        let mut added: Vec<usize> = (start..self.items.len()).collect();
        if self.shuffle {
            shuffle_indices(&mut added, seed);
        }
        let count = added.len();
        self.order.extend(added);
        count
    }

    /// Hides an item that failed to load. If it was playing, the item after
    /// it takes over.
    pub fn remove_broken(&mut self, url: &str) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.url == url) else {
            return false;
        };
        let Some(order_pos) = self.order.iter().position(|&i| i == idx) else {
            return false;
        };
        self.items.remove(idx);
        self.order.remove(order_pos);
        for i in self.order.iter_mut() {
            if *i > idx {
                *i -= 1;
            }
        }
        let len = self.order.len();
        self.position = match self.position {
            _ if len == 0 => None,
            Some(p) if p == order_pos && p < len => Some(p),
            Some(p) if p == order_pos && self.repeat == RepeatMode::All => Some(0),
            Some(p) if p == order_pos => None,
            Some(p) if p > order_pos => Some(p - 1),
            other => other,
        };
        log::info!("Removed unplayable item {url}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaKind;

    fn url(name: &str) -> String {
        format!("https://cdn.example.com/{name}.mp4")
    }

    fn video(id: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            kind: MediaKind::Video,
            url: url(id),
            title: None,
            caption: String::new(),
        }
    }

    fn playlist(ids: &[&str]) -> Playlist {
        Playlist::new(ids.iter().map(|id| video(id)).collect())
    }

    fn current_id(p: &Playlist) -> Option<&str> {
        p.current().map(|i| i.id.as_str())
    }

    fn ids(p: &Playlist) -> Vec<String> {
        p.items().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_new_filters_and_dedupes() {
        let mut bad = video("bad");
        bad.url = String::new();
        let dup = video("a");
        let p = Playlist::new(vec![video("a"), bad, dup, video("b")]);
        assert_eq!(ids(&p), vec!["a", "b"]);
        assert!(p.current().is_none());
    }

    #[test]
    fn test_next_without_repeat_stops_at_end() {
        let mut p = playlist(&["a", "b"]);
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("a"));
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("b"));
        assert!(p.next().is_none());
        assert_eq!(current_id(&p), Some("b"));
    }

    #[test]
    fn test_repeat_all_wraps() {
        let mut p = playlist(&["a", "b", "c"]);
        p.set_repeat(RepeatMode::All);
        p.select(&url("c"));
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("a"));
        assert_eq!(p.prev().map(|i| i.id.as_str()), Some("c"));
    }

    #[test]
    fn test_prev_at_start_without_repeat() {
        let mut p = playlist(&["a", "b"]);
        p.select(&url("a"));
        assert_eq!(p.prev().map(|i| i.id.as_str()), Some("a"));
    }

    #[test]
    fn test_repeat_one_replays_on_end() {
        let mut p = playlist(&["a", "b"]);
        p.set_repeat(RepeatMode::One);
        p.select(&url("a"));
        assert_eq!(p.on_ended().map(|i| i.id.as_str()), Some("a"));
        // a manual skip still advances
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    fn test_repeat_cycle() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn test_shuffle_keeps_current_first() {
        let mut p = playlist(&["a", "b", "c", "d", "e", "f"]);
        p.select(&url("d"));
        p.set_shuffle(true, 42);
        assert_eq!(current_id(&p), Some("d"));

        let mut played = vec![current_id(&p).unwrap().to_string()];
        while let Some(item) = p.next() {
            played.push(item.id.clone());
        }
        assert_eq!(played.len(), 6);
        played.sort();
        assert_eq!(played, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_shuffle_off_restores_order() {
        let mut p = playlist(&["a", "b", "c", "d"]);
        p.select(&url("c"));
        p.set_shuffle(true, 7);
        p.set_shuffle(false, 7);
        assert_eq!(current_id(&p), Some("c"));
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("d"));
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let mut p = playlist(&["a", "b", "c", "d", "e"]);
            p.set_shuffle(true, seed);
            let mut out = vec![];
            while let Some(item) = p.next() {
                out.push(item.id.clone());
            }
            out
        };
        assert_eq!(order(3), order(3));
    }

    #[test]
    fn test_extend_keeps_current() {
        let mut p = playlist(&["a", "b"]);
        p.select(&url("b"));
        let added = p.extend(vec![video("b"), video("c")], 1);
        assert_eq!(added, 1);
        assert_eq!(current_id(&p), Some("b"));
        assert_eq!(p.next().map(|i| i.id.as_str()), Some("c"));
    }

    #[test]
    fn test_remove_broken_current_moves_on() {
        let mut p = playlist(&["a", "b", "c"]);
        p.select(&url("b"));
        assert!(p.remove_broken(&url("b")));
        assert_eq!(current_id(&p), Some("c"));
        assert_eq!(ids(&p), vec!["a", "c"]);
        assert!(!p.remove_broken(&url("b")));
    }

    #[test]
    fn test_remove_broken_last_item() {
        let mut p = playlist(&["a", "b"]);
        p.select(&url("b"));
        p.remove_broken(&url("b"));
        assert!(p.current().is_none());

        let mut p = playlist(&["a", "b"]);
        p.set_repeat(RepeatMode::All);
        p.select(&url("b"));
        p.remove_broken(&url("b"));
        assert_eq!(current_id(&p), Some("a"));
    }

    #[test]
    fn test_remove_broken_before_current() {
        let mut p = playlist(&["a", "b", "c"]);
        p.select(&url("c"));
        p.remove_broken(&url("a"));
        assert_eq!(current_id(&p), Some("c"));

        p.remove_broken(&url("c"));
        p.remove_broken(&url("b"));
        assert!(p.is_empty());
        assert!(p.next().is_none());
    }

    #[test]
    fn test_prefs_reflect_settings() {
        let mut p = Playlist::new(vec![video("a"), video("b")]);
        assert_eq!(p.prefs(), PlaybackPrefs::default());
        p.set_shuffle(true, 9);
        p.set_repeat(RepeatMode::All);
        assert_eq!(
            p.prefs(),
            PlaybackPrefs {
                shuffle: true,
                repeat: RepeatMode::All,
            }
        );
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_shared_ids_are_told_apart_by_url() {
        // two nested groups both numbering from 1
        let mut healthy = video("1");
        healthy.url = url("healthy");
        let mut broken = video("1");
        broken.url = url("broken");
        let mut p = Playlist::new(vec![healthy, broken]);
        assert_eq!(p.len(), 2);

        assert!(p.select(&url("broken")));
        assert_eq!(p.current_url(), Some(url("broken").as_str()));

        assert!(p.remove_broken(&url("broken")));
        let remaining = p.items().iter().map(|i| i.url.clone()).collect::<Vec<_>>();
        assert_eq!(remaining, vec![url("healthy")]);
    }
}
