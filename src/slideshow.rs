pub const AUTOPLAY_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub position: SlidePosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    /// Called on every autoplay interval.
    pub fn tick(&mut self) {
        if self.autoplay && self.len > 1 {
            self.next();
        }
    }

    /// The photos on stage: the current one centered between its neighbours.
    pub fn visible(&self) -> Vec<Slide> {
        let slide = |index, position| Slide { index, position };
        match self.len {
            0 => vec![],
            1 => vec![slide(0, SlidePosition::Center)],
            2 => vec![
                slide(self.current, SlidePosition::Center),
                slide(1 - self.current, SlidePosition::Right),
            ],
            len => vec![
                slide((self.current + len - 1) % len, SlidePosition::Left),
                slide(self.current, SlidePosition::Center),
                slide((self.current + 1) % len, SlidePosition::Right),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound() {
        let mut s = Slideshow::new(3);
        s.prev();
        assert_eq!(s.current(), 2);
        s.next();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_empty_slideshow() {
        let mut s = Slideshow::new(0);
        s.next();
        s.prev();
        s.tick();
        assert_eq!(s.current(), 0);
        assert!(s.visible().is_empty());
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut s = Slideshow::new(4);
        s.go_to(2);
        assert_eq!(s.current(), 2);
        s.go_to(10);
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn test_tick_respects_autoplay() {
        let mut s = Slideshow::new(3);
        s.tick();
        assert_eq!(s.current(), 1);
        s.toggle_autoplay();
        s.tick();
        assert_eq!(s.current(), 1);

        let mut single = Slideshow::new(1);
        single.tick();
        assert_eq!(single.current(), 0);
    }

    #[test]
    fn test_visible_slides() {
        let mut s = Slideshow::new(5);
        let indices: Vec<_> = s.visible().iter().map(|sl| sl.index).collect();
        assert_eq!(indices, vec![4, 0, 1]);
        s.go_to(4);
        let v = s.visible();
        assert_eq!(v[0], Slide { index: 3, position: SlidePosition::Left });
        assert_eq!(v[1], Slide { index: 4, position: SlidePosition::Center });
        assert_eq!(v[2], Slide { index: 0, position: SlidePosition::Right });

        let mut two = Slideshow::new(2);
        two.next();
        assert_eq!(
            two.visible(),
            vec![
                Slide { index: 1, position: SlidePosition::Center },
                Slide { index: 0, position: SlidePosition::Right },
            ]
        );
    }
}
