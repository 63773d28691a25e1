use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};

/// Scroll offset past which the header gets its solid background.
pub const SCROLLED_OFFSET: f64 = 10.0;
pub const ROLE_ROTATION: Duration = Duration::from_millis(3000);

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking a link closes the menu.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}

/// Index into the hero's list of roles, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatingText {
    index: usize,
    len: usize,
}

impl RotatingText {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn current<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        items.get(self.index).map(String::as_str)
    }
}

/// Year shown in the footer. Taken from the build so the server render and the
/// hydrated page agree.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> i32 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.year())
        .unwrap_or_else(|e| {
            log::warn!("bad build timestamp {timestamp:?}: {e}");
            Utc::now().year()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.navigate();
        assert!(!menu.is_open());
        menu.navigate();
        assert!(!menu.is_open());
    }

    #[test]
    fn roles_wrap_around() {
        let roles = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut text = RotatingText::new(roles.len());
        assert_eq!(text.current(&roles), Some("a"));
        text.advance();
        text.advance();
        assert_eq!(text.current(&roles), Some("c"));
        assert_eq!(text.advance(), 0);
        assert_eq!(text.current(&roles), Some("a"));
    }

    #[test]
    fn empty_roles_do_not_panic() {
        let mut text = RotatingText::new(0);
        assert_eq!(text.advance(), 0);
        assert_eq!(text.current(&[]), None);
    }

    #[test]
    fn year_from_timestamp() {
        assert_eq!(year_of("2024-03-01T12:00:00+00:00"), 2024);
        assert!(copyright_year() >= 2024);
        assert!(year_of("garbage") >= 2024);
    }
}
