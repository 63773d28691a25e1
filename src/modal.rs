/// Stops the page behind an overlay from scrolling.
pub trait ScrollLock {
    fn lock(&mut self);

    fn unlock(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    Content,
}

/// At most one detail overlay, open on one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalController<T> {
    open: Option<T>,
}

impl<T> Default for ModalController<T> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<T> ModalController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn item(&self) -> Option<&T> {
        self.open.as_ref()
    }

    /// Shows `item`, replacing whatever was open before.
    pub fn open(&mut self, item: T, scroll: &mut impl ScrollLock) {
        if self.open.is_none() {
            scroll.lock();
        }
        self.open = Some(item);
    }

    pub fn close(&mut self, scroll: &mut impl ScrollLock) {
        if self.open.take().is_some() {
            scroll.unlock();
        }
    }

    pub fn on_click(&mut self, target: ClickTarget, scroll: &mut impl ScrollLock) {
        if target == ClickTarget::Backdrop {
            self.close(scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Body {
        locked: bool,
        locks: usize,
        unlocks: usize,
    }

    impl ScrollLock for Body {
        fn lock(&mut self) {
            self.locked = true;
            self.locks += 1;
        }

        fn unlock(&mut self) {
            self.locked = false;
            self.unlocks += 1;
        }
    }

    #[test]
    fn opening_b_replaces_a() {
        let mut body = Body::default();
        let mut modal = ModalController::new();
        modal.open("a", &mut body);
        modal.open("b", &mut body);

        assert_eq!(modal.item(), Some(&"b"));
        assert!(body.locked);
        assert_eq!(body.locks, 1);
    }

    #[test]
    fn close_restores_scroll() {
        let mut body = Body::default();
        let mut modal = ModalController::new();
        modal.open(1, &mut body);
        modal.close(&mut body);

        assert!(!modal.is_open());
        assert!(!body.locked);

        modal.close(&mut body);
        assert_eq!(body.unlocks, 1);
    }

    #[test]
    fn backdrop_click_closes_content_click_does_not() {
        let mut body = Body::default();
        let mut modal = ModalController::new();
        modal.open('x', &mut body);

        modal.on_click(ClickTarget::Content, &mut body);
        assert!(modal.is_open());

        modal.on_click(ClickTarget::Backdrop, &mut body);
        assert!(!modal.is_open());
        assert!(!body.locked);
    }
}
