use log::debug;
use web_sys::HtmlElement;

/// Something whose scrolling can be switched off, normally the page body.
pub trait ScrollTarget {
    fn set_overflow(&self, value: &str);
}

impl ScrollTarget for HtmlElement {
    fn set_overflow(&self, value: &str) {
        if let Err(e) = self.style().set_property("overflow", value) {
            log::warn!("Failed to set overflow to {}: {:?}", value, e);
        }
    }
}

/// Keeps the background page from scrolling while held.
pub struct ScrollLock<T: ScrollTarget = HtmlElement> {
    target: T,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_overflow("hidden");
        debug!("Page scroll locked");
        Self { target }
    }
}

impl ScrollLock<HtmlElement> {
    /// Locks the document body, if there is one.
    pub fn body() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self::acquire(body))
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow("unset");
        debug!("Page scroll released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollTarget for FakeBody {
        fn set_overflow(&self, value: &str) {
            self.overflow.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn locks_on_acquire_and_unlocks_on_drop() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(*body.overflow.borrow(), vec!["hidden"]);
        drop(lock);
        assert_eq!(*body.overflow.borrow(), vec!["hidden", "unset"]);
    }

    #[test]
    fn released_when_owner_is_replaced() {
        let body = FakeBody::default();
        let mut slot = Some(ScrollLock::acquire(body.clone()));
        slot.take();
        assert_eq!(body.overflow.borrow().last().map(String::as_str), Some("unset"));
    }
}
