//! Reference-counted page scroll lock.
//!
//! The age gate and the mobile menu can both suppress page scrolling at the
//! same time. Each holder keeps a [`ScrollLockGuard`]; the page stays locked
//! until the last guard is dropped.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

const NO_SCROLL_CLASS: &str = "no-scroll";

/// Where the lock state is projected.
pub trait LockSurface {
    fn set_locked(&self, locked: bool);
}

/// Projects the lock onto the `no-scroll` class of `<body>`.
pub struct BodyClass;

impl LockSurface for BodyClass {
    fn set_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        let result = if locked {
            classes.add_1(NO_SCROLL_CLASS)
        } else {
            classes.remove_1(NO_SCROLL_CLASS)
        };
        if result.is_err() {
            log::warn!("Failed to update body scroll class");
        }
    }
}

struct LockInner {
    holders: Cell<usize>,
    surface: Box<dyn LockSurface>,
}

#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner>,
}

impl ScrollLock {
    pub fn new(surface: impl LockSurface + 'static) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                surface: Box::new(surface),
            }),
        }
    }

    pub fn body() -> Self {
        Self::new(BodyClass)
    }

    #[must_use]
    pub fn acquire(&self, holder: &'static str) -> ScrollLockGuard {
        let count = self.inner.holders.get() + 1;
        self.inner.holders.set(count);
        debug!("Scroll lock acquired by {} ({} holders)", holder, count);
        if count == 1 {
            self.inner.surface.set_locked(true);
        }
        ScrollLockGuard {
            lock: self.clone(),
            holder,
        }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.inner.holders.get() > 0
    }

    fn release(&self, holder: &'static str) {
        let count = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(count);
        debug!("Scroll lock released by {} ({} holders)", holder, count);
        if count == 0 {
            self.inner.surface.set_locked(false);
        }
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A single hold on the scroll lock. Released on drop.
pub struct ScrollLockGuard {
    lock: ScrollLock,
    holder: &'static str,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release(self.holder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingSurface {
        writes: Rc<RefCell<Vec<bool>>>,
    }

    impl LockSurface for RecordingSurface {
        fn set_locked(&self, locked: bool) {
            self.writes.borrow_mut().push(locked);
        }
    }

    #[test]
    fn single_holder_locks_and_unlocks() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let guard = lock.acquire("menu");
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*surface.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn overlapping_holders_keep_page_locked() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let gate = lock.acquire("gate");
        let menu = lock.acquire("menu");
        drop(menu);
        assert!(lock.is_locked());
        assert_eq!(*surface.writes.borrow(), vec![true]);

        drop(gate);
        assert!(!lock.is_locked());
        assert_eq!(*surface.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn release_order_does_not_matter() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let gate = lock.acquire("gate");
        let menu = lock.acquire("menu");
        drop(gate);
        assert!(lock.is_locked());
        drop(menu);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_compare_equal() {
        let lock = ScrollLock::new(RecordingSurface::default());
        let other = ScrollLock::new(RecordingSurface::default());
        assert!(lock == lock.clone());
        assert!(lock != other);
    }
}
