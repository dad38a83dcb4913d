use core::cell::RefCell;

use critical_section::Mutex;

/// A value shared between thread mode and interrupt handlers.
///
/// Every access runs inside a critical section, which is what serializes
/// drawing against a publish running in an interrupt.
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Shared<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store `value`, returning whatever was installed before.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(value))
    }

    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Run `f` on the value with interrupts masked. Returns `None` if
    /// nothing is installed yet.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_installed() {
        let shared: Shared<u32> = Shared::new();
        assert_eq!(shared.with(|value| *value), None);
        assert_eq!(shared.install(7), None);
        assert_eq!(shared.with(|value| *value), Some(7));
    }

    #[test]
    fn with_mutates_in_place() {
        static COUNTER: Shared<u32> = Shared::new();
        COUNTER.install(1);
        COUNTER.with(|value| *value += 41);
        assert_eq!(COUNTER.take(), Some(42));
        assert_eq!(COUNTER.take(), None);
    }

    #[test]
    fn install_replaces() {
        let shared = Shared::new();
        shared.install("first");
        assert_eq!(shared.install("second"), Some("first"));
    }
}
