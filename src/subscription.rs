//! Scoped registration of the document-wide click listener used to dismiss
//! the picker when the user clicks elsewhere.
//!
//! The listener must exist exactly while the picker is visible. Holding it in
//! an [`OutsideClickSubscription`] ties its lifetime to a value: dropping the
//! guard unregisters, so every path that hides or tears down the picker
//! releases it.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Handle returned by an [`OutsideClickSource`] for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Where the host environment reports pointer clicks.
///
/// Implementors own the actual event plumbing; methods take `&self` because
/// the source is shared between the picker and its guard.
pub trait OutsideClickSource {
    fn register(&self) -> ListenerId;
    fn unregister(&self, id: ListenerId);
}

/// Live registration; unregisters on drop.
pub struct OutsideClickSubscription<S: OutsideClickSource + ?Sized> {
    source: Rc<S>,
    id:     ListenerId,
}

impl<S: OutsideClickSource + ?Sized> OutsideClickSubscription<S> {
    pub fn acquire(source: Rc<S>) -> Self {
        let id = source.register();
        debug!(%id, "outside-click listener registered");
        Self { source, id }
    }

    pub const fn id(&self) -> ListenerId {
        self.id
    }
}

impl<S: OutsideClickSource + ?Sized> Drop for OutsideClickSubscription<S> {
    fn drop(&mut self) {
        self.source.unregister(self.id);
        debug!(id = %self.id, "outside-click listener released");
    }
}

impl<S: OutsideClickSource + ?Sized> fmt::Debug for OutsideClickSubscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClickSubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSource;

    #[test]
    fn test_acquire_registers_and_drop_releases() {
        let source = Rc::new(RecordingSource::default());
        let guard = OutsideClickSubscription::acquire(Rc::clone(&source));
        assert_eq!(source.active(), vec![guard.id()]);

        drop(guard);
        assert!(source.active().is_empty());
        assert_eq!(source.released(), 1);
    }

    #[test]
    fn test_guards_are_independent() {
        let source = Rc::new(RecordingSource::default());
        let a = OutsideClickSubscription::acquire(Rc::clone(&source));
        let b = OutsideClickSubscription::acquire(Rc::clone(&source));
        assert_ne!(a.id(), b.id());

        drop(a);
        assert_eq!(source.active(), vec![b.id()]);
    }
}
