//! Revocable observer lists
//!
//! [`Observers`] stores callbacks under slotmap keys. Notification snapshots
//! the live ids, then re-checks each id right before invoking it, so a callback
//! removed mid-notification (by another callback, or by itself) never runs
//! after its removal. No lock is held while a callback runs, which lets
//! callbacks register or remove observers re-entrantly.

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

new_key_type! {
    /// Handle for a registered observer
    pub struct ObserverId;
}

/// Shared observer callback
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A set of callbacks receiving values of type `T`. Delivery order is unspecified.
pub struct Observers<T> {
    slots: Mutex<SlotMap<ObserverId, Callback<T>>>,
}

impl<T: Clone> Observers<T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register a callback
    pub fn insert<F>(&self, callback: F) -> ObserverId
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.insert_shared(Arc::new(callback))
    }

    /// Register an already shared callback
    pub fn insert_shared(&self, callback: Callback<T>) -> ObserverId {
        self.lock().insert(callback)
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn remove(&self, id: ObserverId) -> bool {
        self.lock().remove(id).is_some()
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Invoke every live callback with `value`. Returns how many ran.
    pub fn notify(&self, value: T) -> usize {
        let ids: Vec<ObserverId> = self.lock().keys().collect();
        let mut delivered = 0;

        for id in ids {
            // Re-check liveness: an earlier callback may have removed this one.
            let callback = self.lock().get(id).cloned();
            if let Some(callback) = callback {
                callback(value.clone());
                delivered += 1;
            }
        }

        tracing::trace!(delivered, "observers notified");
        delivered
    }

    fn lock(&self) -> MutexGuard<'_, SlotMap<ObserverId, Callback<T>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .slots
            .lock()
            .map(|slots| slots.len())
            .unwrap_or_default();
        f.debug_struct("Observers").field("len", &len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notifies_every_live_observer() {
        let observers: Observers<u32> = Observers::new();
        let total = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let total = total.clone();
            observers.insert(move |value| {
                total.fetch_add(value as usize, Ordering::SeqCst);
            });
        }

        assert_eq!(observers.notify(2), 3);
        assert_eq!(total.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn removed_observer_is_not_called() {
        let observers: Observers<()> = Observers::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let id = observers.insert(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        assert_eq!(observers.notify(()), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn observer_removed_during_notify_does_not_run() {
        let observers: Arc<Observers<()>> = Arc::new(Observers::new());
        let second_calls = Arc::new(AtomicUsize::new(0));
        let second_id = Arc::new(Mutex::new(None::<ObserverId>));

        // The first observer removes the second before it gets its turn.
        let list = Arc::downgrade(&observers);
        let target = second_id.clone();
        observers.insert(move |_| {
            if let (Some(list), Some(id)) = (list.upgrade(), *target.lock().unwrap()) {
                list.remove(id);
            }
        });

        let counter = second_calls.clone();
        let id = observers.insert(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        *second_id.lock().unwrap() = Some(id);

        assert_eq!(observers.notify(()), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
        assert_eq!(observers.len(), 1);
    }
}
