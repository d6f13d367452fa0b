//! Lazy, thread-safe single-instance construction.
//!
//! [`LazySingleton`] holds at most one `T`, constructed on first demand and
//! shared by every caller as an [`Arc`] handle. The check-and-create sequence
//! runs entirely under one mutex, so concurrent first calls can never both
//! observe an empty slot and race to construct; the mutex release/acquire
//! also orders construction before any later read of the slot.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

/// A slot holding at most one shared instance of `T`.
///
/// The slot starts empty and is populated by the first successful
/// initializer; it is never cleared afterwards. `new` is `const`, so a
/// `LazySingleton` can live in a `static` and the instance is built on first
/// access rather than at program start.
pub struct LazySingleton<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> LazySingleton<T> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns the shared instance, running `init` to construct it if this is
    /// the first call.
    ///
    /// Every caller gets a handle to the same instance; `Arc::ptr_eq` on two
    /// returned handles is always true.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Fallible version of [`get_or_init`](Self::get_or_init).
    ///
    /// If `init` fails, the error is returned to this caller and the slot
    /// stays empty, so a later call gets another chance to construct.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.slot.lock().unwrap();
        if let Some(existing) = slot.as_ref() {
            return Ok(Arc::clone(existing));
        }
        let instance = Arc::new(init()?);
        *slot = Some(Arc::clone(&instance));
        Ok(instance)
    }

    /// Returns the instance if one has been constructed, without triggering
    /// construction.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.lock().unwrap().as_ref().map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}
