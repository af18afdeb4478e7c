//! # Synchronization Utilities
//!
//! The codec itself holds no state. The one exception is the recognition
//! cache inside [`Converter`](crate::Converter), a `Mutex<LruCache<..>>`.
//!
//! A poisoned cache mutex only means a thread panicked mid-update; the cached
//! entries are still plain copies of pure results, so the lock is recovered
//! instead of propagating the panic:
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |
//!
//! ```rust
//! use std::sync::Mutex;
//! use chroma_codec::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// Logs a warning through `log` when poison is recovered.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovered poisoned mutex");
        poisoned.into_inner()
    })
}
