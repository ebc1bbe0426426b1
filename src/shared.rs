//! Shared client
//!
//! `Client` has no internal locking. This wrapper serializes every operation
//! behind one mutex so several threads can drive the same connection.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::client::Client;

/// Cloneable, lock-protected handle to one [`Client`]
#[derive(Debug, Clone)]
pub struct SharedClient {
    inner: Arc<Mutex<Client>>,
}

impl SharedClient {
    pub fn new(client: Client) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// Run `f` with exclusive access to the client
    ///
    /// The lock is held for the whole closure, so a multi-step sequence
    /// (set, then refresh) is not interleaved with other threads.
    pub fn with<R>(&self, f: impl FnOnce(&mut Client) -> R) -> R {
        let mut client = self.inner.lock();
        f(&mut client)
    }

    /// Lock the client directly
    pub fn lock(&self) -> MutexGuard<'_, Client> {
        self.inner.lock()
    }
}
