//! URL-keyed fetch cache with stale-while-revalidate semantics.
//!
//! Every reader of a key shares one entry and at most one in-flight
//! request. Readers never block: [`FetchCache::use_fetch`] returns whatever
//! is cached right now and, when needed, starts a request on the tokio
//! runtime. When the request settles the [`SettleHook`] fires so the host
//! can redraw.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;

use crate::api::client::Fetcher;
use crate::api::error::FetchError;
use crate::api::types::ArticlesResponse;

/// Callback invoked with the key of every settled request.
pub type SettleHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Point-in-time view of one cache entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSnapshot {
    pub data: Option<Arc<ArticlesResponse>>,
    pub error: Option<FetchError>,
    pub is_validating: bool,
}

impl FetchSnapshot {
    /// Snapshot carrying only an error, for failures that happen before a
    /// request can be issued.
    pub fn failed(error: FetchError) -> Self {
        Self {
            data: None,
            error: Some(error),
            is_validating: false,
        }
    }
}

#[derive(Default)]
struct CacheEntry {
    data: Option<Arc<ArticlesResponse>>,
    error: Option<FetchError>,
    in_flight: bool,
    settled_at: Option<Instant>,
}

impl CacheEntry {
    fn snapshot(&self) -> FetchSnapshot {
        FetchSnapshot {
            data: self.data.clone(),
            error: self.error.clone(),
            is_validating: self.in_flight,
        }
    }

    fn is_fresh(&self, dedupe: Duration) -> bool {
        self.settled_at
            .map(|at| at.elapsed() < dedupe)
            .unwrap_or(false)
    }
}

struct Inner {
    entries: Mutex<HashMap<String, CacheEntry>>,
    /// Key most recently read through `use_fetch`. Switching to a different
    /// key counts as a remount and revalidates stale entries.
    active_key: Mutex<Option<String>>,
    fetcher: Arc<dyn Fetcher>,
    runtime: Handle,
    dedupe: Duration,
    on_settle: RwLock<Option<SettleHook>>,
}

#[derive(Clone)]
pub struct FetchCache {
    inner: Arc<Inner>,
}

impl FetchCache {
    pub fn new(fetcher: Arc<dyn Fetcher>, runtime: Handle, dedupe: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(HashMap::new()),
                active_key: Mutex::new(None),
                fetcher,
                runtime,
                dedupe,
                on_settle: RwLock::new(None),
            }),
        }
    }

    pub fn set_settle_hook(&self, hook: SettleHook) {
        *self.inner.on_settle.write() = Some(hook);
    }

    /// Read `key`, starting a request if the entry is missing, or if the key
    /// was just (re)mounted and its data is older than the dedupe interval.
    pub fn use_fetch(&self, key: &str) -> FetchSnapshot {
        let remounted = {
            let mut active = self.inner.active_key.lock();
            if active.as_deref() == Some(key) {
                false
            } else {
                *active = Some(key.to_string());
                true
            }
        };

        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.to_string()).or_default();
        let missing = entry.settled_at.is_none();
        let stale = remounted && !entry.is_fresh(self.inner.dedupe);
        if !entry.in_flight && (missing || stale) {
            entry.in_flight = true;
            self.spawn_request(key.to_string());
        }
        entry.snapshot()
    }

    /// Current snapshot of `key` without triggering a request.
    pub fn peek(&self, key: &str) -> FetchSnapshot {
        self.inner
            .entries
            .lock()
            .get(key)
            .map(CacheEntry::snapshot)
            .unwrap_or_default()
    }

    /// Force a new request for `key`, keeping current data until it settles.
    /// No-op while a request for the key is already in flight.
    pub fn revalidate(&self, key: &str) {
        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.to_string()).or_default();
        if entry.in_flight {
            return;
        }
        entry.in_flight = true;
        self.spawn_request(key.to_string());
    }

    fn spawn_request(&self, key: String) {
        tracing::trace!(key = %key, "cache miss, spawning request");
        let inner = Arc::clone(&self.inner);
        self.inner.runtime.spawn(async move {
            let result = inner.fetcher.fetch(&key).await;
            inner.settle(&key, result);
        });
    }
}

impl Inner {
    fn settle(&self, key: &str, result: Result<ArticlesResponse, FetchError>) {
        {
            let mut entries = self.entries.lock();
            let entry = entries.entry(key.to_string()).or_default();
            match result {
                Ok(data) => {
                    entry.data = Some(Arc::new(data));
                    entry.error = None;
                }
                // Previous data stays; readers decide whether the error wins.
                Err(err) => entry.error = Some(err),
            }
            entry.in_flight = false;
            entry.settled_at = Some(Instant::now());
        }

        let hook = self.on_settle.read().clone();
        if let Some(hook) = hook {
            hook(key);
        }
    }
}
