// SPDX-License-Identifier: MPL-2.0
//! Registry of opaque model handles.
//!
//! A [`ModelStore`] plays the role of an object-URL table: registering a file
//! yields a [`ModelHandle`] whose [`ModelReference`] stays resolvable for as
//! long as the handle is alive. The handle has a single owner and revokes its
//! entry exactly once, either through [`ModelHandle::release`] or on drop.

use super::content_kind::ContentKind;
use super::selected_file::{FileSource, SelectedFile};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Scheme prefix of every reference.
const REFERENCE_SCHEME: &str = "model://";

/// Opaque, displayable identifier of a registered model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelReference(String);

impl ModelReference {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
struct Entry {
    kind: ContentKind,
    source: FileSource,
}

#[derive(Debug, Default)]
struct Registry {
    live: HashMap<ModelReference, Entry>,
    next_sequence: u64,
    released: u64,
}

/// Per-viewer table of live model references.
///
/// Cloning the store shares the same table.
#[derive(Debug, Clone)]
pub struct ModelStore {
    session: u64,
    registry: Arc<Mutex<Registry>>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore {
    /// Creates an empty store with a process-unique session number.
    #[must_use]
    pub fn new() -> Self {
        static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);
        Self {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Registers an accepted file and returns the handle that owns it.
    #[must_use]
    pub fn register(&self, file: SelectedFile, kind: ContentKind) -> ModelHandle {
        let mut registry = self.lock();
        registry.next_sequence += 1;
        let reference = ModelReference(format!(
            "{REFERENCE_SCHEME}{}/{}/{}",
            self.session,
            registry.next_sequence,
            file.name()
        ));
        let name = file.name().to_string();
        registry.live.insert(
            reference.clone(),
            Entry {
                kind,
                source: file.source().clone(),
            },
        );
        drop(registry);

        ModelHandle {
            reference,
            name,
            kind,
            store: self.clone(),
        }
    }

    /// Returns true while the handle behind `reference` has not been released.
    #[must_use]
    pub fn is_live(&self, reference: &ModelReference) -> bool {
        self.lock().live.contains_key(reference)
    }

    /// Number of references currently live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }

    /// Number of references released since the store was created.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.lock().released
    }

    /// Looks up the bytes behind a live reference.
    #[must_use]
    pub fn resolve(&self, reference: &ModelReference) -> Option<(ContentKind, FileSource)> {
        self.lock()
            .live
            .get(reference)
            .map(|entry| (entry.kind, entry.source.clone()))
    }

    fn revoke(&self, reference: &ModelReference) -> bool {
        let mut registry = self.lock();
        let removed = registry.live.remove(reference).is_some();
        if removed {
            registry.released += 1;
        }
        removed
    }

    // A panic while holding the lock leaves the table itself consistent.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owned handle to a registered model.
///
/// Not `Clone`: exactly one owner releases the reference.
#[derive(Debug)]
pub struct ModelHandle {
    reference: ModelReference,
    name: String,
    kind: ContentKind,
    store: ModelStore,
}

impl ModelHandle {
    #[must_use]
    pub fn reference(&self) -> &ModelReference {
        &self.reference
    }

    /// File name of the uploaded model.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content_kind(&self) -> ContentKind {
        self.kind
    }

    /// Releases the reference now and returns it.
    pub fn release(self) -> ModelReference {
        self.reference.clone()
        // `self` drops here and revokes the entry.
    }
}

impl Drop for ModelHandle {
    fn drop(&mut self) {
        self.store.revoke(&self.reference);
    }
}
