// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{Arc, OnceLock, RwLock};

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::bundle::{resolve_localized_bundle, Bundle};
use crate::locale::normalize_identifier;

const POISONED: &str = "locale bundle cache lock poisoned";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    /// Uppercased locale identifier.
    locale: String,
    bundle: Arc<str>,
}

/// Caches which localized sub-bundle a (locale, bundle) pair resolves to.
///
/// Locale identifiers are matched case-insensitively. A resolution that found nothing is cached
/// too, so the lookup collaborator runs at most once per key (modulo races, see below). Entries
/// are never evicted or invalidated.
///
/// Lookups take a shared lock; inserts take an exclusive lock. The resolution itself runs
/// outside the lock, so two threads missing on the same key may both resolve it; the second
/// insert overwrites the first with an equivalent value.
#[derive(Debug, Default)]
pub struct LocaleBundleCache {
    entries: RwLock<HashMap<CacheKey, Option<Arc<dyn Bundle>>>>,
}

impl LocaleBundleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`LocalizedResource::resolve`].
    ///
    /// [`LocalizedResource::resolve`]: crate::LocalizedResource::resolve
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<LocaleBundleCache> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    /// Returns the localized sub-bundle of `bundle` for `identifier`, using
    /// [`resolve_localized_bundle`] on a miss.
    pub fn resolve(&self, identifier: &str, bundle: &Arc<dyn Bundle>) -> Option<Arc<dyn Bundle>> {
        self.resolve_with(identifier, bundle, resolve_localized_bundle)
    }

    /// Like [`resolve`](Self::resolve), with an explicit lookup for misses.
    ///
    /// `lookup` receives the uppercased identifier and the root bundle.
    pub fn resolve_with<F>(
        &self,
        identifier: &str,
        bundle: &Arc<dyn Bundle>,
        lookup: F,
    ) -> Option<Arc<dyn Bundle>>
    where
        F: FnOnce(&str, &dyn Bundle) -> Option<Arc<dyn Bundle>>,
    {
        let key = CacheKey {
            locale: normalize_identifier(identifier),
            bundle: Arc::from(bundle.identifier()),
        };

        let cached = self.entries.read().expect(POISONED).get(&key).cloned();
        if let Some(entry) = cached {
            trace!(locale = %key.locale, bundle = %key.bundle, "locale bundle cache hit");
            return entry;
        }

        let resolved = lookup(&key.locale, bundle.as_ref());
        debug!(
            locale = %key.locale,
            bundle = %key.bundle,
            found = resolved.is_some(),
            "resolved locale bundle"
        );
        self.entries
            .write()
            .expect(POISONED)
            .insert(key, resolved.clone());
        resolved
    }

    /// Returns the number of cached (locale, bundle) pairs.
    pub fn len(&self) -> usize {
        self.entries.read().expect(POISONED).len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
