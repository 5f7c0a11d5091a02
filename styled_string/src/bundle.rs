// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Debug;
use std::sync::Arc;

use hashbrown::HashMap;
use tracing::trace;

use crate::format::{format_positional, FormatArg};
use crate::locale::normalize_identifier;
use crate::{Locale, LocaleBundleCache};

/// The table used when a resource does not name one.
pub const DEFAULT_TABLE: &str = "Localizable";

/// A source of localized strings, organized as a root bundle with per-locale sub-bundles.
pub trait Bundle: Debug + Send + Sync {
    /// A stable identity for this bundle, used as part of cache keys.
    fn identifier(&self) -> &str;

    /// Returns the sub-bundle localized for exactly `identifier`, if there is one.
    ///
    /// Matching is case-insensitive. No fallback is performed here; see
    /// [`resolve_localized_bundle`].
    fn localization(&self, identifier: &str) -> Option<Arc<dyn Bundle>>;

    /// Looks up `key` in `table` ([`DEFAULT_TABLE`] when `None`).
    fn localized_string(&self, key: &str, table: Option<&str>) -> Option<String>;
}

/// Finds the most specific localized sub-bundle of `root` for a locale identifier.
///
/// Tries, in order: the identifier itself, the identifier with `_` and `-` swapped, and the
/// primary language subtag. Only the first subtag is used for the last step, so `zh-Hans-CN`
/// falls back to `zh` and never to `zh-Hans`.
pub fn resolve_localized_bundle(identifier: &str, root: &dyn Bundle) -> Option<Arc<dyn Bundle>> {
    if let Some(bundle) = root.localization(identifier) {
        return Some(bundle);
    }
    let swapped: String = identifier
        .chars()
        .map(|c| match c {
            '_' => '-',
            '-' => '_',
            c => c,
        })
        .collect();
    if swapped != identifier {
        if let Some(bundle) = root.localization(&swapped) {
            return Some(bundle);
        }
    }
    let hyphenated = identifier.replace('_', "-");
    let language = hyphenated.split('-').next().unwrap_or_default();
    if language.is_empty() || language == identifier {
        return None;
    }
    root.localization(language)
}

type Tables = HashMap<String, HashMap<String, String>>;

/// An in-memory [`Bundle`].
///
/// A catalog holds development strings at its root and any number of per-locale sub-catalogs.
/// Build one with [`CatalogBuilder`].
#[derive(Debug)]
pub struct Catalog {
    identifier: Arc<str>,
    tables: Tables,
    /// Keyed by uppercased locale identifier.
    localizations: HashMap<String, Arc<Catalog>>,
}

impl Catalog {
    /// Starts building a catalog with the given identity.
    pub fn builder(identifier: impl AsRef<str>) -> CatalogBuilder {
        CatalogBuilder::new(identifier)
    }

    /// Locale identifiers this catalog has sub-catalogs for, uppercased.
    pub fn localizations(&self) -> impl Iterator<Item = &str> {
        self.localizations.keys().map(String::as_str)
    }
}

impl Bundle for Catalog {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn localization(&self, identifier: &str) -> Option<Arc<dyn Bundle>> {
        let catalog = self.localizations.get(&normalize_identifier(identifier))?;
        Some(Arc::clone(catalog) as Arc<dyn Bundle>)
    }

    fn localized_string(&self, key: &str, table: Option<&str>) -> Option<String> {
        self.tables
            .get(table.unwrap_or(DEFAULT_TABLE))?
            .get(key)
            .cloned()
    }
}

/// A set of string tables, used for the root and for each localization of a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub struct Strings {
    tables: Tables,
}

impl Strings {
    /// Creates an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key = value` to the default table.
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.table_string(DEFAULT_TABLE, key, value)
    }

    /// Adds `key = value` to `table`.
    pub fn table_string(
        mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.tables
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }
}

/// Builder for [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    identifier: Arc<str>,
    root: Strings,
    localizations: Vec<(String, Strings)>,
}

impl CatalogBuilder {
    /// Creates a builder for a catalog with the given identity.
    pub fn new(identifier: impl AsRef<str>) -> Self {
        Self {
            identifier: Arc::from(identifier.as_ref()),
            root: Strings::new(),
            localizations: Vec::new(),
        }
    }

    /// Sets the development strings used when no localization matches.
    pub fn root(mut self, strings: Strings) -> Self {
        self.root = strings;
        self
    }

    /// Adds (or replaces) the localization for `locale`.
    pub fn localization(mut self, locale: impl AsRef<str>, strings: Strings) -> Self {
        let locale = locale.as_ref().to_owned();
        self.localizations
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&locale));
        self.localizations.push((locale, strings));
        self
    }

    /// Builds the catalog.
    pub fn build(self) -> Arc<Catalog> {
        let localizations = self
            .localizations
            .into_iter()
            .map(|(locale, strings)| {
                let catalog = Catalog {
                    identifier: Arc::from(format!("{}/{locale}", self.identifier)),
                    tables: strings.tables,
                    localizations: HashMap::new(),
                };
                (normalize_identifier(&locale), Arc::new(catalog))
            })
            .collect();
        Arc::new(Catalog {
            identifier: self.identifier,
            tables: self.root.tables,
            localizations,
        })
    }
}

/// A reference to a localizable string resource plus positional format arguments.
///
/// Nothing is looked up until [`resolve`](Self::resolve) is called with a locale.
#[derive(Clone, Debug)]
pub struct LocalizedResource {
    key: Arc<str>,
    table: Option<Arc<str>>,
    bundle: Arc<dyn Bundle>,
    default_value: Option<Arc<str>>,
    args: Vec<FormatArg>,
}

impl LocalizedResource {
    /// Creates a reference to `key` in `bundle`'s default table.
    pub fn new(key: impl AsRef<str>, bundle: Arc<dyn Bundle>) -> Self {
        Self {
            key: Arc::from(key.as_ref()),
            table: None,
            bundle,
            default_value: None,
            args: Vec::new(),
        }
    }

    /// Looks the key up in `table` instead of [`DEFAULT_TABLE`].
    pub fn with_table(mut self, table: impl AsRef<str>) -> Self {
        self.table = Some(Arc::from(table.as_ref()));
        self
    }

    /// Text used when no bundle has the key, instead of the key itself.
    pub fn with_default_value(mut self, value: impl AsRef<str>) -> Self {
        self.default_value = Some(Arc::from(value.as_ref()));
        self
    }

    /// Appends a positional format argument.
    pub fn arg(mut self, arg: impl Into<FormatArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The resource key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The table name, if one was set.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The root bundle.
    pub fn bundle(&self) -> &Arc<dyn Bundle> {
        &self.bundle
    }

    /// The positional format arguments.
    pub fn args(&self) -> &[FormatArg] {
        &self.args
    }

    /// Resolves the text for `locale` through the shared [`LocaleBundleCache`].
    pub fn resolve(&self, locale: &Locale) -> String {
        self.resolve_with(LocaleBundleCache::shared(), locale)
    }

    /// Resolves the text for `locale` through `cache`.
    ///
    /// The localized sub-bundle is consulted first, then the root bundle, then the default
    /// value, then the key itself. Arguments are substituted into whichever template was
    /// found.
    pub fn resolve_with(&self, cache: &LocaleBundleCache, locale: &Locale) -> String {
        let localized = cache.resolve(locale.identifier(), &self.bundle);
        let table = self.table.as_deref();
        let template = localized
            .as_ref()
            .and_then(|bundle| bundle.localized_string(&self.key, table))
            .or_else(|| self.bundle.localized_string(&self.key, table))
            .unwrap_or_else(|| {
                trace!(key = &*self.key, %locale, "missing localized string");
                self.default_value.as_deref().unwrap_or(&*self.key).to_owned()
            });
        if self.args.is_empty() {
            template
        } else {
            format_positional(&template, &self.args)
        }
    }
}

impl PartialEq for LocalizedResource {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.table == other.table
            && Arc::ptr_eq(&self.bundle, &other.bundle)
            && self.default_value == other.default_value
            && self.args == other.args
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{resolve_localized_bundle, Bundle, Catalog, LocalizedResource, Strings};
    use crate::{Locale, LocaleBundleCache};

    fn catalog() -> Arc<Catalog> {
        Catalog::builder("app")
            .root(Strings::new().string("greeting", "Hello"))
            .localization("fr", Strings::new().string("greeting", "Bonjour"))
            .localization("pt_BR", Strings::new().string("greeting", "Olá"))
            .localization(
                "zh-Hant",
                Strings::new().table_string("Errors", "greeting", "你好"),
            )
            .build()
    }

    fn resolved_id(identifier: &str, root: &Catalog) -> Option<String> {
        resolve_localized_bundle(identifier, root).map(|b| b.identifier().to_owned())
    }

    #[test]
    fn fallback_chain() {
        let root = catalog();
        assert_eq!(resolved_id("FR", &root).as_deref(), Some("app/fr"));
        // `-` and `_` are interchangeable.
        assert_eq!(resolved_id("pt-BR", &root).as_deref(), Some("app/pt_BR"));
        assert_eq!(resolved_id("zh_Hant", &root).as_deref(), Some("app/zh-Hant"));
        // Only the first subtag is tried as a generic fallback.
        assert_eq!(resolved_id("fr-CA", &root).as_deref(), Some("app/fr"));
        assert_eq!(resolved_id("fr_CA", &root).as_deref(), Some("app/fr"));
        assert_eq!(resolved_id("zh-Hant-TW", &root), None);
        assert_eq!(resolved_id("de", &root), None);
    }

    #[test]
    fn localizations_are_keyed_like_locales() {
        let root = Catalog::builder("app")
            .localization("fr", Strings::new())
            .localization("pt_BR", Strings::new())
            .localization("zh-Hant", Strings::new())
            .localization("FR", Strings::new().string("greeting", "Salut"))
            .build();
        let mut keys: Vec<&str> = root.localizations().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["FR", "PT_BR", "ZH-HANT"]);
        assert!(keys.contains(&Locale::new("pt_BR").normalized_key().as_str()));

        // Re-adding a locale in another case replaces it.
        let fr = root.localization("fr").unwrap();
        assert_eq!(fr.identifier(), "app/FR");
        assert_eq!(fr.localized_string("greeting", None).as_deref(), Some("Salut"));
    }

    #[test]
    fn resource_falls_back_to_root_then_key() {
        let cache = LocaleBundleCache::new();
        let bundle: Arc<dyn Bundle> = catalog();
        let greeting = LocalizedResource::new("greeting", bundle.clone());
        assert_eq!(greeting.resolve_with(&cache, &Locale::new("fr")), "Bonjour");
        assert_eq!(greeting.resolve_with(&cache, &Locale::new("de")), "Hello");

        let missing = LocalizedResource::new("farewell", bundle.clone());
        assert_eq!(missing.resolve_with(&cache, &Locale::new("fr")), "farewell");
        let missing = missing.with_default_value("Goodbye");
        assert_eq!(missing.resolve_with(&cache, &Locale::new("fr")), "Goodbye");
    }

    #[test]
    fn resource_uses_named_table() {
        let cache = LocaleBundleCache::new();
        let greeting = LocalizedResource::new("greeting", catalog()).with_table("Errors");
        assert_eq!(greeting.resolve_with(&cache, &Locale::new("zh-Hant")), "你好");
        assert_eq!(greeting.resolve_with(&cache, &Locale::new("fr")), "greeting");
    }

    #[test]
    fn resource_formats_arguments() {
        let cache = LocaleBundleCache::new();
        let bundle = Catalog::builder("counts")
            .root(Strings::new().string("inbox", "%@ has %d messages"))
            .localization("fr", Strings::new().string("inbox", "%2$d messages pour %1$@"))
            .build();
        let inbox = LocalizedResource::new("inbox", bundle).arg("Ada").arg(3);
        assert_eq!(inbox.resolve_with(&cache, &Locale::new("en")), "Ada has 3 messages");
        assert_eq!(inbox.resolve_with(&cache, &Locale::new("fr")), "3 messages pour Ada");
    }
}
