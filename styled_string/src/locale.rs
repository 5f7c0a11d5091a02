// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// A locale identifier such as `en`, `pt_BR` or `zh-Hans-CN`.
///
/// The identifier is kept as given (after trimming); no BCP 47 canonicalization is performed.
/// Both `-` and `_` are accepted as subtag separators.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    identifier: Arc<str>,
}

impl Locale {
    /// The locale used when nothing else is configured.
    pub const FALLBACK: &'static str = "en";

    /// Creates a locale from an identifier.
    pub fn new(identifier: impl AsRef<str>) -> Self {
        Self {
            identifier: Arc::from(identifier.as_ref().trim()),
        }
    }

    /// Returns the identifier as given.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the primary language subtag, e.g. `zh` for `zh-Hans-CN`.
    pub fn language(&self) -> &str {
        self.identifier
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
    }

    /// Returns the uppercased identifier used to compare locales case-insensitively.
    pub fn normalized_key(&self) -> String {
        normalize_identifier(&self.identifier)
    }

    /// Detects the locale from `LC_ALL`, then `LANG`, falling back to [`Locale::FALLBACK`].
    pub fn from_env() -> Self {
        let lc_all = std::env::var("LC_ALL").ok();
        let lang = std::env::var("LANG").ok();
        detect_locale(lc_all.as_deref(), lang.as_deref()).unwrap_or_default()
    }

    /// The process-wide default locale.
    ///
    /// Detected from the environment on first use and fixed afterwards. Renderers use it when
    /// the caller does not name a locale.
    pub fn process_default() -> Self {
        static DEFAULT: OnceLock<Locale> = OnceLock::new();
        DEFAULT.get_or_init(Self::from_env).clone()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(Self::FALLBACK)
    }
}

impl From<&str> for Locale {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for Locale {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locale").field(&self.identifier()).finish()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Case-folds a locale identifier for comparison and lookup.
pub(crate) fn normalize_identifier(identifier: &str) -> String {
    identifier.to_ascii_uppercase()
}

/// Picks a locale from POSIX locale variables.
///
/// `lc_all` takes precedence over `lang`. Encoding (`.UTF-8`) and modifier (`@euro`) suffixes
/// are stripped; empty values and the `C`/`POSIX` locales are skipped.
pub fn detect_locale(lc_all: Option<&str>, lang: Option<&str>) -> Option<Locale> {
    [lc_all, lang].into_iter().flatten().find_map(parse_posix_locale)
}

fn parse_posix_locale(value: &str) -> Option<Locale> {
    let value = value.trim();
    let end = value.find(['.', '@']).unwrap_or(value.len());
    let identifier = &value[..end];
    if identifier.is_empty() || identifier == "C" || identifier == "POSIX" {
        return None;
    }
    Some(Locale::new(identifier))
}

#[cfg(test)]
mod tests {
    use super::{detect_locale, Locale};

    #[test]
    fn language_is_first_subtag() {
        assert_eq!(Locale::new("zh-Hans-CN").language(), "zh");
        assert_eq!(Locale::new("pt_BR").language(), "pt");
        assert_eq!(Locale::new("fr").language(), "fr");
    }

    #[test]
    fn normalized_key_is_uppercase() {
        assert_eq!(Locale::new("en-us").normalized_key(), "EN-US");
        assert_eq!(Locale::new(" de_DE ").identifier(), "de_DE");
    }

    #[test]
    fn detects_posix_locale() {
        assert_eq!(
            detect_locale(Some("fr_FR.UTF-8"), Some("en_US.UTF-8")),
            Some(Locale::new("fr_FR"))
        );
        assert_eq!(
            detect_locale(Some(""), Some("de_DE@euro")),
            Some(Locale::new("de_DE"))
        );
        assert_eq!(detect_locale(Some("C"), Some("POSIX")), None);
        assert_eq!(detect_locale(None, None), None);
    }
}
