// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled String composes localizable text out of styled pieces and renders it per locale.
//!
//! - [`StyledString`] is an ordered sequence of [`StyledComponent`]s. Each component carries its
//!   styles, outermost first, and one piece of [`Content`]: literal text, pre-built
//!   [`RichText`], a [`LocalizedResource`], or a function of the render [`Locale`].
//! - [`StyledString::to_plain_string`] renders to text, ignoring styles.
//! - [`StyledString::to_rich_text`] renders to [`RichText`], asking an [`AttributeProvider`]
//!   (such as a [`StyleSheet`]) what each [`TextStyle`] looks like.
//! - [`StyledString::parse_markup`] turns inline `<name>…</name>` tags into styles, after
//!   resources have been resolved for the render locale.
//!
//! Resources are looked up in a [`Bundle`]: a root bundle with per-locale sub-bundles. The
//! sub-bundle chosen for each (locale, bundle) pair is memoized in a [`LocaleBundleCache`].
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text, as in [`attributed_text`].
//!
//! ## Example
//!
//! ```
//! use styled_string::{attributes, Attribute, AttributeValue, Locale, StyleSheet, StyledString};
//!
//! let text = StyledString::literal("Read <em>carefully</em>.").parse_markup();
//! let en = Locale::new("en");
//! assert_eq!(text.to_plain_string(&en), "Read carefully.");
//!
//! let sheet = StyleSheet::new()
//!     .with_locale(en)
//!     .with_style("em", attributes([("font", "italic")]));
//! let rich = text.to_rich_text(&sheet);
//! assert_eq!(rich.as_str(), "Read carefully.");
//! assert_eq!(
//!     rich.attributes_at(5).get(&Attribute::from("font")),
//!     Some(&AttributeValue::from("italic"))
//! );
//! assert!(rich.attributes_at(0).is_empty());
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bundle;
mod cache;
mod component;
mod format;
mod locale;
mod markup;
mod render;
mod style;


pub use attributed_text;

pub use crate::bundle::{
    resolve_localized_bundle, Bundle, Catalog, CatalogBuilder, LocalizedResource, Strings,
    DEFAULT_TABLE,
};
pub use crate::cache::LocaleBundleCache;
pub use crate::component::{
    ComputeFn, Content, StyledComponent, StyledString, StyledStringBuilder,
};
pub use crate::format::{format_positional, FormatArg};
pub use crate::locale::{detect_locale, Locale};
pub use crate::render::{AttributeProvider, StyleSheet};
pub use crate::style::{
    attributes, Attribute, AttributeValue, Attributes, Rgba, RichText, TextStyle,
};
