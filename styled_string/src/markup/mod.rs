// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline markup: `<name>` / `</name>` tags in text become styles.
//!
//! Parsing is deferred to render time, because tags may sit inside resources that only turn
//! into text once a locale is known. The steps, run for each render locale, are:
//!
//! 1. [`flatten`](flatten::flatten) every component to text fragments, resolving resources
//!    and computed content.
//! 2. [`scan`](scan::scan_tags) each fragment for tag markers.
//! 3. [`balance`](balance::balance) the markers across all fragments in document order.
//! 4. [`resplit`](split::resplit) the fragments at the markers, turning each balanced pair
//!    into a style on the text between them.
//!
//! Tags are forgiving: a closing tag with no open counterpart, an opening tag that is never
//! closed, and opening tags left open inside a closing ancestor are all dropped without
//! styling anything. The marker text of every recognized tag is removed either way.

mod balance;
mod flatten;
mod scan;
mod split;


use crate::{Locale, StyledString};

impl StyledString {
    /// Parses inline `<name>…</name>` tags in this string into styles.
    ///
    /// The result renders like `self` with the tag markers removed and each balanced tag
    /// pair's name added as the outermost style of the text it encloses. Tag names are
    /// case-sensitive and used verbatim; `<>…</>` is an anonymous group.
    ///
    /// ```
    /// use styled_string::{Locale, StyledString, TextStyle};
    ///
    /// let text = StyledString::literal("hello <bold>world</bold>!").parse_markup();
    /// let en = Locale::new("en");
    /// assert_eq!(text.to_plain_string(&en), "hello world!");
    ///
    /// let parsed = text.resolve_markup(&en);
    /// assert_eq!(parsed.components()[1].styles(), [TextStyle::from("bold")]);
    /// ```
    #[must_use]
    pub fn parse_markup(&self) -> Self {
        let source = self.clone();
        Self::computed(move |locale| source.resolve_markup(locale))
    }

    /// Parses inline tags eagerly for `locale`.
    ///
    /// This is what [`parse_markup`](Self::parse_markup) runs at render time. The result
    /// contains only literal and rendered content.
    pub fn resolve_markup(&self, locale: &Locale) -> Self {
        let fragments = flatten::flatten(self, locale);
        let tags = fragments
            .iter()
            .enumerate()
            .flat_map(|(index, fragment)| scan::scan_tags(fragment.text(), index))
            .collect();
        let markers = balance::balance(tags);
        split::resplit(&fragments, &markers)
    }
}
