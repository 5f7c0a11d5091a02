// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Content, Locale, StyledString};

impl StyledString {
    /// Renders this string to plain text for `locale`.
    ///
    /// Styles are ignored. Resources are resolved and computed content is evaluated against
    /// `locale`; the resulting pieces are concatenated without separators.
    pub fn to_plain_string(&self, locale: &Locale) -> String {
        let mut out = String::new();
        write_plain(self, locale, &mut out);
        out
    }
}

fn write_plain(string: &StyledString, locale: &Locale, out: &mut String) {
    for component in string {
        match component.content() {
            Content::Literal(text) => out.push_str(text),
            Content::Rendered(rich) => out.push_str(rich.as_str()),
            Content::Resource(resource) => out.push_str(&resource.resolve(locale)),
            Content::Computed(compute) => write_plain(&compute(locale), locale, out),
        }
    }
}
