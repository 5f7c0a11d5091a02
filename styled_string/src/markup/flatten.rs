// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Content, Locale, RichText, StyledString, TextStyle};

/// Locale-resolved text of one fragment.
#[derive(Clone, Debug)]
pub(crate) enum FragmentText {
    Plain(String),
    Rich(RichText),
}

/// A component resolved to text, with the full style list it inherits.
#[derive(Clone, Debug)]
pub(crate) struct Fragment {
    pub(crate) styles: Vec<TextStyle>,
    pub(crate) text: FragmentText,
}

impl Fragment {
    pub(crate) fn text(&self) -> &str {
        match &self.text {
            FragmentText::Plain(text) => text,
            FragmentText::Rich(rich) => rich.as_str(),
        }
    }
}

/// Resolves `string` for `locale` into a flat list of text fragments.
///
/// Computed content is expanded in place; its component's styles are prefixed onto the styles
/// of everything it produces.
pub(crate) fn flatten(string: &StyledString, locale: &Locale) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(string.len());
    flatten_into(string, locale, &[], &mut out);
    out
}

fn flatten_into(
    string: &StyledString,
    locale: &Locale,
    outer: &[TextStyle],
    out: &mut Vec<Fragment>,
) {
    for component in string {
        let styles: Vec<TextStyle> = outer.iter().chain(component.styles()).cloned().collect();
        let text = match component.content() {
            Content::Literal(text) => FragmentText::Plain(text.clone()),
            Content::Rendered(rich) => FragmentText::Rich(rich.clone()),
            Content::Resource(resource) => FragmentText::Plain(resource.resolve(locale)),
            Content::Computed(compute) => {
                flatten_into(&compute(locale), locale, &styles, out);
                continue;
            }
        };
        out.push(Fragment { styles, text });
    }
}
