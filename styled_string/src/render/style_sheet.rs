// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use tracing::trace;

use crate::{AttributeProvider, Attributes, Locale, TextStyle};

/// An [`AttributeProvider`] mapping each style to a fixed set of attributes.
///
/// Applying a style overrides exactly the attributes it lists. Styles the sheet does not know
/// are ignored.
///
/// ```
/// use styled_string::{attributes, Attribute, Locale, StyleSheet, StyledString};
///
/// let sheet = StyleSheet::new()
///     .with_locale(Locale::new("en"))
///     .with_style("em", attributes([("font", "italic")]));
/// let text = StyledString::literal("Hi").styled("em").to_rich_text(&sheet);
/// assert!(text.attributes_at(0).contains_key(&Attribute::from("font")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    locale: Option<Locale>,
    base: Attributes,
    styles: HashMap<TextStyle, Attributes>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders for `locale` instead of the process default.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the base attributes.
    pub fn with_base(mut self, base: Attributes) -> Self {
        self.base = base;
        self
    }

    /// Sets the attributes for `style`.
    pub fn with_style(mut self, style: impl Into<TextStyle>, attributes: Attributes) -> Self {
        self.insert(style, attributes);
        self
    }

    /// Sets the attributes for `style`, returning the previous ones.
    pub fn insert(
        &mut self,
        style: impl Into<TextStyle>,
        attributes: Attributes,
    ) -> Option<Attributes> {
        self.styles.insert(style.into(), attributes)
    }

    /// Returns the attributes for `style`, if the sheet defines it.
    pub fn get(&self, style: &TextStyle) -> Option<&Attributes> {
        self.styles.get(style)
    }
}

impl AttributeProvider for StyleSheet {
    fn locale(&self) -> Option<Locale> {
        self.locale.clone()
    }

    fn base_attributes(&self) -> Attributes {
        self.base.clone()
    }

    fn apply_style(
        &self,
        style: &TextStyle,
        attributes: &mut Attributes,
        _surrounding: &[TextStyle],
    ) {
        match self.styles.get(style) {
            Some(style_attributes) => attributes.extend_override(style_attributes),
            None => trace!(%style, "no attributes for style"),
        }
    }
}
