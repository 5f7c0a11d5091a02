// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use attributed_text::{AttributeSet, AttributedText};

/// A named style applied to part of a [`StyledString`](crate::StyledString), such as `bold`.
///
/// Styles are opaque tags: what they look like is decided at render time by an
/// [`AttributeProvider`](crate::AttributeProvider). Equality is exact, case-sensitive string
/// equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextStyle(Arc<str>);

impl TextStyle {
    /// Creates a style from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the style name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextStyle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TextStyle {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextStyle").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key of a rendering attribute, such as `color` or `font`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute(Arc<str>);

impl Attribute {
    /// Creates an attribute key from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the attribute name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attribute").field(&self.as_str()).finish()
    }
}

/// An 8-bit per channel, non-premultiplied color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The value of a rendering attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A named or free-form value, for example a font name.
    Text(Arc<str>),
    /// A numeric value, for example a point size.
    Number(f64),
    /// A flag, for example underline on/off.
    Bool(bool),
    /// A color.
    Color(Rgba),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Rgba> for AttributeValue {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

/// A set of rendering attributes.
pub type Attributes = AttributeSet<Attribute, AttributeValue>;

/// Rich text as produced by [`StyledString::to_rich_text`](crate::StyledString::to_rich_text).
pub type RichText = AttributedText<Attribute, AttributeValue>;

/// Builds an [`Attributes`] set from `(name, value)` pairs.
///
/// ```
/// use styled_string::{attributes, Attribute, AttributeValue};
///
/// let attrs = attributes([("color", "red"), ("font", "bold")]);
/// assert_eq!(
///     attrs.get(&Attribute::from("color")),
///     Some(&AttributeValue::from("red"))
/// );
/// ```
pub fn attributes<N, V, I>(pairs: I) -> Attributes
where
    N: Into<Attribute>,
    V: Into<AttributeValue>,
    I: IntoIterator<Item = (N, V)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
