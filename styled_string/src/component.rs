// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use crate::{Locale, LocalizedResource, RichText, TextStyle};

/// A function producing locale-dependent content.
pub type ComputeFn = Arc<dyn Fn(&Locale) -> StyledString + Send + Sync>;

/// The content of a [`StyledComponent`].
#[derive(Clone)]
pub enum Content {
    /// Fixed text.
    Literal(String),
    /// Pre-built rich text. Its own attributes survive rendering.
    Rendered(RichText),
    /// A localized string resource, resolved at render time.
    Resource(LocalizedResource),
    /// Content computed from the render locale.
    ///
    /// The function may return further `Computed` or `Resource` content. It must terminate;
    /// nothing guards against a function that keeps producing itself.
    Computed(ComputeFn),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Rendered(rich) => f.debug_tuple("Rendered").field(rich).finish(),
            Self::Resource(resource) => f.debug_tuple("Resource").field(resource).finish(),
            Self::Computed(compute) => f
                .debug_tuple("Computed")
                .field(&Arc::as_ptr(compute).cast::<()>())
                .finish(),
        }
    }
}

/// Computed content compares by function identity.
impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Rendered(a), Self::Rendered(b)) => a == b,
            (Self::Resource(a), Self::Resource(b)) => a == b,
            (Self::Computed(a), Self::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// One piece of a [`StyledString`]: content plus the styles applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledComponent {
    styles: Vec<TextStyle>,
    content: Content,
}

impl StyledComponent {
    /// Creates a component. `styles` are ordered outermost first.
    pub fn new(styles: impl IntoIterator<Item = TextStyle>, content: Content) -> Self {
        Self {
            styles: styles.into_iter().collect(),
            content,
        }
    }

    /// Creates an unstyled component.
    pub fn unstyled(content: Content) -> Self {
        Self {
            styles: Vec::new(),
            content,
        }
    }

    /// The styles on this component, outermost first.
    pub fn styles(&self) -> &[TextStyle] {
        &self.styles
    }

    /// The content of this component.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns this component with `style` added as the outermost style.
    pub fn with_outer_style(mut self, style: TextStyle) -> Self {
        self.styles.insert(0, style);
        self
    }
}

/// A localizable string composed of styled components.
///
/// A `StyledString` is a flat sequence; nesting is expressed through styles (each component
/// carries its full outer-to-inner style list) and through [`Content::Computed`]. Values are
/// immutable once built and cheap to clone apart from their literal text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledString {
    components: Vec<StyledComponent>,
}

impl StyledString {
    /// Creates an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a string from its components.
    pub fn from_components(components: impl IntoIterator<Item = StyledComponent>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// A single unstyled literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::single(Content::Literal(text.into()))
    }

    /// A single unstyled piece of pre-built rich text.
    pub fn rendered(text: RichText) -> Self {
        Self::single(Content::Rendered(text))
    }

    /// A single unstyled localized resource.
    pub fn resource(resource: LocalizedResource) -> Self {
        Self::single(Content::Resource(resource))
    }

    /// A single unstyled component computed from the render locale.
    pub fn computed(compute: impl Fn(&Locale) -> Self + Send + Sync + 'static) -> Self {
        Self::single(Content::Computed(Arc::new(compute)))
    }

    fn single(content: Content) -> Self {
        Self {
            components: vec![StyledComponent::unstyled(content)],
        }
    }

    /// The components, in order.
    pub fn components(&self) -> &[StyledComponent] {
        &self.components
    }

    /// Iterates over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, StyledComponent> {
        self.components.iter()
    }

    /// The number of components (not characters).
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Appends a component.
    pub fn push(&mut self, component: StyledComponent) {
        self.components.push(component);
    }

    /// Appends all components of `other`.
    pub fn append(&mut self, other: Self) {
        self.components.extend(other.components);
    }

    /// Returns the concatenation of `self` and `other`.
    ///
    /// This is a structural append: adjacent literals are not merged and styles are not
    /// coalesced.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.append(other);
        self
    }

    /// Returns this string with `style` applied to all of it, outside any existing styles.
    #[must_use]
    pub fn styled(self, style: impl Into<TextStyle>) -> Self {
        let style = style.into();
        self.components
            .into_iter()
            .map(|component| component.with_outer_style(style.clone()))
            .collect()
    }
}

impl From<&str> for StyledString {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for StyledString {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl From<RichText> for StyledString {
    fn from(text: RichText) -> Self {
        Self::rendered(text)
    }
}

impl From<LocalizedResource> for StyledString {
    fn from(resource: LocalizedResource) -> Self {
        Self::resource(resource)
    }
}

impl FromIterator<StyledComponent> for StyledString {
    fn from_iter<I: IntoIterator<Item = StyledComponent>>(iter: I) -> Self {
        Self::from_components(iter)
    }
}

impl Extend<StyledComponent> for StyledString {
    fn extend<I: IntoIterator<Item = StyledComponent>>(&mut self, iter: I) {
        self.components.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StyledString {
    type Item = &'a StyledComponent;
    type IntoIter = std::slice::Iter<'a, StyledComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl IntoIterator for StyledString {
    type Item = StyledComponent;
    type IntoIter = std::vec::IntoIter<StyledComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

/// Builds a [`StyledString`] piece by piece, the way an interpolated literal would.
///
/// ```
/// use styled_string::{Locale, StyledStringBuilder};
///
/// let name = "Ada";
/// let text = StyledStringBuilder::new()
///     .text("Welcome back, ")
///     .styled_text("bold", name)
///     .text("!")
///     .build();
/// assert_eq!(text.len(), 3);
/// assert_eq!(text.to_plain_string(&Locale::new("en")), "Welcome back, Ada!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledStringBuilder {
    string: StyledString,
}

impl StyledStringBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.string.append(StyledString::literal(text));
        self
    }

    /// Appends text with a single style.
    pub fn styled_text(mut self, style: impl Into<TextStyle>, text: impl Into<String>) -> Self {
        self.string.append(StyledString::literal(text).styled(style));
        self
    }

    /// Appends pre-built rich text.
    pub fn rendered(mut self, text: RichText) -> Self {
        self.string.append(StyledString::rendered(text));
        self
    }

    /// Appends a localized resource.
    pub fn resource(mut self, resource: LocalizedResource) -> Self {
        self.string.append(StyledString::resource(resource));
        self
    }

    /// Appends another styled string.
    pub fn nested(mut self, string: StyledString) -> Self {
        self.string.append(string);
        self
    }

    /// Appends content computed from the render locale.
    pub fn computed(
        mut self,
        compute: impl Fn(&Locale) -> StyledString + Send + Sync + 'static,
    ) -> Self {
        self.string.append(StyledString::computed(compute));
        self
    }

    /// Finishes the string.
    pub fn build(self) -> StyledString {
        self.string
    }
}
