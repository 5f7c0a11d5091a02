// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Attributes, Content, Locale, RichText, StyledString, TextStyle};

/// Decides what styles look like when rendering to [`RichText`].
pub trait AttributeProvider {
    /// The locale to render for. `None` means [`Locale::process_default`].
    fn locale(&self) -> Option<Locale> {
        None
    }

    /// Attributes applied under everything else.
    fn base_attributes(&self) -> Attributes {
        Attributes::new()
    }

    /// Applies `style` to `attributes`.
    ///
    /// `surrounding` lists the styles already applied to this component, innermost first. For
    /// components produced by computed content it also includes the styles of the enclosing
    /// components. `attributes` starts out as the provider's base attributes with every
    /// surrounding style already applied.
    fn apply_style(
        &self,
        style: &TextStyle,
        attributes: &mut Attributes,
        surrounding: &[TextStyle],
    );
}

/// Any `Fn(style, attributes, surrounding)` is a provider with no locale and no base attributes.
impl<F> AttributeProvider for F
where
    F: Fn(&TextStyle, &mut Attributes, &[TextStyle]),
{
    fn apply_style(
        &self,
        style: &TextStyle,
        attributes: &mut Attributes,
        surrounding: &[TextStyle],
    ) {
        self(style, attributes, surrounding);
    }
}

impl StyledString {
    /// Renders this string to rich text, styled by `provider`.
    ///
    /// Each component's styles are applied outermost first, so inner styles override only the
    /// attributes they set. The resulting attributes are layered under any attributes already
    /// present in [`Content::Rendered`] text, so pre-styled fragments keep their own look.
    /// Finally the provider's base attributes are layered under the whole result.
    ///
    /// Components produced by [`Content::Computed`] start from the attributes of the component
    /// that computed them, and see its styles as surrounding styles. Styling a computed string
    /// from the outside therefore looks the same as styling its pieces directly.
    pub fn to_rich_text<P: AttributeProvider + ?Sized>(&self, provider: &P) -> RichText {
        let locale = provider.locale().unwrap_or_else(Locale::process_default);
        let base = provider.base_attributes();
        let mut out = render_components(self, &locale, provider, &base, &[]);
        out.layer_attributes(base);
        out
    }
}

/// Renders `string` with every component's attributes seeded from `inherited`.
///
/// `surrounding` lists the styles of enclosing computed components, innermost first.
fn render_components<P: AttributeProvider + ?Sized>(
    string: &StyledString,
    locale: &Locale,
    provider: &P,
    inherited: &Attributes,
    surrounding: &[TextStyle],
) -> RichText {
    let mut out = RichText::default();
    for component in string {
        let mut attributes = inherited.clone();
        let mut applied: Vec<TextStyle> = surrounding.to_vec();
        for style in component.styles() {
            provider.apply_style(style, &mut attributes, &applied);
            applied.insert(0, style.clone());
        }

        let mut fragment = match component.content() {
            Content::Literal(text) => RichText::new(text.as_str()),
            Content::Rendered(rich) => rich.clone(),
            Content::Resource(resource) => RichText::new(resource.resolve(locale)),
            Content::Computed(compute) => {
                render_components(&compute(locale), locale, provider, &attributes, &applied)
            }
        };
        fragment.layer_attributes(attributes);
        out.append(fragment);
    }
    out
}
