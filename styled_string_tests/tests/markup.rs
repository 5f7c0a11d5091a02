// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline markup parsing and its interaction with rendering.

use std::sync::Arc;

use styled_string::{
    attributes, AttributeValue, Catalog, Content, Locale, LocalizedResource, RichText, Strings,
    StyledString, TextStyle,
};

use crate::util::{init_tracing, key, ranges_with, sample_sheet, text_value};

fn en() -> Locale {
    Locale::new("en")
}

#[test]
fn markup_plain_rendering_strips_tags() {
    init_tracing();
    let text = StyledString::literal("hello <bold>world</bold>!").parse_markup();
    assert_eq!(
        text.to_plain_string(&en()),
        "hello world!",
        "tags should vanish without leaving spaces"
    );
}

#[test]
fn markup_style_covers_exactly_the_tagged_text() {
    init_tracing();
    let text = StyledString::literal("hello <bold>world</bold>!").parse_markup();
    let rich = text.to_rich_text(&sample_sheet().with_locale(en()));

    assert_eq!(rich.as_str(), "hello world!", "rich text content");
    assert_eq!(
        ranges_with(&rich, &attributes([("font", "bold")])),
        [6..11],
        "bold should cover exactly `world`"
    );
    for index in (0..6).chain(11..12) {
        assert!(
            rich.attributes_at(index).is_empty(),
            "unexpected attributes at {index}"
        );
    }
}

#[test]
fn markup_nested_override() {
    init_tracing();
    let text =
        StyledString::literal("Lorem <boldRed>ipsum <blue>dolor</blue> sit</boldRed> amet")
            .parse_markup();
    let rich = text.to_rich_text(&sample_sheet().with_locale(en()));

    assert_eq!(rich.as_str(), "Lorem ipsum dolor sit amet", "rich text content");
    assert_eq!(
        ranges_with(&rich, &attributes([("color", "red"), ("font", "bold")])),
        [6..12, 17..21],
        "outer style should cover `ipsum ` and ` sit`"
    );
    assert_eq!(
        ranges_with(&rich, &attributes([("color", "blue"), ("font", "bold")])),
        [12..17],
        "inner style should override only the color of `dolor`"
    );
    assert!(rich.attributes_at(0).is_empty(), "`Lorem` is unstyled");
    assert!(rich.attributes_at(22).is_empty(), "`amet` is unstyled");
}

#[test]
fn markup_unbalanced_tags_are_inert() {
    init_tracing();
    let text = StyledString::literal("a <bold>b").parse_markup();
    assert_eq!(text.to_plain_string(&en()), "a b", "unclosed marker text is removed");

    let rich = text.to_rich_text(&sample_sheet().with_locale(en()));
    assert!(
        rich.runs().all(|run| run.attributes.is_empty()),
        "an unclosed tag must not style anything"
    );

    let stray = StyledString::literal("x</bold>y").parse_markup();
    assert_eq!(stray.to_plain_string(&en()), "xy", "stray closing marker is removed");
}

#[test]
fn markup_tags_span_components() {
    init_tracing();
    let source =
        StyledString::literal("open <bold>").concat(StyledString::literal("text</bold> close"));
    let parsed = source.resolve_markup(&en());

    let bold: Vec<_> = parsed
        .iter()
        .filter(|component| component.styles() == [TextStyle::from("bold")])
        .collect();
    assert_eq!(bold.len(), 1, "exactly one component should be bold");
    assert_eq!(
        bold[0].content(),
        &Content::Literal("text".to_owned()),
        "the bold component should span `text`"
    );
    assert_eq!(
        parsed.to_plain_string(&en()),
        "open text close",
        "text outside the tags is kept"
    );

    let rich = source.parse_markup().to_rich_text(&sample_sheet().with_locale(en()));
    assert_eq!(
        ranges_with(&rich, &attributes([("font", "bold")])),
        [5..9],
        "bold should cover `text` across the component boundary"
    );
}

#[test]
fn markup_inside_localized_resources() {
    init_tracing();
    let catalog: Arc<Catalog> = Catalog::builder("markup")
        .root(Strings::new().string("cta", "Press <bold>Start</bold>"))
        .localization("es", Strings::new().string("cta", "Pulsa <bold>Iniciar</bold> ahora"))
        .build();
    let text = StyledString::resource(LocalizedResource::new("cta", catalog)).parse_markup();

    let sheet = sample_sheet();
    let english = text.to_rich_text(&sheet.clone().with_locale(en()));
    assert_eq!(english.as_str(), "Press Start", "root strings are used for `en`");
    assert_eq!(
        ranges_with(&english, &attributes([("font", "bold")])),
        [6..11],
        "bold in the root string"
    );

    let spanish = text.to_rich_text(&sheet.with_locale(Locale::new("es-MX")));
    assert_eq!(spanish.as_str(), "Pulsa Iniciar ahora", "`es-MX` falls back to `es`");
    assert_eq!(
        ranges_with(&spanish, &attributes([("font", "bold")])),
        [6..13],
        "bold in the localized string"
    );
}

#[test]
fn markup_keeps_rendered_fragment_attributes() {
    init_tracing();
    let mut fragment = RichText::new("<bold>big</bold> deal");
    fragment
        .apply_attributes(0..fragment.len(), attributes([("size", 30.0)]))
        .unwrap();
    let text = StyledString::rendered(fragment).parse_markup();
    let rich = text.to_rich_text(&sample_sheet().with_locale(en()));

    assert_eq!(rich.as_str(), "big deal", "markers removed from rendered text");
    let big = rich.attributes_at(0);
    assert_eq!(big.get(&key("font")), Some(&text_value("bold")), "tag style applied");
    assert_eq!(big.get(&key("size")), Some(&AttributeValue::Number(30.0)), "fragment size kept");
    let deal = rich.attributes_at(4);
    assert_eq!(deal.get(&key("font")), None, "tag style does not leak");
    assert_eq!(deal.get(&key("size")), Some(&AttributeValue::Number(30.0)), "fragment size kept");
}
