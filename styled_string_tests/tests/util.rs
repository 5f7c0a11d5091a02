// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across tests.

use std::sync::Once;

use styled_string::{attributes, Attribute, AttributeValue, Attributes, RichText, StyleSheet};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness, filtered by `RUST_LOG`.
pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The style sheet used by the markup tests.
pub(crate) fn sample_sheet() -> StyleSheet {
    StyleSheet::new()
        .with_style("bold", attributes([("font", "bold")]))
        .with_style("boldRed", attributes([("color", "red"), ("font", "bold")]))
        .with_style("blue", attributes([("color", "blue")]))
}

/// Returns the byte ranges of `text` whose effective attributes are exactly `expected`.
pub(crate) fn ranges_with(text: &RichText, expected: &Attributes) -> Vec<std::ops::Range<usize>> {
    text.runs_coalesced()
        .filter(|run| run.attributes == *expected)
        .map(|run| run.range)
        .collect()
}

/// Shorthand for a text attribute value.
pub(crate) fn text_value(value: &str) -> AttributeValue {
    AttributeValue::from(value)
}

/// Shorthand for an attribute key.
pub(crate) fn key(name: &str) -> Attribute {
    Attribute::from(name)
}
