// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering to plain text or to [`RichText`](crate::RichText).
//!
//! - [`StyledString::to_plain_string`](crate::StyledString::to_plain_string) drops all styles.
//! - [`StyledString::to_rich_text`](crate::StyledString::to_rich_text) asks an
//!   [`AttributeProvider`] what each style looks like.

mod attributed;
mod plain;
mod style_sheet;

pub use attributed::AttributeProvider;
pub use style_sheet::StyleSheet;
