// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a small rich-text value: owned UTF-8 text plus attribute sets applied to
//! byte ranges.
//!
//! Spans may overlap; for each attribute key the most recently applied span wins. Layering
//! ([`AttributedText::layer_attributes`]) adds a span underneath all existing ones, which is how
//! an outer style fills in whatever a pre-styled fragment leaves unset.
//!
//! ## Example
//!
//! ```
//! use attributed_text::{AttributeSet, AttributedText};
//!
//! let mut text = AttributedText::new("Hello world");
//! text.apply_attributes(6..11, [("color", "blue")].into_iter().collect())
//!     .unwrap();
//! text.layer_attributes([("color", "black"), ("font", "serif")].into_iter().collect());
//!
//! let world = text.attributes_at(6);
//! assert_eq!(world.get(&"color"), Some(&"blue"));
//! assert_eq!(world.get(&"font"), Some(&"serif"));
//! assert_eq!(text.attributes_at(0).get(&"color"), Some(&"black"));
//! # let _: AttributeSet<&str, &str> = world;
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Currently unused; provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attribute_set;
mod attributed_text;
mod error;
mod runs;

pub use crate::attribute_set::AttributeSet;
pub use crate::attributed_text::AttributedText;
pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::runs::{AttributeRun, AttributeRuns, CoalescedAttributeRuns};
