// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `styled_string`.
//!
//! - The `util` module contains helpers shared by the test modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that helpers can be shared without a library
//!   target.
//! - Put new tests into the module matching their topic and start the test name with that
//!   topic, e.g. `markup_nested_override` rather than `nested_override_markup`.
//! - Set `RUST_LOG=styled_string=trace` to see cache and markup decisions while a test runs.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod markup;
mod util;
