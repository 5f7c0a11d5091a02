// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;

use super::scan::{TagKind, TagMatch};

/// A tag marker together with whether it belongs to a balanced pair.
///
/// Unbalanced markers are still removed from the text, but they never open or close a style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Marker {
    pub(crate) tag: TagMatch,
    pub(crate) balanced: bool,
}

/// Pairs opening and closing markers across all fragments, in document order.
///
/// A closing marker matches the nearest open marker with the same name. Opens above that one on
/// the stack are abandoned. A closing marker with no open counterpart is dropped, as is every open
/// marker still unclosed at the end.
pub(crate) fn balance(mut tags: Vec<TagMatch>) -> Vec<Marker> {
    tags.sort();
    let mut balanced = vec![false; tags.len()];

    // Indices into `tags` of currently open tags.
    let mut open: Vec<usize> = Vec::new();
    for (index, tag) in tags.iter().enumerate() {
        match tag.kind {
            TagKind::Open => open.push(index),
            TagKind::Close => {
                let Some(depth) = open.iter().rposition(|&o| tags[o].name == tag.name) else {
                    trace!(tag = %tag.name, "dropping unmatched closing tag");
                    continue;
                };
                for &abandoned in &open[depth + 1..] {
                    trace!(tag = %tags[abandoned].name, "dropping unclosed tag");
                }
                balanced[open[depth]] = true;
                balanced[index] = true;
                open.truncate(depth);
            }
        }
    }
    for &unclosed in &open {
        trace!(tag = %tags[unclosed].name, "dropping unclosed tag");
    }

    tags.into_iter()
        .zip(balanced)
        .map(|(tag, balanced)| Marker { tag, balanced })
        .collect()
}
