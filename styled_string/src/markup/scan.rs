// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cmp::Ordering;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `<name>` or `</name>`; names exclude whitespace, angle brackets and `/`, and may be empty.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([^\s<>/]*)>").expect("tag pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TagKind {
    Open,
    Close,
}

/// One tag marker found in a fragment.
///
/// Ordered by fragment index, then by start offset: document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagMatch {
    pub(crate) name: String,
    /// Byte range of the whole marker within its fragment.
    pub(crate) range: Range<usize>,
    pub(crate) kind: TagKind,
    pub(crate) fragment: usize,
}

impl Ord for TagMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fragment, self.range.start).cmp(&(other.fragment, other.range.start))
    }
}

impl PartialOrd for TagMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds all tag markers in `text`, which is fragment number `fragment`.
pub(crate) fn scan_tags(text: &str, fragment: usize) -> impl Iterator<Item = TagMatch> + '_ {
    TAG.captures_iter(text).filter_map(move |captures| {
        let whole = captures.get(0)?;
        let kind = if captures.get(1).is_some_and(|slash| !slash.is_empty()) {
            TagKind::Close
        } else {
            TagKind::Open
        };
        Some(TagMatch {
            name: captures.get(2)?.as_str().to_owned(),
            range: whole.range(),
            kind,
            fragment,
        })
    })
}
