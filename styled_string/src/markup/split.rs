// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;

use super::balance::Marker;
use super::flatten::{Fragment, FragmentText};
use super::scan::TagKind;
use crate::{Content, StyledComponent, StyledString, TextStyle};

/// Splits `fragments` at every marker, styling the text between balanced pairs.
///
/// `markers` must be in document order. The stack of open styles carries over from one fragment
/// to the next, so a pair may open and close in different fragments. Each emitted component's
/// styles are the open styles, outermost first, followed by the fragment's own styles.
pub(crate) fn resplit(fragments: &[Fragment], markers: &[Marker]) -> StyledString {
    let mut out = StyledString::new();
    let mut open: Vec<TextStyle> = Vec::new();
    let mut markers = markers.iter().peekable();

    for (index, fragment) in fragments.iter().enumerate() {
        let mut cursor = 0;
        while let Some(marker) = markers.next_if(|marker| marker.tag.fragment == index) {
            let range = &marker.tag.range;
            emit(&mut out, fragment, cursor..range.start, &open);
            cursor = range.end;
            if !marker.balanced {
                continue;
            }
            let style = TextStyle::from(marker.tag.name.as_str());
            match marker.tag.kind {
                TagKind::Open => open.push(style),
                TagKind::Close => {
                    if let Some(position) = open.iter().rposition(|s| *s == style) {
                        open.remove(position);
                    }
                }
            }
        }
        emit(&mut out, fragment, cursor..fragment.text().len(), &open);
    }
    out
}

fn emit(out: &mut StyledString, fragment: &Fragment, range: Range<usize>, open: &[TextStyle]) {
    if range.is_empty() {
        return;
    }
    let content = match &fragment.text {
        FragmentText::Plain(text) => Content::Literal(text[range].to_owned()),
        FragmentText::Rich(rich) => {
            Content::Rendered(rich.slice(range).expect("tag boundaries lie on char boundaries"))
        }
    };
    let styles = open.iter().chain(&fragment.styles).cloned();
    out.push(StyledComponent::new(styles, content));
}
