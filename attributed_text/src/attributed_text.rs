// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::error::validate_range;
use crate::runs::{AttributeRuns, CoalescedAttributeRuns};
use crate::{AttributeSet, Error};

/// A block of text with attribute sets applied to ranges within the text.
///
/// Spans are kept in application order and may overlap. For any key, the value of the most
/// recently applied span covering a position wins. [`layer_attributes`](Self::layer_attributes)
/// is the exception: it places its span beneath every existing one, so it only fills in keys
/// that no other span sets.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<K, V> {
    text: String,
    spans: Vec<(Range<usize>, AttributeSet<K, V>)>,
}

impl<K, V> Default for AttributedText<K, V> {
    fn default() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq, V: Clone> AttributedText<K, V> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Returns the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes `self`, returning the plain text and discarding attributes.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `attributes` to a `range` within the text, on top of all existing spans.
    pub fn apply_attributes(
        &mut self,
        range: Range<usize>,
        attributes: AttributeSet<K, V>,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        if !range.is_empty() && !attributes.is_empty() {
            self.spans.push((range, attributes));
        }
        Ok(())
    }

    /// Apply `attributes` to the whole text without overriding values already present.
    ///
    /// Positions that already have a value for a key keep it; only the gaps receive the new
    /// value.
    pub fn layer_attributes(&mut self, attributes: AttributeSet<K, V>) {
        if attributes.is_empty() || self.text.is_empty() {
            return;
        }
        self.spans.insert(0, (0..self.text.len(), attributes));
    }

    /// Appends `other` to the end of this text, keeping both sides' attributes.
    pub fn append(&mut self, other: Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans.extend(
            other
                .spans
                .into_iter()
                .map(|(range, attrs)| (range.start + offset..range.end + offset, attrs)),
        );
    }

    /// Returns a copy of the given byte `range` with its attributes clipped to it.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, Error> {
        validate_range(&self.text, &range)?;
        let spans = self
            .spans
            .iter()
            .filter_map(|(span, attrs)| {
                let start = span.start.max(range.start);
                let end = span.end.min(range.end);
                (start < end).then(|| (start - range.start..end - range.start, attrs.clone()))
            })
            .collect();
        Ok(Self {
            text: String::from(&self.text[range]),
            spans,
        })
    }

    /// Iterate over all spans and the ranges they apply to, lowest priority first.
    pub fn spans_iter(
        &self,
    ) -> impl ExactSizeIterator<Item = (&Range<usize>, &AttributeSet<K, V>)> {
        self.spans.iter().map(|(range, attrs)| (range, attrs))
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Returns the effective attributes at byte `index`.
    pub fn attributes_at(&self, index: usize) -> AttributeSet<K, V> {
        let mut out = AttributeSet::new();
        for (_, attrs) in self.spans.iter().rev().filter(|(r, _)| r.contains(&index)) {
            out.extend_missing(attrs);
        }
        out
    }

    /// Returns an iterator over non-overlapping runs and their effective attributes.
    pub fn runs(&self) -> AttributeRuns<'_, K, V> {
        AttributeRuns::new(self.text.len(), &self.spans)
    }

    /// Like [`runs`](Self::runs), but merges adjacent runs with equal attributes.
    pub fn runs_coalesced(&self) -> CoalescedAttributeRuns<'_, K, V>
    where
        V: PartialEq,
    {
        CoalescedAttributeRuns::new(self.runs())
    }
}

impl<K: Clone + PartialEq, V: Clone> From<&str> for AttributedText<K, V> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<K: Clone + PartialEq, V: Clone> From<String> for AttributedText<K, V> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributeSet, AttributedText, ErrorKind};
    use alloc::vec::Vec;

    fn set(pairs: &[(&'static str, u32)]) -> AttributeSet<&'static str, u32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn later_spans_win() {
        let mut at = AttributedText::new("Hello!");
        at.apply_attributes(0..6, set(&[("size", 1)])).unwrap();
        at.apply_attributes(2..4, set(&[("size", 2)])).unwrap();

        assert_eq!(at.attributes_at(0).get(&"size"), Some(&1));
        assert_eq!(at.attributes_at(2).get(&"size"), Some(&2));
        assert_eq!(at.attributes_at(4).get(&"size"), Some(&1));
    }

    #[test]
    fn layering_preserves_explicit_values() {
        let mut at = AttributedText::new("abcd");
        at.apply_attributes(1..3, set(&[("color", 7)])).unwrap();
        at.layer_attributes(set(&[("color", 1), ("weight", 9)]));

        assert_eq!(at.attributes_at(0), set(&[("color", 1), ("weight", 9)]));
        let inner = at.attributes_at(1);
        assert_eq!(inner.get(&"color"), Some(&7));
        assert_eq!(inner.get(&"weight"), Some(&9));
        assert_eq!(at.attributes_at(3).get(&"color"), Some(&1));
    }

    #[test]
    fn layering_empty_is_noop() {
        let mut at: AttributedText<&str, u32> = AttributedText::new("abc");
        at.layer_attributes(AttributeSet::new());
        assert_eq!(at.spans_len(), 0);

        let mut empty: AttributedText<&str, u32> = AttributedText::new("");
        empty.layer_attributes(set(&[("a", 1)]));
        assert_eq!(empty.spans_len(), 0);
    }

    #[test]
    fn append_shifts_spans() {
        let mut left = AttributedText::new("ab");
        left.apply_attributes(0..2, set(&[("a", 1)])).unwrap();
        let mut right = AttributedText::new("cd");
        right.apply_attributes(1..2, set(&[("b", 2)])).unwrap();

        left.append(right);
        assert_eq!(left.as_str(), "abcd");
        let ranges: Vec<_> = left.spans_iter().map(|(r, _)| r.clone()).collect();
        assert_eq!(ranges, [0..2, 3..4]);
    }

    #[test]
    fn slice_clips_spans() {
        let mut at = AttributedText::new("Hello world");
        at.apply_attributes(0..5, set(&[("a", 1)])).unwrap();
        at.apply_attributes(4..11, set(&[("b", 2)])).unwrap();

        let sub = at.slice(3..8).unwrap();
        assert_eq!(sub.as_str(), "lo wo");
        let ranges: Vec<_> = sub.spans_iter().map(|(r, _)| r.clone()).collect();
        assert_eq!(ranges, [0..2, 1..5]);

        let outside = at.slice(6..11).unwrap();
        assert_eq!(outside.spans_len(), 1);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut at: AttributedText<&str, u32> = AttributedText::new("éclair");
        let err = at.apply_attributes(1..2, set(&[("a", 1)])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = at.slice(0..10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    }
}
