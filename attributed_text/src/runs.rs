// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::AttributeSet;

/// A contiguous range of text and the attributes in effect over it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun<K, V> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The effective attributes for this range.
    pub attributes: AttributeSet<K, V>,
}

/// An iterator over non-overlapping attribute runs.
///
/// Runs cover the whole text, including ranges that no span touches (those have an empty
/// attribute set).
#[derive(Clone, Debug)]
pub struct AttributeRuns<'a, K, V> {
    spans: &'a [(Range<usize>, AttributeSet<K, V>)],
    boundaries: Vec<usize>,
    start_offsets: Vec<usize>,
    start_events: Vec<usize>,
    end_offsets: Vec<usize>,
    end_events: Vec<usize>,
    /// Indices into `spans` covering the current segment, kept sorted.
    active: Vec<usize>,
    index: usize,
}

impl<'a, K: Clone + PartialEq, V: Clone> AttributeRuns<'a, K, V> {
    pub(crate) fn new(len: usize, spans: &'a [(Range<usize>, AttributeSet<K, V>)]) -> Self {
        let mut boundaries = Vec::with_capacity(2 + spans.len().saturating_mul(2));
        boundaries.push(0);
        boundaries.push(len);
        for (range, _) in spans {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        // Start/end events per boundary in a flat buffer plus an offsets array, rather than one
        // small `Vec` per boundary.
        let boundary_count = boundaries.len();
        let mut start_counts = vec![0_usize; boundary_count];
        let mut end_counts = vec![0_usize; boundary_count];
        let mut span_boundaries = Vec::with_capacity(spans.len());
        for (id, (range, _)) in spans.iter().enumerate() {
            if range.is_empty() {
                continue;
            }
            let (Ok(start), Ok(end)) = (
                boundaries.binary_search(&range.start),
                boundaries.binary_search(&range.end),
            ) else {
                continue;
            };
            span_boundaries.push((id, start, end));
            start_counts[start] += 1;
            end_counts[end] += 1;
        }

        let mut start_offsets = vec![0_usize; boundary_count + 1];
        let mut end_offsets = vec![0_usize; boundary_count + 1];
        for i in 0..boundary_count {
            start_offsets[i + 1] = start_offsets[i] + start_counts[i];
            end_offsets[i + 1] = end_offsets[i] + end_counts[i];
        }

        let mut start_events = vec![0_usize; start_offsets[boundary_count]];
        let mut end_events = vec![0_usize; end_offsets[boundary_count]];

        // Reuse the counts as write cursors.
        start_counts.fill(0);
        end_counts.fill(0);
        for (id, start, end) in span_boundaries {
            start_events[start_offsets[start] + start_counts[start]] = id;
            start_counts[start] += 1;
            end_events[end_offsets[end] + end_counts[end]] = id;
            end_counts[end] += 1;
        }

        Self {
            spans,
            boundaries,
            start_offsets,
            start_events,
            end_offsets,
            end_events,
            active: Vec::with_capacity(spans.len()),
            index: 0,
        }
    }

    fn update_active_for_boundary(&mut self, boundary_index: usize) {
        let end_range = self.end_offsets[boundary_index]..self.end_offsets[boundary_index + 1];
        for &id in &self.end_events[end_range] {
            if let Ok(ix) = self.active.binary_search(&id) {
                self.active.remove(ix);
            }
        }
        let start_range =
            self.start_offsets[boundary_index]..self.start_offsets[boundary_index + 1];
        for &id in &self.start_events[start_range] {
            if let Err(ix) = self.active.binary_search(&id) {
                self.active.insert(ix, id);
            }
        }
    }

    fn attributes_for_current_segment(&self) -> AttributeSet<K, V> {
        let mut out = AttributeSet::new();
        for &id in self.active.iter().rev() {
            out.extend_missing(&self.spans[id].1);
        }
        out
    }
}

impl<K: Clone + PartialEq, V: Clone> Iterator for AttributeRuns<'_, K, V> {
    type Item = AttributeRun<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index + 1 < self.boundaries.len() {
            self.update_active_for_boundary(self.index);
            let start = self.boundaries[self.index];
            let end = self.boundaries[self.index + 1];
            self.index += 1;
            if start == end {
                continue;
            }
            return Some(AttributeRun {
                range: start..end,
                attributes: self.attributes_for_current_segment(),
            });
        }
        None
    }
}

/// An iterator over attribute runs that merges adjacent runs with equal attributes.
#[derive(Clone, Debug)]
pub struct CoalescedAttributeRuns<'a, K, V> {
    inner: AttributeRuns<'a, K, V>,
    pending: Option<AttributeRun<K, V>>,
}

impl<'a, K, V> CoalescedAttributeRuns<'a, K, V> {
    pub(crate) fn new(inner: AttributeRuns<'a, K, V>) -> Self {
        Self {
            inner,
            pending: None,
        }
    }
}

impl<K: Clone + PartialEq, V: Clone + PartialEq> Iterator for CoalescedAttributeRuns<'_, K, V> {
    type Item = AttributeRun<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;
        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.attributes == run.attributes {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }
        Some(run)
    }
}
