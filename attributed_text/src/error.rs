// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error returned when a byte range does not fit the text it is applied to.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the length of the
/// text at the time of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    /// The offending endpoint for [`ErrorKind::NotOnCharBoundary`].
    endpoint: Option<Endpoint>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the text, not of the error."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the underlying text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Which endpoint was not on a character boundary, if that is what failed.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    fn new(kind: ErrorKind, range: &Range<usize>, len: usize, endpoint: Option<Endpoint>) -> Self {
        Self {
            kind,
            start: range.start,
            end: range.end,
            len,
            endpoint,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::NotOnCharBoundary => {
                let which = match self.endpoint {
                    Some(Endpoint::Start) => "start",
                    Some(Endpoint::End) | None => "end",
                };
                write!(
                    f,
                    "range {}..{}: {} not on UTF-8 boundary",
                    self.start, self.end, which
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Checks that `range` is ordered, in bounds and on UTF-8 boundaries of `text`.
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range, len, None));
    }
    if range.end > len {
        return Err(Error::new(ErrorKind::InvalidBounds, range, len, None));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::new(
            ErrorKind::NotOnCharBoundary,
            range,
            len,
            Some(Endpoint::Start),
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::new(
            ErrorKind::NotOnCharBoundary,
            range,
            len,
            Some(Endpoint::End),
        ));
    }
    Ok(())
}
