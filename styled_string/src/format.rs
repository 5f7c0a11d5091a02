// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional argument substitution for localized format strings.
//!
//! Supports the printf subset that localized strings use in practice:
//! `%[N$][width][.precision][length]conversion`, where the conversion is one of `@`, `s`
//! (object/string), `d`, `i` (signed), `u` (unsigned) or `f`, `F` (floating point), the length
//! modifiers `h`, `l`, `ll`, `q`, `z`, `j`, `t` are accepted and ignored, and `%%` is a literal
//! percent sign.

use std::fmt;

use tracing::debug;

/// A positional argument for a localized format string.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg {
    /// A string, substituted verbatim.
    Text(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    Percent,
    Object,
    Signed,
    Unsigned,
    Float,
}

#[derive(Clone, Copy, Debug)]
struct Spec {
    /// 1-based explicit argument position.
    position: Option<usize>,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

/// Substitutes `args` into `template`.
///
/// Sequential specifiers consume arguments left to right; an explicit `N$` position does not
/// move the sequential cursor. A specifier without a matching argument is copied through
/// unchanged, as is anything after a `%` that is not a recognized specifier.
///
/// ```
/// use styled_string::{format_positional, FormatArg};
///
/// let args = [FormatArg::from("Ada"), FormatArg::from(3)];
/// assert_eq!(
///     format_positional("%@ has %d new messages", &args),
///     "Ada has 3 new messages"
/// );
/// assert_eq!(format_positional("%2$d for %1$@", &args), "3 for Ada");
/// ```
pub fn format_positional(template: &str, args: &[FormatArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;
    while let Some(ix) = rest.find('%') {
        out.push_str(&rest[..ix]);
        let after = &rest[ix + 1..];
        let Some((spec, consumed)) = parse_spec(after) else {
            out.push('%');
            rest = after;
            continue;
        };
        let source = &rest[ix..ix + 1 + consumed];
        rest = &after[consumed..];

        if spec.conversion == Conversion::Percent {
            out.push('%');
            continue;
        }
        let index = match spec.position {
            Some(position) => position - 1,
            None => {
                next_arg += 1;
                next_arg - 1
            }
        };
        match args.get(index) {
            Some(arg) => out.push_str(&pad(render_arg(arg, &spec), spec.width)),
            None => {
                debug!(specifier = source, index, "no argument for format specifier");
                out.push_str(source);
            }
        }
    }
    out.push_str(rest);
    out
}

/// Largest width or precision the formatter accepts.
const MAX_FORMAT_COUNT: usize = u16::MAX as usize;

/// Parses the specifier following a `%`, returning it and the number of bytes consumed.
fn parse_spec(s: &str) -> Option<(Spec, usize)> {
    let bytes = s.as_bytes();
    if bytes.first() == Some(&b'%') {
        let spec = Spec {
            position: None,
            width: None,
            precision: None,
            conversion: Conversion::Percent,
        };
        return Some((spec, 1));
    }

    let mut pos = 0;
    let mut position = None;
    let mut width = take_number(bytes, &mut pos);
    if width.is_some() && bytes.get(pos) == Some(&b'$') {
        position = Some(width.filter(|&n| n > 0)?);
        pos += 1;
        width = take_number(bytes, &mut pos);
    }
    let mut precision = None;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        precision = Some(take_number(bytes, &mut pos).unwrap_or(0));
    }
    while matches!(bytes.get(pos), Some(b'h' | b'l' | b'q' | b'z' | b'j' | b't')) {
        pos += 1;
    }
    if width.max(precision).is_some_and(|n| n > MAX_FORMAT_COUNT) {
        return None;
    }
    let conversion = match bytes.get(pos)? {
        b'@' | b's' => Conversion::Object,
        b'd' | b'i' => Conversion::Signed,
        b'u' => Conversion::Unsigned,
        b'f' | b'F' => Conversion::Float,
        _ => return None,
    };
    let spec = Spec {
        position,
        width,
        precision,
        conversion,
    };
    Some((spec, pos + 1))
}

fn take_number(bytes: &[u8], pos: &mut usize) -> Option<usize> {
    let start = *pos;
    while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    let digits = std::str::from_utf8(&bytes[start..*pos]).ok()?;
    if digits.is_empty() {
        return None;
    }
    // Counts too large for `usize` are rejected later like any other oversized count.
    Some(digits.parse().unwrap_or(usize::MAX))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "printf semantics: floats are truncated for integer conversions"
)]
fn render_arg(arg: &FormatArg, spec: &Spec) -> String {
    match (spec.conversion, arg) {
        (Conversion::Float, FormatArg::Float(value)) => {
            format!("{value:.*}", spec.precision.unwrap_or(6))
        }
        (Conversion::Float, FormatArg::Int(value)) => {
            format!("{:.*}", spec.precision.unwrap_or(6), *value as f64)
        }
        (Conversion::Float, FormatArg::UInt(value)) => {
            format!("{:.*}", spec.precision.unwrap_or(6), *value as f64)
        }
        (Conversion::Signed | Conversion::Unsigned, FormatArg::Float(value)) => {
            format!("{}", *value as i64)
        }
        (Conversion::Object, FormatArg::Float(value)) if spec.precision.is_some() => {
            format!("{value:.*}", spec.precision.unwrap_or_default())
        }
        _ => arg.to_string(),
    }
}

fn pad(text: String, width: Option<usize>) -> String {
    match width {
        Some(width) if text.chars().count() < width => format!("{text:>width$}"),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{format_positional, FormatArg};

    #[test]
    fn sequential_arguments() {
        let args = [FormatArg::from("world"), FormatArg::from(42)];
        assert_eq!(format_positional("Hello %@, %d!", &args), "Hello world, 42!");
        assert_eq!(format_positional("%s/%ld", &args), "world/42");
    }

    #[test]
    fn explicit_positions_do_not_advance_cursor() {
        let args = [FormatArg::from("a"), FormatArg::from("b")];
        assert_eq!(format_positional("%2$@ %@ %@", &args), "b a b");
    }

    #[test]
    fn float_precision_and_width() {
        let args = [FormatArg::from(1.23456), FormatArg::from(7)];
        assert_eq!(format_positional("%.2f", &args), "1.23");
        assert_eq!(format_positional("%f", &args), "1.234560");
        assert_eq!(format_positional("[%2$3d]", &args), "[  7]");
    }

    #[test]
    fn percent_literal_and_unknown_specifiers() {
        assert_eq!(format_positional("100%%", &[]), "100%");
        assert_eq!(format_positional("50% off", &[]), "50% off");
        assert_eq!(format_positional("%x", &[FormatArg::from(1)]), "%x");
        assert_eq!(format_positional("trailing %", &[]), "trailing %");
    }

    #[test]
    fn oversized_counts_are_kept_verbatim() {
        let args = [FormatArg::from("a"), FormatArg::from(1.5)];
        assert_eq!(format_positional("%65536@", &args), "%65536@");
        assert_eq!(format_positional("%2$.70000f", &args), "%2$.70000f");
        let huge = "[%99999999999999999999@]";
        assert_eq!(format_positional(huge, &args), huge);
        assert_eq!(format_positional("%65535@|", &args).len(), 65536);
        assert_eq!(format_positional("%2$.2f", &args), "1.50");
    }

    #[test]
    fn missing_arguments_are_kept_verbatim() {
        let args = [FormatArg::from("only")];
        assert_eq!(format_positional("%@ and %@", &args), "only and %@");
        assert_eq!(format_positional("%3$@", &args), "%3$@");
    }
}
