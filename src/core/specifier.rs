use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OverlayError, OverlayResult};

/// Specifier used when the caller does not pick one: integer, no decimals.
pub const DEFAULT_SPECIFIER: &str = "%.0f";

const DEFAULT_FLOAT_PRECISION: usize = 6;
const MAX_FIELD_DIGITS: usize = 64;

/// printf-style numeric format applied to overlay values.
///
/// Supported: literal text, `%%`, and exactly one conversion of the form
/// `%[-+ 0#][width][.precision][length](f|F|e|E|g|G|d|i)`. Length modifiers
/// are accepted and ignored. Anything else degrades to plain `Display`
/// rendering of the value instead of failing the render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ValueSpecifier {
    source: String,
    pattern: Option<FormatPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatPattern {
    prefix: String,
    conversion: Option<Conversion>,
    suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left_align: bool,
    force_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    alternate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConversionKind {
    Fixed,
    Exponent,
    General,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conversion {
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    kind: ConversionKind,
    uppercase: bool,
}

impl ValueSpecifier {
    /// Parses `source`, keeping it as a plain-rendering fallback when the
    /// pattern is not understood.
    #[must_use]
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        match parse_pattern(&source) {
            Ok(pattern) => Self {
                source,
                pattern: Some(pattern),
            },
            Err(err) => {
                debug!(specifier = %source, %err, "falling back to plain value rendering");
                Self {
                    source,
                    pattern: None,
                }
            }
        }
    }

    /// Strict variant of [`ValueSpecifier::parse`] for config validation.
    pub fn try_parse(source: &str) -> OverlayResult<Self> {
        let pattern = parse_pattern(source)?;
        Ok(Self {
            source: source.to_owned(),
            pattern: Some(pattern),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// `true` when values are rendered with plain `Display` because the
    /// specifier could not be parsed.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.pattern.is_none()
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let Some(pattern) = &self.pattern else {
            return value.to_string();
        };
        let mut out = String::with_capacity(pattern.prefix.len() + pattern.suffix.len() + 16);
        out.push_str(&pattern.prefix);
        if let Some(conversion) = pattern.conversion {
            out.push_str(&conversion.format(value));
        }
        out.push_str(&pattern.suffix);
        out
    }

    /// Spacing between two adjacent outputs for fixed-point and integer
    /// conversions. `None` for relative-precision conversions (`e`, `g`) and
    /// literal-only patterns.
    #[must_use]
    pub fn resolution(&self) -> Option<f64> {
        let conversion = self.pattern.as_ref()?.conversion?;
        match conversion.kind {
            ConversionKind::Fixed => {
                let precision = conversion.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                Some(10f64.powi(-(precision as i32)))
            }
            ConversionKind::Integer => Some(1.0),
            ConversionKind::Exponent | ConversionKind::General => None,
        }
    }

    /// Reads a value back from text produced by [`ValueSpecifier::format`].
    #[must_use]
    pub fn parse_formatted(&self, text: &str) -> Option<f64> {
        let Some(pattern) = &self.pattern else {
            return text.trim().parse().ok();
        };
        pattern.conversion?;
        let body = text
            .strip_prefix(pattern.prefix.as_str())?
            .strip_suffix(pattern.suffix.as_str())?
            .trim();
        body.parse().ok()
    }
}

impl Default for ValueSpecifier {
    fn default() -> Self {
        Self::parse(DEFAULT_SPECIFIER)
    }
}

impl From<String> for ValueSpecifier {
    fn from(source: String) -> Self {
        Self::parse(source)
    }
}

impl From<&str> for ValueSpecifier {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<ValueSpecifier> for String {
    fn from(specifier: ValueSpecifier) -> Self {
        specifier.source
    }
}

impl fmt::Display for ValueSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(source: &str, reason: &'static str) -> OverlayError {
    OverlayError::InvalidSpecifier {
        specifier: source.to_owned(),
        reason,
    }
}

fn parse_pattern(source: &str) -> OverlayResult<FormatPattern> {
    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut conversion = None;
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        let literal = if conversion.is_some() {
            &mut suffix
        } else {
            &mut prefix
        };
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }
        if conversion.is_some() {
            return Err(invalid(source, "more than one conversion"));
        }
        conversion = Some(parse_conversion(&mut chars).map_err(|reason| invalid(source, reason))?);
    }

    Ok(FormatPattern {
        prefix,
        conversion,
        suffix,
    })
}

fn parse_conversion(chars: &mut Peekable<Chars<'_>>) -> Result<Conversion, &'static str> {
    let mut flags = Flags::default();
    while let Some(&ch) = chars.peek() {
        match ch {
            '-' => flags.left_align = true,
            '+' => flags.force_sign = true,
            ' ' => flags.space_sign = true,
            '0' => flags.zero_pad = true,
            '#' => flags.alternate = true,
            _ => break,
        }
        chars.next();
    }

    let width = take_number(chars)?.unwrap_or(0);
    let precision = if chars.peek() == Some(&'.') {
        chars.next();
        Some(take_number(chars)?.unwrap_or(0))
    } else {
        None
    };

    while matches!(
        chars.peek().copied(),
        Some('l' | 'h' | 'L' | 'q' | 'j' | 'z' | 't')
    ) {
        chars.next();
    }

    let (kind, uppercase) = match chars.next() {
        Some('f') => (ConversionKind::Fixed, false),
        Some('F') => (ConversionKind::Fixed, true),
        Some('e') => (ConversionKind::Exponent, false),
        Some('E') => (ConversionKind::Exponent, true),
        Some('g') => (ConversionKind::General, false),
        Some('G') => (ConversionKind::General, true),
        Some('d' | 'i') => (ConversionKind::Integer, false),
        Some('*') => return Err("argument-supplied width is not supported"),
        Some(_) => return Err("unsupported conversion"),
        None => return Err("incomplete conversion"),
    };

    Ok(Conversion {
        flags,
        width,
        precision,
        kind,
        uppercase,
    })
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Result<Option<usize>, &'static str> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        let next = value.unwrap_or(0) * 10 + digit as usize;
        if next > MAX_FIELD_DIGITS {
            return Err("field width or precision too large");
        }
        value = Some(next);
    }
    Ok(value)
}

impl Conversion {
    fn format(self, value: f64) -> String {
        if !value.is_finite() {
            let body = if value.is_nan() { "nan" } else { "inf" };
            let negative = value.is_infinite() && value.is_sign_negative();
            return self.pad(self.sign(negative), &self.cased(body.to_owned()), false);
        }

        match self.kind {
            ConversionKind::Integer => {
                let truncated = value.trunc();
                let mut digits = (truncated.abs() as u64).to_string();
                if let Some(min_digits) = self.precision {
                    if digits.len() < min_digits {
                        digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
                    }
                }
                self.pad(
                    self.sign(truncated < 0.0),
                    &digits,
                    self.precision.is_none(),
                )
            }
            ConversionKind::Fixed => {
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                let mut body = format!("{:.*}", precision, value.abs());
                if self.flags.alternate && precision == 0 {
                    body.push('.');
                }
                self.pad(self.sign(value.is_sign_negative()), &self.cased(body), true)
            }
            ConversionKind::Exponent => {
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                let body = format_exponent(value.abs(), precision, self.flags.alternate);
                self.pad(self.sign(value.is_sign_negative()), &self.cased(body), true)
            }
            ConversionKind::General => {
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                let body = format_general(value.abs(), precision, self.flags.alternate);
                self.pad(self.sign(value.is_sign_negative()), &self.cased(body), true)
            }
        }
    }

    fn sign(self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.flags.force_sign {
            "+"
        } else if self.flags.space_sign {
            " "
        } else {
            ""
        }
    }

    fn cased(self, body: String) -> String {
        if self.uppercase {
            body.to_uppercase()
        } else {
            body
        }
    }

    fn pad(self, sign: &str, body: &str, allow_zero_fill: bool) -> String {
        let len = sign.len() + body.chars().count();
        if len >= self.width {
            return format!("{sign}{body}");
        }
        let fill = self.width - len;
        if self.flags.left_align {
            format!("{sign}{body}{}", " ".repeat(fill))
        } else if self.flags.zero_pad && allow_zero_fill {
            format!("{sign}{}{body}", "0".repeat(fill))
        } else {
            format!("{}{sign}{body}", " ".repeat(fill))
        }
    }
}

/// C-style exponent notation: at least two exponent digits, explicit sign.
fn format_exponent(abs: f64, precision: usize, alternate: bool) -> String {
    let raw = format!("{:.*e}", precision, abs);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut out = String::with_capacity(mantissa.len() + 5);
    out.push_str(mantissa);
    if alternate && precision == 0 {
        out.push('.');
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    out
}

fn format_general(abs: f64, precision: usize, alternate: bool) -> String {
    let significant = precision.max(1);
    let exponent = if abs == 0.0 {
        0
    } else {
        let raw = format!("{:.*e}", significant - 1, abs);
        raw.split_once('e')
            .and_then(|(_, exp)| exp.parse::<i32>().ok())
            .unwrap_or(0)
    };

    let significant_i = significant as i32;
    let out = if exponent >= -4 && exponent < significant_i {
        let decimals = (significant_i - 1 - exponent) as usize;
        let mut fixed = format!("{:.*}", decimals, abs);
        if alternate && decimals == 0 {
            fixed.push('.');
        }
        fixed
    } else {
        format_exponent(abs, significant - 1, alternate)
    };

    if alternate {
        out
    } else {
        strip_trailing_zeros(&out)
    }
}

fn strip_trailing_zeros(text: &str) -> String {
    let (mantissa, exponent) = match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    match exponent {
        Some(exponent) => format!("{mantissa}e{exponent}"),
        None => mantissa.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_specifier_rounds_to_integer() {
        let specifier = ValueSpecifier::default();
        assert_eq!(specifier.format(42.0), "42");
        assert_eq!(specifier.format(41.6), "42");
        assert_eq!(specifier.format(-3.2), "-3");
        assert_eq!(specifier.as_str(), "%.0f");
    }

    #[test]
    fn exponent_uses_two_digit_signed_exponent() {
        let specifier = ValueSpecifier::parse("%.2e");
        assert_eq!(specifier.format(1234.5), "1.23e+03");
        assert_eq!(specifier.format(0.00012), "1.20e-04");
        assert_eq!(ValueSpecifier::parse("%E").format(0.0), "0.000000E+00");
    }

    #[test]
    fn general_picks_shortest_notation() {
        let specifier = ValueSpecifier::parse("%g");
        assert_eq!(specifier.format(100.0), "100");
        assert_eq!(specifier.format(0.5), "0.5");
        assert_eq!(specifier.format(1_234_567.0), "1.23457e+06");
        assert_eq!(specifier.format(0.0001), "0.0001");
        assert_eq!(specifier.format(0.00001), "1e-05");
    }

    #[test]
    fn width_flags_and_literals() {
        assert_eq!(ValueSpecifier::parse("%6.1f").format(3.14159), "   3.1");
        assert_eq!(ValueSpecifier::parse("%-6.1f|").format(3.14159), "3.1   |");
        assert_eq!(ValueSpecifier::parse("%06.1f").format(-3.14159), "-003.1");
        assert_eq!(ValueSpecifier::parse("%+.0f").format(7.0), "+7");
        assert_eq!(ValueSpecifier::parse("$%.2f").format(9.5), "$9.50");
        assert_eq!(ValueSpecifier::parse("%.0f%%").format(75.0), "75%");
        assert_eq!(ValueSpecifier::parse("%ld").format(12.9), "12");
        assert_eq!(ValueSpecifier::parse("%.3d").format(-7.0), "-007");
    }

    #[test]
    fn non_finite_values_render_c_style() {
        let specifier = ValueSpecifier::default();
        assert_eq!(specifier.format(f64::NAN), "nan");
        assert_eq!(specifier.format(f64::NEG_INFINITY), "-inf");
        assert_eq!(ValueSpecifier::parse("%F").format(f64::INFINITY), "INF");
    }

    #[test]
    fn malformed_specifiers_fall_back_to_plain_rendering() {
        for source in ["%", "%.2q", "%*d", "%f %f", "%.999f"] {
            let specifier = ValueSpecifier::parse(source);
            assert!(specifier.is_fallback(), "{source} should fall back");
            assert_eq!(specifier.format(2.5), "2.5");
            assert!(ValueSpecifier::try_parse(source).is_err());
        }
    }

    #[test]
    fn literal_only_pattern_ignores_the_value() {
        let specifier = ValueSpecifier::parse("n/a");
        assert!(!specifier.is_fallback());
        assert_eq!(specifier.format(12.0), "n/a");
        assert_eq!(specifier.resolution(), None);
        assert_eq!(specifier.parse_formatted("n/a"), None);
    }

    #[test]
    fn parse_formatted_strips_literals() {
        let specifier = ValueSpecifier::parse("$%.2f USD");
        assert_eq!(specifier.parse_formatted("$9.50 USD"), Some(9.5));
        assert_eq!(specifier.parse_formatted("9.50"), None);
        let resolution = specifier.resolution().expect("fixed-point resolution");
        assert!((resolution - 0.01).abs() <= 1e-12);
    }
}
