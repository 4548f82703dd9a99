use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

use crate::error::{StyleError, StyleResult};

/// Caller-supplied tick formatter closure, installed per axis.
pub type TickFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Pattern installed on both axes when no explicit pattern is given.
pub const DEFAULT_TICK_PATTERN: &str = "%d";

const MAX_WIDTH: usize = 64;
const MAX_PRECISION: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Integer,
    Fixed { uppercase: bool },
    Scientific { uppercase: bool },
    General { uppercase: bool },
    Verbatim,
}

impl Conversion {
    fn uppercase(self) -> bool {
        match self {
            Self::Fixed { uppercase }
            | Self::Scientific { uppercase }
            | Self::General { uppercase } => uppercase,
            Self::Integer | Self::Verbatim => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ConversionFlags {
    left_align: bool,
    force_sign: bool,
    space_sign: bool,
    zero_pad: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConversionSpec {
    flags: ConversionFlags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

/// Parsed printf-style tick-label pattern.
///
/// Grammar: `[literal] % [flags] [width] [.precision] conversion [literal]`,
/// with `%%` escaping a literal percent on either side. Exactly one
/// conversion is allowed per pattern. Parsing validates the whole pattern up
/// front, so a `TickPattern` value can always format.
///
/// Supported conversions: `d`/`i` (truncate toward zero), `f`/`F` (fixed
/// decimals, default precision 6), `e`/`E` (scientific with a two-digit
/// signed exponent), `g`/`G` (general form), `s` (shortest round-trip
/// decimal form).
#[derive(Debug, Clone, PartialEq)]
pub struct TickPattern {
    source: String,
    prefix: String,
    suffix: String,
    spec: ConversionSpec,
}

impl TickPattern {
    pub fn parse(pattern: &str) -> StyleResult<Self> {
        let mut chars = pattern.chars().peekable();
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec: Option<ConversionSpec> = None;

        while let Some(c) = chars.next() {
            let literal = if spec.is_none() { &mut prefix } else { &mut suffix };
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if spec.is_some() {
                return Err(format_error(
                    pattern,
                    "at most one conversion is allowed per pattern",
                ));
            }
            spec = Some(
                parse_conversion_spec(&mut chars)
                    .map_err(|reason| format_error(pattern, reason))?,
            );
        }

        let Some(spec) = spec else {
            return Err(format_error(
                pattern,
                "expected one conversion (`%d`, `%i`, `%f`, `%e`, `%g`, or `%s`)",
            ));
        };

        Ok(Self {
            source: pattern.to_owned(),
            prefix,
            suffix,
            spec,
        })
    }

    /// The pattern text this value was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let body = format_conversion(value, self.spec);
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&body);
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Display for TickPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Formatter installed on one axis.
#[derive(Clone, Default)]
pub enum TickFormatter {
    /// Pass-through: renders the value's shortest round-trip decimal form.
    #[default]
    Neutral,
    Pattern(TickPattern),
    Custom(TickFormatterFn),
}

impl TickFormatter {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Neutral => shortest_repr(value),
            Self::Pattern(pattern) => pattern.format(value),
            Self::Custom(formatter) => formatter(value),
        }
    }

    /// The installed pattern, when this is a pattern formatter.
    #[must_use]
    pub fn pattern(&self) -> Option<&TickPattern> {
        match self {
            Self::Pattern(pattern) => Some(pattern),
            Self::Neutral | Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("Neutral"),
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn format_error(pattern: &str, reason: impl Into<String>) -> StyleError {
    StyleError::InvalidTickFormat {
        pattern: pattern.to_owned(),
        reason: reason.into(),
    }
}

fn parse_conversion_spec(chars: &mut Peekable<Chars<'_>>) -> Result<ConversionSpec, String> {
    let mut flags = ConversionFlags::default();
    while let Some(&c) = chars.peek() {
        match c {
            '-' => flags.left_align = true,
            '+' => flags.force_sign = true,
            ' ' => flags.space_sign = true,
            '0' => flags.zero_pad = true,
            _ => break,
        }
        chars.next();
    }

    let width = parse_decimal(chars)?;
    if let Some(width) = width {
        if width > MAX_WIDTH {
            return Err(format!("width must be <= {MAX_WIDTH}"));
        }
    }

    let mut precision = None;
    if chars.peek() == Some(&'.') {
        chars.next();
        // C semantics: `%.f` means precision zero.
        let digits = parse_decimal(chars)?.unwrap_or(0);
        if digits > MAX_PRECISION {
            return Err(format!("precision must be <= {MAX_PRECISION}"));
        }
        precision = Some(digits);
    }

    let Some(conversion_char) = chars.next() else {
        return Err("pattern ends before a conversion character".to_owned());
    };
    let conversion = match conversion_char {
        'd' | 'i' => Conversion::Integer,
        'f' => Conversion::Fixed { uppercase: false },
        'F' => Conversion::Fixed { uppercase: true },
        'e' => Conversion::Scientific { uppercase: false },
        'E' => Conversion::Scientific { uppercase: true },
        'g' => Conversion::General { uppercase: false },
        'G' => Conversion::General { uppercase: true },
        's' => Conversion::Verbatim,
        other => return Err(format!("unsupported conversion `%{other}`")),
    };

    if precision.is_some() && matches!(conversion, Conversion::Integer | Conversion::Verbatim) {
        return Err(format!("precision is not supported for `%{conversion_char}`"));
    }

    Ok(ConversionSpec {
        flags,
        width,
        precision,
        conversion,
    })
}

fn parse_decimal(chars: &mut Peekable<Chars<'_>>) -> Result<Option<usize>, String> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<usize>()
        .map(Some)
        .map_err(|_| format!("numeric field `{digits}` is out of range"))
}

fn format_conversion(value: f64, spec: ConversionSpec) -> String {
    if !value.is_finite() {
        return pad_text(non_finite_body(value, spec.conversion), spec);
    }

    match spec.conversion {
        Conversion::Integer => {
            let int = saturating_trunc(value);
            let body = int.unsigned_abs().to_string();
            pad_numeric(sign_text(int < 0, spec.flags), body, spec)
        }
        Conversion::Fixed { .. } => {
            let precision = spec.precision.unwrap_or(6);
            let body = format!("{:.*}", precision, value.abs());
            pad_numeric(sign_text(value.is_sign_negative(), spec.flags), body, spec)
        }
        Conversion::Scientific { uppercase } => {
            let precision = spec.precision.unwrap_or(6);
            let (mantissa, exponent) = scientific_parts(value.abs(), precision);
            let marker = if uppercase { 'E' } else { 'e' };
            let body = format!("{mantissa}{marker}{}", exponent_text(exponent));
            pad_numeric(sign_text(value.is_sign_negative(), spec.flags), body, spec)
        }
        Conversion::General { uppercase } => {
            let body = general_body(value.abs(), spec.precision.unwrap_or(6), uppercase);
            pad_numeric(sign_text(value.is_sign_negative(), spec.flags), body, spec)
        }
        Conversion::Verbatim => pad_text(shortest_repr(value), spec),
    }
}

fn non_finite_body(value: f64, conversion: Conversion) -> String {
    let body = if value.is_nan() {
        "nan"
    } else if value < 0.0 {
        "-inf"
    } else {
        "inf"
    };
    if conversion.uppercase() {
        body.to_ascii_uppercase()
    } else {
        body.to_owned()
    }
}

fn sign_text(negative: bool, flags: ConversionFlags) -> &'static str {
    if negative {
        "-"
    } else if flags.force_sign {
        "+"
    } else if flags.space_sign {
        " "
    } else {
        ""
    }
}

fn saturating_trunc(value: f64) -> i64 {
    let truncated = value.trunc();
    if truncated >= i64::MAX as f64 {
        i64::MAX
    } else if truncated <= i64::MIN as f64 {
        i64::MIN
    } else {
        truncated as i64
    }
}

fn scientific_parts(abs: f64, precision: usize) -> (String, i32) {
    if abs == 0.0 {
        return (format!("{:.*}", precision, 0.0), 0);
    }
    let mut exponent = abs.log10().floor() as i32;
    let mut text = format!("{:.*}", precision, abs / 10f64.powi(exponent));
    // rounding can carry the mantissa past 10
    if text.starts_with("10") {
        exponent += 1;
        text = format!("{:.*}", precision, abs / 10f64.powi(exponent));
    }
    (text, exponent)
}

fn exponent_text(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{:02}", exponent.unsigned_abs())
}

fn general_body(abs: f64, precision: usize, uppercase: bool) -> String {
    let significant = precision.max(1);
    let (mantissa, exponent) = scientific_parts(abs, significant - 1);
    if exponent < -4 || exponent >= significant as i32 {
        let marker = if uppercase { 'E' } else { 'e' };
        format!(
            "{}{marker}{}",
            trim_trailing_zeros(&mantissa),
            exponent_text(exponent)
        )
    } else {
        let decimals = usize::try_from((significant as i32 - 1 - exponent).max(0)).unwrap_or(0);
        trim_trailing_zeros(&format!("{abs:.decimals$}"))
    }
}

fn trim_trailing_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_owned();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

pub(crate) fn shortest_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    format!("{value}")
}

fn pad_numeric(sign: &str, body: String, spec: ConversionSpec) -> String {
    let Some(width) = spec.width else {
        return format!("{sign}{body}");
    };
    let rendered = sign.len() + body.len();
    if rendered >= width {
        return format!("{sign}{body}");
    }
    let pad = width - rendered;
    if spec.flags.left_align {
        format!("{sign}{body}{:pad$}", "")
    } else if spec.flags.zero_pad {
        format!("{sign}{}{body}", "0".repeat(pad))
    } else {
        format!("{:pad$}{sign}{body}", "")
    }
}

fn pad_text(body: String, spec: ConversionSpec) -> String {
    let Some(width) = spec.width else {
        return body;
    };
    if body.len() >= width {
        return body;
    }
    let pad = width - body.len();
    if spec.flags.left_align {
        format!("{body}{:pad$}", "")
    } else {
        format!("{:pad$}{body}", "")
    }
}
