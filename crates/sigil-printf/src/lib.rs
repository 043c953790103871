//! printf-style directive subset for the sigil passthrough specifier.
//!
//! The `$[c|...]` specifier treats its precision text as a secondary format
//! string in the classic printf dialect. This crate parses that dialect and
//! renders tagged [`Value`](sigil_args::Value)s against it, in one pass,
//! straight into a growing accumulator.
//!
//! Supported directives: `%d` `%i` (signed), `%u` `%x` `%X` `%o` (unsigned),
//! `%c`, `%s`, `%f` `%F` `%e` `%E` `%g` `%G` (floats), and `%%`. Flags
//! (`-` `+` space `#` `0`), decimal or `*` width, and `.n` / `.*` precision
//! follow POSIX rules; length modifiers (`hh h l ll z t j L`) are parsed and
//! ignored because tagged values carry their own width. A trailing lone `%`
//! is emitted literally. `%p`, `%n`, `%a`, and `%A` are rejected.
//!
//! # Example
//!
//! ```rust
//! use sigil_args::{args, Args};
//!
//! let mut out = String::new();
//! let mut cursor = Args::new(args![1920u32, 1080u32]);
//! sigil_printf::write_formatted(&mut out, "%ux%u", &mut cursor).unwrap();
//! assert_eq!(out, "1920x1080");
//! ```

use sigil_args::{ArgError, Args, Value};

/// Error produced while interpreting a directive string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectiveError {
    /// The directive pulled an argument that was missing or mistagged.
    #[error(transparent)]
    Arg(#[from] ArgError),

    /// A `%` was followed by bytes that do not form a directive.
    #[error("malformed directive at byte {position}")]
    Malformed {
        /// Byte offset of the first byte after the `%`.
        position: usize,
    },

    /// A directive this dialect does not render.
    #[error("unsupported conversion `%{conversion}`")]
    Unsupported {
        /// The conversion character.
        conversion: char,
    },
}

/// Flags parsed from a directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    left_justify: bool, // '-'
    force_sign: bool,   // '+'
    space_sign: bool,   // ' '
    alt_form: bool,     // '#'
    zero_pad: bool,     // '0'
}

/// Width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    None,
    Fixed(usize),
    FromArg, // '*'
}

/// Precision specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    None,
    Fixed(usize),
    FromArg, // '.*'
}

/// A parsed directive, before `*` resolution.
#[derive(Debug, Clone)]
struct Directive {
    flags: Flags,
    width: Width,
    precision: Precision,
    conversion: u8,
}

/// A directive with width and precision pinned down.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    conversion: u8,
}

const CONVERSIONS: &[u8] = b"diuxXoscpn%fFeEgGaA";

/// Renders `fmt` into `out`, pulling arguments from `args` as directives
/// require. Fails fast on the first malformed directive, unsupported
/// conversion, or argument problem; whatever was already appended stays.
pub fn write_formatted(
    out: &mut String,
    fmt: &str,
    args: &mut Args<'_>,
) -> Result<(), DirectiveError> {
    let bytes = fmt.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        while pos < bytes.len() && bytes[pos] != b'%' {
            pos += 1;
        }
        if pos > start {
            out.push_str(&fmt[start..pos]);
        }
        if pos >= bytes.len() {
            break;
        }
        pos += 1; // the '%'
        if pos >= bytes.len() {
            // Trailing '%' with nothing after, emitted literally.
            out.push('%');
            break;
        }
        if bytes[pos] == b'%' {
            out.push('%');
            pos += 1;
            continue;
        }
        let (directive, consumed) =
            parse_directive(&bytes[pos..]).ok_or(DirectiveError::Malformed { position: pos })?;
        pos += consumed;
        render_directive(out, &directive, args)?;
    }

    Ok(())
}

/// Parses one directive starting at the first byte after `%`.
///
/// Returns the directive and the number of bytes consumed, or `None` when
/// the bytes do not decode as a directive.
fn parse_directive(fmt: &[u8]) -> Option<(Directive, usize)> {
    let mut pos = 0;
    let len = fmt.len();

    let mut flags = Flags::default();
    while pos < len {
        match fmt[pos] {
            b'-' => flags.left_justify = true,
            b'+' => flags.force_sign = true,
            b' ' => flags.space_sign = true,
            b'#' => flags.alt_form = true,
            b'0' => flags.zero_pad = true,
            _ => break,
        }
        pos += 1;
    }
    // POSIX: '+' overrides ' '; '-' overrides '0'.
    if flags.force_sign {
        flags.space_sign = false;
    }
    if flags.left_justify {
        flags.zero_pad = false;
    }

    let width = if pos < len && fmt[pos] == b'*' {
        pos += 1;
        Width::FromArg
    } else {
        let start = pos;
        while pos < len && fmt[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos > start {
            Width::Fixed(parse_decimal(&fmt[start..pos]))
        } else {
            Width::None
        }
    };

    let precision = if pos < len && fmt[pos] == b'.' {
        pos += 1;
        if pos < len && fmt[pos] == b'*' {
            pos += 1;
            Precision::FromArg
        } else {
            let start = pos;
            while pos < len && fmt[pos].is_ascii_digit() {
                pos += 1;
            }
            Precision::Fixed(if pos > start {
                parse_decimal(&fmt[start..pos])
            } else {
                0
            })
        }
    } else {
        Precision::None
    };

    // Length modifiers are accepted for source compatibility and ignored.
    if pos < len {
        match fmt[pos] {
            b'h' | b'l' => {
                let first = fmt[pos];
                pos += 1;
                if pos < len && fmt[pos] == first {
                    pos += 1;
                }
            }
            b'z' | b't' | b'j' | b'L' => pos += 1,
            _ => {}
        }
    }

    if pos >= len {
        return None;
    }
    let conversion = fmt[pos];
    pos += 1;

    if !CONVERSIONS.contains(&conversion) {
        return None;
    }

    Some((
        Directive {
            flags,
            width,
            precision,
            conversion,
        },
        pos,
    ))
}

fn render_directive(
    out: &mut String,
    directive: &Directive,
    args: &mut Args<'_>,
) -> Result<(), DirectiveError> {
    let mut flags = directive.flags;

    let width = match directive.width {
        Width::Fixed(w) => w,
        Width::None => 0,
        Width::FromArg => {
            let w = args.next_signed()?;
            if w < 0 {
                // POSIX: a negative '*' width means left-justified.
                flags.left_justify = true;
                flags.zero_pad = false;
                w.unsigned_abs().min(4096) as usize
            } else {
                (w as u128).min(4096) as usize
            }
        }
    };

    let precision = match directive.precision {
        Precision::Fixed(p) => Some(p),
        Precision::None => None,
        Precision::FromArg => {
            let p = args.next_signed()?;
            // POSIX: a negative '*' precision reads as omitted.
            if p < 0 {
                None
            } else {
                Some((p as u128).min(4096) as usize)
            }
        }
    };

    let resolved = Resolved {
        flags,
        width,
        precision,
        conversion: directive.conversion,
    };

    match directive.conversion {
        b'd' | b'i' => {
            let v = args.next_signed()?;
            format_signed(out, v, &resolved);
        }
        b'u' | b'x' | b'X' | b'o' => {
            let v = args.next_unsigned()?;
            format_unsigned(out, v, &resolved);
        }
        b'c' => {
            let c = match args.next()? {
                Value::Char(c) => c,
                // Classic printf pulls an int for %c and truncates.
                Value::I32(v) => (v as u8) as char,
                Value::U32(v) => (v as u8) as char,
                Value::I64(v) => (v as u8) as char,
                Value::U64(v) => (v as u8) as char,
                other => {
                    return Err(ArgError::TypeMismatch {
                        index: args.consumed() - 1,
                        expected: "char",
                        found: other.kind(),
                    }
                    .into())
                }
            };
            format_char(out, c, &resolved);
        }
        b's' => {
            let s = args.next_str()?;
            format_str(out, &s, &resolved);
        }
        b'f' | b'F' | b'e' | b'E' | b'g' | b'G' => {
            let v = args.next_f64()?;
            format_float(out, v, &resolved);
        }
        other => {
            return Err(DirectiveError::Unsupported {
                conversion: other as char,
            })
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

fn format_signed(out: &mut String, value: i128, spec: &Resolved) {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();

    let sign = if negative {
        Some('-')
    } else if spec.flags.force_sign {
        Some('+')
    } else if spec.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    render_integer(out, sign, magnitude, spec);
}

fn format_unsigned(out: &mut String, value: u128, spec: &Resolved) {
    render_integer(out, None, value, spec);
}

/// Shared integer emitter: sign, alternate-form prefix, precision zeros,
/// digits, and width padding in POSIX order.
fn render_integer(out: &mut String, sign: Option<char>, magnitude: u128, spec: &Resolved) {
    let (base, uppercase) = match spec.conversion {
        b'o' => (8, false),
        b'x' => (16, false),
        b'X' => (16, true),
        _ => (10, false),
    };

    let mut digits = [0u8; 48];
    let digit_count = render_digits(magnitude, base, uppercase, &mut digits);
    let digit_slice = &digits[48 - digit_count..];

    // Precision is the minimum digit count, zero-filled.
    let min_digits = spec.precision.unwrap_or(1);
    let zero_prefix = min_digits.saturating_sub(digit_count);

    // POSIX: precision 0 with value 0 produces no digits at all.
    let suppress_digits = magnitude == 0 && spec.precision == Some(0);

    let prefix = if spec.flags.alt_form && magnitude != 0 {
        match spec.conversion {
            b'o' => "0",
            b'x' => "0x",
            b'X' => "0X",
            _ => "",
        }
    } else {
        ""
    };

    let content = sign.is_some() as usize
        + prefix.len()
        + if suppress_digits {
            0
        } else {
            zero_prefix + digit_count
        };
    let pad_total = spec.width.saturating_sub(content);

    if !spec.flags.left_justify && !spec.flags.zero_pad {
        pad(out, ' ', pad_total);
    }
    if let Some(s) = sign {
        out.push(s);
    }
    out.push_str(prefix);
    if !spec.flags.left_justify && spec.flags.zero_pad {
        pad(out, '0', pad_total);
    }
    if !suppress_digits {
        pad(out, '0', zero_prefix);
        for &d in digit_slice {
            out.push(d as char);
        }
    }
    if spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

fn format_str(out: &mut String, s: &str, spec: &Resolved) {
    // Precision truncates; counted in characters to stay on UTF-8 boundaries.
    let effective: String;
    let text = match spec.precision {
        Some(p) if s.chars().count() > p => {
            effective = s.chars().take(p).collect();
            effective.as_str()
        }
        _ => s,
    };

    let pad_total = spec.width.saturating_sub(text.chars().count());
    if !spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
    out.push_str(text);
    if spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

fn format_char(out: &mut String, c: char, spec: &Resolved) {
    let pad_total = spec.width.saturating_sub(1);
    if !spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
    out.push(c);
    if spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

fn format_float(out: &mut String, value: f64, spec: &Resolved) {
    // POSIX default float precision.
    let precision = spec.precision.unwrap_or(6);

    if value.is_nan() {
        let s = if spec.conversion.is_ascii_uppercase() {
            "NAN"
        } else {
            "nan"
        };
        return format_padded_word(out, s, spec);
    }
    if value.is_infinite() {
        let s = match (spec.conversion.is_ascii_uppercase(), value > 0.0) {
            (true, true) => "INF",
            (true, false) => "-INF",
            (false, true) => "inf",
            (false, false) => "-inf",
        };
        return format_padded_word(out, s, spec);
    }

    let negative = value.is_sign_negative();
    let abs = value.abs();

    let body = match spec.conversion.to_ascii_lowercase() {
        b'e' => format_e(
            abs,
            precision,
            spec.conversion.is_ascii_uppercase(),
        ),
        b'g' => format_g(
            abs,
            precision,
            spec.conversion.is_ascii_uppercase(),
            spec.flags.alt_form,
        ),
        _ => format_f(abs, precision, spec.flags.alt_form),
    };

    let sign = if negative {
        Some('-')
    } else if spec.flags.force_sign {
        Some('+')
    } else if spec.flags.space_sign {
        Some(' ')
    } else {
        None
    };

    let content = sign.is_some() as usize + body.len();
    let pad_total = spec.width.saturating_sub(content);

    if !spec.flags.left_justify && !spec.flags.zero_pad {
        pad(out, ' ', pad_total);
    }
    if let Some(s) = sign {
        out.push(s);
    }
    if !spec.flags.left_justify && spec.flags.zero_pad {
        pad(out, '0', pad_total);
    }
    out.push_str(&body);
    if spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn parse_decimal(digits: &[u8]) -> usize {
    let mut result = 0usize;
    for &d in digits {
        result = result
            .saturating_mul(10)
            .saturating_add((d - b'0') as usize);
    }
    // Widths from the format string are bounded the same way '*' widths are.
    result.min(4096)
}

/// Renders `value` in `base` into the end of `buf`, right-aligned.
/// Returns the digit count.
fn render_digits(mut value: u128, base: u128, uppercase: bool, buf: &mut [u8; 48]) -> usize {
    if value == 0 {
        buf[47] = b'0';
        return 1;
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut pos = 48;
    while value > 0 && pos > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    48 - pos
}

fn pad(out: &mut String, c: char, count: usize) {
    for _ in 0..count {
        out.push(c);
    }
}

/// nan/inf words honor width and justification but never zero-padding.
fn format_padded_word(out: &mut String, word: &str, spec: &Resolved) {
    let pad_total = spec.width.saturating_sub(word.len());
    if !spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
    out.push_str(word);
    if spec.flags.left_justify {
        pad(out, ' ', pad_total);
    }
}

/// `%f` style: fixed-point decimal.
fn format_f(value: f64, precision: usize, alt_form: bool) -> String {
    if precision == 0 {
        let body = format!("{:.0}", value);
        if alt_form {
            format!("{}.", body)
        } else {
            body
        }
    } else {
        format!("{:.prec$}", value, prec = precision)
    }
}

/// `%e` style: scientific notation with a two-digit exponent.
fn format_e(value: f64, precision: usize, uppercase: bool) -> String {
    let e_char = if uppercase { 'E' } else { 'e' };
    if value == 0.0 {
        return if precision == 0 {
            format!("0{e_char}+00")
        } else {
            format!("0.{}{e_char}+00", "0".repeat(precision))
        };
    }
    let mut exp = value.log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exp);
    // Rounding at the requested precision can push the mantissa to 10.0.
    let rounded = format!("{:.prec$}", mantissa, prec = precision);
    if rounded.starts_with("10") {
        exp += 1;
        mantissa /= 10.0;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    let abs_exp = exp.unsigned_abs();
    format!(
        "{:.prec$}{e_char}{sign}{abs_exp:02}",
        mantissa,
        prec = precision
    )
}

/// `%g` style: `%f` or `%e`, whichever is shorter per POSIX exponent rules.
fn format_g(value: f64, precision: usize, uppercase: bool, alt_form: bool) -> String {
    let p = precision.max(1);

    if value == 0.0 {
        return if alt_form && p > 1 {
            format!("0.{}", "0".repeat(p - 1))
        } else {
            "0".to_string()
        };
    }

    let exp = value.log10().floor() as i32;
    if exp >= -4 && exp < p as i32 {
        let frac_digits = (p as i32 - 1 - exp).max(0) as usize;
        let mut s = format!("{:.prec$}", value, prec = frac_digits);
        if !alt_form {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let mut s = format_e(value, p - 1, uppercase);
        if !alt_form {
            if let Some(e_pos) = s.bytes().position(|b| b == b'e' || b == b'E') {
                let mut mantissa = s[..e_pos].to_string();
                strip_trailing_zeros(&mut mantissa);
                let exponent = &s[e_pos..];
                s = format!("{mantissa}{exponent}");
            }
        }
        s
    }
}

fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_args::args;

    fn run(fmt: &str, values: Vec<Value<'_>>) -> Result<String, DirectiveError> {
        let mut out = String::new();
        let mut cursor = Args::new(values);
        write_formatted(&mut out, fmt, &mut cursor)?;
        Ok(out)
    }

    #[test]
    fn literal_passthrough() {
        assert_eq!(run("no directives here", args![]).unwrap(), "no directives here");
    }

    #[test]
    fn signed_basic() {
        assert_eq!(run("%d", args![42i32]).unwrap(), "42");
        assert_eq!(run("%d", args![-123i32]).unwrap(), "-123");
        assert_eq!(run("%i", args![7i64]).unwrap(), "7");
    }

    #[test]
    fn zero_pad_width() {
        assert_eq!(run("%02d", args![5i32]).unwrap(), "05");
        assert_eq!(run("%08d", args![42i32]).unwrap(), "00000042");
    }

    #[test]
    fn space_and_plus_flags() {
        assert_eq!(run("%+d", args![42i32]).unwrap(), "+42");
        assert_eq!(run("% d", args![42i32]).unwrap(), " 42");
        // '+' overrides ' '.
        assert_eq!(run("%+ d", args![42i32]).unwrap(), "+42");
    }

    #[test]
    fn left_justify_overrides_zero_pad() {
        assert_eq!(run("%-08d", args![42i32]).unwrap(), "42      ");
    }

    #[test]
    fn width_padding() {
        assert_eq!(run("%8d", args![42i32]).unwrap(), "      42");
        assert_eq!(run("%-8d|", args![42i32]).unwrap(), "42      |");
    }

    #[test]
    fn unsigned_and_bases() {
        assert_eq!(run("%u", args![1920u32]).unwrap(), "1920");
        assert_eq!(run("%x", args![255u32]).unwrap(), "ff");
        assert_eq!(run("%X", args![255u32]).unwrap(), "FF");
        assert_eq!(run("%o", args![8u32]).unwrap(), "10");
        assert_eq!(run("%#x", args![255u32]).unwrap(), "0xff");
        assert_eq!(run("%#o", args![8u32]).unwrap(), "010");
    }

    #[test]
    fn unsigned_accepts_nonnegative_signed() {
        assert_eq!(run("%u", args![37i32]).unwrap(), "37");
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert!(matches!(
            run("%u", args![-1i32]),
            Err(DirectiveError::Arg(ArgError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn integer_precision_zero_fills() {
        assert_eq!(run("%.5d", args![42i32]).unwrap(), "00042");
    }

    #[test]
    fn precision_zero_with_zero_value() {
        assert_eq!(run("%.0d", args![0i32]).unwrap(), "");
    }

    #[test]
    fn char_and_string() {
        assert_eq!(run("%c", args!['x']).unwrap(), "x");
        assert_eq!(run("%5c", args!['A']).unwrap(), "    A");
        assert_eq!(run("%s", args!["hello"]).unwrap(), "hello");
        assert_eq!(run("%.3s", args!["hello"]).unwrap(), "hel");
        assert_eq!(run("%8s", args!["hi"]).unwrap(), "      hi");
    }

    #[test]
    fn char_accepts_int_truncated() {
        assert_eq!(run("%c", args![65i32]).unwrap(), "A");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(run("100%%", args![]).unwrap(), "100%");
    }

    #[test]
    fn trailing_percent_is_literal() {
        assert_eq!(run("50%", args![]).unwrap(), "50%");
    }

    #[test]
    fn star_width_from_args() {
        assert_eq!(run("%*d", args![6i32, 42i32]).unwrap(), "    42");
    }

    #[test]
    fn negative_star_width_left_justifies() {
        assert_eq!(run("%*d|", args![-6i32, 42i32]).unwrap(), "42    |");
    }

    #[test]
    fn star_precision_from_args() {
        assert_eq!(run("%.*s", args![3i32, "hello"]).unwrap(), "hel");
    }

    #[test]
    fn multiple_directives_consume_in_order() {
        assert_eq!(
            run("%ux%u", args![1920u32, 1080u32]).unwrap(),
            "1920x1080"
        );
    }

    #[test]
    fn float_basic() {
        let s = run("%f", args![std::f64::consts::PI]).unwrap();
        assert_eq!(s, "3.141593");
    }

    #[test]
    fn float_precision() {
        assert_eq!(run("%.2f", args![2.5f64]).unwrap(), "2.50");
        assert_eq!(run("%.0f", args![2.5f64]).unwrap(), "2");
    }

    #[test]
    fn float_specials() {
        assert_eq!(run("%f", args![f64::NAN]).unwrap(), "nan");
        assert_eq!(run("%F", args![f64::INFINITY]).unwrap(), "INF");
        assert_eq!(run("%f", args![f64::NEG_INFINITY]).unwrap(), "-inf");
    }

    #[test]
    fn float_scientific() {
        assert_eq!(run("%.2e", args![1234.5f64]).unwrap(), "1.23e+03");
        assert_eq!(run("%e", args![0.0f64]).unwrap(), "0.000000e+00");
    }

    #[test]
    fn float_general() {
        assert_eq!(run("%g", args![100.0f64]).unwrap(), "100");
        assert_eq!(run("%g", args![0.0001f64]).unwrap(), "0.0001");
        assert_eq!(run("%g", args![1e10f64]).unwrap(), "1e+10");
    }

    #[test]
    fn length_modifiers_are_ignored() {
        assert_eq!(run("%lld", args![42i64]).unwrap(), "42");
        assert_eq!(run("%zu", args![9u64]).unwrap(), "9");
        assert_eq!(run("%hhd", args![7i32]).unwrap(), "7");
    }

    #[test]
    fn unsupported_conversions_error() {
        assert!(matches!(
            run("%p", args![0u64]),
            Err(DirectiveError::Unsupported { conversion: 'p' })
        ));
        assert!(matches!(
            run("%n", args![0u64]),
            Err(DirectiveError::Unsupported { conversion: 'n' })
        ));
    }

    #[test]
    fn unknown_conversion_is_malformed() {
        assert!(matches!(
            run("%q", args![]),
            Err(DirectiveError::Malformed { .. })
        ));
    }

    #[test]
    fn missing_argument_reported() {
        assert!(matches!(
            run("%d", args![]),
            Err(DirectiveError::Arg(ArgError::Missing { index: 0 }))
        ));
    }

    #[test]
    fn mismatch_reported() {
        assert!(matches!(
            run("%d", args!["text"]),
            Err(DirectiveError::Arg(ArgError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn failure_keeps_already_rendered_prefix() {
        let mut out = String::new();
        let mut cursor = Args::new(args![1i32]);
        let err = write_formatted(&mut out, "a=%d b=%d", &mut cursor);
        assert!(err.is_err());
        assert_eq!(out, "a=1 b=");
    }

    #[test]
    fn utf8_in_literals_and_strings() {
        assert_eq!(run("π≈%s", args!["3.14…"]).unwrap(), "π≈3.14…");
    }

    #[test]
    fn extreme_integers() {
        assert_eq!(
            run("%d", args![i64::MIN]).unwrap(),
            "-9223372036854775808"
        );
        assert_eq!(
            run("%u", args![u64::MAX]).unwrap(),
            "18446744073709551615"
        );
    }
}
