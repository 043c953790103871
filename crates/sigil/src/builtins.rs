//! Built-in specifier handlers.
//!
//! One unit struct per argument kind. Each pulls exactly one value from the
//! cursor (the passthrough handler pulls as many as its directives ask for)
//! and appends its rendering to the accumulator.

use sigil_args::Args;

use crate::error::FormatError;
use crate::registry::{Handler, Registry};

pub(crate) fn install(registry: &mut Registry) {
    registry.set("i32", Int32);
    registry.set("i64", Int64);
    registry.set("u32", Uint32);
    registry.set("u64", Uint64);
    registry.set("c", Passthrough);
    registry.set("s", Text);
    registry.set("ts", TakeText);
    registry.set("sv", Text);
    registry.set("cstr", Text);
    registry.set("char", OneChar);
    registry.set("bool", BoolWord);
}

/// Decimal digits, built reversed then emitted in forward order.
fn push_decimal(out: &mut String, mut n: u64) {
    let mut buf = [0u8; 20];
    let mut len = 0;
    loop {
        buf[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    while len > 0 {
        len -= 1;
        out.push(buf[len] as char);
    }
}

struct Int32;

impl Handler for Int32 {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        let n = args.next_i32()?;
        if n < 0 {
            out.push('-');
        }
        push_decimal(out, u64::from(n.unsigned_abs()));
        Ok(())
    }
}

struct Int64;

impl Handler for Int64 {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        let n = args.next_i64()?;
        if n < 0 {
            out.push('-');
        }
        push_decimal(out, n.unsigned_abs());
        Ok(())
    }
}

struct Uint32;

impl Handler for Uint32 {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        push_decimal(out, u64::from(args.next_u32()?));
        Ok(())
    }
}

struct Uint64;

impl Handler for Uint64 {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        push_decimal(out, args.next_u64()?);
        Ok(())
    }
}

struct BoolWord;

impl Handler for BoolWord {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        out.push_str(if args.next_bool()? { "true" } else { "false" });
        Ok(())
    }
}

struct OneChar;

impl Handler for OneChar {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        out.push(args.next_char()?);
        Ok(())
    }
}

/// Borrowed or owned text copied as-is. Serves `s`, `sv`, and `cstr`, which
/// in the original differed only in the C-side argument representation.
struct Text;

impl Handler for Text {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        out.push_str(&args.next_str()?);
        Ok(())
    }
}

/// Owned text, consumed by the call. The string is dropped here, once,
/// after its contents are copied.
struct TakeText;

impl Handler for TakeText {
    fn render(
        &self,
        out: &mut String,
        _precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        let s = args.next_owned()?;
        out.push_str(&s);
        Ok(())
    }
}

/// The precision text is a secondary printf-style format string; its
/// directives decide how many further arguments get pulled.
struct Passthrough;

impl Handler for Passthrough {
    fn render(
        &self,
        out: &mut String,
        precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        sigil_printf::write_formatted(out, precision, args)?;
        Ok(())
    }
}
