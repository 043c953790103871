//! The parser/dispatcher: a single forward pass over the template.
//!
//! The scanner keeps four cursors — start of the pending literal chunk,
//! start of the open specifier name (if any), start of its precision (if
//! any), and a run counter of consecutive backslashes. Literal runs go to
//! the sink as they are cut off by escapes or specifier openers; each
//! closed specifier is resolved through the registry and its handler's
//! output forwarded as one chunk. The first non-OK result from a handler
//! or the sink aborts the call.
//!
//! All grammar bytes (`$`, `[`, `|`, `]`, `\`) are ASCII, so the byte-wise
//! scan only ever slices the template at character boundaries.

use sigil_args::{Args, Value};

use crate::error::FormatError;
use crate::registry::Registry;
use crate::writer::{StreamWriter, Writer};

/// What an unregistered specifier renders as.
const UNKNOWN_PLACEHOLDER: &str = "???";

impl Registry {
    /// Renders `template` into `sink`, pulling arguments left-to-right.
    ///
    /// Sink chunks arrive in strict template order. On error, chunks
    /// already delivered stay delivered.
    pub fn write(
        &self,
        template: &str,
        args: Vec<Value<'_>>,
        sink: &mut dyn Writer,
    ) -> Result<(), FormatError> {
        let mut cursor = Args::new(args);
        scan(self, template, &mut cursor, sink)
    }

    /// Renders `template` to a fresh `String`.
    pub fn format(&self, template: &str, args: Vec<Value<'_>>) -> Result<String, FormatError> {
        let mut out = String::new();
        self.write(template, args, &mut out)?;
        Ok(out)
    }

    /// Renders `template` appended onto `out`, avoiding the extra copy.
    pub fn format_into(
        &self,
        out: &mut String,
        template: &str,
        args: Vec<Value<'_>>,
    ) -> Result<(), FormatError> {
        self.write(template, args, out)
    }

    /// Renders `template` to the process standard output stream.
    pub fn print(&self, template: &str, args: Vec<Value<'_>>) -> Result<(), FormatError> {
        self.write(template, args, &mut StreamWriter::stdout())
    }

    /// Renders `template` to the process standard error stream.
    pub fn eprint(&self, template: &str, args: Vec<Value<'_>>) -> Result<(), FormatError> {
        self.write(template, args, &mut StreamWriter::stderr())
    }
}

fn scan(
    registry: &Registry,
    template: &str,
    args: &mut Args<'_>,
    sink: &mut dyn Writer,
) -> Result<(), FormatError> {
    let bytes = template.as_bytes();
    let mut chunk_start = 0usize;
    let mut spec_start: Option<usize> = None;
    let mut prec_start: Option<usize> = None;
    let mut escape_run = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];

        if let Some(name_start) = spec_start {
            // Inside a specifier, bytes belong to the name or precision
            // span until the closing bracket. No escape processing here:
            // precision is free text handed to the handler unmodified.
            if c == b'|' && prec_start.is_none() {
                prec_start = Some(i + 1);
            } else if c == b']' {
                let name_end = prec_start.map_or(i, |p| p - 1);
                let name = &template[name_start..name_end];
                let precision = prec_start.map_or("", |p| &template[p..i]);
                dispatch(registry, name, precision, args, sink)?;
                chunk_start = i + 1;
                spec_start = None;
                prec_start = None;
            }
            i += 1;
            continue;
        }

        // The opener is the two-byte sequence "$[", recognized only when
        // no specifier is open and the '$' is not itself escaped.
        if c == b'$' && escape_run % 2 == 0 && bytes.get(i + 1) == Some(&b'[') {
            flush(sink, &template[chunk_start..i])?;
            spec_start = Some(i + 2);
            escape_run = 0;
            i += 2;
            continue;
        }

        if c == b'\\' {
            flush(sink, &template[chunk_start..i])?;
            chunk_start = i + 1;
            escape_run += 1;
            // A matched pair collapses to one literal backslash; an odd
            // trailing backslash emits nothing.
            if escape_run % 2 == 0 {
                sink.write_chunk("\\")?;
            }
        } else {
            escape_run = 0;
        }
        i += 1;
    }

    // Trailing literal chunk. A specifier still open here was never
    // terminated: its tail is dropped silently, no placeholder. The
    // literal text before its opener already went out when it opened.
    if spec_start.is_none() {
        flush(sink, &template[chunk_start..])?;
    }

    Ok(())
}

fn dispatch(
    registry: &Registry,
    name: &str,
    precision: &str,
    args: &mut Args<'_>,
    sink: &mut dyn Writer,
) -> Result<(), FormatError> {
    match registry.get(name) {
        Some(handler) => {
            // Fresh accumulator per occurrence; discarded either way.
            let mut rendered = String::new();
            handler.render(&mut rendered, precision, args)?;
            sink.write_chunk(&rendered)
        }
        // Unknown names are non-fatal and consume no arguments.
        None => sink.write_chunk(UNKNOWN_PLACEHOLDER),
    }
}

fn flush(sink: &mut dyn Writer, chunk: &str) -> Result<(), FormatError> {
    if chunk.is_empty() {
        return Ok(());
    }
    sink.write_chunk(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use sigil_args::ArgError;

    fn fmt(template: &str, values: Vec<Value<'_>>) -> Result<String, FormatError> {
        Registry::with_builtins().format(template, values)
    }

    #[test]
    fn plain_text_passthrough() {
        assert_eq!(fmt("hello world", args![]).unwrap(), "hello world");
        assert_eq!(fmt("", args![]).unwrap(), "");
    }

    #[test]
    fn lone_dollar_and_brackets_are_literal() {
        assert_eq!(fmt("cost: $5 [sic]", args![]).unwrap(), "cost: $5 [sic]");
        assert_eq!(fmt("trailing $", args![]).unwrap(), "trailing $");
    }

    #[test]
    fn integer_specifiers() {
        assert_eq!(fmt("$[i32] $[i64]", args![23i32, -9i64]).unwrap(), "23 -9");
        assert_eq!(fmt("$[u32]/$[u64]", args![7u32, 8u64]).unwrap(), "7/8");
    }

    #[test]
    fn empty_precision_equals_omitted() {
        assert_eq!(
            fmt("$[i32] $[i32|]", args![23i32, -37i32]).unwrap(),
            "23 -37"
        );
    }

    #[test]
    fn string_specifiers() {
        assert_eq!(fmt("$[s]", args!["abc"]).unwrap(), "abc");
        assert_eq!(fmt("$[sv]", args!["view"]).unwrap(), "view");
        assert_eq!(fmt("$[cstr]", args!["raw"]).unwrap(), "raw");
        assert_eq!(fmt("$[ts]", args![String::from("owned")]).unwrap(), "owned");
    }

    #[test]
    fn bool_and_char_specifiers() {
        assert_eq!(fmt("$[bool]-$[char]", args![true, 'x']).unwrap(), "true-x");
    }

    #[test]
    fn passthrough_precision_is_a_format_string() {
        assert_eq!(fmt("$[c|%02d]", args![5i32]).unwrap(), "05");
        assert_eq!(
            fmt("$[cstr]: $[c|%ux%u]", args!["Screen resolution", 1920u32, 1080u32]).unwrap(),
            "Screen resolution: 1920x1080"
        );
    }

    #[test]
    fn unknown_specifier_renders_placeholder() {
        assert_eq!(fmt("a $[nope] b", args![]).unwrap(), "a ??? b");
    }

    #[test]
    fn unknown_specifier_consumes_no_argument() {
        assert_eq!(
            fmt("$[nope] $[i32]", args![23i32]).unwrap(),
            "??? 23"
        );
    }

    #[test]
    fn escaped_backslash_collapses_to_one() {
        assert_eq!(fmt(r"a\\b", args![]).unwrap(), r"a\b");
        assert_eq!(fmt(r"\\\\", args![]).unwrap(), r"\\");
    }

    #[test]
    fn lone_backslash_emits_nothing() {
        assert_eq!(fmt(r"a\b", args![]).unwrap(), "ab");
        assert_eq!(fmt(r"end\", args![]).unwrap(), "end");
    }

    #[test]
    fn escaped_opener_is_literal() {
        assert_eq!(fmt(r"\$[i32]", args![]).unwrap(), "$[i32]");
    }

    #[test]
    fn double_escape_before_opener_keeps_specifier_live() {
        assert_eq!(fmt(r"\\$[i32]", args![42i32]).unwrap(), r"\42");
    }

    #[test]
    fn unterminated_specifier_dropped_silently() {
        assert_eq!(fmt("before $[i32", args![1i32]).unwrap(), "before ");
        assert_eq!(fmt("$[", args![]).unwrap(), "");
    }

    #[test]
    fn no_nesting_inside_open_specifier() {
        // A "$[" inside an open specifier is part of the name, not a new
        // opener; the name fails lookup and renders the placeholder.
        assert_eq!(fmt("$[a$[b]", args![]).unwrap(), "???");
    }

    #[test]
    fn precision_may_contain_grammar_bytes() {
        // First '|' splits name and precision; later bytes up to ']' are
        // precision text, handed over untouched.
        let mut registry = Registry::new();
        fn echo(
            out: &mut String,
            precision: &str,
            _args: &mut Args<'_>,
        ) -> Result<(), FormatError> {
            out.push_str(precision);
            Ok(())
        }
        registry.set("echo", echo);
        assert_eq!(
            registry.format("$[echo|a|$\\b]", args![]).unwrap(),
            "a|$\\b"
        );
    }

    #[test]
    fn missing_argument_is_an_error() {
        assert!(matches!(
            fmt("$[i32]", args![]),
            Err(FormatError::Argument(ArgError::Missing { index: 0 }))
        ));
    }

    #[test]
    fn mismatched_argument_is_an_error() {
        assert!(matches!(
            fmt("$[bool]", args![1i32]),
            Err(FormatError::Argument(ArgError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn handler_failure_aborts_and_keeps_prefix() {
        let registry = Registry::with_builtins();
        let mut out = String::new();
        let err = registry.write("ok $[i32] bad $[i32]", args![1i32], &mut out);
        assert!(err.is_err());
        // The failing specifier's partial output is discarded; everything
        // before it stays.
        assert_eq!(out, "ok 1 bad ");
    }

    #[test]
    fn sink_failure_aborts_with_sink_error() {
        struct FailAfter(usize);

        impl Writer for FailAfter {
            fn write_chunk(&mut self, _chunk: &str) -> Result<(), FormatError> {
                if self.0 == 0 {
                    return Err(FormatError::Sink(std::io::Error::new(
                        std::io::ErrorKind::WriteZero,
                        "full",
                    )));
                }
                self.0 -= 1;
                Ok(())
            }
        }

        let registry = Registry::with_builtins();
        let err = registry
            .write("a $[i32] b", args![1i32], &mut FailAfter(1))
            .unwrap_err();
        assert!(matches!(err, FormatError::Sink(_)));
    }

    #[test]
    fn format_into_appends() {
        let registry = Registry::with_builtins();
        let mut out = String::from("log: ");
        registry
            .format_into(&mut out, "$[s]=$[u32]", args!["retries", 3u32])
            .unwrap();
        assert_eq!(out, "log: retries=3");
    }

    #[test]
    fn override_builtin_changes_subsequent_calls() {
        fn yesno(
            out: &mut String,
            _precision: &str,
            args: &mut Args<'_>,
        ) -> Result<(), FormatError> {
            out.push_str(if args.next_bool()? { "yes" } else { "no" });
            Ok(())
        }

        let mut registry = Registry::with_builtins();
        let before = registry.format("$[bool]", args![true]).unwrap();
        registry.set("bool", yesno);
        let after = registry.format("$[bool]", args![true]).unwrap();
        assert_eq!((before.as_str(), after.as_str()), ("true", "yes"));

        registry.remove("bool");
        assert_eq!(registry.format("$[bool]", args![]).unwrap(), "???");
    }

    #[test]
    fn formatting_is_idempotent() {
        let registry = Registry::with_builtins();
        let a = registry
            .format("$[i32] $[s] $[bool]", args![5i32, "x", false])
            .unwrap();
        let b = registry
            .format("$[i32] $[s] $[bool]", args![5i32, "x", false])
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn owned_strings_consumed_once_each() {
        // Each Owned value moves into the call and is dropped by the `ts`
        // handler after copying; a second use of the same String cannot
        // even be written. One render per value is what we can observe.
        let registry = Registry::with_builtins();
        let out = registry
            .format("$[ts]+$[ts]", args![String::from("a"), String::from("b")])
            .unwrap();
        assert_eq!(out, "a+b");
    }

    #[test]
    fn utf8_literals_and_arguments() {
        assert_eq!(
            fmt("héllo $[s] wörld", args!["ünïcode"]).unwrap(),
            "héllo ünïcode wörld"
        );
    }

    #[test]
    fn chunks_arrive_in_template_order() {
        struct Recorder(Vec<String>);

        impl Writer for Recorder {
            fn write_chunk(&mut self, chunk: &str) -> Result<(), FormatError> {
                self.0.push(chunk.to_string());
                Ok(())
            }
        }

        let registry = Registry::with_builtins();
        let mut recorder = Recorder(Vec::new());
        registry
            .write("a $[i32] b $[nope] c", args![1i32], &mut recorder)
            .unwrap();
        assert_eq!(recorder.0, ["a ", "1", " b ", "???", " c"]);
    }
}
