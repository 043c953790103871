//! Runtime-extensible string formatting with a `$[name|precision]` grammar.
//!
//! A template is scanned once, left to right. Literal text passes through
//! to an output sink; each `$[...]` specifier is resolved by name through a
//! caller-owned [`Registry`] and rendered by its [`Handler`] against an
//! ordered list of tagged argument [`Value`]s.
//!
//! # Example
//!
//! ```rust
//! use sigil::{args, Registry};
//!
//! let registry = Registry::with_builtins();
//!
//! let out = registry
//!     .format("$[s] has $[u32] item(s), ok=$[bool]", args!["cart", 3u32, true])
//!     .unwrap();
//! assert_eq!(out, "cart has 3 item(s), ok=true");
//!
//! // The `c` specifier's precision is a printf-style format string.
//! let out = registry
//!     .format("$[cstr]: $[c|%ux%u]", args!["Screen resolution", 1920u32, 1080u32])
//!     .unwrap();
//! assert_eq!(out, "Screen resolution: 1920x1080");
//! ```
//!
//! # Template grammar
//!
//! - `$[name]` or `$[name|precision]` is a specifier. `name` is looked up
//!   in the registry; `precision` is free text interpreted only by the
//!   matched handler (empty and omitted are equivalent). Specifiers do not
//!   nest, and a specifier opened but never closed before the end of the
//!   template is dropped silently.
//! - `\\` (two backslashes) collapses to one literal backslash; a `$`
//!   preceded by an odd number of backslashes does not open a specifier.
//!   A lone backslash emits nothing. (The original library's header docs
//!   described `$$` doubling instead, but its parser implemented backslash
//!   doubling; the parser's behavior is kept here.)
//! - An unregistered specifier name renders as `???` and consumes no
//!   argument.
//! - Everything else passes through verbatim.
//!
//! # Built-in specifiers
//!
//! | Name | Pulls | Output |
//! |------|-------|--------|
//! | `i32`, `i64` | that integer tag | signed decimal |
//! | `u32`, `u64` | that integer tag | unsigned decimal |
//! | `bool` | `Value::Bool` | `true` / `false` |
//! | `char` | `Value::Char` | the character |
//! | `s`, `sv`, `cstr` | any text value | contents |
//! | `ts` | `Value::Owned` | contents; the `String` is consumed |
//! | `c` | per its precision's directives | printf-style rendering (see `sigil-printf`) |
//!
//! # Errors and ordering
//!
//! Within one call, sink chunks arrive in strict template order and
//! arguments are consumed in strict specifier order. The first failing
//! handler or sink aborts the call with a [`FormatError`]; output already
//! delivered to the sink stays delivered. A specifier/argument mismatch is
//! a reported error, never undefined behavior.
//!
//! # Threading
//!
//! A [`Registry`] is an ordinary value: share `&Registry` across calls,
//! mutate through `&mut Registry`. Nothing here synchronizes internally.

mod builtins;
mod engine;
pub mod error;
pub mod registry;
pub mod writer;

pub use error::FormatError;
pub use registry::{Handler, Registry};
pub use writer::{StreamWriter, Writer};

pub use sigil_args::{args, ArgError, Args, Value};
pub use sigil_printf::DirectiveError;
