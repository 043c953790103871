//! Specifier registry.
//!
//! The registry maps specifier names to [`Handler`]s and is consulted once
//! per specifier occurrence during a formatting call. It is a plain
//! caller-owned value: create it, hand out `&` borrows to formatting calls,
//! mutate it through `&mut`. The borrow checker enforces the original
//! contract that concurrent mutation needs external synchronization.

use std::collections::HashMap;

use sigil_args::Args;

use crate::builtins;
use crate::error::FormatError;

/// Renders one specifier occurrence.
///
/// A handler appends its output to `out`, pulls exactly the arguments its
/// contract declares from `args` (in order), and interprets `precision`
/// however it likes — the engine passes the precision text through
/// unmodified, empty when the specifier omitted it.
///
/// Any scratch state a handler builds while rendering must not outlive the
/// call; handlers hold no persistent state between invocations.
pub trait Handler {
    fn render(
        &self,
        out: &mut String,
        precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError>;
}

/// Plain functions and closures with the right shape are handlers.
///
/// This is the extension point for user-registered specifiers:
///
/// ```rust
/// use sigil::{args, Args, FormatError, Registry};
///
/// fn shout(out: &mut String, _precision: &str, args: &mut Args<'_>) -> Result<(), FormatError> {
///     let text = args.next_str()?;
///     out.push_str(&text.to_uppercase());
///     Ok(())
/// }
///
/// let mut registry = Registry::with_builtins();
/// registry.set("shout", shout);
/// assert_eq!(registry.format("$[shout]!", args!["hey"]).unwrap(), "HEY!");
/// ```
impl<F> Handler for F
where
    F: Fn(&mut String, &str, &mut Args<'_>) -> Result<(), FormatError>,
{
    fn render(
        &self,
        out: &mut String,
        precision: &str,
        args: &mut Args<'_>,
    ) -> Result<(), FormatError> {
        self(out, precision, args)
    }
}

/// Name → handler mapping consulted during parsing.
///
/// At most one handler lives per name; [`set`](Registry::set) replaces,
/// [`remove`](Registry::remove) deletes. Lookups for removed or never
/// registered names make the engine emit the `???` placeholder.
/// No ordering is guaranteed across names.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl Registry {
    /// An empty registry. Every specifier renders as `???` until handlers
    /// are registered.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A registry preloaded with the eleven built-in specifiers:
    /// `i32`, `i64`, `u32`, `u64`, `c`, `s`, `ts`, `sv`, `cstr`, `char`,
    /// and `bool`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::install(&mut registry);
        registry
    }

    /// Installs `handler` for `name`, replacing any previous handler.
    pub fn set(&mut self, name: impl Into<String>, handler: impl Handler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Removes the handler for `name`. Subsequent lookups behave as
    /// unregistered. Returns whether a handler was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    /// The current handler for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&dyn Handler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(|k| k.as_str())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("names", &names).finish()
    }
}
