//! Error type for formatting calls.
//!
//! Every fallible step of a formatting call funnels into [`FormatError`].
//! An unknown specifier name is deliberately *not* here: it renders as the
//! `???` placeholder and the call continues.

use sigil_args::ArgError;
use sigil_printf::DirectiveError;

/// Error produced by a formatting call.
///
/// The first non-OK result from a handler or a sink aborts the whole call
/// and surfaces here. Chunks already delivered to the sink stay delivered;
/// there is no rollback.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A built-in handler pulled an argument that was missing or mistagged.
    #[error("argument error: {0}")]
    Argument(#[from] ArgError),

    /// The passthrough specifier's precision string failed to render.
    #[error("passthrough error: {0}")]
    Directive(#[from] DirectiveError),

    /// The output sink reported an I/O failure.
    #[error("sink error: {0}")]
    Sink(#[from] std::io::Error),

    /// Free-form failure from a user-registered handler.
    #[error("handler error: {0}")]
    Handler(String),
}
