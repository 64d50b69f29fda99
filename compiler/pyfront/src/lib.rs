//! pyfront: a Python 2/3 front end.
//!
//! ```text
//! source ──► Lexer ──► CommentFilter ──► Parser ──► Ast
//!                                                    │
//!                                                    ▼
//!                                            writer / visitors
//! ```
//!
//! The pipeline is pull-based: the parser asks the comment filter for one
//! token at a time, which asks the lexer. Nothing is buffered beyond the
//! lookahead each stage needs.
//!
//! # Debugging
//!
//! - `RUST_LOG=pyfront_parse=debug`: one event per top-level statement,
//!   `def` and `class`.
//! - `RUST_LOG=pyfront_lexer=trace`: every token as it is produced.
//! - `PYFRONT_LOG_TREE=1`: render spans as an indented tree instead of flat
//!   lines.

use std::sync::Once;

pub mod commands;

pub use pyfront_ir::{module_to_string, Ast, StmtId};
pub use pyfront_lexer::{lex, CommentFilter, LexError, LexErrorKind, Lexer, TokenSource};
pub use pyfront_parse::{
    CollectingLogger, ParseError, ParseErrorKind, ParseLogger, ParseOptions, Parser,
    TracingLogger,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("PYFRONT_LOG_TREE").is_ok_and(|v| v == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
