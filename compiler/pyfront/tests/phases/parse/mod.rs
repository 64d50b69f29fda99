//! Front end phase tests.
//!
//! - `lexer` - token recognition and indentation through the public API
//! - `comment_filter` - dedent placement around comment runs
//! - `parser` - grammar coverage on realistic modules
//! - `recovery` - recovery mode and error reporting
//! - `writer` - rendered output and CLI command helpers

mod comment_filter;
mod lexer;
mod parser;
mod recovery;
mod writer;
