//! The `fmt` command: parse a file and write the tree back as source.

use pyfront_ir::module_to_string;
use pyfront_parse::{CollectingLogger, ParseError, ParseOptions, Parser};

use super::read_file;

/// Rendered source plus the errors recovery skipped over.
#[derive(Debug)]
pub struct Formatted {
    pub text: String,
    pub recovered: Vec<ParseError>,
}

/// Parse `source` and render it with the source writer.
pub fn format_source(
    filename: &str,
    source: &str,
    options: ParseOptions,
) -> Result<Formatted, ParseError> {
    let mut parser =
        Parser::with_options(filename, source, options).with_logger(CollectingLogger::new());
    let stmts = parser.parse_module()?;
    let text = module_to_string(parser.ast(), &stmts);
    Ok(Formatted {
        text,
        recovered: parser.logger().errors().to_vec(),
    })
}

/// Format a file to stdout. Recovered errors go to stderr.
pub fn format_file(path: &str, options: ParseOptions) {
    let content = read_file(path);
    match format_source(path, &content, options) {
        Ok(formatted) => {
            for err in &formatted.recovered {
                eprintln!("{err}");
            }
            print!("{}", formatted.text);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
