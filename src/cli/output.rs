//! Output formatting for the retok CLI.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, RetokArgs};
use crate::error::Result;
use crate::retokenizer::Retokenizer;

/// How each input line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub with_type: bool,
    pub pretty: bool,
}

impl OutputOptions {
    pub fn from_args(args: &RetokArgs) -> Self {
        OutputOptions {
            format: args.output_format,
            with_type: args.with_type,
            pretty: args.pretty,
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            format: OutputFormat::Text,
            with_type: false,
            pretty: false,
        }
    }
}

/// JSON document written for one input line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineTokens {
    /// 1-based line number in the input.
    pub line: usize,
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Tokenize `text` and write its rendering followed by a newline.
pub fn write_line<W: Write>(
    writer: &mut W,
    retokenizer: &mut Retokenizer,
    line: usize,
    text: &str,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            let joined = retokenizer.tokenize_with_spaces(text, options.with_type)?;
            writeln!(writer, "{joined}")?;
        }
        OutputFormat::Debug => {
            let entries = retokenizer.tokens_as_debug_strings(text)?;
            writeln!(writer, "{}", entries.join(" "))?;
        }
        OutputFormat::Json => {
            let document = LineTokens {
                line,
                text: text.to_string(),
                tokens: retokenizer.tokens(text)?,
            };
            if options.pretty {
                serde_json::to_writer_pretty(&mut *writer, &document)?;
            } else {
                serde_json::to_writer(&mut *writer, &document)?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
