//! Tokens command implementation.
//!
//! Scans one source file and prints its token stream, either as a table
//! with one token per line or as a JSON array.

use std::path::PathBuf;
use std::time::Instant;

use ash_lex::{tokenize, Number, Token};
use serde::Serialize;

use crate::commands::common::{read_source, OutputFormat};
use crate::commands::traits::{Command, CommandResult};
use crate::config::TokensConfig;
use crate::error::{AshtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file, or `-` for standard input.
    pub file: PathBuf,
    /// Output format override.
    pub format: Option<String>,
    /// Show offsets next to line numbers.
    pub offsets: bool,
}

/// One token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    value: Option<serde_json::Value>,
    line: u32,
    offset: usize,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        // JSON numbers stop at 64 bits, so larger integers are written as strings
        let value = token.number.as_ref().map(|number| match number {
            Number::Int(value) => serde_json::Value::from(*value),
            Number::Big(value) => serde_json::Value::from(value.to_string()),
            Number::Float(value) => serde_json::Value::from(*value),
        });
        Self {
            kind: token.kind.name(),
            text: token.text,
            value,
            line: token.line,
            offset: token.offset,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: TokensConfig,
}

impl TokensCommand {
    /// Use `config` for settings the arguments leave unset.
    pub fn with_config(mut self, config: TokensConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the effective tokens configuration.
    pub fn get_tokens_config(&self) -> TokensConfig {
        let mut config = self.config.clone();

        if let Some(ref format) = self.args.format {
            config.format = format.clone();
        }

        config.show_offsets |= self.args.offsets;
        config
    }

    /// Render scanned tokens in the requested format.
    pub fn render(&self, tokens: &[Token<'_>]) -> Result<String> {
        let config = self.get_tokens_config();
        match config.format.parse::<OutputFormat>()? {
            OutputFormat::Table => Ok(render_table(tokens, config.show_offsets)),
            OutputFormat::Json => {
                let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
                let mut out = serde_json::to_string_pretty(&records)?;
                out.push('\n');
                Ok(out)
            },
        }
    }
}

/// Formats tokens as `LINE[:OFFSET] KIND 'text'` rows.
fn render_table(tokens: &[Token<'_>], show_offsets: bool) -> String {
    tokens
        .iter()
        .map(|token| {
            let position = if show_offsets {
                format!("{}:{}", token.line, token.offset)
            } else {
                token.line.to_string()
            };
            format!(
                "{:<10} {:<20} '{}'\n",
                position,
                token.kind.name(),
                token.text.escape_debug()
            )
        })
        .collect()
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult;

    fn new(args: TokensArgs) -> Self {
        Self {
            args,
            config: TokensConfig::default(),
        }
    }

    fn execute(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        let (path, source) = read_source(&self.args.file)?;

        let tokens = tokenize(&source).map_err(|source| AshtError::Lex {
            path: path.clone(),
            source,
        })?;

        print!("{}", self.render(&tokens)?);

        let elapsed = start_time.elapsed();
        if self.args.verbose {
            tracing::info!(
                path = %path.display(),
                tokens = tokens.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "scan complete"
            );
        }

        Ok(CommandResult::default()
            .with_items_processed(tokens.len())
            .with_execution_time_ms(elapsed.as_millis() as u64))
    }

    fn name() -> &'static str {
        "tokens"
    }
}
