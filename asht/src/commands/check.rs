//! Check command implementation.
//!
//! Scans many source files in parallel and reports every file that fails
//! to tokenize as `path:line:offset: message`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use ash_lex::{tokenize, LexError};
use rayon::prelude::*;

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::{Command, CommandResult};
use crate::config::CheckConfig;
use crate::error::{AshtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Parallel job count override.
    pub jobs: Option<usize>,
}

/// Outcome of scanning one file.
#[derive(Debug)]
pub struct FileReport {
    /// The file that was scanned.
    pub path: PathBuf,
    /// Token count on success.
    pub outcome: Result<usize>,
}

impl FileReport {
    /// Formats a failure as a single diagnostic line, `None` on success.
    pub fn diagnostic(&self) -> Option<String> {
        let err = self.outcome.as_ref().err()?;
        Some(match err {
            AshtError::Lex { source, .. } => format!(
                "{}:{}:{}: {}",
                self.path.display(),
                source.line(),
                source.offset(),
                describe(source)
            ),
            other => format!("{}: {}", self.path.display(), other),
        })
    }
}

/// Short message for a scanner error, without its position.
fn describe(err: &LexError) -> String {
    match err {
        LexError::IllegalCharacter { ch, .. } => format!("illegal character {:?}", ch),
        LexError::UnterminatedString { .. } => "unterminated string literal".to_string(),
        LexError::MalformedNumericLiteral { text, .. } => {
            format!("malformed numeric literal {:?}", text)
        },
    }
}

/// Scans a single file to the end.
fn check_file(path: &Path) -> Result<usize> {
    let (display, source) = read_source(path)?;
    let count = tokenize(&source)
        .map_err(|source| AshtError::Lex {
            path: display.clone(),
            source,
        })?
        .len();
    let shown = display.display();
    tracing::debug!(path = %shown, tokens = count, "file ok");
    Ok(count)
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: CheckConfig,
}

impl CheckCommand {
    /// Use `config` for settings the arguments leave unset.
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Effective number of worker threads.
    pub fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.jobs)
    }

    fn validate(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(AshtError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }
        if self.jobs() == 0 {
            return Err(AshtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }
        Ok(())
    }

    /// Scans every file on a dedicated pool, keeping input order.
    pub fn scan_all(&self) -> Result<Vec<FileReport>> {
        self.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .map_err(|e| AshtError::Config(format!("Failed to start worker pool: {}", e)))?;

        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| FileReport {
                    path: path.clone(),
                    outcome: check_file(path),
                })
                .collect()
        }))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: CheckArgs) -> Self {
        Self {
            args,
            config: CheckConfig::default(),
        }
    }

    fn execute(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        let reports = self.scan_all()?;

        let mut failed = 0;
        for diagnostic in reports.iter().filter_map(FileReport::diagnostic) {
            failed += 1;
            println!("{}", diagnostic);
        }

        let total = reports.len();
        println!("checked {} file(s): {} ok, {} failed", total, total - failed, failed);

        let elapsed = start_time.elapsed();
        if self.args.verbose {
            tracing::info!(
                files = total,
                jobs = self.jobs(),
                elapsed_ms = elapsed.as_millis() as u64,
                "check complete"
            );
        }

        let result = CommandResult::default()
            .with_items_processed(total)
            .with_items_failed(failed)
            .with_execution_time_ms(elapsed.as_millis() as u64);
        if !result.success() {
            return Err(AshtError::Validation(format!(
                "{} {}",
                failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}
