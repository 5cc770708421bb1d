//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. The `--case` value is resolved against the style registry while
//! parsing, so an unknown style is rejected before any input is read.

use clap::Parser;
use lettercase_core::config::PipelineConfig;
use lettercase_core::style::Style;

/// Command-line arguments for the `lc` filter.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use lettercase_cli::cli_args::Args;
/// use lettercase_core::style::Style;
///
/// let args = Args::parse_from(["lc", "--case", "snake"]);
/// assert_eq!(args.case, Style::Snake);
/// ```
#[derive(Parser, Debug)]
#[command(version, about, term_width = 0)]
pub struct Args {
    /// Output letter case.
    ///
    /// One of `camel` (lower camel case), `ucamel` (upper camel case), `kebab`,
    /// `ukebab`, `snake` or `usnake`. Matched case-insensitively.
    #[arg(long, short = 'c', default_value = "camel", value_parser = Style::resolve)]
    pub case: Style,
}

impl Args {
    /// Builds the pipeline configuration for this invocation.
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(self.case)
    }
}
