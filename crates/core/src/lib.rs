//! Lettercase Core Library
//!
//! This crate provides the core functionality for `lc`, a line-oriented filter
//! that rewrites the letter-case convention of every line it reads.
//!
//! # Key Features
//!
//! - **Case Styles**: Six fixed conventions, resolved from a command-line tag
//! - **Line Pipeline**: Ordered read-convert-write loop with a one-shot watchdog
//! - **Exit Outcomes**: Success, conversion error and timeout map to exit codes
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Converting standard input to snake case:
//!
//! ```no_run
//! use lettercase_core::config::PipelineConfig;
//! use lettercase_core::pipeline::Pipeline;
//! use lettercase_core::style::Style;
//!
//! let style = Style::resolve("snake")?;
//! let outcome = Pipeline::new(PipelineConfig::new(style)).run(
//!     std::io::BufReader::new(std::io::stdin()),
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! )?;
//! std::process::exit(i32::from(outcome.exit_code()));
//! # Ok::<(), lettercase_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod style;
