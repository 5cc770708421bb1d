//! Lettercase CLI Library
//!
//! This crate provides the command-line interface for `lc`, a filter that
//! reads lines from standard input and writes them back in the selected
//! letter case.
//!
//! # Exit Codes
//!
//! - `0`: all input was converted
//! - `1`: reading input or writing output failed
//! - `2`: a line could not be converted, or `--case` was invalid
//! - `3`: input did not end within the one second watchdog window
//!
//! # Examples
//!
//! ```bash
//! # Default, lower camel case
//! echo "hello world" | lc
//!
//! # Upper kebab case
//! printf 'hello world\n' | lc --case ukebab
//!
//! # Case-insensitive style tag
//! cat names.txt | lc --case=USNAKE
//! ```

pub mod cli_args;
