//! The read-convert-write loop.
//!
//! A background thread reads lines and hands them over one at a time through a
//! rendezvous channel. The calling thread converts and writes each line in
//! order, and gives up once the watchdog deadline set at start has passed.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::time::Instant;

use log::{debug, trace};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};

/// How a run ended. Maps one-to-one onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was exhausted and every line was written.
    Success,
    /// A line could not be converted; the run stopped at that line.
    ConversionError,
    /// The watchdog fired before the input ended.
    Timeout,
}

impl Outcome {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::ConversionError => 2,
            Outcome::Timeout => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Converting,
    Emitting,
    Draining,
    Terminated,
}

enum Event {
    Line(String),
    ReadFailed(std::io::Error),
}

/// Line filter bound to one [`PipelineConfig`].
///
/// # Examples
///
/// ```
/// use lettercase_core::config::PipelineConfig;
/// use lettercase_core::pipeline::{Outcome, Pipeline};
/// use lettercase_core::style::Style;
///
/// let pipeline = Pipeline::new(PipelineConfig::new(Style::Kebab));
/// let mut output = Vec::new();
/// let mut diagnostics = Vec::new();
///
/// let outcome = pipeline
///     .run(&b"hello world\n"[..], &mut output, &mut diagnostics)
///     .unwrap();
///
/// assert_eq!(outcome, Outcome::Success);
/// assert_eq!(output, b"hello-world\n");
/// ```
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reads `input` to the end, writing one converted line to `output` per
    /// input line.
    ///
    /// A conversion failure is written to `diagnostics` and ends the run with
    /// [`Outcome::ConversionError`]. If the input has not ended when the
    /// watchdog expires the run ends with [`Outcome::Timeout`]; the reader
    /// thread is left blocked on `input` in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if reading `input` fails and [`Error::Output`]
    /// if writing to `output` or `diagnostics` fails.
    pub fn run<R, W, E>(&self, input: R, output: &mut W, diagnostics: &mut E) -> Result<Outcome>
    where
        R: BufRead + Send + 'static,
        W: Write,
        E: Write,
    {
        let style = self.config.style;
        self.drive(input, output, diagnostics, |line| style.convert(line))
    }

    fn drive<R, W, E, F>(
        &self,
        input: R,
        output: &mut W,
        diagnostics: &mut E,
        convert: F,
    ) -> Result<Outcome>
    where
        R: BufRead + Send + 'static,
        W: Write,
        E: Write,
        F: Fn(&str) -> Result<String>,
    {
        debug!(
            "Starting pipeline with style {} and a {:?} watchdog",
            self.config.style, self.config.watchdog
        );

        let deadline = Instant::now() + self.config.watchdog;
        let lines = spawn_reader(input)?;
        let mut state = State::Idle;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                debug!("Watchdog expired");
                transition(&mut state, State::Terminated);
                return Ok(Outcome::Timeout);
            }

            match lines.recv_timeout(remaining) {
                Ok(Event::Line(line)) => {
                    transition(&mut state, State::Converting);
                    match convert(&line) {
                        Ok(converted) => {
                            transition(&mut state, State::Emitting);
                            writeln!(output, "{converted}").map_err(Error::Output)?;
                            output.flush().map_err(Error::Output)?;
                            transition(&mut state, State::Idle);
                        }
                        Err(e) => {
                            debug!("Conversion failed, stopping: {}", e);
                            writeln!(diagnostics, "{e}").map_err(Error::Output)?;
                            transition(&mut state, State::Terminated);
                            return Ok(Outcome::ConversionError);
                        }
                    }
                }
                Ok(Event::ReadFailed(e)) => {
                    transition(&mut state, State::Terminated);
                    return Err(Error::Input(e));
                }
                Err(RecvTimeoutError::Timeout) => {
                    debug!("Watchdog expired");
                    transition(&mut state, State::Terminated);
                    return Ok(Outcome::Timeout);
                }
                Err(RecvTimeoutError::Disconnected) => {
                    transition(&mut state, State::Draining);
                    output.flush().map_err(Error::Output)?;
                    transition(&mut state, State::Terminated);
                    return Ok(Outcome::Success);
                }
            }
        }
    }
}

fn transition(state: &mut State, next: State) {
    trace!("{:?} -> {:?}", state, next);
    *state = next;
}

/// Starts the producer thread. The channel has no buffer, so the producer
/// waits for each line to be taken before reading the next one. Dropping the
/// sender marks the end of input.
fn spawn_reader<R>(input: R) -> Result<Receiver<Event>>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(0);

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || read_lines(input, &sender))
        .map_err(Error::Input)?;

    Ok(receiver)
}

fn read_lines<R: BufRead>(mut input: R, sender: &SyncSender<Event>) {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let event = match input.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => Event::Line(decode_line(&buffer)),
            Err(e) => Event::ReadFailed(e),
        };
        let failed = matches!(event, Event::ReadFailed(_));

        if sender.send(event).is_err() || failed {
            // The consumer has stopped, or there is nothing more to read.
            return;
        }
    }
    trace!("Input exhausted");
}

/// Drops the line terminator (`\n` or `\r\n`). Bytes that are not valid UTF-8
/// become U+FFFD rather than failing the run.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use std::io::Cursor;

    fn pipeline(style: Style) -> Pipeline {
        Pipeline::new(PipelineConfig::new(style))
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::ConversionError.exit_code(), 2);
        assert_eq!(Outcome::Timeout.exit_code(), 3);
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        let outcome = pipeline(Style::LowerCamel)
            .run(Cursor::new(Vec::new()), &mut output, &mut diagnostics)
            .unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert!(output.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_final_line_without_newline_is_emitted() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        let outcome = pipeline(Style::Snake)
            .run(Cursor::new("foo bar\nbaz qux"), &mut output, &mut diagnostics)
            .unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(String::from_utf8(output).unwrap(), "foo_bar\nbaz_qux\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        pipeline(Style::UpperCamel)
            .run(Cursor::new("foo bar\r\n"), &mut output, &mut diagnostics)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "FooBar\n");
    }

    #[test]
    fn test_conversion_error_stops_the_run() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        let outcome = pipeline(Style::Snake)
            .drive(
                Cursor::new("first line\nbad line\nthird line\n"),
                &mut output,
                &mut diagnostics,
                |line| {
                    if line.starts_with("bad") {
                        Err(Error::conversion_failed(
                            "SnakeCase".to_string(),
                            line.to_string(),
                        ))
                    } else {
                        Style::Snake.convert(line)
                    }
                },
            )
            .unwrap();

        assert_eq!(outcome, Outcome::ConversionError);
        assert_eq!(String::from_utf8(output).unwrap(), "first_line\n");
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "No SnakeCase rule could be applied to input `bad line`\n"
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced_and_the_run_continues() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        let outcome = pipeline(Style::Snake)
            .run(
                Cursor::new(b"hello world\ncaf\xe9 au lait\nlast one\n".to_vec()),
                &mut output,
                &mut diagnostics,
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "hello_world\ncaf\u{fffd}_au_lait\nlast_one\n"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_decode_line_strips_terminators() {
        assert_eq!(decode_line(b"foo\n"), "foo");
        assert_eq!(decode_line(b"foo\r\n"), "foo");
        assert_eq!(decode_line(b"foo"), "foo");
        assert_eq!(decode_line(b"\n"), "");
        assert_eq!(decode_line(b"a\xffb\n"), "a\u{fffd}b");
    }

    #[test]
    fn test_zero_watchdog_times_out_immediately() {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();

        let pipeline = Pipeline::new(
            PipelineConfig::new(Style::Snake).with_watchdog(std::time::Duration::ZERO),
        );
        let outcome = pipeline
            .run(Cursor::new("foo bar\n"), &mut output, &mut diagnostics)
            .unwrap();

        assert_eq!(outcome, Outcome::Timeout);
        assert!(output.is_empty());
    }
}
