//! Pipeline configuration.
//!
//! There is no configuration file; everything is chosen at process start from
//! command-line options and these defaults.

use std::time::Duration;

use crate::style::Style;

/// How long a run may take before the watchdog aborts it.
///
/// Armed once when the pipeline starts and never reset per line.
pub const DEFAULT_WATCHDOG_TIMEOUT: Duration = Duration::from_secs(1);

/// Settings for a single [`Pipeline`](crate::pipeline::Pipeline) run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lettercase_core::config::PipelineConfig;
/// use lettercase_core::style::Style;
///
/// let config = PipelineConfig::default()
///     .with_style(Style::Snake)
///     .with_watchdog(Duration::from_millis(250));
/// assert_eq!(config.style, Style::Snake);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub style: Style,
    pub watchdog: Duration,
}

impl PipelineConfig {
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            style,
            watchdog: DEFAULT_WATCHDOG_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_watchdog(mut self, watchdog: Duration) -> Self {
        self.watchdog = watchdog;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.style, Style::LowerCamel);
        assert_eq!(config.watchdog, Duration::from_secs(1));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = PipelineConfig::new(Style::Kebab).with_watchdog(Duration::from_millis(10));
        assert_eq!(config.style, Style::Kebab);
        assert_eq!(config.watchdog, Duration::from_millis(10));

        let config = config.with_style(Style::UpperSnake);
        assert_eq!(config.style, Style::UpperSnake);
        assert_eq!(config.watchdog, Duration::from_millis(10));
    }
}
