use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Unknown case `{}`, expected one of: camel, ucamel, kebab, ukebab, snake, usnake",
        .0
    )]
    UnrecognizedStyle(String),

    #[error("No {} rule could be applied to input `{}`", .style, .input)]
    ConversionFailed { style: String, input: String },

    #[error("Error reading input: {}", .0)]
    Input(std::io::Error),

    #[error("Error writing output: {}", .0)]
    Output(std::io::Error),
}

impl Error {
    pub fn conversion_failed(style: String, input: String) -> Self {
        Self::ConversionFailed { style, input }
    }
}
