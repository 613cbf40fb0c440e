use thiserror::Error;

/// Errors that can occur while rendering or writing a painter class.
///
/// Generation itself cannot fail: the shape and paint variants are closed enums, and
/// numeric-encoding anomalies are clamped rather than raised. Errors only arise in the
/// template and file-writing path.
#[derive(Debug, Error)]
pub enum Error {
    /// The class template referenced a substitution variable no fragment provides.
    #[error("template variable ${{{0}}} has no substitution")]
    MissingVariable(String),
    /// Writing the rendered painter source failed.
    #[error("failed to write painter source: {0}")]
    Io(#[from] std::io::Error),
}
