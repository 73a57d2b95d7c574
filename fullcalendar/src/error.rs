use std::path::PathBuf;

/// Errors that can occur while resolving a fullcalendar template tag
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested handlebars template does not exist in the
    /// configured templates directory. This is a deployment defect
    /// and is not recovered from.
    #[error("Handlebars template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The template exists but could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A required template function argument was not provided
    #[error("Missing argument `{0}`")]
    MissingArgument(&'static str),

    /// A template function argument had the wrong type
    #[error("Argument `{name}` must be a string, got {value}")]
    InvalidArgument {
        /// the name of the argument
        name: &'static str,
        /// the rendered json value that was provided
        value: String,
    },
}

/// convenience alias for results in this crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn into_tera(self, function: &str) -> tera::Error {
        tera::Error::chain(format!("`{function}` failed"), self)
    }
}
