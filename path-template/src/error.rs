use std::str::Utf8Error;

use derive_more::{Display, Error};

/// Errors that can occur when compiling a path template.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A segment consists of a lone `:`.
    #[display("template {template:?} has a parameter segment without a name")]
    EmptyParamName {
        #[error(not(source))]
        template: String,
    },

    /// A parameter name starts with another `:`.
    #[display("template {template:?} has malformed parameter name {name:?}")]
    MalformedParamName { template: String, name: String },

    /// The same parameter name appears in more than one segment.
    #[display("template {template:?} uses parameter name {name:?} more than once")]
    DuplicateParamName { template: String, name: String },

    /// The generated match pattern was rejected by the regex engine.
    #[display("wrong path pattern {template:?}: {message}")]
    Pattern { template: String, message: String },
}

/// Errors that can occur when building a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// No value was supplied for a parameter the template requires.
    #[display("Missing path param: {name}")]
    MissingParameter {
        #[error(not(source))]
        name: String,
    },
}

impl BuildError {
    /// Returns the name of the parameter that caused the error.
    pub fn param_name(&self) -> &str {
        match self {
            BuildError::MissingParameter { name } => name,
        }
    }
}

/// Errors that can occur while extracting parameters from a matching path.
///
/// Only surfaced by [`PathTemplate::try_match`](crate::PathTemplate::try_match);
/// [`matches`](crate::PathTemplate::matches) treats these as a failed match.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// A captured segment did not percent-decode to valid UTF-8.
    #[display("can not decode value {value:?} of path param {name}: {source}")]
    Decode {
        name: String,
        value: String,
        source: Utf8Error,
    },
}
