// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// Classification of the errors a parse can end with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Short character or long name not known (and no unique prefix match).
    UnknownOption,
    /// Long name prefix matches more than one registered long name.
    AmbiguousOption,
    /// Option needs a value but the command line ran out.
    MissingValue,
    /// Value could not be converted to the option's type.
    InvalidValue,
    /// Token uses a dash pattern the parser does not understand.
    MalformedToken,
    /// User asked for help (`-h` / `--help`) and neither is registered.
    HelpRequested,
}

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An option was defined without any names.
    #[error("no option names specified")]
    NoNames,

    /// Option names cannot be empty, start with a dash, or contain `=` or
    /// whitespace.
    #[error("invalid option name: {0:?}")]
    InvalidName(String),

    /// The name is already used by another option.
    #[error("option name redefined: {0}")]
    DuplicateName(String),

    /// Neither name passed to an alias call is defined.
    #[error("cannot alias {a:?} and {b:?}: neither is defined")]
    AliasUndefined {
        /// First name.
        a: String,
        /// Second name.
        b: String,
    },

    /// Both names passed to an alias call are already defined.
    #[error("cannot alias {a:?} and {b:?}: both are defined")]
    AliasConflict {
        /// First name.
        a: String,
        /// Second name.
        b: String,
    },

    /// No option with this name exists.
    #[error("no such option: {0}")]
    NoSuchOption(String),

    /// Writing help text failed.
    #[error("I/O error: {0}")]
    Io(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an unknown option.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// User specified a long option prefix that matches several options.
    #[error("ambiguous option: {name} (could be {})", .candidates.join(", "))]
    AmbiguousOption {
        /// The name as given on the command line.
        name: String,
        /// Every long option the name is a prefix of.
        candidates: Vec<String>,
    },

    /// Option argument was not specified.
    #[error("option requires an argument: {0}")]
    MissingValue(String),

    /// Option argument could not be converted.
    #[error("invalid value {value:?} for option {name}: {reason}")]
    InvalidValue {
        /// The option as given on the command line.
        name: String,
        /// The rejected value.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// Argument looks like an option but cannot be one (`---foo`).
    #[error("malformed option: {0}")]
    MalformedToken(String),

    /// Help was requested.
    #[error("help requested")]
    HelpRequested,
}

impl Error {
    /// Returns the parse error classification, or [None] for errors that
    /// can only arise while registering options.
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Error::UnknownOption(_) => ErrorKind::UnknownOption,
            Error::AmbiguousOption { .. } => ErrorKind::AmbiguousOption,
            Error::MissingValue(_) => ErrorKind::MissingValue,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::MalformedToken(_) => ErrorKind::MalformedToken,
            Error::HelpRequested => ErrorKind::HelpRequested,
            _ => return None,
        };

        Some(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        #[derive(Debug)]
        struct TestData {
            error: Error,
            kind: Option<ErrorKind>,
        }

        let tests = &[
            TestData {
                error: Error::UnknownOption("--abc".into()),
                kind: Some(ErrorKind::UnknownOption),
            },
            TestData {
                error: Error::AmbiguousOption {
                    name: "--i".into(),
                    candidates: vec!["--india".into(), "--indigo".into()],
                },
                kind: Some(ErrorKind::AmbiguousOption),
            },
            TestData {
                error: Error::MissingValue("-s".into()),
                kind: Some(ErrorKind::MissingValue),
            },
            TestData {
                error: Error::InvalidValue {
                    name: "-i".into(),
                    value: "=1".into(),
                    reason: "invalid digit".into(),
                },
                kind: Some(ErrorKind::InvalidValue),
            },
            TestData {
                error: Error::MalformedToken("---".into()),
                kind: Some(ErrorKind::MalformedToken),
            },
            TestData {
                error: Error::HelpRequested,
                kind: Some(ErrorKind::HelpRequested),
            },
            TestData {
                error: Error::DuplicateName("a".into()),
                kind: None,
            },
            TestData {
                error: Error::NoNames,
                kind: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(d.error.kind(), d.kind, "{}", msg);
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::AmbiguousOption {
            name: "--i".into(),
            candidates: vec!["--india".into(), "--indigo".into()],
        };

        assert_eq!(
            err.to_string(),
            "ambiguous option: --i (could be --india, --indigo)"
        );

        let err = Error::InvalidValue {
            name: "-i".into(),
            value: "=1".into(),
            reason: "invalid digit found in string".into(),
        };

        assert_eq!(
            err.to_string(),
            r#"invalid value "=1" for option -i: invalid digit found in string"#
        );

        assert_eq!(
            Error::MissingValue("--sierra".into()).to_string(),
            "option requires an argument: --sierra"
        );
    }
}
