// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::flags::Settings;
use crate::names::NameTable;
use crate::store::{OptionId, ValueStore};

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";

/// A lone dash conventionally means "standard input/output" so is a
/// positional argument rather than an option.
const STDIO_ARG: &str = "-";

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;
const MALFORMED_PREFIX: &str = "---";
const VALUE_SEPARATOR: char = '=';

const HELP_SHORT: char = 'h';
const HELP_LONG: &str = "help";

/// How a single command-line argument is to be handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Token<'a> {
    /// `--`
    EndOfOptions,
    /// `--name` or `--name=value` (dashes removed).
    Long(&'a str),
    /// `-abc` (dash removed).
    Short(&'a str),
    /// `---...`
    Malformed,
    /// Anything else, including a lone `-`.
    Positional,
}

impl<'a> Token<'a> {
    fn classify(arg: &'a str) -> Self {
        if arg == END_OF_OPTIONS {
            Token::EndOfOptions
        } else if arg == STDIO_ARG {
            Token::Positional
        } else if arg.starts_with(MALFORMED_PREFIX) {
            Token::Malformed
        } else if let Some(long) = arg.strip_prefix(LONG_OPT_PREFIX) {
            Token::Long(long)
        } else if let Some(cluster) = arg.strip_prefix(OPT_PREFIX) {
            Token::Short(cluster)
        } else {
            Token::Positional
        }
    }
}

/// Result of a single parse: the positional arguments found and, if the parse
/// stopped early, the error that stopped it.
///
/// Options handled before the error keep the values they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) positional: Vec<String>,
    pub(crate) error: Option<Error>,
}

impl Outcome {
    /// Split into the positional arguments and the overall result.
    pub(crate) fn into_parts(self) -> (Vec<String>, Result<()>) {
        let result = match self.error {
            None => Ok(()),
            Some(e) => Err(e),
        };

        (self.positional, result)
    }
}

/// Walks the command line once, binding option values into the
/// [ValueStore] as they are found.
pub(crate) struct Parser<'a> {
    names: &'a NameTable,
    store: &'a mut ValueStore,
    settings: Settings,
    args: std::vec::IntoIter<String>,
    positional: Vec<String>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        names: &'a NameTable,
        store: &'a mut ValueStore,
        settings: Settings,
        args: Vec<String>,
    ) -> Self {
        Parser {
            names,
            store,
            settings,
            args: args.into_iter(),
            positional: Vec::new(),
        }
    }

    /// Consume all the arguments (or as many as can be handled before an
    /// error occurs).
    pub(crate) fn run(mut self) -> Outcome {
        debug!("parsing {} arguments", self.args.len());

        let error = self.scan().err();

        match &error {
            Some(e) => debug!("parse failed: {}", e),
            None => debug!(
                "parse complete: {} positional arguments",
                self.positional.len()
            ),
        }

        Outcome {
            positional: self.positional,
            error,
        }
    }

    fn scan(&mut self) -> Result<()> {
        while let Some(arg) = self.args.next() {
            let token = Token::classify(&arg);

            trace!("argument {:?}: {:?}", arg, token);

            match token {
                Token::EndOfOptions => {
                    self.positional.extend(self.args.by_ref());
                }
                Token::Long(long) => self.long_option(long)?,
                Token::Short(cluster) => self.short_cluster(cluster)?,
                Token::Malformed => return Err(Error::MalformedToken(arg)),
                Token::Positional => {
                    self.positional.push(arg);

                    if self.settings.stop_at_positional {
                        self.positional.extend(self.args.by_ref());
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle `--name`, `--name=value` or `--name value`.
    fn long_option(&mut self, long: &str) -> Result<()> {
        let (name, inline_value) = match long.find(VALUE_SEPARATOR) {
            Some(pos) => (&long[..pos], Some(&long[pos + 1..])),
            None => (long, None),
        };

        if name.is_empty() {
            return Err(Error::MalformedToken(format!("{}{}", LONG_OPT_PREFIX, long)));
        }

        let option = format!("{}{}", LONG_OPT_PREFIX, name);

        let id = match self
            .names
            .resolve_long(name, !self.settings.no_prefix_matching)
        {
            Ok(id) => id,
            Err(Error::UnknownOption(_)) if name == HELP_LONG && self.help_enabled() => {
                return Err(Error::HelpRequested)
            }
            Err(e) => return Err(e),
        };

        if !self.store.takes_value(id) {
            return match inline_value {
                // Only a boolean literal is acceptable here.
                Some(value) => self.bind(id, &option, value),
                None => {
                    self.set_flag(id, &option);
                    Ok(())
                }
            };
        }

        let value = match inline_value {
            Some(value) => value.to_string(),
            None => self
                .args
                .next()
                .ok_or_else(|| Error::MissingValue(option.clone()))?,
        };

        self.bind(id, &option, &value)
    }

    /// Handle one or more short options bundled into a single argument.
    ///
    /// An option that needs a value takes the rest of the argument (verbatim,
    /// so `-s=foo` gives `=foo`), or the next argument if nothing is left.
    fn short_cluster(&mut self, cluster: &str) -> Result<()> {
        for (pos, c) in cluster.char_indices() {
            let option = format!("{}{}", OPT_PREFIX, c);

            let id = match self.names.resolve_short(c) {
                Some(id) => id,
                None if c == HELP_SHORT && self.help_enabled() => {
                    return Err(Error::HelpRequested)
                }
                // Never a short name: report the whole argument.
                None if c == OPT_PREFIX => {
                    return Err(Error::UnknownOption(format!("{}{}", OPT_PREFIX, cluster)))
                }
                None => return Err(Error::UnknownOption(option)),
            };

            if !self.store.takes_value(id) {
                self.set_flag(id, &option);
                continue;
            }

            let rest = &cluster[pos + c.len_utf8()..];

            let value = if rest.is_empty() {
                self.args
                    .next()
                    .ok_or_else(|| Error::MissingValue(option.clone()))?
            } else {
                rest.to_string()
            };

            return self.bind(id, &option, &value);
        }

        Ok(())
    }

    /// `-h` and `--help` are only special if not registered as options.
    fn help_enabled(&self) -> bool {
        !self.settings.no_help
    }

    fn set_flag(&mut self, id: OptionId, option: &str) {
        trace!("option {}: set", option);

        self.store.set_flag(id);
    }

    fn bind(&mut self, id: OptionId, option: &str, value: &str) -> Result<()> {
        trace!("option {}: value {:?}", option, value);

        self.store
            .set(id, value)
            .map_err(|e| Error::InvalidValue {
                name: option.into(),
                value: value.into(),
                reason: e.to_string(),
            })
    }
}
