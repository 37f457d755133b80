// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::io::Write;

use log::debug;

use crate::error::{Error, Result};
use crate::help::{self, OptionInfo};
use crate::names::{display_name, NameTable};
use crate::parser::Parser;
use crate::store::{OptionId, SetId, Slot, ValueStore};
use crate::value::SlotValue;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, long options must be given in full; by default any
    /// unambiguous prefix of a long option name is accepted.
    pub(crate) no_prefix_matching: bool,

    /// If set, the first positional argument ends option handling.
    pub(crate) stop_at_positional: bool,

    /// If set, `-h` and `--help` are not treated specially.
    pub(crate) no_help: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Require long option names to be specified in full
    /// (by default, `--verb` is accepted for `--verbose` as long as no other
    /// long option starts with `verb`).
    pub fn no_prefix_matching(self) -> Self {
        Settings {
            no_prefix_matching: true,
            ..self
        }
    }

    /// Stop handling options at the first positional argument, as
    /// `getopt(3)` does when `POSIXLY_CORRECT` is set.
    ///
    /// By default options and positional arguments may be intermingled.
    ///
    /// # Example
    ///
    /// ```bash
    /// $ prog -v run -x
    /// ```
    ///
    /// - By default, `-v` and `-x` are both options and `run` is the only
    ///   positional argument.
    /// - With this setting, `-v` is an option and `run` and `-x` are
    ///   positional arguments.
    pub fn stop_at_positional(self) -> Self {
        Settings {
            stop_at_positional: true,
            ..self
        }
    }

    /// Don't treat `-h` and `--help` specially.
    ///
    /// By default, if they are not registered, either one ends the parse
    /// with [Error::HelpRequested].
    pub fn no_help(self) -> Self {
        Settings {
            no_help: true,
            ..self
        }
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [FlagSet::parse_with_args()]. However, this isn't usually
/// required: just call [FlagSet::parse()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// A set of options and the values they were given.
///
/// All consumers of the crate need to create at least one object of
/// this type.
///
/// # Notes
///
/// - Parsing stores option values in the set as a side effect. If parsing
///   fails, options handled before the failure keep their new values.
/// - Each set is independent so separate sets may be used from separate
///   threads.
/// - Two sets compare equal if they hold the same options and parse state,
///   whichever sets they were created as.
#[derive(Clone, Debug)]
pub struct FlagSet {
    id: SetId,
    name: String,
    settings: Settings,
    names: NameTable,
    store: ValueStore,
    args: Vec<String>,
    parsed: bool,
}

impl FlagSet {
    /// Create a new, empty option set. The name is used in usage output.
    pub fn new(name: &str) -> Self {
        FlagSet {
            id: SetId::next(),
            name: name.into(),
            settings: Settings::new(),
            names: NameTable::new(),
            store: ValueStore::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        FlagSet { settings, ..self }
    }

    /// Returns the name of the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define an option of any supported type.
    ///
    /// Names of one character are short options (`-x`); longer names are
    /// long options (`--xyz`). Names are specified without dashes.
    ///
    /// # Errors
    ///
    /// - [Error::NoNames] if `names` is empty.
    /// - [Error::InvalidName] if a name is empty, starts with a dash,
    ///   or contains `=` or whitespace.
    /// - [Error::DuplicateName] if a name is already in use.
    ///
    /// On error, nothing is added to the set.
    pub fn define<T: SlotValue>(
        &mut self,
        names: &[&str],
        default: T,
        usage: &str,
    ) -> Result<Slot<T>> {
        if names.is_empty() {
            return Err(Error::NoNames);
        }

        let id = self.store.next_id();

        self.names.register(id, names)?;

        let added = self.store.add(default.into_value(), usage);
        debug_assert_eq!(id, added);

        debug!("defined {} option {:?}", T::KIND, names);

        Ok(Slot::new(self.id, id))
    }

    /// Define a boolean option (flag). Flags never take the next argument as
    /// their value.
    pub fn define_bool(
        &mut self,
        names: &[&str],
        default: bool,
        usage: &str,
    ) -> Result<Slot<bool>> {
        self.define(names, default, usage)
    }

    /// Define a signed integer option.
    pub fn define_int(&mut self, names: &[&str], default: i64, usage: &str) -> Result<Slot<i64>> {
        self.define(names, default, usage)
    }

    /// Define an unsigned integer option.
    pub fn define_uint(&mut self, names: &[&str], default: u64, usage: &str) -> Result<Slot<u64>> {
        self.define(names, default, usage)
    }

    /// Define a floating point option.
    pub fn define_float(&mut self, names: &[&str], default: f64, usage: &str) -> Result<Slot<f64>> {
        self.define(names, default, usage)
    }

    /// Define a string option.
    pub fn define_string(
        &mut self,
        names: &[&str],
        default: &str,
        usage: &str,
    ) -> Result<Slot<String>> {
        self.define(names, default.to_string(), usage)
    }

    /// Add another name for an existing option.
    ///
    /// Exactly one of the names must already be defined: the other one
    /// becomes an alias for it, so `add_alias("a", "aah")` and
    /// `add_alias("aah", "a")` are equivalent.
    pub fn add_alias(&mut self, a: &str, b: &str) -> Result<()> {
        let (id, alias) = match (self.names.lookup(a), self.names.lookup(b)) {
            (Some(id), None) => (id, b),
            (None, Some(id)) => (id, a),
            (Some(_), Some(_)) => {
                return Err(Error::AliasConflict {
                    a: a.into(),
                    b: b.into(),
                })
            }
            (None, None) => {
                return Err(Error::AliasUndefined {
                    a: a.into(),
                    b: b.into(),
                })
            }
        };

        self.names.register(id, &[alias])
    }

    /// Add several aliases, stopping at the first failure.
    pub fn add_aliases(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        for (a, b) in pairs {
            self.add_alias(a, b)?;
        }

        Ok(())
    }

    /// Simplest interface to the parser: parse the program's own arguments.
    pub fn parse(&mut self) -> Result<()> {
        let args = get_args();

        self.parse_with_args(args)
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: The arguments. Specify your own, or call [get_args()].
    ///
    /// # Notes
    ///
    /// - Option values are stored as they are found. Read them back with
    ///   [FlagSet::get()].
    /// - The positional arguments are available from [FlagSet::args()]
    ///   afterwards, even if parsing failed.
    /// - Parsing stops at the first error.
    pub fn parse_with_args<I, S>(&mut self, cli_args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cli_args: Vec<String> = cli_args.into_iter().map(Into::into).collect();

        self.parsed = true;

        let (positional, result) =
            Parser::new(&self.names, &mut self.store, self.settings, cli_args)
                .run()
                .into_parts();

        self.args = positional;

        result
    }

    /// Returns true once a parse has been attempted.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// The positional arguments found by the last parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Number of positional arguments.
    pub fn narg(&self) -> usize {
        self.args.len()
    }

    /// The i'th positional argument.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Returns the current value of an option.
    ///
    /// Returns [None] if the slot was created by a different set.
    pub fn get<T: SlotValue>(&self, slot: Slot<T>) -> Option<T> {
        if slot.set != self.id {
            return None;
        }

        self.store.get(slot.id).and_then(|e| T::from_value(&e.value))
    }

    /// Set an option by name (any of its names, given in full), as if it had
    /// been specified on the command line.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let id = self
            .names
            .lookup(name)
            .ok_or_else(|| Error::NoSuchOption(name.into()))?;

        self.store.set(id, value).map_err(|e| Error::InvalidValue {
            name: display_name(name),
            value: value.into(),
            reason: e.to_string(),
        })
    }

    /// Returns details of the option with the specified name.
    pub fn lookup(&self, name: &str) -> Option<OptionInfo> {
        self.names.lookup(name).and_then(|id| self.info(id))
    }

    fn info(&self, id: OptionId) -> Option<OptionInfo> {
        let entry = self.store.get(id)?;

        Some(OptionInfo {
            shorts: self.names.shorts(id),
            longs: self.names.longs(id),
            kind: entry.kind(),
            usage: entry.usage.clone(),
            default: entry.default.clone(),
            value: entry.value.clone(),
            count: entry.count,
        })
    }

    /// Details of every option, in help order.
    pub fn options(&self) -> Vec<OptionInfo> {
        let mut options: Vec<OptionInfo> =
            self.store.ids().filter_map(|id| self.info(id)).collect();

        options.sort_by_cached_key(OptionInfo::sort_key);

        options
    }

    /// Call `f` for every option, in help order.
    pub fn visit_all<F>(&self, f: F)
    where
        F: FnMut(&OptionInfo),
    {
        self.options().iter().for_each(f);
    }

    /// Call `f` for every option that has been set, in help order.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&OptionInfo),
    {
        self.visit_all(|o| {
            if o.count > 0 {
                f(o)
            }
        });
    }

    /// Number of options that have been set.
    pub fn nflag(&self) -> usize {
        self.store
            .ids()
            .filter_map(|id| self.store.get(id))
            .filter(|e| e.count > 0)
            .count()
    }

    /// Write a help entry for every option.
    pub fn write_defaults<W: Write>(&self, writer: &mut W) -> Result<()> {
        help::write_defaults(&self.options(), writer)
    }

    /// Write a usage statement: a header line followed by the help entry
    /// for every option.
    pub fn write_usage<W: Write>(&self, writer: &mut W) -> Result<()> {
        help::write_usage(&self.name, &self.options(), writer)
    }

    /// Returns the usage statement as a string.
    pub fn usage_string(&self) -> Result<String> {
        let mut buf = Vec::<u8>::new();

        self.write_usage(&mut buf)?;

        String::from_utf8(buf).map_err(|e| Error::Io(e.to_string()))
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        FlagSet::new("")
    }
}

impl PartialEq for FlagSet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.settings == other.settings
            && self.names == other.names
            && self.store == other.store
            && self.args == other.args
            && self.parsed == other.parsed
    }
}
