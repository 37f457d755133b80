// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::BTreeMap;
use std::ops::Bound;

use log::trace;

use crate::error::{Error, Result};
use crate::store::OptionId;

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";
const VALUE_SEPARATOR: char = '=';

/// A validated option name.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Name<'a> {
    /// Single character name, used as `-x`.
    Short(char),
    /// Multi-character name, used as `--xyz`.
    Long(&'a str),
}

impl<'a> Name<'a> {
    /// Classify a name as short or long, rejecting names that could never be
    /// matched on a command line.
    pub(crate) fn parse(name: &'a str) -> Result<Self> {
        let valid = !name.is_empty()
            && !name.starts_with(OPT_PREFIX)
            && !name.contains(VALUE_SEPARATOR)
            && !name.chars().any(char::is_whitespace);

        if !valid {
            return Err(Error::InvalidName(name.into()));
        }

        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Name::Short(c)),
            _ => Ok(Name::Long(name)),
        }
    }
}

/// Format a name the way a user would type it.
pub(crate) fn display_name(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("{}{}", OPT_PREFIX, name)
    } else {
        format!("{}{}", LONG_OPT_PREFIX, name)
    }
}

/// Maps every spelling of every option to its [OptionId].
///
/// Short and long names are kept apart since they are matched differently:
/// short names exactly, long names exactly or by unique prefix.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct NameTable {
    short: BTreeMap<char, OptionId>,
    long: BTreeMap<String, OptionId>,
}

impl NameTable {
    pub(crate) fn new() -> Self {
        NameTable::default()
    }

    /// Add `names` for the option `id`.
    ///
    /// Either all names are added or, if any is invalid or already in use
    /// (including twice in `names`), none are.
    pub(crate) fn register(&mut self, id: OptionId, names: &[&str]) -> Result<()> {
        let mut parsed = Vec::with_capacity(names.len());

        for name in names {
            let name = Name::parse(name)?;

            if self.contains(name) || parsed.contains(&name) {
                let name = match name {
                    Name::Short(c) => c.to_string(),
                    Name::Long(s) => s.to_string(),
                };

                return Err(Error::DuplicateName(name));
            }

            parsed.push(name);
        }

        for name in parsed {
            trace!("registering name {:?} for option {}", name, id.0);

            match name {
                Name::Short(c) => self.short.insert(c, id),
                Name::Long(s) => self.long.insert(s.into(), id),
            };
        }

        Ok(())
    }

    fn contains(&self, name: Name) -> bool {
        match name {
            Name::Short(c) => self.short.contains_key(&c),
            Name::Long(s) => self.long.contains_key(s),
        }
    }

    /// Exact lookup of either kind of name.
    pub(crate) fn lookup(&self, name: &str) -> Option<OptionId> {
        match Name::parse(name).ok()? {
            Name::Short(c) => self.resolve_short(c),
            Name::Long(s) => self.long.get(s).copied(),
        }
    }

    pub(crate) fn resolve_short(&self, c: char) -> Option<OptionId> {
        self.short.get(&c).copied()
    }

    /// Resolve a long name given on the command line (without the leading
    /// dashes).
    ///
    /// An exact match always wins. Otherwise, if `allow_prefix` is set, the
    /// name may be an abbreviation of exactly one long name.
    pub(crate) fn resolve_long(&self, name: &str, allow_prefix: bool) -> Result<OptionId> {
        if let Some(id) = self.long.get(name) {
            return Ok(*id);
        }

        let unknown = || Error::UnknownOption(format!("{}{}", LONG_OPT_PREFIX, name));

        if !allow_prefix || name.is_empty() {
            return Err(unknown());
        }

        // Names sharing a prefix are adjacent in the map.
        let candidates: Vec<(&String, &OptionId)> = self
            .long
            .range::<str, _>((Bound::Excluded(name), Bound::Unbounded))
            .take_while(|(long, _)| long.starts_with(name))
            .collect();

        match candidates.as_slice() {
            [] => Err(unknown()),
            [(_, id)] => Ok(**id),
            _ => Err(Error::AmbiguousOption {
                name: format!("{}{}", LONG_OPT_PREFIX, name),
                candidates: candidates
                    .iter()
                    .map(|(long, _)| format!("{}{}", LONG_OPT_PREFIX, long))
                    .collect(),
            }),
        }
    }

    /// Short names of the option, sorted.
    pub(crate) fn shorts(&self, id: OptionId) -> Vec<char> {
        self.short
            .iter()
            .filter(|(_, v)| **v == id)
            .map(|(k, _)| *k)
            .collect()
    }

    /// Long names of the option, sorted.
    pub(crate) fn longs(&self, id: OptionId) -> Vec<String> {
        self.long
            .iter()
            .filter(|(_, v)| **v == id)
            .map(|(k, _)| k.clone())
            .collect()
    }
}
