// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! GNU `getopt_long(3)` style command-line parsing on top of a set of
//! typed options.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Options are defined on a [FlagSet], each with a type, one or more names
//! and a default value. Parsing the command line stores the values given for
//! the options in the set and collects everything else as positional
//! arguments.
//!
//! # Quickstart
//!
//! 1. Create a [FlagSet] variable:
//!
//!    ```rust
//!    # use gnuflag::FlagSet;
//!    #
//!    let mut flags = FlagSet::new("my app");
//!    ```
//!
//! 1. Define each option, keeping the [Slot] returned so you can read the
//!    value later. Single character names are short options (`-v`), longer
//!    names are long options (`--verbose`):
//!
//!    ```rust
//!    # use gnuflag::{FlagSet, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut flags = FlagSet::new("my app");
//!    #
//!    // Support "-v" and "--verbose" flag options.
//!    let verbose = flags.define_bool(&["v", "verbose"], false, "be chatty")?;
//!
//!    // Support "-n <value>" and "--count <value>".
//!    let count = flags.define_int(&["n"], 1, "number of `times`")?;
//!    flags.add_alias("n", "count")?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Call the `parse()` method (or `parse_with_args()`) and read the
//!    results:
//!
//!    ```rust
//!    # use gnuflag::{FlagSet, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut flags = FlagSet::new("my app");
//!    # let verbose = flags.define_bool(&["v", "verbose"], false, "be chatty")?;
//!    # let count = flags.define_int(&["n"], 1, "number of `times`")?;
//!    # flags.add_alias("n", "count")?;
//!    #
//!    flags.parse_with_args(vec!["-vn3", "file", "--cou=4", "--", "-x"])?;
//!
//!    assert_eq!(flags.get(verbose), Some(true));
//!    assert_eq!(flags.get(count), Some(4));
//!    assert_eq!(flags.args(), &["file", "-x"]);
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. On error, show the error and the usage statement:
//!
//!    ```rust
//!    # use gnuflag::{ErrorKind, FlagSet};
//!    #
//!    # let mut flags = FlagSet::new("my app");
//!    # flags.define_int(&["n", "count"], 1, "number of `times`").unwrap();
//!    #
//!    if let Err(e) = flags.parse_with_args(vec!["--count"]) {
//!        assert_eq!(e.kind(), Some(ErrorKind::MissingValue));
//!
//!        eprintln!("ERROR: {}", e);
//!        eprint!("{}", flags.usage_string().unwrap_or_default());
//!    }
//!    ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -vn 3 --name=world
//! $ cargo run --example option-and-positional-args -- one -ao out.txt two -- -three
//! $ RUST_LOG=gnuflag=trace cargo run --example error-handler -- --colour=blue
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! - A "short option" is a single character name following a single dash,
//!   for example `-v`.
//!
//!   Several short options can be "clustered" into a single argument:
//!   `-abc` is the same as `-a -b -c`.
//!
//! - A "long option" is a multi-character name following two dashes, for
//!   example `--verbose`.
//!
//! - An "alias" is an additional name for an option. An option may have any
//!   number of short and long names.
//!
//! - A "flag" is a boolean option. Flags never take a value from the next
//!   argument.
//!
//! - A "positional argument" is any argument which is neither an option nor
//!   an option's value.
//!
//! - The special argument `--` means "end of all options": everything after
//!   it is a positional argument, even if it starts with a dash.
//!
//! # Summary of features and behaviour
//!
//! - Options and positional arguments may be intermingled (unless
//!   [Settings::stop_at_positional()] is used).
//! - Option values may be given in several ways:
//!
//!   | Form | Value |
//!   |-|-|
//!   | `-s foo` | `foo` |
//!   | `-sfoo` | `foo` |
//!   | `-s=foo` | `=foo` (the rest of the argument, verbatim) |
//!   | `--sierra foo` | `foo` |
//!   | `--sierra=foo` | `foo` |
//!   | `--sierra=a=b` | `a=b` (split at the first `=` only) |
//!
//! - A value-taking short option inside a cluster takes the rest of the
//!   cluster as its value: `-absfoo` sets `-a`, `-b` and `-s foo`.
//! - If a value is not attached to its option, the next argument is the
//!   value, even if it starts with a dash (as with `getopt(3)`).
//! - Long options can be abbreviated to any prefix that matches just one
//!   long option (unless [Settings::no_prefix_matching()] is used).
//! - A lone `-` is a positional argument (often used to mean standard input).
//! - Options may be specified multiple times; the last value wins.
//! - Flags given as long options accept an explicit boolean literal:
//!   `--verbose=false`.
//! - Parsing stops at the first error. Options handled before the error keep
//!   their values.
//! - If they don't match a registered option, `-h` and `--help` end the
//!   parse with [Error::HelpRequested] (unless [Settings::no_help()] is
//!   used). `--help` is a prefix like any other, so a lone `--help-all`
//!   option is selected by it.
//! - A usage statement can be generated from the defined options
//!   ([FlagSet::write_usage()]).
//!
//! # Limitations
//!
//! - Options with optional values are not supported.
//!
//!   **Explanation:** An option is either a flag (no value) or requires a
//!   value. It cannot be both.
//!
//! - Options cannot accept multiple values.
//!
//! - There is no support for sub-commands, configuration files or
//!   environment variables.

mod error;
mod flags;
mod help;
mod names;
mod parser;
mod store;
mod value;

pub use error::{Error, ErrorKind, Result};

pub use flags::{get_args, FlagSet, Settings};
pub use help::OptionInfo;
pub use store::Slot;
pub use value::{Kind, SlotValue, Value, ValueError};
