// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how options and positional arguments can be
/// intermingled, and how `--` stops option handling.
use gnuflag::{FlagSet, Result, Settings};

fn main() -> Result<()> {
    env_logger::init();

    // Set POSIXLY_CORRECT to stop handling options at the first positional
    // argument.
    let settings = if std::env::var_os("POSIXLY_CORRECT").is_some() {
        Settings::new().stop_at_positional()
    } else {
        Settings::new()
    };

    let mut flags = FlagSet::new("option-and-positional-args").settings(settings);

    let all = flags.define_bool(&["a", "all"], false, "include everything")?;
    let output = flags.define_string(&["o", "output"], "-", "write to `file`")?;

    flags.parse()?;

    println!("INFO: all: {:?}", flags.get(all));
    println!("INFO: output: {:?}", flags.get(output));

    for (i, arg) in flags.args().iter().enumerate() {
        println!("INFO: positional argument {}: {:?}", i, arg);
    }

    Ok(())
}
