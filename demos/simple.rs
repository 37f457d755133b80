// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to define options of each type and read
/// them back after parsing.
use std::convert::TryFrom;

use gnuflag::{FlagSet, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut flags = FlagSet::new("simple");

    let verbose = flags.define_bool(&["v", "verbose"], false, "show more output")?;
    let count = flags.define_int(&["n", "count"], 1, "number of `times` to greet")?;
    let name = flags.define_string(&["name"], "you", "who to greet")?;
    let delay = flags.define_float(&["d", "delay"], 0.0, "seconds between greetings")?;
    let width = flags.define_uint(&["w"], 0, "pad greetings to this width")?;

    // Let "-N" work too.
    flags.add_alias("name", "N")?;

    flags.parse()?;

    let verbose = flags.get(verbose).unwrap_or_default();
    let count = flags.get(count).unwrap_or_default();
    let name = flags.get(name).unwrap_or_default();
    let delay = flags.get(delay).unwrap_or_default();
    let width = usize::try_from(flags.get(width).unwrap_or_default()).unwrap_or_default();

    if verbose {
        println!("INFO: count: {}, name: {:?}, delay: {}", count, name, delay);

        flags.visit(|o| println!("INFO: set: {} = {}", o.names().join("/"), o.value));
    }

    for _ in 0..count {
        println!("{:>width$}", format!("hello, {}", name), width = width);
    }

    Ok(())
}
