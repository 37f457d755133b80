// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle positional arguments (like `echo(1)`)
/// only.
use gnuflag::{FlagSet, Result};

fn main() -> Result<()> {
    env_logger::init();

    // No options: anything starting with a dash (other than "-" and the
    // arguments after "--") is an error.
    let mut flags = FlagSet::new("positional-args-only");

    flags.parse()?;

    println!("INFO: {} positional arguments", flags.narg());

    for (i, arg) in flags.args().iter().enumerate() {
        println!("INFO: arg {}: {:?}", i, arg);
    }

    println!("{}", flags.args().join(" "));

    Ok(())
}
