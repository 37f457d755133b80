// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to report parse errors along with a usage
/// statement.
use std::process::exit;

use gnuflag::{ErrorKind, FlagSet, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut flags = FlagSet::new("error-handler");

    flags.define_bool(&["c", "colour"], false, "colourise output")?;
    flags.define_bool(&["color"], false, "colorize output")?;
    flags.define_int(&["l", "level"], 0, "compression `level`")?;

    if let Err(e) = flags.parse() {
        let status = match e.kind() {
            Some(ErrorKind::HelpRequested) => 0,
            Some(ErrorKind::AmbiguousOption) => {
                eprintln!("ERROR: {} (type more of the name)", e);
                2
            }
            _ => {
                eprintln!("ERROR: {}", e);
                2
            }
        };

        flags.write_usage(&mut std::io::stderr())?;

        exit(status);
    }

    flags.visit_all(|o| println!("{}: {}", o.names().join(", "), o.value));

    Ok(())
}
