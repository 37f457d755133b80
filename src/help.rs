// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::value::{Kind, Value};

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Indent for usage text that does not fit on the option line.
const USAGE_INDENT: &str = "\n    \t";

/// Option lines up to this width have their usage text on the same line.
const SAME_LINE_WIDTH: usize = 4;

const PLACEHOLDER_QUOTE: char = '`';

/// Details of a registered option, as consumed by the help renderer.
///
/// # Note
///
/// - All members are public for caller convenience.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionInfo {
    /// Single character names, sorted.
    pub shorts: Vec<char>,
    /// Multi-character names, sorted.
    pub longs: Vec<String>,
    /// Type of value the option holds.
    pub kind: Kind,
    /// Description of the option.
    pub usage: String,
    /// Value the option had before parsing.
    pub default: Value,
    /// Current value.
    pub value: Value,
    /// Number of times the option was set.
    pub count: usize,
}

impl OptionInfo {
    /// All names as they would be typed: short names first, then long
    /// names, each group alphabetically.
    pub fn names(&self) -> Vec<String> {
        self.shorts
            .iter()
            .map(|c| format!("{}{}", OPT_PREFIX, c))
            .chain(
                self.longs
                    .iter()
                    .map(|s| format!("{}{}", LONG_OPT_PREFIX, s)),
            )
            .collect()
    }

    /// Key used to order options in help output.
    pub(crate) fn sort_key(&self) -> String {
        match (self.shorts.first(), self.longs.first()) {
            (Some(c), _) => c.to_string(),
            (None, Some(s)) => s.clone(),
            (None, None) => String::new(),
        }
    }

    /// Split the usage text into the value placeholder and the description.
    ///
    /// A back-quoted word in the usage text names the placeholder and the
    /// quotes are dropped from the description: ``"read from `file`"`` gives
    /// (`"file"`, `"read from file"`). Otherwise the placeholder is the
    /// type name (empty for flags).
    pub fn unquote_usage(&self) -> (String, String) {
        let usage = &self.usage;

        if let Some(start) = usage.find(PLACEHOLDER_QUOTE) {
            let after = start + PLACEHOLDER_QUOTE.len_utf8();

            if let Some(len) = usage[after..].find(PLACEHOLDER_QUOTE) {
                let name = &usage[after..after + len];
                let rest = &usage[after + len + PLACEHOLDER_QUOTE.len_utf8()..];

                return (name.into(), format!("{}{}{}", &usage[..start], name, rest));
            }
        }

        let name = self.kind.placeholder().unwrap_or_default();

        (name.into(), usage.clone())
    }
}

impl fmt::Display for OptionInfo {
    /// The option line of the help entry, for example `-i, --india int`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (placeholder, _) = self.unquote_usage();

        write!(f, "{}", self.names().join(", "))?;

        if !placeholder.is_empty() {
            write!(f, " {}", placeholder)?;
        }

        Ok(())
    }
}

/// Write one help entry for each option, in the order given.
pub(crate) fn write_defaults<W>(options: &[OptionInfo], writer: &mut W) -> Result<()>
where
    W: Write,
{
    for option in options {
        let mut line = format!("  {}", option);

        if line.chars().count() <= SAME_LINE_WIDTH {
            line.push('\t');
        } else {
            line.push_str(USAGE_INDENT);
        }

        let (_, usage) = option.unquote_usage();

        line.push_str(&usage.replace('\n', USAGE_INDENT));

        if !option.default.is_zero() {
            match &option.default {
                Value::Str(s) => line.push_str(&format!(" (default {:?})", s)),
                v => line.push_str(&format!(" (default {})", v)),
            }
        }

        writeln!(writer, "{}", line)?;
    }

    Ok(())
}

/// Write the usage header followed by the help entries.
pub(crate) fn write_usage<W>(
    name: &str,
    options: &[OptionInfo],
    writer: &mut W,
) -> Result<()>
where
    W: Write,
{
    if name.is_empty() {
        writeln!(writer, "Usage:")?;
    } else {
        writeln!(writer, "Usage of {}:", name)?;
    }

    write_defaults(options, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(shorts: &[char], longs: &[&str], default: Value, usage: &str) -> OptionInfo {
        OptionInfo {
            shorts: shorts.to_vec(),
            longs: longs.iter().map(|s| s.to_string()).collect(),
            kind: default.kind(),
            usage: usage.into(),
            value: default.clone(),
            default,
            count: 0,
        }
    }

    #[test]
    fn test_names() {
        let i = info(&['i'], &["india"], Value::Int(0), "");

        assert_eq!(i.names(), vec!["-i", "--india"]);
        assert_eq!(i.sort_key(), "i");
        assert_eq!(i.to_string(), "-i, --india int");

        let long = info(&[], &["long"], Value::Int(0), "");
        assert_eq!(long.sort_key(), "long");
        assert_eq!(long.to_string(), "--long int");

        let d = info(&['d'], &[], Value::Bool(false), "");
        assert_eq!(d.to_string(), "-d");
    }

    #[test]
    fn test_unquote_usage() {
        #[derive(Debug)]
        struct TestData<'a> {
            default: Value,
            usage: &'a str,
            placeholder: &'a str,
            text: &'a str,
        }

        let tests = &[
            TestData {
                default: Value::Bool(false),
                usage: "desc of a",
                placeholder: "",
                text: "desc of a",
            },
            TestData {
                default: Value::Str("".into()),
                usage: "string",
                placeholder: "string",
                text: "string",
            },
            TestData {
                default: Value::Str("".into()),
                usage: "read from `file` instead",
                placeholder: "file",
                text: "read from file instead",
            },
            TestData {
                default: Value::Uint(0),
                usage: "`count`",
                placeholder: "count",
                text: "count",
            },
            TestData {
                default: Value::Float(0.0),
                usage: "unbalanced ` quote",
                placeholder: "float",
                text: "unbalanced ` quote",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let option = info(&['x'], &[], d.default.clone(), d.usage);

            let (placeholder, text) = option.unquote_usage();

            assert_eq!(placeholder, d.placeholder, "{}", msg);
            assert_eq!(text, d.text, "{}", msg);
        }
    }

    #[test]
    fn test_write_defaults() {
        let options = vec![
            info(&['a'], &["aah"], Value::Bool(false), "desc of a"),
            info(&['d'], &[], Value::Bool(false), "desc of d"),
            info(&['i'], &["india"], Value::Int(0), "i"),
            info(&[], &["long"], Value::Int(0), "long only"),
            info(&['n'], &[], Value::Int(3), "number of\nthings"),
            info(&['o'], &["output"], Value::Str("-".into()), "write to `path`"),
        ];

        let expected = concat!(
            "  -a, --aah\n",
            "    \tdesc of a\n",
            "  -d\tdesc of d\n",
            "  -i, --india int\n",
            "    \ti\n",
            "  --long int\n",
            "    \tlong only\n",
            "  -n int\n",
            "    \tnumber of\n",
            "    \tthings (default 3)\n",
            "  -o, --output path\n",
            "    \twrite to path (default \"-\")\n",
        );

        let mut out = Vec::<u8>::new();

        assert!(write_defaults(&options, &mut out).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_usage() {
        let options = vec![info(&['v'], &["verbose"], Value::Bool(true), "chatty")];

        let mut out = Vec::<u8>::new();
        assert!(write_usage("prog", &options, &mut out).is_ok());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Usage of prog:\n  -v, --verbose\n    \tchatty (default true)\n"
        );

        let mut out = Vec::<u8>::new();
        assert!(write_usage("", &[], &mut out).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "Usage:\n");
    }
}
