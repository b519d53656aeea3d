//! Command-line interface definitions for gpwd.
//!
//! This module describes the flags gpwd accepts using `clap`. It contains
//! no generation logic; [`Cli::generator_config`] is the only bridge into
//! the library.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use gpwd::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(
    name = "gpwd",
    version,
    about = "Generate random passwords",
    long_about = r#"
gpwd builds passwords from the character classes you enable, always
placing at least one character of each enabled class, then shuffles
the result.

By default it produces one 12-character password made of upper case
letters, lower case letters and digits, with visually similar
characters (0 O o l I 1 8 B 9 q) removed.

Boolean flags take an optional value: `-s` and `-s true` both enable
symbols, `-n false` allows similar characters again.
"#,
    after_help = r#"Examples:
  gpwd                              12 characters, letters and digits
  gpwd -l 16 -s true                16 characters including symbols
  gpwd -l 8 -u false -w false -n false
                                    8 digits, similar digits allowed
  gpwd -l 20 -s true -n false       20 characters, symbols and similar characters
  gpwd -b 5 -c                      5 passwords, first one copied to the clipboard"#
)]
pub struct Cli {
    /// Length of each password (at most 4096)
    #[arg(short = 'l', long = "len", alias = "length", default_value_t = 12)]
    pub length: usize,

    /// Include upper case letters (A-Z)
    #[arg(
        short = 'u',
        long = "upper",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub upper: bool,

    /// Include lower case letters (a-z)
    #[arg(
        short = 'w',
        long = "lower",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub lower: bool,

    /// Include digits (0-9)
    #[arg(
        short = 'd',
        long = "digit",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub digits: bool,

    /// Include symbols (e.g. !@#$%)
    #[arg(
        short = 's',
        long = "symbol",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub symbols: bool,

    /// Exclude similar characters like '0', 'O', 'l', 'I', '1'
    #[arg(
        short = 'n',
        long = "no-similar",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub exclude_similar: bool,

    /// Number of passwords to generate
    #[arg(short = 'b', long = "batch", default_value_t = 1)]
    pub batch: usize,

    /// Copy the first password to the clipboard
    #[arg(
        short = 'c',
        long = "copy",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub copy: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length,
            uppercase: self.upper,
            lowercase: self.lower,
            digits: self.digits,
            symbols: self.symbols,
            exclude_similar: self.exclude_similar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["gpwd"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.generator_config(), GeneratorConfig::default());
        assert_eq!(cli.batch, 1);
        assert!(!cli.copy);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn bare_flag_means_true() {
        let cli = parse(&["-s", "-c"]);
        assert!(cli.symbols);
        assert!(cli.copy);
    }

    #[test]
    fn explicit_values() {
        let cli = parse(&["-l", "8", "-u", "false", "-w", "false", "-n", "false"]);
        let cfg = cli.generator_config();
        assert_eq!(cfg.length, 8);
        assert!(!cfg.uppercase);
        assert!(!cfg.lowercase);
        assert!(cfg.digits);
        assert!(!cfg.exclude_similar);
    }

    #[test]
    fn long_aliases() {
        let cli = parse(&["--len", "20", "--symbol=true", "--no-similar=false", "--batch", "3"]);
        assert_eq!(cli.length, 20);
        assert!(cli.symbols);
        assert!(!cli.exclude_similar);
        assert_eq!(cli.batch, 3);
    }

    #[test]
    fn rejects_negative_length() {
        assert!(Cli::try_parse_from(["gpwd", "-l", "-3"]).is_err());
    }
}
