//! `declarg` is a declarative command line parser for Rust.
//!
//! A program is declared with short descriptor strings, in the style of `-t, --thing <val>` or `[files...]`.
//! Parsing produces a [`ParseResult`]: a mapping of every declared option and argument to its [`Value`].
//!
//! The design concerns are:
//! * *Declarative*:
//! Options and arguments are declared by their help-style descriptors, so the declaration doubles as documentation.
//! * *Predictable results*:
//! Every declared option and argument has an entry in the result, seeded before parsing (flags with `false`, others with their default).
//! * *Typed failures*:
//! Declaration mistakes surface as a [`ConfigError`] when building; input mistakes surface as a [`ParseError`] naming the offending token.
//! Only the outermost shell ([`CommandParser::parse`]) exits the process.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/tester.rs")]
//! ```
//!
//! ```console
//! $ tester -h
//! usage: tester [options] <argument>
//!
//! Some description for this program
//!
//! options:
//!  -h, --help                  Display this help and usage information.
//!  -t, --thing <requiredArg>   Some description for what this option does
//!  -o, --other [optionalArg]   Some description for what this option does
//!  -f, --force                 Force execution
//!
//! $ tester -ft 42 1.5
//! option force: true
//! option other: default value
//! option thing: 42
//! argument first: 1.5
//!
//! $ tester --thing
//! Parse error: option '--thing' is missing a required argument.
//! --thing
//!         ^
//! ```
//!
//! # Descriptors
//! ### Arguments
//! Positional arguments are matched in declaration order.
//! * `<name>`: a required argument.
//! * `[name]`: an optional argument.
//! * `<name...>` / `[name...]`: a variadic argument, which absorbs all the remaining values (at least one when required).
//! Only the final argument may be variadic.
//!
//! ### Options
//! An option descriptor lists a short flag (optional), a long flag (mandatory), and its sub-arguments, separated by any of `,`, `|`, and ` `.
//! * `-f, --force`: a flag, which is `true` when specified.
//! * `-t, --thing <val>`: an option with a required value.
//! * `-o, --other [val]`: an option with an optional value.
//! * `--point <x> <y>`: an option with several values, stored as a [`Value::Group`] keyed by sub-argument name.
//! * `--files <f...>`: an option absorbing values until the next option.
//!
//! The result key for an option is derived from its long flag: `--dry-run` is keyed as `dry_run`.
//!
//! # Input
//! Before matching, the input is normalized:
//! * `-abc` is equivalent to `-a -b -c`.
//! * `--thing=42` is equivalent to `--thing 42`.
//!
//! The help option (`-h, --help` by default) takes precedence over all other input.
//! See [`Program::help`] and [`Program::no_help`] to configure it.
//!
//! # Values
//! Without a [`Coercion`], matched values are kept as [`Value::Text`].
//! Use [`Coercion::parse`] to convert via [`std::str::FromStr`], or [`Coercion::new`] for an arbitrary conversion.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events from the matching engine and help printer.
pub use declarg_builder::*;
