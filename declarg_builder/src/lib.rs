//! Builder module for `declarg`.
//! See [documentation root](https://docs.rs/declarg/latest/declarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
mod spec;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{CommandParser, ConfigError, HelpRenderer, ParseError, Printer};
pub use spec::{parse_argument_spec, parse_option_spec, ArgumentSpec, OptionSpec};
pub use tokens::{normalize, normalize_tokens, Token};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
