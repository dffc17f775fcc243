use std::collections::HashSet;

use crate::model::{ParseResult, Value};
use crate::parser::ConfigError;
use crate::spec::{check_variadic_placement, ArgumentSpec, OptionSpec};
use crate::tokens::Token;

/// The declared options & positional arguments, alongside the result mappings seeded from them.
#[derive(Debug)]
pub(crate) struct Registry {
    options: Vec<OptionSpec>,
    arguments: Vec<ArgumentSpec>,
    help: Option<OptionSpec>,
    allow_unknown: bool,
    seeded: ParseResult,
}

impl Registry {
    pub(crate) fn new(help: Option<OptionSpec>, allow_unknown: bool) -> Self {
        Self {
            options: Vec::default(),
            arguments: Vec::default(),
            help,
            allow_unknown,
            seeded: ParseResult::default(),
        }
    }

    pub(crate) fn add_option(&mut self, spec: OptionSpec) {
        let seed = match spec.arguments() {
            [] => Value::Bool(false),
            [_] => spec.default().cloned().unwrap_or(Value::Absent),
            several => Value::Group(
                several
                    .iter()
                    .map(|argument| {
                        (
                            argument.name().to_string(),
                            spec.default().cloned().unwrap_or(Value::Absent),
                        )
                    })
                    .collect(),
            ),
        };
        self.seeded.options.insert(spec.name().to_string(), seed);
        self.options.push(spec);
    }

    pub(crate) fn add_argument(&mut self, spec: ArgumentSpec) {
        self.seeded
            .arguments
            .insert(spec.name().to_string(), spec.seed());
        self.arguments.push(spec);
    }

    /// Check the declarations as a whole.
    /// Individual descriptors have already been checked by the spec parser.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut flags: HashSet<&str> = HashSet::default();
        let mut names: HashSet<&str> = HashSet::default();

        for spec in self.options.iter().chain(self.help.iter()) {
            for flag in std::iter::once(spec.long()).chain(spec.short()) {
                if !flags.insert(flag) {
                    return Err(ConfigError::DuplicateOption(flag.to_string()));
                }
            }

            if !names.insert(spec.name()) {
                return Err(ConfigError::DuplicateOption(spec.long().to_string()));
            }
        }

        let mut argument_names: HashSet<&str> = HashSet::default();

        for spec in &self.arguments {
            if !argument_names.insert(spec.name()) {
                return Err(ConfigError::DuplicateArgument(spec.name().to_string()));
            }
        }

        check_variadic_placement(&self.arguments)
    }

    pub(crate) fn find_option_by_flag(&self, flag: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .chain(self.help.iter())
            .find(|spec| spec.matches_flag(flag))
    }

    pub(crate) fn is_help(&self, token: &Token) -> bool {
        match (&self.help, token) {
            (Some(help), Token::Flag(flag)) => help.matches_flag(flag),
            _ => false,
        }
    }

    pub(crate) fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub(crate) fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub(crate) fn help(&self) -> Option<&OptionSpec> {
        self.help.as_ref()
    }

    pub(crate) fn allow_unknown(&self) -> bool {
        self.allow_unknown
    }

    /// A fresh copy of the seeded result mappings, for a single parse to fill in.
    pub(crate) fn seeded(&self) -> ParseResult {
        self.seeded.clone()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::constant::{HELP_FLAGS, HELP_MESSAGE};
    use crate::spec::{parse_argument_spec, parse_option_spec};

    /// Build a registry without validating it.
    pub(crate) fn registry(options: &[&str], arguments: &[&str], allow_unknown: bool) -> Registry {
        let help = parse_option_spec(HELP_FLAGS, Some(HELP_MESSAGE.to_string()), None, None)
            .unwrap();
        let mut registry = Registry::new(Some(help), allow_unknown);

        for text in options {
            registry.add_option(parse_option_spec(text, None, None, None).unwrap());
        }

        for text in arguments {
            registry.add_argument(parse_argument_spec(text).unwrap());
        }

        registry
    }
}
