use crate::matcher::model::*;
use crate::matcher::Registry;
use crate::model::{Outcome, ParseResult, Value};
use crate::parser::ParseError;
use crate::spec::{ArgumentSpec, OptionSpec};
use crate::tokens::Token;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Matches a normalized token stream against the declarations of a `Registry`.
///
/// Single use: construct one per parse.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'r> {
    registry: &'r Registry,
    positionals: PositionalQueue<'r>,
    open: Option<OpenOption<'r>>,
    result: ParseResult,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            positionals: PositionalQueue::new(registry.arguments()),
            open: None,
            result: registry.seeded(),
        }
    }

    /// Run the tokens through the matcher.
    /// On failure, reports the index of the offending token (or `tokens.len()` when the input ended too soon).
    pub(crate) fn consume(mut self, tokens: &[Token]) -> Result<Outcome, (usize, ParseError)> {
        // Help takes precedence over everything, even tokens that would fail to match.
        if tokens.iter().any(|token| self.registry.is_help(token)) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested; skipping matching.");
            }

            return Ok(Outcome::HelpRequested);
        }

        for (index, token) in tokens.iter().enumerate() {
            self.feed(token).map_err(|error| (index, error))?;
        }

        self.close()
            .map(Outcome::Parsed)
            .map_err(|error| (tokens.len(), error))
    }

    fn feed(&mut self, token: &Token) -> Result<(), ParseError> {
        match token {
            Token::Flag(flag) => self.match_option(flag),
            Token::Value(value) => self.match_value(value),
        }
    }

    fn match_option(&mut self, flag: &str) -> Result<(), ParseError> {
        if let Some(open) = self.open.take() {
            if open.missing_required() {
                return Err(ParseError::MissingOptionArgument(
                    open.spec().long().to_string(),
                ));
            }
        }

        match self.registry.find_option_by_flag(flag) {
            Some(spec) if spec.is_flag() => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Set flag '{}'.", spec.long());
                }

                self.result
                    .options
                    .insert(spec.name().to_string(), Value::Bool(true));
            }
            Some(spec) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Opened option '{}' with {} sub-argument(s).",
                        spec.long(),
                        spec.arguments().len()
                    );
                }

                self.open.replace(OpenOption::new(spec));
            }
            None if self.registry.allow_unknown() => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Collected unknown option '{flag}'.");
                }

                self.result.unknown.push(flag.to_string());
            }
            None => {
                return Err(ParseError::UnknownOption(flag.to_string()));
            }
        };

        Ok(())
    }

    fn match_value(&mut self, raw: &str) -> Result<(), ParseError> {
        if let Some(open) = self.open.take() {
            if let Some(argument) = open.front() {
                return self.match_option_argument(open, argument, raw);
            }
        }

        self.match_argument(raw)
    }

    fn match_option_argument(
        &mut self,
        mut open: OpenOption<'r>,
        argument: &'r ArgumentSpec,
        raw: &str,
    ) -> Result<(), ParseError> {
        let spec = open.spec();
        let value = coerce(argument, raw)?;
        let slot = self.option_slot(spec, argument);

        if argument.variadic() {
            slot.accumulate(value);
        } else {
            *slot = value;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{raw}' to '{}' of '{}'.", argument.raw(), spec.long());
        }

        if open.satisfy() {
            self.open.replace(open);
        }

        Ok(())
    }

    fn match_argument(&mut self, raw: &str) -> Result<(), ParseError> {
        let argument = match self.positionals.front() {
            Some(argument) => argument,
            None if self.registry.allow_unknown() => {
                self.result.unknown.push(raw.to_string());
                return Ok(());
            }
            None => {
                return Err(ParseError::UnexpectedArgument(raw.to_string()));
            }
        };

        if argument.variadic() && self.positionals.len() > 1 {
            return Err(ParseError::MisplacedVariadic(argument.raw().to_string()));
        }

        let value = coerce(argument, raw)?;
        let slot = self
            .result
            .arguments
            .entry(argument.name().to_string())
            .or_insert(Value::Absent);

        if argument.variadic() {
            slot.accumulate(value);
        } else {
            *slot = value;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{raw}' to argument '{}'.", argument.raw());
        }

        self.positionals.satisfy();
        Ok(())
    }

    // Options with a single sub-argument hold the value directly, otherwise each sub-argument has a slot in the group.
    fn option_slot(&mut self, spec: &OptionSpec, argument: &ArgumentSpec) -> &mut Value {
        let value = self
            .result
            .options
            .entry(spec.name().to_string())
            .or_insert(Value::Absent);

        if spec.arguments().len() == 1 {
            return value;
        }

        match value {
            Value::Group(slots) => slots
                .entry(argument.name().to_string())
                .or_insert(Value::Absent),
            other => other,
        }
    }

    fn close(mut self) -> Result<ParseResult, ParseError> {
        if let Some(open) = self.open.take() {
            if open.missing_required() {
                return Err(ParseError::MissingOptionArgument(
                    open.spec().long().to_string(),
                ));
            }
        }

        self.positionals.finish();

        if let Some(argument) = self.positionals.first_unsatisfied_required() {
            return Err(ParseError::MissingRequiredArgument(
                argument.raw().to_string(),
            ));
        }

        Ok(self.result)
    }
}

fn coerce(argument: &ArgumentSpec, raw: &str) -> Result<Value, ParseError> {
    argument
        .coerce(raw)
        .map_err(|reason| ParseError::Coercion {
            token: raw.to_string(),
            name: argument.name().to_string(),
            reason,
        })
}
