use std::env;

use crate::matcher::{Registry, TokenMatcher};
use crate::model::{Outcome, ParseResult};
use crate::parser::interface::UserInterface;
use crate::parser::printer::{generate_usage, HelpRenderer};
use crate::parser::{ErrorContext, ParseError};
use crate::spec::OptionSpec;
use crate::tokens::{normalize, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via `Program::build` or `Program::build_parser`.
///
/// The parser holds no per-parse state, so it may parse any number of times.
pub struct CommandParser {
    program: String,
    usage: Option<String>,
    description: Option<String>,
    registry: Registry,
    renderer: Box<dyn HelpRenderer>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandParser")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl CommandParser {
    pub(crate) fn new(
        program: String,
        usage: Option<String>,
        description: Option<String>,
        registry: Registry,
        renderer: Box<dyn HelpRenderer>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program,
            usage,
            description,
            registry,
            renderer,
            user_interface,
        }
    }

    /// Match the input tokens against the declared options & arguments, without any printing or exiting.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Outcome, Parameter, ParseError, Program, Value};
    ///
    /// let parser = Program::new("program")
    ///     .add(Parameter::option("-f, --force"))
    ///     .add(Parameter::argument("<first>"))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// match parser.evaluate(&["-f", "hello"]).unwrap() {
    ///     Outcome::Parsed(result) => {
    ///         assert_eq!(result.option("force"), Some(&Value::Bool(true)));
    ///         assert_eq!(result.argument("first"), Some(&Value::from("hello")));
    ///     }
    ///     Outcome::HelpRequested => unreachable!(),
    /// }
    ///
    /// assert_eq!(parser.evaluate(&["-h"]).unwrap(), Outcome::HelpRequested);
    /// assert_eq!(
    ///     parser.evaluate(&["--bogus"]).unwrap_err(),
    ///     ParseError::UnknownOption("--bogus".to_string())
    /// );
    /// ```
    pub fn evaluate(&self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        self.consume(&normalize(tokens)).map_err(|(_, error)| error)
    }

    fn consume(&self, tokens: &[Token]) -> Result<Outcome, (usize, ParseError)> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing normalized tokens: {tokens:?}.");
        }

        TokenMatcher::new(&self.registry).consume(tokens)
    }

    /// Render the help message.
    ///
    /// When the program doesn't declare a usage, one is generated from the program name and its positional arguments.
    pub fn help_message(&self) -> String {
        let mut options: Vec<OptionSpec> = self.registry.help().into_iter().cloned().collect();
        options.extend(self.registry.options().iter().cloned());
        let usage = match &self.usage {
            Some(usage) => usage.clone(),
            None => generate_usage(&self.program, !options.is_empty(), self.registry.arguments()),
        };

        self.renderer
            .render(Some(&usage), self.description.as_deref(), &options)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the parser encounters an error (ex: an unknown option, a missing argument, etc), it prints the error and returns with `Err(1)`.
    ///
    /// If the help option (`-h` or `--help` by default) is encountered, the parser prints the help message and returns with `Err(0)`.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Program, Value};
    ///
    /// let parser = Program::new("program")
    ///     .add(Parameter::option("-t, --thing <val>"))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let result = parser.parse_tokens(&["--thing=42"]).unwrap();
    /// assert_eq!(result.option("thing"), Some(&Value::from("42")));
    ///
    /// assert_eq!(parser.parse_tokens(&["--thing"]).unwrap_err(), 1);
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParseResult, i32> {
        let tokens = normalize(tokens);

        match self.consume(&tokens) {
            Ok(Outcome::Parsed(result)) => Ok(result),
            Ok(Outcome::HelpRequested) => {
                self.user_interface.print(self.help_message());
                Err(0)
            }
            Err((offset, error)) => {
                self.user_interface.print_error(error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, &tokens));
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the parser encounters an error (ex: an unknown option, a missing argument, etc), it exits with error code `1` (via `std::process::exit`).
    ///
    /// If the help option is encountered, the parser prints the help message and exits with error code `0`.
    pub fn parse(&self) -> ParseResult {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(result) => result,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{HELP_FLAGS, HELP_MESSAGE};
    use crate::matcher::test::registry;
    use crate::model::Value;
    use crate::parser::util::channel_interface;
    use crate::parser::Printer;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn command_parser(
        registry: Registry,
        usage: Option<&str>,
        user_interface: Box<dyn UserInterface>,
    ) -> CommandParser {
        CommandParser::new(
            "program".to_string(),
            usage.map(str::to_string),
            Some("Program description.".to_string()),
            registry,
            Box::new(Printer::fixed(120)),
            user_interface,
        )
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = command_parser(registry(&[], &[], false), None, Box::new(sender));

        // Execute
        let result = parser.parse_tokens(empty::slice()).unwrap();
        drop(parser);

        // Verify
        assert_eq!(result, ParseResult::default());
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["-f", "-t", "42", "hello"])]
    #[case(vec!["-ft", "42", "hello"])]
    #[case(vec!["hello", "--thing=42", "--force"])]
    fn parse_tokens(#[case] tokens: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = command_parser(
            registry(&["-f, --force", "-t, --thing <val>"], &["<first>"], false),
            None,
            Box::new(sender),
        );

        // Execute
        let result = parser.parse_tokens(tokens.as_slice()).unwrap();
        drop(parser);

        // Verify
        assert_eq!(result.option("force"), Some(&Value::Bool(true)));
        assert_eq!(result.option("thing"), Some(&Value::from("42")));
        assert_eq!(result.argument("first"), Some(&Value::from("hello")));
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["--bogus"], "unknown option '--bogus'", ErrorContext::new(0, &normalize(["--bogus"])))]
    #[case(vec!["a", "-t"], "option '--thing' is missing", ErrorContext::new(2, &normalize(["a", "-t"])))]
    #[case(vec!["-f"], "missing required argument '<first>'", ErrorContext::new(1, &normalize(["-f"])))]
    #[case(vec!["a", "b"], "unexpected argument 'b'", ErrorContext::new(1, &normalize(["a", "b"])))]
    #[case(vec!["-fx", "a"], "unknown option '-x'", ErrorContext::new(1, &normalize(["-fx", "a"])))]
    fn parse_tokens_error(
        #[case] tokens: Vec<&str>,
        #[case] expected: &str,
        #[case] expected_context: ErrorContext,
    ) {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = command_parser(
            registry(&["-f, --force", "-t, --thing <val>"], &["<first>"], false),
            None,
            Box::new(sender),
        );

        // Execute
        let exit_code = parser.parse_tokens(tokens.as_slice()).unwrap_err();
        drop(parser);

        // Verify
        assert_eq!(exit_code, 1);
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        let error = error.unwrap();
        assert_contains!(error, expected);
        assert_eq!(error_context, Some(expected_context));
    }

    #[rstest]
    #[case(vec!["-h"])]
    #[case(vec!["--help"])]
    #[case(vec!["--bogus", "a", "b", "--help"])]
    fn parse_tokens_help(#[case] tokens: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let parser = command_parser(
            registry(&["-f, --force"], &["<first>"], false),
            None,
            Box::new(sender),
        );

        // Execute
        let exit_code = parser.parse_tokens(tokens.as_slice()).unwrap_err();
        drop(parser);

        // Verify
        assert_eq!(exit_code, 0);
        let message = receiver.consume_message();
        assert_eq!(
            message,
            format!(
                r#"usage: program [options] <first>

Program description.

options:
 {HELP_FLAGS}    {HELP_MESSAGE}
 -f, --force"#
            )
        );
    }

    #[test]
    fn help_message_usage() {
        let (sender, _receiver) = channel_interface();
        let parser = command_parser(
            registry(&[], &["[rest...]"], false),
            Some("program [stuff]"),
            Box::new(sender),
        );
        assert_contains!(parser.help_message(), "usage: program [stuff]\n");
    }

    #[test]
    fn help_message_no_options() {
        let (sender, _receiver) = channel_interface();
        let parser = CommandParser::new(
            "program".to_string(),
            None,
            None,
            Registry::new(None, false),
            Box::new(Printer::fixed(120)),
            Box::new(sender),
        );
        assert_eq!(parser.help_message(), "usage: program");
    }

    #[test]
    fn parse_repeatedly() {
        let (sender, _receiver) = channel_interface();
        let parser = command_parser(
            registry(&["-f, --force"], &["[rest...]"], false),
            None,
            Box::new(sender),
        );

        let first = parser.parse_tokens(&["-f", "a", "b"]).unwrap();
        let second = parser.parse_tokens(&["c"]).unwrap();
        assert_eq!(first.option("force"), Some(&Value::Bool(true)));
        assert_eq!(first.argument("rest"), Some(&Value::from(vec!["a", "b"])));
        assert_eq!(second.option("force"), Some(&Value::Bool(false)));
        assert_eq!(second.argument("rest"), Some(&Value::from(vec!["c"])));
    }
}
