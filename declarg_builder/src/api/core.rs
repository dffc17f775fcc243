use crate::api::{Parameter, ParameterClass};
use crate::constant::{HELP_FLAGS, HELP_MESSAGE};
use crate::matcher::Registry;
use crate::parser::{
    CommandParser, ConfigError, ConsoleInterface, HelpRenderer, Printer, UserInterface,
};
use crate::spec::{parse_option_spec, ArgumentSpec, OptionSpec};

/// The program declaration: its options, positional arguments, and help configuration.
///
/// Declaration errors (ex: an invalid descriptor) are deferred until the program is built.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Parameter, Program, Value};
///
/// let parser = Program::new("program")
///     .description("My program that does awesome stuff.")
///     .add(Parameter::option("-f, --force").help("Force execution."))
///     .add(Parameter::argument("<first>"))
///     .build();
///
/// let result = parser.parse_tokens(&["-f", "hello"]).unwrap();
/// assert_eq!(result.option("force"), Some(&Value::Bool(true)));
/// assert_eq!(result.argument("first"), Some(&Value::from("hello")));
/// ```
pub struct Program {
    name: String,
    usage: Option<String>,
    description: Option<String>,
    options: Vec<OptionSpec>,
    arguments: Vec<ArgumentSpec>,
    allow_unknown: bool,
    help: Option<(String, String)>,
    renderer: Option<Box<dyn HelpRenderer>>,
    deferred_error: Option<ConfigError>,
}

impl Program {
    /// Create a program declaration.
    /// The name is used to generate the usage line in the help message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: None,
            description: None,
            options: Vec::default(),
            arguments: Vec::default(),
            allow_unknown: false,
            help: Some((HELP_FLAGS.to_string(), HELP_MESSAGE.to_string())),
            renderer: None,
            deferred_error: None,
        }
    }

    /// Document the usage line for this program.
    /// If not set, a usage line is generated from the program name and its positional arguments.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.replace(usage.into());
        self
    }

    /// Document the description for this program.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add an option/argument to the program.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of option parameters only affects the help message.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Program, Value};
    ///
    /// let parser = Program::new("program")
    ///     .add(Parameter::argument("<a>"))
    ///     .add(Parameter::argument("[b...]"))
    ///     .build();
    ///
    /// let result = parser.parse_tokens(&["1", "2", "3"]).unwrap();
    /// assert_eq!(result.argument("a"), Some(&Value::from("1")));
    /// assert_eq!(result.argument("b"), Some(&Value::from(vec!["2", "3"])));
    /// ```
    pub fn add(mut self, parameter: Parameter) -> Self {
        let outcome = match parameter.class() {
            ParameterClass::Opt => parameter
                .into_option_spec()
                .map(|spec| self.options.push(spec)),
            ParameterClass::Arg => parameter
                .into_argument_spec()
                .map(|spec| self.arguments.push(spec)),
        };

        if let Err(error) = outcome {
            // Only the first error is reported.
            self.deferred_error.get_or_insert(error);
        }

        self
    }

    /// Collect unknown options (and unexpected positional values) into [`ParseResult::unknown_tokens`](./struct.ParseResult.html#method.unknown_tokens), rather than failing the parse.
    pub fn allow_unknown_options(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// Replace the help option's flags and description (default: `-h, --help`).
    ///
    /// Help is only triggered by a flag token: in `--thing=--help`, `--help` is the value of `--thing`.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Outcome, Program};
    ///
    /// let parser = Program::new("program")
    ///     .help("-?, --usage", "Show usage.")
    ///     .build();
    ///
    /// assert_eq!(parser.evaluate(&["-?"]).unwrap(), Outcome::HelpRequested);
    /// assert!(parser.evaluate(&["-h"]).is_err());
    /// ```
    pub fn help(mut self, flags: impl Into<String>, description: impl Into<String>) -> Self {
        self.help.replace((flags.into(), description.into()));
        self
    }

    /// Remove the help option.
    pub fn no_help(mut self) -> Self {
        self.help.take();
        self
    }

    /// Replace the default help renderer ([`Printer`]).
    pub fn help_renderer(mut self, renderer: impl HelpRenderer + 'static) -> Self {
        self.renderer.replace(Box::new(renderer));
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<CommandParser, ConfigError> {
        let Program {
            name,
            usage,
            description,
            options,
            arguments,
            allow_unknown,
            help,
            renderer,
            deferred_error,
        } = self;

        if let Some(error) = deferred_error {
            return Err(error);
        }

        let help = match help {
            Some((flags, description)) => {
                let spec = parse_option_spec(&flags, Some(description), None, None)?;

                if !spec.is_flag() {
                    return Err(ConfigError::InvalidSpec(flags));
                }

                Some(spec)
            }
            None => None,
        };
        let mut registry = Registry::new(help, allow_unknown);

        for spec in options {
            registry.add_option(spec);
        }

        for spec in arguments {
            registry.add_argument(spec);
        }

        registry.validate()?;
        Ok(CommandParser::new(
            name,
            usage,
            description,
            registry,
            renderer.unwrap_or_else(|| Box::new(Printer::terminal())),
            user_interface,
        ))
    }

    /// Build the command parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option).
    pub fn build_parser(self) -> Result<CommandParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> CommandParser {
        match self.build_parser() {
            Ok(parser) => parser,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
