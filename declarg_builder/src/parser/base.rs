use thiserror::Error;

/// An error in the declaration of the program's options & arguments.
///
/// Reported by `Program::build_parser`, before any command line input is parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A descriptor violates the declaration grammar.
    #[error("Config error: invalid declaration '{0}'.")]
    InvalidSpec(String),

    /// An option descriptor without a `--long` flag.
    #[error("Config error: option '{0}' must declare a long flag (ex: '--name').")]
    MissingLongFlag(String),

    /// A second variadic descriptor within the same list.
    #[error("Config error: cannot declare a second variadic argument '{0}'.")]
    DuplicateVariadic(String),

    /// A variadic descriptor followed by another descriptor within the same list.
    #[error("Config error: variadic argument '{0}' must be declared last.")]
    MisplacedVariadic(String),

    /// An option flag (or derived name) declared more than once.
    #[error("Config error: cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    /// An argument name declared more than once.
    #[error("Config error: cannot duplicate the argument '{0}'.")]
    DuplicateArgument(String),
}

/// An error in matching the command line input against the declared options & arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An option-shaped token with no matching declaration.
    #[error("Parse error: unknown option '{0}'.")]
    UnknownOption(String),

    /// An option was not given its required value(s).
    #[error("Parse error: option '{0}' is missing a required argument.")]
    MissingOptionArgument(String),

    /// A variadic argument was met before the final position of its list.
    #[error("Parse error: variadic argument '{0}' must be last.")]
    MisplacedVariadic(String),

    /// The coercion for an argument rejected a token.
    #[error("Parse error: cannot convert '{token}' for '{name}': {reason}.")]
    Coercion {
        /// The offending token.
        token: String,
        /// The name of the argument (or option sub-argument) being matched.
        name: String,
        /// The coercion's reason for failing.
        reason: String,
    },

    /// The input ended before a required argument was matched.
    #[error("Parse error: missing required argument '{0}'.")]
    MissingRequiredArgument(String),

    /// A value token remained after all the arguments were matched.
    #[error("Parse error: unexpected argument '{0}'.")]
    UnexpectedArgument(String),
}
