use crate::model::{Coercion, Value};
use crate::parser::ConfigError;
use crate::spec::{parse_argument_spec, parse_option_spec, ArgumentSpec, OptionSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Opt,
    Arg,
}

/// An option or positional argument declaration, to be added to a [`Program`](./struct.Program.html).
///
/// The descriptor grammar is checked when the program is built.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Coercion, Parameter};
///
/// Parameter::option("-n, --count <n>")
///     .help("How many times to repeat.")
///     .default(1)
///     .coerce(Coercion::parse::<i64>());
/// Parameter::argument("[files...]");
/// ```
#[derive(Debug)]
pub struct Parameter {
    class: ParameterClass,
    descriptor: String,
    help: Option<String>,
    default: Option<Value>,
    coerce: Option<Coercion>,
}

impl Parameter {
    fn new(class: ParameterClass, descriptor: String) -> Self {
        Self {
            class,
            descriptor,
            help: None,
            default: None,
            coerce: None,
        }
    }

    /// Create an option parameter.
    ///
    /// The descriptor lists the short flag (optional), the long flag, and any sub-arguments: `-t, --thing <val>`.
    /// Without sub-arguments, the option is a flag: it is `false` unless specified.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::Parameter;
    ///
    /// Parameter::option("-f, --force");
    /// Parameter::option("--point <x> <y>");
    /// Parameter::option("-o|--other [optionalArg]");
    /// ```
    pub fn option(descriptor: impl Into<String>) -> Self {
        Self::new(ParameterClass::Opt, descriptor.into())
    }

    /// Create a positional argument parameter.
    ///
    /// The descriptor is `<name>` (required) or `[name]` (optional), with a `...` suffix for variadic: `<files...>`.
    /// The order of argument parameters corresponds to their positional order during parsing.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::Parameter;
    ///
    /// Parameter::argument("<source>");
    /// Parameter::argument("[destinations...]");
    /// ```
    pub fn argument(descriptor: impl Into<String>) -> Self {
        Self::new(ParameterClass::Arg, descriptor.into())
    }

    /// Document the help message for this option.
    /// If repeated, only the final message will apply.
    ///
    /// Positional arguments only appear in the usage line, so their help message is not rendered.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// The value used when the parameter isn't matched.
    ///
    /// For an option with several sub-arguments, each sub-argument takes on the default.
    /// A list default on a variadic parameter is extended by the matched values.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default.replace(value.into());
        self
    }

    /// Convert the matched tokens with `coercion`, rather than keeping them as `Value::Text`.
    /// For an option, the coercion applies to every sub-argument.
    pub fn coerce(mut self, coercion: Coercion) -> Self {
        self.coerce.replace(coercion);
        self
    }

    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }

    pub(super) fn into_option_spec(self) -> Result<OptionSpec, ConfigError> {
        parse_option_spec(&self.descriptor, self.help, self.default, self.coerce)
    }

    pub(super) fn into_argument_spec(self) -> Result<ArgumentSpec, ConfigError> {
        Ok(parse_argument_spec(&self.descriptor)?
            .with_coercion(self.coerce)
            .with_default(self.default))
    }
}
