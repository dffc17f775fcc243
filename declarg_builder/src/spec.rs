use crate::model::{Coercion, Value};
use crate::parser::ConfigError;

const VARIADIC_SUFFIX: &str = "...";

/// One declared positional argument (or option sub-argument), parsed from a descriptor such as `<first>` or `[rest...]`.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    raw: String,
    name: String,
    required: bool,
    variadic: bool,
    coerce: Option<Coercion>,
    default: Option<Value>,
}

impl ArgumentSpec {
    /// The original descriptor text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The identifier, with the brackets and ellipsis stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the descriptor was enclosed in angle brackets.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether the descriptor carried the `...` suffix.
    pub fn variadic(&self) -> bool {
        self.variadic
    }

    pub(crate) fn with_coercion(mut self, coerce: Option<Coercion>) -> Self {
        self.coerce = coerce;
        self
    }

    pub(crate) fn with_default(mut self, default: Option<Value>) -> Self {
        self.default = default;
        self
    }

    pub(crate) fn coerce(&self, raw: &str) -> Result<Value, String> {
        match &self.coerce {
            Some(coercion) => coercion.apply(raw),
            None => Ok(Value::Text(raw.to_string())),
        }
    }

    // The value an unmatched argument resolves to.
    pub(crate) fn seed(&self) -> Value {
        match (&self.default, self.variadic) {
            (Some(default), _) => default.clone(),
            (None, true) => Value::List(Vec::default()),
            (None, false) => Value::Absent,
        }
    }
}

/// One declared option, parsed from a descriptor such as `-t, --thing <val>`.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    raw: String,
    short: Option<String>,
    long: String,
    name: String,
    description: Option<String>,
    default: Option<Value>,
    arguments: Vec<ArgumentSpec>,
}

impl OptionSpec {
    /// The original descriptor text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The short flag, including its leading `-`.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long flag, including its leading `--`.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The snake-cased identifier derived from the long flag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The declared default value.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The sub-arguments, in declaration order.
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Whether this option takes no sub-arguments.
    pub fn is_flag(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Whether `token` is precisely this option's short or long flag.
    pub fn matches_flag(&self, token: &str) -> bool {
        self.long == token || self.short.as_deref() == Some(token)
    }
}

/// Parse a positional argument descriptor.
///
/// The descriptor must be an identifier of ascii alphanumerics enclosed in `<..>` (required) or `[..]` (optional), optionally suffixed by `...` (variadic).
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::parse_argument_spec;
///
/// let spec = parse_argument_spec("[rest...]").unwrap();
/// assert_eq!(spec.name(), "rest");
/// assert!(!spec.required());
/// assert!(spec.variadic());
/// ```
pub fn parse_argument_spec(text: &str) -> Result<ArgumentSpec, ConfigError> {
    let invalid = || ConfigError::InvalidSpec(text.to_string());
    let (required, inner) = if let Some(inner) = text.strip_prefix('<') {
        (true, inner.strip_suffix('>').ok_or_else(invalid)?)
    } else if let Some(inner) = text.strip_prefix('[') {
        (false, inner.strip_suffix(']').ok_or_else(invalid)?)
    } else {
        return Err(invalid());
    };

    let (name, variadic) = match inner.strip_suffix(VARIADIC_SUFFIX) {
        Some(name) => (name, true),
        None => (inner, false),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    Ok(ArgumentSpec {
        raw: text.to_string(),
        name: name.to_string(),
        required,
        variadic,
        coerce: None,
        default: None,
    })
}

/// Parse an option descriptor.
///
/// The descriptor is split on runs of `,`, `|` and ` `.
/// Each piece is either the long flag (`--name`, mandatory), the short flag (`-n`), or a sub-argument descriptor (see [`parse_argument_spec`]).
/// The `coerce` function applies to every sub-argument.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::parse_option_spec;
///
/// let spec = parse_option_spec("-d, --dry-run", None, None, None).unwrap();
/// assert_eq!(spec.short(), Some("-d"));
/// assert_eq!(spec.long(), "--dry-run");
/// assert_eq!(spec.name(), "dry_run");
/// assert!(spec.is_flag());
/// ```
pub fn parse_option_spec(
    text: &str,
    description: Option<String>,
    default: Option<Value>,
    coerce: Option<Coercion>,
) -> Result<OptionSpec, ConfigError> {
    let mut short: Option<String> = None;
    let mut long: Option<String> = None;
    let mut arguments = Vec::default();

    for part in text
        .split(|c: char| c == ',' || c == '|' || c == ' ')
        .filter(|part| !part.is_empty())
    {
        if part.starts_with("--") {
            if long.replace(part.to_string()).is_some() {
                return Err(ConfigError::InvalidSpec(text.to_string()));
            }
        } else if part.starts_with('-') {
            // Bundled short flags are split per character, so only a single character can ever match.
            if part.chars().count() != 2 || short.replace(part.to_string()).is_some() {
                return Err(ConfigError::InvalidSpec(text.to_string()));
            }
        } else {
            let argument = parse_argument_spec(part)
                .map_err(|_| ConfigError::InvalidSpec(text.to_string()))?;

            if arguments
                .iter()
                .any(|existing: &ArgumentSpec| existing.name == argument.name)
            {
                return Err(ConfigError::DuplicateArgument(argument.name));
            }

            arguments.push(argument.with_coercion(coerce.clone()));
        }
    }

    let long = long.ok_or_else(|| ConfigError::MissingLongFlag(text.to_string()))?;
    let name = snake_case(&long["--".len()..]);

    if name.is_empty() {
        return Err(ConfigError::InvalidSpec(text.to_string()));
    }

    check_variadic_placement(&arguments)?;

    Ok(OptionSpec {
        raw: text.to_string(),
        short,
        long,
        name,
        description,
        default,
        arguments,
    })
}

/// Only one variadic spec may appear in a list, and only as the final item.
pub(crate) fn check_variadic_placement(arguments: &[ArgumentSpec]) -> Result<(), ConfigError> {
    let variadics: Vec<&ArgumentSpec> = arguments.iter().filter(|a| a.variadic).collect();

    if variadics.len() > 1 {
        return Err(ConfigError::DuplicateVariadic(variadics[1].raw.clone()));
    }

    match arguments.iter().rev().skip(1).find(|a| a.variadic) {
        Some(misplaced) => Err(ConfigError::MisplacedVariadic(misplaced.raw.clone())),
        None => Ok(()),
    }
}

fn snake_case(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_ascii_lowercase())
        .collect::<Vec<String>>()
        .join("_")
}
