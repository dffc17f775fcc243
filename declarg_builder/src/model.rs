use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::str::FromStr;

/// A parsed value, as stored in a [`ParseResult`](./struct.ParseResult.html).
///
/// Without a [`Coercion`], every matched token is stored as `Value::Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nothing was matched, and no default was declared.
    Absent,
    /// The state of a flag (an option without sub-arguments).
    Bool(bool),
    /// A raw (or coerced) string.
    Text(String),
    /// A coerced integer.
    Integer(i64),
    /// A coerced floating point number.
    Float(f64),
    /// The values accumulated by a variadic argument.
    List(Vec<Value>),
    /// The values of an option with several sub-arguments, keyed by sub-argument name.
    Group(BTreeMap<String, Value>),
}

impl Value {
    /// Whether this is `Value::Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The boolean, if this is a `Value::Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string, if this is a `Value::Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The integer, if this is a `Value::Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The number, if this is a `Value::Float` or `Value::Integer`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The items, if this is a `Value::List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The named slot, if this is a `Value::Group`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Group(slots) => slots.get(name),
            _ => None,
        }
    }

    // Variadic slots extend a list, and start a fresh list over anything else.
    pub(crate) fn accumulate(&mut self, value: Value) {
        match self {
            Value::List(items) => items.push(value),
            _ => *self = Value::List(vec![value]),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Absent => write!(f, "none"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Group(slots) => {
                let inner: Vec<String> = slots.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

/// A caller supplied conversion from a raw token into a [`Value`].
///
/// A failing coercion is reported as a parse error, naming the offending token.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Coercion, Value};
///
/// let float = Coercion::parse::<f64>();
/// assert_eq!(float.apply("1.5").unwrap(), Value::Float(1.5));
/// assert!(float.apply("one").is_err());
///
/// let shout = Coercion::new(|raw: &str| -> Result<Value, String> { Ok(raw.to_uppercase().into()) });
/// assert_eq!(shout.apply("abc").unwrap(), Value::Text("ABC".to_string()));
/// ```
#[derive(Clone)]
pub struct Coercion(Rc<dyn Fn(&str) -> Result<Value, String>>);

impl Coercion {
    /// Wrap an arbitrary fallible conversion.
    pub fn new<F, E>(function: F) -> Self
    where
        F: Fn(&str) -> Result<Value, E> + 'static,
        E: std::fmt::Display,
    {
        Self(Rc::new(move |raw: &str| function(raw).map_err(|e| e.to_string())))
    }

    /// Convert via [`std::str::FromStr`] for `T`.
    pub fn parse<T>() -> Self
    where
        T: FromStr + Into<Value> + 'static,
        <T as FromStr>::Err: std::fmt::Display,
    {
        Self::new(|raw: &str| T::from_str(raw).map(Into::into))
    }

    /// Run the conversion against a raw token.
    pub fn apply(&self, raw: &str) -> Result<Value, String> {
        (self.0)(raw)
    }
}

impl std::fmt::Debug for Coercion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coercion{..}").finish()
    }
}

/// The terminal output of a successful parse.
///
/// Every declared option and argument has an entry, seeded before matching:
/// flags with `false`, valued options with their default (or `Value::Absent`), arguments with their default (or `Value::Absent`, or an empty list when variadic).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    pub(crate) options: HashMap<String, Value>,
    pub(crate) arguments: HashMap<String, Value>,
    pub(crate) unknown: Vec<String>,
}

impl ParseResult {
    /// The value of the option named `name` (the snake-cased long flag, ex: `dry_run` for `--dry-run`).
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// The value of the positional argument named `name`.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// All option values, by name.
    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }

    /// All argument values, by name.
    pub fn arguments(&self) -> &HashMap<String, Value> {
        &self.arguments
    }

    /// The tokens which matched no declaration.
    /// Only populated when unknown options are allowed.
    pub fn unknown_tokens(&self) -> &[String] {
        &self.unknown
    }
}

/// The outcome of evaluating the command line input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// All tokens were matched.
    Parsed(ParseResult),
    /// The help option was specified; no parse result is produced.
    HelpRequested,
}
