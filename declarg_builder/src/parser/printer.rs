use terminal_size::{terminal_size, Width};

use crate::parser::ColumnRenderer;
use crate::spec::{ArgumentSpec, OptionSpec};
use crate::tokens::Token;

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;
// Used when the output isn't attached to a terminal.
const FALLBACK_TOTAL_WIDTH: usize = 80;

/// Behaviour to render the help message for a program.
///
/// The command parser decides when to render; the renderer only formats text.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{HelpRenderer, OptionSpec, Program};
///
/// struct Terse;
///
/// impl HelpRenderer for Terse {
///     fn render(&self, usage: Option<&str>, _: Option<&str>, options: &[OptionSpec]) -> String {
///         let flags: Vec<&str> = options.iter().map(|o| o.long()).collect();
///         format!("{} {}", usage.unwrap_or_default(), flags.join(" "))
///     }
/// }
///
/// let parser = Program::new("program")
///     .help_renderer(Terse)
///     .build_parser()
///     .unwrap();
///
/// assert_eq!(parser.help_message(), "program [options] --help");
/// ```
pub trait HelpRenderer {
    /// Render the help message from the program's usage, description, and options (including the help option itself).
    fn render(
        &self,
        usage: Option<&str>,
        description: Option<&str>,
        options: &[OptionSpec],
    ) -> String;
}

/// The default help renderer.
///
/// Prints the usage, the description, and then each option's flags aligned alongside its description.
/// Descriptions wrap to fit the terminal width.
#[derive(Debug, Default)]
pub struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer fitted to the width of the attached terminal (if any).
    pub fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self { terminal_width }
    }

    /// A printer fitted to a fixed total width.
    pub fn fixed(total_width: usize) -> Self {
        Self {
            terminal_width: Some(total_width),
        }
    }
}

impl HelpRenderer for Printer {
    fn render(
        &self,
        usage: Option<&str>,
        description: Option<&str>,
        options: &[OptionSpec],
    ) -> String {
        let mut lines: Vec<String> = Vec::default();

        if let Some(usage) = usage {
            lines.push(format!("usage: {usage}"));
        }

        if let Some(description) = description {
            if !lines.is_empty() {
                lines.push(String::default());
            }

            lines.push(description.to_string());
        }

        if !options.is_empty() {
            let option_flags: Vec<String> = options.iter().map(flags).collect();
            let left_column_width = option_flags
                .iter()
                .map(|f| f.chars().count())
                .max()
                .unwrap_or_default();
            let middle_column_width = options
                .iter()
                .filter_map(OptionSpec::description)
                .map(|d| d.chars().count() + MAIN_INDENT)
                .max()
                .unwrap_or_default();
            let column_renderer = ColumnRenderer::guided(
                PADDING_WIDTH,
                left_column_width,
                middle_column_width,
                self.terminal_width.unwrap_or(FALLBACK_TOTAL_WIDTH),
            );

            if !lines.is_empty() {
                lines.push(String::default());
            }

            lines.push("options:".to_string());

            for (spec, option_flags) in options.iter().zip(option_flags) {
                lines.extend(column_renderer.render(
                    MAIN_INDENT,
                    &option_flags,
                    spec.description().unwrap_or_default(),
                ));
            }
        }

        lines.join("\n")
    }
}

// Ex: "-t, --thing <val>"
fn flags(spec: &OptionSpec) -> String {
    let mut parts: Vec<&str> = Vec::default();

    if let Some(short) = spec.short() {
        parts.push(short);
    }

    parts.push(spec.long());
    let mut out = parts.join(", ");

    for argument in spec.arguments() {
        out.push(' ');
        out.push_str(argument.raw());
    }

    out
}

/// The usage line generated when the program doesn't declare one.
// Ex: "program [options] <first> [rest...]"
pub(crate) fn generate_usage(program: &str, has_options: bool, arguments: &[ArgumentSpec]) -> String {
    let mut parts = vec![program];

    if has_options {
        parts.push("[options]");
    }

    parts.extend(arguments.iter().map(ArgumentSpec::raw));
    parts.join(" ")
}

/// The normalized input tokens, pointing out the token at `offset`.
/// An offset at (or beyond) the end points just past the final token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[Token]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // Each preceding token, plus its separating space.
        let caret: usize = self
            .tokens
            .iter()
            .take(self.offset)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{projection}\n{:caret$}^", "")
    }
}
