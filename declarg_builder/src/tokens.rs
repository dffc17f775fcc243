/// A lexical unit of the command line input, after normalization.
///
/// Flags are always a single `--long` or `-s` specifier.
/// Values are anything else, including the right hand side of a `--long=value` token (even if it begins with `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An option specifier, such as `--thing` or `-t`.
    Flag(String),
    /// A value, matched against an option sub-argument or a positional argument.
    Value(String),
}

impl Token {
    /// Classify a raw input token by its leading `-`.
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();

        if raw.starts_with('-') {
            Token::Flag(raw)
        } else {
            Token::Value(raw)
        }
    }

    /// The text of this token.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Flag(text) | Token::Value(text) => text.as_str(),
        }
    }

    /// Whether this token is a `Token::Flag`.
    pub fn is_flag(&self) -> bool {
        matches!(self, Token::Flag(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize the raw command line input into one token per flag or value.
///
/// * `--flag=value` becomes `--flag value` (split only on the first `=`).
/// * `-abc` becomes `-a -b -c`.
/// * Everything else passes through as is.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{normalize, Token};
///
/// assert_eq!(
///     normalize(["-ab", "--key=v=1", "x"]),
///     vec![
///         Token::Flag("-a".to_string()),
///         Token::Flag("-b".to_string()),
///         Token::Flag("--key".to_string()),
///         Token::Value("v=1".to_string()),
///         Token::Value("x".to_string()),
///     ]
/// );
/// ```
pub fn normalize<I>(raw: I) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    normalize_tokens(raw.into_iter().map(|r| Token::classify(r.as_ref())))
}

/// Normalize an already classified token stream.
///
/// Values are never re-examined, which makes this idempotent: `normalize_tokens(normalize_tokens(x)) == normalize_tokens(x)`.
pub fn normalize_tokens(tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
    let mut out = Vec::default();

    for token in tokens {
        match token {
            Token::Flag(text) => expand_flag(text, &mut out),
            value => out.push(value),
        }
    }

    out
}

fn expand_flag(text: String, out: &mut Vec<Token>) {
    if text.starts_with("--") {
        match text.split_once('=') {
            Some((flag, value)) => {
                out.push(Token::Flag(flag.to_string()));
                out.push(Token::Value(value.to_string()));
            }
            None => out.push(Token::Flag(text)),
        }
    } else if text.chars().count() > 2 {
        out.extend(text.chars().skip(1).map(|c| Token::Flag(format!("-{c}"))));
    } else {
        out.push(Token::Flag(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{seq::SliceRandom, thread_rng, Rng};
    use rstest::rstest;

    fn flag(text: &str) -> Token {
        Token::Flag(text.to_string())
    }

    fn value(text: &str) -> Token {
        Token::Value(text.to_string())
    }

    #[rstest]
    #[case("-", flag("-"))]
    #[case("-a", flag("-a"))]
    #[case("--abc", flag("--abc"))]
    #[case("abc", value("abc"))]
    #[case("", value(""))]
    #[case("a-b", value("a-b"))]
    fn classify(#[case] raw: &str, #[case] expected: Token) {
        assert_eq!(Token::classify(raw), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["-abc"], vec![flag("-a"), flag("-b"), flag("-c")])]
    #[case(vec!["--flag=value"], vec![flag("--flag"), value("value")])]
    #[case(vec!["--flag="], vec![flag("--flag"), value("")])]
    #[case(vec!["--flag=a=b"], vec![flag("--flag"), value("a=b")])]
    #[case(vec!["--flag=-xy"], vec![flag("--flag"), value("-xy")])]
    #[case(vec!["--flag", "value"], vec![flag("--flag"), value("value")])]
    #[case(vec!["-a", "b"], vec![flag("-a"), value("b")])]
    #[case(vec!["-"], vec![flag("-")])]
    #[case(vec!["--"], vec![flag("--")])]
    #[case(vec!["-a=b"], vec![flag("-a"), flag("-="), flag("-b")])]
    #[case(vec!["-éü"], vec![flag("-é"), flag("-ü")])]
    #[case(vec!["x=y", "-f", "--g"], vec![value("x=y"), flag("-f"), flag("--g")])]
    fn normalize_cases(#[case] raw: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn normalize_idempotent() {
        let pieces = [
            "-", "--", "-a", "-abc", "--x", "--x=", "--x=1", "--x=-ab", "v", "v=w", "=", "-a=b",
        ];

        for _ in 0..100 {
            let length = thread_rng().gen_range(0..8);
            let raw: Vec<&str> = (0..length)
                .map(|_| *pieces.choose(&mut thread_rng()).unwrap())
                .collect();
            let once = normalize(&raw);
            let twice = normalize_tokens(once.clone());
            assert_eq!(twice, once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn normalize_preserves_order() {
        let tokens = normalize(["a", "-bc", "d", "--e=f", "g"]);
        let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();
        assert_eq!(texts, vec!["a", "-b", "-c", "d", "--e", "f", "g"]);
    }
}
