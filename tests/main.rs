use declarg::{
    normalize, Coercion, ConfigError, Outcome, Parameter, ParseError, Printer, Program, Token,
    Value,
};

fn tester() -> Program {
    Program::new("tester")
        .description("Some description for this program")
        .add(Parameter::argument("<first>").coerce(Coercion::parse::<f64>()))
        .add(Parameter::option("-t, --thing <requiredArg>"))
        .add(Parameter::option("-o, --other [optionalArg]").default("default value"))
        .add(Parameter::option("-f, --force").help("Force execution"))
}

#[test]
fn empty_program() {
    let parser = Program::new("organization").build_parser().unwrap();
    let result = parser.parse_tokens(&[]).unwrap();
    assert!(result.options().is_empty());
    assert!(result.arguments().is_empty());
    assert!(result.unknown_tokens().is_empty());
    assert_eq!(
        parser.evaluate(&["stray"]).unwrap_err(),
        ParseError::UnexpectedArgument("stray".to_string())
    );
}

#[test]
fn parse_tester() {
    let parser = tester().build_parser().unwrap();
    let result = parser.parse_tokens(&["-f", "-t", "42", "1.5"]).unwrap();
    assert_eq!(result.option("force"), Some(&Value::Bool(true)));
    assert_eq!(result.option("thing"), Some(&Value::from("42")));
    assert_eq!(result.option("other"), Some(&Value::from("default value")));
    assert_eq!(result.argument("first"), Some(&Value::Float(1.5)));
    assert!(result.unknown_tokens().is_empty());
}

#[test]
fn parse_tester_errors() {
    let parser = tester().build_parser().unwrap();
    assert_eq!(
        parser.evaluate(&["1", "--bogus"]).unwrap_err(),
        ParseError::UnknownOption("--bogus".to_string())
    );
    assert_eq!(
        parser.evaluate(&["1", "-t"]).unwrap_err(),
        ParseError::MissingOptionArgument("--thing".to_string())
    );
    assert_eq!(
        parser.evaluate(&["-f"]).unwrap_err(),
        ParseError::MissingRequiredArgument("<first>".to_string())
    );
    assert!(matches!(
        parser.evaluate(&["one"]).unwrap_err(),
        ParseError::Coercion { .. }
    ));
}

#[test]
fn help_anywhere() {
    let parser = tester().build_parser().unwrap();

    for tokens in [
        vec!["-h"],
        vec!["--help"],
        vec!["--bogus", "-h"],
        vec!["-t", "--help"],
        vec!["-fh"],
    ] {
        assert_eq!(
            parser.evaluate(&tokens).unwrap(),
            Outcome::HelpRequested,
            "{tokens:?}"
        );
    }
}

#[test]
fn help_message() {
    let parser = tester()
        .help_renderer(Printer::fixed(80))
        .build_parser()
        .unwrap();
    assert_eq!(
        parser.help_message(),
        r#"usage: tester [options] <first>

Some description for this program

options:
 -h, --help                  Display this help and usage information.
 -t, --thing <requiredArg>
 -o, --other [optionalArg]
 -f, --force                 Force execution"#
    );
}

#[test]
fn variadic_arguments() {
    let parser = Program::new("program")
        .add(Parameter::argument("<first>"))
        .add(Parameter::argument("<rest...>"))
        .build_parser()
        .unwrap();

    let result = parser.parse_tokens(&["a", "b", "c"]).unwrap();
    assert_eq!(result.argument("first"), Some(&Value::from("a")));
    assert_eq!(result.argument("rest"), Some(&Value::from(vec!["b", "c"])));

    assert_eq!(
        parser.evaluate(&["a"]).unwrap_err(),
        ParseError::MissingRequiredArgument("<rest...>".to_string())
    );
}

#[test]
fn variadic_misuse() {
    assert_eq!(
        Program::new("program")
            .add(Parameter::argument("<a...>"))
            .add(Parameter::argument("[b...]"))
            .build_parser()
            .unwrap_err(),
        ConfigError::DuplicateVariadic("[b...]".to_string())
    );
    assert_eq!(
        Program::new("program")
            .add(Parameter::argument("<a...>"))
            .add(Parameter::argument("<b>"))
            .build_parser()
            .unwrap_err(),
        ConfigError::MisplacedVariadic("<a...>".to_string())
    );
}

#[test]
fn unknown_options_tolerated() {
    let parser = Program::new("program")
        .allow_unknown_options()
        .add(Parameter::option("-f, --force"))
        .build_parser()
        .unwrap();

    let result = parser.parse_tokens(&["--bogus", "-f"]).unwrap();
    assert_eq!(result.option("force"), Some(&Value::Bool(true)));
    assert_eq!(result.unknown_tokens(), &["--bogus"]);
}

#[test]
fn normalization() {
    assert_eq!(
        normalize(["-abc", "--flag=value"]),
        vec![
            Token::Flag("-a".to_string()),
            Token::Flag("-b".to_string()),
            Token::Flag("-c".to_string()),
            Token::Flag("--flag".to_string()),
            Token::Value("value".to_string()),
        ]
    );
}
