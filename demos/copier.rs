use declarg::{Coercion, Parameter, Program, Value};

fn main() {
    let parser = Program::new("copier")
        .description("Print the plan for copying the sources into the destination.")
        .add(Parameter::argument("<destination>"))
        .add(Parameter::argument("<sources...>"))
        .add(Parameter::option("-n, --dry-run").help("Only print what would be copied."))
        .add(
            Parameter::option("-r, --retries <count>")
                .help("How many times to retry a failed copy.")
                .default(0)
                .coerce(Coercion::parse::<i64>()),
        )
        .add(
            Parameter::option("--exclude <patterns...>")
                .help("Skip the sources matching any of the patterns."),
        )
        .allow_unknown_options()
        .build();

    let result = parser.parse();
    let destination = result
        .argument("destination")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let retries = result
        .option("retries")
        .and_then(Value::as_integer)
        .unwrap_or_default();
    let excluded: Vec<&str> = result
        .option("exclude")
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
        .collect();

    let verb = match result.option("dry_run") {
        Some(Value::Bool(true)) => "would copy",
        _ => "copy",
    };

    for source in result
        .argument("sources")
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
    {
        if excluded.iter().any(|pattern| source.contains(pattern)) {
            println!("skip {source}");
        } else {
            println!("{verb} {source} -> {destination} (retries: {retries})");
        }
    }

    for token in result.unknown_tokens() {
        eprintln!("ignoring unknown token '{token}'");
    }
}
