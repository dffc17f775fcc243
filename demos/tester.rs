use declarg::{Coercion, Parameter, Program};

fn main() {
    let parser = Program::new("tester")
        .description("Some description for this program")
        .usage("tester [options] <argument>")
        .add(Parameter::argument("<first>").coerce(Coercion::parse::<f64>()))
        .add(
            Parameter::option("-t, --thing <requiredArg>")
                .help("Some description for what this option does"),
        )
        .add(
            Parameter::option("-o, --other [optionalArg]")
                .help("Some description for what this option does")
                .default("default value"),
        )
        .add(Parameter::option("-f, --force").help("Force execution"))
        .build();

    let result = parser.parse();
    let mut options: Vec<_> = result.options().iter().collect();
    options.sort_by_key(|(name, _)| *name);
    let mut arguments: Vec<_> = result.arguments().iter().collect();
    arguments.sort_by_key(|(name, _)| *name);

    for (name, value) in options {
        println!("option {name}: {value}");
    }

    for (name, value) in arguments {
        println!("argument {name}: {value}");
    }
}
