use clap::Parser;

use tplkit::cli::{Args, Command, OutputFormat, operator_char, parse_map, parse_operand, text_value};
use tplkit::math::do_arithmetic;
use tplkit::output::{
    format_arithmetic, format_arithmetic_json, format_sorted_map, format_sorted_map_json,
};
use tplkit::sort::sort_entries;
use tplkit::strings::Truncator;
use tplkit::value::Value;

fn main() {
    tplkit::logging::init();
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> tplkit::Result<String> {
    match &args.command {
        Command::Sort { map } => {
            let sorted = sort_entries(parse_map(map)?);
            Ok(match args.format {
                OutputFormat::Text => format_sorted_map(&sorted),
                OutputFormat::Json => format!("{}\n", format_sorted_map_json(&sorted)),
            })
        }
        Command::Math { lhs, op, rhs } => {
            let (a, b) = (parse_operand(lhs), parse_operand(rhs));
            let op = operator_char(op);
            let result = do_arithmetic(&a, &b, op)?;
            Ok(match args.format {
                OutputFormat::Text => format_arithmetic(&a, op, &b, &result),
                OutputFormat::Json => format!("{}\n", format_arithmetic_json(&a, op, &b, &result)),
            })
        }
        Command::Truncate {
            length,
            text,
            ellipsis,
            safe_ellipsis,
            html,
        } => {
            let mut options = Vec::with_capacity(2);
            if let Some(ellipsis) = ellipsis {
                options.push(text_value(ellipsis, *safe_ellipsis));
            }
            options.push(text_value(text, *html));

            let truncated = Truncator::new().truncate(&Value::from(length.as_str()), &options)?;
            Ok(format!("{}\n", truncated))
        }
    }
}
