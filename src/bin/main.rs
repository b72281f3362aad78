use crossterm::style::Stylize;
use fraction_core::core::scanner::scan;
use fraction_core::persistence::{load_tables_auto, save_tables, save_tables_json};
use fraction_core::{parse_value, FractionParser, Grammar};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOCALE_ENV: &str = "FRACTION_LOCALE";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let custom = match locale_path() {
        Some(path) => match load_tables_auto(Path::new(&path)).and_then(Grammar::from_tables) {
            Ok(grammar) => Some(grammar),
            Err(e) => {
                eprintln!("{} could not load locale '{}': {}", "[ERROR]".red(), path, e);
                std::process::exit(1);
            }
        },
        None => None,
    };
    let grammar = custom.as_ref().unwrap_or_else(|| Grammar::english());
    let parser = FractionParser::new(grammar);

    println!("Word fractions ({} locale). Type 'exit' to quit.", grammar.name());
    println!("Commands: ':pattern <text>', ':json <value>', ':save <path>'");
    println!("---------------------------------------------------------------");

    loop {
        print!("> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":pattern ") => show_pattern(&s[":pattern ".len()..], grammar),
            s if s.starts_with(":json ") => {
                let raw = &s[":json ".len()..];
                match serde_json::from_str(raw) {
                    Ok(value) => report(parse_value(&value, Some(grammar)).map_err(|e| e.to_string())),
                    Err(e) => report(Err(format!("invalid json: {}", e))),
                }
            }
            s if s.starts_with(":save ") => {
                let path = Path::new(s[":save ".len()..].trim());
                let saved = if path.extension().map_or(false, |e| e == "json") {
                    save_tables_json(grammar.tables(), path)
                } else {
                    save_tables(grammar.tables(), path)
                };
                match saved {
                    Ok(()) => println!("Locale saved to '{}'", path.display()),
                    Err(e) => eprintln!("{} could not save locale: {}", "[ERROR]".red(), e),
                }
            }
            s => report(parser.parse(s).map_err(|e| e.to_string())),
        }
    }
}

fn locale_path() -> Option<String> {
    std::env::args().nth(1).or_else(|| std::env::var(LOCALE_ENV).ok())
}

fn report(result: Result<fraction_core::Fraction, String>) {
    match result {
        Ok(f) => println!("  {}  (= {})", f.to_string().as_str().green().bold(), f.to_f64()),
        Err(e) => println!("  {}", e.as_str().red()),
    }
}

fn show_pattern(text: &str, grammar: &Grammar) {
    let text = text.trim().to_lowercase();
    match scan(&text, grammar) {
        Ok(scanned) => {
            println!("  pattern: [{}]", scanned.key().to_string().as_str().cyan());
            println!("  args:    {:?}", scanned.args());
            println!("  zeros:   {}", scanned.leading_zeros);
        }
        Err(e) => println!("  {}", e.to_string().as_str().red()),
    }
}
