use std::fs;

use clap::{ArgAction, Parser, ValueEnum};
use scoobylang::{Analysis, ast_to_graph, error::Error as ProgramError, parse, run, tokenize};
use serde_json::json;
use thiserror::Error;
use tracing::Level;

/// scoobylang analyzes and runs programs written in ScoobyLang, a tiny
/// language of integer variables, arithmetic and print statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scoobylang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Which result of the analysis to print.
    #[arg(short, long, value_enum, default_value_t = Emit::Run)]
    emit: Emit,

    /// Print JSON instead of tables, and report errors as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Log more details to stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// Why the command failed.
#[derive(Debug, Error)]
enum CliError {
    /// The program could not be analyzed or run.
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Run the program and show its output and variables.
    Run,
    /// Show the token table.
    Tokens,
    /// Show the symbol table.
    Symbols,
    /// Show the syntax tree.
    Ast,
    /// Show the syntax tree as nodes and edges.
    Graph,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = emit(&args, &script) {
        report(&e, args.json);
        std::process::exit(1);
    }
}

fn report(error: &CliError, json: bool) {
    match error {
        CliError::Program(error) if json => {
            let diagnostic = json!({ "error": error.to_string(),
                                     "line":  error.line(),
                                     "kind":  error.kind() });
            println!("{diagnostic:#}");
        },
        _ => eprintln!("{error}"),
    }
}

fn analyze(script: &str) -> Result<Analysis, ProgramError> {
    Ok(parse(script)?)
}

fn emit(args: &Args, script: &str) -> Result<(), CliError> {
    match args.emit {
        Emit::Tokens => {
            let lexed = tokenize(script);
            if args.json {
                let errors: Vec<_> =
                    lexed.errors
                         .iter()
                         .map(|e| json!({ "error": e.to_string(), "line": e.line() }))
                         .collect();
                let value = json!({ "tokens": lexed.tokens, "errors": errors });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{:<20} {:<8} Line", "Token", "Type");
                for token in &lexed.tokens {
                    println!("{:<20} {:<8} {}", token.lexeme, token.kind, token.line);
                }
            }
        },
        Emit::Symbols => {
            let analysis = analyze(script)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&analysis.symbols)?);
            } else {
                println!("{:<20} {:<8} Line", "Identifier", "Type");
                for symbol in &analysis.symbols {
                    println!("{:<20} {:<8} {}", symbol.name, symbol.ty, symbol.line);
                }
            }
        },
        Emit::Ast => {
            let analysis = analyze(script)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&analysis.program)?);
            } else {
                println!("Syntax analysis succeeded");
                println!("{}", analysis.program);
            }
        },
        Emit::Graph => {
            let analysis = analyze(script)?;
            let graph = ast_to_graph(&analysis.program);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                for node in &graph.nodes {
                    println!("{:>4}  {:<8} {}",
                             node.id,
                             node.shape.name(),
                             node.label.replace('\n', " "));
                }
                for edge in &graph.edges {
                    println!("{:>4} -> {}", edge.parent, edge.child);
                }
            }
        },
        Emit::Run => {
            let execution = run(script)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&execution)?);
            } else {
                if execution.output.is_empty() {
                    println!("Execution succeeded (no output)");
                } else {
                    println!("=== OUTPUT ===");
                    for line in &execution.output {
                        println!("{line}");
                    }
                }
                if !execution.bindings.is_empty() {
                    println!();
                    println!("{:<20} Value", "Variable");
                    for binding in &execution.bindings {
                        println!("{:<20} {}", binding.name, binding.value);
                    }
                }
            }
        },
    }
    Ok(())
}
