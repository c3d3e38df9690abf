use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::BufRead;
use std::io::BufReader;
use tally::{Calculator, render_error};

/// Tally - an extensible arithmetic expression evaluator
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Print the postfix (RPN) form instead of evaluating (for debugging)
    #[arg(long)]
    debug_postfix: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn interpret_input(calc: &Calculator, input: &str, debug_postfix: bool) {
    if debug_postfix {
        let postfix = tally_core::lexer::tokenize(input, calc.operators())
            .and_then(|tokens| tally_core::parser::to_postfix(&tokens, calc.operators()));
        match postfix {
            Ok(items) => println!("{items:?}"),
            Err(e) => render_error(input, &e),
        }
        return;
    }

    match calc.evaluate(input) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => render_error(input, &e),
    }
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

fn main() {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level, default WARN
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let calc = Calculator::new();

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&calc, &expr, args.debug_postfix);
        return;
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("tally".to_string()),
            DefaultPromptSegment::Empty,
        );

        println!("Tally calculator - enter an expression, e.g. \"1 + (2 + 3) * 4 - 12\"");
        println!("q, Ctrl+D, or Ctrl+C to exit");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return;
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if is_quit(&buffer) {
                        return;
                    }
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&calc, &buffer, args.debug_postfix);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return;
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {e}");
                    return;
                }
            };

            if is_quit(&line) {
                return;
            }
            if line.trim().is_empty() {
                continue;
            }
            interpret_input(&calc, &line, args.debug_postfix);
        }
    }
}
