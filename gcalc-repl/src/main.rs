mod cli;

use clap::Parser as _;
use cli::{init_logging, Args};
use gcalc_expr::Expr;
use gcalc_parser::parse;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal, Write}, process::ExitCode};

/// Writes everything requested by `args` about a successfully parsed expression.
fn print_expr(expr: &Expr, args: &Args, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", expr)?;
    if args.tree {
        write!(out, "{}", expr.render(0))?;
    }
    for &x in &args.at {
        writeln!(out, "f({}) = {}", x, expr.evaluate(x))?;
    }

    if args.derivative {
        match expr.differentiate() {
            Ok(derivative) => {
                writeln!(out, "f'(x) = {}", derivative)?;
                if args.tree {
                    write!(out, "{}", derivative.render(0))?;
                }
                for &x in &args.at {
                    writeln!(out, "f'({}) = {}", x, derivative.evaluate(x))?;
                }
            },
            Err(_) => writeln!(out, "f'(x) is undefined")?,
        }
    }

    Ok(())
}

/// Parses the given input and prints the results, or reports the parse failure to stderr.
/// Returns `true` if the input parsed.
fn process(input: &str, args: &Args) -> bool {
    match parse(input) {
        Ok(expr) => {
            debug!("`{}` parsed into {} nodes", input, expr.node_count());
            if let Err(err) = print_expr(&expr, args, &mut io::stdout().lock()) {
                eprintln!("{}", err);
            }
            true
        },
        Err(err) => {
            if let Err(err) = err.report_to_stderr("input") {
                eprintln!("{}", err);
            }
            false
        },
    }
}

/// Processes each non-blank line of stdin. Returns `true` if every line parsed.
fn process_stdin(args: &Args) -> io::Result<bool> {
    let mut all_ok = true;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= process(&line, args);
    }
    Ok(all_ok)
}

/// Runs the interactive loop until the user exits.
fn repl(args: &Args) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, args: &Args) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        process(&input, args);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, args) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    let ok = if let Some(expr) = &args.expr {
        process(expr, &args)
    } else if !io::stdin().is_terminal() {
        info!("reading expressions from stdin");
        process_stdin(&args).unwrap_or_else(|err| {
            eprintln!("{}", err);
            false
        })
    } else {
        repl(&args).map_err(|err| eprintln!("{}", err)).is_ok()
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
