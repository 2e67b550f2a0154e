mod config;
mod error;

use clap::{CommandFactory, Parser};
use config::{parse_point_line, Cli};
use error::Error;
use log::{debug, info};
use rug::Complex;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, Write}, process::ExitCode};
use zdiff_compute::{
    differentiate,
    numerical::fmt::{fmt_complex, FormatOptions},
    Function,
};

/// Writes the expression as given, and its trees if requested.
fn write_function<W: Write>(out: &mut W, cli: &Cli, functions: &[Function; 3]) -> io::Result<()> {
    writeln!(out, "Function: f(x) = {}", cli.expression)?;
    if cli.show_trees {
        for (label, func) in ["f   =", "f'  =", "f'' ="].iter().zip(functions) {
            writeln!(out, "Tree:     {} {}", label, func)?;
        }
    }
    Ok(())
}

/// Evaluates the functions at the point and writes the results.
fn write_values<W: Write>(
    out: &mut W,
    functions: &[Function; 3],
    point: &Complex,
    format: FormatOptions,
) -> io::Result<()> {
    writeln!(out, "Point:    z    = {}", fmt_complex(point, format))?;
    writeln!(out, "{}", "-".repeat(36))?;
    for (label, func) in ["f(z)   =", "f'(z)  =", "f''(z) ="].iter().zip(functions) {
        writeln!(out, "{} {}", label, fmt_complex(&func.eval(point), format))?;
    }
    Ok(())
}

/// Handles one line of interactive input, writing the values at the point it names. Blank lines
/// are ignored.
fn eval_line<W: Write>(
    out: &mut W,
    line: &str,
    functions: &[Function; 3],
    cli: &Cli,
) -> Result<(), Error> {
    let Some(point) = parse_point_line(line, cli.precision) else {
        return Ok(());
    };
    write_values(out, functions, &point?, cli.format())?;
    writeln!(out)?;
    Ok(())
}

/// Returns how an interactive session ends after a line was handled, or [`None`] if it
/// continues. End of input and Ctrl-C end it successfully; any other error ends it with that
/// error.
fn session_outcome(result: Result<(), Error>) -> Option<Result<(), Error>> {
    match result {
        Ok(()) => None,
        Err(Error::Readline(ReadlineError::Eof | ReadlineError::Interrupted)) => Some(Ok(())),
        Err(err) => Some(Err(err)),
    }
}

/// Reads points from the terminal until the input ends, printing the values of the functions at
/// each one.
fn interactive(functions: &[Function; 3], cli: &Cli) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;
    info!("reading points interactively");

    fn process_line(rl: &mut DefaultEditor, functions: &[Function; 3], cli: &Cli) -> Result<(), Error> {
        let input = rl.readline("z> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match eval_line(&mut io::stdout().lock(), &input, functions, cli) {
            // a mistyped point does not end the session
            Err(Error::Point(err)) => Error::Point(err).report_to_stderr(&input),
            other => other?,
        }
        Ok(())
    }

    loop {
        if let Some(outcome) = session_outcome(process_line(&mut rl, functions, cli)) {
            return outcome;
        }
    }
}

/// Differentiates the expression and prints the results.
fn run(cli: &Cli) -> Result<(), Error> {
    let point = cli.point()?;
    let (f, f1, f2) = differentiate(&cli.expression)?;
    let functions = [f, f1, f2];

    let mut out = io::stdout().lock();
    write_function(&mut out, cli, &functions)?;
    match point {
        Some(point) => write_values(&mut out, &functions, &point, cli.format())?,
        None => {
            drop(out);
            interactive(&functions, cli)?;
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` are not failures
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        },
    };
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(&cli.expression);
            eprintln!("\n{}", Cli::command().render_usage());
            ExitCode::FAILURE
        },
    }
}
