//! Terminal game for solving linear equations by moving blocks across the equals sign.
//!
//! Every block of the equation has a handle like `#2`. Type `move 2` to move it to the other
//! side, `hint` when stuck, and `help` for everything else. Set `RUST_LOG=balance=debug` to see
//! each move as the engine handles it.

mod command;
mod display;
mod error;
mod game;

use balance_session::Session;
use command::Command;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, ops::ControlFlow};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parses and runs a single line, printing any mistake to stderr.
fn process(input: &str, session: &mut Session, rng: &mut impl rand::Rng) -> ControlFlow<()> {
    if input.trim().is_empty() {
        return ControlFlow::Continue(());
    }

    let result = input
        .parse::<Command>()
        .and_then(|command| {
            debug!(target: "balance::repl", ?command, "running command");
            game::run(session, command, rng, &mut io::stdout())
        });
    match result {
        Ok(flow) => flow,
        Err(err) => {
            eprintln!("{}", err);
            ControlFlow::Continue(())
        },
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut rng = rand::thread_rng();
    let mut session = Session::default();
    if let Err(err) = game::run(&mut session, Command::New(None), &mut rng, &mut io::stdout()) {
        eprintln!("{}", err);
        return;
    }

    if !io::stdin().is_terminal() {
        // play commands from stdin
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            };
            if process(&line, &mut session, &mut rng).is_break() {
                break;
            }
        }
        return;
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(
        rl: &mut DefaultEditor,
        session: &mut Session,
        rng: &mut impl rand::Rng,
    ) -> Result<ControlFlow<()>, ReadlineError> {
        let input = rl.readline("> ")?;
        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }
        Ok(process(&input, session, rng))
    }

    loop {
        match process_line(&mut rl, &mut session, &mut rng) {
            Ok(ControlFlow::Continue(())) => (),
            Ok(ControlFlow::Break(())) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}
