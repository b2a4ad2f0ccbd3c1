use balance_session::{MoveOutcome, Session};
use crate::{command::{Command, HELP}, display::board, error::Error};
use rand::Rng;
use std::{io::{self, Write}, ops::ControlFlow};

/// Prints the board, plus the hint or level banner when they apply.
fn show(session: &Session, out: &mut impl Write) -> io::Result<()> {
    let hint = session.hint();
    if hint.first_exercise_of_level {
        writeln!(out, "-- {} --", session.level())?;
    }

    let marked = hint.show_hint.then_some(hint.target_block).flatten();
    writeln!(out, "{}", board(session.equation(), marked))?;
    if let Some(block) = marked {
        writeln!(out, "hint: try moving block {}", block)?;
    }
    Ok(())
}

/// Runs one command against the session, writing what the player should see to `out`.
///
/// Returns [`ControlFlow::Break`] when the player asked to quit. Mistakes in the command itself
/// are returned as errors; a rejected move is a normal outcome and is only reported.
pub fn run<R: Rng + ?Sized>(
    session: &mut Session,
    command: Command,
    rng: &mut R,
    out: &mut impl Write,
) -> Result<ControlFlow<()>, Error> {
    let result = match command {
        Command::New(level) => {
            let first_of_level = match level {
                Some(level) if level != session.level() => {
                    session.set_level(level);
                    true
                },
                _ => false,
            };
            session.request_new_equation(first_of_level, rng);
            show(session, out)
        },
        Command::Equation(text) => match session.submit(&text) {
            Ok(()) => show(session, out),
            Err(err) => err.write_report("input", &text, &mut *out),
        },
        Command::Move { block, to } => {
            let (from, _) = session.equation().locate(block).ok_or(Error::NoSuchBlock(block))?;
            let to = to.unwrap_or(from.opposite());
            match session.apply_move(block, from, to) {
                MoveOutcome::Ignored => Ok(()),
                MoveOutcome::Rejected(rejection) => {
                    writeln!(out, "can't move {}: {}", block, rejection)?;
                    if session.hint().show_hint {
                        show(session, out)
                    } else {
                        Ok(())
                    }
                },
                MoveOutcome::Applied { victory: false } => show(session, out),
                MoveOutcome::Applied { victory: true } => {
                    writeln!(out, "{}", session.equation())?;
                    writeln!(out, "solved! score: {}", session.score())?;
                    session.request_new_equation(false, rng);
                    show(session, out)
                },
            }
        },
        Command::Show => show(session, out),
        Command::Hint => {
            if let Some(block) = session.suggested_block() {
                session.show_hint_for_block(block);
            }
            show(session, out)
        },
        Command::Level(level) => {
            session.set_level(level);
            session.request_new_equation(true, rng);
            show(session, out)
        },
        Command::Score => writeln!(
            out,
            "{}: {} solved ({} in total)",
            session.level(),
            session.score(),
            session.total_score(),
        ),
        Command::Help => writeln!(out, "{}", HELP),
        Command::Quit => return Ok(ControlFlow::Break(())),
    };

    result?;
    Ok(ControlFlow::Continue(()))
}
