//! Line-oriented review loop.

use std::io::{self, Write};
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::model::{DecisionMap, Direction};
use crate::remote::{SubmitAck, SubmitError};
use crate::session::{SessionPhase, SwipeSession};

use super::card::CardView;

/// One line of reviewer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Decide(Direction),
    Info,
    Submit,
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "info" => Ok(Command::Info),
            "s" | "submit" => Ok(Command::Submit),
            "reset" | "restart" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<Direction>()
                .map(Command::Decide)
                .map_err(|_| format!("unknown command '{}' (type 'help')", other)),
        }
    }
}

/// What the reviewer ended up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub phase: SessionPhase,
    pub decisions: DecisionMap,
}

const HELP: &str = "commands: r/right accept, l/left reject, i/info flip card, \
                    s/submit send decisions, reset start over, q/quit";

/// Drive `session` from `input` until the reviewer quits or input ends.
pub async fn run_review<R, W>(session: &SwipeSession, input: R, out: &mut W) -> io::Result<ReviewSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = CardView::default();
    let mut lines = input.lines();

    writeln!(out, "Loading profiles...")?;
    if let Err(err) = session.initiate().await {
        writeln!(out, "Failed to start swiping session: {}", err)?;
        writeln!(out, "Type 'reset' to try again or 'quit' to leave.")?;
    }
    render(session, &view, out)?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Info => {
                if session.current().is_some() {
                    view.flip();
                } else {
                    writeln!(out, "No card to flip.")?;
                    continue;
                }
            }
            Command::Decide(direction) => {
                let outcome = session.swipe(direction).await;
                match outcome.decided {
                    Some(decided) => {
                        view = CardView::default();
                        writeln!(out, "{} -> {}", decided.id, decided.decision)?;
                    }
                    None => {
                        writeln!(out, "Nothing to decide right now.")?;
                        continue;
                    }
                }
                if let Some(submission) = outcome.submission {
                    report_submission(submission, out)?;
                }
            }
            Command::Submit => report_submission(session.submit().await, out)?,
            Command::Reset => {
                view = CardView::default();
                writeln!(out, "Reloading profiles...")?;
                if let Err(err) = session.reset().await {
                    writeln!(out, "Failed to start swiping session: {}", err)?;
                }
            }
        }

        render(session, &view, out)?;
    }

    out.flush()?;
    Ok(ReviewSummary {
        phase: session.phase(),
        decisions: session.decisions(),
    })
}

fn report_submission<W: Write>(
    result: Result<SubmitAck, SubmitError>,
    out: &mut W,
) -> io::Result<()> {
    match result {
        Ok(ack) => match ack.receipt {
            Some(receipt) => writeln!(out, "Decisions submitted (receipt {}).", receipt),
            None => writeln!(out, "Decisions submitted."),
        },
        Err(err) if err.is_sink_failure() => writeln!(
            out,
            "Failed to submit decisions: {}. Type 'submit' to try again.",
            err
        ),
        Err(err) => writeln!(out, "{}", err),
    }
}

fn render<W: Write>(session: &SwipeSession, view: &CardView, out: &mut W) -> io::Result<()> {
    match session.phase() {
        SessionPhase::Ready => {
            if let Some(profile) = session.current() {
                let (cursor, total) = session.progress();
                view.render(&profile, (cursor, total), out)?;
                writeln!(out, "  (r)ight / (l)eft / (i)nfo")?;
            }
        }
        SessionPhase::Complete | SessionPhase::SubmitFailed => {
            if session.profiles().is_empty() {
                writeln!(out, "No profiles available.")?;
            } else {
                let decisions = session.decisions();
                writeln!(
                    out,
                    "Discovery complete: {} accepted, {} rejected. Type 'submit' to send.",
                    decisions.accepted(),
                    decisions.rejected()
                )?;
            }
        }
        SessionPhase::Submitted => {
            writeln!(out, "All done. Type 'reset' to start again or 'quit'.")?;
        }
        SessionPhase::LoadFailed => {
            if let Some(message) = session.error_message() {
                writeln!(out, "Error: {}", message)?;
            }
        }
        SessionPhase::Idle | SessionPhase::Loading | SessionPhase::Submitting => {}
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("r".parse::<Command>().unwrap(), Command::Decide(Direction::Right));
        assert_eq!("LEFT".parse::<Command>().unwrap(), Command::Decide(Direction::Left));
        assert_eq!("info".parse::<Command>().unwrap(), Command::Info);
        assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert!("jump".parse::<Command>().is_err());
    }
}
