use std::io::{BufRead, Write};

use cinescramble_core::{Action, ActionOutcome, RandomSource, Session};

use crate::render::{HOW_TO_PLAY, render_text};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Play(Action),
    Help,
    Quit,
    /// A command missing its argument.
    Usage(&'static str),
    Nothing,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Nothing,
        "hint" if rest.is_empty() => Command::Play(Action::RevealHint),
        "next" if rest.is_empty() => Command::Play(Action::NextMovie),
        "new" if rest.is_empty() => Command::Play(Action::StartNewGame),
        "help" | "?" if rest.is_empty() => Command::Help,
        "quit" | "exit" if rest.is_empty() => Command::Quit,
        "guess" if !rest.trim().is_empty() => Command::Play(Action::SubmitGuess(rest.trim().into())),
        "guess" => Command::Usage("guess <title>"),
        _ => Command::Play(Action::SubmitGuess(line.into())),
    }
}

fn write_session<R>(
    session: &Session<R>,
    writer: &mut dyn Write,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let view = session.view();
    match format {
        OutputFormat::Text => write!(writer, "{}", render_text(&view))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &view)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Reads commands line by line until `quit` or end of input, rendering the session after every change.
pub(crate) fn run_with_io<R: RandomSource>(
    session: &mut Session<R>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Text {
        writeln!(writer, "Cine Scramble (type `help` for the rules)")?;
        writeln!(writer)?;
    }
    write_session(session, writer, format)?;

    let mut line = String::new();
    loop {
        if format == OutputFormat::Text {
            write!(writer, "> ")?;
        }
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Help => writeln!(writer, "{HOW_TO_PLAY}")?,
            Command::Usage(usage) => {
                if format == OutputFormat::Text {
                    writeln!(writer, "Usage: {usage}")?;
                }
            }
            Command::Play(action) => {
                log::debug!("action: {:?}", action);
                let outcome = session.apply(action);
                if outcome == ActionOutcome::Ignored {
                    if format == OutputFormat::Text {
                        writeln!(writer, "Nothing to do right now.")?;
                    }
                    continue;
                }
                write_session(session, writer, format)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
