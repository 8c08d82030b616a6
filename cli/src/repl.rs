//! Interactive converter session.
//!
//! Each line is `<base> <text>`: the text is typed into that field and
//! committed, the way pressing Enter works in the browser converter.
//! `edit <base> <text>` types without committing.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use radix_engine::{Base, ConverterConfig, Session};

use crate::commands::convert::render_snapshot;

const HELP: &str = "\
commands:
  <base> <text>       type TEXT into a field and commit it
  edit <base> <text>  type TEXT without committing
  show                print every field
  clear               empty all fields
  help                this message
  quit                leave the session
bases: dec, bin, hex, b64, ascii";

pub fn run_repl(config: ConverterConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, stdin.lock(), stdout.lock())
}

/// Drive a session from `input` until EOF or `quit`.
pub fn run_session<R: BufRead, W: Write>(
    config: ConverterConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut session = Session::new(config);
    writeln!(output, "radix converter; type `help` for commands")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        match handle_line(&mut session, line) {
            Step::Quit => break,
            Step::Print(text) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text.trim_end())?;
                }
            }
        }
        prompt(&mut output)?;
    }
    Ok(())
}

enum Step {
    Print(String),
    Quit,
}

fn handle_line(session: &mut Session, line: &str) -> Step {
    let (head, rest) = split_word(line.trim_start());
    match head {
        "" => Step::Print(String::new()),
        "quit" | "exit" => Step::Quit,
        "help" => Step::Print(HELP.to_string()),
        "show" => Step::Print(render_snapshot(&session.snapshot())),
        "clear" => {
            session.clear();
            Step::Print(String::new())
        }
        "edit" => {
            let (base, text) = split_word(rest);
            match base.parse::<Base>() {
                Ok(base) => Step::Print(apply(session, base, text, false)),
                Err(err) => Step::Print(format!("error: {err}")),
            }
        }
        other => match other.parse::<Base>() {
            Ok(base) => Step::Print(apply(session, base, rest, true)),
            Err(_) => Step::Print(format!("unknown command `{other}`; type `help`")),
        },
    }
}

fn apply(session: &mut Session, base: Base, text: &str, commit: bool) -> String {
    // ASCII keeps its spaces; the numeric fields ignore them anyway.
    let outcome = session.edit(base, text).and_then(|()| {
        if commit {
            session.commit(base)
        } else {
            Ok(())
        }
    });
    match outcome {
        Ok(()) => render_snapshot(&session.snapshot()),
        Err(err) => format!("error: {err}"),
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (line, ""),
    }
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
