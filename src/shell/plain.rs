//! Plain line-mode shell over any reader and writer
//!
//! Used when stdout is not a terminal, or when asked for with `--plain` or
//! `--batch`. Generic over `BufRead`/`Write` so tests drive it with in-memory
//! buffers.

use super::{Command, HELP_TEXT};
use crate::calculator::format::format_fixed;
use crate::calculator::Calculator;
use crate::history::TranscriptLine;
use std::io::{self, BufRead, Write};
use tracing::info;

const PROMPT: &str = "> ";
const BATCH_PROMPT: &str = "batch> ";

/// Run an interactive session until `q`, `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    calc: &mut Calculator,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();

    writeln!(out, "=== RPN Calculator ===")?;
    for text in HELP_TEXT {
        writeln!(out, "{}", text)?;
    }

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                for text in HELP_TEXT {
                    writeln!(out, "{}", text)?;
                }
            }
            Command::History => {
                writeln!(out, "History:")?;
                for (index, expression) in calc.history().list() {
                    writeln!(out, "{}: {}", index, expression)?;
                }
            }
            Command::Batch => {
                writeln!(
                    out,
                    "Batch mode: enter one expression per line, finish with an empty line"
                )?;
                let mut expressions = Vec::new();
                loop {
                    write!(out, "{}", BATCH_PROMPT)?;
                    out.flush()?;
                    match lines.next().transpose()? {
                        // Only a truly empty line ends collection
                        Some(entry) if !entry.is_empty() => expressions.push(entry),
                        _ => break,
                    }
                }
                let mark = calc.transcript().mark();
                calc.process_batch(&expressions);
                write_lines(out, calc.transcript().since(mark))?;
            }
            Command::Empty => {}
            Command::Evaluate(expression) => {
                let mark = calc.transcript().mark();
                let result = calc.evaluate(expression);
                write_lines(out, calc.transcript().since(mark))?;
                match result {
                    Ok(value) => writeln!(out, "Result: {}", format_fixed(value))?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
        }
    }

    info!(expressions = calc.history().len(), "session ended");
    writeln!(out, "Thanks for using the RPN calculator!")?;
    Ok(())
}

/// Evaluate every non-blank line of `input` as one batch
///
/// Returns `true` when every entry succeeded.
pub fn run_batch_file<R: BufRead, W: Write>(
    calc: &mut Calculator,
    input: R,
    out: &mut W,
) -> io::Result<bool> {
    let mut expressions = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }

    let mark = calc.transcript().mark();
    let results = calc.process_batch(&expressions);
    write_lines(out, calc.transcript().since(mark))?;

    Ok(results.iter().all(|r| r.is_ok()))
}

fn write_lines<W: Write>(out: &mut W, lines: &[TranscriptLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.text)?;
    }
    Ok(())
}
