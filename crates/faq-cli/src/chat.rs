use std::io::{self, BufRead, Write};

use faq_core::FaqStore;

const GREETING: &str = "Ask a question. `:? <text>` lists matching questions, `:quit` exits.";

/// Line-oriented chat: each non-empty line is answered on its own, nothing
/// carries over between lines. Only lines starting with `:` are commands, so
/// any stored question can be asked as typed.
pub fn run<R: BufRead, W: Write>(
    store: &FaqStore,
    limit: usize,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    let mut line = String::new();

    loop {
        write!(out, "you> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match text.strip_prefix(':') {
            Some("q" | "quit" | "exit") => break,
            Some(command) => {
                let Some(partial) = command.strip_prefix('?') else {
                    writeln!(out, "bot> unknown command `:{command}`")?;
                    continue;
                };
                let suggestions = store.suggest(partial.trim_start(), limit);
                if suggestions.is_empty() {
                    writeln!(out, "bot> (no suggestions)")?;
                }
                for question in suggestions {
                    writeln!(out, "  - {question}")?;
                }
            }
            None => writeln!(out, "bot> {}", store.find_answer(text))?,
        }
    }

    Ok(())
}
