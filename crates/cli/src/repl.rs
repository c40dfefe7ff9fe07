//! Prompt loop: read a line, run it against the session, print the reply

use crate::command::Command;
use crate::session::{Reply, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "waitlist> ";

/// Drive `session` from `input` until `quit` or end of input
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT.bold()).context("Failed to write prompt")?;
        out.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(out)?;
            break;
        };

        let reply = match line.parse::<Command>() {
            Ok(command) => {
                tracing::debug!(?command, "Handling command");
                session.handle(command)
            }
            Err(message) => Reply::Error(message),
        };

        match reply {
            Reply::Info(text) => writeln!(out, "{}", text)?,
            Reply::Success(text) => writeln!(out, "{}", format!("✓ {}", text).green().bold())?,
            Reply::Error(text) => writeln!(out, "{}", format!("✗ {}", text).red())?,
            Reply::Quit => break,
        }
    }

    Ok(())
}
