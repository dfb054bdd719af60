use crate::commands::contacts::{Reply, FAREWELL};
use crate::commands::{dispatch, parse_command, Context};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// The read-eval-print loop. Owns the dispatch boundary: command and store
/// errors become printed lines here and never end the session.
pub struct Session<'a> {
    ctx: Context<'a>,
    prompt: &'a str,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(ctx: Context<'a>, prompt: &'a str) -> Self {
        Self {
            ctx,
            prompt,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!(error = %err, "rejected command line");
                return vec![err.to_string()];
            }
        };

        debug!(?command, "dispatching");
        match dispatch(&mut self.ctx, command) {
            Ok(Reply::Lines(lines)) => lines,
            Ok(Reply::Farewell) => {
                self.state = SessionState::Terminated;
                vec![FAREWELL.to_string()]
            }
            Err(err) => {
                debug!(error = %err, kind = ?err.kind(), "command failed");
                vec![format!("error: {}", err)]
            }
        }
    }

    /// Runs until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut line = String::new();
        while self.state == SessionState::Running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                debug!("end of input");
                self.state = SessionState::Terminated;
                break;
            }

            for reply in self.handle_line(&line) {
                writeln!(output, "{}", reply)?;
            }
        }
        output.flush()
    }
}
