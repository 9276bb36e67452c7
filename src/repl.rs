use crate::config::Config;
use crate::value::format_number;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing::{debug, error, info};

/// What one read from the terminal produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    Interrupted,
    Eof,
}

/// Whether the read loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Per-line handler for the REPL. Holds no state between lines.
pub struct Session {
    color: bool,
}

impl Session {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Evaluates a line, writing the result to `out` or the diagnostic to `err`.
    pub fn handle<O: Write, E: Write>(
        &self,
        event: LineEvent,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<Control> {
        let line = match event {
            LineEvent::Line(line) => line,
            LineEvent::Interrupted | LineEvent::Eof => return Ok(Control::Exit),
        };

        match crate::calculate(&line) {
            Ok(value) => writeln!(out, "{}", format_number(value))?,
            Err(error) => {
                debug!(kind = ?error.kind, message = %error.message, "line rejected");
                error.write(&line, None, self.color, &mut *err)?;
            }
        }

        Ok(Control::Continue)
    }
}

pub fn start(config: &Config) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let session = Session::new(config.color);
    info!("session started");

    loop {
        let event = match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }
                LineEvent::Line(line)
            }
            Err(ReadlineError::Interrupted) => LineEvent::Interrupted,
            Err(ReadlineError::Eof) => LineEvent::Eof,
            Err(err) => {
                error!(error = %err, "failed to read input");
                return Err(err);
            }
        };

        let control = session.handle(event, &mut io::stdout().lock(), &mut io::stderr().lock())?;
        if control == Control::Exit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}
