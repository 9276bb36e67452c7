use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io;
use std::ops::Range;

/// Character offsets into a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tokenization,
    Parse,
    NumericConversion,
}

#[derive(Debug, Clone)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
}

impl CalcError {
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, message: String, help: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: Some(help),
        }
    }

    pub fn tokenization_error(span: Span, message: String) -> Self {
        Self::new(ErrorKind::Tokenization, span, message)
    }

    pub fn parse_error(span: Span, message: String) -> Self {
        Self::new(ErrorKind::Parse, span, message)
    }

    pub fn parse_error_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::Parse, span, message, help)
    }

    pub fn conversion_error_with_help(span: Span, message: String, help: String) -> Self {
        Self::new_with_help(ErrorKind::NumericConversion, span, message, help)
    }

    /// Prints the diagnostic for `source` to stderr.
    pub fn report(&self, source: &str, filename: Option<&str>, color: bool) {
        if let Err(error) = self.write(source, filename, color, io::stderr()) {
            tracing::warn!(%error, "failed to print diagnostic");
        }
    }

    /// Renders the diagnostic for `source` into `w`.
    pub fn write<W: io::Write>(
        &self,
        source: &str,
        filename: Option<&str>,
        color: bool,
        w: W,
    ) -> io::Result<()> {
        let filename = filename.unwrap_or("<repl>");

        let label_color = match self.kind {
            ErrorKind::Tokenization => Color::Red,
            ErrorKind::Parse => Color::Yellow,
            ErrorKind::NumericConversion => Color::Magenta,
        };

        let kind_str = match self.kind {
            ErrorKind::Tokenization => "Tokenization Error",
            ErrorKind::Parse => "Parse Error",
            ErrorKind::NumericConversion => "Numeric Conversion Error",
        };

        let headline = if color {
            format!("{}: {}", kind_str.fg(label_color), self.message)
        } else {
            format!("{}: {}", kind_str, self.message)
        };

        let range = self.label_range(source);

        let mut report_builder = Report::build(ReportKind::Error, filename, range.start)
            .with_config(Config::default().with_color(color))
            .with_message(headline);

        // An empty line has nothing to point at.
        if !range.is_empty() {
            let mut label = Label::new((filename, range)).with_message(&self.message);
            if color {
                label = label.with_color(label_color);
            }
            report_builder = report_builder.with_label(label);
        }

        if let Some(ref help_text) = self.help {
            let note = if color {
                format!("{}: {}", "help".fg(Color::Cyan), help_text)
            } else {
                format!("help: {}", help_text)
            };
            report_builder = report_builder.with_note(note);
        }

        report_builder
            .finish()
            .write((filename, Source::from(source)), w)
    }

    // Spans at end of input are pulled back onto the last character.
    fn label_range(&self, source: &str) -> Range<usize> {
        let len = source.chars().count();
        let end = self.span.end.min(len);
        let start = self.span.start.min(end);
        if start == end && start > 0 {
            start - 1..end
        } else {
            start..end
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalcError {}
