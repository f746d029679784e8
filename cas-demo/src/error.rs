use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight arguments.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading the command line.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error, pointing at the given span of the argument line.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An evaluation point could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPoint {
    /// The argument as given.
    pub arg: String,
}

impl ErrorKind for InvalidPoint {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(format!("`{}` is not a valid evaluation point", self.arg))
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("expected a {} here", "number".fg(EXPR)))
                    .with_color(EXPR),
            )
            .with_help(format!("evaluation points look like {} or {}", "5".fg(EXPR), "-2.5".fg(EXPR)))
            .finish()
    }
}

/// An argument looked like a flag, but is not one this program knows.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFlag {
    /// The flag as given.
    pub flag: String,
}

impl ErrorKind for UnknownFlag {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(format!("unknown flag `{}`", self.flag))
            .with_label(
                Label::new((src_id, span))
                    .with_message("I do not recognize this flag")
                    .with_color(EXPR),
            )
            .with_help(format!("the only flag is {}", "--steps".fg(EXPR)))
            .finish()
    }
}

/// An error associated with one argument on the command line.
#[derive(Debug)]
pub struct Error {
    /// The region of the joined argument line that this error originated from.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { span, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, self.span.clone())
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) -> io::Result<()> {
        self.build_report("input").eprint(("input", Source::from(input)))
    }
}
