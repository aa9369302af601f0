//! Error adapter for converting FreebodyError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Scene errors carry the JSON document they failed on; they are rendered with
//! a label pointing at the reported line and column. Every other variant is
//! rendered as a plain message with an error code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use freebody::FreebodyError;

/// Adapter for a scene description that failed to parse.
pub struct SceneDiagnostic<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> SceneDiagnostic<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the reported error location.
    fn span(&self) -> SourceSpan {
        let offset = line_column_to_offset(self.src, self.err.line(), self.err.column());
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for SceneDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SceneDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid scene description")
    }
}

impl std::error::Error for SceneDiagnostic<'_> {}

impl MietteDiagnostic for SceneDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("freebody::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            Category::Syntax => "the analysis response is not valid JSON",
            Category::Eof => "the analysis response ends before the document is complete",
            Category::Data => {
                "expected an object with `environment` (tagged by `type`), `objects` and `formulas`"
            }
            Category::Io => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(self.err.to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`FreebodyError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a FreebodyError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FreebodyError::Io(_) => "freebody::io",
            FreebodyError::Scene { .. } => "freebody::scene",
            FreebodyError::Render(_) => "freebody::render",
            FreebodyError::MissingInput => "freebody::input",
            FreebodyError::Config(_) => "freebody::config",
            FreebodyError::Export(_) => "freebody::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FreebodyError::MissingInput => {
                Some(Box::new("pass the problem statement as the first argument"))
            }
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene error with its JSON source.
    Scene(SceneDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Scene(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Scene(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Scene(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Scene(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Scene(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a one-based line and column into a byte offset into `src`.
fn line_column_to_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`FreebodyError`] into a list of reportable errors.
pub fn to_reportables(err: &FreebodyError) -> Vec<Reportable<'_>> {
    match err {
        FreebodyError::Scene { err, src } => {
            vec![Reportable::Scene(SceneDiagnostic::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use freebody::parse_scene;

    use super::*;

    #[test]
    fn test_line_column_to_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_column_to_offset(src, 1, 1), 0);
        assert_eq!(line_column_to_offset(src, 2, 2), 4);
        assert_eq!(line_column_to_offset(src, 3, 1), 7);
        assert_eq!(line_column_to_offset(src, 9, 9), src.len());
    }

    #[test]
    fn test_scene_error_points_at_location() {
        let src = "{\n  \"environment\": 12\n}";
        let err = parse_scene(src).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Scene(d) => {
                assert_eq!(d.to_string(), "Invalid scene description");
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                // The label lands on the second line.
                assert!(labels[0].offset() >= 2 && labels[0].offset() < 22);
            }
            Reportable::Error(_) => panic!("Expected Scene"),
        }
    }

    #[test]
    fn test_scene_error_help_by_category() {
        let syntax = parse_scene("{]").unwrap_err();
        let eof = parse_scene("{\"environment\": ").unwrap_err();

        let help = |err: &FreebodyError| {
            to_reportables(err)[0]
                .help()
                .map(|h| h.to_string())
                .unwrap_or_default()
        };

        assert!(help(&syntax).contains("not valid JSON"));
        assert!(help(&eof).contains("ends before"));
    }

    #[test]
    fn test_non_scene_error() {
        let err = FreebodyError::MissingInput;

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Problem statement is empty");
                assert_eq!(e.code().unwrap().to_string(), "freebody::input");
                assert!(e.help().is_some());
            }
            Reportable::Scene(_) => panic!("Expected Error"),
        }
    }
}
