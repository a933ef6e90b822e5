//! Output formatting.

use crate::cli::OutputFormat;
use baseline_scanner::{Finding, FindingStatus};
use camino::Utf8Path;
use serde::Serialize;

/// Display severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Widely available features.
    Hint,
    /// Newly available features.
    Info,
    /// Everything else: limited, unknown, or unresolved.
    Warning,
}

impl Severity {
    /// Maps a finding status to its display severity.
    pub fn from_status(status: FindingStatus) -> Self {
        match status {
            FindingStatus::Widely => Severity::Hint,
            FindingStatus::Newly => Severity::Info,
            FindingStatus::Limited | FindingStatus::Unknown | FindingStatus::NotFound => {
                Severity::Warning
            }
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Hint => "Hint",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
        }
    }
}

/// A formatted finding for output.
#[derive(Debug, Serialize)]
pub struct FormattedFinding {
    /// The severity (Hint, Info, Warning).
    #[serde(rename = "type")]
    pub severity: String,
    /// The file path.
    pub filename: String,
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
    /// The resolved feature id, when the dataset knows the token.
    pub feature: Option<String>,
    /// The baseline status.
    pub status: String,
    /// A rewrite suggestion, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A position in the source.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset within the line.
    pub offset: u32,
}

/// Formats findings for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a collection of findings from one file.
    pub fn format(&self, findings: &[Finding], file_path: &Utf8Path, source: &str) -> String {
        match self.format {
            OutputFormat::Human => self.format_human(findings, file_path),
            OutputFormat::HumanVerbose => self.format_human_verbose(findings, file_path, source),
            OutputFormat::Json => self.format_json(findings, file_path),
            OutputFormat::Machine => self.format_machine(findings, file_path),
        }
    }

    /// Formats as human-readable output.
    fn format_human(&self, findings: &[Finding], file_path: &Utf8Path) -> String {
        let mut output = String::new();

        for finding in findings {
            let severity = Severity::from_status(finding.status);

            output.push_str(&format!(
                "{}:{}:{}\n{}: {}: {}{}\n\n",
                file_path,
                finding.line + 1,
                u32::from(finding.span.start) + 1,
                severity.label(),
                feature_name(finding),
                finding.status.describe(),
                suggestion_suffix(finding)
            ));
        }

        output
    }

    /// Formats as human-readable output with code snippets.
    fn format_human_verbose(
        &self,
        findings: &[Finding],
        file_path: &Utf8Path,
        source: &str,
    ) -> String {
        let lines: Vec<&str> = source.lines().collect();
        let mut output = String::new();

        for finding in findings {
            let severity = Severity::from_status(finding.status);

            output.push_str(&format!(
                "{}:{}:{}\n{}: {}: {}{}\n",
                file_path,
                finding.line + 1,
                u32::from(finding.span.start) + 1,
                severity.label(),
                feature_name(finding),
                finding.status.describe(),
                suggestion_suffix(finding)
            ));

            // Add code snippet
            let line_num = finding.line as usize;
            if let Some(text) = lines.get(line_num) {
                let number = finding.line + 1;
                output.push_str(&format!("  {} | {}\n", number, text));

                // Add pointer under the token
                let padding = " ".repeat(usize::from(finding.span.start));
                let width = usize::from(finding.span.len()).max(1);
                output.push_str(&format!(
                    "  {} | {}{}\n",
                    " ".repeat(number.to_string().len()),
                    padding,
                    "^".repeat(width)
                ));
            }

            if !finding.support.is_empty() {
                let browsers: Vec<String> = finding
                    .support
                    .iter()
                    .map(|(browser, supported)| {
                        format!("{}: {}", browser, if *supported { "yes" } else { "no" })
                    })
                    .collect();
                output.push_str(&format!("  browsers: {}\n", browsers.join(" | ")));
            }

            output.push('\n');
        }

        output
    }

    /// Formats as JSON output.
    fn format_json(&self, findings: &[Finding], file_path: &Utf8Path) -> String {
        let formatted = Self::format_json_findings(findings, file_path);
        serde_json::to_string_pretty(&formatted).unwrap_or_default()
    }

    /// Formats findings into JSON-ready structs.
    pub fn format_json_findings(findings: &[Finding], file_path: &Utf8Path) -> Vec<FormattedFinding> {
        findings
            .iter()
            .map(|finding| FormattedFinding {
                severity: Severity::from_status(finding.status).label().to_string(),
                filename: file_path.to_string(),
                start: Position {
                    line: finding.line + 1,
                    column: u32::from(finding.span.start) + 1,
                    offset: u32::from(finding.span.start),
                },
                end: Position {
                    line: finding.line + 1,
                    column: u32::from(finding.span.end) + 1,
                    offset: u32::from(finding.span.end),
                },
                feature: finding.feature_id.as_ref().map(|id| id.to_string()),
                status: finding.status.as_str().to_string(),
                suggestion: finding.suggestion.clone(),
            })
            .collect()
    }

    /// Formats as machine-readable output.
    fn format_machine(&self, findings: &[Finding], file_path: &Utf8Path) -> String {
        let mut output = String::new();

        for finding in findings {
            let severity = Severity::from_status(finding.status);

            output.push_str(&format!(
                "{} {}:{}:{}:{}:{} {} ({})\n",
                severity.label().to_uppercase(),
                file_path,
                finding.line + 1,
                u32::from(finding.span.start) + 1,
                finding.line + 1,
                u32::from(finding.span.end) + 1,
                finding.status.describe(),
                feature_name(finding)
            ));
        }

        output
    }
}

fn feature_name(finding: &Finding) -> &str {
    finding.feature_id.as_deref().unwrap_or("unknown")
}

fn suggestion_suffix(finding: &Finding) -> String {
    match &finding.suggestion {
        Some(suggestion) => format!(" (suggestion: {})", suggestion),
        None => String::new(),
    }
}

/// Summary of a scan run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Number of files scanned.
    pub file_count: usize,
    /// Number of hint findings.
    pub hint_count: usize,
    /// Number of info findings.
    pub info_count: usize,
    /// Number of warning findings.
    pub warning_count: usize,
    /// Number of limited-availability findings.
    pub limited_count: usize,
    /// Whether to fail when limited-availability features were found.
    pub fail_on_limited: bool,
}

impl CheckSummary {
    /// Formats the summary line.
    pub fn format(&self) -> String {
        let warning_word = if self.warning_count == 1 {
            "warning"
        } else {
            "warnings"
        };
        let info_word = if self.info_count == 1 { "info" } else { "infos" };
        let hint_word = if self.hint_count == 1 { "hint" } else { "hints" };
        let file_word = if self.file_count == 1 { "file" } else { "files" };

        format!(
            "====================================\nbaseline-check found {} {}, {} {} and {} {} in {} {}",
            self.warning_count,
            warning_word,
            self.info_count,
            info_word,
            self.hint_count,
            hint_word,
            self.file_count,
            file_word
        )
    }
}
