//! Output formatter trait

use merge_domain::{MergeResult, OutputFormat};

/// Trait for formatting merge results
pub trait OutputFormatter {
    /// Format the complete merge result
    fn format(&self, result: &MergeResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &MergeResult) -> String;

    /// Format merged content only (concise output)
    fn format_content_only(&self, result: &MergeResult) -> String;

    /// Dispatch on the configured output format
    fn render(&self, result: &MergeResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Content => self.format_content_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
