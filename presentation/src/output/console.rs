//! Console output formatter for merge results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use merge_domain::{Agent, MergeResult};

/// Characters of a contribution hash shown in the validation table
const SHORT_HASH_CHARS: usize = 12;

/// Formats merge results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete merge result
    pub fn format(result: &MergeResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Merge Result"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            result.strategy
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".cyan().bold(),
            Self::confidence(result.confidence_score)
        ));
        let agents = if result.contributing_agents.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            result.contributing_agents.join(", ")
        };
        output.push_str(&format!("{} {}\n", "Agents:".cyan().bold(), agents));
        if let Some(modality) = result.output_modality {
            output.push_str(&format!(
                "{} {}\n",
                "Output modality:".cyan().bold(),
                modality
            ));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Merged at:".cyan().bold(),
            Self::timestamp(result.timestamp)
        ));

        output.push_str(&Self::section_header("Merged Content"));
        output.push_str(&format!("\n{}\n", result.merged_content));

        if !result.validation_results.is_empty() {
            output.push_str(&Self::section_header("Validation"));
            for (hash, validation) in &result.validation_results {
                let short: String = hash.chars().take(SHORT_HASH_CHARS).collect();
                if validation.valid {
                    output.push_str(&format!(
                        "  {} {} {}\n",
                        "✓".green(),
                        short,
                        format!("quality {:.2}", validation.quality_score).dimmed()
                    ));
                } else {
                    output.push_str(&format!(
                        "  {} {} {}\n",
                        "✗".red(),
                        short,
                        format!("quality {:.2}", validation.quality_score).dimmed()
                    ));
                    for issue in &validation.issues {
                        output.push_str(&format!("      - {}\n", issue));
                    }
                }
            }
        }

        if !result.metadata.is_empty() {
            output.push_str(&Self::section_header("Metadata"));
            for (key, value) in &result.metadata {
                let rendered = serde_json::to_string(value).unwrap_or_default();
                output.push_str(&format!("  {}: {}\n", key.dimmed(), rendered));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &MergeResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format merged content only (concise output)
    pub fn format_content_only(result: &MergeResult) -> String {
        format!("{}\n", result.merged_content)
    }

    /// Format the registered agents as a list
    pub fn format_agents(agents: &[Agent]) -> String {
        if agents.is_empty() {
            return format!("{}\n", "No agents registered".yellow());
        }

        let mut output = Self::section_header("Registered Agents");
        for agent in agents {
            let modalities: Vec<&str> = agent
                .supported_modalities
                .iter()
                .map(|m| m.as_str())
                .collect();
            output.push_str(&format!(
                "\n{} {}\n",
                agent.name.yellow().bold(),
                format!("({})", agent.id).dimmed()
            ));
            output.push_str(&format!(
                "  confidence: {}\n",
                Self::confidence(agent.confidence)
            ));
            if !agent.specialty.is_empty() {
                output.push_str(&format!("  specialty:  {}\n", agent.specialty));
            }
            if !agent.capabilities.is_empty() {
                output.push_str(&format!("  capabilities: {}\n", agent.capabilities.join(", ")));
            }
            output.push_str(&format!("  modalities: {}\n", modalities.join(", ")));
        }
        output
    }

    /// Header line introducing one of several results in a single run
    pub fn title(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn confidence(score: f64) -> String {
        let text = format!("{:.2}", score);
        if score >= 0.8 {
            text.green().to_string()
        } else if score >= 0.5 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn timestamp(ms: u64) -> String {
        i64::try_from(ms)
            .ok()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| ms.to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &MergeResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &MergeResult) -> String {
        Self::format_json(result)
    }

    fn format_content_only(&self, result: &MergeResult) -> String {
        Self::format_content_only(result)
    }
}
