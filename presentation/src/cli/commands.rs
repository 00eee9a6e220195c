//! CLI command definitions

use clap::{Parser, Subcommand};
use merge_domain::OutputFormat;
use std::path::PathBuf;

/// CLI arguments for ai-merge
#[derive(Parser, Debug)]
#[command(name = "ai-merge")]
#[command(author, version, about = "Merge contributions from multiple AI agents into one result")]
#[command(long_about = r#"
ai-merge validates contributions submitted by several AI agents and merges
them with a configurable strategy.

Text strategies:        synthesis, consensus, complementary, competitive_evaluation
Multi-modal strategies: cross_modal_synthesis, modality_specific, multimodal_consensus

Configuration files are loaded from (in priority order):
1. AI_MERGE_* environment variables
2. --config <path>          Explicit config file
3. ./ai-merge.toml          Project-level config
4. ~/.config/ai-merge/config.toml   Global config

Example:
  ai-merge merge --agents ./agents --input batch.json --strategy consensus
  ai-merge demo --multimodal
  ai-merge agents --agents ./agents
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (full, content, json)
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit a batch of contributions from a JSON file and merge them
    Merge {
        /// Submission file (context + contributions)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Directory of agent JSON files (overrides [agents].dir)
        #[arg(short, long, value_name = "DIR")]
        agents: Option<PathBuf>,

        /// Merge strategy; defaults to the configured one
        #[arg(short, long, value_name = "STRATEGY")]
        strategy: Option<String>,

        /// Use the multi-modal engine (implied when the batch has media files)
        #[arg(short, long)]
        multimodal: bool,

        /// Validation context (overrides the file's and the configured one)
        #[arg(short, long, value_name = "TEXT")]
        context: Option<String>,
    },

    /// Run a built-in scenario with sample agents and contributions
    Demo {
        /// Include generated image, audio and video files
        #[arg(short, long)]
        multimodal: bool,

        /// Run only this strategy instead of all of them
        #[arg(short, long, value_name = "STRATEGY")]
        strategy: Option<String>,
    },

    /// List the agents defined in an agent directory
    Agents {
        /// Directory of agent JSON files (overrides [agents].dir)
        #[arg(short, long, value_name = "DIR")]
        agents: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merge() {
        let cli = Cli::try_parse_from([
            "ai-merge",
            "merge",
            "--input",
            "batch.json",
            "--strategy",
            "consensus",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Merge {
                input,
                strategy,
                multimodal,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("batch.json"));
                assert_eq!(strategy.as_deref(), Some("consensus"));
                assert!(!multimodal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_demo_multimodal() {
        let cli = Cli::try_parse_from(["ai-merge", "demo", "--multimodal"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Demo {
                multimodal: true,
                strategy: None
            })
        );
    }

    #[test]
    fn test_invalid_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["ai-merge", "demo", "-o", "yaml"]).is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["ai-merge", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
