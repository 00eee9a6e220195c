//! CLI entrypoint for ai-merge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod demo;

use anyhow::{Context, Result, bail};
use clap::Parser;
use merge_application::{EventLog, MergeRegistry, NoEventLog};
use merge_domain::{MergeResult, MergeStrategy, MultiModalStrategy};
use merge_infrastructure::{
    AgentFileLoader, ConfigLoader, FileConfig, JsonlEventLog, SubmissionFile,
};
use merge_presentation::{Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    for issue in config.check()? {
        eprintln!("{issue}");
    }
    Ok(config)
}

fn build_registry(config: &FileConfig) -> MergeRegistry {
    let (settings, _) = config.merge.to_settings();

    let event_log: Arc<dyn EventLog> = match config.log.resolved_path() {
        Some(path) => match JsonlEventLog::new(&path, config.log.source.clone()) {
            Some(log) => {
                info!("Event log: {}", log.path().display());
                Arc::new(log)
            }
            None => Arc::new(NoEventLog),
        },
        None => Arc::new(NoEventLog),
    };

    MergeRegistry::with_settings(event_log, settings)
}

fn agents_dir(cli_dir: Option<&PathBuf>, config: &FileConfig) -> Option<PathBuf> {
    cli_dir.cloned().or_else(|| config.agents.dir.clone())
}

fn print_results(results: &[MergeResult], output: &OutputConfig) {
    let formatter = ConsoleFormatter;
    let titled = results.len() > 1 && output.format != merge_domain::OutputFormat::Json;

    for result in results {
        if titled {
            println!("{}", ConsoleFormatter::title(&result.strategy.to_uppercase()));
        }
        println!("{}", formatter.render(result, output.format));
    }
}

fn run_merge(
    registry: &MergeRegistry,
    config: &FileConfig,
    input: &Path,
    agents: Option<&PathBuf>,
    strategy: Option<&str>,
    multimodal: bool,
    context: Option<&str>,
) -> Result<MergeResult> {
    let Some(dir) = agents_dir(agents, config) else {
        bail!("No agent directory. Pass --agents <DIR> or set [agents].dir in the config.");
    };
    for agent in AgentFileLoader::load_dir(&dir)? {
        registry.register_agent(agent)?;
    }

    let submission = SubmissionFile::load(input)?;
    let hashes = submission.submit_all(registry)?;
    info!(submitted = hashes.len(), "Submission file processed");

    let settings = registry.settings();
    let context = context
        .or(submission.context.as_deref())
        .unwrap_or(settings.default_context.as_str())
        .to_string();

    let result = if multimodal || submission.has_media() {
        let strategy = strategy
            .map(MultiModalStrategy::from)
            .unwrap_or_else(|| settings.default_multimodal_strategy.clone());
        if !strategy.is_recognized() {
            warn!("Unknown multi-modal strategy '{}', merging text only", strategy);
        }
        registry.merge_all_multimodal(&strategy, &context)
    } else {
        let strategy = strategy
            .map(MergeStrategy::from)
            .unwrap_or_else(|| settings.default_strategy.clone());
        if !strategy.is_recognized() {
            warn!("Unknown strategy '{}', falling back to synthesis", strategy);
        }
        registry.merge_all(&strategy, &context)
    };
    Ok(result)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting ai-merge");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let output = OutputConfig::resolve(
        config.output.format,
        config.output.color,
        cli.output,
        cli.no_color,
    );
    output.apply_color();

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `ai-merge --help` for usage.");
    };

    match command {
        Command::Merge {
            input,
            agents,
            strategy,
            multimodal,
            context,
        } => {
            let registry = build_registry(&config);
            let result = run_merge(
                &registry,
                &config,
                &input,
                agents.as_ref(),
                strategy.as_deref(),
                multimodal,
                context.as_deref(),
            )?;
            print_results(&[result], &output);
        }
        Command::Demo {
            multimodal,
            strategy,
        } => {
            let registry = build_registry(&config);
            let results = if multimodal {
                demo::run_multimodal(&registry, strategy.as_deref().map(MultiModalStrategy::from))?
            } else {
                demo::run_text(&registry, strategy.as_deref().map(MergeStrategy::from))?
            };
            print_results(&results, &output);
        }
        Command::Agents { agents } => {
            let Some(dir) = agents_dir(agents.as_ref(), &config) else {
                bail!("No agent directory. Pass --agents <DIR> or set [agents].dir in the config.");
            };
            let agents = AgentFileLoader::load_dir(&dir)?;
            print!("{}", ConsoleFormatter::format_agents(&agents));
        }
    }

    Ok(())
}
