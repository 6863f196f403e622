//! CLI entrypoint for ticket-desk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use ticket_desk_application::{
    NoProgress, SubmissionLogger, SubmissionParams, SubmissionProgressNotifier, SubmitBatchInput,
    SubmitBatchUseCase, SubmitTicketUseCase,
};
use ticket_desk_domain::{
    Category, OutputFormat as DomainOutputFormat, SubmissionMode, TicketRequest,
};
use ticket_desk_infrastructure::{ConfigLoader, FileConfig, HttpAgentGateway, JsonlSubmissionLogger};
use ticket_desk_presentation::{
    Cli, ConsoleFormatter, FormConfig, OutputConfig, ProgressReporter, TicketForm,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let output_config = OutputConfig {
        format: config.output.format,
        color: config.output.color,
    };
    let form_config = FormConfig {
        show_progress: config.form.show_progress && !cli.quiet,
        history_file: config.form.history_file.clone(),
    };

    info!("Starting ticket-desk ({} mode)", config.submission.mode);

    // === Dependency Injection ===
    let mut use_case = build_use_case(&config)?;

    let log_path = cli
        .log
        .clone()
        .or_else(|| config.logging.submission_log.as_ref().map(PathBuf::from));
    if let Some(path) = log_path {
        match JsonlSubmissionLogger::new(&path) {
            Some(logger) => {
                let logger: Arc<dyn SubmissionLogger> = Arc::new(logger);
                use_case = use_case.with_submission_logger(logger);
            }
            None => warn!("Submission log disabled: cannot open {}", path.display()),
        }
    }

    // Form mode: reedline owns Ctrl-C while reading
    if cli.form {
        let form = TicketForm::new(use_case)
            .with_output_format(output_config.format())
            .with_config(form_config);
        form.run().await?;
        return Ok(());
    }

    // Ctrl-C cancels the in-flight request instead of killing the process
    let cancellation = CancellationToken::new();
    let token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });
    let use_case = use_case.with_cancellation(cancellation);

    let reporter = ProgressReporter::new();
    let progress: &dyn SubmissionProgressNotifier = if form_config.show_progress {
        &reporter
    } else {
        &NoProgress
    };

    if let Some(batch_path) = &cli.batch {
        let team = cli
            .team
            .clone()
            .unwrap_or_else(|| config.submission.team.clone());
        return run_batch(use_case, team, batch_path, progress).await;
    }

    // Single ticket mode - category and description are required
    let Some(category) = cli.category else {
        bail!("--category is required. Use --form for interactive mode.");
    };
    let Some(description) = cli.description.clone() else {
        bail!("A description is required. Use --form for interactive mode.");
    };
    let request = TicketRequest::validated(Category::from(category), description)?;

    let output = use_case.execute(&request, progress).await;

    let rendered = match output_config.format() {
        DomainOutputFormat::Text => ConsoleFormatter::format(&request, &output),
        DomainOutputFormat::Json => ConsoleFormatter::format_json(&request, &output),
    };
    println!("{}", rendered);

    Ok(())
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.agent.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.agent.timeout_secs = timeout;
    }
    if cli.local {
        config.submission.mode = SubmissionMode::Local;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
}

/// Log warnings, abort on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn build_use_case(config: &FileConfig) -> Result<SubmitTicketUseCase> {
    match config.submission.mode {
        SubmissionMode::Local => Ok(SubmitTicketUseCase::local()),
        SubmissionMode::Remote => {
            let gateway = HttpAgentGateway::from_config(&config.agent)?;
            let params = SubmissionParams::default()
                .with_mode(SubmissionMode::Remote)
                .with_request_timeout(config.agent.request_timeout());
            Ok(SubmitTicketUseCase::new(Arc::new(gateway), params))
        }
    }
}

async fn run_batch(
    use_case: SubmitTicketUseCase,
    team: String,
    path: &Path,
    progress: &dyn SubmissionProgressNotifier,
) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    let input: SubmitBatchInput = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid batch file", path.display()))?;

    let output = SubmitBatchUseCase::new(use_case, team)
        .execute(input, progress)
        .await;

    println!("{}", ConsoleFormatter::format_batch(&output));
    eprintln!("{}", ConsoleFormatter::batch_summary(&output));
    Ok(())
}
