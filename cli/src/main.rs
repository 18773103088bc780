//! CLI entrypoint for tutor-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutor_application::{CompletionClient, NoTurnProgress, RunTurnUseCase, TurnError};
use tutor_domain::{ChatConfig, ChatSession, GenerationParams};
use tutor_infrastructure::{ConfigLoader, FileConfig, OpenAiClient};
use tutor_presentation::{ChatRepl, Cli, ConsoleFormatter, StreamPrinter};

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

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tutor-chat");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load file config, then apply CLI overrides
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if !file_config.ui.color {
        colored::control::set_override(false);
    }

    let show_progress = file_config.repl.show_progress && !cli.quiet;
    let history_file = file_config.repl.history_file.clone().map(Into::into);
    let config = apply_cli_overrides(file_config, &cli)?;

    // === Dependency Injection ===
    // The credential is per-session and never persisted: OPENAI_API_KEY or
    // one interactive prompt. No key just means every turn shows the notice.
    let client: Option<Arc<dyn CompletionClient>> = match acquire_api_key() {
        Some(key) => Some(Arc::new(
            OpenAiClient::new(key).context("Failed to create OpenAI client")?,
        )),
        None => None,
    };

    let use_case = RunTurnUseCase::new(client);
    let session = ChatSession::new(config);

    // One-shot question mode
    if let Some(question) = cli.question.as_deref().filter(|_| !cli.chat) {
        return run_one_shot(use_case, session, question, show_progress).await;
    }

    // Chat mode
    let mut repl = ChatRepl::new(use_case, session).with_progress(show_progress);
    if history_file.is_some() {
        repl = repl.with_history_file(history_file);
    }
    repl.run().await?;

    Ok(())
}

/// CLI flags beat file config; selector strings go through the domain
/// parsers so a typo fails fast with the supported values listed.
fn apply_cli_overrides(file_config: FileConfig, cli: &Cli) -> Result<ChatConfig> {
    let mut config = file_config
        .into_chat_config()
        .context("Invalid configuration file")?;

    if let Some(model) = &cli.model {
        config.model = model.parse()?;
    }
    if let Some(mode) = &cli.mode {
        config.mode = mode.parse()?;
    }
    if let Some(grade) = &cli.grade {
        config.grade = grade.parse()?;
    }
    if let Some(font) = &cli.font {
        config.font = font.parse()?;
    }
    if cli.temperature.is_some() || cli.max_tokens.is_some() {
        config.generation = GenerationParams::new(
            cli.temperature.unwrap_or(config.generation.temperature),
            cli.max_tokens.unwrap_or(config.generation.max_tokens),
        );
    }
    if cli.no_safe_mode {
        config.safe_mode = false;
    }
    if let Some(prompt) = &cli.system_prompt {
        if !prompt.trim().is_empty() {
            config.system_prompt_override = Some(prompt.clone());
        }
    }

    Ok(config)
}

/// Get the session credential: environment first, otherwise one prompt.
/// Returns `None` when the user leaves it blank.
fn acquire_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }

    print!("OpenAI API Key (Enter로 건너뛰기): ");
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return None;
    }

    let key = input.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// Answer a single question and exit.
async fn run_one_shot(
    use_case: RunTurnUseCase,
    mut session: ChatSession,
    question: &str,
    show_progress: bool,
) -> Result<()> {
    let result = if show_progress {
        let progress = StreamPrinter::new();
        use_case.execute(&mut session, question, &progress).await
    } else {
        use_case.execute(&mut session, question, &NoTurnProgress).await
    };

    match result {
        Ok(answer) => {
            if !show_progress {
                println!("{}", answer);
            }
            Ok(())
        }
        Err(TurnError::MissingCredential) => {
            println!("{}", ConsoleFormatter::missing_key_notice());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
