//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tutor-chat
#[derive(Parser, Debug)]
#[command(name = "tutor-chat")]
#[command(author, version, about = "Elementary-school coaching chatbot with streaming responses")]
#[command(long_about = r#"
tutor-chat is a single-session chat front-end for an elementary-school
coaching chatbot. It supports two persona presets:

  concept  "개념 유지 코치" - explains school concepts at the chosen grade level
  emotion  "감정 코치"      - responds empathetically, with an optional safety note

The OpenAI API key is read from OPENAI_API_KEY or prompted for at startup.
It is required before any completion call and is never persisted.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tutor.toml        Project-level config
3. ~/.config/tutor-chat/config.toml   Global config

Example:
  tutor-chat                                # interactive chat
  tutor-chat --mode emotion -g 5            # emotion coach for 5학년
  tutor-chat "중력은 뭐예요?"               # one-shot question
"#)]
pub struct Cli {
    /// A single question to ask (omit for interactive chat mode)
    pub question: Option<String>,

    /// Force interactive chat mode even when a question is given
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use (gpt-4o-mini, gpt-4, gpt-3.5-turbo)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Persona mode (concept, emotion)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Grade level (1-6)
    #[arg(short, long, value_name = "GRADE")]
    pub grade: Option<String>,

    /// Sampling temperature [0.0, 1.5]
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum response tokens [50, 4000]
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Disable the safety note in emotion mode
    #[arg(long)]
    pub no_safe_mode: bool,

    /// Chat message font size (small, medium, large)
    #[arg(long, value_name = "SIZE")]
    pub font: Option<String>,

    /// System prompt override (replaces the generated template)
    #[arg(long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the streaming display (print only the final answer)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
