//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::stream_printer::StreamPrinter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tutor_application::{NoTurnProgress, RunTurnUseCase, TurnError};
use tutor_domain::{sample_questions, ChatSession, GenerationParams, Message, Role};

/// What a slash command asks the loop to do next
enum Action {
    Handled,
    Submit(String),
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RunTurnUseCase,
    session: ChatSession,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunTurnUseCase, session: ChatSession) -> Self {
        let history_file = dirs::data_dir().map(|p| p.join("tutor-chat").join("history.txt"));
        Self {
            use_case,
            session,
            show_progress: true,
            history_file,
        }
    }

    /// Set whether to show the streaming display
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if !self.use_case.has_client() {
            println!("{}", ConsoleFormatter::missing_key_notice());
            println!();
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        match self.handle_command(line) {
                            Action::Exit => break,
                            Action::Handled => {}
                            Action::Submit(text) => {
                                let _ = rl.add_history_entry(&text);
                                self.submit(&text).await;
                            }
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.submit(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("안녕히 가세요!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let config = self.session.config();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              💬 tutor-chat                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("간단한 챗봇 데모입니다. OpenAI API 키가 필요합니다.");
        println!();
        println!(
            "Model: {}   Mode: {} ({})   Grade: {}",
            config.model,
            config.mode,
            config.mode.label(),
            config.grade
        );
        println!();
        println!("Type a message, pick a sample question, or use /help.");
        self.print_samples();
    }

    fn print_samples(&self) {
        println!();
        println!("예시 질문 (/sample <n> 으로 바로 전송):");
        for (i, question) in sample_questions(self.session.config().mode).iter().enumerate() {
            println!("  {}. {}", i + 1, question);
        }
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help                 - Show this help");
        println!("  /config               - Show current settings");
        println!("  /model <id>           - Switch model (gpt-4o-mini, gpt-4, gpt-3.5-turbo)");
        println!("  /mode <m>             - Switch mode (concept, emotion)");
        println!("  /grade <n>            - Switch grade (1-6)");
        println!("  /temperature <t>      - Set temperature [0.0, 1.5]");
        println!("  /max-tokens <n>       - Set max tokens [50, 4000]");
        println!("  /safe <on|off>        - Toggle the safety note (emotion mode)");
        println!("  /font <size>          - Font size (small, medium, large)");
        println!("  /prompt [text]        - Show or set the system prompt override");
        println!("  /reset-prompt         - 시스템 프롬프트 초기화");
        println!("  /clear                - 대화 초기화");
        println!("  /transcript           - Re-render the conversation");
        println!("  /samples              - Show sample questions");
        println!("  /sample <n>           - Send sample question n");
        println!("  /quit, /exit, /q      - Exit chat");
        println!();
        println!("설정 변경은 다음 턴부터 적용됩니다.");
        println!();
    }

    fn print_config(&self) {
        let config = self.session.config();
        println!();
        println!("Model:        {}", config.model);
        println!("Mode:         {} ({})", config.mode, config.mode.label());
        println!("Grade:        {}", config.grade);
        println!("Temperature:  {}", config.generation.temperature);
        println!("Max tokens:   {}", config.generation.max_tokens);
        println!("Safe mode:    {}", if config.safe_mode { "on" } else { "off" });
        println!("Font:         {} ({}px)", config.font, config.font.px());
        match &config.system_prompt_override {
            Some(prompt) => println!("Prompt:       (override) {}", prompt),
            None => println!("Prompt:       (generated template)"),
        }
        match config.history_limit {
            Some(limit) => println!("History:      last {} turns", limit),
            None => println!("History:      full"),
        }
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&mut self, line: &str) -> Action {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or_default();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("안녕히 가세요!");
                return Action::Exit;
            }
            "/help" | "/h" | "/?" => self.print_help(),
            "/config" => self.print_config(),
            "/model" => self.set_field(argument, |config, value| config.model = value),
            "/mode" => {
                self.set_field(argument, |config, value| config.mode = value);
                self.print_samples();
            }
            "/grade" => self.set_field(argument, |config, value| config.grade = value),
            "/font" => self.set_field(argument, |config, value| config.font = value),
            "/temperature" => match argument.parse::<f32>() {
                Ok(value) => {
                    let config = self.session.config_mut();
                    config.generation =
                        GenerationParams::new(value, config.generation.max_tokens);
                    println!("Temperature: {}", config.generation.temperature);
                }
                Err(_) => println!("Usage: /temperature <0.0-1.5>"),
            },
            "/max-tokens" => match argument.parse::<u32>() {
                Ok(value) => {
                    let config = self.session.config_mut();
                    config.generation =
                        GenerationParams::new(config.generation.temperature, value);
                    println!("Max tokens: {}", config.generation.max_tokens);
                }
                Err(_) => println!("Usage: /max-tokens <50-4000>"),
            },
            "/safe" => match argument {
                "on" => {
                    self.session.config_mut().safe_mode = true;
                    println!("Safe mode: on");
                }
                "off" => {
                    self.session.config_mut().safe_mode = false;
                    println!("Safe mode: off");
                }
                _ => println!("Usage: /safe <on|off>"),
            },
            "/prompt" => {
                if argument.is_empty() {
                    match &self.session.config().system_prompt_override {
                        Some(prompt) => println!("(override) {}", prompt),
                        None => println!("(generated template)"),
                    }
                } else {
                    self.session.config_mut().system_prompt_override =
                        Some(argument.to_string());
                    println!("System prompt override set.");
                }
            }
            "/reset-prompt" => {
                self.session.config_mut().reset_system_prompt();
                println!("시스템 프롬프트를 초기화했습니다.");
            }
            "/clear" => {
                self.session.conversation_mut().reset();
                println!("대화를 초기화했습니다.");
            }
            "/transcript" => {
                let font = self.session.config().font;
                let transcript =
                    ConsoleFormatter::format_transcript(self.session.conversation().all(), font);
                if transcript.is_empty() {
                    println!("(대화 없음)");
                } else {
                    println!();
                    println!("{}", transcript);
                    println!();
                }
            }
            "/samples" => self.print_samples(),
            "/sample" => {
                let samples = sample_questions(self.session.config().mode);
                match argument.parse::<usize>() {
                    Ok(n) if (1..=samples.len()).contains(&n) => {
                        let question = samples[n - 1];
                        println!(">>> {}", question);
                        return Action::Submit(question.to_string());
                    }
                    _ => println!("Usage: /sample <1-{}>", samples.len()),
                }
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
            }
        }

        Action::Handled
    }

    /// Parse-and-assign helper for the selector commands.
    fn set_field<T>(&mut self, argument: &str, assign: impl FnOnce(&mut tutor_domain::ChatConfig, T))
    where
        T: std::str::FromStr + std::fmt::Display + Copy,
        T::Err: std::fmt::Display,
    {
        match argument.parse::<T>() {
            Ok(value) => {
                assign(self.session.config_mut(), value);
                println!("Set to {} (다음 턴부터 적용)", value);
            }
            Err(e) => println!("{}", e),
        }
    }

    /// Run one full turn for the given text, exactly as if it was typed.
    async fn submit(&mut self, text: &str) {
        if !self.use_case.has_client() {
            println!("{}", ConsoleFormatter::missing_key_notice());
            return;
        }

        println!();

        let result = if self.show_progress {
            let progress =
                StreamPrinter::new().with_prefix(ConsoleFormatter::role_label(Role::Assistant));
            self.use_case.execute(&mut self.session, text, &progress).await
        } else {
            self.use_case
                .execute(&mut self.session, text, &NoTurnProgress)
                .await
        };

        match result {
            Ok(answer) => {
                if !self.show_progress {
                    let font = self.session.config().font;
                    println!(
                        "{}",
                        ConsoleFormatter::format_message(&Message::assistant(answer), font)
                    );
                }
            }
            Err(TurnError::MissingCredential) => {
                println!("{}", ConsoleFormatter::missing_key_notice());
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::turn_failed(&e));
            }
        }
        println!();
    }
}
