//! Line-based ticket form built on reedline
//!
//! Asks for the type of request, then the description, then submits the
//! ticket and prints the response. Empty or unknown answers are rejected
//! and asked again. Ctrl-C abandons the current ticket; Ctrl-D exits.

use crate::config::FormConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use thiserror::Error;
use ticket_desk_application::{NoProgress, SubmissionProgressNotifier, SubmitTicketUseCase};
use ticket_desk_domain::{Category, DomainError, OutputFormat, SubmissionMode, TicketRequest};
use tracing::warn;

/// Number of descriptions kept in the history file
const HISTORY_CAPACITY: usize = 500;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the user did at a prompt
enum Answer {
    Text(String),
    Abandon,
    Quit,
}

/// Outcome of one field of the form
enum Step<T> {
    Value(T),
    StartOver,
    Quit,
}

/// Parse the answer to "Type of request": a menu number or a category name
pub fn parse_category_choice(input: &str) -> Result<Category, DomainError> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Category::SELECTABLE.get(i).copied())
            .ok_or_else(|| DomainError::UnknownCategory(input.to_string()));
    }
    match input.parse::<Category>()? {
        Category::Unset => Err(DomainError::MissingCategory),
        category => Ok(category),
    }
}

/// Interactive ticket form
pub struct TicketForm {
    use_case: SubmitTicketUseCase,
    output_format: OutputFormat,
    config: FormConfig,
}

impl TicketForm {
    pub fn new(use_case: SubmitTicketUseCase) -> Self {
        Self {
            use_case,
            output_format: OutputFormat::Text,
            config: FormConfig::default(),
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// History file from config, else `<data dir>/ticket-desk/history.txt`
    fn history_path(&self) -> Option<PathBuf> {
        match &self.config.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|p| p.join("ticket-desk").join("history.txt")),
        }
    }

    /// Line editor with file history when it can be opened, in-memory otherwise
    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        match self.history_path().and_then(|path| open_history(&path)) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    /// Run the form until the user quits
    pub async fn run(&self) -> Result<(), FormError> {
        let mut editor = self.editor();
        self.print_welcome();

        loop {
            let category = match self.ask_category(&mut editor)? {
                Step::Value(category) => category,
                Step::StartOver => continue,
                Step::Quit => break,
            };

            let description = match self.ask_description(&mut editor)? {
                Step::Value(description) => description,
                Step::StartOver => continue,
                Step::Quit => break,
            };

            match TicketRequest::validated(category, description) {
                Ok(request) => self.submit(&request).await,
                Err(e) => println!("{} {}", "x".red(), e),
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn ask_category(&self, editor: &mut Reedline) -> Result<Step<Category>, FormError> {
        loop {
            match read(editor, "Type of request")? {
                Answer::Quit => return Ok(Step::Quit),
                Answer::Abandon => return Ok(Step::StartOver),
                Answer::Text(line) => match parse_category_choice(&line) {
                    Ok(category) => return Ok(Step::Value(category)),
                    Err(e) => println!("{} {}", "x".red(), e),
                },
            }
        }
    }

    fn ask_description(&self, editor: &mut Reedline) -> Result<Step<String>, FormError> {
        loop {
            match read(editor, "Description")? {
                Answer::Quit => return Ok(Step::Quit),
                Answer::Abandon => return Ok(Step::StartOver),
                Answer::Text(line) if line.trim().is_empty() => {
                    println!("{} {}", "x".red(), DomainError::EmptyDescription);
                }
                Answer::Text(line) => return Ok(Step::Value(line)),
            }
        }
    }

    async fn submit(&self, request: &TicketRequest) {
        let spinner = ProgressReporter::new();
        let progress: &dyn SubmissionProgressNotifier = if self.config.show_progress {
            &spinner
        } else {
            &NoProgress
        };

        let output = self.use_case.execute(request, progress).await;

        let rendered = match self.output_format {
            OutputFormat::Text => ConsoleFormatter::format(request, &output),
            OutputFormat::Json => ConsoleFormatter::format_json(request, &output),
        };
        println!("{}", rendered);
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           ticket-desk - New ticket          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match self.use_case.endpoint() {
            Some(endpoint) if self.use_case.mode() == SubmissionMode::Remote => {
                println!("Agent: {}", endpoint.cyan());
            }
            _ => println!("Agent: {}", "local answers".dimmed()),
        }
        println!();
        println!("Type of request:");
        for (i, category) in Category::SELECTABLE.iter().enumerate() {
            println!("  {}) {}", i + 1, category.label());
        }
        println!();
        println!("Ctrl-C starts over, Ctrl-D exits.");
        println!();
    }
}

fn read(editor: &mut Reedline, label: &str) -> Result<Answer, FormError> {
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(label.to_string()),
        DefaultPromptSegment::Empty,
    );
    Ok(match editor.read_line(&prompt)? {
        Signal::Success(line) => Answer::Text(line),
        Signal::CtrlC => Answer::Abandon,
        Signal::CtrlD => Answer::Quit,
    })
}

fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!(
            "History disabled: cannot create {}: {}",
            parent.display(),
            e
        );
        return None;
    }

    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!("History disabled: cannot open {}: {}", path.display(), e);
            None
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_by_number() {
        assert_eq!(parse_category_choice("1").unwrap(), Category::Guide);
        assert_eq!(parse_category_choice(" 2 ").unwrap(), Category::Policies);
        assert_eq!(parse_category_choice("3").unwrap(), Category::Faq);
    }

    #[test]
    fn test_parse_category_by_name() {
        assert_eq!(parse_category_choice("FAQ").unwrap(), Category::Faq);
        assert_eq!(parse_category_choice("guide").unwrap(), Category::Guide);
    }

    #[test]
    fn test_parse_category_rejects_out_of_range() {
        assert!(matches!(
            parse_category_choice("0"),
            Err(DomainError::UnknownCategory(_))
        ));
        assert!(matches!(
            parse_category_choice("4"),
            Err(DomainError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_parse_category_rejects_empty() {
        assert!(matches!(
            parse_category_choice(""),
            Err(DomainError::MissingCategory)
        ));
    }

    #[test]
    fn test_parse_category_rejects_unknown_name() {
        assert!(matches!(
            parse_category_choice("billing"),
            Err(DomainError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_history_path_from_config() {
        let form = TicketForm::new(SubmitTicketUseCase::local()).with_config(FormConfig {
            show_progress: false,
            history_file: Some("/tmp/ticket-desk-history.txt".to_string()),
        });
        assert_eq!(
            form.history_path(),
            Some(PathBuf::from("/tmp/ticket-desk-history.txt"))
        );
    }

    #[test]
    fn test_open_history_in_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");
        assert!(open_history(&path).is_some());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_unusable_history_path_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        // Parent is a regular file, so the directory cannot be created
        assert!(open_history(&blocker.join("history.txt")).is_none());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/h.txt"), home.join("h.txt"));
        }
    }
}
