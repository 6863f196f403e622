//! Console output formatter for ticket responses

use colored::Colorize;
use ticket_desk_application::{SubmitBatchOutput, SubmitTicketOutput};
use ticket_desk_domain::{ResponseSource, TicketRequest};

/// Width of the response box, in columns
const BOX_WIDTH: usize = 60;

/// Formats submission results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a response inside a titled box
    pub fn format(request: &TicketRequest, output: &SubmitTicketOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Response"));
        text.push('\n');

        text.push_str(&format!(
            "{} {}\n",
            "Type:".cyan().bold(),
            request.category().label()
        ));
        if let Some(id) = &output.ticket_id {
            text.push_str(&format!("{} {}\n", "Ticket:".cyan().bold(), id));
        }
        text.push('\n');

        let body = Self::wrap(output.response.text(), BOX_WIDTH - 2);
        let body = Self::indent(&body, "  ");
        match output.response.source() {
            ResponseSource::Agent => text.push_str(&body),
            ResponseSource::Canned => text.push_str(&format!("{}", body.dimmed())),
            ResponseSource::Fallback => text.push_str(&format!("{}", body.red())),
        }
        text.push('\n');

        text.push_str(&Self::footer());
        text
    }

    /// Format a response as a JSON object
    pub fn format_json(request: &TicketRequest, output: &SubmitTicketOutput) -> String {
        let value = serde_json::json!({
            "ticket_id": output.ticket_id,
            "category": request.category(),
            "source": output.response.source(),
            "state": output.state,
            "response": output.response.text(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a batch result in the answers-file layout
    pub fn format_batch(output: &SubmitBatchOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line batch summary for stderr
    pub fn batch_summary(output: &SubmitBatchOutput) -> String {
        let answered = output.answers.len() - output.failed;
        if output.failed == 0 {
            format!("{} {} answered", "v".green(), answered)
        } else {
            format!(
                "{} {} answered, {} failed",
                "!".yellow(),
                answered,
                output.failed
            )
        }
    }

    fn header(title: &str) -> String {
        let line = "─".repeat(BOX_WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = BOX_WIDTH
        )
    }

    fn footer() -> String {
        format!("{}\n", "─".repeat(BOX_WIDTH).cyan())
    }

    /// Greedy word wrap; words longer than `width` stay on their own line
    pub fn wrap(text: &str, width: usize) -> String {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                    lines.push(std::mem::take(&mut line));
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
