use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use mindful::commands::{CmdMessage, MessageLevel, NoteView};
use mindful::model::Strength;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const BAR_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notes(views: &[NoteView], today: NaiveDate) {
    if views.is_empty() {
        println!("No notes found.");
        return;
    }

    for view in views {
        let id_str = format!("{}  ", view.note.id);
        let time_ago = format_time_ago(view.note.date_created, today);

        let content_preview: String = view
            .note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if content_preview.is_empty() {
            view.note.title.clone()
        } else {
            format!("{} {}", view.note.title, content_preview)
        };

        let fixed_width = id_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}",
            id_str.dimmed(),
            title_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );

        let status = if view.due {
            "Needs review!".red().bold()
        } else {
            format!("Next review: {}", view.note.next_review).normal()
        };
        println!(
            "    {} {:>3}% {:<6}  {}",
            strength_bar(view.note.memory_strength, view.strength),
            view.note.memory_strength,
            view.strength.label(),
            status
        );
    }
}

fn strength_bar(score: u8, strength: Strength) -> ColoredString {
    let filled = (score as usize * BAR_WIDTH) / 100;
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    );
    match strength {
        Strength::High => bar.green(),
        Strength::Medium => bar.yellow(),
        Strength::Low => bar.red(),
    }
}

fn format_time_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days().max(0) as u64;
    if days == 0 {
        return "created today".to_string();
    }
    let duration = std::time::Duration::from_secs(days * 86_400);
    format!("created {}", Formatter::new().convert(duration))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let target = max_width.saturating_sub(ellipsis.width());
    let mut result = String::new();
    let mut current = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > target {
            break;
        }
        result.push(c);
        current += w;
    }

    result.push_str(ellipsis);
    result
}
