use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use mindful::api::NotesApi;
use mindful::commands::list::ListFilter;
use mindful::config::MindfulConfig;
use mindful::error::{MindfulError, Result};
use mindful::store::fs::FileSlot;
use mindful::store::NoteStore;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotesApi<FileSlot>,
    today: NaiveDate,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            date,
        }) => handle_create(&mut ctx, title, content, date),
        Some(Commands::List { due }) => handle_list(&ctx, due),
        Some(Commands::Review { ids }) => handle_review(&mut ctx, ids),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        None => handle_list(&ctx, false),
    }
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = MindfulConfig::load(&dir)?;
    let store = NoteStore::load(FileSlot::new(dir.join("notes.json")));
    Ok(AppContext {
        api: NotesApi::new(store, config.intervals),
        today: Local::now().date_naive(),
    })
}

fn data_dir() -> Result<PathBuf> {
    // MINDFUL_HOME overrides the platform data dir (used by tests).
    if let Ok(home) = std::env::var("MINDFUL_HOME") {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("", "", "mindful").ok_or_else(|| {
        MindfulError::Config("Could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let date = date.unwrap_or(ctx.today);
    let result = ctx
        .api
        .create_note(title, content.unwrap_or_default(), date)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, due: bool) -> Result<()> {
    let filter = if due { ListFilter::Due } else { ListFilter::All };
    let result = ctx.api.list_notes(filter, ctx.today)?;
    print::print_notes(&result.listed_notes, ctx.today);
    Ok(())
}

fn handle_review(ctx: &mut AppContext, ids: Vec<i64>) -> Result<()> {
    for id in ids {
        let result = ctx.api.review_note(id, ctx.today)?;
        print::print_messages(&result.messages);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<i64>, yes: bool) -> Result<()> {
    for id in ids {
        if !yes {
            if let Some(title) = ctx.api.note_title(id) {
                if !confirm(&format!("Delete \"{}\"?", title))? {
                    println!("Skipped: {}", title);
                    continue;
                }
            }
        }
        let result = ctx.api.delete_note(id)?;
        print::print_messages(&result.messages);
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(MindfulError::Io)?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(MindfulError::Io)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
