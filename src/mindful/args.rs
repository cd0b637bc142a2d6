use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mindful", version)]
#[command(about = "Spaced-repetition note review for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note
        title: String,

        /// Content of the note
        #[arg(required = false)]
        content: Option<String>,

        /// Creation date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show only notes due today or overdue
        #[arg(long)]
        due: bool,
    },

    /// Mark one or more notes as reviewed
    #[command(alias = "r")]
    Review {
        /// Ids of the notes (as shown by `list`)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the notes (as shown by `list`)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
