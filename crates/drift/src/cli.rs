use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "drift",
    about = "Project tracking with AI-generated rolling summaries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the staleness sweep and show the project dashboard
    DailyBriefing,

    /// Add a log entry to a project and refresh its summary
    AddLog {
        /// Project ID or name
        project: String,

        /// Log entry text
        text: String,
    },

    /// Check for stale projects
    CheckStale,

    /// View project details
    ViewProject {
        /// Project ID or name
        project: String,
    },
}
