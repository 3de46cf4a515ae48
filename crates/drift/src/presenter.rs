use std::io::{self, BufRead, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use libdrift_core::{DriftError, Presenter, Project};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Terminal presenter: comfy-table dashboard and detail views, stdin input
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn render_dashboard(&self, projects: &[Project]) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "Name", "Status", "Last Updated"]);

        for project in projects {
            table.add_row(vec![
                Cell::new(&project.id),
                Cell::new(&project.name),
                Cell::new(project.status.as_str()),
                Cell::new(project.updated_at.format(TIMESTAMP_FORMAT).to_string()),
            ]);
        }

        println!("Project Dashboard");
        println!("{}", table);
    }

    fn render_project_details(&self, project: &Project) {
        println!("{} ({})", project.name, project.id);
        println!("Status:  {}", project.status.as_str());
        println!("Created: {}", project.created_at.format(TIMESTAMP_FORMAT));
        println!("Updated: {}", project.updated_at.format(TIMESTAMP_FORMAT));
        println!();
        println!("Summary:");
        println!("{}", project.description);

        if !project.logs.is_empty() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Logged", "Author", "Entry"]);

            for log in &project.logs {
                table.add_row(vec![
                    Cell::new(log.timestamp.format(TIMESTAMP_FORMAT).to_string()),
                    Cell::new(&log.author),
                    Cell::new(&log.content),
                ]);
            }

            println!();
            println!("Logs");
            println!("{}", table);
        }

        if !project.tasks.is_empty() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Done", "Task"]);

            for task in &project.tasks {
                table.add_row(vec![
                    Cell::new(if task.completed { "x" } else { " " }),
                    Cell::new(&task.title),
                ]);
            }

            println!();
            println!("Tasks");
            println!("{}", table);
        }
    }

    fn get_input(&self, prompt: &str) -> Result<String, DriftError> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
