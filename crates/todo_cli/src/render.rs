//! Presentation of dispatch outcomes and errors.
//!
//! All terminal output of the binary goes through this module; the core
//! only returns records.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use todo_core::{CommandError, ListName, Outcome, Task};

pub fn outcomes(outcomes: &[Outcome]) {
    for outcome in outcomes {
        println!("{}", outcome_text(outcome));
    }
}

pub fn error(err: &CommandError) {
    match err {
        CommandError::Usage => eprintln!("{}", err.to_string().cyan()),
        other => eprintln!("{} {}", "todo:".red().bold(), other.to_string().red()),
    }
}

fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::ListCreated(list) => format!("List: {} created!", list.display().bold())
            .green()
            .to_string(),
        Outcome::Lists(lists) => lists_tree(lists),
        Outcome::ListDeleted(list) => format!("List: {} deleted!", list.display().bold())
            .red()
            .to_string(),
        Outcome::DeleteDeclined(raw) => format!("List: {raw} kept.").dimmed().to_string(),
        Outcome::TaskAdded { .. } | Outcome::TasksMarked { .. } | Outcome::TasksRemoved { .. } => {
            "List successfully modified.".green().to_string()
        }
        Outcome::ListViewed { list, tasks } => task_table(list, tasks).to_string(),
        Outcome::Help(text) => text.cyan().to_string(),
    }
}

fn lists_tree(lists: &[ListName]) -> String {
    let mut out = "Your lists".magenta().bold().italic().to_string();
    for (index, list) in lists.iter().enumerate() {
        let branch = if index + 1 == lists.len() {
            "└── "
        } else {
            "├── "
        };
        out.push('\n');
        out.push_str(branch);
        out.push_str(&list.display().cyan().underline().to_string());
    }
    out
}

fn task_table(list: &ListName, tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(list.display()).set_alignment(CellAlignment::Center)
    ]);

    for task in tasks {
        let cell = if task.is_done() {
            Cell::new(&task.name)
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::Grey)
        } else {
            Cell::new(&task.name)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        };
        table.add_row(vec![cell]);
    }

    table
}
