// Interactive session: one line in, one operation, one render out

use crate::command::{Command, HELP};
use crate::filter::Filter;
use crate::store::{TaskList, View};
use crate::task::Task;
use colored::Colorize;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Drives a `TaskList` from line input and renders the derived view
pub struct Session<W: Write> {
    list: TaskList,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(list: TaskList, out: W) -> Self {
        Self { list, out }
    }

    pub fn into_parts(self) -> (TaskList, W) {
        (self.list, self.out)
    }

    /// Consume lines until EOF or a quit command
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!(filter = %self.list.filter(), "session started");
        self.render()?;

        for line in input.lines() {
            let line = line.context("Failed to read input line")?;
            if !self.handle_line(&line)? {
                break;
            }
        }

        info!(remaining = self.list.len(), "session ended");
        Ok(())
    }

    /// Handle one line; returns false when the session should end
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let cmd = match Command::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(line, error = %e, "rejected input line");
                writeln!(self.out, "{}", e.to_string().yellow())?;
                return Ok(true);
            }
        };

        match cmd {
            Command::Add(text) => {
                self.list.set_input(text);
                self.list.submit();
                self.render()?;
            }
            Command::Toggle(id) => {
                self.list.toggle_complete(id);
                self.render()?;
            }
            Command::Delete(id) => {
                self.list.delete(id);
                self.render()?;
            }
            Command::SetFilter(show_completed) => {
                self.list.set_filter(show_completed);
                self.render()?;
            }
            Command::List => self.render()?,
            Command::Json => self.render_json()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
        }

        self.out.flush()?;
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        let view = self.list.view();
        let text = render_view(&view, self.list.filter());
        write!(self.out, "{}", text)?;
        Ok(())
    }

    fn render_json(&mut self) -> Result<()> {
        let view = self.list.view();
        let json = serde_json::to_string_pretty(&view.tasks).context("Failed to serialize view")?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }
}

/// Count label, then one line per task
pub fn render_view(view: &View<'_>, filter: Filter) -> String {
    let mut s = String::new();

    let noun = if view.count == 1 { "item" } else { "items" };
    let label = format!("{} {}", view.count, noun);
    let shown = if filter.show_completed {
        "showing completed"
    } else {
        "hiding completed"
    };
    s.push_str(&format!("{} ({})\n", label.bold(), shown.dimmed()));

    if view.is_empty() {
        s.push_str(&format!("  {}\n", "No tasks".dimmed()));
        return s;
    }

    for task in &view.tasks {
        s.push_str(&render_task(task));
        s.push('\n');
    }
    s
}

fn render_task(task: &Task) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        task.text.strikethrough().dimmed().to_string()
    } else {
        task.text.normal().to_string()
    };
    format!(
        "  {} {:>3}  {}  {}",
        mark,
        task.id,
        text,
        task.created_at_display().dimmed()
    )
}
