//! Interactive loop hosting a `TaskView` on a console.

use crate::command::{Command, HELP};
use crate::console::Console;
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};
use tasklist_core::{Task, TaskRepository, TaskService, TaskView};

/// Runs the command loop until `quit` or end of input.
pub fn run<Repo, R, W, E>(service: &TaskService<Repo>, console: Console<R, W, E>) -> Result<()>
where
    Repo: TaskRepository,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut view = TaskView::new(service, console);
    view.mount();
    show(&mut view)?;

    while let Some(line) = view.notifier_mut().read_line()? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                view.notifier_mut().warn(&err.to_string())?;
                continue;
            }
        };

        match command {
            Command::Add(title) => {
                view.set_draft_title(title);
                view.submit();
            }
            Command::Draft(title) => view.set_draft_title(title),
            Command::Submit => {
                view.submit();
            }
            Command::Toggle(row) => match row_task(&mut view, row)? {
                Some(task) => {
                    view.toggle(&task);
                }
                None => continue,
            },
            Command::Delete(row) => match row_task(&mut view, row)? {
                Some(task) => {
                    view.delete(&task);
                }
                None => continue,
            },
            Command::List => {}
            Command::Help => {
                view.notifier_mut().print(HELP)?;
                continue;
            }
            Command::Quit => break,
        }
        show(&mut view)?;
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}

/// Looks up a 1-based row in the current snapshot, warning when absent.
fn row_task<Repo, R, W, E>(
    view: &mut TaskView<'_, Repo, Console<R, W, E>>,
    row: usize,
) -> Result<Option<Task>>
where
    Repo: TaskRepository,
    R: BufRead,
    W: Write,
    E: Write,
{
    let task = view.tasks().get(row - 1).cloned();
    if task.is_none() {
        view.notifier_mut().warn(&format!("no task in row {row}"))?;
    }
    Ok(task)
}

fn show<Repo, R, W, E>(view: &mut TaskView<'_, Repo, Console<R, W, E>>) -> Result<()>
where
    Repo: TaskRepository,
    R: BufRead,
    W: Write,
    E: Write,
{
    let text = view.render().to_text();
    view.notifier_mut().print(&text)?;
    Ok(())
}
