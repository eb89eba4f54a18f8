use libs::task::{Task, TaskStatus};

pub const EMPTY_LIST_PLACEHOLDER: &str = "No tasks yet.";

/// The full list view: one row per task, then the summary line. Totals are
/// accumulated in the same pass that builds the rows.
pub fn render_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST_PLACEHOLDER.to_string();
    }

    let mut out = String::new();
    let mut completed = 0;
    let mut hours = 0.0;
    for task in tasks {
        if task.status == TaskStatus::Done {
            completed += 1;
        }
        hours += task.time_logged;
        out.push_str(&render_row(task));
        out.push('\n');
    }
    out.push_str(&summary_line(tasks.len(), completed, hours));
    out
}

pub fn render_row(task: &Task) -> String {
    format!(
        "#{:<5} {:<12} {:>6}h  {}",
        task.id,
        task.status.label(),
        format_hours(task.time_logged),
        task.title,
    )
}

pub fn render_task(task: &Task) -> String {
    format!(
        "#{} {}\nstatus:  {}\nlogged:  {}h\ncreated: {}\nupdated: {}",
        task.id,
        task.title,
        task.status.label(),
        format_hours(task.time_logged),
        task.created_at.format("%Y-%m-%d %H:%M"),
        task.updated_at.format("%Y-%m-%d %H:%M"),
    )
}

pub fn summary_line(count: usize, completed: usize, hours: f64) -> String {
    format!(
        "{} tasks • {} completed • {}h logged",
        count,
        completed,
        format_hours(hours)
    )
}

// `{:.1}` alone rounds ties to even, which would turn 3.25 into "3.2".
fn format_hours(hours: f64) -> String {
    format!("{:.1}", (hours * 10.0).round() / 10.0)
}
