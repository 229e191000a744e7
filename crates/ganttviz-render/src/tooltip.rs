//! Tooltip content per task bar.
//!
//! Five entries: category, state, formatted start, formatted end, duration
//! in minutes. A raw minute value of exactly 0 is shown as the literal `"0"`
//! instead of the day/hour form.

use ganttviz_core::{format_day_hour, ColumnRole, DataTable, Minutes, Task, TooltipItem};

fn format_offset(minutes: Minutes) -> String {
    if minutes == 0 {
        "0".to_string()
    } else {
        format_day_hour(minutes)
    }
}

/// Build the tooltip entries for one task, labelling entries with the host's
/// column display names where available
pub fn tooltip_items(task: &Task, table: &DataTable) -> Vec<TooltipItem> {
    let label = |role: ColumnRole, fallback: &str| {
        format!("{}: ", table.display_name(role).unwrap_or(fallback))
    };

    vec![
        TooltipItem {
            display_name: label(ColumnRole::TaskName, "Task"),
            value: task.name.clone(),
        },
        TooltipItem {
            display_name: label(ColumnRole::State, "State"),
            value: task.state.clone(),
        },
        TooltipItem {
            display_name: label(ColumnRole::StartDate, "Start"),
            value: format_offset(task.start),
        },
        TooltipItem {
            display_name: label(ColumnRole::EndDate, "End"),
            value: format_offset(task.end),
        },
        TooltipItem {
            display_name: "duration".to_string(),
            value: format!("{} minutes", task.duration()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganttviz_core::Column;
    use pretty_assertions::assert_eq;

    fn table() -> DataTable {
        DataTable {
            columns: vec![
                Column {
                    display_name: "Pipeline".into(),
                    role: ColumnRole::TaskName,
                },
                Column {
                    display_name: "Begin".into(),
                    role: ColumnRole::StartDate,
                },
                Column {
                    display_name: "Finish".into(),
                    role: ColumnRole::EndDate,
                },
                Column {
                    display_name: "Phase".into(),
                    role: ColumnRole::State,
                },
            ],
            rows: vec![],
        }
    }

    #[test]
    fn five_entries_with_column_names() {
        let task = Task::new("Build", 0).state("queued").span(0, 90);
        let items = tooltip_items(&task, &table());
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].display_name, "Pipeline: ");
        assert_eq!(items[0].value, "Build");
        assert_eq!(items[1].display_name, "Phase: ");
        assert_eq!(items[1].value, "queued");
        assert_eq!(items[4].display_name, "duration");
    }

    #[test]
    fn zero_offset_shows_literal_zero() {
        let task = Task::new("Build", 0).state("queued").span(0, 90);
        let items = tooltip_items(&task, &table());
        assert_eq!(items[2].value, "0");
        assert_eq!(items[3].value, "1 day 1 hour");
        assert_eq!(items[4].value, "90 minutes");
    }

    #[test]
    fn nonzero_offsets_use_day_hour_form() {
        let task = Task::new("Build", 0).state("s").span(1440, 1500);
        let items = tooltip_items(&task, &table());
        assert_eq!(items[2].value, "2 day 0 hour");
        assert_eq!(items[3].value, "2 day 1 hour");
        assert_eq!(items[4].value, "60 minutes");
    }
}
