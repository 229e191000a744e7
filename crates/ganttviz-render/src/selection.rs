//! Selection/interaction bridge.
//!
//! The engine implements no selection logic of its own. On every update it
//! registers the current task and legend element sets with the external
//! interactivity service; the service drives all `unselected ⇄ selected`
//! transitions from pointer input, correlating legend entries with tasks
//! through the shared category in their selection keys.

use ganttviz_core::{BehaviorOptions, InteractivityService, LegendData, SelectionKey, Task};

/// Register the rendered element sets with the interactivity service
pub fn bind_selection(
    service: &mut dyn InteractivityService,
    tasks: &[Task],
    legend: &LegendData,
) {
    let options = BehaviorOptions {
        task_identities: tasks.iter().map(SelectionKey::for_task).collect(),
        legend_identities: legend.entries.iter().map(|e| e.key.clone()).collect(),
        has_clear_catcher: true,
    };
    service.bind(tasks, &options);
}
