//! Task bar geometry.
//!
//! Each task becomes one positioned, sized, colored rectangle. The layer is
//! rebuilt wholesale on every pass; bars never persist between updates.

use ganttviz_core::{BandScale, LinearScale, Task};
use serde::{Deserialize, Serialize};

/// Geometry and identity of one rendered task bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    /// Element/data matching key (`start+name+state+end`); may collide for
    /// duplicate rows
    pub key: String,
    /// Unique selection identity: the dataset row index
    pub row: usize,
}

/// Place one bar per task through the two scales.
///
/// Width clamps at 1 pixel so zero-duration and sub-pixel tasks stay
/// visible; height is the uniform band width.
pub fn layout_bars(tasks: &[Task], x: &LinearScale, y: &BandScale) -> Vec<TaskBar> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| TaskBar {
            x: x.scale(task.start as f64),
            y: y.position(index),
            width: (x.scale(task.end as f64) - x.scale(task.start as f64)).max(1.0),
            height: y.band_width(),
            color: task.color.clone(),
            key: task.render_key(),
            row: task.row,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scales(count: usize) -> (LinearScale, BandScale) {
        (
            LinearScale::new((0.0, 600.0), (0.0, 600.0)),
            BandScale::new(count, (0.0, count as f64 * 30.0), 0.1, 0.0),
        )
    }

    #[test]
    fn one_bar_per_task_in_row_order() {
        let tasks = vec![
            Task::new("b", 0).state("s1").span(0, 60),
            Task::new("a", 1).state("s2").span(120, 300),
        ];
        let (x, y) = scales(2);
        let bars = layout_bars(&tasks, &x, &y);
        assert_eq!(bars.len(), 2);
        assert!(bars[0].y < bars[1].y);
        assert_eq!(bars[0].x, 0.0);
        assert_eq!(bars[1].x, 120.0);
        assert_eq!(bars[1].width, 180.0);
    }

    #[test]
    fn zero_duration_task_keeps_one_pixel() {
        let tasks = vec![Task::new("point", 0).state("s").span(90, 90)];
        let (x, y) = scales(1);
        let bars = layout_bars(&tasks, &x, &y);
        assert_eq!(bars[0].width, 1.0);
    }

    #[test]
    fn bars_carry_row_identity_even_for_duplicate_keys() {
        let tasks = vec![
            Task::new("dup", 0).state("s").span(0, 60),
            Task::new("dup", 1).state("s").span(0, 60),
        ];
        let (x, y) = scales(2);
        let bars = layout_bars(&tasks, &x, &y);
        assert_eq!(bars[0].key, bars[1].key);
        assert_ne!(bars[0].row, bars[1].row);
    }

    #[test]
    fn bar_height_is_uniform_band_width() {
        let tasks = vec![
            Task::new("a", 0).state("s").span(0, 60),
            Task::new("b", 1).state("s").span(0, 600),
            Task::new("c", 2).state("s").span(30, 90),
        ];
        let (x, y) = scales(3);
        let bars = layout_bars(&tasks, &x, &y);
        assert!(bars.windows(2).all(|w| w[0].height == w[1].height));
        assert_eq!(bars[0].height, y.band_width());
    }
}
