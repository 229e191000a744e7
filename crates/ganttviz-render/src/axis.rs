//! Axis tick generation.
//!
//! The X axis puts one tick per 60-minute step across the time domain,
//! oriented at the top of the plot. Labels mix hour-of-day numbers with
//! `"<n> day"` markers at exact day boundaries; the switch in label meaning
//! is a deliberate behaviour of the tick formatter, not an accident.

use ganttviz_core::{day_from_minutes, hour_of_day, BandScale, LinearScale, Minutes, Task, TimeDomain};

/// One rendered axis tick: a pixel position and its label text
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Label for an hour tick.
///
/// At an exact day boundary the tick is labelled `"<day+1> day"`; everywhere
/// else it is the hour-of-day count `floor(minutes/60) - 24*floor(day)`.
pub fn x_tick_label(minutes: Minutes) -> String {
    let day = day_from_minutes(minutes);
    if day.fract() == 0.0 {
        format!("{} day", day as i64 + 1)
    } else {
        hour_of_day(minutes, day.floor() as i64).to_string()
    }
}

/// X axis ticks over the full domain, positioned through the linear scale
pub fn x_axis(domain: &TimeDomain, scale: &LinearScale) -> Vec<Tick> {
    domain
        .hour_ticks()
        .into_iter()
        .map(|minutes| Tick {
            position: scale.scale(minutes as f64),
            label: x_tick_label(minutes),
        })
        .collect()
}

/// Y axis ticks: one per task row in input order, labelled with the task
/// state and centered in the row's band
pub fn y_axis(tasks: &[Task], scale: &BandScale) -> Vec<Tick> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| Tick {
            position: scale.position(index) + scale.band_width() / 2.0,
            label: task.state.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn day_boundary_ticks_use_day_labels() {
        assert_eq!(x_tick_label(0), "1 day");
        assert_eq!(x_tick_label(1440), "2 day");
        assert_eq!(x_tick_label(2880), "3 day");
    }

    #[test]
    fn intra_day_ticks_use_hour_labels() {
        assert_eq!(x_tick_label(60), "1");
        assert_eq!(x_tick_label(90), "1");
        assert_eq!(x_tick_label(600), "10");
        assert_eq!(x_tick_label(1380), "23");
        // 1470 min: day = 1.02083, floor(1470/60) - 24*1 = 24 - 24 = 0
        assert_eq!(x_tick_label(1470), "0");
        assert_eq!(x_tick_label(1500), "1");
    }

    #[test]
    fn x_axis_covers_domain_hourly() {
        let domain = TimeDomain { start: 0, end: 180 };
        let scale = LinearScale::new((0.0, 180.0), (0.0, 180.0));
        let ticks = x_axis(&domain, &scale);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].position, 0.0);
        assert_eq!(ticks[1].position, 60.0);
        assert_eq!(ticks[0].label, "1 day");
        assert_eq!(ticks[1].label, "1");
    }

    #[test]
    fn y_axis_follows_input_row_order() {
        let tasks = vec![
            Task::new("b", 0).state("zeta").span(0, 60),
            Task::new("a", 1).state("alpha").span(60, 120),
        ];
        let scale = BandScale::new(2, (0.0, 60.0), 0.0, 0.0);
        let ticks = y_axis(&tasks, &scale);
        assert_eq!(ticks.len(), 2);
        // Input order, not sorted by state
        assert_eq!(ticks[0].label, "zeta");
        assert_eq!(ticks[1].label, "alpha");
        assert!(ticks[0].position < ticks[1].position);
    }
}
