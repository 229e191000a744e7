//! Legend adaptation.
//!
//! The engine derives a deduplicated category list and hands it to the
//! external [`LegendWidget`]; drawing, placement and orientation are the
//! widget's business. Afterwards the widget's reported footprint shrinks the
//! plot viewport for the same render pass, so legend placement must resolve
//! before the final container sizing.

use ganttviz_core::{
    LegendData, LegendEntry, LegendIcon, LegendPosition, LegendSettings, LegendWidget, Margins,
    SelectionKey, Task, Viewport,
};

use crate::layout::shrink_viewport;

/// Build legend data from the task list: one entry per distinct category in
/// first-seen order, carrying that category's resolved color
pub fn legend_data(tasks: &[Task], title: &str, settings: &LegendSettings) -> LegendData {
    let mut entries: Vec<LegendEntry> = Vec::new();

    for task in tasks {
        if entries.iter().any(|e| e.label == task.name) {
            continue;
        }
        entries.push(LegendEntry {
            label: task.name.clone(),
            icon: LegendIcon::Circle,
            color: task.color.clone(),
            key: SelectionKey::for_category(task.name.clone()),
        });
    }

    let title = if settings.title_text.is_empty() {
        title.to_string()
    } else {
        settings.title_text.clone()
    };

    LegendData {
        title,
        font_size: settings.font_size,
        label_color: settings.label_color.clone(),
        entries,
    }
}

/// Two-step legend layout: draw against the full viewport, then shrink the
/// plot viewport by the footprint the widget reports it consumed
pub fn place_legend(
    widget: &mut dyn LegendWidget,
    data: &LegendData,
    settings: &LegendSettings,
    viewport: Viewport,
) -> Viewport {
    let position = if settings.show {
        settings.position
    } else {
        LegendPosition::None
    };

    widget.draw(data, position, viewport);
    shrink_viewport(viewport, widget.orientation(), widget.footprint())
}

/// Built-in legend widget with a measurable footprint.
///
/// Horizontal orientations consume one text row; vertical orientations
/// consume a column wide enough for the longest label. Hosts with a real
/// legend overlay supply their own [`LegendWidget`] instead.
#[derive(Clone, Debug, Default)]
pub struct BlockLegend {
    orientation: LegendPosition,
    footprint: Margins,
}

impl BlockLegend {
    pub fn new() -> Self {
        Self::default()
    }

    fn row_height(font_size: u32) -> f64 {
        f64::from(font_size) * 2.0 + 4.0
    }

    fn column_width(data: &LegendData) -> f64 {
        let longest = data
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        // icon + gap + ~7px per character
        20.0 + longest as f64 * 7.0
    }
}

impl LegendWidget for BlockLegend {
    fn draw(&mut self, data: &LegendData, position: LegendPosition, _viewport: Viewport) {
        self.orientation = if data.entries.is_empty() {
            LegendPosition::None
        } else {
            position
        };

        let mut footprint = Margins::default();
        match self.orientation {
            LegendPosition::Top | LegendPosition::TopCenter => {
                footprint.top = Self::row_height(data.font_size);
            }
            LegendPosition::Bottom | LegendPosition::BottomCenter => {
                footprint.bottom = Self::row_height(data.font_size);
            }
            LegendPosition::Left | LegendPosition::LeftCenter => {
                footprint.left = Self::column_width(data);
            }
            LegendPosition::Right | LegendPosition::RightCenter => {
                footprint.right = Self::column_width(data);
            }
            LegendPosition::None => {}
        }
        self.footprint = footprint;
    }

    fn orientation(&self) -> LegendPosition {
        self.orientation
    }

    fn footprint(&self) -> Margins {
        self.footprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("Build", 0).state("a").span(0, 60).color("#111111"),
            Task::new("Deploy", 1).state("b").span(60, 120).color("#222222"),
            Task::new("Build", 2).state("c").span(120, 180).color("#111111"),
        ]
    }

    #[test]
    fn entries_dedup_by_category_first_seen() {
        let data = legend_data(&tasks(), "Task", &LegendSettings::default());
        assert_eq!(data.entries.len(), 2);
        assert_eq!(data.entries[0].label, "Build");
        assert_eq!(data.entries[0].color, "#111111");
        assert_eq!(data.entries[1].label, "Deploy");
    }

    #[test]
    fn title_prefers_settings_text() {
        let mut settings = LegendSettings::default();
        let data = legend_data(&tasks(), "Task", &settings);
        assert_eq!(data.title, "Task");

        settings.title_text = "Pipelines".into();
        let data = legend_data(&tasks(), "Task", &settings);
        assert_eq!(data.title, "Pipelines");
    }

    #[test]
    fn hidden_legend_draws_as_none() {
        let settings = LegendSettings {
            show: false,
            ..LegendSettings::default()
        };
        let data = legend_data(&tasks(), "Task", &settings);
        let mut widget = BlockLegend::new();
        let viewport = Viewport::new(800.0, 600.0);
        let remaining = place_legend(&mut widget, &data, &settings, viewport);
        assert_eq!(widget.orientation(), LegendPosition::None);
        assert_eq!(remaining, viewport);
    }

    #[test]
    fn top_legend_shrinks_height_only() {
        let settings = LegendSettings::default();
        let data = legend_data(&tasks(), "Task", &settings);
        let mut widget = BlockLegend::new();
        let remaining = place_legend(&mut widget, &data, &settings, Viewport::new(800.0, 600.0));
        assert_eq!(remaining.width, 800.0);
        assert!(remaining.height < 600.0);
    }

    #[test]
    fn left_legend_shrinks_width_only() {
        let settings = LegendSettings {
            position: LegendPosition::Left,
            ..LegendSettings::default()
        };
        let data = legend_data(&tasks(), "Task", &settings);
        let mut widget = BlockLegend::new();
        let remaining = place_legend(&mut widget, &data, &settings, Viewport::new(800.0, 600.0));
        assert!(remaining.width < 800.0);
        assert_eq!(remaining.height, 600.0);
    }
}
