//! SVG assembly.
//!
//! Turns the pass-local tick lists and bar geometry into an `svg::Document`.
//! The document is rebuilt from scratch each pass; there is no retained
//! element tree to diff against. Axis font sizes are applied to the finished
//! axis groups, after tick generation.

use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

use crate::axis::Tick;
use crate::bars::TaskBar;
use crate::config::ChartConfig;
use crate::layout::SvgSize;

/// Assemble one complete SVG document for the pass
pub fn assemble(
    size: SvgSize,
    config: &ChartConfig,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    bars: &[TaskBar],
) -> Document {
    let mut task_group = Group::new().set("class", "task-group").set(
        "transform",
        format!("translate({}, {})", config.margin.left, config.margin.top),
    );

    task_group = task_group.add(x_axis_group(x_ticks, config));
    task_group = task_group.add(y_axis_group(y_ticks, config));
    for bar in bars {
        task_group = task_group.add(bar_rect(bar, config));
    }

    Document::new()
        .set("class", "gantt")
        .set("width", size.width)
        .set("height", size.height + config.vertical_margin())
        .add(clear_catcher())
        .add(task_group)
}

/// Background rect catching clicks outside any bar, so the interactivity
/// service can clear the selection
fn clear_catcher() -> Rectangle {
    Rectangle::new()
        .set("class", "clear-catcher")
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", "transparent")
}

/// Top-oriented X axis: tick marks pointing up from the plot edge, labels
/// above them. The font size lands on the group once all ticks are in.
fn x_axis_group(ticks: &[Tick], config: &ChartConfig) -> Group {
    let mut group = Group::new().set("class", "x-axis");

    for tick in ticks {
        let mark = Line::new()
            .set("x1", tick.position)
            .set("y1", 0)
            .set("x2", tick.position)
            .set("y2", -f64::from(config.y_tick_size))
            .set("stroke", config.axis_color.as_str())
            .set("stroke-width", 1);
        group = group.add(mark);

        let label = Text::new(tick.label.clone())
            .set("x", tick.position)
            .set("y", -f64::from(config.y_tick_size) - 3.0)
            .set("fill", config.axis_color.as_str())
            .set("text-anchor", "middle");
        group = group.add(label);
    }

    group.set("font-size", config.x_font_size)
}

/// Left-oriented Y axis: one tick per task row, labelled with the state
fn y_axis_group(ticks: &[Tick], config: &ChartConfig) -> Group {
    let mut group = Group::new().set("class", "y-axis");
    let tick_size = f64::from(config.y_tick_size);

    for tick in ticks {
        let mark = Line::new()
            .set("x1", 0)
            .set("y1", tick.position)
            .set("x2", -tick_size)
            .set("y2", tick.position)
            .set("stroke", config.axis_color.as_str())
            .set("stroke-width", 1);
        group = group.add(mark);

        let label = Text::new(tick.label.clone())
            .set("x", -tick_size - 3.0)
            .set("y", tick.position + 3.0)
            .set("fill", config.axis_color.as_str())
            .set("text-anchor", "end");
        group = group.add(label);
    }

    group.set("font-size", config.y_font_size)
}

fn bar_rect(bar: &TaskBar, config: &ChartConfig) -> Rectangle {
    Rectangle::new()
        .set("class", "task")
        .set("transform", format!("translate({}, {})", bar.x, bar.y))
        .set("y", 0)
        .set("rx", config.bar_radius)
        .set("ry", config.bar_radius)
        .set("width", bar.width)
        .set("height", bar.height)
        .set("fill", bar.color.as_str())
        .set("data-key", bar.key.as_str())
        .set("data-row", bar.row as u64)
}
