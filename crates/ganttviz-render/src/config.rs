//! Per-instance chart configuration.
//!
//! One `ChartConfig` value is constructed when the chart is created and
//! threaded through every render call; nothing is read from shared state.

use ganttviz_core::Margins;
use serde::{Deserialize, Serialize};

/// Static layout knobs for one chart instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Margins between the SVG element edge and the task group
    pub margin: Margins,
    /// Pixel width allotted per hour tick; drives the canvas width
    pub x_tick_width: u32,
    /// Pixel height allotted per task row; drives the canvas height
    pub y_tick_height: u32,
    /// Font size applied to X axis tick text
    pub x_font_size: u32,
    /// Font size applied to Y axis tick text
    pub y_font_size: u32,
    /// Inner padding between Y bands, as a fraction of one step
    pub y_padding: f64,
    /// Outer padding at the Y range edges, as a fraction of one step
    pub y_outer_padding: f64,
    /// Y axis tick mark length in pixels
    pub y_tick_size: u32,
    /// Corner radius of task bars
    pub bar_radius: u32,
    /// Stroke/fill color for axis marks and labels
    pub axis_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margins {
                top: 20.0,
                right: 40.0,
                bottom: 40.0,
                left: 80.0,
            },
            x_tick_width: 40,
            y_tick_height: 30,
            x_font_size: 11,
            y_font_size: 11,
            y_padding: 0.1,
            y_outer_padding: 0.0,
            y_tick_size: 6,
            bar_radius: 5,
            axis_color: "#2c3e50".into(),
        }
    }
}

impl ChartConfig {
    /// Horizontal space the plot loses to the left/right margins
    pub fn horizontal_margin(&self) -> f64 {
        self.margin.left + self.margin.right
    }

    /// Vertical space the plot loses to the top/bottom margins
    pub fn vertical_margin(&self) -> f64 {
        self.margin.top + self.margin.bottom
    }
}
