//! Canvas sizing and the legend/viewport feedback step.
//!
//! Sizing happens before the scales are built: the time domain fixes the
//! tick count, the tick count and configured per-tick sizes fix the canvas,
//! and the canvas is an input to both scales.

use ganttviz_core::{LegendPosition, Margins, TimeDomain, Viewport};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;

/// Computed canvas size for one render pass, excluding outer margins
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgSize {
    pub width: f64,
    pub height: f64,
}

/// Canvas size: hour-tick count times the per-tick width, task count times
/// the per-row height
pub fn svg_size(task_count: usize, domain: &TimeDomain, config: &ChartConfig) -> SvgSize {
    SvgSize {
        width: (domain.tick_count() * config.x_tick_width as usize) as f64,
        height: (task_count * config.y_tick_height as usize) as f64,
    }
}

/// Shrink the remaining plot viewport by the legend's reported footprint.
///
/// Left/right-oriented legends consume width; top/bottom-oriented legends
/// consume height; a hidden legend consumes nothing.
pub fn shrink_viewport(
    viewport: Viewport,
    orientation: LegendPosition,
    footprint: Margins,
) -> Viewport {
    let mut remaining = viewport;
    if orientation.is_vertical() {
        remaining.width -= footprint.left + footprint.right;
    } else if orientation.is_horizontal() {
        remaining.height -= footprint.top + footprint.bottom;
    }
    remaining
}
