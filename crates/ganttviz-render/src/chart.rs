//! The per-update orchestrator.
//!
//! One `update` cycle runs to completion, synchronously: shape-check the
//! dataset, build the typed task list, derive the time domain and canvas
//! size, build both scales, lay out axes and bars, assemble the SVG, place
//! the legend and shrink the viewport, build tooltips, and register the
//! selection sets. Every cycle fully replaces the previous frame; a failed
//! shape check yields the cleared chart, never a stale one.

use std::collections::HashMap;

use serde_json::Value;
use svg::Document;

use ganttviz_core::{
    build_tasks, BandScale, ColorPalette, ColumnRole, DataTable, InteractivityService, LegendData,
    LegendSettings, LegendWidget, LinearScale, NullInteractivity, NullLegend, TimeDomain,
    TooltipItem, Viewport, WheelPalette,
};

use crate::axis::{self, Tick};
use crate::bars::{layout_bars, TaskBar};
use crate::canvas;
use crate::config::ChartConfig;
use crate::layout::{svg_size, SvgSize};
use crate::legend::{legend_data, place_legend};
use crate::selection::bind_selection;
use crate::settings::{enumerate_object_instances, parse_legend_settings, ObjectInstance};
use crate::tooltip::tooltip_items;

/// Host-supplied inputs for one update cycle
#[derive(Clone, Debug)]
pub struct UpdateOptions {
    /// The table-shaped dataset, if the host has one bound
    pub dataset: Option<DataTable>,
    /// Full drawing area before the legend takes its share
    pub viewport: Viewport,
    /// Host object/property blob carrying the legend settings
    pub objects: Value,
}

/// Fully materialised output of one update cycle
#[derive(Clone, Debug)]
pub struct Frame {
    /// Canvas size excluding outer margins
    pub size: SvgSize,
    /// Plot viewport remaining after the legend footprint
    pub viewport: Viewport,
    pub bars: Vec<TaskBar>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub legend: LegendData,
    /// Tooltip entries per task, in row order
    pub tooltips: Vec<Vec<TooltipItem>>,
    /// The assembled SVG document
    pub svg: String,
}

impl Frame {
    /// The cleared chart: no bars, no ticks, a bare document
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            size: SvgSize::default(),
            viewport,
            bars: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            legend: LegendData {
                title: String::new(),
                font_size: LegendSettings::default().font_size,
                label_color: LegendSettings::default().label_color,
                entries: Vec::new(),
            },
            tooltips: Vec::new(),
            svg: Document::new().to_string(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.bars.is_empty() && self.x_ticks.is_empty() && self.y_ticks.is_empty()
    }
}

/// One chart instance: configuration plus the external collaborators it
/// renders into
pub struct GanttChart {
    config: ChartConfig,
    legend_settings: LegendSettings,
    color_overrides: HashMap<String, String>,
    palette: Box<dyn ColorPalette>,
    legend: Box<dyn LegendWidget>,
    interactivity: Box<dyn InteractivityService>,
}

impl GanttChart {
    /// Create a chart with inert collaborators; hosts swap in their own via
    /// the `with_*` builders
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            legend_settings: LegendSettings::default(),
            color_overrides: HashMap::new(),
            palette: Box::new(WheelPalette::new()),
            legend: Box::new(NullLegend),
            interactivity: Box::new(NullInteractivity),
        }
    }

    pub fn with_palette(mut self, palette: impl ColorPalette + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    pub fn with_legend_widget(mut self, widget: impl LegendWidget + 'static) -> Self {
        self.legend = Box::new(widget);
        self
    }

    pub fn with_interactivity(mut self, service: impl InteractivityService + 'static) -> Self {
        self.interactivity = Box::new(service);
        self
    }

    /// Per-category fill overrides, applied before the palette fallback
    pub fn with_color_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.color_overrides = overrides;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Legend settings as of the last update
    pub fn legend_settings(&self) -> &LegendSettings {
        &self.legend_settings
    }

    /// Run one update cycle. Never fails outward: any dataset or layout
    /// defect degrades to the cleared chart.
    pub fn update(&mut self, options: &UpdateOptions) -> Frame {
        let Some(table) = options.dataset.as_ref() else {
            tracing::debug!("no dataset bound, chart stays cleared");
            return Frame::empty(options.viewport);
        };

        let tasks = match build_tasks(table, self.palette.as_mut(), &self.color_overrides) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::debug!(error = %err, "dataset rejected, chart stays cleared");
                return Frame::empty(options.viewport);
            }
        };

        self.legend_settings = parse_legend_settings(&options.objects);
        let title = table.display_name(ColumnRole::TaskName).unwrap_or("Task");
        let legend = legend_data(&tasks, title, &self.legend_settings);

        // Time domain and size are computed once here and threaded through;
        // both feed the scales, so sizing must precede scale construction.
        let domain = match TimeDomain::from_tasks(&tasks) {
            Ok(domain) => domain,
            Err(err) => {
                tracing::debug!(error = %err, "no layoutable tasks, chart stays cleared");
                return Frame::empty(options.viewport);
            }
        };
        let size = svg_size(tasks.len(), &domain, &self.config);

        let x_scale = LinearScale::new(
            (domain.start as f64, domain.end as f64),
            (0.0, size.width - self.config.horizontal_margin()),
        );
        let y_scale = BandScale::new(
            tasks.len(),
            (0.0, size.height),
            self.config.y_padding,
            self.config.y_outer_padding,
        );

        let x_ticks = axis::x_axis(&domain, &x_scale);
        let y_ticks = axis::y_axis(&tasks, &y_scale);
        let bars = layout_bars(&tasks, &x_scale, &y_scale);
        let svg = canvas::assemble(size, &self.config, &x_ticks, &y_ticks, &bars).to_string();

        // Legend placement resolves before the final viewport split
        let viewport = place_legend(
            self.legend.as_mut(),
            &legend,
            &self.legend_settings,
            options.viewport,
        );

        let tooltips = tasks.iter().map(|t| tooltip_items(t, table)).collect();
        bind_selection(self.interactivity.as_mut(), &tasks, &legend);

        tracing::debug!(
            tasks = tasks.len(),
            width = size.width,
            height = size.height,
            "rendered frame"
        );

        Frame {
            size,
            viewport,
            bars,
            x_ticks,
            y_ticks,
            legend,
            tooltips,
            svg,
        }
    }

    /// Settings-UI surface: instances for one named settings object
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        enumerate_object_instances(object_name, &self.legend_settings)
    }
}
