//! # ganttviz-core
//!
//! Core domain model and traits for the ganttviz chart engine.
//!
//! This crate provides:
//! - Domain types: `Task`, `TimeDomain`, `LinearScale`, `BandScale`, legend types
//! - The tabular dataset boundary: `DataTable` and its validated `Task` construction
//! - Capability traits the layout engine calls into: `ColorPalette`,
//!   `LegendWidget`, `InteractivityService`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use ganttviz_core::{Task, TimeDomain};
//!
//! let tasks = vec![
//!     Task::new("Build", 0).state("queued").span(30, 90),
//!     Task::new("Deploy", 1).state("running").span(90, 240),
//! ];
//! let domain = TimeDomain::from_tasks(&tasks).unwrap();
//! assert_eq!(domain.start, 0); // 30 floored to the hour boundary
//! assert_eq!(domain.end, 240);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Time
// ============================================================================

/// Time offset in minutes from a shared, dataset-defined origin
pub type Minutes = i64;

pub const MINUTES_PER_HOUR: Minutes = 60;
pub const MINUTES_PER_DAY: Minutes = 1440;
pub const HOURS_PER_DAY: i64 = 24;

/// Fractional day count for a minute offset
pub fn day_from_minutes(minutes: Minutes) -> f64 {
    minutes as f64 / MINUTES_PER_DAY as f64
}

/// Hour-of-day for a minute offset relative to a given (floored) day count.
///
/// Matches `floor(minutes / 60) - 24 * day`; euclidean division keeps the
/// flooring behaviour for negative offsets.
pub fn hour_of_day(minutes: Minutes, day: i64) -> i64 {
    minutes.div_euclid(MINUTES_PER_HOUR) - HOURS_PER_DAY * day
}

/// Floor a minute offset to the nearest hour boundary below it
pub fn floor_to_hour(minutes: Minutes) -> Minutes {
    minutes.div_euclid(MINUTES_PER_HOUR) * MINUTES_PER_HOUR
}

/// Format a minute offset as `"<day+1> day <hour> hour"`.
///
/// Day counts are 1-based: minute 0 falls inside "1 day".
pub fn format_day_hour(minutes: Minutes) -> String {
    let day = minutes.div_euclid(MINUTES_PER_DAY);
    let hour = hour_of_day(minutes, day);
    format!("{} day {} hour", day + 1, hour)
}

// ============================================================================
// Task
// ============================================================================

/// One plotted unit: a single row of the dataset, rendered as one bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Category label; groups tasks for legend and coloring
    pub name: String,
    /// Sub-label shown on the Y axis for this row
    pub state: String,
    /// Start offset in minutes
    pub start: Minutes,
    /// End offset in minutes; `end >= start` for well-formed data,
    /// zero-width tasks still render with a minimum 1-pixel bar
    pub end: Minutes,
    /// Resolved fill color (override or palette)
    pub color: String,
    /// Dataset row index; the unique selection identity for this task
    pub row: usize,
    /// Transient UI flag, mutated only by the selection bridge
    pub selected: bool,
}

impl Task {
    /// Create a task with the given category name and row index
    pub fn new(name: impl Into<String>, row: usize) -> Self {
        Self {
            name: name.into(),
            state: String::new(),
            start: 0,
            end: 0,
            color: String::new(),
            row,
            selected: false,
        }
    }

    /// Set the start/end span
    pub fn span(mut self, start: Minutes, end: Minutes) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the state label
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Set the fill color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Element/data matching key: `start + name + state + end` concatenated.
    ///
    /// Not guaranteed unique across rows; selection correlation uses
    /// [`Task::row`] instead.
    pub fn render_key(&self) -> String {
        format!("{}{}{}{}", self.start, self.name, self.state, self.end)
    }
}

// ============================================================================
// Time Domain
// ============================================================================

/// The `[start, end]` minute range the X axis must cover.
///
/// `start` is floored to an hour boundary so the axis always begins on one;
/// `end` is the maximum task end. Recomputed on every render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeDomain {
    /// Derive the domain from a non-empty task list
    pub fn from_tasks(tasks: &[Task]) -> Result<Self, LayoutError> {
        let end = tasks
            .iter()
            .map(|t| t.end)
            .max()
            .ok_or(LayoutError::EmptyTasks)?;
        let raw_start = tasks
            .iter()
            .map(|t| t.start)
            .min()
            .ok_or(LayoutError::EmptyTasks)?;

        let start = if raw_start % MINUTES_PER_HOUR == 0 {
            raw_start
        } else {
            floor_to_hour(raw_start)
        };

        Ok(Self { start, end })
    }

    /// Tick values, one per 60-minute step over `[start, end)` (half-open)
    pub fn hour_ticks(&self) -> Vec<Minutes> {
        if self.end <= self.start {
            return Vec::new();
        }
        (self.start..self.end)
            .step_by(MINUTES_PER_HOUR as usize)
            .collect()
    }

    /// Number of hour ticks; drives the canvas width
    pub fn tick_count(&self) -> usize {
        if self.end <= self.start {
            0
        } else {
            ((self.end - self.start + MINUTES_PER_HOUR - 1) / MINUTES_PER_HOUR) as usize
        }
    }
}

// ============================================================================
// Scales
// ============================================================================

/// Continuous linear mapping from a minute domain to a pixel range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return self.r0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Discrete ordinal mapping from row index to a rounded pixel band.
///
/// Reproduces d3 v3 `rangeRoundBands` arithmetic: the step is floored to a
/// whole pixel, the accumulated rounding error is split evenly at the edges,
/// and the band width is `round(step * (1 - padding))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    len: usize,
    step: f64,
    offset: f64,
    band: f64,
}

impl BandScale {
    /// Build a band scale over `len` indices spanning `range`, with inner
    /// `padding` and edge `outer_padding` expressed as fractions of a step.
    pub fn new(len: usize, range: (f64, f64), padding: f64, outer_padding: f64) -> Self {
        let span = range.1 - range.0;
        let divisor = len as f64 - padding + 2.0 * outer_padding;
        let step = if len == 0 || divisor <= 0.0 {
            0.0
        } else {
            (span / divisor).floor()
        };
        let error = span - (len as f64 - padding) * step;
        let offset = range.0 + (error / 2.0).round();
        let band = (step * (1.0 - padding)).round();

        Self {
            len,
            step,
            offset,
            band,
        }
    }

    /// Pixel position of the band for `index`
    pub fn position(&self, index: usize) -> f64 {
        self.offset + self.step * index as f64
    }

    /// Uniform band width in pixels; the bar height for every row
    pub fn band_width(&self) -> f64 {
        self.band
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Host-supplied drawing area, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel margins around a drawing area
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

// ============================================================================
// Legend
// ============================================================================

/// Where the external legend widget places itself relative to the plot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    None,
    #[default]
    Top,
    TopCenter,
    Bottom,
    BottomCenter,
    Left,
    LeftCenter,
    Right,
    RightCenter,
}

impl LegendPosition {
    /// Parse the host's position string (e.g. `"Top"`, `"LeftCenter"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(Self::None),
            "Top" => Some(Self::Top),
            "TopCenter" => Some(Self::TopCenter),
            "Bottom" => Some(Self::Bottom),
            "BottomCenter" => Some(Self::BottomCenter),
            "Left" => Some(Self::Left),
            "LeftCenter" => Some(Self::LeftCenter),
            "Right" => Some(Self::Right),
            "RightCenter" => Some(Self::RightCenter),
            _ => None,
        }
    }

    /// Legend consumes horizontal space from the viewport width
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            Self::Left | Self::LeftCenter | Self::Right | Self::RightCenter
        )
    }

    /// Legend consumes vertical space from the viewport height
    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            Self::Top | Self::TopCenter | Self::Bottom | Self::BottomCenter
        )
    }
}

/// Marker drawn next to a legend label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendIcon {
    #[default]
    Circle,
    Box,
    Line,
}

/// One legend row: a distinct task category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub icon: LegendIcon,
    pub color: String,
    /// Selection identity, independent of any single task instance
    pub key: SelectionKey,
}

/// Everything the legend widget needs to draw itself
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendData {
    pub title: String,
    pub font_size: u32,
    pub label_color: String,
    pub entries: Vec<LegendEntry>,
}

/// Host-configurable legend options (the `legend` settings object)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendSettings {
    pub show: bool,
    pub position: LegendPosition,
    pub show_title: bool,
    pub title_text: String,
    pub label_color: String,
    pub font_size: u32,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::Top,
            show_title: true,
            title_text: String::new(),
            label_color: "#666666".into(),
            font_size: 8,
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Number of categorical columns a well-formed dataset carries
pub const REQUIRED_COLUMNS: usize = 4;

/// Role of a dataset column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    TaskName,
    StartDate,
    EndDate,
    State,
}

/// A dataset column: host display name plus its role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub display_name: String,
    pub role: ColumnRole,
}

/// Table-shaped input dataset: four categorical columns, one row per task.
///
/// Cell values are strings as delivered by the host; start/end cells must
/// parse as integer minutes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Column indices for the four required roles, proven present by validation
#[derive(Clone, Copy, Debug)]
pub struct TableShape {
    pub task_name: usize,
    pub start_date: usize,
    pub end_date: usize,
    pub state: usize,
}

impl DataTable {
    pub fn column_index(&self, role: ColumnRole) -> Option<usize> {
        self.columns.iter().position(|c| c.role == role)
    }

    pub fn display_name(&self, role: ColumnRole) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.display_name.as_str())
    }

    /// Check the minimum shape: rows present, exactly four columns, every
    /// role covered. Returns the role→index mapping on success.
    pub fn shape(&self) -> Result<TableShape, DatasetError> {
        if self.rows.is_empty() {
            return Err(DatasetError::NoRows);
        }
        if self.columns.len() != REQUIRED_COLUMNS {
            return Err(DatasetError::ColumnCount(self.columns.len()));
        }

        let index = |role| {
            self.column_index(role)
                .ok_or(DatasetError::MissingColumn(role))
        };

        Ok(TableShape {
            task_name: index(ColumnRole::TaskName)?,
            start_date: index(ColumnRole::StartDate)?,
            end_date: index(ColumnRole::EndDate)?,
            state: index(ColumnRole::State)?,
        })
    }
}

/// Build the typed task list from a validated table.
///
/// Colors resolve from the per-category `overrides` map first, then from the
/// palette's deterministic color for the category. Row order is preserved;
/// the Y axis bands follow it unsorted.
pub fn build_tasks(
    table: &DataTable,
    palette: &mut dyn ColorPalette,
    overrides: &HashMap<String, String>,
) -> Result<Vec<Task>, DatasetError> {
    let shape = table.shape()?;

    let cell = |cells: &[String], row: usize, column: usize| -> Result<String, DatasetError> {
        cells
            .get(column)
            .cloned()
            .ok_or(DatasetError::RaggedRow {
                row,
                expected: REQUIRED_COLUMNS,
                found: cells.len(),
            })
    };

    let minutes = |value: String, row: usize, column: usize| -> Result<Minutes, DatasetError> {
        value
            .trim()
            .parse::<Minutes>()
            .map_err(|_| DatasetError::BadValue {
                row,
                column: table.columns[column].display_name.clone(),
                value,
            })
    };

    table
        .rows
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let name = cell(cells, row, shape.task_name)?;
            let start = minutes(cell(cells, row, shape.start_date)?, row, shape.start_date)?;
            let end = minutes(cell(cells, row, shape.end_date)?, row, shape.end_date)?;
            let state = cell(cells, row, shape.state)?;

            let color = overrides
                .get(&name)
                .cloned()
                .unwrap_or_else(|| palette.color_for(&name));

            Ok(Task {
                name,
                state,
                start,
                end,
                color,
                row,
                selected: false,
            })
        })
        .collect()
}

// ============================================================================
// Selection
// ============================================================================

/// Opaque, stable key correlating selectable elements.
///
/// Legend entries carry only the category; task bars additionally carry
/// their row index so duplicate rows stay distinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub row: Option<usize>,
    pub category: String,
}

impl SelectionKey {
    pub fn for_task(task: &Task) -> Self {
        Self {
            row: Some(task.row),
            category: task.name.clone(),
        }
    }

    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            row: None,
            category: category.into(),
        }
    }
}

/// Element sets handed to the interactivity service on every update
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorOptions {
    pub task_identities: Vec<SelectionKey>,
    pub legend_identities: Vec<SelectionKey>,
    /// A background catcher element exists, so clicks outside bars clear
    /// the selection
    pub has_clear_catcher: bool,
}

// ============================================================================
// Capability traits
// ============================================================================

/// Deterministic category→color provider.
///
/// Takes `&mut self` so implementations may assign colors in first-seen
/// category order and remember them.
pub trait ColorPalette {
    fn color_for(&mut self, category: &str) -> String;
}

/// Default palette: a fixed color wheel assigned in first-seen order
#[derive(Clone, Debug, Default)]
pub struct WheelPalette {
    assigned: HashMap<String, usize>,
}

impl WheelPalette {
    const WHEEL: [&'static str; 10] = [
        "#01b8aa", "#374649", "#fd625e", "#f2c80f", "#5f6b6d", "#8ad4eb", "#fe9666", "#a66999",
        "#3599b8", "#dfbfbf",
    ];

    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorPalette for WheelPalette {
    fn color_for(&mut self, category: &str) -> String {
        let next = self.assigned.len();
        let index = *self.assigned.entry(category.to_string()).or_insert(next);
        Self::WHEEL[index % Self::WHEEL.len()].to_string()
    }
}

/// External legend widget: draws itself and reports the space it consumed
pub trait LegendWidget {
    /// Draw (or hide, for `LegendPosition::None`) against the full viewport
    fn draw(&mut self, data: &LegendData, position: LegendPosition, viewport: Viewport);

    /// Orientation actually in effect after the last draw
    fn orientation(&self) -> LegendPosition;

    /// Pixel footprint consumed by the last draw
    fn footprint(&self) -> Margins;
}

/// Legend widget that draws nothing and consumes no space
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLegend;

impl LegendWidget for NullLegend {
    fn draw(&mut self, _data: &LegendData, _position: LegendPosition, _viewport: Viewport) {}

    fn orientation(&self) -> LegendPosition {
        LegendPosition::None
    }

    fn footprint(&self) -> Margins {
        Margins::default()
    }
}

/// External interactivity service; owns all selection state transitions
pub trait InteractivityService {
    /// Register the current element sets so selecting a legend entry
    /// highlights all tasks sharing its category, and vice versa
    fn bind(&mut self, tasks: &[Task], options: &BehaviorOptions);
}

/// Interactivity sink that ignores every registration
#[derive(Clone, Copy, Debug, Default)]
pub struct NullInteractivity;

impl InteractivityService for NullInteractivity {
    fn bind(&mut self, _tasks: &[Task], _options: &BehaviorOptions) {}
}

// ============================================================================
// Tooltip
// ============================================================================

/// One display row of a task tooltip
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Layout precondition violation
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no tasks to lay out")]
    EmptyTasks,
}

/// Dataset shape or value rejection at the update boundary
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no rows")]
    NoRows,

    #[error("expected {REQUIRED_COLUMNS} columns, found {0}")]
    ColumnCount(usize),

    #[error("missing {0:?} column")]
    MissingColumn(ColumnRole),

    #[error("row {row} is ragged: expected {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: cannot parse {value:?} as minutes")]
    BadValue {
        row: usize,
        column: String,
        value: String,
    },
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
