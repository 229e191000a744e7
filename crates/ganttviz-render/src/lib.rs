//! # ganttviz-render
//!
//! Layout and rendering engine for ganttviz charts.
//!
//! This crate provides:
//! - Axis tick generation with the minute-based hour/day labelling
//! - Canvas sizing from tick counts and per-tick pixel sizes
//! - Task bar geometry with a 1-pixel minimum width
//! - Legend adaptation and the legend/viewport feedback loop
//! - Selection registration with an external interactivity service
//! - The per-update orchestrator, [`GanttChart`]
//!
//! ## Example
//!
//! ```rust
//! use ganttviz_core::{Column, ColumnRole, DataTable, Viewport};
//! use ganttviz_render::{ChartConfig, GanttChart, UpdateOptions};
//!
//! let table = DataTable {
//!     columns: vec![
//!         Column { display_name: "Task".into(), role: ColumnRole::TaskName },
//!         Column { display_name: "Start".into(), role: ColumnRole::StartDate },
//!         Column { display_name: "End".into(), role: ColumnRole::EndDate },
//!         Column { display_name: "State".into(), role: ColumnRole::State },
//!     ],
//!     rows: vec![vec!["Build".into(), "0".into(), "90".into(), "queued".into()]],
//! };
//!
//! let mut chart = GanttChart::new(ChartConfig::default());
//! let frame = chart.update(&UpdateOptions {
//!     dataset: Some(table),
//!     viewport: Viewport::new(800.0, 600.0),
//!     objects: serde_json::Value::Null,
//! });
//! assert_eq!(frame.bars.len(), 1);
//! ```

pub mod axis;
pub mod bars;
pub mod canvas;
pub mod chart;
pub mod config;
pub mod layout;
pub mod legend;
pub mod selection;
pub mod settings;
pub mod tooltip;

pub use axis::Tick;
pub use bars::TaskBar;
pub use chart::{Frame, GanttChart, UpdateOptions};
pub use config::ChartConfig;
pub use layout::SvgSize;
pub use legend::BlockLegend;
pub use settings::ObjectInstance;
