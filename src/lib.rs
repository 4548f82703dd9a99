//! plotstyle-rs: publication styling and tick-label formatting for chart
//! front-ends.
//!
//! This crate owns two presentation concerns and nothing else: the plot
//! style a front-end applies to every element it draws (fonts, per-element
//! sizes, LaTeX text rendering and preamble), and the per-axis tick-label
//! formatters that turn numeric tick values into displayed text. Style lives
//! in an explicitly passed [`api::PlotContext`], never in process-wide
//! state.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::api::PlotContext;
pub use crate::core::{PlotStyle, TickFormatter, TickPattern};
pub use crate::error::{StyleError, StyleResult};
