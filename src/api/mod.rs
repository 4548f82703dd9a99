mod figure_controller;
mod style_controller;
mod validation;

use indexmap::IndexMap;

use crate::core::{Figure, FigureId, PlotStyle};
use crate::error::StyleResult;

use validation::validate_plot_style;

/// Owner of the current plot style and the registry of open figures.
///
/// The context replaces process-wide style state: callers construct one,
/// thread it through their plotting code, and drop it when done. Two
/// contexts never interfere, so tests and concurrent pipelines can each
/// hold their own.
#[derive(Debug, Default)]
pub struct PlotContext {
    style: PlotStyle,
    figures: IndexMap<FigureId, Figure>,
    next_figure_id: u64,
}

impl PlotContext {
    /// Creates a context with the native baseline style and no open figures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with a validated initial style.
    pub fn with_style(style: PlotStyle) -> StyleResult<Self> {
        let style = validate_plot_style(style)?;
        Ok(Self {
            style,
            figures: IndexMap::new(),
            next_figure_id: 0,
        })
    }
}
