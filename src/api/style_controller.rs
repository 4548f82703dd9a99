use tracing::debug;

use crate::core::PlotStyle;
use crate::error::StyleResult;

use super::PlotContext;
use super::validation::validate_plot_style;

impl PlotContext {
    /// Closes every open figure, then installs the publication preset.
    ///
    /// Closing discards whatever a backend has not yet rendered; there is no
    /// undo. Safe to call repeatedly: the preset overwrite is idempotent and
    /// closing zero figures is a no-op.
    pub fn reset_style(&mut self) {
        let closed = self.close_all_figures();
        self.style = PlotStyle::publication();
        debug!(closed_figures = closed, "style reset to publication preset");
    }

    /// Installs a validated style, leaving open figures untouched.
    ///
    /// The most recent call wins; there is no merging with the previous
    /// style.
    pub fn set_style(&mut self, style: PlotStyle) -> StyleResult<()> {
        self.style = validate_plot_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }
}
