use crate::core::PlotStyle;
use crate::error::StyleResult;

pub(super) fn validate_plot_style(style: PlotStyle) -> StyleResult<PlotStyle> {
    style.validate()?;
    Ok(style)
}
