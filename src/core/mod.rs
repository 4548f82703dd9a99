pub mod figure;
pub mod font;
pub mod style;
pub mod tick_format;

pub use figure::{Axes, AxisTicks, Figure, FigureId};
pub use font::{FontFamily, LatexPreamble, TextRenderer};
pub use style::{
    PUBLICATION_BASE_FONT_PT, PUBLICATION_LEGEND_FONT_PT, PUBLICATION_MARKER_SIZE_PT, PlotStyle,
};
pub use tick_format::{DEFAULT_TICK_PATTERN, TickFormatter, TickFormatterFn, TickPattern};
