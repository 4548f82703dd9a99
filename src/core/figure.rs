use std::fmt;

use crate::core::tick_format::{
    DEFAULT_TICK_PATTERN, TickFormatter, TickFormatterFn, TickPattern,
};
use crate::error::StyleResult;

/// Handle for one open figure inside a [`crate::api::PlotContext`].
///
/// Ids are never reused within a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub(crate) u64);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "figure#{}", self.0)
    }
}

/// One open figure: a set of axes pairs awaiting rendering.
///
/// Closing a figure drops it, along with any state a backend has not yet
/// rendered.
#[derive(Debug)]
pub struct Figure {
    id: FigureId,
    axes: Vec<Axes>,
}

impl Figure {
    pub(crate) fn new(id: FigureId) -> Self {
        Self {
            id,
            axes: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Adds an axes pair and returns a handle for in-place mutation.
    pub fn add_axes(&mut self) -> &mut Axes {
        self.axes.push(Axes::default());
        self.axes.last_mut().expect("axes pair just pushed")
    }

    #[must_use]
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self, index: usize) -> Option<&mut Axes> {
        self.axes.get_mut(index)
    }
}

/// One x/y axes pair. The caller owns the pair (through its figure) and
/// mutates tick formatters in place; nothing here is shared between axes.
#[derive(Debug, Default)]
pub struct Axes {
    x_ticks: AxisTicks,
    y_ticks: AxisTicks,
}

impl Axes {
    /// Installs pattern tick formatters on both axes.
    ///
    /// Both patterns are parsed before either axis is touched, so a
    /// malformed pattern fails here, with the offending pattern named in the
    /// error, and leaves the pair unchanged. On success the pair is first
    /// returned to the neutral formatter, then the x pattern is installed on
    /// x and the y pattern on y. The most recent call wins.
    pub fn set_tick_formats(&mut self, x_pattern: &str, y_pattern: &str) -> StyleResult<()> {
        let x = TickPattern::parse(x_pattern)?;
        let y = TickPattern::parse(y_pattern)?;
        self.clear_tick_formats();
        self.x_ticks.formatter = TickFormatter::Pattern(x);
        self.y_ticks.formatter = TickFormatter::Pattern(y);
        Ok(())
    }

    /// Installs the default integer pattern (`%d`) on both axes.
    pub fn reset_tick_formats(&mut self) {
        self.set_tick_formats(DEFAULT_TICK_PATTERN, DEFAULT_TICK_PATTERN)
            .expect("default tick pattern is valid");
    }

    /// Restores the neutral pass-through formatter on both axes.
    pub fn clear_tick_formats(&mut self) {
        self.x_ticks.formatter = TickFormatter::Neutral;
        self.y_ticks.formatter = TickFormatter::Neutral;
    }

    pub fn set_x_tick_formatter_fn(&mut self, formatter: TickFormatterFn) {
        self.x_ticks.formatter = TickFormatter::Custom(formatter);
    }

    pub fn set_y_tick_formatter_fn(&mut self, formatter: TickFormatterFn) {
        self.y_ticks.formatter = TickFormatter::Custom(formatter);
    }

    #[must_use]
    pub fn x_ticks(&self) -> &AxisTicks {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &AxisTicks {
        &self.y_ticks
    }

    #[must_use]
    pub fn x_tick_formatter(&self) -> &TickFormatter {
        &self.x_ticks.formatter
    }

    #[must_use]
    pub fn y_tick_formatter(&self) -> &TickFormatter {
        &self.y_ticks.formatter
    }

    #[must_use]
    pub fn format_x_tick(&self, value: f64) -> String {
        self.x_ticks.formatter.format(value)
    }

    #[must_use]
    pub fn format_y_tick(&self, value: f64) -> String {
        self.y_ticks.formatter.format(value)
    }
}

/// Tick-label state for a single axis.
#[derive(Debug, Default)]
pub struct AxisTicks {
    formatter: TickFormatter,
}

impl AxisTicks {
    #[must_use]
    pub fn formatter(&self) -> &TickFormatter {
        &self.formatter
    }
}
