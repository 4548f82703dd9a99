use tracing::trace;

use crate::core::{Figure, FigureId};

use super::PlotContext;

impl PlotContext {
    /// Opens a new empty figure and returns its id.
    pub fn new_figure(&mut self) -> FigureId {
        let id = FigureId(self.next_figure_id);
        self.next_figure_id += 1;
        self.figures.insert(id, Figure::new(id));
        trace!(%id, "figure opened");
        id
    }

    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(&id)
    }

    pub fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.get_mut(&id)
    }

    /// Closes one figure, dropping its unrendered state. Returns whether the
    /// figure was open.
    pub fn close_figure(&mut self, id: FigureId) -> bool {
        let closed = self.figures.shift_remove(&id).is_some();
        if closed {
            trace!(%id, "figure closed");
        }
        closed
    }

    /// Closes every open figure and returns how many were closed.
    pub fn close_all_figures(&mut self) -> usize {
        let closed = self.figures.len();
        self.figures.clear();
        if closed > 0 {
            trace!(closed_figures = closed, "all figures closed");
        }
        closed
    }

    #[must_use]
    pub fn open_figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Ids of the currently open figures, in opening order.
    #[must_use]
    pub fn open_figure_ids(&self) -> Vec<FigureId> {
        self.figures.keys().copied().collect()
    }
}
