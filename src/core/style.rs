use serde::{Deserialize, Serialize};

use crate::core::font::{FontFamily, LatexPreamble, TextRenderer};
use crate::error::{StyleError, StyleResult};

/// Base font size of the publication preset, in points.
pub const PUBLICATION_BASE_FONT_PT: f64 = 20.0;
/// Legend font size of the publication preset, in points.
pub const PUBLICATION_LEGEND_FONT_PT: f64 = 15.0;
/// Default marker size of the publication preset, in points.
pub const PUBLICATION_MARKER_SIZE_PT: f64 = 10.0;

const NATIVE_BASE_FONT_PT: f64 = 10.0;
const NATIVE_MARKER_SIZE_PT: f64 = 6.0;

/// Style configuration applied to every plot element a front-end draws.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format. It is a plain value: style is
/// carried by a [`crate::api::PlotContext`], never by process-wide state, so
/// two contexts can hold different styles in the same process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub font_family: FontFamily,
    pub text_renderer: TextRenderer,
    pub base_font_size_pt: f64,
    pub axis_label_size_pt: f64,
    pub title_size_pt: f64,
    pub x_tick_label_size_pt: f64,
    pub y_tick_label_size_pt: f64,
    pub legend_size_pt: f64,
    pub marker_size_pt: f64,
    pub latex_preamble: LatexPreamble,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl PlotStyle {
    /// Baseline style matching what a native renderer draws out of the box.
    #[must_use]
    pub fn native() -> Self {
        Self {
            font_family: FontFamily::default(),
            text_renderer: TextRenderer::Native,
            base_font_size_pt: NATIVE_BASE_FONT_PT,
            axis_label_size_pt: NATIVE_BASE_FONT_PT,
            title_size_pt: NATIVE_BASE_FONT_PT,
            x_tick_label_size_pt: NATIVE_BASE_FONT_PT,
            y_tick_label_size_pt: NATIVE_BASE_FONT_PT,
            legend_size_pt: NATIVE_BASE_FONT_PT,
            marker_size_pt: NATIVE_MARKER_SIZE_PT,
            latex_preamble: LatexPreamble::default(),
        }
    }

    /// Large-type preset for print figures: Helvetica, LaTeX text rendering,
    /// 20pt labels with a 15pt legend, and `amsmath` in the preamble.
    #[must_use]
    pub fn publication() -> Self {
        Self {
            font_family: FontFamily::sans_serif("Helvetica"),
            text_renderer: TextRenderer::Latex,
            base_font_size_pt: PUBLICATION_BASE_FONT_PT,
            axis_label_size_pt: PUBLICATION_BASE_FONT_PT,
            title_size_pt: PUBLICATION_BASE_FONT_PT,
            x_tick_label_size_pt: PUBLICATION_BASE_FONT_PT,
            y_tick_label_size_pt: PUBLICATION_BASE_FONT_PT,
            legend_size_pt: PUBLICATION_LEGEND_FONT_PT,
            marker_size_pt: PUBLICATION_MARKER_SIZE_PT,
            latex_preamble: LatexPreamble::new(["amsmath"]),
        }
    }

    /// Sets the base size and every per-element size derived from it,
    /// leaving the legend and marker sizes untouched.
    #[must_use]
    pub fn with_base_font_size(mut self, size_pt: f64) -> Self {
        self.base_font_size_pt = size_pt;
        self.axis_label_size_pt = size_pt;
        self.title_size_pt = size_pt;
        self.x_tick_label_size_pt = size_pt;
        self.y_tick_label_size_pt = size_pt;
        self
    }

    #[must_use]
    pub fn with_legend_size(mut self, size_pt: f64) -> Self {
        self.legend_size_pt = size_pt;
        self
    }

    #[must_use]
    pub fn with_marker_size(mut self, size_pt: f64) -> Self {
        self.marker_size_pt = size_pt;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    #[must_use]
    pub fn with_text_renderer(mut self, renderer: TextRenderer) -> Self {
        self.text_renderer = renderer;
        self
    }

    #[must_use]
    pub fn with_latex_preamble(mut self, preamble: LatexPreamble) -> Self {
        self.latex_preamble = preamble;
        self
    }

    /// Serializes the style to a JSON snapshot.
    pub fn to_json_string(&self) -> StyleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| StyleError::InvalidStyle(format!("style snapshot failed: {err}")))
    }

    /// Restores a style from a JSON snapshot, re-validating it.
    pub fn from_json_str(json: &str) -> StyleResult<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|err| StyleError::InvalidStyle(format!("style snapshot failed: {err}")))?;
        style.validate()?;
        Ok(style)
    }

    pub(crate) fn validate(&self) -> StyleResult<()> {
        for (name, value) in [
            ("base_font_size_pt", self.base_font_size_pt),
            ("axis_label_size_pt", self.axis_label_size_pt),
            ("title_size_pt", self.title_size_pt),
            ("x_tick_label_size_pt", self.x_tick_label_size_pt),
            ("y_tick_label_size_pt", self.y_tick_label_size_pt),
            ("legend_size_pt", self.legend_size_pt),
            ("marker_size_pt", self.marker_size_pt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::InvalidStyle(format!(
                    "plot style `{name}` must be finite and > 0"
                )));
            }
        }
        self.latex_preamble.validate()
    }
}
