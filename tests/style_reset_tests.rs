use approx::assert_relative_eq;
use plotstyle_rs::PlotContext;
use plotstyle_rs::core::{
    FontFamily, PUBLICATION_BASE_FONT_PT, PUBLICATION_LEGEND_FONT_PT, PUBLICATION_MARKER_SIZE_PT,
    PlotStyle, TextRenderer,
};

#[test]
fn reset_closes_all_open_figures() {
    let mut ctx = PlotContext::new();
    ctx.new_figure();
    ctx.new_figure();
    ctx.new_figure();
    assert_eq!(ctx.open_figure_count(), 3);

    ctx.reset_style();
    assert_eq!(ctx.open_figure_count(), 0);
}

#[test]
fn reset_with_no_open_figures_is_a_no_op_on_the_registry() {
    let mut ctx = PlotContext::new();
    ctx.reset_style();
    assert_eq!(ctx.open_figure_count(), 0);
}

#[test]
fn reset_installs_the_publication_preset() {
    let mut ctx = PlotContext::new();
    ctx.reset_style();

    let style = ctx.style();
    assert_relative_eq!(style.base_font_size_pt, PUBLICATION_BASE_FONT_PT);
    assert_relative_eq!(style.axis_label_size_pt, PUBLICATION_BASE_FONT_PT);
    assert_relative_eq!(style.title_size_pt, PUBLICATION_BASE_FONT_PT);
    assert_relative_eq!(style.x_tick_label_size_pt, PUBLICATION_BASE_FONT_PT);
    assert_relative_eq!(style.y_tick_label_size_pt, PUBLICATION_BASE_FONT_PT);
    assert_relative_eq!(style.legend_size_pt, PUBLICATION_LEGEND_FONT_PT);
    assert_relative_eq!(style.marker_size_pt, PUBLICATION_MARKER_SIZE_PT);

    assert_eq!(style.text_renderer, TextRenderer::Latex);
    assert_eq!(style.font_family.generic_name(), "sans-serif");
    assert_eq!(style.font_family.preferred(), ["Helvetica"]);
    assert_eq!(style.latex_preamble.packages(), ["amsmath"]);
    assert_eq!(style.latex_preamble.to_source(), "\\usepackage{amsmath}");
}

#[test]
fn reset_is_idempotent() {
    let mut once = PlotContext::new();
    once.reset_style();

    let mut twice = PlotContext::new();
    twice.reset_style();
    twice.reset_style();

    assert_eq!(once.style(), twice.style());
}

#[test]
fn reset_overwrites_a_previously_installed_style() {
    let mut ctx = PlotContext::new();
    ctx.set_style(
        PlotStyle::native()
            .with_base_font_size(14.0)
            .with_font_family(FontFamily::Monospace {
                preferred: vec!["Fira Code".to_owned()],
            }),
    )
    .expect("valid custom style");

    ctx.reset_style();
    assert_eq!(ctx.style(), &PlotStyle::publication());
}

#[test]
fn set_style_keeps_figures_open() {
    let mut ctx = PlotContext::new();
    ctx.new_figure();
    ctx.set_style(PlotStyle::publication()).expect("valid style");
    assert_eq!(ctx.open_figure_count(), 1);
}

#[test]
fn figure_ids_are_not_reused_after_close() {
    let mut ctx = PlotContext::new();
    let first = ctx.new_figure();
    assert!(ctx.close_figure(first));
    assert!(!ctx.close_figure(first));

    let second = ctx.new_figure();
    assert_ne!(first, second);
}

#[test]
fn open_figure_ids_preserve_opening_order() {
    let mut ctx = PlotContext::new();
    let a = ctx.new_figure();
    let b = ctx.new_figure();
    let c = ctx.new_figure();
    ctx.close_figure(b);

    assert_eq!(ctx.open_figure_ids(), vec![a, c]);
}
