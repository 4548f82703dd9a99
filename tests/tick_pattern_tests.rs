use plotstyle_rs::core::TickPattern;
use plotstyle_rs::error::StyleError;

fn pattern(source: &str) -> TickPattern {
    TickPattern::parse(source).expect("pattern should parse")
}

#[test]
fn integer_conversion_truncates_toward_zero() {
    let fmt = pattern("%d");
    assert_eq!(fmt.format(3.7), "3");
    assert_eq!(fmt.format(-3.7), "-3");
    assert_eq!(fmt.format(0.0), "0");
    assert_eq!(fmt.format(-0.25), "0");
}

#[test]
fn fixed_conversion_renders_requested_decimals() {
    assert_eq!(pattern("%.2f").format(2.5), "2.50");
    assert_eq!(pattern("%.0f").format(1.25), "1");
    assert_eq!(pattern("%f").format(1.5), "1.500000");
}

#[test]
fn fixed_conversion_keeps_the_sign_of_small_negatives() {
    assert_eq!(pattern("%.2f").format(-0.001), "-0.00");
}

#[test]
fn width_pads_on_the_left_by_default() {
    assert_eq!(pattern("%5.1f").format(3.14), "  3.1");
    assert_eq!(pattern("%5d").format(42.0), "   42");
}

#[test]
fn left_align_flag_pads_on_the_right() {
    assert_eq!(pattern("%-5d").format(42.0), "42   ");
}

#[test]
fn zero_pad_inserts_zeros_after_the_sign() {
    assert_eq!(pattern("%05d").format(-42.0), "-0042");
    assert_eq!(pattern("%06.1f").format(3.5), "0003.5");
}

#[test]
fn sign_flags_apply_to_non_negative_values() {
    assert_eq!(pattern("%+d").format(7.0), "+7");
    assert_eq!(pattern("% d").format(7.0), " 7");
    assert_eq!(pattern("%+d").format(-7.0), "-7");
}

#[test]
fn scientific_conversion_uses_two_digit_signed_exponents() {
    assert_eq!(pattern("%e").format(12345.0), "1.234500e+04");
    assert_eq!(pattern("%.2e").format(0.00123), "1.23e-03");
    assert_eq!(pattern("%E").format(12345.0), "1.234500E+04");
    assert_eq!(pattern("%.1e").format(0.0), "0.0e+00");
}

#[test]
fn general_conversion_picks_fixed_or_scientific_form() {
    assert_eq!(pattern("%g").format(0.5), "0.5");
    assert_eq!(pattern("%g").format(123.456), "123.456");
    assert_eq!(pattern("%g").format(1_000_000.0), "1e+06");
    assert_eq!(pattern("%g").format(0.00001), "1e-05");
    assert_eq!(pattern("%g").format(0.0001), "0.0001");
    assert_eq!(pattern("%G").format(10_000_000.0), "1E+07");
}

#[test]
fn verbatim_conversion_renders_shortest_form() {
    assert_eq!(pattern("%s").format(2.5), "2.5");
    assert_eq!(pattern("%s").format(3.0), "3");
    assert_eq!(pattern("%5s").format(2.5), "  2.5");
}

#[test]
fn literal_text_surrounds_the_conversion() {
    assert_eq!(pattern("%d ms").format(12.0), "12 ms");
    assert_eq!(pattern("t = %d").format(5.9), "t = 5");
    assert_eq!(pattern("load %.1f%%").format(12.34), "load 12.3%");
    assert_eq!(pattern("%d%%").format(50.2), "50%");
}

#[test]
fn non_finite_values_render_as_text() {
    assert_eq!(pattern("%d").format(f64::NAN), "nan");
    assert_eq!(pattern("%.2f").format(f64::INFINITY), "inf");
    assert_eq!(pattern("%F").format(f64::NEG_INFINITY), "-INF");
}

#[test]
fn huge_magnitudes_saturate_the_integer_conversion() {
    assert_eq!(pattern("%d").format(1e30), i64::MAX.to_string());
    assert_eq!(pattern("%d").format(-1e30), i64::MIN.to_string());
}

#[test]
fn parse_keeps_the_pattern_source() {
    let fmt = pattern("%-8.3e Hz");
    assert_eq!(fmt.source(), "%-8.3e Hz");
    assert_eq!(fmt.to_string(), "%-8.3e Hz");
}

#[test]
fn pattern_without_a_conversion_is_rejected() {
    for source in ["", "plain text", "100%%"] {
        let err = TickPattern::parse(source).expect_err("should be rejected");
        assert!(matches!(err, StyleError::InvalidTickFormat { .. }));
        assert!(err.to_string().contains("expected one conversion"));
    }
}

#[test]
fn pattern_with_two_conversions_is_rejected() {
    let err = TickPattern::parse("%d %d").expect_err("should be rejected");
    assert!(err.to_string().contains("at most one conversion"));
}

#[test]
fn unsupported_conversion_is_rejected_with_the_character_named() {
    let err = TickPattern::parse("%q").expect_err("should be rejected");
    assert!(err.to_string().contains("unsupported conversion `%q`"));
}

#[test]
fn truncated_pattern_is_rejected() {
    let err = TickPattern::parse("%").expect_err("should be rejected");
    assert!(err.to_string().contains("ends before a conversion"));

    let err = TickPattern::parse("%+5.").expect_err("should be rejected");
    assert!(err.to_string().contains("ends before a conversion"));
}

#[test]
fn precision_is_rejected_for_integer_and_verbatim_conversions() {
    let err = TickPattern::parse("%.3d").expect_err("should be rejected");
    assert!(err.to_string().contains("precision is not supported for `%d`"));

    let err = TickPattern::parse("%.3s").expect_err("should be rejected");
    assert!(err.to_string().contains("precision is not supported for `%s`"));
}

#[test]
fn oversized_width_and_precision_are_rejected() {
    let err = TickPattern::parse("%100d").expect_err("should be rejected");
    assert!(err.to_string().contains("width must be <= 64"));

    let err = TickPattern::parse("%.99f").expect_err("should be rejected");
    assert!(err.to_string().contains("precision must be <= 32"));
}

#[test]
fn rejection_message_names_the_offending_pattern() {
    let err = TickPattern::parse("%q").expect_err("should be rejected");
    assert!(err.to_string().contains("`%q`"));
}
