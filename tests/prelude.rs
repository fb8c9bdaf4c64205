use pretty_assertions::assert_eq;
use tincture::prelude::*;

#[test]
fn brand_cascade_through_manager() {
    let config = ThemeConfig::new().with_default_theme(ThemeType::Dark);
    let mut manager = config.build_manager().unwrap();
    assert_eq!(manager.effective_theme(), ThemeType::Dark);

    let body_text = Navigator::new()
        .with_component(ComponentType::BodyText)
        .with_theme(ThemeType::Dark)
        .with_style(StyleType::Color);
    let written = manager.set_override(&body_text, Some(StyleValue::Color(Color::from_rgb8(60, 60, 60))));
    assert!(written > 0);

    let bucket = manager
        .registry()
        .get(ComponentType::BodyText, ThemeType::Dark, ComponentState::Default)
        .unwrap();
    let ratio = contrast_ratio(
        bucket.color(StyleType::Color).unwrap(),
        bucket.color(StyleType::BackgroundColor).unwrap(),
    );
    assert!(ratio >= WCAG_AA, "{ratio}");
}

#[test]
fn hsv_example_and_canonical_hex() {
    let color = Color::parse("hsv(210, 100%, 100%)").unwrap();
    assert_eq!(color.to_hex(), "#0080FFFF");
    assert_eq!(Color::parse("#0F8").unwrap().to_hex(), "#00FF88FF");
    assert!(Color::try_parse("#12345").is_none());
}

#[test]
fn unknown_axis_names_are_errors() {
    let err = ComponentType::parse("sidebar").unwrap_err();
    assert_eq!(err.to_string(), "Unknown component 'sidebar'");
}
