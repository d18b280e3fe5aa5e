#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Critical CSS selectors the desktop UI relies on (the results dashboard in
particular) must remain present in the unified shared theme at
`ui/assets/theme/main.css`. A refactor that drops or renames one of these
classes would silently break styling in packaged desktop builds; a substring
presence check catches that early without pulling in a CSS parser.

If you intentionally rename or remove a selector:
  1. Update the component markup.
  2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button",
    ".button--primary",
    ".results-card",
    ".results-card__placeholder",
    // Overview dashboard
    ".overview__grid",
    ".overview-card",
    // Status panel
    ".status-panel__progress",
    ".status-panel__progress-fill",
    // Charts
    ".donut__ring",
    ".bar-chart__row",
    ".vital-card",
    ".seo-bucket",
    // Tables & insights
    ".detail-table",
    ".insight--warn",
    // Forms
    ".project-form__field",
    ".results-picker",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Shared theme is missing required selectors: {missing:?}"
    );
}
