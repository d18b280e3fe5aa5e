use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so this crate never needs to know each platform's `Route` enum.
///
/// If a builder is registered, `AppNavbar` renders its links; otherwise it
/// falls back to any raw `children` passed in.
pub struct NavBuilder {
    // Each closure returns a Link (or element styled as a nav link) whose
    // children are exactly the label string passed in.
    pub home: fn(label: &str) -> Element,
    pub new_project: fn(label: &str) -> Element,
    pub results: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let new_project = (b.new_project)("New Project");
        let results = (b.results)("Results");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {new_project}
                {results}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Siteshift" }
                    }
                    span { class: "navbar__brand-subtitle", "Migration audits" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
