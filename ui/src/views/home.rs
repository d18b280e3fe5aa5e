use dioxus::prelude::*;

#[cfg(debug_assertions)]
fn log_home_render() {
    println!("[views] Home render");
}

#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    log_home_render();

    rsx! {
        section { class: "page page-home",
            h1 { "Siteshift" }
            p { "Audit a website migration before it costs you traffic." }
            p {
                "Upload the old and new sitemaps, start an audit, and watch the backend "
                "compare the two sites while you wait. When it finishes you get a full "
                "breakdown of what survived the move and what did not."
            }

            ul { class: "page-home__features",
                li { "🔗 URL comparison: matched, redirected, and missing pages" }
                li { "⚡ Performance scores and Core Web Vitals, old vs new" }
                li { "🎯 SEO metadata match scoring per URL" }
                li { "📱 Mobile responsiveness before and after" }
            }

            h2 { "How it works" }
            ol { class: "page-home__steps",
                li { "Create a project with both base URLs and both sitemaps." }
                li { "The backend crawls and compares the two sites." }
                li { "Watch progress live; a full audit usually takes a few minutes." }
                li { "Explore the dashboard and export the report." }
            }

            p { class: "page-home__cta",
                "Create a project to get started."
            }
        }
    }
}
