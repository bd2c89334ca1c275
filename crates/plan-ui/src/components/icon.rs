use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChartArea,
    Server,
    Users,
    Warning,
}

impl Glyph {
    /// Path data on a 16x16 grid.
    fn path(self) -> &'static str {
        match self {
            Glyph::ChartArea => "M1 14h14v1H0V1h1zM2 13V9l3-3 3 2 4-5 2 2v8z",
            Glyph::Server => "M1 2h14v5H1zM1 9h14v5H1zM3 4v1h2V4zM3 11v1h2v-1z",
            Glyph::Users => "M5.5 7a2.5 2.5 0 100-5 2.5 2.5 0 000 5zM0 14c0-3 2.5-5 5.5-5s5.5 2 5.5 5zM11.5 7a2 2 0 100-4 2 2 0 000 4zM12 9c2.2.3 4 2 4 5h-3.5c0-2-.7-3.7-2-4.8z",
            Glyph::Warning => "M8 1l7.5 13h-15zM7.25 6v4h1.5V6zm0 5.5V13h1.5v-1.5z",
        }
    }
}

/// Inline SVG icon, colored through `currentColor`.
#[component]
pub fn Icon(glyph: Glyph, #[prop(optional, into)] tone: String) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {tone}")
            width="16"
            height="16"
            viewBox="0 0 16 16"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=glyph.path() />
        </svg>
    }
}
