use yew::prelude::*;

/// Inline SVG glyphs used across the marketing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Film,
    Heart,
    Sparkles,
    Clock,
    Shield,
    ArrowRight,
    AlertCircle,
}

impl Icon {
    /// Render the glyph with the given utility classes. Stroke follows
    /// `currentColor` so color comes from the surrounding text classes.
    pub fn svg(self, class: &str) -> Html {
        let body = match self {
            Icon::Users => html! {
                <>
                    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                    <circle cx="9" cy="7" r="4" />
                    <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
                </>
            },
            Icon::Film => html! {
                <>
                    <rect x="3" y="3" width="18" height="18" rx="2" />
                    <path d="M7 3v18" />
                    <path d="M17 3v18" />
                    <path d="M3 7.5h4" />
                    <path d="M3 12h18" />
                    <path d="M3 16.5h4" />
                    <path d="M17 7.5h4" />
                    <path d="M17 16.5h4" />
                </>
            },
            Icon::Heart => html! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
            },
            Icon::Sparkles => html! {
                <>
                    <path d="M12 2.3 13.6 8.4a2 2 0 0 0 1.4 1.4l6.1 1.6a.6.6 0 0 1 0 1.2l-6.1 1.6a2 2 0 0 0-1.4 1.4L12 21.7a.6.6 0 0 1-1.2 0l-1.6-6.1a2 2 0 0 0-1.4-1.4l-6.1-1.6a.6.6 0 0 1 0-1.2l6.1-1.6a2 2 0 0 0 1.4-1.4l1.6-6.1a.6.6 0 0 1 1.2 0Z" />
                    <path d="M20 3v4" />
                    <path d="M22 5h-4" />
                </>
            },
            Icon::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </>
            },
            Icon::Shield => html! {
                <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            },
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::AlertCircle => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 8v4" />
                    <path d="M12 16h.01" />
                </>
            },
        };

        html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class={class.to_string()}
                aria-hidden="true"
            >
                { body }
            </svg>
        }
    }
}
