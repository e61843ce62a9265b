use yew::prelude::*;

/// Line icons drawn on a 24×24 grid with a 2px round stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BarChart,
    Check,
    ChevronRight,
    CreditCard,
    FileText,
    Globe,
    MessageSquare,
    Shield,
    TrendingUp,
    Zap,
}

impl Icon {
    fn shapes(self) -> Html {
        match self {
            Icon::BarChart => html! {
                <>
                    <path d="M3 3v18h18" />
                    <path d="M18 17V9" />
                    <path d="M13 17V5" />
                    <path d="M8 17v-3" />
                </>
            },
            Icon::Check => html! { <path d="M20 6 9 17l-5-5" /> },
            Icon::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
            Icon::CreditCard => html! {
                <>
                    <rect width="20" height="14" x="2" y="5" rx="2" />
                    <line x1="2" x2="22" y1="10" y2="10" />
                </>
            },
            Icon::FileText => html! {
                <>
                    <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
                    <path d="M14 2v4a2 2 0 0 0 2 2h4" />
                    <path d="M10 9H8" />
                    <path d="M16 13H8" />
                    <path d="M16 17H8" />
                </>
            },
            Icon::Globe => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                    <path d="M2 12h20" />
                </>
            },
            Icon::MessageSquare => html! {
                <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
            },
            Icon::Shield => html! {
                <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            },
            Icon::TrendingUp => html! {
                <>
                    <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                    <polyline points="16 7 22 7 22 13" />
                </>
            },
            Icon::Zap => html! {
                <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" />
            },
        }
    }

    pub fn render(self, class: &'static str) -> Html {
        html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class={classes!("icon", class)}
                aria-hidden="true"
            >
                { self.shapes() }
            </svg>
        }
    }
}
