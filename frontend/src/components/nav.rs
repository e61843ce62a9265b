use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::SECTION_LINKS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Transparent,
    Opaque,
}

impl NavState {
    /// No hysteresis: the same offset always maps to the same state.
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > config::NAV_SCROLL_THRESHOLD {
            NavState::Opaque
        } else {
            NavState::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavState::Transparent => "transparent",
            NavState::Opaque => "scrolled",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_contact: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    // Re-renders on every window scroll while mounted; the listener goes away with the nav.
    let (_, scroll_y) = use_window_scroll();
    let state = NavState::from_offset(scroll_y);

    {
        use_effect_with_deps(
            move |state| {
                debug!("Nav bar is now {:?}", state);
                || ()
            },
            state,
        );
    }

    let handle_contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", state.class())}>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={config::LOGO_PATH} alt={config::BRAND_NAME} width="40" height="40" />
                    <span>{config::BRAND_NAME}</span>
                </div>
                <div class="nav-links">
                    { for SECTION_LINKS.iter().map(|(label, id)| html! {
                        <a href={format!("#{}", id)} class="nav-link">{*label}</a>
                    }) }
                </div>
                <button class="nav-contact-button" onclick={handle_contact}>
                    {"Contact Us"}
                </button>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background-color 0.3s ease, box-shadow 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.transparent {
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--foreground-muted);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: var(--primary);
                    }
                    .nav-contact-button {
                        background: var(--primary);
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .nav-contact-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 10px 15px rgba(69, 102, 255, 0.5);
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
