use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::animator::{AnimationError, AnimationHandle, Animator};
use crate::animation::dom::DomAnimator;
use crate::animation::timeline::{transition_css, MotionPreset};
use crate::content::Tone;
use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVariant {
    Feature,
    Service,
}

impl CardVariant {
    pub fn preset(self) -> &'static MotionPreset {
        match self {
            CardVariant::Feature => &MotionPreset::FEATURE,
            CardVariant::Service => &MotionPreset::SERVICE,
        }
    }

    fn class(self) -> &'static str {
        match self {
            CardVariant::Feature => "motion-card feature-card",
            CardVariant::Service => "motion-card service-card",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionCardProps {
    pub variant: CardVariant,
    pub index: usize,
    pub title: AttrValue,
    #[prop_or_default]
    pub icon: Option<(Icon, Tone)>,
    pub items: &'static [&'static str],
}

fn attach<A: Animator>(
    animator: &A,
    element: &HtmlElement,
    preset: &MotionPreset,
    index: usize,
) -> Result<Vec<AnimationHandle>, AnimationError> {
    Ok(vec![
        animator.entrance(element, &preset.entrance(index))?,
        animator.hover(element, &preset.hover)?,
    ])
}

/// Back to plain, fully visible markup when the animations can't run.
fn settle(element: &HtmlElement) {
    let style = element.style();
    for property in ["opacity", "transform", "translate", "box-shadow"] {
        let _ = style.remove_property(property);
    }
}

#[function_component(MotionCard)]
pub fn motion_card(props: &MotionCardProps) -> Html {
    let card_ref = use_node_ref();
    let preset = props.variant.preset();

    {
        let card_ref = card_ref.clone();
        // Keyed on (index, variant): re-renders with the same position keep the running animation.
        use_effect_with_deps(
            move |(index, variant)| {
                let handles = match card_ref.cast::<HtmlElement>() {
                    Some(element) => match attach(&DomAnimator, &element, variant.preset(), *index) {
                        Ok(handles) => {
                            for handle in &handles {
                                debug!("Card {} listening for {:?}", index, handle.events());
                            }
                            handles
                        }
                        Err(e) => {
                            warn!("Card {} stays static: {}", index, e);
                            settle(&element);
                            Vec::new()
                        }
                    },
                    None => Vec::new(),
                };
                move || drop(handles)
            },
            (props.index, props.variant),
        );
    }

    let style = format!(
        "perspective: 1200px; transition: {};",
        transition_css(&preset.entrance(props.index), &preset.hover)
    );

    let bullets = html! {
        <ul class="card-items">
            { for props.items.iter().map(|item| html! {
                <li>
                    <span class="card-bullet">{"•"}</span>
                    <span>{*item}</span>
                </li>
            }) }
        </ul>
    };

    let body = match props.variant {
        CardVariant::Feature => html! {
            <>
                <div class="card-glow"></div>
                <div class="card-content">
                    {
                        if let Some((icon, tone)) = props.icon {
                            html! { <div class="card-icon">{ icon.render(tone.class()) }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <h3 class="card-title">{props.title.clone()}</h3>
                    { bullets }
                </div>
                <div class="card-border-glow"></div>
            </>
        },
        CardVariant::Service => html! {
            <>
                <div class="card-glow"></div>
                <div class="card-shine"></div>
                <div class="card-content">
                    <h3 class="card-title">{props.title.clone()}</h3>
                    { bullets }
                </div>
                <div class="card-accent-line"></div>
            </>
        },
    };

    html! {
        <div ref={card_ref} class={props.variant.class()} {style}>
            { body }
        </div>
    }
}

/// Shared look for both card variants. Mounted once by the page.
#[function_component(MotionCardStyles)]
pub fn motion_card_styles() -> Html {
    html! {
        <style>
            {r#"
                .motion-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    padding: 2rem;
                    will-change: transform, opacity;
                }
                .feature-card {
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.4), rgba(255, 255, 255, 0.2));
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .service-card {
                    background: linear-gradient(135deg, rgba(239, 246, 255, 0.6), rgba(250, 245, 255, 0.4), rgba(239, 246, 255, 0.3));
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(191, 219, 254, 0.5);
                }
                .motion-card:hover {
                    border-color: rgba(69, 102, 255, 0.5);
                }
                .card-glow, .card-shine, .card-border-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    pointer-events: none;
                    transition: opacity 0.5s ease;
                }
                .card-glow {
                    background: linear-gradient(135deg, rgba(69, 102, 255, 0.06), transparent, rgba(155, 92, 255, 0.06));
                    opacity: 0;
                }
                .card-shine {
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.2), transparent);
                    opacity: 0.4;
                }
                .card-border-glow {
                    box-shadow: inset 0 0 0 1px rgba(69, 102, 255, 0.3);
                    opacity: 0;
                }
                .motion-card:hover .card-glow,
                .motion-card:hover .card-border-glow {
                    opacity: 1;
                }
                .motion-card:hover .card-shine {
                    opacity: 0.6;
                }
                .card-content {
                    position: relative;
                    z-index: 10;
                }
                .card-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 4rem;
                    width: 4rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, rgba(69, 102, 255, 0.3), rgba(155, 92, 255, 0.3));
                    transition: background 0.3s ease;
                }
                .card-icon .icon {
                    width: 2rem;
                    height: 2rem;
                }
                .feature-card .card-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .service-card .card-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    transition: color 0.3s ease;
                }
                .service-card:hover .card-title {
                    color: var(--primary);
                }
                .card-items {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .card-items li {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--foreground-muted);
                    margin-bottom: 0.5rem;
                }
                .card-bullet {
                    color: var(--primary);
                    font-weight: 700;
                    flex-shrink: 0;
                }
                .card-accent-line {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: linear-gradient(90deg, transparent, rgba(69, 102, 255, 0.4), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .service-card:hover .card-accent-line {
                    opacity: 1;
                }
            "#}
        </style>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn settle_clears_every_animated_property() {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
        el.set_attribute(
            "style",
            "opacity: 0; transform: translateY(60px); translate: 0px -8px; box-shadow: 0 5px 15px black; perspective: 1200px;",
        )
        .unwrap();

        settle(&el);

        let style = el.style();
        for property in ["opacity", "transform", "translate", "box-shadow"] {
            assert_eq!(style.get_property_value(property).unwrap(), "", "{} left behind", property);
        }
        assert_eq!(style.get_property_value("perspective").unwrap(), "1200px");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_card(variant: CardVariant, items: &'static [&'static str]) -> String {
        ServerRenderer::<MotionCard>::with_props(move || MotionCardProps {
            variant,
            index: 2,
            title: "Audit Services".into(),
            icon: Some((Icon::Shield, Tone::Primary)),
            items,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_one_list_item_per_entry() {
        let html = render_card(CardVariant::Service, &["Statutory", "Internal", "Tax"]).await;
        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains("Internal"));
        assert!(html.contains("service-card"));
    }

    #[tokio::test]
    async fn empty_items_still_render_title() {
        for variant in [CardVariant::Feature, CardVariant::Service] {
            let html = render_card(variant, &[]).await;
            assert!(html.contains("Audit Services"));
            assert_eq!(html.matches("<li").count(), 0);
            assert!(html.contains("card-items"));
        }
    }

    #[tokio::test]
    async fn only_feature_cards_show_the_icon() {
        let feature = render_card(CardVariant::Feature, &["x"]).await;
        let service = render_card(CardVariant::Service, &["x"]).await;
        assert!(feature.contains("card-icon"));
        assert!(!service.contains("card-icon"));
    }

    #[tokio::test]
    async fn transition_is_declared_inline() {
        let html = render_card(CardVariant::Feature, &["x"]).await;
        assert!(html.contains("transition: opacity 0.5s linear"));
    }
}
