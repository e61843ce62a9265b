use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, EventTarget, HtmlElement};

use crate::events::ListenerGuard;

use super::animator::{AnimationError, AnimationHandle, Animator};
use super::pose::{CardPose, HoverPose};
use super::timeline::{EntranceSpec, HoverSpec, HoverState, PointerEdge};

/// Writes poses straight into the element's inline style. Smoothing comes
/// from the `transition` the card declares, so every scroll event only has
/// to compute a target pose.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnimator;

fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<ListenerGuard, AnimationError>
where
    F: FnMut() + 'static,
{
    ListenerGuard::attach(target, event, handler).map_err(|e: JsValue| AnimationError::Listener {
        event,
        reason: format!("{:?}", e),
    })
}

fn apply_card_pose(element: &HtmlElement, pose: &CardPose) {
    let style = element.style();
    let _ = style.set_property("opacity", &pose.opacity_css());
    let _ = style.set_property("transform", &pose.transform_css());
}

fn apply_hover_pose(element: &HtmlElement, pose: &HoverPose) {
    let style = element.style();
    let _ = style.set_property("translate", &pose.translate_css());
    let _ = style.set_property("box-shadow", pose.shadow);
}

/// Distance from the viewport top to where layout put the element. Offsets
/// ignore transforms, so the poses written here never feed back into it.
fn layout_top(element: &HtmlElement, scroll_y: f64) -> f64 {
    let mut top = 0.0;
    let mut node = Some(element.clone());
    while let Some(el) = node {
        top += f64::from(el.offset_top());
        node = el.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    top - scroll_y
}

/// Runs `write` with transitions off so the written pose is where the card
/// starts rather than something it animates towards.
fn without_transition<F: FnOnce()>(element: &HtmlElement, write: F) {
    let style = element.style();
    let previous = style.get_property_value("transition").unwrap_or_default();
    let _ = style.set_property("transition", "none");
    write();
    // Reading layout commits the pose before the transition comes back.
    let _ = element.offset_height();
    if previous.is_empty() {
        let _ = style.remove_property("transition");
    } else {
        let _ = style.set_property("transition", &previous);
    }
}

impl Animator for DomAnimator {
    fn entrance(&self, element: &HtmlElement, spec: &EntranceSpec) -> Result<AnimationHandle, AnimationError> {
        let window = window().ok_or(AnimationError::NoWindow)?;
        let spec = *spec;

        let update = {
            let element = element.clone();
            let window = window.clone();
            move || {
                let viewport_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                if viewport_height <= 0.0 {
                    return;
                }
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let top = layout_top(&element, scroll_y);
                apply_card_pose(&element, &spec.pose_at(spec.range.progress(top, viewport_height)));
            }
        };

        without_transition(element, &update);

        let target: &EventTarget = window.as_ref();
        let listeners = vec![
            listen(target, "scroll", update.clone())?,
            listen(target, "resize", update)?,
        ];
        debug!("Entrance attached with delay {:.2}", spec.delay);
        Ok(AnimationHandle::new(listeners))
    }

    fn hover(&self, element: &HtmlElement, spec: &HoverSpec) -> Result<AnimationHandle, AnimationError> {
        let spec = *spec;
        without_transition(element, || apply_hover_pose(element, &spec.target(HoverState::Resting)));

        let on = |edge: PointerEdge| {
            let element = element.clone();
            move || apply_hover_pose(&element, &spec.target(HoverState::Resting.after(edge)))
        };

        let target: &EventTarget = element.as_ref();
        let listeners = vec![
            listen(target, "mouseenter", on(PointerEdge::Enter))?,
            listen(target, "mouseleave", on(PointerEdge::Leave))?,
        ];
        Ok(AnimationHandle::new(listeners))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::animation::timeline::MotionPreset;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card() -> HtmlElement {
        let document = window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el.dyn_into::<HtmlElement>().unwrap()
    }

    fn viewport_height() -> f64 {
        window().unwrap().inner_height().unwrap().as_f64().unwrap()
    }

    /// Card pinned at `top` px from the viewport top, already carrying an offset transform.
    fn pinned_card(top: i32, transition: &str) -> HtmlElement {
        let el = card();
        el.set_attribute(
            "style",
            &format!(
                "position: fixed; top: {}px; height: 40px; transform: translateY(100px); translate: 0px -10px; transition: {};",
                top, transition
            ),
        )
        .unwrap();
        el
    }

    fn inline_opacity(el: &HtmlElement) -> f64 {
        el.style().get_property_value("opacity").unwrap().parse().unwrap()
    }

    fn computed_opacity(el: &HtmlElement) -> f64 {
        window()
            .unwrap()
            .get_computed_style(el)
            .unwrap()
            .unwrap()
            .get_property_value("opacity")
            .unwrap()
            .parse()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn entrance_progress_ignores_its_own_offset() {
        let vh = viewport_height();
        let top = (0.7 * vh).round() as i32;
        let el = pinned_card(top, "none");
        let spec = MotionPreset::FEATURE.entrance(0);

        let _handle = DomAnimator.entrance(&el, &spec).unwrap();

        let expected = spec.pose_at(spec.range.progress(f64::from(top), vh));
        assert!(expected.opacity > 0.5);
        assert!((inline_opacity(&el) - expected.opacity).abs() < 1e-3);
    }

    #[wasm_bindgen_test]
    fn entrance_starts_from_its_pose_without_fading() {
        let vh = viewport_height();
        let el = pinned_card((0.95 * vh).round() as i32, "opacity 10s linear");

        let _handle = DomAnimator.entrance(&el, &MotionPreset::FEATURE.entrance(0)).unwrap();

        assert_eq!(inline_opacity(&el), 0.0);
        assert!(computed_opacity(&el) < 1e-3);
        assert!(el.style().get_property_value("transition").unwrap().contains("10s"));
    }

    fn fire(el: &HtmlElement, name: &str) {
        el.dispatch_event(&Event::new(name).unwrap()).unwrap();
    }

    fn translate(el: &HtmlElement) -> String {
        el.style().get_property_value("translate").unwrap()
    }

    #[wasm_bindgen_test]
    fn hover_lifts_and_settles() {
        let el = card();
        let _handle = DomAnimator.hover(&el, &MotionPreset::FEATURE.hover).unwrap();
        let rest = translate(&el);
        fire(&el, "mouseenter");
        assert!(translate(&el).contains("-10px"));
        fire(&el, "mouseleave");
        assert_eq!(translate(&el), rest);
    }

    #[wasm_bindgen_test]
    fn dropped_hover_handle_stops_listening() {
        let el = card();
        let handle = DomAnimator.hover(&el, &MotionPreset::SERVICE.hover).unwrap();
        assert_eq!(handle.events(), vec!["mouseenter", "mouseleave"]);
        let rest = translate(&el);
        drop(handle);
        fire(&el, "mouseenter");
        assert_eq!(translate(&el), rest);
    }
}
