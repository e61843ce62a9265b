use thiserror::Error;
use web_sys::HtmlElement;

use crate::events::ListenerGuard;

use super::timeline::{EntranceSpec, HoverSpec};

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not listen for `{event}`: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// Keeps an attached animation running. Dropping it detaches every listener
/// the animation registered; the element keeps whatever pose it had last.
#[must_use = "the animation stops as soon as the handle is dropped"]
pub struct AnimationHandle {
    listeners: Vec<ListenerGuard>,
}

impl AnimationHandle {
    pub fn new(listeners: Vec<ListenerGuard>) -> Self {
        Self { listeners }
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(ListenerGuard::event).collect()
    }
}

/// Anything able to drive card motion on an element.
pub trait Animator {
    /// Scroll-scrubbed transition from `spec.from` to `spec.to`.
    fn entrance(&self, element: &HtmlElement, spec: &EntranceSpec) -> Result<AnimationHandle, AnimationError>;

    /// Lift on pointer-enter and settle back on pointer-leave.
    fn hover(&self, element: &HtmlElement, spec: &HoverSpec) -> Result<AnimationHandle, AnimationError>;
}
