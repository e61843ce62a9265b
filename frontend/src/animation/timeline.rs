use super::easing::Easing;
use super::pose::{CardPose, HoverPose};

/// Portion of the viewport the element's top edge travels while the entrance
/// animation runs. Both ends are fractions of the viewport height measured
/// from the top, e.g. `0.8` is "top of element at 80% down the viewport".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// Scroll progress in `[0, 1]` for an element whose top edge sits at
    /// `element_top` px from the top of a viewport `viewport_height` px tall.
    pub fn progress(&self, element_top: f64, viewport_height: f64) -> f64 {
        let start = self.start * viewport_height;
        let end = self.end * viewport_height;
        if (start - end).abs() < f64::EPSILON {
            return if element_top <= end { 1.0 } else { 0.0 };
        }
        ((start - element_top) / (start - end)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceSpec {
    pub from: CardPose,
    pub to: CardPose,
    pub range: ScrollRange,
    pub duration: f64,
    pub delay: f64,
    /// Seconds the rendered pose takes to catch up with the scroll position.
    pub scrub: f64,
    pub easing: Easing,
}

impl EntranceSpec {
    /// Maps scroll progress onto the tween. The delay occupies the front of
    /// the scrubbed range, so later cards in a list start moving later.
    pub fn tween_progress(&self, scroll_progress: f64) -> f64 {
        let total = self.delay + self.duration;
        if self.duration <= 0.0 {
            return if scroll_progress * total >= self.delay { 1.0 } else { 0.0 };
        }
        ((scroll_progress.clamp(0.0, 1.0) * total - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn pose_at(&self, scroll_progress: f64) -> CardPose {
        let t = self.easing.apply(self.tween_progress(scroll_progress));
        self.from.lerp(&self.to, t)
    }

    fn transitions(&self) -> Vec<String> {
        if self.scrub <= 0.0 {
            return Vec::new();
        }
        let ease = Easing::Linear.css();
        vec![
            format!("opacity {}s {}", self.scrub, ease),
            format!("transform {}s {}", self.scrub, ease),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Resting,
    Lifted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEdge {
    Enter,
    Leave,
}

impl HoverState {
    pub fn after(self, edge: PointerEdge) -> HoverState {
        match edge {
            PointerEdge::Enter => HoverState::Lifted,
            PointerEdge::Leave => HoverState::Resting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverSpec {
    pub rest: HoverPose,
    pub lifted: HoverPose,
    pub duration: f64,
    pub easing: Easing,
}

impl HoverSpec {
    pub fn target(&self, state: HoverState) -> HoverPose {
        match state {
            HoverState::Resting => self.rest,
            HoverState::Lifted => self.lifted,
        }
    }

    fn transitions(&self) -> Vec<String> {
        let ease = self.easing.css();
        vec![
            format!("translate {}s {}", self.duration, ease),
            format!("box-shadow {}s {}", self.duration, ease),
        ]
    }
}

/// Value for the card's `transition` property covering both animations.
pub fn transition_css(entrance: &EntranceSpec, hover: &HoverSpec) -> String {
    let mut parts = entrance.transitions();
    parts.extend(hover.transitions());
    parts.join(", ")
}

/// Timing and pose values shared by every card of one variant. The per-card
/// entrance is derived from it by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPreset {
    pub hidden: CardPose,
    pub range: ScrollRange,
    pub duration: f64,
    pub stagger: f64,
    pub scrub: f64,
    pub easing: Easing,
    pub hover: HoverSpec,
}

impl MotionPreset {
    pub const FEATURE: MotionPreset = MotionPreset {
        hidden: CardPose {
            opacity: 0.0,
            y: 100.0,
            rotate_x: -15.0,
            rotate_y: 0.0,
        },
        range: ScrollRange { start: 0.8, end: 0.5 },
        duration: 0.8,
        stagger: 0.1,
        scrub: 0.5,
        easing: Easing::PowerOut(3),
        hover: HoverSpec {
            rest: HoverPose {
                y: 0.0,
                shadow: "0 10px 25px rgba(0, 0, 0, 0.1)",
            },
            lifted: HoverPose {
                y: -10.0,
                shadow: "0 25px 50px rgba(69, 102, 255, 0.3)",
            },
            duration: 0.3,
            easing: Easing::PowerOut(2),
        },
    };

    pub const SERVICE: MotionPreset = MotionPreset {
        hidden: CardPose {
            opacity: 0.0,
            y: 60.0,
            rotate_x: 0.0,
            rotate_y: -10.0,
        },
        range: ScrollRange { start: 0.85, end: 0.55 },
        duration: 0.7,
        stagger: 0.08,
        scrub: 0.4,
        easing: Easing::PowerOut(3),
        hover: HoverSpec {
            rest: HoverPose {
                y: 0.0,
                shadow: "0 5px 15px rgba(0, 0, 0, 0.05)",
            },
            lifted: HoverPose {
                y: -8.0,
                shadow: "0 20px 40px rgba(69, 102, 255, 0.2)",
            },
            duration: 0.3,
            easing: Easing::PowerOut(2),
        },
    };

    pub fn entrance(&self, index: usize) -> EntranceSpec {
        EntranceSpec {
            from: self.hidden,
            to: CardPose::SETTLED,
            range: self.range,
            duration: self.duration,
            delay: self.stagger * index as f64,
            scrub: self.scrub,
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_progress_runs_from_start_to_end_of_range() {
        let range = MotionPreset::FEATURE.range;
        assert_eq!(range.progress(800.0, 1000.0), 0.0);
        assert_eq!(range.progress(500.0, 1000.0), 1.0);
        assert!((range.progress(650.0, 1000.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scroll_progress_is_clamped_and_monotone() {
        let range = MotionPreset::SERVICE.range;
        assert_eq!(range.progress(5000.0, 1000.0), 0.0);
        assert_eq!(range.progress(-5000.0, 1000.0), 1.0);

        let mut last = 0.0;
        for top in (0..=1000).rev().step_by(25) {
            let p = range.progress(top as f64, 1000.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn degenerate_range_is_a_step() {
        let range = ScrollRange { start: 0.5, end: 0.5 };
        assert_eq!(range.progress(501.0, 1000.0), 0.0);
        assert_eq!(range.progress(500.0, 1000.0), 1.0);
    }

    #[test]
    fn stagger_delay_strictly_increases_with_index() {
        for preset in [MotionPreset::FEATURE, MotionPreset::SERVICE] {
            let delays: Vec<f64> = (0..8).map(|i| preset.entrance(i).delay).collect();
            assert_eq!(delays[0], 0.0);
            for (i, pair) in delays.windows(2).enumerate() {
                assert!(pair[1] > pair[0]);
                assert!((pair[1] - preset.stagger * (i + 1) as f64).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn pose_runs_from_hidden_to_settled() {
        for preset in [MotionPreset::FEATURE, MotionPreset::SERVICE] {
            for index in [0, 3, 7] {
                let entrance = preset.entrance(index);
                assert_eq!(entrance.pose_at(0.0), preset.hidden);
                assert_eq!(entrance.pose_at(1.0), CardPose::SETTLED);
            }
        }
    }

    #[test]
    fn later_cards_trail_earlier_ones() {
        let first = MotionPreset::FEATURE.entrance(0);
        let sixth = MotionPreset::FEATURE.entrance(5);
        assert!(first.pose_at(0.4).opacity > sixth.pose_at(0.4).opacity);
    }

    #[test]
    fn hover_cycles_return_to_exact_rest_pose() {
        let hover = MotionPreset::FEATURE.hover;
        let mut state = HoverState::Resting;
        for _ in 0..5 {
            state = state.after(PointerEdge::Enter);
            assert_eq!(hover.target(state).y, -10.0);
            state = state.after(PointerEdge::Enter);
            assert_eq!(state, HoverState::Lifted);
            state = state.after(PointerEdge::Leave);
            assert_eq!(hover.target(state), hover.rest);
        }
        assert_eq!(hover.target(state).y, 0.0);
        assert_eq!(hover.target(state).shadow, "0 10px 25px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn transition_covers_both_animations() {
        let preset = MotionPreset::SERVICE;
        let css = transition_css(&preset.entrance(2), &preset.hover);
        assert_eq!(
            css,
            "opacity 0.4s linear, transform 0.4s linear, \
             translate 0.3s cubic-bezier(0.33, 1, 0.68, 1), \
             box-shadow 0.3s cubic-bezier(0.33, 1, 0.68, 1)"
        );
    }
}
