/// Values the entrance animation drives: opacity plus a translate/tilt transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub opacity: f64,
    pub y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CardPose {
    pub const SETTLED: CardPose = CardPose {
        opacity: 1.0,
        y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn lerp(&self, to: &CardPose, t: f64) -> CardPose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        CardPose {
            opacity: mix(self.opacity, to.opacity),
            y: mix(self.y, to.y),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translateY({:.2}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.y, self.rotate_x, self.rotate_y
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }
}

/// Values the hover animation drives. Written to `translate` and `box-shadow`
/// so they stack on top of whatever the entrance animation put in `transform`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverPose {
    pub y: f64,
    pub shadow: &'static str,
}

impl HoverPose {
    pub fn translate_css(&self) -> String {
        format!("0px {}px", self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDDEN: CardPose = CardPose {
        opacity: 0.0,
        y: 100.0,
        rotate_x: -15.0,
        rotate_y: 0.0,
    };

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(HIDDEN.lerp(&CardPose::SETTLED, 0.0), HIDDEN);
        assert_eq!(HIDDEN.lerp(&CardPose::SETTLED, 1.0), CardPose::SETTLED);
    }

    #[test]
    fn lerp_halfway() {
        let mid = HIDDEN.lerp(&CardPose::SETTLED, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 50.0);
        assert_eq!(mid.rotate_x, -7.5);
    }

    #[test]
    fn css_output() {
        assert_eq!(
            HIDDEN.transform_css(),
            "translateY(100.00px) rotateX(-15.00deg) rotateY(0.00deg)"
        );
        assert_eq!(CardPose::SETTLED.opacity_css(), "1.000");
        let lifted = HoverPose { y: -10.0, shadow: "none" };
        assert_eq!(lifted.translate_css(), "0px -10px");
    }
}
