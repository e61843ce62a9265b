/// Ease-out power curves, named the way motion designers usually name them.
///
/// `PowerOut(n)` is `1 - (1 - t)^(n + 1)`, so `PowerOut(2)` is a cubic
/// ease-out and `PowerOut(3)` a quartic one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    PowerOut(u8),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut(power) => 1.0 - (1.0 - t).powi(i32::from(power) + 1),
        }
    }

    /// Closest CSS timing function, used for transitions the browser runs itself.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::PowerOut(0) => "linear",
            Easing::PowerOut(1) => "cubic-bezier(0.5, 1, 0.89, 1)",
            Easing::PowerOut(2) => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::PowerOut(3) => "cubic-bezier(0.25, 1, 0.5, 1)",
            Easing::PowerOut(_) => "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::PowerOut(2), Easing::PowerOut(3)] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_curves_lead_linear_in_the_middle() {
        assert!(Easing::PowerOut(2).apply(0.5) > 0.5);
        assert!(Easing::PowerOut(3).apply(0.5) > Easing::PowerOut(2).apply(0.5));
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Easing::PowerOut(3).apply(-2.0), 0.0);
        assert_eq!(Easing::PowerOut(3).apply(7.0), 1.0);
    }
}
