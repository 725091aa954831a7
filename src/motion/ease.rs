//! Easing curves mapping linear progress in [0, 1] onto eased progress in [0, 1].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Cubic ease-out: 1 - (1-t)³
    Power2Out,
    /// Quartic ease-out: 1 - (1-t)⁴
    Power3Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Ease::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv
            }
        }
    }
}
