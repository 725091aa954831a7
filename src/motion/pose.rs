use super::ease::Ease;

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// The visual properties the motion layer drives on an element.
///
/// Percent offsets are relative to the element's own box, `y_px` is an
/// absolute vertical nudge, `rotate` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x_percent: f64,
    pub y_percent: f64,
    pub y_px: f64,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl Pose {
    /// An element as laid out, untouched by any tween.
    pub const NATURAL: Pose = Pose {
        x_percent: 0.0,
        y_percent: 0.0,
        y_px: 0.0,
        scale: 1.0,
        rotate: 0.0,
        opacity: 1.0,
    };

    pub const fn with_y_percent(mut self, y_percent: f64) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub const fn with_y_px(mut self, y_px: f64) -> Self {
        self.y_px = y_px;
        self
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        Pose {
            x_percent: lerp(self.x_percent, to.x_percent, t),
            y_percent: lerp(self.y_percent, to.y_percent, t),
            y_px: lerp(self.y_px, to.y_px, t),
            scale: lerp(self.scale, to.scale, t),
            rotate: lerp(self.rotate, to.rotate, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.3}%, {:.3}%) translateY({:.3}px) rotate({:.3}deg) scale({:.4})",
            self.x_percent, self.y_percent, self.y_px, self.rotate, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }

    /// Full inline style, used when markup has to start out in a pose
    /// before the motion layer has bound to it.
    pub fn inline_style(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform_css(), self.opacity_css())
    }
}

/// A from/to interpolation between two poses under one easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub ease: Ease,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose, ease: Ease) -> Self {
        Self { from, to, ease }
    }

    /// Animates from `from` back to the element's natural pose.
    pub const fn from_pose(from: Pose, ease: Ease) -> Self {
        Self::new(from, Pose::NATURAL, ease)
    }

    /// Animates from the natural pose to `to`.
    pub const fn to_pose(to: Pose, ease: Ease) -> Self {
        Self::new(Pose::NATURAL, to, ease)
    }

    pub fn sample(&self, t: f64) -> Pose {
        self.from.lerp(&self.to, self.ease.apply(t))
    }
}
