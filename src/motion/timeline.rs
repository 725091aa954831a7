//! Time-driven sequences: stages of staggered tweens laid out on one clock.
//!
//! A stage is placed either at an absolute time or relative to the end of
//! everything placed so far (`"-=0.4"` style overlaps). Stages whose targets
//! are missing are never placed, so later relative stages close the gap.

use super::ease::Ease;
use super::pose::{Pose, Tween};
use super::Frame;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    At(f64),
    /// Offset from the current end of the sequence; negative overlaps.
    AfterEnd(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSpec {
    pub name: &'static str,
    pub tween: Tween,
    pub duration: f64,
    pub stagger: f64,
    pub position: Position,
}

impl StageSpec {
    /// A `from` stage: targets start in `from` and settle into their natural pose.
    pub fn entering(name: &'static str, from: Pose, ease: Ease, duration: f64) -> Self {
        Self {
            name,
            tween: Tween::from_pose(from, ease),
            duration,
            stagger: 0.0,
            position: Position::AfterEnd(0.0),
        }
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStage {
    pub spec: StageSpec,
    pub start: f64,
    pub targets: usize,
}

impl PlacedStage {
    pub fn target_start(&self, index: usize) -> f64 {
        self.start + self.spec.stagger * index as f64
    }

    pub fn end(&self) -> f64 {
        let last = self.targets.saturating_sub(1);
        self.target_start(last) + self.spec.duration
    }

    /// Pose of target `index` at sequence time `t` (seconds).
    pub fn pose_at(&self, index: usize, t: f64) -> Pose {
        let local = if self.spec.duration <= 0.0 {
            if t >= self.target_start(index) { 1.0 } else { 0.0 }
        } else {
            (t - self.target_start(index)) / self.spec.duration
        };
        self.spec.tween.sample(local)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    stages: Vec<PlacedStage>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end(&self) -> f64 {
        self.stages.iter().map(PlacedStage::end).fold(0.0, f64::max)
    }

    /// Places a stage over `targets` elements and returns its index.
    /// Returns `None` for an empty target group; nothing is placed.
    pub fn place(&mut self, spec: StageSpec, targets: usize) -> Option<usize> {
        if targets == 0 {
            return None;
        }
        let start = match spec.position {
            Position::At(t) => t,
            Position::AfterEnd(offset) => self.end() + offset,
        }
        .max(0.0);
        self.stages.push(PlacedStage { spec, start, targets });
        Some(self.stages.len() - 1)
    }

    pub fn stage(&self, index: usize) -> Option<&PlacedStage> {
        self.stages.get(index)
    }

    pub fn stages(&self) -> &[PlacedStage] {
        &self.stages
    }
}

/// Turns frame timestamps (milliseconds) into sequence time. The first frame
/// seen is time zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceClock {
    origin: Option<f64>,
    end: f64,
}

impl EntranceClock {
    pub fn new(end: f64) -> Self {
        Self { origin: None, end }
    }

    /// Sequence time for this frame and whether another frame is needed.
    pub fn tick(&mut self, timestamp: f64) -> (f64, Frame) {
        let origin = *self.origin.get_or_insert(timestamp);
        let t = ((timestamp - origin) / 1000.0).max(0.0);
        let next = if t >= self.end { Frame::Idle } else { Frame::Continue };
        (t, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(name: &'static str) -> StageSpec {
        StageSpec::entering(name, Pose::NATURAL.with_opacity(0.0), Ease::Power3Out, 0.8)
    }

    #[test]
    fn test_empty_group_is_not_placed() {
        let mut seq = Sequence::new();
        assert_eq!(seq.place(fade("chars"), 0), None);
        assert!(seq.stages().is_empty());
        assert_eq!(seq.end(), 0.0);
    }

    #[test]
    fn test_stagger_extends_end() {
        let mut seq = Sequence::new();
        seq.place(fade("chars").stagger(0.1), 5);
        assert!((seq.end() - 1.2).abs() < 1e-9);
        let stage = seq.stage(0).unwrap();
        assert!((stage.target_start(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_relative_overlap() {
        let mut seq = Sequence::new();
        seq.place(fade("a"), 1);
        seq.place(fade("b").at(Position::AfterEnd(-0.4)), 1);
        assert!((seq.stage(1).unwrap().start - 0.4).abs() < 1e-9);
        assert!((seq.end() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_relative_start_never_negative() {
        let mut seq = Sequence::new();
        seq.place(fade("b").at(Position::AfterEnd(-0.4)), 2);
        assert_eq!(seq.stage(0).unwrap().start, 0.0);
    }

    #[test]
    fn test_pose_before_during_after() {
        let mut seq = Sequence::new();
        seq.place(fade("a").at(Position::At(1.0)), 1);
        let stage = seq.stage(0).unwrap();
        assert_eq!(stage.pose_at(0, 0.0).opacity, 0.0);
        assert!((stage.pose_at(0, 1.4).opacity - 0.9375).abs() < 1e-9);
        assert_eq!(stage.pose_at(0, 5.0), Pose::NATURAL);
        assert!((seq.end() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut spec = fade("instant");
        spec.duration = 0.0;
        let mut seq = Sequence::new();
        seq.place(spec, 1);
        let stage = seq.stage(0).unwrap();
        assert_eq!(stage.pose_at(0, -0.1).opacity, 0.0);
        assert_eq!(stage.pose_at(0, 0.0), Pose::NATURAL);
    }

    #[test]
    fn test_clock_starts_at_first_frame() {
        let mut clock = EntranceClock::new(1.2);
        assert_eq!(clock.tick(5000.0), (0.0, Frame::Continue));
        let (t, next) = clock.tick(5600.0);
        assert!((t - 0.6).abs() < 1e-9);
        assert_eq!(next, Frame::Continue);
    }

    #[test]
    fn test_clock_goes_idle_at_end() {
        let mut seq = Sequence::new();
        seq.place(fade("a"), 1);
        let mut clock = EntranceClock::new(seq.end());
        clock.tick(0.0);
        assert_eq!(clock.tick(799.0).1, Frame::Continue);
        let (t, next) = clock.tick(800.0);
        assert!(t >= seq.end());
        assert_eq!(next, Frame::Idle);
    }

    #[test]
    fn test_clock_ignores_timestamps_before_origin() {
        let mut clock = EntranceClock::new(1.0);
        clock.tick(2000.0);
        assert_eq!(clock.tick(1500.0), (0.0, Frame::Continue));
    }

    #[test]
    fn test_empty_sequence_clock_is_idle_immediately() {
        let mut clock = EntranceClock::new(Sequence::new().end());
        assert_eq!(clock.tick(10.0), (0.0, Frame::Idle));
    }
}
