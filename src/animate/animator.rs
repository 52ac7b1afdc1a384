use tracing::debug;

use super::{
    polygon::{Point, Polygon},
    settings::AnimationSettings,
};
use crate::{die::DieType, error::DiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    /// `frame` is the index of the next frame `tick()` will produce.
    Animating { frame: u32 },
}

/// One redraw of the die.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Animation sequence this frame belongs to.
    pub generation: u64,
    pub index: u32,
    pub points: Vec<Point>,
    /// Roll total, only set on the last frame of a sequence.
    pub label: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
struct Sequence {
    polygon: Polygon,
    total: u64,
}

/// Drives the rotating-die animation one frame at a time.
///
/// The animator never sleeps: whoever owns the timer calls `tick()` once per
/// `frame_delay`. Starting a new sequence while one is still running throws
/// the old one away and begins again from frame 0 under a new generation.
#[derive(Debug, Clone)]
pub struct Animator {
    settings: AnimationSettings,
    state: AnimationState,
    generation: u64,
    sequence: Option<Sequence>,
}

impl Animator {
    pub fn new(settings: AnimationSettings) -> Result<Self, DiceError> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: AnimationState::Idle,
            generation: 0,
            sequence: None,
        })
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }
    pub fn state(&self) -> AnimationState {
        self.state
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Starts animating `die`, returning the generation of the new sequence.
    pub fn start(&mut self, die: DieType, total: u64) -> Result<u64, DiceError> {
        let polygon = Polygon::new(
            die.display_sides(),
            self.settings.center,
            self.settings.radius,
        )?;

        if let AnimationState::Animating { frame } = self.state {
            debug!(
                generation = self.generation,
                frame, "cancelling unfinished animation"
            );
        }

        self.generation += 1;
        self.sequence = Some(Sequence { polygon, total });
        self.state = AnimationState::Animating { frame: 0 };
        debug!(generation = self.generation, %die, "animation started");

        Ok(self.generation)
    }

    /// Produces the next frame, or `None` when idle.
    pub fn tick(&mut self) -> Option<Frame> {
        let AnimationState::Animating { frame } = self.state else {
            return None;
        };
        let sequence = self.sequence?;

        let is_last = frame + 1 >= self.settings.frames;
        let phase = frame as f64 * self.settings.phase_step;

        self.state = if is_last {
            debug!(generation = self.generation, "animation finished");
            AnimationState::Idle
        } else {
            AnimationState::Animating { frame: frame + 1 }
        };

        Some(Frame {
            generation: self.generation,
            index: frame,
            points: sequence.polygon.vertices(phase),
            label: is_last.then_some(sequence.total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationState, Animator};
    use crate::{animate::settings::AnimationSettings, die::DieType};

    fn animator(frames: u32) -> Animator {
        Animator::new(AnimationSettings {
            frames,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_idle_until_started() {
        let mut animator = animator(20);

        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn test_runs_every_frame_then_idles() {
        let mut animator = animator(20);
        let generation = animator.start(DieType::D20, 17).unwrap();

        let mut frames = Vec::new();
        while let Some(frame) = animator.tick() {
            frames.push(frame);
        }

        assert_eq!(frames.len(), 20);
        assert!(frames.iter().all(|f| f.generation == generation));
        assert!(frames.iter().all(|f| f.points.len() == 6));
        let indices: Vec<u32> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, (0..20).collect::<Vec<_>>());
        assert!(frames[..19].iter().all(|f| f.label.is_none()));
        assert_eq!(frames[19].label, Some(17));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_frames_rotate_by_phase_step() {
        let mut animator = animator(3);
        animator.start(DieType::D4, 1).unwrap();

        let first = animator.tick().unwrap();
        let second = animator.tick().unwrap();

        let center = animator.settings().center;
        let angle = |p: &super::Point| (p.y - center.y).atan2(p.x - center.x);
        let delta = angle(&second.points[0]) - angle(&first.points[0]);

        assert!((delta - 0.2).abs() < 1e-9, "{delta}");
    }

    #[test]
    fn test_restart_mid_animation() {
        let mut animator = animator(20);
        let first = animator.start(DieType::D6, 4).unwrap();
        for _ in 0..5 {
            animator.tick();
        }
        assert_eq!(animator.state(), AnimationState::Animating { frame: 5 });

        let second = animator.start(DieType::D10, 9).unwrap();
        assert!(second > first);

        let frame = animator.tick().unwrap();
        assert_eq!(frame.generation, second);
        assert_eq!(frame.index, 0);
        assert_eq!(frame.points.len(), 10);
    }

    #[test]
    fn test_single_frame_animation_carries_label() {
        let mut animator = animator(1);
        animator.start(DieType::D8, 3).unwrap();

        let frame = animator.tick().unwrap();
        assert_eq!(frame.label, Some(3));
        assert_eq!(animator.tick(), None);
    }
}
