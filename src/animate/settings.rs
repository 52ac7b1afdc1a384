use std::time::Duration;

use super::polygon::Point;
use crate::error::DiceError;

/// Width and height of the drawing surface in logical units.
pub const CANVAS_SIZE: f64 = 200.0;

const FRAMES: u32 = 20;
const PHASE_STEP: f64 = 0.2;
const FRAME_DELAY: Duration = Duration::from_millis(50);
const RADIUS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Frames drawn per roll, the last one shows the total.
    pub frames: u32,
    /// Rotation added between two frames, in radians.
    pub phase_step: f64,
    /// How long the front end waits before asking for the next frame.
    pub frame_delay: Duration,
    pub center: Point,
    pub radius: f64,
}

impl AnimationSettings {
    pub fn validate(&self) -> Result<(), DiceError> {
        if self.frames == 0 {
            return Err(DiceError::InvalidArgument(
                "an animation needs at least one frame".to_owned(),
            ));
        }
        if !self.phase_step.is_finite() {
            return Err(DiceError::InvalidArgument(format!(
                "phase step must be finite, got {}",
                self.phase_step
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(DiceError::InvalidArgument(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(DiceError::InvalidArgument(format!(
                "center must be a finite point, got {:?}",
                self.center
            )));
        }
        Ok(())
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: FRAMES,
            phase_step: PHASE_STEP,
            frame_delay: FRAME_DELAY,
            center: Point::new(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0),
            radius: RADIUS,
        }
    }
}
