//! Roll preset dice, animate the rolled die and keep a history of every roll.
//!
//! ```rust
//! # use dice_tray::{roll, roll_with, format_log_line, DieType, ScriptedDraws};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), dice_tray::DiceError> {
//! // Roll 3 d6 with the thread rng.
//! let rolled = roll(DieType::D6, 3)?;
//! println!("{:?} = {}", rolled.rolls(), rolled.total());
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with(DieType::D20, 2, &mut rng)?;
//! assert_eq!(rolled.rolls().len(), 2);
//!
//! // Or replay fixed values
//! let rolled = roll_with(DieType::D4, 3, &mut ScriptedDraws::new([1, 4, 2]))?;
//! assert_eq!(
//!     format_log_line(DieType::D4, 3, rolled.rolls(), rolled.total()),
//!     "Rolled 3d4: 1+4+2 = 7\n"
//! );
//! # Ok(())
//! # }
//! ```

mod animate;
mod app;
mod canvas;
mod die;
mod error;
mod history;
mod parse;
mod roll;

pub use animate::{
    compute_frame, AnimationSettings, AnimationState, Animator, Frame, Point, Polygon, CANVAS_SIZE,
};
pub use app::{App, RollOutcome};
pub use canvas::TextCanvas;
pub use die::DieType;
pub use error::{DiceError, Result};
pub use history::{format_log_line, RollLog};
pub use parse::{die_type as parse_die_type, quantity as parse_quantity};
pub use roll::{DrawSource, RollRequest, RollResult, ScriptedDraws, MAX_QUANTITY};

/// Rolls `count` dice of type `die` using the thread rng.
pub fn roll(die: DieType, count: u32) -> Result<RollResult> {
    Ok(RollRequest::new(die, count)?.roll())
}

/// Same as `roll()` but allows you to choose where the values come from.
pub fn roll_with(die: DieType, count: u32, source: &mut impl DrawSource) -> Result<RollResult> {
    Ok(RollRequest::new(die, count)?.roll_with(source))
}
