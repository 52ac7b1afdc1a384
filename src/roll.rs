use rand::{thread_rng, Rng};

use crate::{die::DieType, error::DiceError};

/// Most dice a single request may roll.
pub const MAX_QUANTITY: u32 = 999;

/// Where the individual die values come from.
pub trait DrawSource {
    /// Draws a single value in `1..=faces`.
    fn draw(&mut self, faces: u32) -> u32;
}

impl<R: Rng + ?Sized> DrawSource for R {
    fn draw(&mut self, faces: u32) -> u32 {
        self.gen_range(1..=faces)
    }
}

/// Replays a fixed sequence of values, starting over once it runs out.
/// Values are clamped into the die's range, an empty script always draws 1.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, faces: u32) -> u32 {
        let Some(value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return 1;
        };
        self.cursor += 1;
        (*value).clamp(1, faces)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    die: DieType,
    count: u32,
}

impl RollRequest {
    /// Fails with `InvalidArgument` when `count` is 0 or above `MAX_QUANTITY`.
    pub fn new(die: DieType, count: u32) -> Result<Self, DiceError> {
        if count == 0 {
            return Err(DiceError::InvalidArgument(format!(
                "cannot roll zero {die} dice, the quantity must be at least 1"
            )));
        }
        if count > MAX_QUANTITY {
            return Err(DiceError::InvalidArgument(format!(
                "cannot roll {count} {die} dice, the quantity must be at most {MAX_QUANTITY}"
            )));
        }
        Ok(Self { die, count })
    }

    pub fn die(&self) -> DieType {
        self.die
    }
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Roll every die in the request.
    /// Uses rand::thread_rng(), if you want to choose the source yourself use `roll_with()`
    pub fn roll(&self) -> RollResult {
        self.roll_with(&mut thread_rng())
    }

    /// Roll every die in the request, drawing from `source` in order.
    pub fn roll_with(&self, source: &mut impl DrawSource) -> RollResult {
        let faces = self.die.faces();
        let rolls: Vec<u32> = (0..self.count).map(|_| source.draw(faces)).collect();
        RollResult::new(rolls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    rolls: Vec<u32>,
    total: u64,
}

impl RollResult {
    fn new(rolls: Vec<u32>) -> Self {
        let total = rolls.iter().map(|&r| r as u64).sum();
        Self { rolls, total }
    }

    /// Individual values in the order they were drawn.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{DrawSource, RollRequest, ScriptedDraws, MAX_QUANTITY};
    use crate::{die::DieType, error::DiceError};

    #[test]
    fn test_zero_count_is_rejected() {
        for die in DieType::ALL {
            assert!(matches!(
                RollRequest::new(die, 0),
                Err(DiceError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_quantity_limit() {
        let request = RollRequest::new(DieType::D20, MAX_QUANTITY).unwrap();
        let result = request.roll_with(&mut ScriptedDraws::new([20]));
        assert_eq!(result.rolls().len(), 999);
        assert_eq!(result.total(), 999 * 20);

        for count in [MAX_QUANTITY + 1, u32::MAX] {
            assert!(matches!(
                RollRequest::new(DieType::D20, count),
                Err(DiceError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_rolls_keep_draw_order() {
        let request = RollRequest::new(DieType::D6, 4).unwrap();
        let result = request.roll_with(&mut ScriptedDraws::new([6, 1, 5, 2]));

        assert_eq!(result.rolls(), [6, 1, 5, 2]);
        assert_eq!(result.total(), 14);
    }

    #[test]
    fn test_scripted_draws_cycle() {
        let mut draws = ScriptedDraws::new([3, 4]);
        let values: Vec<u32> = (0..5).map(|_| draws.draw(6)).collect();

        assert_eq!(values, [3, 4, 3, 4, 3]);
    }

    #[test]
    fn test_scripted_draws_are_clamped() {
        let mut draws = ScriptedDraws::new([0, 17]);

        assert_eq!(draws.draw(6), 1);
        assert_eq!(draws.draw(6), 6);
    }

    #[test]
    fn test_empty_script_draws_one() {
        let mut draws = ScriptedDraws::new([]);
        assert_eq!(draws.draw(20), 1);
        assert_eq!(draws.draw(20), 1);
    }

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for die in DieType::ALL {
            for _ in 0..500 {
                let value = rng.draw(die.faces());
                assert!((1..=die.faces()).contains(&value), "{die:?} drew {value}");
            }
        }
    }

    #[test]
    fn test_rng_reaches_both_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let values: Vec<u32> = (0..1000).map(|_| rng.draw(4)).collect();

        assert!(values.contains(&1));
        assert!(values.contains(&4));
    }
}
