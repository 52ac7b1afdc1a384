use rand::{rngs::ThreadRng, thread_rng};
use tracing::{info, warn};

use crate::{
    animate::{AnimationSettings, Animator, Frame},
    die::DieType,
    error::DiceError,
    history::{format_log_line, RollLog},
    parse,
    roll::{DrawSource, RollRequest, RollResult},
};

const DEFAULT_QUANTITY: &str = "1";

/// What a successful press of the roll button produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub request: RollRequest,
    pub result: RollResult,
    /// Animation sequence started for this roll.
    pub generation: u64,
}

/// Everything the dice window keeps between user actions.
#[derive(Debug)]
pub struct App<S> {
    source: S,
    selected: DieType,
    quantity_text: String,
    log: RollLog,
    animator: Animator,
}

impl App<ThreadRng> {
    pub fn new(settings: AnimationSettings) -> Result<Self, DiceError> {
        Self::with_source(thread_rng(), settings)
    }
}

impl<S: DrawSource> App<S> {
    pub fn with_source(source: S, settings: AnimationSettings) -> Result<Self, DiceError> {
        Ok(Self {
            source,
            selected: DieType::default(),
            quantity_text: DEFAULT_QUANTITY.to_owned(),
            log: RollLog::new(),
            animator: Animator::new(settings)?,
        })
    }

    pub fn selected(&self) -> DieType {
        self.selected
    }
    pub fn quantity_text(&self) -> &str {
        &self.quantity_text
    }
    pub fn log(&self) -> &RollLog {
        &self.log
    }
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn select_die(&mut self, die: DieType) {
        self.selected = die;
    }

    /// Stores the raw text of the quantity field, it's only parsed on roll.
    pub fn set_quantity_text(&mut self, text: impl Into<String>) {
        self.quantity_text = text.into();
    }

    /// Rolls the selected die, logs the result and (re)starts the animation.
    /// Nothing changes if the quantity text is not a positive number.
    pub fn roll(&mut self) -> Result<RollOutcome, DiceError> {
        let request = parse::quantity(&self.quantity_text)
            .and_then(|count| RollRequest::new(self.selected, count))
            .inspect_err(|e| warn!("roll rejected: {e}"))?;

        let result = request.roll_with(&mut self.source);
        let generation = self.animator.start(request.die(), result.total())?;

        self.log.append(format_log_line(
            request.die(),
            request.count(),
            result.rolls(),
            result.total(),
        ));
        info!(
            die = %request.die(),
            count = request.count(),
            total = result.total(),
            "rolled"
        );

        Ok(RollOutcome {
            request,
            result,
            generation,
        })
    }

    /// Next animation frame to draw, `None` once the die has stopped.
    pub fn tick(&mut self) -> Option<Frame> {
        self.animator.tick()
    }
}
