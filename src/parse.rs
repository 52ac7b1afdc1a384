use winnow::{
    ascii::{digit1, multispace0, Caseless},
    combinator::{alt, delimited, eof, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::Description,
    },
    PResult, Parser,
};

use crate::{die::DieType, error::DiceError};

/// Parses one of the preset die codes (`d4` ... `d20`), ignoring case and
/// surrounding whitespace.
pub fn die_type(text: &str) -> Result<DieType, DiceError> {
    die_code
        .parse(text)
        .map_err(|_| DiceError::UnknownDie(text.trim().to_owned()))
}

/// Parses the raw quantity text typed by the user.
/// Zero parses fine here, it's rejected when the roll request is built.
pub fn quantity(text: &str) -> Result<u32, DiceError> {
    quantity_number
        .parse(text)
        .map_err(|e| DiceError::InvalidQuantity {
            input: text.to_owned(),
            reason: e.inner().to_string(),
        })
}

fn die_code(input: &mut &str) -> PResult<DieType> {
    // Two digit codes first so `d1` never gets a chance to match half of `d10`.
    delimited(
        multispace0,
        alt((
            Caseless("d10").value(DieType::D10),
            Caseless("d12").value(DieType::D12),
            Caseless("d20").value(DieType::D20),
            Caseless("d4").value(DieType::D4),
            Caseless("d6").value(DieType::D6),
            Caseless("d8").value(DieType::D8),
        )),
        multispace0,
    )
    .context(Label("die type"))
    .parse_next(input)
}

// Leading zeros are fine, `05` is five dice. Trailing text fails on `eof`
// inside the labelled parser so the error always carries a reason.
fn quantity_number(input: &mut &str) -> PResult<u32> {
    terminated(
        delimited(
            multispace0,
            digit1.try_map(str::parse::<u32>),
            multispace0,
        ),
        eof,
    )
    .context(Label("dice quantity"))
    .context(Expected(Description("a whole number of dice")))
    .parse_next(input)
}
