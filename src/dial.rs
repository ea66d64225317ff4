use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{all_consuming, map, verify},
        error::Error,
        multi::{many0_count, many1_count, separated_list0},
        sequence::{delimited, tuple},
        Err, IResult,
    },
    static_assertions::const_assert,
    strum::{EnumCount, EnumIter},
};

/* The safe guarding the supply room has a dial with the numbers 0 through 99 arranged in a
circle, and an arrow that starts out pointing at 50. A rotation instruction is a direction ('L'
toward lower numbers, 'R' toward higher numbers) followed by a distance in clicks; the dial wraps
in both directions, so one click left from 0 lands on 99, and one click right from 99 lands on 0.

The combination document is a sequence of rotation instructions, one per line. The first password
method counts the rotations that leave the arrow resting on 0 once the whole rotation has been
applied. The second method counts every click that lands the arrow on 0, whether it happens
mid-rotation or at the end of one: a single R1000 from 50 passes 0 ten times on its own.

Both passwords are reported for a small built-in document and for the document supplied on
disk. */

pub const DIAL_NUMBER_COUNT: usize = 100_usize;

const INITIAL_POINTER_POSITION: u8 = 50_u8;

// Positions are stored as `u8`, and the pointer must start on the dial
const_assert!(DIAL_NUMBER_COUNT <= u8::MAX as usize + 1_usize);
const_assert!((INITIAL_POINTER_POSITION as usize) < DIAL_NUMBER_COUNT);

#[derive(Clone, Copy, EnumCount, EnumIter, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub enum Direction {
    Left,
    Right,
}

// `Direction::parse` below must cover every variant
const_assert!(Direction::COUNT == 2_usize);

impl Parse for Direction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((map(tag("L"), |_| Self::Left), map(tag("R"), |_| Self::Right)))(input)
    }
}

/// A single number on the dial and the positions of its two neighbors
///
/// # Invariants
///
/// * `value` equals the number's own position.
/// * `left` is one position lower, `right` one position higher, both wrapping modulo
///   `DIAL_NUMBER_COUNT`.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct DialNumber {
    value: u8,
    left: u8,
    right: u8,
}

const fn compute_dial_numbers() -> [DialNumber; DIAL_NUMBER_COUNT] {
    let mut dial_numbers: [DialNumber; DIAL_NUMBER_COUNT] = [DialNumber {
        value: 0_u8,
        left: 0_u8,
        right: 0_u8,
    }; DIAL_NUMBER_COUNT];
    let mut position: usize = 0_usize;

    while position < DIAL_NUMBER_COUNT {
        dial_numbers[position] = DialNumber {
            value: position as u8,
            left: ((position + DIAL_NUMBER_COUNT - 1_usize) % DIAL_NUMBER_COUNT) as u8,
            right: ((position + 1_usize) % DIAL_NUMBER_COUNT) as u8,
        };
        position += 1_usize;
    }

    dial_numbers
}

const DIAL_NUMBERS: [DialNumber; DIAL_NUMBER_COUNT] = compute_dial_numbers();

/// The full circle of dial numbers plus the position the arrow currently points at
#[cfg_attr(test, derive(Debug))]
struct Dial {
    pointer: u8,
    numbers: [DialNumber; DIAL_NUMBER_COUNT],
}

impl Dial {
    fn new() -> Self {
        Self {
            pointer: INITIAL_POINTER_POSITION,
            numbers: DIAL_NUMBERS,
        }
    }

    fn pointer_value(&self) -> u8 {
        self.numbers[self.pointer as usize].value
    }

    /// Applies one rotation instruction a single click at a time, returning how many clicks
    /// landed the pointer on 0
    ///
    /// The pointer state persists across calls. Every intermediate landing matters for the click
    /// password method, so this walks all `magnitude` neighbor steps rather than taking a modular
    /// shortcut.
    fn rotate(&mut self, instruction: Instruction) -> usize {
        let mut zero_clicks: usize = 0_usize;

        for _ in 0_i32..instruction.magnitude {
            let pointer_number: &DialNumber = &self.numbers[self.pointer as usize];

            self.pointer = match instruction.direction {
                Direction::Left => pointer_number.left,
                Direction::Right => pointer_number.right,
            };

            if self.numbers[self.pointer as usize].value == 0_u8 {
                zero_clicks += 1_usize;
            }
        }

        zero_clicks
    }
}

/// # Invariants
/// * `magnitude` is non-negative.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Instruction {
    direction: Direction,
    magnitude: i32,
}

impl Instruction {
    fn parse_magnitude<'i>(input: &'i str) -> IResult<&'i str, i32> {
        verify(parse_integer, |&magnitude| magnitude >= 0_i32)(input)
    }
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((Direction::parse, Self::parse_magnitude)),
            |(direction, magnitude)| Self {
                direction,
                magnitude,
            },
        )(input)
    }
}

/// The built-in combination document used for the "test" result lines
pub const TEST_INPUT_STR: &str = "\
    L68\n\
    L30\n\
    R48\n\
    L5\n\
    R60\n\
    L55\n\
    L1\n\
    L99\n\
    R14\n\
    L82\n";

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    /// Counts the instructions that leave the pointer resting on 0 after their last click
    pub fn zero_rest_count(&self) -> usize {
        let mut dial: Dial = Dial::new();

        self.0
            .iter()
            .filter(|&&instruction| {
                dial.rotate(instruction);

                dial.pointer_value() == 0_u8
            })
            .count()
    }

    /// Counts every click that lands the pointer on 0, end-of-instruction clicks included
    pub fn zero_click_count(&self) -> usize {
        let mut dial: Dial = Dial::new();

        self.0
            .iter()
            .map(|&instruction| dial.rotate(instruction))
            .sum()
    }
}

impl Parse for Solution {
    /// Parses one instruction per line. Blank lines are skipped entirely: runs of line endings
    /// count as a single separator, and leading or trailing line endings are consumed.
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            delimited(
                many0_count(line_ending),
                separated_list0(many1_count(line_ending), Instruction::parse),
                many0_count(line_ending),
            ),
            Self,
        )(input)
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    /// Any input left over after the last instruction (a stray direction byte, a malformed or
    /// negative magnitude, trailing garbage) fails the conversion
    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(all_consuming(Self::parse)(input)?.1)
    }
}
