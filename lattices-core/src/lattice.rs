//! # Pitch Lattice Module
//!
//! Coordinates on the 5-limit just-intonation lattice. The `x` axis counts
//! perfect fifths (factor 3) and the `y` axis counts major thirds (factor 5),
//! both measured from the origin note.

use crate::settings::{Mode, RootNote};
use std::fmt;

/// Fifth indices of the twelve pitch classes, flat side first.
const FIFTHS: std::ops::RangeInclusive<i32> = -5..=6;

/// A point on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Semitones above the origin, folded into one octave.
    pub fn pitch_class(self) -> usize {
        (7 * i64::from(self.x) + 4 * i64::from(self.y)).rem_euclid(12) as usize
    }

    /// Note name relative to a root, e.g. "E" for (0, 1) over C.
    pub fn note_name(self, root: RootNote) -> &'static str {
        root.transpose(self.pitch_class() as i32).name()
    }

    /// Exact octave-reduced ratio, or `None` when it does not fit in `u64`.
    pub fn ratio(self) -> Option<Ratio> {
        Ratio::from_coord(self)
    }

    /// Octave-reduced ratio as a float, in `[1, 2)`. Works for any coordinate.
    pub fn reduced_ratio(self) -> f64 {
        2f64.powf(self.octave_position())
    }

    /// Size of the interval above the origin in cents, in `[0, 1200)`.
    pub fn cents(self) -> f64 {
        1200.0 * self.octave_position()
    }

    /// Fractional part of `log2(3^x * 5^y)`.
    fn octave_position(self) -> f64 {
        let log2 = self.x as f64 * 3f64.log2() + self.y as f64 * 5f64.log2();
        (log2 - log2.floor()).clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// Neighbours one step apart along a single axis.
    pub fn is_adjacent(self, other: Coord) -> bool {
        (i64::from(self.x) - i64::from(other.x)).abs() + (i64::from(self.y) - i64::from(other.y)).abs() == 1
    }
}

/// An octave-reduced frequency ratio `3^x * 5^y`, in `[1, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub numerator: u64,
    pub denominator: u64,
}

impl Ratio {
    fn from_coord(coord: Coord) -> Option<Self> {
        let mut numerator = odd_part(coord.x.max(0), coord.y.max(0))?;
        let mut denominator = odd_part(coord.x.saturating_neg().max(0), coord.y.saturating_neg().max(0))?;

        // Both sides are odd here, so octave reduction keeps the fraction in lowest terms.
        while numerator / 2 >= denominator {
            denominator = denominator.checked_mul(2)?;
        }
        while numerator < denominator {
            numerator = numerator.checked_mul(2)?;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// `3^threes * 5^fives`, if it fits.
fn odd_part(threes: i32, fives: i32) -> Option<u64> {
    3u64.checked_pow(u32::try_from(threes).ok()?)?
        .checked_mul(5u64.checked_pow(u32::try_from(fives).ok()?)?)
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The twelve lattice points a mode assigns to the chromatic pitch classes.
pub fn lattice_for_mode(mode: Mode) -> Vec<Coord> {
    FIFTHS
        .map(|fifth| {
            let third = match mode {
                Mode::Pythagorean => 0,
                Mode::Syntonic => (fifth as f64 / 4.0).round() as i32,
                Mode::Duodene => (fifth + 1).div_euclid(4),
            };
            // Four fifths up and one third down differ by a syntonic comma,
            // so the pitch class is unchanged.
            Coord::new(fifth - 4 * third, third)
        })
        .collect()
}

/// Index pairs of coordinates that should be joined by a line on the lattice.
pub fn edges(coords: &[Coord]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for (i, a) in coords.iter().enumerate() {
        for (j, b) in coords.iter().enumerate().skip(i + 1) {
            if a.is_adjacent(*b) {
                edges.push((i, j));
            }
        }
    }
    edges
}
