//! Decorative fruit board.
//!
//! The board has no gameplay: it is sampled once when the game screen is
//! created and only ever replaced wholesale by a fresh sample.
use rand::Rng;
use strum::IntoEnumIterator;

use crate::config::GameConfig;

/// Symbols that can appear on the board.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Fruit {
    Apple,
    Orange,
    Lemon,
    Watermelon,
    Grapes,
    Strawberry,
    Cherries,
    Pineapple,
}

impl Fruit {
    /// Emoji used by frontends that can render wide glyphs.
    pub const fn emoji(self) -> &'static str {
        match self {
            Fruit::Apple => "🍎",
            Fruit::Orange => "🍊",
            Fruit::Lemon => "🍋",
            Fruit::Watermelon => "🍉",
            Fruit::Grapes => "🍇",
            Fruit::Strawberry => "🍓",
            Fruit::Cherries => "🍒",
            Fruit::Pineapple => "🍍",
        }
    }

    /// Single-column fallback glyph.
    pub const fn letter(self) -> char {
        match self {
            Fruit::Apple => 'A',
            Fruit::Orange => 'O',
            Fruit::Lemon => 'L',
            Fruit::Watermelon => 'W',
            Fruit::Grapes => 'G',
            Fruit::Strawberry => 'S',
            Fruit::Cherries => 'C',
            Fruit::Pineapple => 'P',
        }
    }

    /// Draws one fruit uniformly.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        use strum::EnumCount;
        let index = rng.random_range(0..Self::COUNT);
        Self::iter().nth(index).unwrap_or(Fruit::Apple)
    }
}

const SIZE: usize = GameConfig::BOARD_SIZE;

/// Square grid of fruits, indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Fruit; SIZE]; SIZE],
}

impl Board {
    pub const SIZE: usize = SIZE;

    /// Samples every cell independently from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [[Fruit::Apple; SIZE]; SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Fruit::sample(rng);
            }
        }
        Self { cells }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Fruit> {
        self.cells.get(row)?.get(column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Fruit; SIZE]> {
        self.cells.iter()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Fruit> + '_ {
        self.cells.iter().flatten().copied()
    }
}
