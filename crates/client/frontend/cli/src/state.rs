//! UI-only state that the runtime does not track.
use game_core::{Screen, WithdrawalForm};

/// Direction for moving the amount cursor on the withdrawal screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// Highlighted cell in the amount grid, laid out row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmountCursor {
    index: usize,
}

impl AmountCursor {
    pub const COLUMNS: usize = 3;
    const LEN: usize = WithdrawalForm::AMOUNTS.len();

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn amount(&self) -> u64 {
        WithdrawalForm::AMOUNTS[self.index]
    }

    /// Moves within the grid. Edges clamp; there is no wrap-around.
    pub fn move_by(&mut self, movement: CursorMove) {
        let column = self.index % Self::COLUMNS;
        self.index = match movement {
            CursorMove::Left if column > 0 => self.index - 1,
            CursorMove::Right if column + 1 < Self::COLUMNS && self.index + 1 < Self::LEN => {
                self.index + 1
            }
            CursorMove::Up if self.index >= Self::COLUMNS => self.index - Self::COLUMNS,
            CursorMove::Down if self.index + Self::COLUMNS < Self::LEN => {
                self.index + Self::COLUMNS
            }
            _ => self.index,
        };
    }
}

/// Application state owned by the event loop.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub amount_cursor: AmountCursor,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entering the withdrawal screen starts with the cursor on the first amount.
    pub fn on_screen_changed(&mut self, to: Screen) {
        if to == Screen::Withdrawal {
            self.amount_cursor = AmountCursor::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_across_the_grid() {
        let mut cursor = AmountCursor::default();
        cursor.move_by(CursorMove::Right);
        cursor.move_by(CursorMove::Down);
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.amount(), 100_000);
    }

    #[test]
    fn cursor_clamps_at_edges() {
        let mut cursor = AmountCursor::default();
        cursor.move_by(CursorMove::Left);
        cursor.move_by(CursorMove::Up);
        assert_eq!(cursor.index(), 0);

        for _ in 0..5 {
            cursor.move_by(CursorMove::Right);
            cursor.move_by(CursorMove::Down);
        }
        assert_eq!(cursor.index(), 5);
        assert_eq!(cursor.amount(), 200_000);
    }

    #[test]
    fn entering_withdrawal_resets_cursor() {
        let mut state = AppState::new();
        state.amount_cursor.move_by(CursorMove::Down);
        state.on_screen_changed(Screen::Game);
        assert_eq!(state.amount_cursor.index(), 3);
        state.on_screen_changed(Screen::Withdrawal);
        assert_eq!(state.amount_cursor.index(), 0);
    }
}
