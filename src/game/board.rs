use super::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of pieces in a line needed to win
pub const CONNECT: usize = 4;

/// Step directions for runs: horizontal, vertical, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// A grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Occupant of a signed coordinate, `None` when empty or off the grid
    fn occupant(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        match self.get(row as usize, col as usize) {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols || self.rows == 0 {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        (0..self.rows)
            .filter(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = row * self.cols + col;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if the piece at (row, col) is part of a winning line
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line(row, col).is_some()
    }

    /// The full run of at least [`CONNECT`] same-player pieces passing
    /// through (row, col), ordered along its direction.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<Vec<Position>> {
        let (r, c) = (row as isize, col as isize);
        let player = self.occupant(r, c)?;

        for (dr, dc) in DIRECTIONS {
            let back = self.run_length(r, c, -dr, -dc, player);
            let forward = self.run_length(r, c, dr, dc, player);
            let len = back + 1 + forward;
            if len >= CONNECT {
                let (start_r, start_c) = (r - back as isize * dr, c - back as isize * dc);
                let line = (0..len as isize)
                    .map(|i| Position::new((start_r + i * dr) as usize, (start_c + i * dc) as usize))
                    .collect();
                return Some(line);
            }
        }

        None
    }

    /// Count consecutive `player` pieces stepping away from (row, col),
    /// not counting the starting cell.
    fn run_length(&self, row: isize, col: isize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row + dr, col + dc);
        while self.occupant(r, c) == Some(player) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Exhaustive check: does `player` own any line of [`CONNECT`] cells
    /// anywhere on the board.
    pub fn scan_for_win(&self, player: Player) -> bool {
        (0..self.rows as isize).any(|y| {
            (0..self.cols as isize).any(|x| {
                DIRECTIONS.iter().any(|&(dy, dx)| {
                    (0..CONNECT as isize).all(|i| self.occupant(y + i * dy, x + i * dx) == Some(player))
                })
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Player = Player::One;
    const YELLOW: Player = Player::Two;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, RED).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Occupied(RED));

        // Drop second piece in same column
        let row = board.drop_piece(3, YELLOW).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Occupied(YELLOW));
        assert_eq!(board.get(5, 3), Cell::Occupied(RED));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, RED).unwrap();
        }

        let before = board.clone();
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, YELLOW), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, RED), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
        assert_eq!(board.column_height(7), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..DEFAULT_COLS {
            for _ in 0..DEFAULT_ROWS {
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), DEFAULT_ROWS * DEFAULT_COLS);
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, RED).unwrap();
        }
        assert!(board.check_win(5, 2)); // Check middle of the line
        assert_eq!(
            board.winning_line(5, 2).unwrap(),
            (0..4).map(|c| Position::new(5, c)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, YELLOW).unwrap();
        }
        assert!(board.check_win(2, 3)); // Check the 4th piece
        assert_eq!(board.winning_line(2, 3).unwrap().len(), 4);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        board.drop_piece(0, RED).unwrap();

        board.drop_piece(1, YELLOW).unwrap();
        board.drop_piece(1, RED).unwrap();

        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        let row = board.drop_piece(3, RED).unwrap();

        assert!(board.check_win(row, 3));
        // Down-left direction: starts at the top-right end
        assert_eq!(
            board.winning_line(row, 3).unwrap(),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 1),
                Position::new(5, 0),
            ]
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Create diagonal \ pattern
        board.drop_piece(6, RED).unwrap();

        board.drop_piece(5, YELLOW).unwrap();
        board.drop_piece(5, RED).unwrap();

        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        let row = board.drop_piece(3, RED).unwrap();

        assert!(board.check_win(row, 3));
        assert_eq!(board.winning_line(row, 3).unwrap()[0], Position::new(2, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, RED).unwrap();
        }
        assert!(!board.check_win(5, 1)); // Only 3 in a row
        assert!(!board.scan_for_win(RED));
    }

    #[test]
    fn test_empty_cell_is_never_a_win() {
        let board = Board::default();
        assert!(!board.check_win(0, 0));
        assert!(board.winning_line(5, 6).is_none());
    }

    #[test]
    fn test_five_in_a_row_returns_whole_run() {
        let mut board = Board::default();
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, RED).unwrap();
        }
        board.drop_piece(2, RED).unwrap();
        let line = board.winning_line(5, 2).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&Position::new(5, 0)));
        assert_eq!(line.last(), Some(&Position::new(5, 4)));
    }

    #[test]
    fn test_line_of_other_player_is_not_a_win() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, RED).unwrap();
        }
        board.drop_piece(3, YELLOW).unwrap();
        assert!(!board.check_win(5, 3));
        assert!(!board.scan_for_win(RED));
        assert!(!board.scan_for_win(YELLOW));
    }

    #[test]
    fn test_scan_agrees_with_local_check() {
        let mut board = Board::default();
        let moves = [3, 3, 4, 4, 2, 5, 1];
        let mut player = RED;
        for col in moves {
            let row = board.drop_piece(col, player).unwrap();
            assert_eq!(board.check_win(row, col), board.scan_for_win(player));
            player = player.other();
        }
        assert!(board.scan_for_win(RED));
    }

    #[test]
    fn test_rectangular_board() {
        let mut board = Board::new(4, 9);
        assert_eq!(board.drop_piece(8, RED), Ok(3));
        assert_eq!(board.drop_piece(9, RED), Err(MoveError::InvalidColumn));
        for _ in 0..3 {
            board.drop_piece(8, RED).unwrap();
        }
        assert!(board.check_win(0, 8));
        assert!(board.is_column_full(8));
    }

    #[test]
    fn test_board_narrower_than_connect_never_wins() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.scan_for_win(RED));
        assert!(!board.check_win(0, 0));
    }
}
