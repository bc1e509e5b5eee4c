use crate::error::{FormatError, GridError, Result};
use log::info;
use std::fmt;
use std::path::Path;

/// A cell coordinate: `row` is the line index, `col` the character index.
///
/// The derived `Ord` compares row first, then column; frontier tie-breaking
/// relies on this order, so the field order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Wall,
    Start,
    Goal,
}

impl Cell {
    fn from_symbol(c: char) -> Cell {
        match c {
            '#' => Cell::Wall,
            'S' => Cell::Start,
            'G' => Cell::Goal,
            _ => Cell::Free,
        }
    }
}

/// One of the four unit moves. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    West,
    East,
}

impl Action {
    /// Fixed enumeration order used everywhere neighbors are generated.
    /// Stable ordering keeps tie-breaking reproducible across runs.
    pub const ALL: [Action; 4] = [Action::North, Action::South, Action::West, Action::East];

    /// Row/column displacement of this action.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::West => (0, -1),
            Action::East => (0, 1),
        }
    }
}

/// An immutable rectangular maze. Owns no per-search state; all queries
/// take `&self`, so concurrent searches over one grid need no locking.
#[derive(Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Reads a maze file and parses it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let grid = Grid::parse(&text)?;
        info!(
            "loaded {}x{} maze from {} (start {}, goal {})",
            grid.height,
            grid.width,
            path.as_ref().display(),
            grid.start,
            grid.goal
        );
        Ok(grid)
    }

    /// Parses line-oriented maze text: `#` = wall, `S` = start (exactly one),
    /// `G` = goal (exactly one), anything else = free. All rows must share
    /// the same width.
    pub fn parse(text: &str) -> std::result::Result<Grid, FormatError> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in text.lines().enumerate() {
            let cell_row: Vec<Cell> = line.chars().map(Cell::from_symbol).collect();
            if let Some(first) = cells.first() {
                if cell_row.len() != first.len() {
                    return Err(FormatError::RaggedRow {
                        row,
                        expected: first.len(),
                        found: cell_row.len(),
                    });
                }
            }
            for (col, cell) in cell_row.iter().enumerate() {
                let pos = Position::new(row, col);
                match cell {
                    Cell::Start => {
                        if start.replace(pos).is_some() {
                            return Err(FormatError::DuplicateStart(pos));
                        }
                    }
                    Cell::Goal => {
                        if goal.replace(pos).is_some() {
                            return Err(FormatError::DuplicateGoal(pos));
                        }
                    }
                    _ => {}
                }
            }
            cells.push(cell_row);
        }

        if cells.is_empty() || cells[0].is_empty() {
            return Err(FormatError::Empty);
        }

        Ok(Grid {
            height: cells.len(),
            width: cells[0].len(),
            cells,
            start: start.ok_or(FormatError::MissingStart)?,
            goal: goal.ok_or(FormatError::MissingGoal)?,
        })
    }

    /// Builds a grid from a prepared cell matrix. Unlike [`parse`](Self::parse),
    /// the endpoints are given explicitly and may coincide (a maze whose start
    /// is already the goal).
    pub fn from_cells(
        cells: Vec<Vec<Cell>>,
        start: Position,
        goal: Position,
    ) -> std::result::Result<Grid, FormatError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(FormatError::Empty);
        }
        let width = cells[0].len();
        for (row, cell_row) in cells.iter().enumerate() {
            if cell_row.len() != width {
                return Err(FormatError::RaggedRow {
                    row,
                    expected: width,
                    found: cell_row.len(),
                });
            }
        }
        let grid = Grid {
            height: cells.len(),
            width,
            cells,
            start,
            goal,
        };
        for endpoint in [start, goal] {
            if !grid.in_bounds(endpoint) || !grid.passable(endpoint) {
                return Err(FormatError::BlockedEndpoint(endpoint));
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Whether `pos` can be occupied. Out-of-bounds positions are not
    /// passable.
    pub fn passable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] != Cell::Wall
    }

    pub fn is_goal(&self, pos: Position) -> bool {
        pos == self.goal
    }

    /// Destination of `action` from `pos`, or `None` if it leaves the grid
    /// or lands on a wall.
    fn offset(&self, pos: Position, action: Action) -> Option<Position> {
        let (dr, dc) = action.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        if self.in_bounds(next) && self.passable(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Legal actions from `pos`, in the fixed [`Action::ALL`] order.
    pub fn legal_actions(&self, pos: Position) -> Vec<Action> {
        self.successors(pos).into_iter().map(|(a, _)| a).collect()
    }

    /// Legal actions paired with their destinations, in the fixed order.
    /// This is the form the search strategies consume.
    pub fn successors(&self, pos: Position) -> Vec<(Action, Position)> {
        Action::ALL
            .iter()
            .filter_map(|&a| self.offset(pos, a).map(|next| (a, next)))
            .collect()
    }

    /// Applies `action` at `pos`, failing with [`GridError::InvalidMove`] if
    /// the destination is out of bounds or impassable. Callers are expected
    /// to only apply actions returned by [`legal_actions`](Self::legal_actions).
    pub fn apply(&self, pos: Position, action: Action) -> Result<Position> {
        self.offset(pos, action)
            .ok_or(GridError::InvalidMove { from: pos, action })
    }

    /// Cost of one legal move. Constant for now; kept as a hook so an
    /// alternative cost model can be substituted without touching strategies.
    pub fn step_cost(&self, _from: Position, _action: Action, _to: Position) -> f64 {
        1.0
    }

    /// Renders the maze, optionally overlaying a path with `*` markers.
    pub fn render(&self, path: Option<&[Position]>) -> String {
        let mut out = String::new();
        for (row, cell_row) in self.cells.iter().enumerate() {
            for (col, cell) in cell_row.iter().enumerate() {
                let pos = Position::new(row, col);
                let on_path = path.map(|p| p.contains(&pos)).unwrap_or(false);
                let symbol = if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if on_path {
                    '*'
                } else {
                    match cell {
                        Cell::Wall => '#',
                        _ => '.',
                    }
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
