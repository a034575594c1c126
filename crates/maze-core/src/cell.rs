//! The [`CellState`] type: the semantic role of one maze cell.

use std::fmt;

/// State of a single maze cell.
///
/// `Visited` and `ShortestPath` are solution marks: they only appear after a
/// solve and are cleared again by regeneration or reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Wall,
    Path,
    Visited,
    ShortestPath,
    Start,
    End,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 6] = [
        CellState::Wall,
        CellState::Path,
        CellState::Visited,
        CellState::ShortestPath,
        CellState::Start,
        CellState::End,
    ];

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// Whether this state is produced by a solve.
    #[inline]
    pub const fn is_solution_mark(self) -> bool {
        matches!(self, CellState::Visited | CellState::ShortestPath)
    }

    /// Whether this state marks one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// One-character text form used by layouts and `Display`.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Path => '.',
            CellState::Visited => 'o',
            CellState::ShortestPath => '*',
            CellState::Start => 'S',
            CellState::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). A space also reads as `Path`.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellState::Wall),
            '.' | ' ' => Some(CellState::Path),
            'o' => Some(CellState::Visited),
            '*' => Some(CellState::ShortestPath),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Wall => "wall",
            CellState::Path => "path",
            CellState::Visited => "visited",
            CellState::ShortestPath => "shortest path",
            CellState::Start => "start",
            CellState::End => "end",
        };
        f.write_str(name)
    }
}
