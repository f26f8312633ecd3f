//! Closed enums used to dispatch grid operations.

use std::str::FromStr;

use crate::error::GridError;

/// Pan / slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(GridError::UnknownDirection(s.to_string())),
        }
    }
}

/// Quarter-turn direction. `Left` is counter-clockwise, `Right` clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

impl FromStr for Turn {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" | "ccw" => Ok(Turn::Left),
            "right" | "r" | "cw" => Ok(Turn::Right),
            _ => Err(GridError::UnknownTurn(s.to_string())),
        }
    }
}

/// Reflection axis. Flipping about `X` swaps top and bottom rows; flipping
/// about `Y` mirrors every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl FromStr for Axis {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(GridError::UnknownAxis(s.to_string())),
        }
    }
}

/// Side of the grid's bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl FromStr for Edge {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            _ => Err(GridError::UnknownEdge(s.to_string())),
        }
    }
}

/// First/last cell of a cell's own row or column (ragged-aware edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Upper,
    Lower,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Cartesian-style quadrants: I is top-right, counting counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}
