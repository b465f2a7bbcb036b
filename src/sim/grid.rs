//! The 5x5 board
//!
//! Each cell owns at most one entity. Replacing or clearing a cell drops
//! whatever was there.

use glam::Vec2;

use super::entity::{Entity, Node};
use crate::cell_to_pixel;
use crate::consts::{GRID_SIZE, NODE_SEEDS};

/// Integer cell coordinate, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Move one cell, clamped to the board (no wraparound)
    pub fn step(self, dir: Direction) -> Self {
        let last = GRID_SIZE - 1;
        match dir {
            Direction::Up => Self::new(self.row.saturating_sub(1), self.col),
            Direction::Down => Self::new((self.row + 1).min(last), self.col),
            Direction::Left => Self::new(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::new(self.row, (self.col + 1).min(last)),
        }
    }

    /// Top-left pixel of this cell
    #[inline]
    pub fn to_pixel(self) -> Vec2 {
        cell_to_pixel(self.row, self.col)
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [[Option<Entity>; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A board with the starting nodes in place
    pub fn new() -> Self {
        let mut grid = Self::empty();
        grid.seed_nodes();
        grid
    }

    /// A board with nothing on it
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    fn seed_nodes(&mut self) {
        for &(row, col) in &NODE_SEEDS {
            let pos = CellPos::new(row, col);
            self.set(pos, Entity::Node(Node::new(pos.to_pixel())));
        }
    }

    /// Drop everything and put the starting nodes back
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, pos: CellPos) -> Option<&Entity> {
        if !pos.in_bounds() {
            log::error!("grid read out of range: {:?}", pos);
            return None;
        }
        self.cells[pos.row][pos.col].as_ref()
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut Entity> {
        if !pos.in_bounds() {
            log::error!("grid write out of range: {:?}", pos);
            return None;
        }
        self.cells[pos.row][pos.col].as_mut()
    }

    pub fn is_empty(&self, pos: CellPos) -> bool {
        pos.in_bounds() && self.cells[pos.row][pos.col].is_none()
    }

    /// Put an entity in a cell, returning whatever it replaced
    pub fn set(&mut self, pos: CellPos, entity: Entity) -> Option<Entity> {
        debug_assert!(pos.in_bounds(), "cell {pos:?} outside the board");
        if !pos.in_bounds() {
            log::error!("grid write out of range: {:?}", pos);
            return None;
        }
        self.cells[pos.row][pos.col].replace(entity)
    }

    /// Occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &Entity)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|e| (CellPos::new(row, col), e)))
        })
    }

    /// Occupied cells in row-major order, mutable
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CellPos, &mut Entity)> {
        self.cells.iter_mut().enumerate().flat_map(|(row, cells)| {
            cells
                .iter_mut()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_mut().map(|e| (CellPos::new(row, col), e)))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes that have been lit
    pub fn active_node_count(&self) -> usize {
        self.iter()
            .filter_map(|(_, e)| e.as_node())
            .filter(|n| n.is_active())
            .count()
    }
}
