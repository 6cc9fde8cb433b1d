use std::collections::VecDeque;

use super::direction::Direction;

/// A single coordinate on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The player snake: an ordered body with the head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head first, tail last
    pub body: VecDeque<Cell>,
    /// Direction the next advance moves in
    pub direction: Direction,
    grow_next: bool,
}

impl Snake {
    /// Build a snake whose body extends `length` cells behind `head`,
    /// trailing opposite to `direction`
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let trailing = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        body.push_back(cell);
        for _ in 1..length {
            cell = cell.step(trailing);
            body.push_back(cell);
        }

        Self {
            body,
            direction,
            grow_next: false,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Membership test of a cell anywhere in the body
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True if the head sits on any other segment
    pub fn head_bites_tail(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Request growth; consumed by exactly one later `advance`
    pub fn grow_on_advance(&mut self) {
        self.grow_next = true;
    }

    pub fn growth_pending(&self) -> bool {
        self.grow_next
    }

    /// Move one cell in the current direction: a new head is pushed at the
    /// front, and the tail is dropped unless growth is pending.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.grow_next {
            self.grow_next = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
