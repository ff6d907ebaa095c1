use std::collections::HashSet;

use glam::IVec2;

/// One of the four unit steps a head movement can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const fn delta(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::new(1, 0),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
        }
    }
}

/// A chain of knots on an infinite grid. Knot 0 is the head; every other
/// knot trails the one ahead of it, never drifting further than Chebyshev
/// distance 1 from its leader. The set of tiles the last knot has ever
/// occupied is recorded as it goes.
#[derive(Debug, Clone)]
pub struct RopeSimulator {
    rope: Vec<IVec2>,
    tail_visited: HashSet<IVec2>,
}

impl RopeSimulator {
    pub fn new(rope_length: usize) -> Self {
        Self::with_start(rope_length, IVec2::ZERO)
    }

    pub fn with_start(rope_length: usize, start: IVec2) -> Self {
        assert!(rope_length >= 2, "a rope needs at least a head and a tail");
        Self {
            rope: vec![start; rope_length],
            tail_visited: HashSet::from([start]),
        }
    }

    pub fn head(&self) -> IVec2 {
        self.rope[0]
    }

    pub fn tail(&self) -> IVec2 {
        self.rope[self.rope.len() - 1]
    }

    pub fn knots(&self) -> &[IVec2] {
        &self.rope
    }

    /// Advances the head one tile at a time, re-settling the trailing knots
    /// after every single step. Knots must settle in head-to-tail order:
    /// each one follows the already-updated position of its leader.
    pub fn move_head(&mut self, direction: Direction, steps: u32) {
        for _ in 0..steps {
            self.rope[0] += direction.delta();
            for i in 1..self.rope.len() {
                self.rope[i] = Self::follow(self.rope[i - 1], self.rope[i]);
            }
            self.tail_visited.insert(self.tail());
        }
    }

    pub fn count_tail_visited_tiles(&self) -> usize {
        self.tail_visited.len()
    }

    /// A follower already touching its leader stays put. Otherwise it moves
    /// exactly one step toward the leader on every axis where it differs,
    /// which covers straight and diagonal catch-up alike.
    fn follow(leader: IVec2, follower: IVec2) -> IVec2 {
        let diff = leader - follower;
        if diff.abs().max_element() <= 1 {
            follower
        } else {
            follower + diff.signum()
        }
    }
}
