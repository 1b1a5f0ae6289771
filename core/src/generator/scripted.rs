use alloc::collections::VecDeque;

use super::*;

/// Replays a fixed list of coordinates, for layouts that must be known in advance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSampler {
    cells: VecDeque<Coord2>,
}

impl ScriptedSampler {
    pub fn new(cells: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellSampler for ScriptedSampler {
    fn sample(&mut self, _size: Coord) -> Result<Coord2> {
        self.cells.pop_front().ok_or(GameError::SamplerExhausted)
    }
}
