//! The editor's copy of the coordinates it draws.

use crate::lattice::Coord;

/// Passive snapshot of the processor's coordinates.
///
/// `generation` goes up on every update so a renderer can tell when its
/// cached drawing is stale.
#[derive(Debug, Clone, Default)]
pub struct LatticeView {
    coords: Vec<Coord>,
    generation: u64,
}

impl LatticeView {
    pub fn new(coords: &[Coord]) -> Self {
        Self {
            coords: coords.to_vec(),
            generation: 0,
        }
    }

    pub fn update(&mut self, coords: &[Coord]) {
        self.coords.clear();
        self.coords.extend_from_slice(coords);
        self.generation += 1;
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
