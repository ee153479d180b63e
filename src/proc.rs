use crate::grid::Grid;

/// Result of one generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    pub population: usize,
}

/// Compute the next generation from `current` without touching it.
///
/// Every cell is decided from the previous buffer only; the result is
/// written into a fresh grid of the same size.
pub fn tick(current: &Grid) -> Generation {
    let mut next = current.blank();
    let mut population = 0;

    for i in 0..current.height() {
        for j in 0..current.width() {
            let alive = produce_value(
                current.cell(i, j),
                current.live_neighbors(i, j),
            );
            if alive {
                *next.cell_mut(i, j) = true;
                population += 1;
            }
        }
    }

    Generation { grid: next, population }
}

/// Three neighbors: alive. Two: unchanged. Anything else: dead.
#[inline]
fn produce_value(current: bool, neighbors: u8) -> bool {
    match neighbors {
        3 => true,
        2 => current,
        _ => false,
    }
}
