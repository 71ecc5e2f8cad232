//! The rule of Conway's Game of Life.
//!
//! For the notation of the rule string, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::cells::State;

/// The rule string of Conway's Game of Life.
pub const RULE_STRING: &str = "B3/S23";

/// The state of a cell in the next generation, given its current state
/// and the number of living cells in its Moore neighborhood.
///
/// * A living cell with 2 or 3 living neighbors survives;
/// * A dead cell with exactly 3 living neighbors becomes alive;
/// * All other cells are dead in the next generation.
#[inline]
pub fn transition(state: State, alive_nbhd: usize) -> State {
    match (state, alive_nbhd) {
        (State::Alive, 2) | (State::Alive, 3) | (State::Dead, 3) => State::Alive,
        _ => State::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 {
                State::Alive
            } else {
                State::Dead
            };
            assert_eq!(transition(State::Alive, n), expected, "{} neighbors", n);
        }
    }

    #[test]
    fn birth() {
        for n in 0..=8 {
            let expected = if n == 3 { State::Alive } else { State::Dead };
            assert_eq!(transition(State::Dead, n), expected, "{} neighbors", n);
        }
    }
}
