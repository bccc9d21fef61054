use rps_core::Move;

/// Laplace prior given to every cell before any observation.
pub const BASE_WEIGHT: f64 = 1.0;

/// Weights of the next player move, keyed by the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTable {
    weights: [[f64; 3]; 3],
}

impl TransitionTable {
    pub const fn uniform() -> Self {
        Self {
            weights: [[BASE_WEIGHT; 3]; 3],
        }
    }

    pub fn weight(&self, previous: Move, next: Move) -> f64 {
        self.weights[previous.index()][next.index()]
    }

    pub fn row(&self, previous: Move) -> [f64; 3] {
        self.weights[previous.index()]
    }

    /// Scales every cell of `previous`'s row, the one about to be reinforced included.
    pub fn decay_row(&mut self, previous: Move, decay: f64) {
        for weight in self.weights[previous.index()].iter_mut() {
            *weight *= decay;
        }
    }

    pub fn reinforce(&mut self, previous: Move, next: Move) {
        self.weights[previous.index()][next.index()] += 1.0;
    }

    /// Heaviest successor of `previous`; ties go to the earliest move in [`Move::ALL`].
    pub fn most_likely(&self, previous: Move) -> Move {
        let row = self.row(previous);
        let mut best = Move::ALL[0];
        for candidate in Move::ALL.iter().copied().skip(1) {
            if row[candidate.index()] > row[best.index()] {
                best = candidate;
            }
        }
        best
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::uniform()
    }
}

#[cfg(test)]
mod tests {
    use super::{BASE_WEIGHT, TransitionTable};
    use rps_core::Move;

    #[test]
    fn uniform_table_populates_every_cell() {
        let table = TransitionTable::uniform();
        for previous in Move::ALL {
            for next in Move::ALL {
                assert_eq!(table.weight(previous, next), BASE_WEIGHT);
            }
        }
    }

    #[test]
    fn ties_resolve_in_move_order() {
        let mut table = TransitionTable::uniform();
        assert_eq!(table.most_likely(Move::Scissors), Move::Rock);

        table.reinforce(Move::Scissors, Move::Paper);
        table.reinforce(Move::Scissors, Move::Scissors);
        assert_eq!(table.most_likely(Move::Scissors), Move::Paper);
    }

    #[test]
    fn decay_touches_a_single_row() {
        let mut table = TransitionTable::uniform();
        table.decay_row(Move::Paper, 0.25);
        assert_eq!(table.row(Move::Paper), [0.25; 3]);
        assert_eq!(table.row(Move::Rock), [BASE_WEIGHT; 3]);
        assert_eq!(table.row(Move::Scissors), [BASE_WEIGHT; 3]);
    }
}
