pub mod simple_tabu_list;

/// Bounded memory of recently applied swap moves.
pub trait TabuList {
    /// Check if move is permitted
    fn is_possible_move(&self, i: usize, j: usize) -> bool;
    /// Add move (specified by i,j) to tabu list, evicting the oldest entry
    /// once the capacity is reached.
    fn add_turn_to_tabu_list(&mut self, i: usize, j: usize);
    /// Number of moves currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
