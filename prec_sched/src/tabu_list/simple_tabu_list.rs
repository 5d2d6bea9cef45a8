use super::TabuList;

/// FIFO tabu list over job-index pairs: a circular buffer of the last
/// `tabu_length` moves plus a pair matrix for O(1) membership checks.
#[derive(Clone)]
pub struct SimpleTabuList {
    /// Current index at tabu list. (circular buffer)
    cur_idx: usize,
    /// Occupied slots, saturates at `tabu_length`.
    stored: usize,
    /// Array of tabu list items.
    tabu: Vec<Option<(usize, usize)>>,
    /// Two-dimensional boolean membership structure
    /// (size number_of_activities x number_of_activities).
    tabu_search: Vec<Vec<bool>>,
    /// Fixed tabu list size.
    tabu_length: usize,
}

impl SimpleTabuList {
    pub fn new(number_of_activities: usize, length: usize) -> Self {
        Self {
            cur_idx: 0,
            stored: 0,
            tabu: vec![None; length],
            tabu_search: vec![vec![false; number_of_activities]; number_of_activities],
            tabu_length: length,
        }
    }
}

impl TabuList for SimpleTabuList {
    fn is_possible_move(&self, i: usize, j: usize) -> bool {
        match self.tabu_search.get(i).and_then(|row| row.get(j)) {
            Some(&listed) => !listed,
            None => false,
        }
    }

    fn add_turn_to_tabu_list(&mut self, i: usize, j: usize) {
        if self.tabu_length == 0 {
            return;
        }

        if let Some((old_i, old_j)) = self.tabu[self.cur_idx].take() {
            if let Some(entry) = self
                .tabu_search
                .get_mut(old_i)
                .and_then(|row| row.get_mut(old_j))
            {
                *entry = false;
            }
        } else {
            self.stored += 1;
        }

        self.tabu[self.cur_idx] = Some((i, j));
        if let Some(entry) = self.tabu_search.get_mut(i).and_then(|row| row.get_mut(j)) {
            *entry = true;
        }

        self.cur_idx = (self.cur_idx + 1) % self.tabu_length;
    }

    fn len(&self) -> usize {
        self.stored
    }
}
