use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Tracked elements and their one-way reveal state.
#[derive(Debug, Default)]
pub struct RevealSet {
    elements: HashMap<u32, RevealState>,
    next_id: u32,
}

impl RevealSet {
    pub fn track(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(id, RevealState::Pending);
        id
    }

    pub fn untrack(&mut self, id: u32) {
        self.elements.remove(&id);
    }

    #[cfg(test)]
    pub fn state(&self, id: u32) -> Option<RevealState> {
        self.elements.get(&id).copied()
    }

    /// Returns true only for the transition out of `Pending`.
    pub fn reveal(&mut self, id: u32) -> bool {
        match self.elements.get_mut(&id) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Visibility report for one element. Leaving the viewport never hides
    /// an element again.
    pub fn on_visibility(&mut self, id: u32, intersecting: bool) -> bool {
        intersecting && self.reveal(id)
    }

    pub fn pending(&self) -> usize {
        self.elements
            .values()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }
}
