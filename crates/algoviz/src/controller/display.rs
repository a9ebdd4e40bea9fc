//! Presentation tags for array elements.

use algoviz_sorting::Step;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    #[default]
    Normal,
    Comparing,
    Swapping,
    Sorted,
}

/// Per-index display tags driven purely by step events.
///
/// Compare and write highlights last until the next step; an index that
/// was marked sorted falls back to [`DisplayState::Sorted`] when its
/// highlight clears.
#[derive(Clone, Debug, Default)]
pub struct DisplayTags {
    states: Vec<DisplayState>,
    sorted: Vec<bool>,
    highlighted: Vec<usize>,
}

impl DisplayTags {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![DisplayState::Normal; len],
            sorted: vec![false; len],
            highlighted: Vec::new(),
        }
    }

    pub fn states(&self) -> &[DisplayState] {
        &self.states
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn apply<T>(&mut self, step: &Step<T>) {
        self.clear_highlights();
        match step {
            Step::Compare { i, j } => {
                self.highlight(*i, DisplayState::Comparing);
                self.highlight(*j, DisplayState::Comparing);
            }
            Step::Swap { i, j } => {
                self.highlight(*i, DisplayState::Swapping);
                self.highlight(*j, DisplayState::Swapping);
            }
            Step::Overwrite { index, .. } => self.highlight(*index, DisplayState::Swapping),
            Step::MarkSorted { index } => {
                self.sorted[*index] = true;
                self.states[*index] = DisplayState::Sorted;
            }
        }
    }

    pub fn mark_all_sorted(&mut self) {
        self.highlighted.clear();
        self.sorted.iter_mut().for_each(|s| *s = true);
        self.states.iter_mut().for_each(|s| *s = DisplayState::Sorted);
    }

    fn highlight(&mut self, index: usize, state: DisplayState) {
        self.states[index] = state;
        self.highlighted.push(index);
    }

    fn clear_highlights(&mut self) {
        for idx in self.highlighted.drain(..) {
            self.states[idx] = if self.sorted[idx] {
                DisplayState::Sorted
            } else {
                DisplayState::Normal
            };
        }
    }
}
