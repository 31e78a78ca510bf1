use dixi_types::Suggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Observable state of one search input.
///
/// Invariants: `selected_index`, when set, points into `suggestions`, and
/// `is_open` is false whenever `suggestions` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSession {
    pub text: String,
    pub suggestions: Vec<Suggestion>,
    pub is_open: bool,
    /// Keyboard cursor; `None` means the typed text is authoritative
    pub selected_index: Option<usize>,
    /// Bumped by every input change; fetch results carry the value they were issued under
    pub(crate) generation: u64,
}

impl SuggestionSession {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    /// Rows a renderer should draw, empty while the dropdown is closed
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        if self.is_open { &self.suggestions } else { &[] }
    }

    pub(crate) fn move_selection(&mut self, direction: Direction) -> bool {
        if !self.is_open || self.suggestions.is_empty() {
            return false;
        }

        let last = self.suggestions.len() - 1;
        let next = match (direction, self.selected_index) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(i)) => Some((i + 1).min(last)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(i)) => Some(i - 1),
        };

        let changed = next != self.selected_index;
        self.selected_index = next;
        changed
    }

    /// Resolve the value to submit and close the dropdown.
    ///
    /// A highlighted row in the open dropdown wins over the typed text and is
    /// written back into `text`. Blank values commit nothing and leave the
    /// session untouched.
    pub(crate) fn commit(&mut self) -> Option<String> {
        let row = if self.is_open { self.selected() } else { None };
        let (value, from_row) = match row {
            Some(row) => (row.headword.clone(), true),
            None => (self.text.trim().to_string(), false),
        };

        if value.trim().is_empty() {
            return None;
        }

        if from_row {
            self.text = value.clone();
        }
        self.is_open = false;
        self.selected_index = None;
        self.generation += 1;
        Some(value)
    }

    pub(crate) fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.is_open = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.selected_index = None;
    }

    pub(crate) fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.is_open = false;
        self.selected_index = None;
    }
}
