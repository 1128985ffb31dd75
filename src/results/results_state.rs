use ratatui::widgets::ListState;

/// Selected row of the results list
#[derive(Debug, Default)]
pub struct ResultsListState {
    list_state: ListState,
}

impl ResultsListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Start over on a fresh result list, selecting the first row if any
    pub fn reset(&mut self, len: usize) {
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the selection up, returns false when already on the first row
    pub fn select_previous(&mut self) -> bool {
        match self.list_state.selected() {
            Some(i) if i > 0 => {
                self.list_state.select(Some(i - 1));
                true
            }
            _ => false,
        }
    }

    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}
