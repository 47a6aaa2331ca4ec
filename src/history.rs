//! Back/forward history of a browsing session, sliced the way a history
//! dialog shows it.

/// An entry in the history of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    /// The title of the page.
    pub title: String,
    /// The address of the page.
    pub uri: String,
    /// Whether this is the page currently shown.
    pub selected: bool,
}

impl HistoryItem {
    /// Create a new history entry.
    pub fn new(title: impl Into<String>, uri: impl Into<String>, selected: bool) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
            selected,
        }
    }
}

/// Which part of the history to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// The whole history.
    All,
    /// Everything up to and including the last selected entry.
    Back,
    /// The first selected entry and everything after it.
    Forward,
}

/// Slice `items` for the given action. `Back` ends at the last selected
/// entry and `Forward` starts at the first one. When no entry is selected,
/// both return nothing.
pub fn slice(items: &[HistoryItem], action: Action) -> &[HistoryItem] {
    match action {
        Action::All => items,
        Action::Back => match items.iter().rposition(|item| item.selected) {
            Some(index) => &items[..=index],
            None => &[],
        },
        Action::Forward => match items.iter().position(|item| item.selected) {
            Some(index) => &items[index..],
            None => &[],
        },
    }
}

/// Something that can present a slice of history to the user.
pub trait HistoryView {
    /// Show the given entries, returning true if they were shown.
    fn show(&mut self, items: &[HistoryItem]) -> bool;

    /// Whether history is currently shown.
    fn is_showing(&self) -> bool;
}

/// Presents the history of a single session through a [`HistoryView`].
#[derive(Debug)]
pub struct SessionHistory<V: HistoryView> {
    view: V,
    items: Option<Vec<HistoryItem>>,
}

impl<V: HistoryView> SessionHistory<V> {
    /// Create a session history that is not attached to a session yet.
    pub fn new(view: V) -> Self {
        Self { view, items: None }
    }

    /// Attach to a session with the given entries.
    pub fn set_history(&mut self, items: Vec<HistoryItem>) {
        self.items = Some(items);
    }

    /// Detach from the session.
    pub fn clear_history(&mut self) {
        self.items = None;
    }

    /// The entries of the session, if there is one.
    pub fn history(&self) -> Option<&[HistoryItem]> {
        self.items.as_deref()
    }

    /// The view history is shown in.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show part of the history. Returns false if there is no session or the
    /// view did not show it. An empty history is still handed to the view.
    pub fn show_history(&mut self, action: Action) -> bool {
        match &self.items {
            Some(items) => self.view.show(slice(items, action)),
            None => false,
        }
    }

    /// Handle a long press of the back key. Shows the whole history unless
    /// it is already shown. Returns true if the press was consumed.
    pub fn on_back_long_press(&mut self) -> bool {
        if self.view.is_showing() {
            true
        } else {
            self.show_history(Action::All)
        }
    }
}
