//! View navigation and the active entry

use crate::catalog::{FIRST_SURAH, LAST_SURAH};

/// The three mutually exclusive screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    List,
    Detail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub view: View,
    pub active_entry: Option<u16>,
}

impl NavigationState {
    /// Leave the welcome screen. It is never re-entered.
    pub fn start(self) -> Self {
        match self.view {
            View::Welcome => Self {
                view: View::List,
                ..self
            },
            _ => self,
        }
    }

    /// Select an entry from the list: read it and make it the active entry
    pub fn open_detail(self, entry_number: u16) -> Self {
        match self.view {
            View::List => Self {
                view: View::Detail,
                active_entry: Some(entry_number),
            },
            _ => self,
        }
    }

    /// Back to the list; the active entry keeps playing
    pub fn close_detail(self) -> Self {
        match self.view {
            View::Detail => Self {
                view: View::List,
                ..self
            },
            _ => self,
        }
    }

    /// The brand control: back to the list from anywhere
    pub fn home(self) -> Self {
        Self {
            view: View::List,
            ..self
        }
    }

    pub fn next(self) -> Self {
        match self.active_entry {
            Some(n) if n < LAST_SURAH => Self {
                active_entry: Some(n + 1),
                ..self
            },
            _ => self,
        }
    }

    pub fn prev(self) -> Self {
        match self.active_entry {
            Some(n) if n > FIRST_SURAH => Self {
                active_entry: Some(n - 1),
                ..self
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(view: View, active_entry: Option<u16>) -> NavigationState {
        NavigationState { view, active_entry }
    }

    #[test]
    fn welcome_is_left_once() {
        let nav = NavigationState::default().start();
        assert_eq!(nav.view, View::List);
        assert_eq!(nav.open_detail(3).start().view, View::Detail);
    }

    #[test]
    fn opening_detail_sets_active_entry() {
        let nav = at(View::List, Some(5)).open_detail(12);
        assert_eq!(nav, at(View::Detail, Some(12)));
    }

    #[test]
    fn detail_is_only_reachable_from_list() {
        assert_eq!(at(View::Welcome, None).open_detail(3), at(View::Welcome, None));
    }

    #[test]
    fn closing_detail_keeps_active_entry() {
        assert_eq!(at(View::Detail, Some(7)).close_detail(), at(View::List, Some(7)));
    }

    #[test]
    fn home_from_any_view() {
        for view in [View::Welcome, View::List, View::Detail] {
            assert_eq!(at(view, Some(2)).home(), at(View::List, Some(2)));
        }
    }

    #[test]
    fn next_and_prev_stop_at_catalog_bounds() {
        assert_eq!(at(View::List, Some(114)).next().active_entry, Some(114));
        assert_eq!(at(View::List, Some(1)).prev().active_entry, Some(1));
        assert_eq!(at(View::List, Some(113)).next().active_entry, Some(114));
        assert_eq!(at(View::List, Some(2)).prev().active_entry, Some(1));
        assert_eq!(at(View::List, None).next().active_entry, None);
    }
}
