//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Focus, View};
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.quit();
            return;
        }

        // Error notification blocks everything else until dismissed or expired
        if self.model.ui.error_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.ui.clear_error();
            }
            return;
        }

        if self.model.ui.show_help_popup {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')
            ) {
                self.model.toggle_help_popup();
            }
            return;
        }

        if self.model.ui.show_reciter_picker {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.model.reciter_picker_move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.model.reciter_picker_move_down(),
                KeyCode::Enter => self.confirm_reciter(),
                KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.model.close_reciter_picker()
                }
                _ => {}
            }
            return;
        }

        match self.model.view() {
            View::Welcome => self.handle_welcome_key(key),
            View::List if self.model.ui.focus == Focus::Search => self.handle_search_key(key),
            View::List => {
                if !self.handle_list_key(key) {
                    self.handle_global_key(key);
                }
            }
            View::Detail => {
                if !self.handle_detail_key(key) {
                    self.handle_global_key(key);
                }
            }
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                tracing::debug!("Leaving welcome screen");
                self.model.start();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.quit(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => {
                self.model.clear_search();
                self.model.focus_list();
            }
            KeyCode::Tab | KeyCode::Down => self.model.focus_list(),
            KeyCode::Backspace => self.model.search_pop_char(),
            KeyCode::Char(c) => {
                // Q still quits from the search box when Ctrl is pressed
                if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.model.quit();
                    return;
                }
                self.model.search_push_char(c);
            }
            _ => {}
        }
    }

    /// Returns false when the key is not list-specific
    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.model.list_move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.list_move_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('/') | KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Tab => {
                self.model.focus_search()
            }
            KeyCode::Esc if self.model.search.is_filtered() || !self.model.search.query_text.is_empty() => {
                self.model.clear_search()
            }
            _ => return false,
        }
        true
    }

    /// Returns false when the key is not reader-specific
    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.model.detail_scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.detail_scroll_down(),
            KeyCode::Esc | KeyCode::Backspace => self.close_detail(),
            KeyCode::Enter => self.retry_detail(),
            _ => return false,
        }
        true
    }

    fn handle_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.quit(),
            // Play/Pause toggle
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.next_entry(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.prev_entry(),
            KeyCode::Right => self.seek_forward(),
            KeyCode::Left => self.seek_backward(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.volume_up(),
            KeyCode::Char('-') => self.volume_down(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.model.open_reciter_picker(),
            // Brand control: back to the full list
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Home => self.go_home(),
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.model.toggle_help_popup()
            }
            _ => {}
        }
    }
}
