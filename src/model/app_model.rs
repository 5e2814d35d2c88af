//! Main application model, composing the per-domain state machines

use crate::audio::AudioEvent;
use crate::catalog::{find_entry, reciters, CatalogEntry, Reciter};
use crate::services::{DetailTexts, SearchOutcome};

use super::detail::DetailTextBundle;
use super::navigation::{NavigationState, View};
use super::playback::{PlaybackEffect, PlaybackSession};
use super::search::{SearchRequest, SearchState};
use super::types::{Focus, UiState};

pub const VOLUME_STEP: f32 = 0.1;
pub const SEEK_STEP_SECONDS: f64 = 10.0;

/// Work the controller must carry out after a transition
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Playback(PlaybackEffect),
    FetchDetail { entry_number: u16, generation: u64 },
    Search(SearchRequest),
}

impl From<PlaybackEffect> for Effect {
    fn from(effect: PlaybackEffect) -> Self {
        Effect::Playback(effect)
    }
}

/// Main application model containing all state.
///
/// Owned by the controller and only touched from the run loop; background
/// work reports back through events rather than shared cells.
pub struct AppModel {
    pub navigation: NavigationState,
    pub search: SearchState,
    pub playback: PlaybackSession,
    pub detail: Option<DetailTextBundle>,
    pub ui: UiState,
    pub should_quit: bool,
    detail_generation: u64,
    audio_base_url: String,
}

impl AppModel {
    pub fn new(reciter: &'static Reciter, audio_base_url: impl Into<String>) -> Self {
        Self {
            navigation: NavigationState::default(),
            search: SearchState::default(),
            playback: PlaybackSession::new(reciter),
            detail: None,
            ui: UiState::default(),
            should_quit: false,
            detail_generation: 0,
            audio_base_url: audio_base_url.into(),
        }
    }

    pub fn view(&self) -> View {
        self.navigation.view
    }

    pub fn active_entry(&self) -> Option<&'static CatalogEntry> {
        self.navigation.active_entry.and_then(find_entry)
    }

    pub fn visible_entries(&self) -> Vec<&'static CatalogEntry> {
        self.search.visible_entries()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn start(&mut self) {
        self.navigation = self.navigation.start();
    }

    /// Open the highlighted list row
    pub fn open_selected(&mut self) -> Vec<Effect> {
        match self.visible_entries().get(self.ui.list_selected) {
            Some(entry) => self.open_entry(entry.number),
            None => Vec::new(),
        }
    }

    /// Read an entry and make it the one playing
    pub fn open_entry(&mut self, entry_number: u16) -> Vec<Effect> {
        let Some(entry) = find_entry(entry_number) else {
            return Vec::new();
        };
        let before = self.navigation;
        self.navigation = self.navigation.open_detail(entry_number);
        if self.navigation == before {
            return Vec::new();
        }

        tracing::info!(entry = entry_number, name = entry.english_name, "Opening surah");
        self.ui.detail_scroll = 0;
        let mut effects = self.select_for_playback(entry);
        effects.push(self.fetch_detail(entry_number));
        effects
    }

    pub fn close_detail(&mut self) {
        self.navigation = self.navigation.close_detail();
        if self.navigation.view == View::List {
            self.detail = None;
            self.ui.detail_scroll = 0;
        }
    }

    /// Back to the unfiltered list from anywhere
    pub fn go_home(&mut self) {
        self.navigation = self.navigation.home();
        self.search = self.search.clear();
        self.detail = None;
        self.ui.detail_scroll = 0;
        self.ui.focus = Focus::List;
        self.ui.list_selected = self.active_row().unwrap_or(0);
    }

    pub fn next(&mut self) -> Vec<Effect> {
        let navigation = self.navigation.next();
        self.follow_active_entry(navigation)
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        let navigation = self.navigation.prev();
        self.follow_active_entry(navigation)
    }

    fn follow_active_entry(&mut self, navigation: NavigationState) -> Vec<Effect> {
        if navigation.active_entry == self.navigation.active_entry {
            return Vec::new();
        }
        self.navigation = navigation;
        let Some(entry) = self.active_entry() else {
            return Vec::new();
        };

        if let Some(row) = self.active_row() {
            self.ui.list_selected = row;
        }
        let mut effects = self.select_for_playback(entry);
        if self.navigation.view == View::Detail {
            self.ui.detail_scroll = 0;
            effects.push(self.fetch_detail(entry.number));
        }
        effects
    }

    fn active_row(&self) -> Option<usize> {
        let active = self.navigation.active_entry?;
        self.visible_entries().iter().position(|e| e.number == active)
    }

    // ========================================================================
    // List & detail scrolling
    // ========================================================================

    pub fn list_move_up(&mut self) {
        self.ui.list_selected = self.ui.list_selected.saturating_sub(1);
    }

    pub fn list_move_down(&mut self) {
        let last = self.visible_entries().len().saturating_sub(1);
        if self.ui.list_selected < last {
            self.ui.list_selected += 1;
        }
    }

    pub fn detail_scroll_up(&mut self) {
        self.ui.detail_scroll = self.ui.detail_scroll.saturating_sub(1);
    }

    pub fn detail_scroll_down(&mut self) {
        if self.ui.detail_scroll < self.ui.detail_scroll_limit {
            self.ui.detail_scroll += 1;
        }
    }

    /// The reader's wrapped height depends on the terminal width, so the
    /// bound comes from the view after each frame.
    pub fn set_detail_scroll_limit(&mut self, limit: u16) {
        self.ui.detail_scroll_limit = limit;
        self.ui.detail_scroll = self.ui.detail_scroll.min(limit);
    }

    // ========================================================================
    // Detail text
    // ========================================================================

    fn fetch_detail(&mut self, entry_number: u16) -> Effect {
        self.detail_generation += 1;
        let generation = self.detail_generation;
        self.detail = Some(DetailTextBundle::loading(entry_number, generation));
        Effect::FetchDetail {
            entry_number,
            generation,
        }
    }

    pub fn apply_detail(&mut self, generation: u64, result: Result<DetailTexts, String>) {
        if let Some(detail) = &self.detail {
            self.detail = Some(detail.apply(generation, result));
        }
    }

    pub fn retry_detail(&mut self) -> Vec<Effect> {
        match &self.detail {
            Some(detail) if detail.is_failed() => {
                let entry_number = detail.entry_number;
                vec![self.fetch_detail(entry_number)]
            }
            _ => Vec::new(),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn focus_search(&mut self) {
        self.ui.focus = Focus::Search;
    }

    pub fn focus_list(&mut self) {
        self.ui.focus = Focus::List;
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search = self.search.push_char(c);
        self.ui.list_selected = 0;
    }

    pub fn search_pop_char(&mut self) {
        self.search = self.search.pop_char();
        self.ui.list_selected = 0;
    }

    pub fn submit_search(&mut self) -> Vec<Effect> {
        let (search, request) = self.search.submit();
        self.search = search;
        self.ui.list_selected = 0;
        self.ui.focus = Focus::List;
        request.map(Effect::Search).into_iter().collect()
    }

    pub fn clear_search(&mut self) {
        self.search = self.search.clear();
        self.ui.list_selected = 0;
    }

    pub fn apply_search(&mut self, generation: u64, outcome: Option<SearchOutcome>) {
        let search = self.search.apply(generation, outcome);
        if search != self.search {
            self.search = search;
            self.ui.list_selected = 0;
        }
    }

    // ========================================================================
    // Playback
    // ========================================================================

    fn select_for_playback(&mut self, entry: &'static CatalogEntry) -> Vec<Effect> {
        let (playback, effect) = self.playback.select(entry, &self.audio_base_url);
        self.playback = playback;
        effect.map(Effect::from).into_iter().collect()
    }

    pub fn select_reciter(&mut self, reciter: &'static Reciter) -> Vec<Effect> {
        tracing::info!(reciter = reciter.id, "Reciter selected");
        let (playback, effect) = self.playback.select_reciter(reciter, &self.audio_base_url);
        self.playback = playback;
        effect.map(Effect::from).into_iter().collect()
    }

    pub fn toggle_playback(&mut self) -> Vec<Effect> {
        let (playback, effect) = self.playback.toggle();
        self.playback = playback;
        effect.map(Effect::from).into_iter().collect()
    }

    pub fn seek_by(&mut self, delta_seconds: f64) -> Vec<Effect> {
        let (playback, effect) = self.playback.seek_by(delta_seconds);
        self.playback = playback;
        effect.map(Effect::from).into_iter().collect()
    }

    pub fn change_volume(&mut self, delta: f32) -> Vec<Effect> {
        // Round to whole steps so repeated presses land on 0.0 and 1.0 exactly
        let target = ((self.playback.volume + delta) * 10.0).round() / 10.0;
        let (playback, effect) = self.playback.set_volume(target);
        self.playback = playback;
        effect.map(Effect::from).into_iter().collect()
    }

    /// Feed an audio backend event through the session. The end of a track
    /// advances to the next entry here rather than in the controller.
    pub fn apply_audio(&mut self, event: &AudioEvent) -> Vec<Effect> {
        if let AudioEvent::DeviceUnavailable(reason) = event {
            self.ui.set_error(format!("Audio output unavailable: {}", reason));
            return Vec::new();
        }

        let (playback, effect) = self.playback.on_audio_event(event);
        self.playback = playback;
        match effect {
            Some(PlaybackEffect::RequestNext) => self.next(),
            Some(effect) => vec![effect.into()],
            None => Vec::new(),
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn open_reciter_picker(&mut self) {
        self.ui.reciter_selected = reciters()
            .iter()
            .position(|r| r.id == self.playback.active_reciter.id)
            .unwrap_or(0);
        self.ui.show_reciter_picker = true;
    }

    pub fn close_reciter_picker(&mut self) {
        self.ui.show_reciter_picker = false;
    }

    pub fn reciter_picker_move_up(&mut self) {
        self.ui.reciter_selected = self.ui.reciter_selected.saturating_sub(1);
    }

    pub fn reciter_picker_move_down(&mut self) {
        if self.ui.reciter_selected < reciters().len().saturating_sub(1) {
            self.ui.reciter_selected += 1;
        }
    }

    pub fn confirm_reciter_picker(&mut self) -> Vec<Effect> {
        self.ui.show_reciter_picker = false;
        match reciters().get(self.ui.reciter_selected) {
            Some(reciter) => self.select_reciter(reciter),
            None => Vec::new(),
        }
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui.show_help_popup = !self.ui.show_help_popup;
    }

    pub fn set_error(&mut self, message: String) {
        self.ui.set_error(message);
    }

    pub fn auto_clear_old_errors(&mut self) {
        self.ui.auto_clear_old_errors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_reciter;
    use crate::model::{DetailLoadState, PlaybackStatus};
    use crate::services::Verse;

    fn model() -> AppModel {
        let mut model = AppModel::new(find_reciter("mishary").unwrap(), "https://cdn.test");
        model.start();
        model
    }

    fn detail_request(effects: &[Effect]) -> (u16, u64) {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchDetail {
                    entry_number,
                    generation,
                } => Some((*entry_number, *generation)),
                _ => None,
            })
            .expect("a detail fetch")
    }

    fn load_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Playback(PlaybackEffect::Load { .. })))
            .count()
    }

    fn texts(entry_number: u16) -> DetailTexts {
        let verse = |text: &str| Verse {
            index: 0,
            verse_number: 1,
            text: text.to_string(),
        };
        DetailTexts {
            entry_number,
            original: vec![verse("a")],
            translated: vec![verse("b")],
        }
    }

    #[test]
    fn opening_entry_loads_audio_and_text() {
        let mut model = model();
        let effects = model.open_entry(36);
        assert_eq!(model.view(), View::Detail);
        assert_eq!(load_count(&effects), 1);
        assert_eq!(detail_request(&effects).0, 36);
        assert!(model.detail.as_ref().unwrap().is_loading());
    }

    #[test]
    fn closing_detail_keeps_playback() {
        let mut model = model();
        model.open_entry(2);
        model.close_detail();
        assert_eq!(model.view(), View::List);
        assert!(model.detail.is_none());
        assert_eq!(model.playback.status, PlaybackStatus::Loading);
        assert_eq!(model.navigation.active_entry, Some(2));
    }

    #[test]
    fn next_in_detail_refetches_text() {
        let mut model = model();
        let first = detail_request(&model.open_entry(2));
        let effects = model.next();
        let second = detail_request(&effects);
        assert_eq!(second.0, 3);
        assert!(second.1 > first.1);
        assert_eq!(load_count(&effects), 1);

        model.apply_detail(first.1, Ok(texts(2)));
        assert!(model.detail.as_ref().unwrap().is_loading());
        model.apply_detail(second.1, Ok(texts(3)));
        assert_eq!(model.detail.as_ref().unwrap().load_state, DetailLoadState::Ready);
    }

    #[test]
    fn next_in_list_only_switches_audio() {
        let mut model = model();
        model.open_entry(5);
        model.close_detail();
        let effects = model.next();
        assert_eq!(load_count(&effects), 1);
        assert!(!effects.iter().any(|e| matches!(e, Effect::FetchDetail { .. })));
        assert_eq!(model.ui.list_selected, 5);
    }

    #[test]
    fn track_end_advances_to_next_entry() {
        let mut model = model();
        model.open_entry(113);
        let g = model.playback.generation;
        model.apply_audio(&AudioEvent::Started { generation: g });
        let effects = model.apply_audio(&AudioEvent::Ended { generation: g });
        assert_eq!(model.navigation.active_entry, Some(114));
        assert_eq!(load_count(&effects), 1);

        let g = model.playback.generation;
        model.apply_audio(&AudioEvent::Started { generation: g });
        let effects = model.apply_audio(&AudioEvent::Ended { generation: g });
        assert_eq!(model.navigation.active_entry, Some(114));
        assert!(effects.is_empty());
        assert_eq!(model.playback.status, PlaybackStatus::Paused);
    }

    #[test]
    fn home_clears_search_from_detail() {
        let mut model = model();
        model.search_push_char('2');
        model.search_push_char('2');
        model.submit_search();
        model.open_entry(22);
        model.go_home();
        assert_eq!(model.view(), View::List);
        assert!(!model.search.is_filtered());
        assert!(model.search.query_text.is_empty());
        assert_eq!(model.ui.list_selected, 21);
    }

    #[test]
    fn text_search_emits_request() {
        let mut model = model();
        for c in "heart".chars() {
            model.search_push_char(c);
        }
        let effects = model.submit_search();
        assert!(matches!(&effects[..], [Effect::Search(r)] if r.query == "heart"));
        assert!(model.search.is_searching);
    }

    #[test]
    fn retry_only_after_failure() {
        let mut model = model();
        let (_, generation) = detail_request(&model.open_entry(4));
        assert!(model.retry_detail().is_empty());
        model.apply_detail(generation, Err("offline".to_string()));
        let effects = model.retry_detail();
        assert_eq!(detail_request(&effects).0, 4);
    }

    #[test]
    fn reciter_picker_switches_reciter() {
        let mut model = model();
        model.open_entry(1);
        model.open_reciter_picker();
        assert_eq!(model.ui.reciter_selected, 1);
        model.reciter_picker_move_down();
        let effects = model.confirm_reciter_picker();
        assert_eq!(model.playback.active_reciter.id, "ghamdi");
        assert_eq!(load_count(&effects), 1);
        assert!(!model.ui.show_reciter_picker);
    }

    #[test]
    fn volume_steps_land_on_bounds() {
        let mut model = model();
        for _ in 0..15 {
            model.change_volume(-VOLUME_STEP);
        }
        assert_eq!(model.playback.volume, 0.0);
        model.change_volume(VOLUME_STEP);
        assert!((model.playback.volume - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_device_is_reported() {
        let mut model = model();
        model.apply_audio(&AudioEvent::DeviceUnavailable("no ALSA".to_string()));
        assert!(model.ui.error_message.as_deref().unwrap().contains("no ALSA"));
    }

    #[test]
    fn reader_scroll_stops_at_measured_limit() {
        let mut model = model();
        model.set_detail_scroll_limit(2);
        for _ in 0..5 {
            model.detail_scroll_down();
        }
        assert_eq!(model.ui.detail_scroll, 2);

        // A wider terminal needs less scrolling
        model.set_detail_scroll_limit(1);
        assert_eq!(model.ui.detail_scroll, 1);
        model.detail_scroll_up();
        assert_eq!(model.ui.detail_scroll, 0);
    }
}
