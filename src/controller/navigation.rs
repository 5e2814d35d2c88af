//! List/detail navigation, detail text fetches and search resolution

use crate::model::SearchRequest;

use super::{AppController, AppEvent};

impl AppController {
    pub fn open_selected(&mut self) {
        let effects = self.model.open_selected();
        self.run_effects(effects);
    }

    pub fn open_entry(&mut self, entry_number: u16) {
        let effects = self.model.open_entry(entry_number);
        self.run_effects(effects);
    }

    pub fn close_detail(&mut self) {
        self.model.close_detail();
    }

    pub fn go_home(&mut self) {
        tracing::debug!("Returning to the surah list");
        self.model.go_home();
    }

    pub fn next_entry(&mut self) {
        let effects = self.model.next();
        self.run_effects(effects);
    }

    pub fn prev_entry(&mut self) {
        let effects = self.model.prev();
        self.run_effects(effects);
    }

    pub fn retry_detail(&mut self) {
        let effects = self.model.retry_detail();
        self.run_effects(effects);
    }

    pub fn submit_search(&mut self) {
        let effects = self.model.submit_search();
        self.run_effects(effects);
    }

    /// Fetch both editions in the background and report back on the event bus
    pub(crate) fn spawn_fetch_detail(&self, entry_number: u16, generation: u64) {
        let texts = self.texts.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = texts
                .fetch_detail(entry_number)
                .await
                .map_err(|e| Self::format_error(&e));
            if events.send(AppEvent::DetailLoaded { generation, result }).is_err() {
                tracing::debug!(entry_number, "Event bus closed, dropping detail text");
            }
        });
    }

    pub(crate) fn spawn_search(&self, request: SearchRequest) {
        let resolver = self.resolver.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let SearchRequest { query, generation } = request;
            let outcome = resolver.resolve(&query).await;
            if events
                .send(AppEvent::SearchResolved { generation, outcome })
                .is_err()
            {
                tracing::debug!(query = %query, "Event bus closed, dropping search result");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::super::test_support::{controller, failing_texts};
    use super::*;
    use crate::audio::MockAudioOutput;
    use crate::model::{DetailLoadState, View};
    use crate::services::{DetailTexts, MockSearchBackend, MockTextSource, SearchAnswer, Verse};

    fn quiet_audio() -> MockAudioOutput {
        let mut audio = MockAudioOutput::new();
        audio.expect_load().return_const(());
        audio
    }

    #[tokio::test]
    async fn search_result_arrives_over_event_bus() {
        let mut search = MockSearchBackend::new();
        search.expect_search().times(1).returning(|_| {
            Ok(SearchAnswer {
                surah_numbers: vec![2, 200],
                reasoning: Some("The cow".to_string()),
            })
        });
        let (mut controller, mut rx) =
            controller("sudais", quiet_audio(), search, MockTextSource::new());

        for c in "about cows".chars() {
            controller.model.search_push_char(c);
        }
        controller.submit_search();
        assert!(controller.model().search.is_searching);

        let event = rx.recv().await.unwrap();
        controller.handle_app_event(event);

        let search = &controller.model().search;
        assert!(!search.is_searching);
        assert_eq!(search.result_entry_numbers, Some(BTreeSet::from([2])));
        assert_eq!(search.reasoning_text.as_deref(), Some("The cow"));
    }

    #[tokio::test]
    async fn detail_text_arrives_over_event_bus() {
        let mut texts = MockTextSource::new();
        texts.expect_fetch_detail().times(1).returning(|n| {
            let verse = |text: &str| Verse {
                index: 0,
                verse_number: 1,
                text: text.to_string(),
            };
            Ok(DetailTexts {
                entry_number: n,
                original: vec![verse("original")],
                translated: vec![verse("translated")],
            })
        });
        let (mut controller, mut rx) =
            controller("sudais", quiet_audio(), MockSearchBackend::new(), texts);

        controller.open_entry(108);
        assert_eq!(controller.model().view(), View::Detail);

        let event = rx.recv().await.unwrap();
        controller.handle_app_event(event);
        let detail = controller.model().detail.as_ref().unwrap();
        assert_eq!(detail.load_state, DetailLoadState::Ready);
        assert_eq!(detail.verse_pairs()[0].translated, "translated");
    }

    #[tokio::test]
    async fn failed_detail_shows_cause_and_can_retry() {
        let (mut controller, mut rx) =
            controller("sudais", quiet_audio(), MockSearchBackend::new(), failing_texts());

        controller.open_entry(3);
        let event = rx.recv().await.unwrap();
        controller.handle_app_event(event);
        assert!(matches!(
            &controller.model().detail.as_ref().unwrap().load_state,
            DetailLoadState::Failed(cause) if cause == "Unexpected response: offline"
        ));

        controller.retry_detail();
        assert!(controller.model().detail.as_ref().unwrap().is_loading());
    }
}
