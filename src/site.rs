use crate::{
    config::SiteConfig,
    contact::{ContactError, ContactForm, EmailRequest, SubmitState},
    effects::SectionEffects,
    input::{InputDispatcher, Intent, NavInput},
    navigator::SectionNavigator,
    pagination::Pagination,
    renderer::{ListKind, Node, Renderer},
    scheduler::{Scheduler, Task, TaskId},
    theme::{self, KeyValueStore, Theme},
    typewriter::Typewriter,
};

/// Owns every widget of the page together with the collaborators they
/// mutate. Input events and timer tasks both enter through here.
pub struct Site<R, S, K> {
    config: SiteConfig,
    renderer: R,
    scheduler: S,
    store: K,
    navigator: SectionNavigator,
    input: InputDispatcher,
    effects: SectionEffects,
    projects: Pagination,
    journey: Pagination,
    typewriter: Typewriter,
    theme: Theme,
    contact: ContactForm,
    pending_reset: Option<TaskId>,
}

impl<R, S, K> Site<R, S, K>
where
    R: Renderer,
    S: Scheduler,
    K: KeyValueStore,
{
    pub fn new(config: SiteConfig, renderer: R, scheduler: S, store: K) -> Self {
        Self {
            navigator: SectionNavigator::new(config.total_sections, config.transition_ms),
            input: InputDispatcher::new(config.mobile_breakpoint, config.swipe_threshold),
            effects: SectionEffects::new(config.skills_section, config.projects_section),
            projects: Pagination::projects(config.projects_page_size),
            journey: Pagination::journey(config.journey_page_size),
            typewriter: Typewriter::new(&config.phrases),
            theme: Theme::default(),
            contact: ContactForm::default(),
            pending_reset: None,
            config,
            renderer,
            scheduler,
            store,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn pagination(&self, list: ListKind) -> &Pagination {
        match list {
            ListKind::Projects => &self.projects,
            ListKind::Journey => &self.journey,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn submit_state(&self) -> SubmitState {
        self.contact.state()
    }

    /// Theme, indicators and both lists are settled immediately; the loader
    /// stays up for the configured delay before the hero animates in.
    pub fn start(&mut self) {
        self.theme = theme::apply_on_load(&self.store, &mut self.renderer);
        self.renderer
            .set_class(Node::Section(self.navigator.current()), "active", true);
        self.navigator.sync_indicators(&mut self.renderer);
        self.projects.open(&mut self.renderer, &mut self.scheduler);
        self.journey.open(&mut self.renderer, &mut self.scheduler);
        self.scheduler
            .schedule(self.config.loader_delay_ms, Task::DismissLoader);
    }

    pub fn handle(&mut self, input: NavInput, viewport_width: f64) {
        let intent = self
            .input
            .interpret(input, viewport_width, self.navigator.is_transitioning());
        let current = self.navigator.current();

        let target = match intent {
            Some(Intent::Next) => Some(current + 1),
            Some(Intent::Previous) => current.checked_sub(1),
            Some(Intent::Jump(index)) => Some(index),
            None => None,
        };
        if let Some(target) = target {
            self.go_to(target);
        }
    }

    pub fn go_to(&mut self, target: usize) {
        if let Some(transition) =
            self.navigator
                .go_to(target, &mut self.renderer, &mut self.scheduler)
        {
            self.effects
                .on_enter(transition.to, &mut self.renderer, &mut self.scheduler);
        }
    }

    pub fn show_page(&mut self, list: ListKind, page: usize) {
        let (pagination, renderer, scheduler) = self.list_parts(list);
        pagination.show_page(page, renderer, scheduler);
    }

    pub fn next_page(&mut self, list: ListKind) {
        let (pagination, renderer, scheduler) = self.list_parts(list);
        pagination.next_page(renderer, scheduler);
    }

    pub fn prev_page(&mut self, list: ListKind) {
        let (pagination, renderer, scheduler) = self.list_parts(list);
        pagination.prev_page(renderer, scheduler);
    }

    /// Only the lists and the skills bars react to a resize; the section
    /// index and the transition lock are left alone.
    pub fn on_resize(&mut self) {
        self.projects.resize(&mut self.renderer, &mut self.scheduler);
        self.journey.resize(&mut self.renderer, &mut self.scheduler);

        let skills = self.effects.skills_section();
        if self.navigator.current() == skills {
            self.effects
                .on_enter(skills, &mut self.renderer, &mut self.scheduler);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = theme::toggle(self.theme, &mut self.store, &mut self.renderer);
        self.theme
    }

    pub fn begin_submit<I>(&mut self, fields: I) -> Option<EmailRequest>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        if !self.contact.begin() {
            return None;
        }
        // The previous result banner must not reset the form under this send.
        if let Some(stale) = self.pending_reset.take() {
            self.scheduler.cancel(stale);
        }
        self.renderer.set_submit_state(SubmitState::Sending);
        Some(EmailRequest::new(&self.config.email, fields))
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) {
        if let Err(error) = &outcome {
            log::error!("contact form delivery failed: {error}");
        }

        let state = self.contact.finish(&outcome);
        self.renderer.set_submit_state(state);
        self.pending_reset = Some(self.scheduler.schedule(
            self.config.submit_reset_ms,
            Task::ResetSubmitButton {
                clear_form: outcome.is_ok(),
            },
        ));
    }

    pub fn run_task(&mut self, id: TaskId, task: Task) {
        self.scheduler.finished(id);

        match task {
            Task::FinishTransition { generation } => {
                self.navigator
                    .finish_transition(generation, &mut self.renderer);
            }
            Task::RevealItem { list, index } => {
                let (pagination, renderer, _) = self.list_parts(list);
                pagination.reveal(index, renderer);
            }
            Task::FillSkillBar { index } => {
                self.effects.fill_skill_bar(index, &mut self.renderer);
            }
            Task::RevealProjectCard { index } => {
                self.effects.reveal_project_card(index, &mut self.renderer);
            }
            Task::RefreshProjects => {
                self.projects.refresh(&mut self.renderer, &mut self.scheduler);
            }
            Task::TypewriterTick => self.type_next(),
            Task::DismissLoader => {
                self.renderer.set_class(Node::Loader, "hidden", true);
                self.renderer.set_class(Node::HeroTitle, "animate-active", true);
                self.type_next();
            }
            Task::ResetSubmitButton { clear_form } => {
                if self.pending_reset != Some(id) {
                    return;
                }
                self.pending_reset = None;
                if clear_form {
                    self.renderer.reset_form();
                }
                self.contact.reset();
                self.renderer.set_submit_state(SubmitState::Idle);
            }
        }
    }

    fn type_next(&mut self) {
        if !self.renderer.has(Node::TypingText) {
            return;
        }
        if let Some(frame) = self.typewriter.tick() {
            self.renderer.set_text(Node::TypingText, &frame.text);
            self.scheduler.schedule(frame.delay_ms, Task::TypewriterTick);
        }
    }

    fn list_parts(&mut self, list: ListKind) -> (&mut Pagination, &mut R, &mut S) {
        let pagination = match list {
            ListKind::Projects => &mut self.projects,
            ListKind::Journey => &mut self.journey,
        };
        (pagination, &mut self.renderer, &mut self.scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::{Display, Pose},
        testing::{advance, site_with, test_site, FakeRenderer, MemoryStore},
        theme::THEME_KEY,
    };

    const DESKTOP: f64 = 1440.0;

    #[test]
    fn start_settles_lists_and_defers_the_hero() {
        let mut site = test_site();
        site.start();

        let renderer = site.renderer();
        assert_eq!(renderer.theme, Some((Theme::Dark, false)));
        assert_eq!(renderer.visible_items(ListKind::Projects), vec![0, 1, 2]);
        assert_eq!(renderer.visible_items(ListKind::Journey), vec![0, 1, 2, 3]);
        assert_eq!(renderer.text(Node::SectionCounter), Some("01"));
        assert!(!renderer.has_class(Node::Loader, "hidden"));

        advance(&mut site, 2_000);

        let renderer = site.renderer();
        assert!(renderer.has_class(Node::Loader, "hidden"));
        assert!(renderer.has_class(Node::HeroTitle, "animate-active"));
        assert_eq!(renderer.text(Node::TypingText), Some("F"));
    }

    #[test]
    fn start_with_an_empty_project_list_disables_its_buttons() {
        let mut renderer = FakeRenderer::page();
        renderer.truncate_items(ListKind::Projects, 0);
        let mut site = site_with(renderer, MemoryStore::default());

        site.start();

        let renderer = site.renderer();
        assert!(renderer.state(Node::PrevButton(ListKind::Projects)).disabled);
        assert!(renderer.state(Node::NextButton(ListKind::Projects)).disabled);
        assert_eq!(renderer.text(Node::RangeLabel(ListKind::Projects)), Some("0-0"));
        assert_eq!(renderer.visible_items(ListKind::Journey), vec![0, 1, 2, 3]);
    }

    #[test]
    fn scroll_to_next_section_and_release_the_lock() {
        let mut site = test_site();
        site.start();

        site.handle(NavInput::Wheel { delta_y: 100.0 }, DESKTOP);

        assert_eq!(site.navigator().current(), 1);
        assert!(site.navigator().is_transitioning());
        assert!(site.renderer().has_class(Node::Section(0), "exit-up"));
        assert!(site.renderer().has_class(Node::Section(1), "enter-up"));
        assert!(site.renderer().has_class(Node::Section(1), "active"));

        advance(&mut site, 800);

        assert!(!site.navigator().is_transitioning());
        assert!(!site.renderer().has_class(Node::Section(0), "exit-up"));
    }

    #[test]
    fn input_during_a_transition_is_dropped() {
        let mut site = test_site();
        site.handle(NavInput::Key(crate::input::NavKey::Down), DESKTOP);

        site.handle(NavInput::Wheel { delta_y: 100.0 }, DESKTOP);
        site.handle(NavInput::Key(crate::input::NavKey::Down), DESKTOP);
        site.handle(NavInput::Jump(5), DESKTOP);

        assert_eq!(site.navigator().current(), 1);
    }

    #[test]
    fn previous_from_the_first_section_is_a_no_op() {
        let mut site = test_site();
        site.handle(NavInput::Wheel { delta_y: -40.0 }, DESKTOP);

        assert_eq!(site.navigator().current(), 0);
        assert!(!site.navigator().is_transitioning());
    }

    #[test]
    fn entering_skills_fills_the_bars() {
        let mut site = test_site();
        site.go_to(2);

        assert_eq!(site.renderer().state(Node::SkillBar(0)).width.as_deref(), Some("0"));
        advance(&mut site, 600);
        assert_eq!(site.renderer().state(Node::SkillBar(0)).width.as_deref(), Some("90%"));
        assert_eq!(site.renderer().state(Node::SkillBar(2)).width.as_deref(), Some("60%"));
    }

    #[test]
    fn entering_projects_replays_cards_and_restores_the_page() {
        let mut site = test_site();
        site.start();
        site.next_page(ListKind::Projects);
        advance(&mut site, 2_000);

        site.go_to(3);
        advance(&mut site, 100);

        assert_eq!(site.renderer().visible_items(ListKind::Projects), vec![3, 4, 5]);
        assert_eq!(site.pagination(ListKind::Projects).current_page(), 1);

        advance(&mut site, 1_500);
        let card = site.renderer().state(Node::Item(ListKind::Projects, 3));
        assert_eq!(card.pose.map(|pose| pose.opacity), Some(1.0));
        assert_eq!(card.display, Some(Display::Block));
    }

    #[test]
    fn resize_on_skills_replays_the_bars() {
        let mut site = test_site();
        site.go_to(2);
        advance(&mut site, 1_000);

        site.on_resize();

        assert_eq!(site.renderer().state(Node::SkillBar(1)).width.as_deref(), Some("0"));
        advance(&mut site, 500);
        assert_eq!(site.renderer().state(Node::SkillBar(1)).width.as_deref(), Some("75%"));
    }

    #[test]
    fn resize_reclamps_both_lists() {
        let mut site = test_site();
        site.start();
        site.show_page(ListKind::Projects, 2);
        site.show_page(ListKind::Journey, 1);

        site.renderer.truncate_items(ListKind::Projects, 0);
        site.renderer.truncate_items(ListKind::Journey, 3);
        site.on_resize();

        assert_eq!(site.pagination(ListKind::Projects).current_page(), 0);
        assert_eq!(site.pagination(ListKind::Journey).current_page(), 0);
        assert_eq!(site.renderer().visible_items(ListKind::Journey), vec![0, 1, 2]);
        assert_eq!(site.renderer().page_dots[&ListKind::Projects], (0, 0));
    }

    #[test]
    fn theme_toggle_persists_across_reloads() {
        let mut site = test_site();
        site.start();

        assert_eq!(site.toggle_theme(), Theme::Light);
        assert_eq!(site.store.get(THEME_KEY).as_deref(), Some("light"));

        let store = std::mem::take(&mut site.store);
        let mut reloaded = site_with(FakeRenderer::page(), store);
        reloaded.start();
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.renderer().theme, Some((Theme::Light, false)));
    }

    #[test]
    fn typewriter_pauses_on_full_phrase_then_moves_on() {
        let mut config = SiteConfig::default();
        config.phrases = vec!["ABC".to_string(), "XY".to_string()];
        config.loader_delay_ms = 0;
        let mut site = Site::new(
            config,
            FakeRenderer::page(),
            crate::testing::ManualScheduler::default(),
            MemoryStore::default(),
        );
        site.start();

        advance(&mut site, 200);
        assert_eq!(site.renderer().text(Node::TypingText), Some("ABC"));

        advance(&mut site, 1_999);
        assert_eq!(site.renderer().text(Node::TypingText), Some("ABC"));
        advance(&mut site, 1);
        assert_eq!(site.renderer().text(Node::TypingText), Some("AB"));

        advance(&mut site, 100);
        assert_eq!(site.renderer().text(Node::TypingText), Some(""));

        advance(&mut site, 499);
        assert_eq!(site.renderer().text(Node::TypingText), Some(""));
        advance(&mut site, 1);
        assert_eq!(site.renderer().text(Node::TypingText), Some("X"));
    }

    #[test]
    fn typewriter_stops_without_a_target() {
        let renderer = FakeRenderer::default().with_sections(6);
        let mut site = site_with(renderer, MemoryStore::default());
        site.start();

        advance(&mut site, 2_000);
        assert!(site.scheduler().pending().is_empty());
    }

    #[test]
    fn successful_submit_resets_the_form_later() {
        let mut site = test_site();
        let request = site
            .begin_submit(vec![("name".to_string(), "Ada".to_string())])
            .unwrap();
        assert_eq!(request.template_params["name"], "Ada");
        assert!(site.begin_submit(Vec::new()).is_none());

        site.finish_submit(Ok(()));
        assert_eq!(site.submit_state(), SubmitState::Sent);

        advance(&mut site, 3_000);
        assert_eq!(site.submit_state(), SubmitState::Idle);
        assert_eq!(site.renderer().form_resets, 1);
        assert_eq!(
            site.renderer().submit_states,
            vec![SubmitState::Sending, SubmitState::Sent, SubmitState::Idle]
        );
    }

    #[test]
    fn failed_submit_keeps_the_fields() {
        let mut site = test_site();
        site.begin_submit(Vec::new());
        site.finish_submit(Err(ContactError::Transport("offline".to_string())));

        assert_eq!(site.submit_state(), SubmitState::Failed);
        advance(&mut site, 3_000);
        assert_eq!(site.submit_state(), SubmitState::Idle);
        assert_eq!(site.renderer().form_resets, 0);
    }

    #[test]
    fn resubmitting_during_the_result_banner_keeps_the_new_send_locked() {
        let mut site = test_site();
        site.begin_submit(Vec::new());
        site.finish_submit(Ok(()));
        advance(&mut site, 1_000);

        assert!(site.begin_submit(Vec::new()).is_some());
        advance(&mut site, 2_000);

        assert_eq!(site.submit_state(), SubmitState::Sending);
        assert_eq!(site.renderer().form_resets, 0);
        assert_eq!(site.scheduler().cancelled.len(), 1);
        assert!(site.begin_submit(Vec::new()).is_none());

        site.finish_submit(Err(ContactError::Transport("offline".to_string())));
        advance(&mut site, 2_999);
        assert_eq!(site.submit_state(), SubmitState::Failed);
        advance(&mut site, 1);
        assert_eq!(site.submit_state(), SubmitState::Idle);
        assert_eq!(site.renderer().form_resets, 0);
        assert_eq!(
            site.renderer().submit_states,
            vec![
                SubmitState::Sending,
                SubmitState::Sent,
                SubmitState::Sending,
                SubmitState::Failed,
                SubmitState::Idle,
            ]
        );
    }

    #[test]
    fn page_changes_hide_the_previous_slice() {
        let mut site = test_site();
        site.start();
        site.next_page(ListKind::Journey);

        let renderer = site.renderer();
        assert_eq!(renderer.visible_items(ListKind::Journey), vec![4, 5]);
        assert_eq!(
            renderer.state(Node::Item(ListKind::Journey, 0)).pose,
            Some(Pose::hidden(20))
        );
        assert!(renderer.state(Node::NextButton(ListKind::Journey)).disabled);
    }
}
