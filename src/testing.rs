use std::collections::{BTreeSet, HashMap};

use crate::{
    config::SiteConfig,
    contact::SubmitState,
    renderer::{Display, Group, ListKind, Node, Pose, Renderer},
    scheduler::{Scheduler, Task, TaskId},
    site::Site,
    theme::{KeyValueStore, Theme},
};

pub type TestSite = Site<FakeRenderer, ManualScheduler, MemoryStore>;

#[derive(Clone, Debug, Default)]
pub struct NodeState {
    pub classes: BTreeSet<String>,
    pub text: Option<String>,
    pub display: Option<Display>,
    pub pose: Option<Pose>,
    pub disabled: bool,
    pub width: Option<String>,
    pub target_width: Option<String>,
}

/// Records every mutation in memory. Nodes that were never added behave like
/// elements missing from the page.
#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub nodes: HashMap<Node, NodeState>,
    pub counts: HashMap<Group, usize>,
    pub page_dots: HashMap<ListKind, (usize, usize)>,
    pub reflows: Vec<Node>,
    pub theme: Option<(Theme, bool)>,
    pub submit_states: Vec<SubmitState>,
    pub form_resets: usize,
}

impl FakeRenderer {
    /// Six sections, seven projects, six journey cards, three skill bars and
    /// the hero decorations.
    pub fn page() -> Self {
        Self::default()
            .with_sections(6)
            .with_items(ListKind::Projects, 7)
            .with_items(ListKind::Journey, 6)
            .with_skill_bars(&["90%", "75%", "60%"])
            .with_nodes(&[Node::ThemeIcon, Node::TypingText, Node::HeroTitle, Node::Loader])
    }

    pub fn with_sections(mut self, total: usize) -> Self {
        self.counts.insert(Group::Sections, total);
        self.counts.insert(Group::NavDots, total);
        for index in 0..total {
            self.nodes.insert(Node::Section(index), NodeState::default());
            self.nodes.insert(Node::NavDot(index), NodeState::default());
        }
        self.nodes.insert(Node::SectionCounter, NodeState::default());
        if let Some(first) = self.nodes.get_mut(&Node::Section(0)) {
            first.classes.insert("active".to_string());
        }
        self
    }

    pub fn with_items(mut self, list: ListKind, total: usize) -> Self {
        self.counts.insert(Group::Items(list), total);
        for index in 0..total {
            self.nodes.insert(Node::Item(list, index), NodeState::default());
        }
        for node in [
            Node::PrevButton(list),
            Node::NextButton(list),
            Node::RangeLabel(list),
            Node::TotalLabel(list),
        ] {
            self.nodes.entry(node).or_default();
        }
        self
    }

    pub fn with_skill_bars(mut self, widths: &[&str]) -> Self {
        self.counts.insert(Group::SkillBars, widths.len());
        for (index, width) in widths.iter().enumerate() {
            self.nodes.insert(
                Node::SkillBar(index),
                NodeState {
                    target_width: Some(width.to_string()),
                    ..NodeState::default()
                },
            );
        }
        self
    }

    pub fn with_nodes(mut self, nodes: &[Node]) -> Self {
        for node in nodes {
            self.nodes.entry(*node).or_default();
        }
        self
    }

    /// Drops items from the end of a list, as a responsive layout might.
    pub fn truncate_items(&mut self, list: ListKind, total: usize) {
        let current = self.count(Group::Items(list));
        for index in total..current {
            self.nodes.remove(&Node::Item(list, index));
        }
        self.counts.insert(Group::Items(list), total.min(current));
    }

    pub fn state(&self, node: Node) -> &NodeState {
        self.nodes
            .get(&node)
            .unwrap_or_else(|| panic!("node {node:?} is not part of the fake page"))
    }

    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|state| state.classes.contains(class))
    }

    pub fn visible_items(&self, list: ListKind) -> Vec<usize> {
        (0..self.count(Group::Items(list)))
            .filter(|index| self.display(Node::Item(list, *index)) != Display::None)
            .collect()
    }

    pub fn text(&self, node: Node) -> Option<&str> {
        self.nodes.get(&node).and_then(|state| state.text.as_deref())
    }
}

impl Renderer for FakeRenderer {
    fn count(&self, group: Group) -> usize {
        self.counts.get(&group).copied().unwrap_or(0)
    }

    fn has(&self, node: Node) -> bool {
        self.nodes.contains_key(&node)
    }

    fn set_class(&mut self, node: Node, class: &str, on: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            if on {
                state.classes.insert(class.to_string());
            } else {
                state.classes.remove(class);
            }
        }
    }

    fn reflow(&mut self, node: Node) {
        if self.nodes.contains_key(&node) {
            self.reflows.push(node);
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.text = Some(text.to_string());
        }
    }

    fn display(&self, node: Node) -> Display {
        match self.nodes.get(&node) {
            Some(state) => state.display.unwrap_or(Display::Block),
            None => Display::None,
        }
    }

    fn set_display(&mut self, node: Node, display: Display) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.display = Some(display);
        }
    }

    fn set_pose(&mut self, node: Node, pose: Pose) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.pose = Some(pose);
        }
    }

    fn set_disabled(&mut self, node: Node, disabled: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.disabled = disabled;
        }
    }

    fn set_width(&mut self, node: Node, width: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.width = Some(width.to_string());
        }
    }

    fn target_width(&self, node: Node) -> Option<String> {
        self.nodes.get(&node)?.target_width.clone()
    }

    fn render_page_dots(&mut self, list: ListKind, pages: usize, active: usize) {
        self.page_dots.insert(list, (pages, active));
    }

    fn apply_theme(&mut self, theme: Theme, animated: bool) {
        self.theme = Some((theme, animated));
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_states.push(state);
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}

#[derive(Debug)]
struct Pending {
    id: TaskId,
    due: u64,
    task: Task,
}

/// Virtual clock. Nothing runs until the test pops due tasks.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
    pub cancelled: Vec<TaskId>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> Vec<(u64, Task)> {
        let mut pending: Vec<_> = self
            .pending
            .iter()
            .map(|entry| (entry.due, entry.id, entry.task))
            .collect();
        pending.sort_by_key(|(due, id, _)| (*due, *id));
        pending.into_iter().map(|(due, _, task)| (due, task)).collect()
    }

    pub fn pop_due(&mut self, until: u64) -> Option<(TaskId, Task)> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;
        let entry = self.pending.remove(position);
        self.now = self.now.max(entry.due);
        Some((entry.id, entry.task))
    }

    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.push(Pending {
            id,
            due: self.now + u64::from(delay_ms),
            task,
        });
        id
    }

    fn cancel(&mut self, id: TaskId) {
        self.pending.retain(|entry| entry.id != id);
        self.cancelled.push(id);
    }
}

/// Runs every task due within the next `ms`, including tasks scheduled by
/// the tasks themselves.
pub fn drain(
    scheduler: &mut ManualScheduler,
    ms: u64,
    mut dispatch: impl FnMut(&mut ManualScheduler, TaskId, Task),
) {
    let until = scheduler.now() + ms;
    while let Some((id, task)) = scheduler.pop_due(until) {
        dispatch(scheduler, id, task);
    }
    scheduler.settle(until);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub fn test_site() -> TestSite {
    site_with(FakeRenderer::page(), MemoryStore::default())
}

pub fn site_with(renderer: FakeRenderer, store: MemoryStore) -> TestSite {
    Site::new(
        SiteConfig::default(),
        renderer,
        ManualScheduler::default(),
        store,
    )
}

pub fn advance(site: &mut TestSite, ms: u64) {
    let until = site.scheduler().now() + ms;
    while let Some((id, task)) = site.scheduler_mut().pop_due(until) {
        site.run_task(id, task);
    }
    site.scheduler_mut().settle(until);
}
