use std::ops::Range;

use crate::{
    renderer::{Display, Group, ListKind, Node, Pose, Renderer},
    scheduler::{Scheduler, Task},
};

const STAGGER_MS: u32 = 100;
const HIDDEN_OFFSET_PX: i32 = 20;
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Page state for one list of uniform cards. The engine owns visibility and
/// ordering only; card content stays in the page.
#[derive(Debug)]
pub struct Pagination {
    list: ListKind,
    page_size: usize,
    reveal: Display,
    item_count: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(list: ListKind, page_size: usize, reveal: Display) -> Self {
        Self {
            list,
            page_size: page_size.max(1),
            reveal,
            item_count: 0,
            current_page: 0,
        }
    }

    pub fn projects(page_size: usize) -> Self {
        Self::new(ListKind::Projects, page_size, Display::Block)
    }

    pub fn journey(page_size: usize) -> Self {
        Self::new(ListKind::Journey, page_size, Display::Flex)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current_page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    pub fn show_page<R, S>(&mut self, page: usize, renderer: &mut R, scheduler: &mut S) -> bool
    where
        R: Renderer,
        S: Scheduler,
    {
        self.item_count = renderer.count(Group::Items(self.list));
        if page >= self.page_count() {
            return false;
        }

        for index in 0..self.item_count {
            let node = Node::Item(self.list, index);
            renderer.set_display(node, Display::None);
            renderer.set_pose(node, Pose::hidden(HIDDEN_OFFSET_PX));
        }

        self.current_page = page;
        for (slot, index) in self.visible_range().enumerate() {
            renderer.set_display(Node::Item(self.list, index), self.reveal);
            scheduler.schedule(
                slot as u32 * STAGGER_MS,
                Task::RevealItem {
                    list: self.list,
                    index,
                },
            );
        }

        self.render_controls(renderer);
        true
    }

    /// Shows the first page. The controls are rendered even when the list
    /// is empty and there is no page to show.
    pub fn open<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) {
        self.current_page = 0;
        if !self.show_page(0, renderer, scheduler) {
            self.render_controls(renderer);
        }
    }

    pub fn next_page<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) -> bool {
        self.current_page + 1 < self.page_count() && self.show_page(self.current_page + 1, renderer, scheduler)
    }

    pub fn prev_page<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) -> bool {
        self.current_page > 0 && self.show_page(self.current_page - 1, renderer, scheduler)
    }

    pub fn refresh<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) -> bool {
        self.show_page(self.current_page, renderer, scheduler)
    }

    /// Recounts the items and pulls the current page back inside the new
    /// page range. An empty list still gets its controls re-rendered.
    pub fn resize<R: Renderer, S: Scheduler>(&mut self, renderer: &mut R, scheduler: &mut S) {
        self.item_count = renderer.count(Group::Items(self.list));
        let pages = self.page_count();
        if self.current_page >= pages {
            self.current_page = pages.saturating_sub(1);
        }

        if !self.refresh(renderer, scheduler) {
            self.render_controls(renderer);
        }
    }

    pub fn reveal<R: Renderer>(&self, index: usize, renderer: &mut R) {
        renderer.set_pose(Node::Item(self.list, index), Pose::settled(REVEAL_TRANSITION));
    }

    fn render_controls<R: Renderer>(&self, renderer: &mut R) {
        let pages = self.page_count();
        renderer.render_page_dots(self.list, pages, self.current_page);
        renderer.set_text(Node::RangeLabel(self.list), &self.range_label());
        renderer.set_text(Node::TotalLabel(self.list), &self.item_count.to_string());
        renderer.set_disabled(Node::PrevButton(self.list), self.current_page == 0);
        renderer.set_disabled(
            Node::NextButton(self.list),
            self.current_page + 1 >= pages,
        );
    }

    fn range_label(&self) -> String {
        let range = self.visible_range();
        if range.is_empty() {
            "0-0".to_string()
        } else {
            format!("{}-{}", range.start + 1, range.end)
        }
    }
}
