use crate::{
    renderer::{Display, Group, ListKind, Node, Pose, Renderer},
    scheduler::{Scheduler, Task},
};

const SKILL_FILL_DELAY_MS: u32 = 400;
const SKILL_FILL_STAGGER_MS: u32 = 100;
const CARD_ENTRANCE_DELAY_MS: u32 = 300;
const CARD_ENTRANCE_STAGGER_MS: u32 = 150;
const CARD_ENTRANCE_OFFSET_PX: i32 = 30;
const CARD_ENTRANCE_TRANSITION: &str = "0.6s cubic-bezier(0.2, 0.8, 0.2, 1)";
const PROJECTS_REFRESH_DELAY_MS: u32 = 100;

/// One-shot decorations replayed every time a section becomes current.
#[derive(Debug)]
pub struct SectionEffects {
    skills_section: usize,
    projects_section: usize,
}

impl SectionEffects {
    pub fn new(skills_section: usize, projects_section: usize) -> Self {
        Self {
            skills_section,
            projects_section,
        }
    }

    pub fn skills_section(&self) -> usize {
        self.skills_section
    }

    pub fn on_enter<R: Renderer, S: Scheduler>(&self, section: usize, renderer: &mut R, scheduler: &mut S) {
        if section == self.skills_section {
            self.replay_skill_bars(renderer, scheduler);
        }
        if section == self.projects_section {
            self.replay_project_cards(renderer, scheduler);
        }
    }

    fn replay_skill_bars<R: Renderer, S: Scheduler>(&self, renderer: &mut R, scheduler: &mut S) {
        for index in 0..renderer.count(Group::SkillBars) {
            renderer.set_width(Node::SkillBar(index), "0");
            scheduler.schedule(
                SKILL_FILL_DELAY_MS + index as u32 * SKILL_FILL_STAGGER_MS,
                Task::FillSkillBar { index },
            );
        }
    }

    fn replay_project_cards<R: Renderer, S: Scheduler>(&self, renderer: &mut R, scheduler: &mut S) {
        for index in 0..renderer.count(Group::Items(ListKind::Projects)) {
            let card = Node::Item(ListKind::Projects, index);
            if renderer.display(card) == Display::None {
                continue;
            }
            renderer.set_pose(card, Pose::hidden(CARD_ENTRANCE_OFFSET_PX));
            scheduler.schedule(
                CARD_ENTRANCE_DELAY_MS + index as u32 * CARD_ENTRANCE_STAGGER_MS,
                Task::RevealProjectCard { index },
            );
        }

        // Cards may have been hidden by a resize while the section was away.
        scheduler.schedule(PROJECTS_REFRESH_DELAY_MS, Task::RefreshProjects);
    }

    pub fn fill_skill_bar<R: Renderer>(&self, index: usize, renderer: &mut R) {
        let node = Node::SkillBar(index);
        if let Some(width) = renderer.target_width(node) {
            renderer.set_width(node, &width);
        }
    }

    pub fn reveal_project_card<R: Renderer>(&self, index: usize, renderer: &mut R) {
        renderer.set_pose(
            Node::Item(ListKind::Projects, index),
            Pose::settled(CARD_ENTRANCE_TRANSITION),
        );
    }
}
