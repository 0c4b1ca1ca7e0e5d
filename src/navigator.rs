use crate::{
    renderer::{Group, Node, Renderer},
    scheduler::{Scheduler, Task, TaskId},
};

const ACTIVE: &str = "active";
const TRANSIENT_CLASSES: [&str; 4] = ["exit-up", "exit-down", "enter-up", "enter-down"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn exit_class(self) -> &'static str {
        match self {
            Self::Forward => "exit-up",
            Self::Backward => "exit-down",
        }
    }

    fn enter_class(self) -> &'static str {
        match self {
            Self::Forward => "enter-up",
            Self::Backward => "enter-down",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub to: usize,
    pub direction: Direction,
}

/// Full-screen section state machine. At most one transition is in flight;
/// requests made meanwhile are dropped, never queued.
#[derive(Debug)]
pub struct SectionNavigator {
    total: usize,
    current: usize,
    transitioning: bool,
    transition_ms: u32,
    generation: u64,
    pending_cleanup: Option<TaskId>,
}

impl SectionNavigator {
    pub fn new(total: usize, transition_ms: u32) -> Self {
        Self {
            total,
            current: 0,
            transitioning: false,
            transition_ms,
            generation: 0,
            pending_cleanup: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn go_to<R, S>(&mut self, target: usize, renderer: &mut R, scheduler: &mut S) -> Option<Transition>
    where
        R: Renderer,
        S: Scheduler,
    {
        if self.transitioning || target >= self.total || target == self.current {
            return None;
        }

        if let Some(stale) = self.pending_cleanup.take() {
            scheduler.cancel(stale);
        }

        let from = self.current;
        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.transitioning = true;

        renderer.set_class(Node::Section(from), ACTIVE, false);
        for class in TRANSIENT_CLASSES {
            renderer.set_class(Node::Section(from), class, false);
        }
        renderer.set_class(Node::Section(from), direction.exit_class(), true);
        renderer.set_class(Node::Section(target), direction.enter_class(), true);
        renderer.reflow(Node::Section(target));
        renderer.set_class(Node::Section(target), ACTIVE, true);

        self.generation += 1;
        self.pending_cleanup = Some(scheduler.schedule(
            self.transition_ms,
            Task::FinishTransition {
                generation: self.generation,
            },
        ));

        self.current = target;
        self.sync_indicators(renderer);
        log::debug!("section {from} -> {target}");

        Some(Transition {
            to: target,
            direction,
        })
    }

    /// Strips transient markers from every section but the current one and
    /// releases the lock. Cleanups of superseded transitions are ignored.
    pub fn finish_transition<R: Renderer>(&mut self, generation: u64, renderer: &mut R) -> bool {
        if generation != self.generation || !self.transitioning {
            return false;
        }

        let sections = self.total.max(renderer.count(Group::Sections));
        for index in (0..sections).filter(|index| *index != self.current) {
            for class in TRANSIENT_CLASSES {
                renderer.set_class(Node::Section(index), class, false);
            }
        }

        self.transitioning = false;
        self.pending_cleanup = None;
        true
    }

    pub fn sync_indicators<R: Renderer>(&self, renderer: &mut R) {
        for index in 0..renderer.count(Group::NavDots) {
            renderer.set_class(Node::NavDot(index), ACTIVE, index == self.current);
        }
        renderer.set_text(Node::SectionCounter, &counter_label(self.current));
    }
}

pub fn counter_label(index: usize) -> String {
    format!("{:02}", index + 1)
}
