use crate::renderer::ListKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Deferred work. Timers carry data rather than closures so the owner of the
/// state can dispatch them back into itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    FinishTransition { generation: u64 },
    RevealItem { list: ListKind, index: usize },
    FillSkillBar { index: usize },
    RevealProjectCard { index: usize },
    RefreshProjects,
    TypewriterTick,
    DismissLoader,
    ResetSubmitButton { clear_form: bool },
}

pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, task: Task) -> TaskId;
    fn cancel(&mut self, id: TaskId);

    /// Called once a scheduled task has been dispatched.
    fn finished(&mut self, _id: TaskId) {}
}
