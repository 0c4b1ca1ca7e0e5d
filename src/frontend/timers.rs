use std::{collections::HashMap, rc::Weak};

use slide_portfolio::scheduler::{Scheduler, Task, TaskId};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use super::SiteCell;

/// `setTimeout`-backed scheduler. Each timer dispatches its task back into
/// the site it belongs to; the callback frees itself after firing.
pub struct WebScheduler {
    site: Weak<SiteCell>,
    handles: HashMap<TaskId, i32>,
    next_id: u64,
}

impl WebScheduler {
    pub fn new(site: Weak<SiteCell>) -> Self {
        Self {
            site,
            handles: HashMap::new(),
            next_id: 0,
        }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&mut self, delay_ms: u32, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let site = self.site.clone();
        let callback = Closure::once_into_js(move || dispatch(&site, id, task));

        let handle = window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()
        });
        match handle {
            Some(handle) => {
                self.handles.insert(id, handle);
            }
            None => log::warn!("could not schedule {task:?}"),
        }
        id
    }

    fn cancel(&mut self, id: TaskId) {
        if let Some(handle) = self.handles.remove(&id) {
            if let Some(w) = window() {
                w.clear_timeout_with_handle(handle);
            }
        }
    }

    fn finished(&mut self, id: TaskId) {
        self.handles.remove(&id);
    }
}

fn dispatch(site: &Weak<SiteCell>, id: TaskId, task: Task) {
    let Some(site) = site.upgrade() else {
        return;
    };
    let Ok(mut slot) = site.try_borrow_mut() else {
        log::warn!("dropped {task:?}: site busy");
        return;
    };
    if let Some(site) = slot.as_mut() {
        site.run_task(id, task);
    }
}
