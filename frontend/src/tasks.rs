use std::rc::Rc;

use bingo_shared::TaskDto;
use log::error;
use yew::prelude::*;

use crate::api::ApiError;

/// Task list shown on the home board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskListState {
    pub tasks: Vec<TaskDto>,
    pub completed: Vec<i64>,
}

impl TaskListState {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_completed(&self, task_id: i64) -> bool {
        self.completed.contains(&task_id)
    }
}

#[derive(Debug)]
pub enum TaskAction {
    Loaded(Vec<TaskDto>),
    /// The previous list is kept; the error only goes to the log.
    LoadFailed(ApiError),
    Completed(i64),
}

impl Reducible for TaskListState {
    type Action = TaskAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TaskAction::Loaded(tasks) => Rc::new(Self {
                tasks,
                ..(*self).clone()
            }),
            TaskAction::LoadFailed(e) => {
                error!("Error fetching tasks: {}", e);
                self
            }
            TaskAction::Completed(task_id) => {
                if self.is_completed(task_id) {
                    return self;
                }
                let mut completed = self.completed.clone();
                completed.push(task_id);
                Rc::new(Self {
                    completed,
                    ..(*self).clone()
                })
            }
        }
    }
}
