//! Fire-and-forget simulated job with a timed completion

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Message delivered when a run completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNotice {
    pub title: String,
    pub detail: Option<String>,
}

impl TaskNotice {
    pub fn new(title: impl Into<String>, detail: Option<&str>) -> Self {
        Self {
            title: title.into(),
            detail: detail.map(str::to_string),
        }
    }
}

/// A job that completes on its own after a fixed delay
///
/// There is no cancellation. The pending completion only keeps a weak
/// reference to the status, so once the task is released the completion
/// neither touches the status nor sends its notice.
#[derive(Debug)]
pub struct SimulatedTask {
    status: Arc<Mutex<TaskStatus>>,
    delay: Duration,
    notice: TaskNotice,
    notify: mpsc::UnboundedSender<TaskNotice>,
}

fn lock(status: &Mutex<TaskStatus>) -> MutexGuard<'_, TaskStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimulatedTask {
    pub fn new(
        delay: Duration,
        notice: TaskNotice,
        notify: mpsc::UnboundedSender<TaskNotice>,
    ) -> Self {
        Self {
            status: Arc::new(Mutex::new(TaskStatus::Idle)),
            delay,
            notice,
            notify,
        }
    }

    pub fn status(&self) -> TaskStatus {
        *lock(&self.status)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status() == TaskStatus::Running
    }

    /// Begin a run; returns false (and does nothing) while one is in flight
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> bool {
        {
            let mut status = lock(&self.status);
            if *status == TaskStatus::Running {
                debug!("Simulation already running, ignoring start");
                return false;
            }
            *status = TaskStatus::Running;
        }

        info!("Simulation started, completing in {:?}", self.delay);

        let status = Arc::downgrade(&self.status);
        let notice = self.notice.clone();
        let notify = self.notify.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(status) = status.upgrade() else {
                debug!("Simulation released before completion, dropping notice");
                return;
            };
            *lock(&status) = TaskStatus::Completed;

            if notify.send(notice).is_err() {
                warn!("Failed to send simulation notice: receiver dropped");
            }
        });

        true
    }

    /// Tear the task down; a pending completion becomes a no-op
    pub fn release(self) {
        debug!("Releasing simulated task ({:?})", self.status());
    }
}
