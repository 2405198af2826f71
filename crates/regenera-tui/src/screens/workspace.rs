use tokio::sync::mpsc;
use tracing::debug;

use regenera_core::auth::AuthSubscription;
use regenera_core::content::{AiModel, UserRole, WorkspaceTab, AI_MODELS};
use regenera_core::interaction::{Selection, SimulatedTask, TabNavigator, TaskNotice, TaskStatus};
use regenera_core::MotionConfig;

use super::Protected;

/// Outcome of pressing "Run Simulation"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationStart {
    Started,
    AlreadyRunning,
    /// Auditors only observe
    NotPermitted,
}

/// The ecosystem healing workspace
#[derive(Debug)]
pub struct WorkspaceView {
    pub guard: Protected,
    pub tabs: TabNavigator<WorkspaceTab>,
    pub role: UserRole,
    /// Model picked for the next simulation
    pub model: Selection<&'static str>,
    simulation: SimulatedTask,
}

impl WorkspaceView {
    pub fn mount(
        subscription: AuthSubscription,
        config: &MotionConfig,
        notices: mpsc::UnboundedSender<TaskNotice>,
    ) -> Self {
        let notice = TaskNotice::new(
            "Simulation Complete",
            Some("Restoration forecast generated successfully"),
        );
        Self {
            guard: Protected::mount(subscription),
            tabs: TabNavigator::default(),
            role: UserRole::default(),
            model: Selection::with_active(AI_MODELS[0].id),
            simulation: SimulatedTask::new(config.simulation_delay(), notice, notices),
        }
    }

    pub fn selected_model(&self) -> &'static AiModel {
        self.model
            .active()
            .and_then(|id| AiModel::find(id))
            .unwrap_or(&AI_MODELS[0])
    }

    pub fn model_step(&mut self, delta: isize) {
        let len = AI_MODELS.len() as isize;
        let index = AI_MODELS
            .iter()
            .position(|m| m.id == self.selected_model().id)
            .unwrap_or(0) as isize;
        self.model.set(AI_MODELS[(index + delta).rem_euclid(len) as usize].id);
    }

    pub fn toggle_role(&mut self) -> UserRole {
        self.role = self.role.toggled();
        debug!("Workspace role switched to {}", self.role.label());
        self.role
    }

    pub fn run_simulation(&self) -> SimulationStart {
        if !self.role.can_operate() {
            return SimulationStart::NotPermitted;
        }
        if self.simulation.start() {
            SimulationStart::Started
        } else {
            SimulationStart::AlreadyRunning
        }
    }

    pub fn simulation_status(&self) -> TaskStatus {
        self.simulation.status()
    }

    pub fn unmount(self) {
        self.guard.release();
        self.simulation.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regenera_core::auth::MemoryAuth;
    use regenera_core::IdentityProvider;
    use std::time::Duration;

    fn view() -> (WorkspaceView, mpsc::UnboundedReceiver<TaskNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let auth = MemoryAuth::demo();
        (WorkspaceView::mount(auth.subscribe(), &MotionConfig::default(), tx), rx)
    }

    #[test]
    fn test_model_picker_cycles() {
        let (mut view, _rx) = view();
        assert_eq!(view.selected_model().id, "fungal-net-v2");
        view.model_step(1);
        assert_eq!(view.selected_model().id, "soil-carbon-pred");
        view.model_step(-2);
        assert_eq!(view.selected_model().id, "biodiversity-optimizer");
    }

    #[tokio::test(start_paused = true)]
    async fn test_auditor_cannot_run_simulation() {
        let (mut view, mut rx) = view();
        assert_eq!(view.toggle_role(), UserRole::Auditor);
        assert_eq!(view.run_simulation(), SimulationStart::NotPermitted);
        assert_eq!(view.simulation_status(), TaskStatus::Idle);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulation_runs_once_at_a_time() {
        let (view, mut rx) = view();
        assert_eq!(view.run_simulation(), SimulationStart::Started);
        assert_eq!(view.run_simulation(), SimulationStart::AlreadyRunning);

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.title, "Simulation Complete");
        assert_eq!(view.simulation_status(), TaskStatus::Completed);
        assert_eq!(view.run_simulation(), SimulationStart::Started);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_drops_pending_notice() {
        let (view, mut rx) = view();
        view.run_simulation();
        view.unmount();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
