use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::{debug, info};

use regenera_core::content::{impact_metrics, JOIN_OPTIONS, LAYERS, PODS};
use regenera_core::interaction::Selection;
use regenera_core::motion::{AnimationHandle, CounterAnimator, Metric, Region, VisibilityTrigger};
use regenera_core::MotionConfig;

/// Sections of the landing page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    Hero,
    Mission,
    Pods,
    Layers,
    Impact,
    Join,
    Footer,
}

impl LandingSection {
    pub const ALL: [LandingSection; 7] = [
        LandingSection::Hero,
        LandingSection::Mission,
        LandingSection::Pods,
        LandingSection::Layers,
        LandingSection::Impact,
        LandingSection::Join,
        LandingSection::Footer,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LandingSection::Hero => "Welcome",
            LandingSection::Mission => "Mission",
            LandingSection::Pods => "Innovation Pods",
            LandingSection::Layers => "Multi-Consciousness",
            LandingSection::Impact => "Impact",
            LandingSection::Join => "Join",
            LandingSection::Footer => "Footer",
        }
    }
}

/// Counter snapshot tagged with the landing mount that produced it
#[derive(Debug, Clone)]
pub struct CounterFrame {
    pub mount: u64,
    pub metrics: Vec<Metric>,
}

type AnimationSlot = Arc<Mutex<Option<AnimationHandle>>>;

fn lock(slot: &AnimationSlot) -> MutexGuard<'_, Option<AnimationHandle>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scroll position, toggles and impact counters of a mounted landing page
pub struct LandingView {
    /// First visible content row
    pub scroll: u16,
    pub viewport_height: u16,
    pub content_height: u16,
    sections: Vec<(LandingSection, Region)>,
    /// Hovered innovation pod
    pub pods: Selection<u32>,
    /// Expanded consciousness layer
    pub layers: Selection<&'static str>,
    pub layer_cursor: usize,
    /// Expanded join option
    pub join: Selection<&'static str>,
    pub join_cursor: usize,
    /// Latest counter snapshot
    pub impact: Vec<Metric>,
    animator: CounterAnimator,
    threshold: f64,
    mount: u64,
    frames: mpsc::UnboundedSender<CounterFrame>,
    trigger: Option<VisibilityTrigger>,
    animation: AnimationSlot,
}

impl LandingView {
    /// `mount` must differ between successive landing mounts
    pub fn new(config: &MotionConfig, mount: u64, frames: mpsc::UnboundedSender<CounterFrame>) -> Self {
        Self {
            scroll: 0,
            viewport_height: 0,
            content_height: 0,
            sections: Vec::new(),
            pods: Selection::new(),
            layers: Selection::new(),
            layer_cursor: 0,
            join: Selection::new(),
            join_cursor: 0,
            impact: impact_metrics(),
            animator: CounterAnimator::new(config),
            threshold: config.visibility_threshold,
            mount,
            frames,
            trigger: None,
            animation: Arc::new(Mutex::new(None)),
        }
    }

    /// Record where each section landed in the last layout pass
    pub fn set_layout(
        &mut self,
        sections: Vec<(LandingSection, Region)>,
        content_height: u16,
        viewport_height: u16,
    ) {
        self.sections = sections;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn section_region(&self, section: LandingSection) -> Option<Region> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, region)| *region)
    }

    pub fn viewport(&self) -> Region {
        Region::new(self.scroll as u32, self.viewport_height as u32)
    }

    /// Section under the upper third of the viewport
    pub fn current_section(&self) -> LandingSection {
        let focus_row = self.scroll as u32 + self.viewport_height as u32 / 3;
        self.sections
            .iter()
            .find(|(_, region)| region.top <= focus_row && focus_row < region.bottom())
            .map(|(section, _)| *section)
            .unwrap_or(LandingSection::Hero)
    }

    /// Feed the viewport to the impact trigger; call after every layout pass
    pub fn observe_viewport(&mut self) {
        let Some(region) = self.section_region(LandingSection::Impact) else {
            return;
        };

        match self.trigger.as_mut() {
            Some(trigger) => trigger.relocate(region),
            None => {
                // First layout of this mount
                let animator = self.animator.clone();
                let frames = self.frames.clone();
                let mount = self.mount;
                let slot = Arc::clone(&self.animation);
                let metrics = impact_metrics();
                let start_counters: Box<dyn FnOnce() + Send> = Box::new(move || {
                    info!("Impact section in view, starting counters");
                    let handle = animator.start(metrics, move |frame| {
                        // A closed channel means the app is shutting down
                        let _ = frames.send(CounterFrame {
                            mount,
                            metrics: frame.to_vec(),
                        });
                    });
                    *lock(&slot) = Some(handle);
                });
                self.trigger = Some(VisibilityTrigger::observe(
                    Some(region),
                    self.threshold,
                    start_counters,
                ));
            }
        }

        let viewport = self.viewport();
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.report(viewport);
        }

        if self.current_section() != LandingSection::Pods && self.pods.active().is_some() {
            self.pods.clear();
        }
    }

    /// Take a counter snapshot; frames from another mount are dropped
    pub fn apply_frame(&mut self, frame: CounterFrame) -> bool {
        if frame.mount != self.mount {
            debug!("Dropping counter frame of mount {} in mount {}", frame.mount, self.mount);
            return false;
        }
        self.impact = frame.metrics;
        true
    }

    /// Counters are still ticking
    pub fn is_animating(&self) -> bool {
        lock(&self.animation)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The impact trigger fired during this mount
    pub fn counters_started(&self) -> bool {
        lock(&self.animation).is_some()
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn scroll_to(&mut self, section: LandingSection) {
        if let Some(region) = self.section_region(section) {
            self.scroll = (region.top.min(u16::MAX as u32) as u16).min(self.max_scroll());
        }
    }

    /// Move the hover/cursor of the current section
    pub fn step_item(&mut self, delta: isize) {
        match self.current_section() {
            LandingSection::Pods => {
                let index = self
                    .pods
                    .active()
                    .and_then(|id| PODS.iter().position(|pod| pod.id == *id));
                let next = match index {
                    Some(index) => wrap(index, delta, PODS.len()),
                    None if delta < 0 => PODS.len() - 1,
                    None => 0,
                };
                self.pods.set(PODS[next].id);
            }
            LandingSection::Layers => {
                self.layer_cursor = wrap(self.layer_cursor, delta, LAYERS.len());
            }
            LandingSection::Join => {
                self.join_cursor = wrap(self.join_cursor, delta, JOIN_OPTIONS.len());
            }
            _ => {}
        }
    }

    /// Activate whatever the current section offers
    pub fn select_item(&mut self) {
        match self.current_section() {
            LandingSection::Hero => self.scroll_to(LandingSection::Join),
            LandingSection::Mission => self.scroll_to(LandingSection::Pods),
            LandingSection::Layers => {
                if let Some(layer) = LAYERS.get(self.layer_cursor) {
                    let expanded = self.layers.toggle(layer.id);
                    debug!("Layer {} expanded: {}", layer.id, expanded.is_some());
                }
            }
            LandingSection::Join => {
                if let Some(option) = JOIN_OPTIONS.get(self.join_cursor) {
                    self.join.toggle(option.id);
                }
            }
            _ => {}
        }
    }

    /// Release the trigger and any running animation
    pub fn unmount(mut self) {
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.disconnect();
        }
        if let Some(handle) = lock(&self.animation).take() {
            handle.cancel();
        }
        debug!("Landing view unmounted");
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Seven sections of 20 rows each, 10-row viewport
    fn view() -> (LandingView, mpsc::UnboundedReceiver<CounterFrame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut view = LandingView::new(&MotionConfig::default(), 1, tx);
        let sections = LandingSection::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| (*section, Region::new(i as u32 * 20, 20)))
            .collect();
        view.set_layout(sections, 140, 10);
        (view, rx)
    }

    #[test]
    fn test_current_section_follows_scroll() {
        let (mut view, _rx) = view();
        assert_eq!(view.current_section(), LandingSection::Hero);
        view.scroll_to(LandingSection::Layers);
        assert_eq!(view.scroll, 60);
        assert_eq!(view.current_section(), LandingSection::Layers);
        view.scroll_to_bottom();
        assert_eq!(view.scroll, 130);
        assert_eq!(view.current_section(), LandingSection::Footer);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let (mut view, _rx) = view();
        view.scroll_by(-5);
        assert_eq!(view.scroll, 0);
        view.scroll_by(1000);
        assert_eq!(view.scroll, view.max_scroll());
    }

    #[test]
    fn test_pod_hover_cycles_and_clears_when_leaving() {
        let (mut view, _rx) = view();
        view.scroll_to(LandingSection::Pods);

        view.step_item(1);
        assert_eq!(view.pods.active(), Some(&PODS[0].id));
        view.step_item(-1);
        assert_eq!(view.pods.active(), Some(&PODS[PODS.len() - 1].id));

        view.scroll_to(LandingSection::Join);
        view.observe_viewport();
        assert_eq!(view.pods.active(), None);
    }

    #[test]
    fn test_layer_and_option_toggles_are_independent() {
        let (mut view, _rx) = view();
        view.scroll_to(LandingSection::Layers);
        view.step_item(1);
        view.select_item();
        assert_eq!(view.layers.active(), Some(&LAYERS[1].id));

        view.scroll_to(LandingSection::Join);
        view.select_item();
        assert_eq!(view.join.active(), Some(&JOIN_OPTIONS[0].id));
        assert_eq!(view.layers.active(), Some(&LAYERS[1].id));

        view.select_item();
        assert_eq!(view.join.active(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_counters_wait_for_impact_section() {
        let (mut view, mut rx) = view();

        // Impact spans rows 80..100, viewport 0..10
        view.observe_viewport();
        assert!(!view.counters_started());

        // 2 of 20 rows visible: below the 0.3 threshold
        view.scroll = 72;
        view.observe_viewport();
        assert!(!view.counters_started());

        view.scroll = 76;
        view.observe_viewport();
        assert!(view.counters_started());

        tokio::time::sleep(Duration::from_millis(2100)).await;
        let mut last = None;
        while let Ok(frame) = rx.try_recv() {
            last = Some(frame);
        }
        assert!(view.apply_frame(last.unwrap()));
        assert!(view.impact.iter().all(|m| m.current == m.target));
        assert!(!view.is_animating());
    }

    #[test]
    fn test_frames_of_another_mount_are_dropped() {
        let (mut view, _rx) = view();
        let mut stale = impact_metrics();
        for metric in &mut stale {
            metric.current = metric.target;
        }

        assert!(!view.apply_frame(CounterFrame { mount: 0, metrics: stale.clone() }));
        assert!(view.impact.iter().all(|m| m.current == 0.0));

        assert!(view.apply_frame(CounterFrame { mount: 1, metrics: stale }));
        assert!(view.impact.iter().all(|m| m.current == m.target));
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_fires_once_per_mount() {
        let (mut view, mut rx) = view();
        view.scroll_to(LandingSection::Impact);
        view.observe_viewport();
        tokio::time::sleep(Duration::from_millis(2100)).await;
        let first_run = std::iter::from_fn(|| rx.try_recv().ok()).count();
        assert_eq!(first_run, 60);

        view.scroll_to_top();
        view.observe_viewport();
        view.scroll_to(LandingSection::Impact);
        view.observe_viewport();
        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_counters() {
        let (mut view, mut rx) = view();
        view.scroll_to(LandingSection::Impact);
        view.observe_viewport();

        tokio::time::sleep(Duration::from_millis(500)).await;
        view.unmount();
        let delivered = std::iter::from_fn(|| rx.try_recv().ok()).count();

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(delivered < 60);
        assert!(rx.try_recv().is_err());
    }
}
