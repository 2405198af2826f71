//! Eased counter animation
//!
//! `CounterRun` is the pure stepper: every step advances the run by one
//! frame and recomputes every metric from its target. `CounterAnimator`
//! drives a run from a tokio interval and hands each complete snapshot to
//! a frame callback until the last step, or until its handle is cancelled.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::config::{EasingType, MotionConfig};

/// A counted quantity shown in the impact section
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    /// Stable identifier across frames
    pub id: String,
    /// Final value, never negative
    pub target: f64,
    /// Value displayed at the current frame
    pub current: f64,
    /// Display suffix (e.g. "acres")
    pub unit: String,
}

impl Metric {
    pub fn new(id: impl Into<String>, target: f64, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.max(0.0),
            current: 0.0,
            unit: unit.into(),
        }
    }

    /// Share of the target reached, in percent
    pub fn percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 100.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }

    /// Compact current value (e.g. "1.2M", "850K", "47")
    pub fn display_value(&self) -> String {
        format_compact(self.current)
    }
}

/// Format a count with M/K suffixes
pub fn format_compact(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.0}K", num / 1_000.0)
    } else {
        format!("{}", num)
    }
}

/// One stepped animation over a fixed set of metrics
#[derive(Debug, Clone)]
pub struct CounterRun {
    metrics: Vec<Metric>,
    step_count: u32,
    elapsed_steps: u32,
    easing: EasingType,
}

impl CounterRun {
    /// Create a run starting every metric from zero
    pub fn new(metrics: Vec<Metric>, step_count: u32, easing: EasingType) -> Self {
        let metrics = metrics
            .into_iter()
            .map(|metric| Metric { current: 0.0, ..metric })
            .collect();
        Self {
            metrics,
            step_count: step_count.max(1),
            elapsed_steps: 0,
            easing,
        }
    }

    #[inline]
    pub fn elapsed_steps(&self) -> u32 {
        self.elapsed_steps
    }

    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        self.elapsed_steps as f64 / self.step_count as f64
    }

    /// Progress after easing
    pub fn eased_progress(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed_steps >= self.step_count
    }

    /// Latest snapshot
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Advance one frame and return the full snapshot, or `None` once complete
    ///
    /// Intermediate values are truncated so they never exceed the target.
    /// The last frame lands on the target exactly, including non-integer
    /// targets where truncation would leave a gap.
    pub fn step(&mut self) -> Option<&[Metric]> {
        if self.is_complete() {
            return None;
        }

        self.elapsed_steps += 1;
        let eased = self.eased_progress();
        let last = self.is_complete();

        for metric in &mut self.metrics {
            metric.current = if last {
                metric.target
            } else {
                (metric.target * eased).floor().min(metric.target)
            };
        }

        Some(&self.metrics)
    }
}

/// Spawns counter runs on the tokio runtime
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    step_interval: Duration,
    step_count: u32,
    easing: EasingType,
}

impl CounterAnimator {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            step_interval: config.step_interval(),
            step_count: config.counter_steps.max(1),
            easing: config.easing,
        }
    }

    #[inline]
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Start animating `metrics` from zero to their targets
    ///
    /// `on_frame` receives the complete snapshot once per step, strictly in
    /// step order, the first one a full interval after the call. The timer
    /// is released after the last step; call [`AnimationHandle::cancel`] to
    /// release it earlier.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, metrics: Vec<Metric>, mut on_frame: F) -> AnimationHandle
    where
        F: FnMut(&[Metric]) + Send + 'static,
    {
        let mut run = CounterRun::new(metrics, self.step_count, self.easing);
        // tokio intervals cannot have a zero period
        let period = self.step_interval.max(Duration::from_millis(1));

        debug!(
            "Starting counter animation: {} metrics, {} steps every {:?}",
            run.metrics().len(),
            run.step_count(),
            period
        );

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while !run.is_complete() {
                ticker.tick().await;
                if let Some(frame) = run.step() {
                    on_frame(frame);
                }
            }

            debug!("Counter animation finished after {} steps", run.elapsed_steps());
        });

        AnimationHandle { task }
    }
}

/// Ownership of a running counter animation's timer
#[derive(Debug)]
pub struct AnimationHandle {
    task: JoinHandle<()>,
}

impl AnimationHandle {
    /// Stop the animation immediately; no further frames are delivered
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("Cancelling counter animation");
            self.task.abort();
        }
    }

    /// Whether the timer has been released
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the last frame was delivered (or the run was cancelled)
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                warn!("Counter animation task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn acres() -> Metric {
        Metric::new("ecosystems", 1_200_000.0, "acres")
    }

    #[test]
    fn test_first_and_last_frame() {
        let mut run = CounterRun::new(vec![acres()], 60, EasingType::Cubic);

        let first = run.step().unwrap()[0].current;
        // floor(1_200_000 * (1 - (59/60)^3))
        assert_eq!(first, 59_005.0);

        let mut last = first;
        while let Some(frame) = run.step() {
            last = frame[0].current;
        }
        assert_eq!(last, 1_200_000.0);
        assert_eq!(run.elapsed_steps(), 60);
        assert!(run.step().is_none());
    }

    #[test]
    fn test_integer_targets_monotonic_and_exact() {
        let metrics = vec![
            acres(),
            Metric::new("carbon", 850.0, "kt CO₂"),
            Metric::new("innovations", 47.0, ""),
            Metric::new("water", 85.0, "M liters"),
            Metric::new("zero", 0.0, ""),
        ];
        let mut run = CounterRun::new(metrics.clone(), 60, EasingType::Cubic);
        let mut previous: Vec<f64> = vec![0.0; metrics.len()];

        while let Some(frame) = run.step() {
            for (metric, prev) in frame.iter().zip(previous.iter_mut()) {
                assert!(metric.current >= *prev, "{} decreased", metric.id);
                assert!(metric.current <= metric.target, "{} overshot", metric.id);
                assert_eq!(metric.current, metric.current.floor());
                *prev = metric.current;
            }
        }

        for (metric, original) in run.metrics().iter().zip(&metrics) {
            assert_eq!(metric.current, original.target);
        }
    }

    #[test]
    fn test_non_integer_target_lands_exactly() {
        let mut run = CounterRun::new(vec![Metric::new("ph", 6.8, "")], 60, EasingType::Cubic);
        let mut frames = Vec::new();
        while let Some(frame) = run.step() {
            frames.push(frame[0].current);
        }
        assert_eq!(frames[frames.len() - 2], 6.0);
        assert_eq!(*frames.last().unwrap(), 6.8);
    }

    #[test]
    fn test_run_resets_current_values() {
        let mut started = acres();
        started.current = 500.0;
        let run = CounterRun::new(vec![started], 60, EasingType::Cubic);
        assert_eq!(run.metrics()[0].current, 0.0);
        assert_eq!(run.progress(), 0.0);
    }

    #[test]
    fn test_zero_steps_is_single_frame() {
        let mut run = CounterRun::new(vec![acres()], 0, EasingType::Cubic);
        assert_eq!(run.step().unwrap()[0].current, 1_200_000.0);
        assert!(run.is_complete());
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_200_000.0), "1.2M");
        assert_eq!(format_compact(850_000.0), "850K");
        assert_eq!(format_compact(59_005.0), "59K");
        assert_eq!(format_compact(850.0), "850");
        assert_eq!(format_compact(0.0), "0");
    }

    #[test]
    fn test_metric_percent() {
        let mut metric = Metric::new("carbon", 850.0, "kt CO₂");
        assert_eq!(metric.percent(), 0.0);
        metric.current = 425.0;
        assert_eq!(metric.percent(), 50.0);
        assert_eq!(Metric::new("none", 0.0, "").percent(), 100.0);
        assert_eq!(Metric::new("negative", -5.0, "").target, 0.0);
    }

    fn collecting_animator() -> (CounterAnimator, Arc<Mutex<Vec<Vec<Metric>>>>) {
        let animator = CounterAnimator::new(&MotionConfig::default());
        (animator, Arc::new(Mutex::new(Vec::new())))
    }

    #[tokio::test(start_paused = true)]
    async fn test_animator_delivers_every_frame() {
        let (animator, frames) = collecting_animator();
        let sink = frames.clone();

        let started = Instant::now();
        let handle = animator.start(vec![acres()], move |frame| {
            sink.lock().unwrap().push(frame.to_vec());
        });
        handle.join().await;

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames[0][0].current, 59_005.0);
        assert_eq!(frames[59][0].current, 1_200_000.0);
        assert!(frames.windows(2).all(|w| w[0][0].current <= w[1][0].current));
        assert!(started.elapsed() >= Duration::from_millis(1990));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let (animator, frames) = collecting_animator();
        let sink = frames.clone();
        let interval = animator.step_interval();

        let handle = animator.start(vec![acres()], move |frame| {
            sink.lock().unwrap().push(frame.to_vec());
        });

        tokio::time::sleep(interval * 10 + interval / 2).await;
        handle.cancel();
        let delivered = frames.lock().unwrap().len();
        assert!(delivered > 0 && delivered < 60);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(frames.lock().unwrap().len(), delivered);
        assert!(handle.is_finished());
    }
}
