//! Single-shot visibility trigger
//!
//! A region is observed against viewport reports delivered by the render
//! loop. The callback runs the first time the visible fraction of the
//! region reaches the threshold; the trigger then detaches for good and
//! never re-arms, even if the region leaves and re-enters the viewport.

use tracing::debug;

/// A vertical band of content rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: u32,
    pub height: u32,
}

impl Region {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// First row past the region
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Fraction (0.0 to 1.0) of `region` covered by `viewport`
///
/// A zero-height region is never visible.
pub fn visible_fraction(region: Region, viewport: Region) -> f64 {
    if region.height == 0 {
        return 0.0;
    }
    let start = region.top.max(viewport.top);
    let end = region.bottom().min(viewport.bottom());
    if end <= start {
        0.0
    } else {
        (end - start) as f64 / region.height as f64
    }
}

/// Fires its callback once when the observed region becomes visible enough
pub struct VisibilityTrigger<F = Box<dyn FnOnce() + Send>>
where
    F: FnOnce(),
{
    region: Option<Region>,
    threshold: f64,
    callback: Option<F>,
}

impl<F: FnOnce()> VisibilityTrigger<F> {
    /// Start observing `region`
    ///
    /// An absent region leaves the trigger inert: reports are ignored and
    /// the callback is dropped without running.
    pub fn observe(region: Option<Region>, threshold: f64, callback: F) -> Self {
        if region.is_none() {
            debug!("No region to observe, visibility trigger stays inert");
        }
        Self {
            region,
            threshold: threshold.clamp(0.0, 1.0),
            callback: region.map(|_| callback),
        }
    }

    /// Report the current viewport; returns true if this report fired the callback
    pub fn report(&mut self, viewport: Region) -> bool {
        let Some(region) = self.region else {
            return false;
        };
        if self.callback.is_none() {
            return false;
        }

        let fraction = visible_fraction(region, viewport);
        if fraction <= 0.0 || fraction < self.threshold {
            return false;
        }

        debug!(
            "Region {:?} crossed visibility threshold ({:.2} >= {:.2})",
            region, fraction, self.threshold
        );
        self.region = None;
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Move the observed region (layout changed) while still armed
    pub fn relocate(&mut self, region: Region) {
        if self.is_armed() {
            self.region = Some(region);
        }
    }

    /// Detach without firing
    pub fn disconnect(&mut self) {
        self.region = None;
        self.callback = None;
    }

    /// Whether a future report can still fire the callback
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.region.is_some() && self.callback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_trigger(region: Option<Region>, threshold: f64) -> (VisibilityTrigger<impl FnOnce()>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let trigger = VisibilityTrigger::observe(region, threshold, move || counter.set(counter.get() + 1));
        (trigger, fired)
    }

    #[test]
    fn test_visible_fraction() {
        let region = Region::new(100, 20);
        assert_eq!(visible_fraction(region, Region::new(0, 50)), 0.0);
        assert_eq!(visible_fraction(region, Region::new(0, 110)), 0.5);
        assert_eq!(visible_fraction(region, Region::new(90, 50)), 1.0);
        assert_eq!(visible_fraction(region, Region::new(115, 50)), 0.25);
        assert_eq!(visible_fraction(Region::new(10, 0), Region::new(0, 50)), 0.0);
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let (mut trigger, fired) = counting_trigger(Some(Region::new(100, 20)), 0.3);

        assert!(!trigger.report(Region::new(0, 105)));
        assert_eq!(fired.get(), 0);

        assert!(trigger.report(Region::new(0, 106)));
        assert_eq!(fired.get(), 1);
        assert!(!trigger.is_armed());

        // Leaving and re-entering does not re-arm
        assert!(!trigger.report(Region::new(0, 10)));
        assert!(!trigger.report(Region::new(100, 20)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_never_fires_below_threshold() {
        let (mut trigger, fired) = counting_trigger(Some(Region::new(200, 40)), 0.3);

        // Scroll back and forth showing at most 11 of the 40 rows
        for top in (0..=171).chain((0..=171).rev()) {
            assert!(!trigger.report(Region::new(top, 40)));
        }

        assert_eq!(fired.get(), 0);
        assert!(trigger.is_armed());

        // One more row reaches exactly 30%
        assert!(trigger.report(Region::new(172, 40)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_absent_region_is_noop() {
        let (mut trigger, fired) = counting_trigger(None, 0.3);
        assert!(!trigger.is_armed());
        assert!(!trigger.report(Region::new(0, 1000)));
        trigger.relocate(Region::new(0, 10));
        assert!(!trigger.report(Region::new(0, 1000)));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_disconnect_prevents_firing() {
        let (mut trigger, fired) = counting_trigger(Some(Region::new(0, 10)), 0.3);
        trigger.disconnect();
        assert!(!trigger.report(Region::new(0, 10)));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_relocate_follows_layout() {
        let (mut trigger, fired) = counting_trigger(Some(Region::new(500, 10)), 0.5);
        assert!(!trigger.report(Region::new(0, 40)));
        trigger.relocate(Region::new(20, 10));
        assert!(trigger.report(Region::new(0, 40)));
        assert_eq!(fired.get(), 1);
    }
}
