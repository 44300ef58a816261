//! Animated stat counters.
//!
//! The counters stay at zero until the stats block first intersects the
//! viewport, then ease out to their targets over [`DURATION`]. The animation
//! runs once per page view.

use crate::config::{Stat, StatFormat};
use std::time::Duration;

pub const DURATION: Duration = Duration::from_millis(2000);

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// `Compact` renders thousands as `12K+`; everything else is rounded.
pub fn format_stat_value(value: f64, format: StatFormat, suffix: &str) -> String {
    if format == StatFormat::Compact && value >= 1000.0 {
        let thousands = (value / 1000.0).floor() as u64;
        return format!("{thousands}K{suffix}");
    }
    format!("{}{suffix}", value.round() as u64)
}

/// Final text for a stat, as rendered before/without the animation.
pub fn format_stat(stat: &Stat) -> String {
    format_stat_value(stat.value as f64, stat.format, &stat.suffix)
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    targets: Vec<f64>,
    started_at: Option<Duration>,
}

impl CounterAnimation {
    pub fn new(stats: &[Stat]) -> Self {
        Self {
            targets: stats.iter().map(|s| s.value as f64).collect(),
            started_at: None,
        }
    }

    /// Start on the first intersection; later calls are ignored. Returns
    /// true when this call started the animation.
    pub fn on_intersect(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    fn progress(&self, now: Duration) -> f64 {
        match self.started_at {
            None => 0.0,
            Some(start) => {
                let elapsed = now.saturating_sub(start).as_secs_f64();
                (elapsed / DURATION.as_secs_f64()).min(1.0)
            }
        }
    }

    pub fn values_at(&self, now: Duration) -> Vec<f64> {
        let eased = ease_out_quart(self.progress(now));
        self.targets.iter().map(|t| (eased * t).round()).collect()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(value: u64, format: StatFormat) -> Stat {
        Stat {
            label: "x".into(),
            value,
            format,
            suffix: "+".into(),
        }
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn compact_format_uses_thousands() {
        assert_eq!(format_stat_value(12_500.0, StatFormat::Compact, "+"), "12K+");
        assert_eq!(format_stat_value(999.0, StatFormat::Compact, "+"), "999+");
        assert_eq!(format_stat_value(12_500.0, StatFormat::Number, "%"), "12500%");
    }

    #[test]
    fn values_stay_zero_until_intersection() {
        let anim = CounterAnimation::new(&[stat(100, StatFormat::Number)]);
        assert_eq!(anim.values_at(Duration::from_secs(5)), vec![0.0]);
        assert!(!anim.is_finished(Duration::from_secs(5)));
    }

    #[test]
    fn reaches_targets_after_duration() {
        let mut anim = CounterAnimation::new(&[
            stat(100, StatFormat::Number),
            stat(5000, StatFormat::Compact),
        ]);
        let start = Duration::from_millis(300);
        assert!(anim.on_intersect(start));
        let mid = anim.values_at(start + Duration::from_millis(1000));
        assert!(mid[0] > 0.0 && mid[0] < 100.0);
        let end = start + DURATION;
        assert_eq!(anim.values_at(end), vec![100.0, 5000.0]);
        assert!(anim.is_finished(end));
    }

    #[test]
    fn animation_starts_only_once() {
        let mut anim = CounterAnimation::new(&[stat(10, StatFormat::Number)]);
        assert!(anim.on_intersect(Duration::ZERO));
        assert!(!anim.on_intersect(Duration::from_secs(10)));
        assert!(anim.is_finished(DURATION));
    }
}
