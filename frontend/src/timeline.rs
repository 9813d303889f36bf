//! Scroll position to timeline progress.
//!
//! The timeline starts filling when the container's top edge crosses 25% of
//! the viewport height and is full when its bottom edge crosses 75%. Steps
//! light up in order as the progress passes `index / (count - 0.5)`, which
//! puts the last threshold just short of 1.0.

const START_TRIGGER: f64 = 0.25;
const END_TRIGGER: f64 = 0.75;

/// Bounding-client-rect of the timeline container plus `window.innerHeight`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineGeometry {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

pub fn scroll_progress(geometry: TimelineGeometry) -> f64 {
    let TimelineGeometry {
        top,
        bottom,
        viewport_height,
    } = geometry;
    if !(top.is_finite() && bottom.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }

    let start_trigger = viewport_height * START_TRIGGER;
    let end_trigger = viewport_height * END_TRIGGER;

    let total = (bottom - top) + (start_trigger - end_trigger);
    let scrolled = start_trigger - top;

    // Container shorter than half the viewport: no scroll range to spread over.
    if total <= 0.0 {
        return if scrolled >= 0.0 { 1.0 } else { 0.0 };
    }

    (scrolled / total).clamp(0.0, 1.0)
}

pub fn step_threshold(index: usize, step_count: usize) -> f64 {
    if index == 0 || step_count == 0 {
        return 0.0;
    }
    index as f64 / (step_count as f64 - 0.5)
}

pub fn is_step_active(progress: f64, index: usize, step_count: usize) -> bool {
    progress >= step_threshold(index, step_count)
}

pub fn active_step_count(progress: f64, step_count: usize) -> usize {
    (0..step_count)
        .take_while(|&i| is_step_active(progress, i, step_count))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(top: f64, height: f64) -> TimelineGeometry {
        TimelineGeometry {
            top,
            bottom: top + height,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn zero_before_container_reaches_start_trigger() {
        assert_eq!(scroll_progress(geometry(900.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(geometry(200.0, 1000.0)), 0.0);
    }

    #[test]
    fn one_after_bottom_passes_end_trigger() {
        // bottom at 600 == 75% of 800
        assert_eq!(scroll_progress(geometry(-400.0, 1000.0)), 1.0);
        assert_eq!(scroll_progress(geometry(-5000.0, 1000.0)), 1.0);
    }

    #[test]
    fn halfway_through_the_scroll_range() {
        // total = 1000 - 400 = 600, scrolled = 200 - top
        let p = scroll_progress(geometry(-100.0, 1000.0));
        assert!((p - 0.5).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn progress_is_monotone_in_scroll_position() {
        let mut last = 0.0;
        for step in 0..200 {
            let top = 1000.0 - step as f64 * 10.0;
            let p = scroll_progress(geometry(top, 1000.0));
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn short_container_switches_at_start_trigger() {
        assert_eq!(scroll_progress(geometry(250.0, 100.0)), 0.0);
        assert_eq!(scroll_progress(geometry(200.0, 100.0)), 1.0);
    }

    #[test]
    fn non_finite_geometry_is_zero() {
        assert_eq!(scroll_progress(geometry(f64::NAN, 1000.0)), 0.0);
        let g = TimelineGeometry {
            top: 0.0,
            bottom: 100.0,
            viewport_height: f64::INFINITY,
        };
        assert_eq!(scroll_progress(g), 0.0);
    }

    #[test]
    fn thresholds_for_four_steps() {
        assert_eq!(step_threshold(0, 4), 0.0);
        assert!((step_threshold(1, 4) - 1.0 / 3.5).abs() < 1e-12);
        assert!((step_threshold(3, 4) - 3.0 / 3.5).abs() < 1e-12);
        assert!(step_threshold(3, 4) < 1.0);
    }

    #[test]
    fn first_step_is_active_at_zero_progress() {
        assert!(is_step_active(0.0, 0, 4));
        assert!(!is_step_active(0.0, 1, 4));
        assert_eq!(active_step_count(0.0, 4), 1);
    }

    #[test]
    fn all_steps_active_at_full_progress() {
        assert_eq!(active_step_count(1.0, 4), 4);
        assert_eq!(active_step_count(0.9, 4), 4);
    }

    #[test]
    fn active_steps_form_a_prefix() {
        for i in 0..=100 {
            let progress = i as f64 / 100.0;
            let n = active_step_count(progress, 4);
            for index in 0..4 {
                assert_eq!(is_step_active(progress, index, 4), index < n);
            }
        }
    }
}
