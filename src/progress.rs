use log::debug;

use crate::slot::BarSlot;

/// Pins `value` into `[0, total]`. NaN becomes 0.
pub fn clamp_progress(value: f32, total: f32) -> f32 {
    let total = total.max(0.0);
    if value.is_nan() {
        return 0.0;
    }

    let clamped = value.clamp(0.0, total);
    if clamped != value {
        debug!("Progress {} clamped to {} (total {}).", value, clamped, total);
    }
    clamped
}

/// How much of `slot` the global `progress` covers.
///
/// Reaching the slot's end yields exactly `magnitude`, so a full slot stays full despite float drift in `start`.
pub fn filled_amount(slot: &BarSlot, progress: f32) -> f32 {
    if progress >= slot.end() {
        slot.magnitude
    } else if slot.contains(progress) {
        (progress - slot.start).clamp(0.0, slot.magnitude)
    } else {
        0.0
    }
}

/// Writes the filled amount of every slot for `progress` and rebuilds their fill shapes.
pub fn map_progress(slots: &mut [BarSlot], progress: f32) {
    for slot in slots.iter_mut() {
        slot.filled = filled_amount(slot, progress);
        slot.update_fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use egui::{pos2, Color32, Rect};

    const EPSILON: f32 = 1e-4;

    fn slots(magnitudes: &[f32]) -> Vec<BarSlot> {
        let mut start = 0.0;
        magnitudes
            .iter()
            .enumerate()
            .map(|(i, &m)| {
                let mut slot = BarSlot::new(i, magnitudes.len(), start, &Segment::new(m, Color32::RED), Color32::WHITE);
                let left = i as f32 * 110.0;
                slot.measure(Rect::from_min_max(pos2(left, 0.0), pos2(left + 100.0, 8.0)));
                start += m;
                slot
            })
            .collect()
    }

    fn filled(slots: &[BarSlot]) -> Vec<f32> {
        slots.iter().map(|s| s.filled).collect()
    }

    #[test]
    fn clamps_into_range() {
        assert_eq!(clamp_progress(-2.0, 9.0), 0.0);
        assert_eq!(clamp_progress(12.0, 9.0), 9.0);
        assert_eq!(clamp_progress(4.5, 9.0), 4.5);
        assert_eq!(clamp_progress(f32::NAN, 9.0), 0.0);
        assert_eq!(clamp_progress(3.0, 0.0), 0.0);
    }

    #[test]
    fn fills_across_segment_boundaries() {
        let mut slots = slots(&[3.0, 3.0, 3.0]);
        map_progress(&mut slots, 5.0);

        assert_eq!(filled(&slots), vec![3.0, 2.0, 0.0]);
        assert!(slots[0].is_full());
        assert_eq!(slots[0].fill, slots[0].background);
    }

    #[test]
    fn filled_amounts_sum_to_progress() {
        let mut slots = slots(&[1.0, 2.5, 0.5, 4.0]);
        let total = 8.0;

        for step in 0..=80 {
            let progress = total * step as f32 / 80.0;
            map_progress(&mut slots, progress);
            let sum: f32 = slots.iter().map(|s| s.filled).sum();
            assert!((sum - progress).abs() < EPSILON, "progress {} summed to {}", progress, sum);
        }
    }

    #[test]
    fn mapping_is_idempotent() {
        let mut slots = slots(&[2.0, 3.0, 4.0]);
        map_progress(&mut slots, 6.3);
        let first = slots.clone();
        map_progress(&mut slots, 6.3);
        assert_eq!(first, slots);
    }

    #[test]
    fn boundary_value_fills_the_earlier_slot_completely() {
        let mut slots = slots(&[3.0, 3.0]);
        map_progress(&mut slots, 3.0);
        assert_eq!(filled(&slots), vec![3.0, 0.0]);
    }

    #[test]
    fn progress_at_total_fills_uneven_slots_exactly() {
        let magnitudes = [0.1, 0.2, 0.3, 0.7];
        let mut slots = slots(&magnitudes);
        let total: f32 = magnitudes.iter().sum();

        map_progress(&mut slots, total);

        for (slot, &magnitude) in slots.iter().zip(&magnitudes) {
            assert_eq!(slot.filled, magnitude);
            assert!(slot.is_full());
            assert_eq!(slot.fill, slot.background);
        }
    }

    #[test]
    fn single_segment_fill_is_a_rounded_start_pill() {
        let mut slots = slots(&[4.0]);
        map_progress(&mut slots, 2.0);

        let slot = &slots[0];
        assert_eq!(slot.filled, 2.0);
        assert_eq!(slot.fill.cut, None);
        assert!((slot.fill.corner_radius - 4.0).abs() < EPSILON);
        assert!((slot.fill.body.width() - 52.0).abs() < EPSILON);
    }

    #[test]
    fn zero_progress_leaves_everything_empty() {
        let mut slots = slots(&[3.0, 3.0, 3.0]);
        map_progress(&mut slots, 0.0);
        assert_eq!(filled(&slots), vec![0.0, 0.0, 0.0]);
        assert!(slots.iter().all(|s| s.fill.is_empty()));
    }
}
