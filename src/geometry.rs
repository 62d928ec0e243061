use egui::{pos2, vec2, Pos2, Rect};
use fully_pub::fully_pub;

use crate::style::BarStyle;

/// How the host constrains one dimension of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeMode {
    Exact(f32),
    AtMost(f32),
    Unspecified,
}

/// Only an exact constraint overrides the preferred size.
pub fn resolve_size(preferred: f32, mode: SizeMode) -> f32 {
    match mode {
        SizeMode::Exact(size) => size,
        SizeMode::AtMost(_) | SizeMode::Unspecified => preferred,
    }
}

/// Width left for the segments once both cap spacings, the cap decoration and the gaps between segments are taken out.
pub fn usable_width(track_width: f32, cap_radius: f32, spacing: f32, segment_count: usize) -> f32 {
    let gaps = segment_count.saturating_sub(1) as f32;
    (track_width - spacing * 2.0 - cap_radius * 2.0 - spacing * gaps).max(0.0)
}

/// Places one rect per magnitude, left to right, each `spacing` after the previous one's right edge.
///
/// Widths are proportional to the magnitudes. A zero `total` gives zero-width rects instead of dividing by zero.
pub fn allocate_segment_rects(layout: &TrackLayout, spacing: f32, segment_height: f32, magnitudes: &[f32]) -> Vec<Rect> {
    let total: f32 = magnitudes.iter().sum();
    let usable = usable_width(layout.rect.width(), layout.cap_radius, spacing, magnitudes.len());
    let middle = layout.middle_y();

    let mut current_right = layout.rect.min.x;
    magnitudes
        .iter()
        .map(|&magnitude| {
            let width = if total > 0.0 { usable * magnitude / total } else { 0.0 };

            let left = current_right + spacing;
            let top = middle - segment_height / 2.0;
            let rect = Rect::from_min_size(pos2(left, top), vec2(width, segment_height));

            current_right = rect.max.x;
            rect
        })
        .collect()
}

/// Everything about the track that does not depend on the segments.
#[fully_pub]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    rect: Rect,
    background_bar: Rect,
    circle_center: Pos2,
    cap_radius: f32,
    flag_rect: Rect,
}

impl TrackLayout {
    pub fn measure(rect: Rect, style: &BarStyle) -> Self {
        let middle = rect.center().y;
        let cap_radius = style.cap_radius();

        let background_bar = Rect::from_min_max(
            pos2(rect.min.x, middle - style.bg_bar_height / 2.0),
            pos2(rect.max.x, middle + style.bg_bar_height / 2.0),
        );

        let circle_center = pos2(rect.max.x - cap_radius, middle);
        let flag_half_size = (cap_radius - style.flag_icon_padding).max(0.0);
        let flag_rect = Rect::from_center_size(circle_center, vec2(flag_half_size, flag_half_size) * 2.0);

        Self {
            rect,
            background_bar,
            circle_center,
            cap_radius,
            flag_rect,
        }
    }

    pub fn middle_y(&self) -> f32 {
        self.rect.center().y
    }
}
