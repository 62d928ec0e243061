use egui::{Align2, Color32, FontId, Painter};

use crate::{
    slot::Shape,
    style::BarVariant,
    ui::widgets::segment_progress_bar::SegmentProgressBar,
};

/// Paints the bar back to front: decoration circle, background capsule, flag icon, then every segment's
/// background with its fill on top.
pub fn paint_bar(painter: &Painter, bar: &SegmentProgressBar) {
    let Some(track) = bar.track() else {
        return;
    };
    let style = bar.style();

    let has_cap = style.variant == BarVariant::Flag && track.cap_radius > 0.0;

    if has_cap {
        painter.circle_filled(track.circle_center, track.cap_radius, style.bg_color);
    }

    painter.rect_filled(track.background_bar, style.bg_bar_height, style.bg_color);

    if has_cap {
        if let Some(icon) = style.flag_icon.as_deref().filter(|_| track.flag_rect.width() > 0.0) {
            painter.text(
                track.flag_rect.center(),
                Align2::CENTER_CENTER,
                icon,
                FontId::proportional(track.flag_rect.height()),
                style.flag_icon_color,
            );
        }
    }

    for slot in bar.slots() {
        paint_shape(painter, &slot.background, slot.background_color);
        paint_shape(painter, &slot.fill, slot.color);
    }
}

fn paint_shape(painter: &Painter, shape: &Shape, color: Color32) {
    if shape.is_empty() {
        return;
    }

    // The cut is carved out by clipping; the body keeps its full rounding.
    painter
        .with_clip_rect(shape.visible_rect())
        .rect_filled(shape.body, shape.effective_radius(), color);
}
