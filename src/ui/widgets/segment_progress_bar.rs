use egui::{vec2, Rect, Response, Sense, Ui, Widget};
use log::{debug, info};

use crate::{
    animation::AnimationDriver,
    geometry::{allocate_segment_rects, resolve_size, SizeMode, TrackLayout},
    progress::{clamp_progress, map_progress},
    segment::{total_magnitude, Segment},
    slot::BarSlot,
    style::BarStyle,
    ui::render::paint_bar,
};

/// How far `progress_plus` and `progress_minus` move the target.
pub const PROGRESS_STEP: f32 = 1.0;

/// A horizontal track split into coloured segments, filled left to right as progress grows.
///
/// The widget keeps its own state between frames, so hold on to it and add `&mut bar` to a `Ui` every frame.
pub struct SegmentProgressBar {
    style: BarStyle,
    width_mode: Option<SizeMode>, // None: take the exact available width.
    height_mode: SizeMode,

    slots: Vec<BarSlot>,
    total_magnitude: f32,

    current_progress: f32,   // The target. Always within [0, total_magnitude].
    displayed_progress: f32, // What the fill shows. Chases current_progress while animating.
    animation: AnimationDriver,

    track: Option<TrackLayout>,
    needs_layout: bool,
    needs_repaint: bool,
}

impl SegmentProgressBar {
    pub fn new(style: BarStyle) -> Self {
        Self {
            style,
            width_mode: None,
            height_mode: SizeMode::Unspecified,
            slots: Vec::new(),
            total_magnitude: 0.0,
            current_progress: 0.0,
            displayed_progress: 0.0,
            animation: AnimationDriver::new(),
            track: None,
            needs_layout: true,
            needs_repaint: true,
        }
    }

    pub fn width_mode(mut self, mode: SizeMode) -> Self {
        self.width_mode = Some(mode);
        self
    }

    pub fn height_mode(mut self, mode: SizeMode) -> Self {
        self.height_mode = mode;
        self
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: BarStyle) {
        let background_color = style.segment_bar_bg_color;
        for slot in &mut self.slots {
            slot.background_color = background_color;
        }
        self.style = style;
        self.needs_layout = true;
        self.needs_repaint = true;
    }

    /// Replaces the segments. Fill starts over from zero and the geometry is rebuilt on the next layout.
    pub fn set_data(&mut self, segments: &[Segment]) {
        self.animation.cancel();

        let count = segments.len();
        let mut start = 0.0;
        self.slots = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let slot = BarSlot::new(index, count, start, segment, self.style.segment_bar_bg_color);
                start += segment.magnitude;
                slot
            })
            .collect();

        self.total_magnitude = total_magnitude(segments);
        self.current_progress = 0.0;
        self.displayed_progress = 0.0;
        self.needs_layout = true;
        self.needs_repaint = true;

        info!("Segment bar set to {} segments, total {}.", count, self.total_magnitude);
    }

    /// Jumps straight to `value`, stopping any animation in flight.
    pub fn progress(&mut self, value: f32) {
        self.animation.cancel();
        self.current_progress = clamp_progress(value, self.total_magnitude);
        self.show_progress(self.current_progress);
    }

    pub fn progress_plus(&mut self) {
        self.step_progress(PROGRESS_STEP);
    }

    pub fn progress_minus(&mut self) {
        self.step_progress(-PROGRESS_STEP);
    }

    fn step_progress(&mut self, delta: f32) {
        let previous = self.current_progress;
        self.current_progress = clamp_progress(previous + delta, self.total_magnitude);
        self.animation.start(previous, self.current_progress);
        self.needs_repaint = true;
    }

    fn show_progress(&mut self, value: f32) {
        self.displayed_progress = value;
        if !self.slots.is_empty() {
            map_progress(&mut self.slots, value);
        }
        self.needs_repaint = true;
    }

    /// Advances the running animation to `now` (seconds). Returns true while more frames are needed.
    pub fn tick(&mut self, now: f64) -> bool {
        if let Some(value) = self.animation.tick(now) {
            self.show_progress(value);
        }
        self.animation.is_running()
    }

    /// Recomputes the track and segment geometry for `rect` if it moved or the data changed.
    pub fn layout(&mut self, rect: Rect) {
        let unchanged = self.track.is_some_and(|t| t.rect == rect);
        if unchanged && !self.needs_layout {
            return;
        }

        let track = TrackLayout::measure(rect, &self.style);
        let magnitudes: Vec<f32> = self.slots.iter().map(|s| s.magnitude).collect();
        let rects = allocate_segment_rects(
            &track,
            self.style.segment_bar_spacing,
            self.style.segment_bar_height,
            &magnitudes,
        );

        for (slot, rect) in self.slots.iter_mut().zip(rects) {
            slot.measure(rect);
        }
        if !self.slots.is_empty() {
            map_progress(&mut self.slots, self.displayed_progress);
        }

        debug!("Segment bar laid out in {:?}.", rect);
        self.track = Some(track);
        self.needs_layout = false;
        self.needs_repaint = true;
    }

    /// Returns and clears the pending redraw request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn slots(&self) -> &[BarSlot] {
        &self.slots
    }

    pub fn track(&self) -> Option<&TrackLayout> {
        self.track.as_ref()
    }

    pub fn total_magnitude(&self) -> f32 {
        self.total_magnitude
    }

    pub fn current_progress(&self) -> f32 {
        self.current_progress
    }

    pub fn displayed_progress(&self) -> f32 {
        self.displayed_progress
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.total_magnitude > 0.0 && self.current_progress >= self.total_magnitude
    }
}

impl Widget for &mut SegmentProgressBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let width_mode = self.width_mode.unwrap_or(SizeMode::Exact(ui.available_width()));
        let width = resolve_size(0.0, width_mode);
        let height = resolve_size(self.style.min_height(), self.height_mode);

        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        let now = ui.input(|i| i.time);
        let animating = self.tick(now);
        self.layout(rect);

        if ui.is_rect_visible(rect) {
            paint_bar(ui.painter(), self);
        }

        if self.take_repaint_request() || animating {
            ui.ctx().request_repaint();
        }

        response
    }
}
