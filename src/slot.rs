use egui::{pos2, Color32, Pos2, Rect};

use crate::segment::{Segment, SegmentRole};

/// A rounded rectangle with an optional full-height band cut away from one of its ends.
///
/// Covers every outline the bar needs: plain rectangles (`corner_radius == 0`), pills
/// (`corner_radius == height / 2`) and pills with one end squared off by subtracting the cat rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub body: Rect,
    pub corner_radius: f32,
    pub cut: Option<Rect>,
}

impl Shape {
    pub fn rect(body: Rect) -> Self {
        Self {
            body,
            corner_radius: 0.0,
            cut: None,
        }
    }

    pub fn pill(body: Rect) -> Self {
        Self {
            body,
            corner_radius: body.height() / 2.0,
            cut: None,
        }
    }

    pub fn minus(self, cut: Rect) -> Self {
        Self { cut: Some(cut), ..self }
    }

    /// The radius actually drawn. Never more than half of the body's smaller side.
    pub fn effective_radius(&self) -> f32 {
        let limit = (self.body.width().min(self.body.height()) / 2.0).max(0.0);
        self.corner_radius.clamp(0.0, limit)
    }

    /// The part of the body that survives the cut. Painting clips to this.
    pub fn visible_rect(&self) -> Rect {
        let Some(cut) = self.cut else {
            return self.body;
        };

        let mut visible = self.body;
        if cut.min.x <= self.body.min.x {
            visible.min.x = cut.max.x.clamp(self.body.min.x, self.body.max.x);
        } else {
            visible.max.x = cut.min.x.clamp(self.body.min.x, self.body.max.x);
        }
        visible
    }

    pub fn is_empty(&self) -> bool {
        let visible = self.visible_rect();
        visible.width() <= 0.0 || visible.height() <= 0.0
    }

    pub fn contains(&self, point: Pos2) -> bool {
        if self.is_empty() || !self.visible_rect().contains(point) {
            return false;
        }

        let radius = self.effective_radius();
        if radius <= 0.0 {
            return true;
        }

        let inner = self.body.shrink(radius);
        let nearest = pos2(
            point.x.clamp(inner.min.x, inner.max.x),
            point.y.clamp(inner.min.y, inner.max.y),
        );
        point.distance(nearest) <= radius
    }
}

/// Derived geometry and fill state for one segment. Rebuilt wholesale whenever the segment list changes.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub index: usize,
    pub count: usize,
    pub role: SegmentRole,

    pub start: f32, // Cumulative magnitude of the segments before this one.
    pub magnitude: f32,
    pub filled: f32, // 0..=magnitude

    pub color: Color32,
    pub background_color: Color32,

    pub rect: Rect,       // Allocated rect, before any cap extension.
    pub shape_rect: Rect, // `rect` widened by half a height toward the cap end.
    pub cat_rect: Option<Rect>,
    pub background: Shape,
    pub fill: Shape,
}

impl BarSlot {
    pub fn new(index: usize, count: usize, start: f32, segment: &Segment, background_color: Color32) -> Self {
        Self {
            index,
            count,
            role: SegmentRole::for_index(index, count),
            start,
            magnitude: segment.magnitude,
            filled: 0.0,
            color: segment.color,
            background_color,
            rect: Rect::NOTHING,
            shape_rect: Rect::NOTHING,
            cat_rect: None,
            background: Shape::rect(Rect::NOTHING),
            fill: Shape::rect(Rect::NOTHING),
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.magnitude
    }

    /// Inclusive at both ends, so a boundary value belongs to both neighbours.
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end()
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.magnitude
    }

    /// Builds the background shape and cat rect from the allocated rect, then refreshes the fill.
    pub fn measure(&mut self, rect: Rect) {
        self.rect = rect;
        let cap = rect.height() / 2.0;

        match self.role {
            SegmentRole::First => {
                let widened = rect.with_max_x(rect.max.x + cap);
                let cat = widened.with_min_x(widened.max.x - cap);
                self.shape_rect = widened;
                self.cat_rect = Some(cat);
                self.background = Shape::pill(widened).minus(cat);
            }
            SegmentRole::Last => {
                let widened = rect.with_min_x(rect.min.x - cap);
                let cat = widened.with_max_x(widened.min.x + cap);
                self.shape_rect = widened;
                self.cat_rect = Some(cat);
                self.background = Shape::pill(widened).minus(cat);
            }
            SegmentRole::Middle => {
                self.shape_rect = rect;
                self.cat_rect = None;
                self.background = Shape::rect(rect);
            }
        }

        self.update_fill();
    }

    pub fn update_fill(&mut self) {
        if self.is_full() {
            self.fill = self.background;
            return;
        }

        let ratio = if self.magnitude > 0.0 { self.filled / self.magnitude } else { 0.0 };
        let fill_rect = self
            .shape_rect
            .with_max_x(self.shape_rect.min.x + self.shape_rect.width() * ratio);

        self.fill = match (self.role, self.cat_rect) {
            (SegmentRole::First, _) => Shape::pill(fill_rect),
            (SegmentRole::Last, Some(cat)) => Shape::pill(fill_rect).minus(cat),
            _ => Shape::rect(fill_rect),
        };
    }
}
