use egui::Color32;
use log::warn;

/// One logical sub-goal of the bar: how much progress it is worth and the colour its fill is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub magnitude: f32,
    pub color: Color32,
}

impl Segment {
    /// Non-positive or non-finite magnitudes are corrected to zero.
    pub fn new(magnitude: f32, color: Color32) -> Self {
        let magnitude = if magnitude.is_finite() && magnitude > 0.0 {
            magnitude
        } else {
            warn!("Segment magnitude {} is not positive, using 0.", magnitude);
            0.0
        };

        Self { magnitude, color }
    }

    pub fn from_hex(magnitude: f32, hex: &str) -> Result<Self, String> {
        let color = Color32::from_hex(hex).map_err(|e| format!("Invalid segment color '{}': {:?}", hex, e))?;
        Ok(Self::new(magnitude, color))
    }
}

/// Where a segment sits on the track. Decides which end of its shape gets the rounded cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    First,
    Middle,
    Last,
}

impl SegmentRole {
    /// A lone segment is both first and last; first wins.
    pub fn for_index(index: usize, count: usize) -> Self {
        if index == 0 {
            SegmentRole::First
        } else if index + 1 == count {
            SegmentRole::Last
        } else {
            SegmentRole::Middle
        }
    }
}

pub fn total_magnitude(segments: &[Segment]) -> f32 {
    segments.iter().map(|s| s.magnitude).sum()
}
