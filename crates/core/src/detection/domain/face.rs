use crate::detection::domain::landmark::Landmark;

/// Bounding polygon vertex in integer pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// One detected face: the 4-vertex bounding quadrilateral plus the
/// landmark list, both in the order the service returned them.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub bounding_poly: Vec<Vertex>,
    pub landmarks: Vec<Landmark>,
}

impl Face {
    /// Bounding vertices as drawing coordinates, in service order.
    pub fn box_points(&self) -> Vec<(f32, f32)> {
        self.bounding_poly
            .iter()
            .map(|v| (v.x as f32, v.y as f32))
            .collect()
    }

    /// Mouth-region landmark positions in encounter order.
    ///
    /// The order is whatever the service returned, not a canonical lip/corner
    /// order; the rendered mouth polygon's shape depends on it. Preserved
    /// as-is to match the service's documented ordering.
    pub fn mouth_points(&self) -> Vec<(f32, f32)> {
        self.landmarks
            .iter()
            .filter(|l| l.is_mouth())
            .map(|l| (l.position.x as f32, l.position.y as f32))
            .collect()
    }
}
