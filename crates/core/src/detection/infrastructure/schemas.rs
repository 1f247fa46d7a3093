//! Wire types for the detection service's `images:annotate` endpoint.
//!
//! The service omits zero-valued numeric fields, so every coordinate
//! deserializes with a default.

use serde::{Deserialize, Serialize};

use crate::detection::domain::face::{Face, Vertex};
use crate::detection::domain::landmark::{Landmark, LandmarkType, Position};

#[derive(Debug, Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<ImageRequest>,
}

impl AnnotateRequest {
    /// Single face-detection request for one base64-encoded image.
    pub fn face_detection(content: String, max_results: u32) -> Self {
        Self {
            requests: vec![ImageRequest {
                image: ImageContent { content },
                features: vec![Feature {
                    kind: "FACE_DETECTION".to_string(),
                    max_results,
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub max_results: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<ImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    #[serde(default)]
    pub face_annotations: Vec<FaceAnnotation>,
    pub error: Option<ServiceError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnnotation {
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
    #[serde(default)]
    pub landmarks: Vec<LandmarkRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VertexRecord {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LandmarkRecord {
    #[serde(rename = "type")]
    pub kind: LandmarkType,
    #[serde(default)]
    pub position: PositionRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionRecord {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// In-payload error object attached to a per-image response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl From<FaceAnnotation> for Face {
    fn from(annotation: FaceAnnotation) -> Self {
        Face {
            bounding_poly: annotation
                .bounding_poly
                .vertices
                .into_iter()
                .map(|v| Vertex { x: v.x, y: v.y })
                .collect(),
            landmarks: annotation
                .landmarks
                .into_iter()
                .map(|l| Landmark {
                    kind: l.kind,
                    position: Position {
                        x: l.position.x,
                        y: l.position.y,
                        z: l.position.z,
                    },
                })
                .collect(),
        }
    }
}
