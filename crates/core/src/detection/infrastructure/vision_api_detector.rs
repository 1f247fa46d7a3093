use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

use crate::detection::domain::face::Face;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::schemas::{AnnotateRequest, AnnotateResponse};

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("detection service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("detection service error {code}: {message}")]
    Service { code: i32, message: String },
    #[error("malformed detection response: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// [`FaceDetector`] backed by a Vision-style `images:annotate` REST endpoint.
///
/// One synchronous request per `detect` call, no timeout, no retry; any
/// transport or service failure aborts the run.
pub struct VisionApiDetector {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl VisionApiDetector {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.endpoint)
    }
}

impl FaceDetector for VisionApiDetector {
    fn detect(
        &mut self,
        image: &[u8],
        max_results: u32,
    ) -> Result<Vec<Face>, Box<dyn std::error::Error>> {
        let url = self.annotate_url();
        let body = AnnotateRequest::face_detection(BASE64.encode(image), max_results);

        log::debug!("POST {url} ({} image bytes)", image.len());
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| DetectError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| DetectError::Transport {
            url: url.clone(),
            source: e,
        })?;
        if !status.is_success() {
            return Err(DetectError::Status { status, body: text }.into());
        }

        let parsed: AnnotateResponse =
            serde_json::from_str(&text).map_err(DetectError::Malformed)?;
        let image_response = parsed.responses.into_iter().next().unwrap_or_default();
        if let Some(error) = image_response.error {
            return Err(DetectError::Service {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        Ok(image_response
            .face_annotations
            .into_iter()
            .map(Face::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_url_joins_endpoint() {
        let detector = VisionApiDetector::new("https://vision.example.com", "k");
        assert_eq!(
            detector.annotate_url(),
            "https://vision.example.com/v1/images:annotate"
        );
    }

    #[test]
    fn test_annotate_url_strips_trailing_slash() {
        let detector = VisionApiDetector::new("https://vision.example.com/", "k");
        assert_eq!(
            detector.annotate_url(),
            "https://vision.example.com/v1/images:annotate"
        );
    }

    #[test]
    fn test_detect_unreachable_endpoint_is_transport_error() {
        let mut detector = VisionApiDetector::new("http://127.0.0.1:1", "k");
        let err = detector.detect(b"not an image", 4).unwrap_err();
        let detect_err = err.downcast_ref::<DetectError>().unwrap();
        assert!(matches!(detect_err, DetectError::Transport { .. }));
    }

    #[test]
    fn test_service_error_formats_code_and_message() {
        let err = DetectError::Service {
            code: 7,
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "detection service error 7: permission denied"
        );
    }
}
