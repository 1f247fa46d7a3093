//! Facial landmark records as returned by the detection service.

use serde::{Deserialize, Serialize};

/// Landmark category, deserialized from the service's wire names
/// (`UPPER_LIP`, `MOUTH_LEFT`, ...). Categories the service adds later
/// collapse into [`LandmarkType::Unknown`] instead of failing the parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandmarkType {
    LeftEye,
    RightEye,
    LeftOfLeftEyebrow,
    RightOfLeftEyebrow,
    LeftOfRightEyebrow,
    RightOfRightEyebrow,
    MidpointBetweenEyes,
    NoseTip,
    UpperLip,
    LowerLip,
    MouthLeft,
    MouthRight,
    MouthCenter,
    NoseBottomRight,
    NoseBottomLeft,
    NoseBottomCenter,
    LeftEarTragion,
    RightEarTragion,
    ForeheadGlabella,
    ChinGnathion,
    ChinLeftGonion,
    ChinRightGonion,
    #[serde(other)]
    Unknown,
}

/// The four categories that outline the mouth region.
pub const MOUTH_LANDMARKS: [LandmarkType; 4] = [
    LandmarkType::UpperLip,
    LandmarkType::LowerLip,
    LandmarkType::MouthLeft,
    LandmarkType::MouthRight,
];

/// Landmark position in image coordinates. `z` is depth relative to the
/// face plane; only `x` and `y` are used for drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub kind: LandmarkType,
    pub position: Position,
}

impl Landmark {
    pub fn is_mouth(&self) -> bool {
        MOUTH_LANDMARKS.contains(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn landmark(kind: LandmarkType) -> Landmark {
        Landmark {
            kind,
            position: Position::default(),
        }
    }

    #[rstest]
    #[case::upper_lip(LandmarkType::UpperLip)]
    #[case::lower_lip(LandmarkType::LowerLip)]
    #[case::mouth_left(LandmarkType::MouthLeft)]
    #[case::mouth_right(LandmarkType::MouthRight)]
    fn test_mouth_landmarks_are_mouth(#[case] kind: LandmarkType) {
        assert!(landmark(kind).is_mouth());
    }

    #[rstest]
    #[case::mouth_center(LandmarkType::MouthCenter)]
    #[case::left_eye(LandmarkType::LeftEye)]
    #[case::nose_tip(LandmarkType::NoseTip)]
    #[case::chin(LandmarkType::ChinGnathion)]
    #[case::unknown(LandmarkType::Unknown)]
    fn test_other_landmarks_are_not_mouth(#[case] kind: LandmarkType) {
        assert!(!landmark(kind).is_mouth());
    }

    #[test]
    fn test_mouth_set_has_four_entries() {
        assert_eq!(MOUTH_LANDMARKS.len(), 4);
    }

    #[rstest]
    #[case::upper_lip("\"UPPER_LIP\"", LandmarkType::UpperLip)]
    #[case::mouth_left("\"MOUTH_LEFT\"", LandmarkType::MouthLeft)]
    #[case::left_eye("\"LEFT_EYE\"", LandmarkType::LeftEye)]
    #[case::chin_left("\"CHIN_LEFT_GONION\"", LandmarkType::ChinLeftGonion)]
    fn test_deserializes_wire_names(#[case] json: &str, #[case] expected: LandmarkType) {
        let parsed: LandmarkType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_unrecognized_wire_name_maps_to_unknown() {
        let parsed: LandmarkType = serde_json::from_str("\"LEFT_CHEEK_CENTER\"").unwrap();
        assert_eq!(parsed, LandmarkType::Unknown);
    }
}
