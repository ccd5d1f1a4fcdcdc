//! Mapping between the numeric (0–10) and pictorial (faces) pain scales.

use historial_core::models::pain::{FaceRating, PainLevel};

/// Band a numeric rating onto its face: 0–1 → 0, 2–3 → 2, … , 10 → 10.
pub fn to_faces(level: PainLevel) -> FaceRating {
    level.banded_face()
}

/// Faces sit on even numeric values, so the mapping is the identity.
pub fn to_numeric(face: FaceRating) -> PainLevel {
    face.level()
}
