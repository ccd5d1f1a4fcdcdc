use serde::Serialize;

use historial_core::models::pain::{FaceRating, PainLevel, PainScale};
use historial_rules::scale::{to_faces, to_numeric};

/// Selection state of the two pain scales.
///
/// `NumericSelected` / `PictorialSelected` are the resting states when the
/// form renders only one scale; with both rendered every selection lands in
/// `Synced`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PainSelection {
    #[default]
    Unset,
    NumericSelected {
        numeric: PainLevel,
    },
    PictorialSelected {
        faces: FaceRating,
    },
    Synced {
        numeric: PainLevel,
        faces: FaceRating,
        authority: PainScale,
    },
}

impl PainSelection {
    /// A number was clicked. The faces row follows when it is rendered.
    pub fn select_numeric(self, numeric: PainLevel, faces_rendered: bool) -> Self {
        if faces_rendered {
            PainSelection::Synced {
                numeric,
                faces: to_faces(numeric),
                authority: PainScale::Numeric,
            }
        } else {
            PainSelection::NumericSelected { numeric }
        }
    }

    /// A face was clicked. The number row follows when it is rendered.
    pub fn select_faces(self, faces: FaceRating, numeric_rendered: bool) -> Self {
        if numeric_rendered {
            PainSelection::Synced {
                numeric: to_numeric(faces),
                faces,
                authority: PainScale::Faces,
            }
        } else {
            PainSelection::PictorialSelected { faces }
        }
    }

    pub fn numeric(&self) -> Option<PainLevel> {
        match self {
            PainSelection::NumericSelected { numeric } | PainSelection::Synced { numeric, .. } => {
                Some(*numeric)
            }
            _ => None,
        }
    }

    pub fn faces(&self) -> Option<FaceRating> {
        match self {
            PainSelection::PictorialSelected { faces } | PainSelection::Synced { faces, .. } => {
                Some(*faces)
            }
            _ => None,
        }
    }

    pub fn authority(&self) -> Option<PainScale> {
        match self {
            PainSelection::Unset => None,
            PainSelection::NumericSelected { .. } => Some(PainScale::Numeric),
            PainSelection::PictorialSelected { .. } => Some(PainScale::Faces),
            PainSelection::Synced { authority, .. } => Some(*authority),
        }
    }

    /// The level the classifier runs on: the authoritative value, read as
    /// a numeric level.
    pub fn authoritative_level(&self) -> Option<PainLevel> {
        match self.authority()? {
            PainScale::Numeric => self.numeric(),
            PainScale::Faces => self.faces().map(to_numeric),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, PainSelection::Unset)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PainSelection::Unset => "unset",
            PainSelection::NumericSelected { .. } => "numeric_selected",
            PainSelection::PictorialSelected { .. } => "pictorial_selected",
            PainSelection::Synced { .. } => "synced",
        }
    }
}
