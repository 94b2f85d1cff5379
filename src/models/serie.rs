use serde::{Deserialize, Serialize};

use super::image::{self, ImageFormat};
use super::set::SetBrief;

/// Summary of a serie, as embedded in a [`Set`](super::Set) and returned by
/// the serie list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieBrief {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
}

/// A serie (block of sets), with its sets in release order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Serie {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub sets: Vec<SetBrief>,
}

impl Serie {
    pub fn logo_url(&self, format: ImageFormat) -> Option<String> {
        self.logo.as_deref().map(|base| image::asset_url(base, format))
    }

    pub fn brief(&self) -> SerieBrief {
        SerieBrief {
            id: self.id.clone(),
            name: self.name.clone(),
            logo: self.logo.clone(),
        }
    }
}
