use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_http_url;

pub const BATMOBILE_COLLECTION: &str = "batmobile";

/// A Batmobile as it appeared in a film, series, game or comic.
///
/// The store-assigned `_id` and insertion timestamps are deliberately absent:
/// decoding a stored document into this type drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Batmobile {
    /// Designation or common name.
    pub name: String,
    /// First appearance year.
    pub year: Option<i64>,
    /// Where it appears: film, TV, animation, game, comic.
    pub media: String,
    /// Title of the work, e.g. "The Dark Knight".
    pub title: Option<String>,
    pub driver: Option<String>,
    /// Era or continuity, e.g. "Burtonverse", "DCEU".
    pub era: Option<String>,
    pub universe: Option<String>,
    pub description: Option<String>,
    pub specs: Option<Vec<String>>,
    pub designer: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<String>,
    pub source: Option<String>,
}

impl Batmobile {
    pub fn new(name: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: None,
            media: media.into(),
            title: None,
            driver: None,
            era: None,
            universe: None,
            description: None,
            specs: None,
            designer: None,
            image_url: None,
            source: None,
        }
    }
}
