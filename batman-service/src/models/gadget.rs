use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_http_url;

pub const GADGET_COLLECTION: &str = "gadget";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Gadget {
    pub name: String,
    /// e.g. Offensive, Mobility, Utility, Forensics.
    pub category: String,
    pub description: String,
    pub first_appearance: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<String>,
}

impl Gadget {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            first_appearance: None,
            image_url: None,
        }
    }
}
