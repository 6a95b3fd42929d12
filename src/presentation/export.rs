//! Downloadable files for a generated identity.

use crate::brand::BrandIdentity;
use crate::error::Result;

pub const IDENTITY_FILE_NAME: &str = "brand_identity.json";
/// The data URI is written as text; rename to .svg/.png after decoding.
pub const LOGO_FILE_NAME: &str = "brand_logo.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl Export {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// The whole document as 2-space indented JSON.
pub fn export_identity_json(identity: &BrandIdentity) -> Result<Export> {
    Ok(Export {
        file_name: IDENTITY_FILE_NAME,
        content_type: "application/json",
        body: serde_json::to_string_pretty(identity)?,
    })
}

/// The raw logo data URI, or `None` when the model returned no logo.
pub fn export_logo(identity: &BrandIdentity) -> Option<Export> {
    identity.generated_logo_image.as_ref().map(|uri| Export {
        file_name: LOGO_FILE_NAME,
        content_type: "text/plain; charset=utf-8",
        body: uri.clone(),
    })
}
