//! Generic fallback catalog for custom or unknown domains

use crate::models::{FieldSpec, TableSpec, WebsiteType};

use super::{CatalogTemplate, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(
        WebsiteType::Custom,
        vec![TableSpec::new(
            "content",
            vec![
                FieldSpec::id(),
                string("title", 255).required(),
                text("content"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        )],
    )
}
