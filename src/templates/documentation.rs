//! Knowledge-base (documentation) catalog

use crate::models::{FieldSpec, PrimitiveType, TableSpec, WebsiteType};

use super::{CatalogTemplate, flag, int, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(WebsiteType::Documentation, tables())
}

fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new(
            "sections",
            vec![
                FieldSpec::id(),
                string("title", 255).required(),
                string("slug", 255).required().unique(),
                text("description"),
                int("parent_id"),
                int("sort_order").with_default("0"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "contributors",
            vec![
                FieldSpec::id(),
                string("name", 100).required(),
                string("email", 255).required().unique(),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "articles",
            vec![
                FieldSpec::id(),
                int("section_id").required(),
                string("title", 255).required(),
                string("slug", 255).required().unique(),
                text("content").required(),
                text("summary"),
                string("version", 20).with_default("1.0"),
                flag("is_published", "0"),
                int("author_id"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "article_revisions",
            vec![
                FieldSpec::id(),
                int("article_id").required(),
                text("content").required(),
                string("change_note", 255),
                int("revised_by"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "article_feedback",
            vec![
                FieldSpec::id(),
                int("article_id").required(),
                FieldSpec::new("helpful", PrimitiveType::Boolean).required(),
                text("comment"),
                FieldSpec::created_at(),
            ],
        ),
    ]
}
