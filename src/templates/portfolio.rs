//! Portfolio catalog

use crate::models::{FieldSpec, PrimitiveType, TableSpec, WebsiteType};

use super::{CatalogTemplate, flag, int, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(WebsiteType::Portfolio, tables())
}

fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new(
            "profile",
            vec![
                FieldSpec::id(),
                string("full_name", 100).required(),
                string("headline", 255),
                text("bio"),
                string("email", 255).required(),
                string("phone", 30),
                string("location", 100),
                string("avatar_url", 500),
                string("resume_url", 500),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "projects",
            vec![
                FieldSpec::id(),
                string("title", 255).required(),
                string("slug", 255).required().unique(),
                text("summary"),
                text("description"),
                string("client_name", 100),
                string("project_url", 500),
                string("repository_url", 500),
                string("cover_image", 500),
                flag("is_featured", "0"),
                int("sort_order").with_default("0"),
                FieldSpec::new("completed_on", PrimitiveType::Date),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "skills",
            vec![
                FieldSpec::id(),
                string("name", 100).required().unique(),
                string("category", 50),
                int("proficiency"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "project_skills",
            vec![
                int("project_id").required().primary_key(),
                int("skill_id").required().primary_key(),
            ],
        ),
        TableSpec::new(
            "testimonials",
            vec![
                FieldSpec::id(),
                string("client_name", 100).required(),
                string("client_title", 100),
                string("company", 100),
                text("quote").required(),
                int("rating"),
                int("project_id"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "contact_messages",
            vec![
                FieldSpec::id(),
                string("name", 100).required(),
                string("email", 255).required(),
                string("subject", 255),
                text("message").required(),
                flag("is_read", "0"),
                FieldSpec::created_at(),
            ],
        ),
    ]
}
