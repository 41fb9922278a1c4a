//! Corporate-site (business) catalog

use crate::models::{FieldSpec, TableSpec, WebsiteType};

use super::{CatalogTemplate, flag, int, money, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(WebsiteType::Business, tables())
}

fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new(
            "pages",
            vec![
                FieldSpec::id(),
                string("title", 255).required(),
                string("slug", 255).required().unique(),
                text("content"),
                string("meta_description", 255),
                flag("is_published", "1"),
                int("sort_order").with_default("0"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "services",
            vec![
                FieldSpec::id(),
                string("name", 255).required(),
                string("slug", 255).required().unique(),
                text("summary"),
                text("description"),
                string("icon", 100),
                money("price_from"),
                int("sort_order").with_default("0"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "team_members",
            vec![
                FieldSpec::id(),
                string("full_name", 100).required(),
                string("position", 100).required(),
                text("bio"),
                string("email", 255),
                string("photo_url", 500),
                string("linkedin_url", 500),
                int("sort_order").with_default("0"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "testimonials",
            vec![
                FieldSpec::id(),
                string("client_name", 100).required(),
                string("company", 100),
                text("quote").required(),
                int("rating"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "inquiries",
            vec![
                FieldSpec::id(),
                string("name", 100).required(),
                string("email", 255).required(),
                string("phone", 30),
                string("company", 100),
                string("subject", 255),
                text("message").required(),
                string("status", 20).required().with_default("new"),
                FieldSpec::created_at(),
            ],
        ),
    ]
}
