//! Content-site (blog) catalog

use crate::models::{FieldSpec, PrimitiveType, TableSpec, WebsiteType};

use super::{CatalogTemplate, int, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(WebsiteType::Blog, tables())
}

fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new(
            "users",
            vec![
                FieldSpec::id(),
                string("username", 50).required().unique(),
                string("email", 255).required().unique(),
                string("password_hash", 255).required(),
                string("display_name", 100),
                text("bio"),
                string("avatar_url", 500),
                string("role", 20).required().with_default("author"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "categories",
            vec![
                FieldSpec::id(),
                string("name", 100).required(),
                string("slug", 100).required().unique(),
                text("description"),
                int("parent_id"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "posts",
            vec![
                FieldSpec::id(),
                string("title", 255).required(),
                string("slug", 255).required().unique(),
                text("content").required(),
                text("excerpt"),
                string("featured_image", 500),
                string("status", 20).required().with_default("draft"),
                int("author_id").required(),
                int("category_id"),
                int("view_count").with_default("0"),
                FieldSpec::new("published_at", PrimitiveType::Timestamp),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "tags",
            vec![
                FieldSpec::id(),
                string("name", 50).required().unique(),
                string("slug", 50).required().unique(),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "post_tags",
            vec![
                int("post_id").required().primary_key(),
                int("tag_id").required().primary_key(),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "comments",
            vec![
                FieldSpec::id(),
                int("post_id").required(),
                int("parent_id"),
                string("author_name", 100).required(),
                string("author_email", 255).required(),
                text("content").required(),
                string("status", 20).required().with_default("pending"),
                FieldSpec::created_at(),
            ],
        ),
    ]
}
