//! Storefront (e-commerce) catalog

use crate::models::{FieldSpec, TableSpec, WebsiteType};

use super::{CatalogTemplate, flag, int, money, string, text};

pub fn template() -> CatalogTemplate {
    CatalogTemplate::new(WebsiteType::Ecommerce, tables())
}

fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec::new(
            "customers",
            vec![
                FieldSpec::id(),
                string("email", 255).required().unique(),
                string("password_hash", 255).required(),
                string("first_name", 100),
                string("last_name", 100),
                string("phone", 30),
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
            "products",
            vec![
                FieldSpec::id(),
                string("name", 255).required(),
                string("slug", 255).required().unique(),
                text("description"),
                string("sku", 100).required().unique(),
                money("price").required(),
                money("compare_at_price"),
                int("stock_quantity").required().with_default("0"),
                int("category_id"),
                flag("is_active", "1").required(),
                money("weight").with_precision(8, 2),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "product_images",
            vec![
                FieldSpec::id(),
                int("product_id").required(),
                string("url", 500).required(),
                string("alt_text", 255),
                int("sort_order").with_default("0"),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "orders",
            vec![
                FieldSpec::id(),
                int("customer_id").required(),
                string("order_number", 50).required().unique(),
                string("status", 20).required().with_default("pending"),
                money("subtotal").required(),
                money("tax").with_default("0.00"),
                money("shipping_cost").with_default("0.00"),
                money("total").required(),
                text("shipping_address"),
                text("billing_address"),
                FieldSpec::created_at(),
                FieldSpec::updated_at(),
            ],
        ),
        TableSpec::new(
            "order_items",
            vec![
                FieldSpec::id(),
                int("order_id").required(),
                int("product_id").required(),
                int("quantity").required().with_default("1"),
                money("unit_price").required(),
                money("total_price").required(),
                FieldSpec::created_at(),
            ],
        ),
        TableSpec::new(
            "reviews",
            vec![
                FieldSpec::id(),
                int("product_id").required(),
                int("customer_id").required(),
                int("rating").required(),
                string("title", 255),
                text("body"),
                flag("is_approved", "0"),
                FieldSpec::created_at(),
            ],
        ),
    ]
}
