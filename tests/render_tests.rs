//! Renderer tests across every domain and dialect

use chrono::{TimeZone, Utc};
use site_schema::analysis::ContentAnalysis;
use site_schema::export::{ExportFormat, RenderContext, RendererRegistry};
use site_schema::models::{DatabaseType, FieldSpec, PrimitiveType, TableSpec, WebsiteType};
use site_schema::templates::{TemplateCatalog, apply_features};
use sqlparser::ast::Statement;
use sqlparser::dialect::{Dialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

fn ctx() -> RenderContext {
    RenderContext::new(
        "Test Project",
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

/// Domain tables plus both feature tables
fn full_tables(website_type: WebsiteType) -> Vec<TableSpec> {
    let mut tables = TemplateCatalog::builtin()
        .get(website_type)
        .unwrap()
        .build_tables(&ContentAnalysis::default(), "site_");
    apply_features(&mut tables, "site_", true, true);
    tables
}

fn render(database_type: DatabaseType, tables: &[TableSpec]) -> String {
    RendererRegistry::builtin()
        .dialect(database_type)
        .unwrap()
        .render(tables, &ctx())
        .unwrap()
}

fn assert_parses(dialect: &dyn Dialect, sql: &str, expected_tables: usize) {
    let statements = Parser::parse_sql(dialect, sql)
        .unwrap_or_else(|e| panic!("generated SQL failed to parse: {e}\n{sql}"));
    assert_eq!(statements.len(), expected_tables);
    assert!(
        statements
            .iter()
            .all(|s| matches!(s, Statement::CreateTable(_)))
    );
}

mod sql_parse_tests {
    use super::*;

    #[test]
    fn test_mysql_output_parses() {
        for website_type in WebsiteType::ALL {
            let tables = full_tables(website_type);
            let sql = render(DatabaseType::MySql, &tables);
            assert_parses(&MySqlDialect {}, &sql, tables.len());
        }
    }

    #[test]
    fn test_postgres_output_parses() {
        for website_type in WebsiteType::ALL {
            let tables = full_tables(website_type);
            let sql = render(DatabaseType::PostgreSql, &tables);
            assert_parses(&PostgreSqlDialect {}, &sql, tables.len());
        }
    }

    #[test]
    fn test_sqlite_output_parses() {
        for website_type in WebsiteType::ALL {
            let tables = full_tables(website_type);
            let sql = render(DatabaseType::Sqlite, &tables);
            assert_parses(&SQLiteDialect {}, &sql, tables.len());
        }
    }
}

mod dialect_shape_tests {
    use super::*;

    #[test]
    fn test_header_and_table_order() {
        let tables = full_tables(WebsiteType::Blog);
        for database_type in DatabaseType::ALL {
            let out = render(database_type, &tables);
            let comment = if database_type == DatabaseType::MongoDb {
                "//"
            } else {
                "--"
            };
            let mut lines = out.lines();
            assert_eq!(
                lines.next(),
                Some(format!("{comment} Database schema for Test Project").as_str())
            );
            assert_eq!(
                lines.next(),
                Some(format!("{comment} Generated: 2024-01-01T00:00:00Z").as_str())
            );

            let positions: Vec<usize> = tables
                .iter()
                .map(|t| {
                    out.find(&format!("{}\"", t.name))
                        .or_else(|| out.find(&format!("{}`", t.name)))
                        .unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{database_type}");
        }
    }

    #[test]
    fn test_one_line_per_field() {
        let tables = full_tables(WebsiteType::Ecommerce);
        let products = tables.iter().find(|t| t.name == "site_products").unwrap();
        let stored = products.fields.iter().filter(|f| !f.auto_increment).count();

        for (database_type, column_prefix, expected) in [
            (DatabaseType::MySql, "  `", products.fields.len()),
            (DatabaseType::PostgreSql, "  \"", products.fields.len()),
            (DatabaseType::Sqlite, "  \"", products.fields.len()),
            (DatabaseType::MongoDb, "        \"", stored),
        ] {
            let out = render(database_type, std::slice::from_ref(products));
            let column_lines = out.lines().filter(|l| l.starts_with(column_prefix)).count();
            assert_eq!(column_lines, expected, "{database_type}");
        }
    }

    #[test]
    fn test_ecommerce_products_mysql() {
        let tables = full_tables(WebsiteType::Ecommerce);
        let sql = render(DatabaseType::MySql, &tables);
        assert!(sql.contains("CREATE TABLE `site_products` ("));
        assert!(sql.contains("  `id` INT NOT NULL AUTO_INCREMENT,\n"));
        assert!(sql.contains("  `sku` VARCHAR(100) NOT NULL UNIQUE,\n"));
        assert!(sql.contains("  `price` DECIMAL(10,2) NOT NULL,\n"));
        assert!(sql.contains("  `weight` DECIMAL(8,2),\n"));
        assert!(sql.contains("  `is_active` BOOLEAN NOT NULL DEFAULT '1',\n"));
        assert!(sql.contains(") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"));
    }

    #[test]
    fn test_timestamp_has_single_default() {
        let table = TableSpec::new(
            "events",
            vec![
                FieldSpec::id(),
                FieldSpec::new("starts_at", PrimitiveType::Timestamp).with_default("2024-01-01"),
            ],
        );
        for database_type in [DatabaseType::MySql, DatabaseType::PostgreSql] {
            let sql = render(database_type, std::slice::from_ref(&table));
            let line = sql.lines().find(|l| l.contains("starts_at")).unwrap();
            assert_eq!(line.matches("DEFAULT").count(), 1, "{line}");
            assert!(line.contains("DEFAULT CURRENT_TIMESTAMP"));
        }
    }

    #[test]
    fn test_postgres_serial_and_composite_keys() {
        let sql = render(DatabaseType::PostgreSql, &full_tables(WebsiteType::Blog));
        assert!(sql.contains("  \"id\" SERIAL PRIMARY KEY,\n"));
        assert!(!sql.contains("SERIAL PRIMARY KEY NOT NULL"));
        assert!(sql.contains("  PRIMARY KEY (\"post_id\", \"tag_id\")\n"));
    }

    #[test]
    fn test_sqlite_single_inline_key_per_table() {
        let tables = full_tables(WebsiteType::Portfolio);
        let sql = render(DatabaseType::Sqlite, &tables);
        for block in sql.split("CREATE TABLE").skip(1) {
            assert_eq!(block.matches("PRIMARY KEY").count(), 1, "{block}");
        }
        assert!(sql.contains("  PRIMARY KEY (\"project_id\", \"skill_id\")\n"));
    }

    #[test]
    fn test_escaped_default_values() {
        let table = TableSpec::new(
            "notes",
            vec![
                FieldSpec::id(),
                FieldSpec::new("label", PrimitiveType::String).with_default("O'Brien\\"),
            ],
        );
        let mysql = render(DatabaseType::MySql, std::slice::from_ref(&table));
        assert!(mysql.contains("DEFAULT 'O''Brien\\\\'"));
        assert_parses(&MySqlDialect {}, &mysql, 1);

        let postgres = render(DatabaseType::PostgreSql, std::slice::from_ref(&table));
        assert!(postgres.contains("DEFAULT 'O''Brien\\'"));
        assert_parses(&PostgreSqlDialect {}, &postgres, 1);
    }
}

mod header_tests {
    use super::*;

    #[test]
    fn test_multi_line_project_name_stays_commented() {
        let tables = full_tables(WebsiteType::Blog);
        let ctx = RenderContext::new(
            "Shop\nDROP TABLE users;\r\n",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let registry = RendererRegistry::builtin();

        for database_type in DatabaseType::ALL {
            let out = registry
                .dialect(database_type)
                .unwrap()
                .render(&tables, &ctx)
                .unwrap();
            let comment = if database_type == DatabaseType::MongoDb {
                "//"
            } else {
                "--"
            };
            let header: Vec<&str> = out.lines().take_while(|l| !l.is_empty()).collect();
            assert_eq!(header.len(), 2, "{database_type}");
            assert!(header.iter().all(|l| l.starts_with(comment)), "{header:?}");
            assert!(!out.lines().any(|l| l.starts_with("DROP")));

            match database_type {
                DatabaseType::MySql => assert_parses(&MySqlDialect {}, &out, tables.len()),
                DatabaseType::PostgreSql => {
                    assert_parses(&PostgreSqlDialect {}, &out, tables.len())
                }
                DatabaseType::Sqlite => assert_parses(&SQLiteDialect {}, &out, tables.len()),
                DatabaseType::MongoDb => {}
            }
        }

        for format in ExportFormat::ALL {
            if format == ExportFormat::Json {
                continue;
            }
            let out = registry.export(format).unwrap().render(&tables, &ctx).unwrap();
            let header: Vec<&str> = out.lines().take(2).collect();
            assert!(header.iter().all(|l| l.starts_with("//")), "{format}: {header:?}");
            assert_eq!(out.lines().nth(2), Some(""));
        }
    }
}

mod mongodb_tests {
    use super::*;

    #[test]
    fn test_collection_per_table() {
        let tables = full_tables(WebsiteType::Documentation);
        let js = render(DatabaseType::MongoDb, &tables);
        assert_eq!(js.matches("db.createCollection(").count(), tables.len());
        for table in &tables {
            assert!(js.contains(&format!("db.createCollection(\"{}\", {{", table.name)));
        }
    }

    #[test]
    fn test_auto_increment_fields_excluded() {
        let tables = full_tables(WebsiteType::Custom);
        let js = render(DatabaseType::MongoDb, &tables);
        assert!(!js.contains("\"id\""));
        assert!(js.contains("required: [\"title\",\"created_at\"],"));
        assert!(js.contains("        \"content\": { bsonType: \"string\" },\n"));
    }

    #[test]
    fn test_composite_key_fields_kept() {
        let tables = full_tables(WebsiteType::Blog);
        let js = render(DatabaseType::MongoDb, &tables);
        assert!(js.contains("required: [\"post_id\",\"tag_id\",\"created_at\"],"));
    }
}

mod export_format_tests {
    use super::*;

    fn export(format: ExportFormat, tables: &[TableSpec]) -> String {
        RendererRegistry::builtin()
            .export(format)
            .unwrap()
            .render(tables, &ctx())
            .unwrap()
    }

    #[test]
    fn test_json_round_trips_tables() {
        let tables = full_tables(WebsiteType::Business);
        let out = export(ExportFormat::Json, &tables);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let parsed: Vec<TableSpec> = serde_json::from_value(value["tables"].clone()).unwrap();
        assert_eq!(parsed, tables);
        assert_eq!(value["project"], "Test Project");
    }

    #[test]
    fn test_prisma_models() {
        let tables = full_tables(WebsiteType::Ecommerce);
        let out = export(ExportFormat::Prisma, &tables);
        assert_eq!(out.matches("\nmodel ").count(), tables.len());
        assert!(out.contains("model SiteProducts {"));
        assert!(out.contains("  @@map(\"site_products\")"));
        assert!(out.contains("  price Decimal @db.Decimal(10, 2)\n"));
        assert!(out.contains("  is_active Boolean @default(true)\n"));
        assert!(out.contains("  id Int @id @default(autoincrement())\n"));
    }

    #[test]
    fn test_typescript_interfaces() {
        let tables = full_tables(WebsiteType::Blog);
        let out = export(ExportFormat::TypeScript, &tables);
        assert_eq!(out.matches("export interface ").count(), tables.len());
        assert!(out.contains("export interface SitePostTags {"));
        assert!(out.contains("  excerpt?: string;\n"));
        assert!(out.contains("  view_count?: number;\n"));
        assert!(out.contains("  published_at?: Date;\n"));
    }

    #[test]
    fn test_digit_prefix_yields_valid_type_names() {
        let tables = TemplateCatalog::builtin()
            .get(WebsiteType::Custom)
            .unwrap()
            .build_tables(&ContentAnalysis::default(), "2024_");

        let prisma = export(ExportFormat::Prisma, &tables);
        assert!(prisma.contains("model Table2024Content {"));
        assert!(prisma.contains("  @@map(\"2024_content\")"));

        let typescript = export(ExportFormat::TypeScript, &tables);
        assert!(typescript.contains("export interface Table2024Content {"));
        assert!(!typescript.contains("interface 2024"));
    }
}
