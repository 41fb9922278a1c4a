//! End-to-end generation tests

use std::fs;

use chrono::{DateTime, TimeZone, Utc};
use site_schema::analysis::FileDescriptor;
use site_schema::models::{DatabaseType, PrimitiveType, WebsiteType};
use site_schema::{ConfigError, ExportFormat, GeneratorConfig, PipelineError, SchemaGenerator};
use tempfile::tempdir;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
}

fn shop_config() -> GeneratorConfig {
    GeneratorConfig::new()
        .with_website_type(WebsiteType::Ecommerce)
        .with_database_type(DatabaseType::MySql)
        .with_project_name("Shop")
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_csv_upload_to_mysql_storefront() {
        let files = vec![FileDescriptor::from_bytes("products.csv", "title,price\nWidget,9.99")];
        let result = SchemaGenerator::new()
            .generate_at(&files, &shop_config(), fixed_time())
            .unwrap();

        let products = result.table("products").unwrap();
        let id = products.field("id").unwrap();
        assert_eq!(id.field_type, PrimitiveType::Integer);
        assert!(id.primary_key && id.auto_increment && id.required);

        assert!(result.sql.contains("`id` INT NOT NULL AUTO_INCREMENT"));
        assert!(result.sql.starts_with("-- Database schema for Shop\n"));
        assert!(result.sql.contains("-- Generated: 2024-06-15T09:30:00Z\n"));

        assert_eq!(result.metadata.files_analyzed, 1);
        assert_eq!(result.metadata.common_fields, vec!["price", "title"]);
        let structure = &result.metadata.file_structures["products.csv"];
        assert_eq!(structure["price"].field_type, PrimitiveType::Decimal);
        assert!(result.relationships.is_empty());
    }

    #[test]
    fn test_total_fields_matches_tables() {
        let config = shop_config().with_metadata(true).with_images(true);
        let result = SchemaGenerator::new()
            .generate_at(&[], &config, fixed_time())
            .unwrap();
        let sum: usize = result.tables.iter().map(|t| t.fields.len()).sum();
        assert_eq!(result.total_fields, sum);
        assert_eq!(result.tables.len(), 9);
    }

    #[test]
    fn test_every_dialect_renders() {
        let generator = SchemaGenerator::new();
        for database_type in DatabaseType::ALL {
            let config = GeneratorConfig::new()
                .with_website_type(WebsiteType::Blog)
                .with_database_type(database_type);
            let result = generator.generate_at(&[], &config, fixed_time()).unwrap();
            assert_eq!(result.metadata.database_type, database_type);
            assert!(!result.sql.is_empty());
            let marker = if database_type == DatabaseType::MongoDb {
                "db.createCollection("
            } else {
                "CREATE TABLE "
            };
            assert_eq!(result.sql.matches(marker).count(), result.tables.len());
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let files = vec![
            FileDescriptor::from_bytes("a.json", r#"{"name": "x", "tags": [{"label": "y"}]}"#),
            FileDescriptor::from_bytes("b.xml", "<root><item>1</item></root>"),
        ];
        let config = shop_config().with_metadata(true);
        let generator = SchemaGenerator::new();
        let first = generator.generate_at(&files, &config, fixed_time()).unwrap();
        let second = generator.generate_at(&files, &config, fixed_time()).unwrap();
        assert_eq!(first, second);
    }
}

mod analysis_isolation_tests {
    use super::*;

    #[test]
    fn test_content_does_not_change_tables() {
        let generator = SchemaGenerator::new();
        let config = shop_config();

        let empty = generator.generate_at(&[], &config, fixed_time()).unwrap();
        let files = vec![
            FileDescriptor::from_bytes("catalog.json", r#"[{"colour": "red", "size": 3}]"#),
            FileDescriptor::from_bytes("notes.md", "Shipping\n\nFree over $50"),
        ];
        let loaded = generator.generate_at(&files, &config, fixed_time()).unwrap();

        assert_eq!(empty.tables, loaded.tables);
        assert_eq!(empty.sql, loaded.sql);
        assert_eq!(loaded.metadata.files_analyzed, 2);
    }

    #[test]
    fn test_bad_file_is_skipped() {
        let files = vec![
            FileDescriptor::from_bytes("broken.json", "{not json"),
            FileDescriptor::from_bytes("empty.csv", ""),
            FileDescriptor::from_bytes("ok.csv", "sku,qty\nA1,4"),
        ];
        let result = SchemaGenerator::new()
            .generate_at(&files, &shop_config(), fixed_time())
            .unwrap();

        assert_eq!(result.metadata.files_analyzed, 1);
        assert!(result.metadata.file_structures.contains_key("ok.csv"));
        assert!(!result.metadata.file_structures.contains_key("broken.json"));
        assert_eq!(result.metadata.common_fields, vec!["qty", "sku"]);
    }

    #[test]
    fn test_missing_path_is_reported_before_generation() {
        let dir = tempdir().unwrap();
        let err = FileDescriptor::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_files_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Posts.JSON");
        fs::write(&path, r#"{"Post Title": "Hello", "views": 10}"#).unwrap();

        let file = FileDescriptor::from_path(&path).unwrap();
        assert_eq!(file.extension, ".json");

        let config = GeneratorConfig::new().with_website_type(WebsiteType::Blog);
        let result = SchemaGenerator::new()
            .generate_at(&[file], &config, fixed_time())
            .unwrap();
        assert_eq!(result.metadata.common_fields, vec!["post_title", "views"]);
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_export_uses_result_timestamp() {
        let generator = SchemaGenerator::new();
        let result = generator
            .generate_at(&[], &shop_config(), fixed_time())
            .unwrap();

        for format in ExportFormat::ALL {
            let rendered = generator.export(&result, format, "Shop").unwrap();
            assert_eq!(rendered.format, format.as_str());
            assert!(!rendered.content.is_empty());
            if format != ExportFormat::Json {
                assert!(rendered.content.contains("// Generated: 2024-06-15T09:30:00Z\n"));
            }
        }
    }

    #[test]
    fn test_export_extensions() {
        let generator = SchemaGenerator::new();
        let result = generator
            .generate_at(&[], &GeneratorConfig::default(), fixed_time())
            .unwrap();
        let extensions: Vec<String> = ExportFormat::ALL
            .iter()
            .map(|f| generator.export(&result, *f, "Site").unwrap().file_extension)
            .collect();
        assert_eq!(extensions, vec!["json", "prisma", "ts"]);
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(
            &path,
            r#"{"websiteType": "portfolio", "databaseType": "sqlite", "tablePrefix": "pf_"}"#,
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.website_type, WebsiteType::Portfolio);
        assert_eq!(config.database_type, DatabaseType::Sqlite);
        assert_eq!(config.table_prefix, "pf_");
        assert!(!config.include_images);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.yml");
        fs::write(
            &path,
            "websiteType: docs\ndatabaseType: mongo\nincludeMetadata: true\nprojectName: Handbook\n",
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.website_type, WebsiteType::Documentation);
        assert_eq!(config.database_type, DatabaseType::MongoDb);
        assert!(config.include_metadata);
        assert_eq!(config.project_name, "Handbook");

        let result = SchemaGenerator::new()
            .generate_at(&[], &config, fixed_time())
            .unwrap();
        assert!(result.sql.starts_with("// Database schema for Handbook\n"));
        assert_eq!(result.tables.last().map(|t| t.name.as_str()), Some("metadata"));
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.toml");
        fs::write(
            &path,
            "websiteType = \"business\"\ndatabaseType = \"postgresql\"\nincludeImages = true\n",
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.website_type, WebsiteType::Business);
        assert_eq!(config.database_type, DatabaseType::PostgreSql);
        assert!(config.include_images);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.ini");
        fs::write(&path, "websiteType=blog").unwrap();

        let err = GeneratorConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "ini"));
    }

    #[test]
    fn test_parse_error_surfaces_through_pipeline_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(&path, "{").unwrap();

        let err: PipelineError = GeneratorConfig::from_file(&path).unwrap_err().into();
        assert!(matches!(err, PipelineError::Config(ConfigError::Parse { .. })));
        assert!(err.to_string().contains("schema.json"));
    }
}
