//! Templates command implementation

use clap::Args;
use site_schema::{SchemaGenerator, WebsiteType};

use crate::error::CliError;
use crate::output::format_table_listing;

/// Arguments for the `templates` command
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Only list this domain's tables
    #[arg(short = 't', long)]
    pub website_type: Option<String>,
}

/// Handle the `templates` command
pub fn handle_templates(args: &TemplatesArgs) -> Result<(), CliError> {
    let generator = SchemaGenerator::new();
    let catalog = generator.catalog();
    let domains: Vec<WebsiteType> = match &args.website_type {
        Some(tag) => vec![WebsiteType::from_tag(tag)],
        None => catalog.website_types().collect(),
    };

    for website_type in domains {
        let template = catalog.get(website_type).ok_or_else(|| {
            CliError::InvalidArgument(format!("no template for '{website_type}'"))
        })?;
        println!("# {}\n", template.website_type());
        print!("{}", format_table_listing(template.tables()));
    }
    Ok(())
}
