//! CLI for the product catalog backend.
//!
//! Usage:
//!   catalog list [--json]
//!   catalog create --name <name> --description <text> --price <price> --image-url <url>
//!
//! The backend origin comes from `--api-url`, then `CATALOG_API_URL`,
//! then `http://localhost:8084`.

use std::process;

use clap::{Parser, Subcommand};
use product_catalog::{
    BASE_URL_ENV, CREATED_MESSAGE, CatalogError, ClientConfig, FormField, ProductClient,
    ProductForm, UreqTransport, init_logging,
};

#[derive(Parser)]
#[command(name = "catalog", version, about = "Create and list products in the catalog")]
struct Cli {
    /// Backend origin, e.g. http://localhost:8084
    #[arg(long, global = true, env = BASE_URL_ENV)]
    api_url: Option<String>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product
    List {
        /// Print the products as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a product. Omitted fields are sent empty.
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
}

fn run(cli: Cli) -> Result<(), CatalogError> {
    let config = ClientConfig::resolve(cli.api_url.as_deref())?;
    let client = ProductClient::new(config, UreqTransport::new());

    match cli.command {
        Commands::List { json } => {
            let products = client.list_products()?;
            if json {
                let text = serde_json::to_string_pretty(&products).map_err(|e| {
                    CatalogError::Encode {
                        message: e.to_string(),
                    }
                })?;
                println!("{text}");
            } else if products.is_empty() {
                println!("No products.");
            } else {
                for product in &products {
                    println!("{}", product.summary_line());
                }
            }
        }
        Commands::Create {
            name,
            description,
            price,
            image_url,
        } => {
            let mut form = ProductForm::new();
            form.set(FormField::Name, name);
            form.set(FormField::Description, description);
            form.set(FormField::Price, price);
            form.set(FormField::ImageUrl, image_url);

            client.create_product(&form.to_product())?;
            println!("{CREATED_MESSAGE}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
