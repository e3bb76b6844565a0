//! Demo catalog router.
//!
//! Builds a small product catalog router and resolves paths or aliases given
//! on the command line. Unresolved input prints the known routes and aliases.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use typed_router::config::{load_config, RouterConfig};
use typed_router::observability::logging::init_logging;
use typed_router::{Alias, Path, PathParam, RouteError, RouteResult, Router, TemplateFactory};

const HOME: Alias<()> = Alias::new("home");
const PRODUCT: Alias<u64> = Alias::new("product");
const CATEGORY: Alias<String> = Alias::new("category");

#[derive(Parser)]
#[command(name = "typed-router")]
#[command(about = "Resolve paths and aliases against the demo catalog router", long_about = None)]
struct Cli {
    /// Router configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path such as `product/details/42`
    Resolve { path: String },
    /// Resolve an alias, with an optional context value
    Alias {
        identifier: String,
        context: Option<String>,
    },
    /// List registered routes
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// List registered aliases
    Aliases {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    init_logging(&config.logging.default_filter);

    tracing::info!(
        config = ?cli.config,
        static_aliases = config.aliases.len(),
        metrics = config.metrics.enabled,
        "Configuration loaded"
    );

    let router = catalog(config)?;

    let result = match cli.command {
        Commands::Resolve { path } => router.resolve(path),
        Commands::Alias {
            identifier,
            context,
        } => resolve_alias(&router, &identifier, context.as_deref())?,
        Commands::Routes { json } => {
            print_listing(&router.describe_routes(), json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Aliases { json } => {
            print_listing(&router.describe_aliases(), json)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    match result {
        Ok(page) => {
            println!("{}", page);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_not_found(&router, &error);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The demo catalog. Static aliases from the config are registered first, so
/// the built-in `home` alias replaces a configured one of the same name.
/// The details route is newer than the category route and wins for
/// `product/details/<id>`.
fn catalog(config: RouterConfig) -> Result<Router<String>, typed_router::TemplateError> {
    let mut router = Router::from_config(config);

    router.add_path("home", || "Welcome to the catalog".to_string())?;

    router.add_path("product/:category/:page", |category: String, page: u32| {
        format!("Products in '{}', page {}", category, page)
    })?;

    let details = TemplateFactory::start()
        .paths(["product", "details"])
        .placeholder::<u64>("id")
        .build()?;
    router.add(details, |id: u64| format!("Product details for #{}", id));

    let notifications = TemplateFactory::start()
        .paths(["settings", "notifications"])
        .placeholder::<bool>("enabled")
        .build()?;
    router.add(notifications, |enabled: bool| {
        format!("Notifications {}", if enabled { "on" } else { "off" })
    });

    router.add_alias(&HOME, |()| Some(Path::new("home")));
    router.add_alias(&PRODUCT, |id: u64| {
        Some(Path::new("product/details").join(id.to_string()))
    });
    router.add_alias(&CATEGORY, |category: String| {
        (!category.is_empty()).then(|| Path::new("product").join(category).join("1"))
    });

    Ok(router)
}

/// Pick the context type from the alias identifier.
fn resolve_alias(
    router: &Router<String>,
    identifier: &str,
    context: Option<&str>,
) -> Result<RouteResult<String>, typed_router::DecodeError> {
    Ok(match (identifier, context) {
        ("product", Some(raw)) => router.resolve_alias(&PRODUCT, u64::decode(raw)?),
        ("category", Some(raw)) => router.resolve_alias(&CATEGORY, raw.to_string()),
        (other, None) => router.resolve_alias(&Alias::<()>::named(other), ()),
        (other, Some(raw)) => router.resolve_alias(&Alias::<String>::named(other), raw.to_string()),
    })
}

fn print_listing(entries: &[String], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
    Ok(())
}

fn print_not_found(router: &Router<String>, error: &RouteError) {
    println!("404: Not Found");
    println!("{}", error);
    println!();
    println!("Known Routes");
    for route in router.describe_routes() {
        println!("  {}", route);
    }
    println!();
    println!("Known Aliases");
    for alias in router.describe_aliases() {
        println!("  {}", alias);
    }
}
