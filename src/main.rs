use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rosterbook::registry::DepartmentRegistry;
use rosterbook::{api, db};

const DEFAULT_DIRECTORY_PORT: u16 = 8001;
const DEFAULT_CATALOG_PORT: u16 = 8000;

#[derive(Parser)]
#[command(name = "rosterbook")]
#[command(about = "Employee directory and book/review catalog services")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve only the employee/department directory
    Directory {
        /// Port for the directory HTTP API
        #[arg(short, long, default_value_t = DEFAULT_DIRECTORY_PORT)]
        port: u16,
    },
    /// Serve only the book/review catalog
    Catalog {
        /// Port for the catalog HTTP API
        #[arg(short, long, default_value_t = DEFAULT_CATALOG_PORT)]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "rosterbook=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve_directory(port: u16) -> anyhow::Result<()> {
    let store = db::EmployeeStore::open_default()?;
    store.setup()?;

    let app = api::create_directory_router(store, DepartmentRegistry::new());

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Directory service listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_catalog(port: u16) -> anyhow::Result<()> {
    let db = db::Database::open_default()?;
    db.setup()?;

    let base_url = format!("http://127.0.0.1:{}", port);
    let app = api::create_catalog_router(db, base_url.as_str());

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Catalog service listening on {}", base_url);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Directory { port }) => serve_directory(port).await?,
        Some(Commands::Catalog { port }) => serve_catalog(port).await?,
        None => {
            // Default: run both services side by side
            tokio::try_join!(
                serve_directory(DEFAULT_DIRECTORY_PORT),
                serve_catalog(DEFAULT_CATALOG_PORT)
            )?;
        }
    }

    Ok(())
}
