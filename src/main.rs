use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizdeck::api::{self, AppState};
use quizdeck::config::{ServeConfig, StoreConfig};
use quizdeck::pages::PageRenderer;
use quizdeck::store::QuestionStore;

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(about = "A small quiz server backed by a JSON question list")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Used when no subcommand is given
    #[command(flatten)]
    serve: ServeConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the quiz server
    Serve(ServeConfig),
    /// Print every stored question and answer
    List(StoreConfig),
    /// Add a question from the command line
    Add {
        /// Question text
        #[arg(short, long)]
        question: String,

        /// Answer text
        #[arg(short, long)]
        answer: String,

        #[command(flatten)]
        store: StoreConfig,
    },
}

impl Cli {
    /// Whether the command writes its result to stdout.
    fn prints_to_stdout(&self) -> bool {
        matches!(self.command, Some(Commands::List(_) | Commands::Add { .. }))
    }
}

/// Initialize tracing with output to stderr (for CLI output commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "quizdeck=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // stdout carries the command's output, keep log lines out of it
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let store = QuestionStore::open(&config.store.data_file)?;
    let pages = PageRenderer::new(&config.pages_dir);
    tracing::info!(
        "Serving pages from {} and static files from {}",
        pages.pages_dir().display(),
        config.static_dir.display()
    );
    let app = api::create_router(AppState::new(store, pages, &config.static_dir));

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("quizdeck listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.prints_to_stdout());

    match cli.command {
        Some(Commands::Serve(config)) => serve(config).await?,
        Some(Commands::List(config)) => {
            let store = QuestionStore::open(&config.data_file)?;
            for (i, record) in store.all()?.iter().enumerate() {
                println!("{}. {}\n   {}", i + 1, record.question, record.answer);
            }
        }
        Some(Commands::Add {
            question,
            answer,
            store,
        }) => {
            let store = QuestionStore::open(&store.data_file)?;
            let record = store.add(&question, &answer)?;
            println!("Added: {}", record.question);
        }
        None => serve(cli.serve).await?,
    }

    Ok(())
}
