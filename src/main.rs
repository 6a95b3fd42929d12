use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use brandz::clients::SharedGenerator;
use brandz::config::{Config, DEFAULT_LOG_LEVEL};
use brandz::generation::generate_brand_identity;
use brandz::http::{AppState, start_http_server};
use brandz::interpreter::SpanStrategy;
use brandz::presentation::{export_identity_json, export_logo};
use brandz::{BrandBrief, Industry, Personality};

#[derive(Parser)]
#[command(name = "brandz")]
#[command(about = "AI brand identity generator backed by Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the brand studio form over HTTP
    Serve {
        /// Address to listen on (overrides BRANDZ_HTTP_BIND)
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Locate the JSON object by balanced braces instead of first/last brace
        #[arg(long)]
        balanced_braces: bool,
    },
    /// Generate one brand identity and print or save it
    Generate {
        #[arg(long)]
        description: String,
        #[arg(long)]
        demographic: String,
        #[arg(long, default_value = "Technology")]
        industry: Industry,
        /// May be repeated; defaults to Professional and Trustworthy
        #[arg(long)]
        personality: Vec<Personality>,
        /// Directory for brand_identity.json and brand_logo.txt
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        balanced_braces: bool,
    },
}

fn strategy(balanced_braces: bool) -> SpanStrategy {
    if balanced_braces {
        SpanStrategy::BalancedBraces
    } else {
        SpanStrategy::GreedyBraces
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve {
            bind,
            balanced_braces,
        } => {
            if let Some(bind) = bind {
                config.server.http_bind = bind;
            }
            info!("Starting BrandZ (model={})", config.gemini.model);
            let state = AppState::new(config)?.with_strategy(strategy(balanced_braces));
            start_http_server(state).await?;
        }
        Commands::Generate {
            description,
            demographic,
            industry,
            personality,
            out,
            balanced_braces,
        } => {
            let personality = if personality.is_empty() {
                Personality::DEFAULTS.to_vec()
            } else {
                personality
            };
            let brief = BrandBrief::new(description, demographic, industry, personality);
            brief.validate()?;

            let shared = SharedGenerator::new(Arc::new(config));
            let generator = shared.get()?;
            let identity =
                generate_brand_identity(generator.as_ref(), &brief, strategy(balanced_braces))
                    .await?;

            let identity_export = export_identity_json(&identity)?;
            match out {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    let path = dir.join(identity_export.file_name);
                    std::fs::write(&path, &identity_export.body)?;
                    info!("Wrote {}", path.display());
                    if let Some(logo) = export_logo(&identity) {
                        let path = dir.join(logo.file_name);
                        std::fs::write(&path, &logo.body)?;
                        info!("Wrote {}", path.display());
                    }
                }
                None => println!("{}", identity_export.body),
            }
        }
    }

    Ok(())
}
