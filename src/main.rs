use chrono::Utc;
use clap::{Parser, Subcommand};
use errand_site::content::ContentClient;
use errand_site::generate::Renderer;
use errand_site::{config, export, nav, output, server, sitemap};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "errand-site")]
#[command(about = "Marketing site server and static exporter for GoQuick")]
#[command(long_about = "\
Marketing site server and static exporter for GoQuick

Pages are rendered on the server. The blog is read from the content API
configured in site.toml; the contact form forwards to the same API, and
career applications are acknowledged in-process.

Configuration resolves in layers (later wins):

  stock defaults        built into the binary
  site.toml             --config, optional
  environment           SITE_URL, API_BASE_URL, APP_DOWNLOAD_URL, HOST, PORT

Logging follows RUST_LOG (default: errand_site=info,tower_http=info).

Run 'errand-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP
    Serve,
    /// Export every page, the blog, and assets to a directory
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Print sitemap.xml
    Sitemap,
    /// Validate configuration and navigation without serving
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("errand_site=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            init_tracing();
            let site_config = config::load_config(&cli.config)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(site_config))?;
        }
        Command::Build { output: out_dir } => {
            init_tracing();
            let site_config = config::load_config(&cli.config)?;
            let content = ContentClient::from_config(&site_config)?;
            let renderer = Renderer::new(site_config, nav::default_nav())?;
            println!("==> Exporting site \u{2192} {}", out_dir.display());
            let runtime = tokio::runtime::Runtime::new()?;
            let today = Utc::now().date_naive();
            let report =
                runtime.block_on(export::export_site(&renderer, &content, &out_dir, today))?;
            output::print_export_output(&report, &out_dir);
        }
        Command::Sitemap => {
            let site_config = config::load_config(&cli.config)?;
            print!(
                "{}",
                sitemap::render_sitemap(&site_config.site.site_url, Utc::now().date_naive())
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site_config = config::load_config(&cli.config)?;
            let items = nav::default_nav();
            nav::validate_nav(&items)?;
            output::print_check_output(&site_config, &items);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
