use citygen::{config, generate, output, routes, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "citygen")]
#[command(about = "Static site generator for local-service contractor sites")]
#[command(long_about = "\
Static site generator for local-service contractor sites

Your filesystem is the data source. TOML files become services and cities,
markdown files become project case studies, and every city and neighborhood
gets its own landing page with deterministically varied copy.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Static assets → copied to the output root
  ├── services/
  │   ├── 010-siding.toml          # Service (numbered = shown in nav)
  │   ├── 010-siding.md            # Optional long-form body (same stem)
  │   └── wip-gutters.toml         # No number prefix = hidden from nav
  ├── cities/
  │   ├── 010-eugene-or.toml       # City with its [[areas]]
  │   └── 020-albany-or.toml
  ├── projects/
  │   ├── 010-fairmount.md         # Case study body (# heading = title)
  │   └── 010-fairmount.toml       # Sidecar: city + service association
  └── testimonials.toml            # [[testimonials]] with optional city

Routes generated:

  /                        home
  /services/<service>/     one per service
  /<city>/                 one per city
  /<city>/<area>/          one per area
  /projects/<project>/     one per project

Run 'citygen gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".citygen-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from a scanned manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// List every route the site would generate
    Routes,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            if !manifest_path.exists() {
                return Err(generate::GenerateError::ManifestNotFound(manifest_path).into());
            }
            let content = std::fs::read_to_string(&manifest_path)?;
            let manifest: scan::Manifest = serde_json::from_str(&content)?;
            init_thread_pool(&manifest.config.processing);
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_routes_output(&routes::routes(&manifest));
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.processing);
            generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_routes_output(&routes::routes(&manifest));

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::Routes => {
            let manifest = scan::scan(&cli.source)?;
            output::print_routes_output(&routes::routes(&manifest));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
