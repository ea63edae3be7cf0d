use clap::{Parser, Subcommand};
use frontpage::{config, generate, layout, load, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "frontpage")]
#[command(about = "Static front-page generator for newsroom article feeds")]
#[command(long_about = "\
Static front-page generator for newsroom article feeds

Your exported JSON feeds are the data source. Articles are placed into a
newspaper-style zone layout (hero, secondary pair, slider, sidebar, repeating
three-column sections), categories become navigation and section pages, and
everything renders to plain HTML.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── articles.json                # Article feed (array or {data: [...]})
  ├── categories.json              # Category feed (two-level tree)
  └── tags.json                    # Tag feed

Only published articles enter the layout, newest first. Category and tag
references may be bare ids or inline objects; both resolve the same way.

Run 'frontpage gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (layout manifest)
    #[arg(long, default_value = ".frontpage-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the feeds and partition them into a layout manifest
    Layout,
    /// Produce the final HTML site from the layout manifest
    Generate,
    /// Run the full pipeline: layout → generate
    Build,
    /// Validate feeds and report the layout without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Layout => {
            let feeds = load::load(&cli.source)?;
            let drafts = feeds.drafts;
            let manifest = layout::Manifest::build(feeds);
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("layout.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_layout_output(drafts, &manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("layout.json");
            generate::generate(&manifest_path, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: layout::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Layout from {}", cli.source.display());
            let feeds = load::load(&cli.source)?;
            let drafts = feeds.drafts;
            let manifest = layout::Manifest::build(feeds);
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("layout.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_layout_output(drafts, &manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let feeds = load::load(&cli.source)?;
            for line in output::format_check_output(&feeds) {
                println!("{}", line);
            }
            println!("==> Feeds are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
