//! docblocks CLI - documentation content inspection tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docblocks::{
    collect_links, nest_toc, slug, to_json, validate, JsonFormat, Site, SiteOptions, TocItem,
    TocNode,
};

#[derive(Parser)]
#[command(name = "docblocks")]
#[command(version)]
#[command(about = "Inspect documentation content trees: TOC, navigation, links", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output switches shared by the listing commands.
#[derive(clap::Args)]
struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

impl OutputArgs {
    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of contents of each page
    Toc {
        /// Site file (JSON array of page definitions, or a single page)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only show the page with this href
        #[arg(long)]
        page: Option<String>,

        /// Show entries nested by level
        #[arg(long)]
        tree: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the navigation menu
    Nav {
        /// Site file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Base URL prepended to page hrefs
        #[arg(long, env = "DOCBLOCKS_BASE_URL", default_value = "/")]
        base: String,

        /// Include internal-only pages
        #[arg(long)]
        internal: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List link and card targets of each page
    Links {
        /// Site file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only list links to other sites
        #[arg(long)]
        external: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check every page for structural problems
    Check {
        /// Site file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the anchor slug of a piece of text
    Slug {
        /// Text to convert
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Toc {
            input,
            page,
            tree,
            output,
        } => cmd_toc(&input, page.as_deref(), tree, &output),
        Commands::Nav {
            input,
            base,
            internal,
            output,
        } => cmd_nav(&input, &base, internal, &output),
        Commands::Links {
            input,
            external,
            output,
        } => cmd_links(&input, external, &output),
        Commands::Check { input } => cmd_check(&input),
        Commands::Slug { text } => {
            println!("{}", slug(&text.join(" ")));
            Ok(())
        }
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Listing commands load leniently so one bad page does not hide the rest.
fn load(input: &Path, options: SiteOptions) -> Result<Site, Box<dyn std::error::Error>> {
    log::debug!("Loading {}", input.display());
    Ok(Site::load(input, options.lenient())?)
}

fn cmd_toc(
    input: &Path,
    page: Option<&str>,
    tree: bool,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let site = load(input, SiteOptions::new())?;
    if let Some(href) = page {
        site.find(href)?;
    }

    let index: Vec<_> = site
        .toc_index()
        .into_iter()
        .filter(|toc| page.map_or(true, |href| toc.href == href))
        .collect();

    if output.json {
        if tree {
            let nested: Vec<Vec<TocNode>> =
                index.into_iter().map(|toc| nest_toc(toc.items)).collect();
            println!("{}", to_json(&nested, output.format())?);
        } else {
            println!("{}", to_json(&index, output.format())?);
        }
        return Ok(());
    }

    for toc in index {
        println!("{} {}", toc.title.cyan().bold(), toc.href.dimmed());
        if toc.items.is_empty() {
            println!("  {}", "(no entries)".dimmed());
        } else if tree {
            for node in nest_toc(toc.items) {
                print_tree(&node, 1);
            }
        } else {
            for item in &toc.items {
                println!("{}", format_toc_line(item));
            }
        }
        println!();
    }

    Ok(())
}

/// Two spaces of indent per level beyond the first.
fn format_toc_line(item: &TocItem) -> String {
    let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
    format!("{}{} #{}", indent, item.title, item.id)
}

fn print_tree(node: &TocNode, depth: usize) {
    println!(
        "{}{} {}",
        "  ".repeat(depth),
        node.item.title,
        format!("#{}", node.item.id).dimmed()
    );
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}

fn cmd_nav(
    input: &Path,
    base: &str,
    internal: bool,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = SiteOptions::new()
        .with_base_url(base)
        .include_internal(internal);
    let site = load(input, options)?;
    let nav = site.navigation();

    if output.json {
        println!("{}", to_json(&nav, output.format())?);
        return Ok(());
    }

    for group in nav {
        let category = group.category.as_deref().unwrap_or("Other");
        println!("{}", category.cyan().bold());
        let last = group.entries.len().saturating_sub(1);
        for (i, entry) in group.entries.iter().enumerate() {
            let branch = if i == last { "└─" } else { "├─" };
            println!("  {} {} {}", branch.dimmed(), entry.title, entry.url.dimmed());
        }
    }

    Ok(())
}

fn cmd_links(
    input: &Path,
    external_only: bool,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let site = load(input, SiteOptions::new())?;

    let mut all = Vec::new();
    for page in site.pages() {
        let links: Vec<_> = collect_links(&page.content)
            .into_iter()
            .filter(|link| !external_only || link.external)
            .collect();
        all.push((page.href().to_string(), links));
    }

    if output.json {
        println!("{}", to_json(&all, output.format())?);
        return Ok(());
    }

    for (href, links) in all {
        println!("{}", href.cyan().bold());
        for link in links {
            let marker = if link.external { "↗" } else { "→" };
            println!("  {} {} {}", marker, link.text, link.href.dimmed());
        }
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let site = load(input, SiteOptions::new())?;

    let mut failures = 0;
    for page in site.pages() {
        match validate(&page.content) {
            Ok(()) => println!("{} {}", "ok".green(), page.href()),
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", "fail".red().bold(), page.href(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} pages failed", failures, site.len()).into());
    }

    println!("\n{} {} pages checked", "Done!".green().bold(), site.len());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docblocks".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Documentation content inspection tool");
    println!();
    println!("Repository: {}", "https://github.com/stupside/moley".dimmed());
    println!("License: MIT");
}
