use clap::{Parser, Subcommand};
use sabun::data::load_catalog_source;
use sabun::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// A recipe change-detection and update-notification engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Diff two catalog snapshots and print a report per changed recipe
    Diff(DiffArgs),
    /// Replay an ordered series of catalog snapshots through a tracking session
    Watch(WatchArgs),
}

#[derive(Parser, Debug)]
struct DiffArgs {
    /// Path to the older catalog JSON file
    old_path: String,
    /// Path to the newer catalog JSON file
    new_path: String,

    /// Emit reports as JSON instead of alert text
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct WatchArgs {
    /// Catalog snapshot files, oldest first
    #[arg(required = true, num_args = 2..)]
    snapshots: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diff(args) => run_diff(args),
        Commands::Watch(args) => run_watch(args),
    }
}

fn run_diff(args: DiffArgs) {
    let total_start = Instant::now();

    let old_source = load_catalog_source(&args.old_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load old catalog '{}': {}",
            args.old_path, e
        ))
    });
    let new_recipes = RecipeCatalog::from_file(&args.new_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load new catalog '{}': {}",
            args.new_path, e
        ))
    });

    let mut changed = 0;
    for recipe in &new_recipes {
        let Some(old) = old_source.get(&recipe.name) else {
            continue;
        };

        let report = diff_recipes(old, recipe)
            .unwrap_or_else(|e| exit_with_error(&format!("Diff failed: {}", e)));
        if report.is_empty() {
            continue;
        }

        changed += 1;
        if args.json {
            let line = serde_json::to_string(&report)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode report: {}", e)));
            println!("{}", line);
        } else {
            println!("{}\n", ReportFormatter::format_report(&report));
        }
    }

    println!(
        "Compared {} recipes: {} changed ({:?})",
        new_recipes.len(),
        changed,
        total_start.elapsed()
    );
}

fn run_watch(args: WatchArgs) {
    let (first, rest) = args
        .snapshots
        .split_first()
        .unwrap_or_else(|| exit_with_error("At least two snapshot files are required."));

    // The oldest snapshot seeds the reference source; every later snapshot is
    // replayed as a stream of observations against it.
    let source = load_catalog_source(first).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load snapshot '{}': {}", first, e))
    });
    let mut watcher = RecipeWatcher::new(source, ConsoleNotifier::stdout());

    println!("Session seeded from '{}'\n", first);

    let mut alerts = 0;
    for path in rest {
        let recipes = RecipeCatalog::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load snapshot '{}': {}", path, e))
        });

        println!("--- Observing snapshot '{}' ---", path);
        for recipe in &recipes {
            match watcher.observe(recipe) {
                Ok(Some(_)) => alerts += 1,
                Ok(None) => {}
                Err(e) => exit_with_error(&format!("Check failed for '{}': {}", recipe.name, e)),
            }
        }

        // This snapshot becomes the reference for the next one.
        for recipe in recipes {
            watcher.source_mut().insert(recipe);
        }
    }

    println!(
        "\nSession finished: {} recipes tracked, {} alerts fired.",
        watcher.tracker().len(),
        alerts
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
