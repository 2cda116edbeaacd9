use sabun::prelude::*;
use std::env;
use std::process;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: cargo run -- <path/to/old_catalog.json> <path/to/new_catalog.json>");
        process::exit(1);
    }

    let old_path = &args[1];
    let new_path = &args[2];

    println!("Loading old catalog from: {}", old_path);
    let old_recipes = match RecipeCatalog::from_file(old_path) {
        Ok(recipes) => recipes,
        Err(e) => {
            eprintln!("Failed to load old catalog '{}': {}", old_path, e);
            process::exit(1);
        }
    };

    println!("Loading new catalog from: {}", new_path);
    let new_recipes = match RecipeCatalog::from_file(new_path) {
        Ok(recipes) => recipes,
        Err(e) => {
            eprintln!("Failed to load new catalog '{}': {}", new_path, e);
            process::exit(1);
        }
    };

    let old_source: CatalogSource = old_recipes.into_iter().collect();

    println!("\nComparing {} recipes...\n", new_recipes.len());

    let mut updated = 0;
    for recipe in &new_recipes {
        let Some(old) = old_source.get(&recipe.name) else {
            println!("New recipe: '{}' (version {})", recipe.name, recipe.version);
            continue;
        };

        let report = match diff_recipes(old, recipe) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Diff failed for '{}': {}", recipe.name, e);
                process::exit(1);
            }
        };

        if !report.is_empty() {
            updated += 1;
            println!("{}\n", ReportFormatter::format_report(&report));
        }
    }

    println!("Done. {} of {} recipes changed.", updated, new_recipes.len());
}
