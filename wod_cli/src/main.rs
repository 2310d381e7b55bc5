use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wod_core::*;

#[derive(Parser)]
#[command(name = "wod")]
#[command(about = "Random workout-of-the-day generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout of the day (default)
    Generate {
        /// Time limit in minutes (invalid values fall back to defaults)
        #[arg(long, short = 't')]
        time: Option<String>,

        /// Intensity tier: 1 beginner, 2 intermediate, 3 advanced
        #[arg(long, short = 'i')]
        intensity: Option<String>,

        /// Seed the random source for a reproducible workout
        #[arg(long)]
        seed: Option<u64>,

        /// Print the workout as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the exercise catalog
    Catalog,
}

fn main() -> Result<()> {
    // Keep stdout for the workout itself
    wod_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let catalog = config.catalog()?;

    match cli.command {
        Some(Commands::Generate {
            time,
            intensity,
            seed,
            json,
        }) => cmd_generate(&catalog, &config, time, intensity, seed, json),
        Some(Commands::Catalog) => {
            display_catalog(&catalog);
            Ok(())
        }
        None => cmd_generate(&catalog, &config, None, None, None, false),
    }
}

fn cmd_generate(
    catalog: &Catalog,
    config: &Config,
    time: Option<String>,
    intensity: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let defaults = config.default_request()?;

    // Either flag alone keeps the configured value for the other one
    let request = if time.is_none() && intensity.is_none() {
        defaults
    } else {
        let default_time = defaults.time_limit.to_string();
        let default_tier = defaults.intensity.tier().to_string();
        WodRequest::from_input(
            Some(time.as_deref().unwrap_or(&default_time)),
            Some(intensity.as_deref().unwrap_or(&default_tier)),
            defaults,
        )
    };

    let generator = WodGenerator::new(catalog).with_seed(seed.or(config.generator.seed));
    let wod = generator.generate(&request);

    if json {
        let out = serde_json::json!({
            "request": request,
            "total_minutes": wod.total_minutes(),
            "lines": wod.descriptions(),
            "patterns": wod.patterns,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_wod(&request, &wod);
    }

    Ok(())
}

fn display_wod(request: &WodRequest, wod: &Wod) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WOD for {}", chrono::Local::now().format("%A %-d %B %Y"));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  {} minutes, {}",
        request.time_limit,
        request.intensity.label()
    );
    println!();

    for (n, line) in wod.descriptions().iter().enumerate() {
        println!("  {:>2}. {}", n + 1, line);
    }

    println!();
    println!("  Estimated total: ~{} min", wod.total_minutes());
    println!();
}

fn display_catalog(catalog: &Catalog) {
    for (group, exercises) in catalog.iter() {
        println!("{}", group);
        for exercise in exercises {
            println!(
                "  {:<16} {:>3} / {:>3} / {:>3} {}",
                exercise.name,
                exercise.counts[0],
                exercise.counts[1],
                exercise.counts[2],
                exercise.measure.unit()
            );
        }
        println!();
    }
}
