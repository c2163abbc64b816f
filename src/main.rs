use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressDrawTarget};
use log::info;
use wage_reader::utils::logging::console::{print_summary, render_wage_table};
use wage_reader::utils::logging::{ProgressLogWriter, create_main_progress_bar, finish_and_clear};
use wage_reader::{
    Industry, OccupationMatch, WageField, WageReaderConfig, WageTable, YearPolicy, find_survey_workbooks,
    load_workbooks, year_over_year_growth,
};

/// Explore wage survey workbooks from the command line
#[derive(Debug, Parser)]
#[command(name = "wage-reader", version, about)]
struct Cli {
    /// Directory containing the survey workbooks [default: $WAGE_DATA_DIR or .]
    #[arg(long, short)]
    dir: Option<PathBuf>,

    /// Only recognise the survey years 2021-2024 in filenames
    #[arg(long)]
    legacy_years: bool,

    /// Load workbooks one at a time
    #[arg(long)]
    sequential: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarise the loaded table
    Summary,
    /// List every industry label
    Industries,
    /// Search occupation titles
    Search {
        /// Text to look for
        term: String,
    },
    /// Show the year series for one occupation in one industry
    Show {
        #[arg(long, short)]
        occupation: String,
        #[arg(long, short, default_value = "All Industries")]
        industry: String,
        /// Add year-over-year growth of the basic median
        #[arg(long)]
        growth: bool,
    },
}

fn load_table(config: &WageReaderConfig, pb: &ProgressBar) -> anyhow::Result<WageTable> {
    let workbooks = find_survey_workbooks(config)
        .with_context(|| format!("Failed to read data directory {}", config.data_dir.display()))?;

    pb.set_length(workbooks.len() as u64);
    pb.set_draw_target(ProgressDrawTarget::stderr());
    let table = load_workbooks(&workbooks, config, Some(pb));
    finish_and_clear(pb);

    info!(
        "Loaded {} records from {} workbooks",
        table.len(),
        workbooks.len()
    );
    Ok(table)
}

fn main() -> anyhow::Result<()> {
    // The bar stays hidden until loading starts; log lines go through it
    let pb = create_main_progress_bar(0, Some("Loading workbooks"));
    pb.set_draw_target(ProgressDrawTarget::hidden());

    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(ProgressLogWriter::new(pb.clone()))))
        .init();

    let cli = Cli::parse();

    let mut config = WageReaderConfig::from_env().context("Invalid environment configuration")?;
    if let Some(dir) = cli.dir {
        config.data_dir = dir;
    }
    if cli.legacy_years {
        config.year_policy = YearPolicy::legacy();
    }
    if cli.sequential {
        config.parallel = false;
    }

    if let Command::Industries = cli.command {
        let industries = WageTable::industries();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&industries)?);
        } else {
            industries.iter().for_each(|label| println!("{label}"));
        }
        return Ok(());
    }

    let table = load_table(&config, &pb)?;
    if table.is_empty() {
        println!(
            "No data found. Place the survey workbooks in {}",
            config.data_dir.display()
        );
        return Ok(());
    }

    match cli.command {
        Command::Industries => {}
        Command::Summary => {
            let summary = table.summary();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Command::Search { term } => {
            let matches = table.search_occupations(&term);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No occupation found matching '{term}'");
            } else {
                matches.iter().for_each(|occ| println!("{occ}"));
            }
        }
        Command::Show {
            occupation,
            industry,
            growth,
        } => {
            if Industry::from_label(&industry).is_none() {
                bail!("Unknown industry '{industry}'. Run `wage-reader industries` for the list.");
            }

            let occupation = match table.resolve_occupation(&occupation) {
                OccupationMatch::Exact(name) => name,
                OccupationMatch::Suggest(name) => {
                    info!("Using closest match '{name}'");
                    name
                }
                OccupationMatch::Ambiguous(names) => {
                    println!("Multiple matches found for '{occupation}':");
                    for (i, name) in names.iter().take(10).enumerate() {
                        println!("{}. {name}", i + 1);
                    }
                    if names.len() > 10 {
                        println!("... and {} more", names.len() - 10);
                    }
                    return Ok(());
                }
                OccupationMatch::NotFound => {
                    println!("No occupation found matching '{occupation}'");
                    return Ok(());
                }
            };

            let rows = table.filter(&occupation, &industry);
            let points = growth.then(|| year_over_year_growth(&rows, WageField::BasicMedian));

            if cli.json {
                let output = serde_json::json!({
                    "occupation": occupation,
                    "industry": industry,
                    "records": rows,
                    "growth": points,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Occupation: {occupation}");
                println!("Industry: {industry}\n");
                if rows.is_empty() {
                    println!("No data found for this occupation and industry combination.");
                } else {
                    print!("{}", render_wage_table(&rows, points.as_deref()));
                }
            }
        }
    }

    Ok(())
}
