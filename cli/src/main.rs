use anyhow::{Context, Result};
use clap::Parser;
use engine::recommend::DEFAULT_K;
use engine::{ModelState, Table};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Content-based movie recommendations over TMDB datasets", long_about = None)]
struct Args {
    /// Movies dataset (CSV)
    #[arg(long, default_value = "tmdb_5000_movies.csv")]
    movies: String,
    /// Credits dataset (CSV)
    #[arg(long, default_value = "tmdb_5000_credits.csv")]
    credits: String,
    /// Query title; omit for an interactive prompt
    #[arg(long)]
    title: Option<String>,
    /// Number of recommendations per query
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,
}

fn load_table(path: &str, name: &str) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).with_context(|| format!("open {path}"))?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(name, headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("read {path}"))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    tracing::info!(path, rows = table.len(), "loaded table");
    Ok(table)
}

fn print_recommendations(model: &ModelState, title: &str, k: usize) {
    match model.recommend(title, k) {
        Some(recs) => {
            println!("Top {} movie recommendations for '{}':", recs.len(), title);
            for (i, rec) in recs.iter().enumerate() {
                println!("{}. {}", i + 1, rec.title);
            }
        }
        None => println!("Sorry, the movie '{title}' is not in the database."),
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let movies = load_table(&args.movies, "movies")?;
    let credits = load_table(&args.credits, "credits")?;
    let model = ModelState::build(&movies, &credits)?;

    if let Some(title) = args.title {
        print_recommendations(&model, title.trim(), args.k);
        return Ok(());
    }

    // Interactive: one query per line against the same built model, until
    // EOF or a blank line.
    let stdin = io::stdin();
    loop {
        print!("Enter a movie title for recommendations: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let title = line.trim();
        if title.is_empty() {
            break;
        }
        print_recommendations(&model, title, args.k);
    }
    Ok(())
}
