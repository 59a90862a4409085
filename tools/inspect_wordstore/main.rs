//! Inspect and export the learned-word store
//!
//! Usage:
//!   cargo run -p inspect_wordstore -- --db ~/.libshan/learned.redb
//!   cargo run -p inspect_wordstore -- --db learned.redb --format json --output words.json

use clap::Parser;
use libmyanmar_core::WordStore;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspect_wordstore")]
#[command(about = "Inspect and export the learned-word store")]
struct Args {
    /// Path to the learned-word database
    #[arg(short, long)]
    db: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge a JSON export into the store instead of reading it
    #[arg(long)]
    import: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let store = WordStore::open(&args.db)
        .map_err(|e| anyhow::anyhow!("Failed to open word store: {}", e))?;

    if let Some(path) = args.import {
        let json = std::fs::read_to_string(&path)?;
        let applied = store.import_json(&json)?;
        println!("Merged {} entries from {}", applied, path.display());
        return Ok(());
    }

    let output = match args.format.as_str() {
        "json" => store.export_json()?,
        "text" => {
            let mut entries = store.iter_all();
            entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            let mut out = String::new();
            for (word, count) in &entries {
                out.push_str(&format!("{}\t{}\n", count, word));
            }
            out.push_str(&format!("{} words total\n", entries.len()));
            out
        }
        _ => anyhow::bail!("Unsupported format: {}. Use 'text' or 'json'", args.format),
    };

    if let Some(path) = args.output {
        std::fs::write(path, output)?;
    } else {
        print!("{}", output);
    }

    Ok(())
}
