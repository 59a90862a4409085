use anyhow::{Context, Result};
use clap::Parser;
use libmyanmar_core::{normalize, WordEntry, Wordlist};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Frequency files: one `word<TAB>count` per line, bare words count 1.
    #[arg(long, num_args=1..)]
    inputs: Vec<PathBuf>,

    #[arg(long, default_value = "wordlist.fst")]
    out_fst: PathBuf,

    #[arg(long, default_value = "wordlist.bincode")]
    out_entries: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for path in &args.inputs {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, freq) = match line.split_once('\t') {
                Some((w, f)) => match f.trim().parse::<u64>() {
                    Ok(n) => (w.trim(), n),
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                },
                None => (line, 1),
            };
            // Words go in already storage-ordered so prefix queries match
            // what typing sessions produce.
            let canonical = normalize(word);
            if canonical.is_empty() {
                skipped += 1;
                continue;
            }
            entries.push(WordEntry::new(canonical, freq));
        }
    }

    Wordlist::write_artifacts(&entries, &args.out_fst, &args.out_entries)?;
    println!(
        "Wrote fst to {} and entries to {} ({} entries, {} lines skipped)",
        args.out_fst.display(),
        args.out_entries.display(),
        entries.len(),
        skipped
    );
    Ok(())
}
