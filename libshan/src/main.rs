use libmyanmar_core::{strip_placeholders, Suggester, WordStore, Wordlist};
use libshan::{ControlKey, Key, PhoneticTable, ShanConfig, ShanKeyboard};
use std::io::{self, BufRead};
use std::path::Path;

fn demo_wordlist() -> Wordlist {
    let mut wl = Wordlist::empty();
    // A few common words so suggestions have something to rank.
    wl.insert("\u{1019}\u{1004}\u{103A}\u{1038}", 55);
    wl.insert("\u{1019}\u{1031}", 30);
    wl.insert("\u{1000}\u{102C}", 25);
    wl.insert("\u{1000}\u{1031}\u{102C}", 20);
    wl.insert("\u{1075}\u{1084}", 15);
    wl.insert("\u{1076}\u{1083}\u{1088}", 12);
    wl
}

fn build_demo_keyboard() -> ShanKeyboard {
    // Prefer loading runtime artifacts from `data/` if they exist.
    let data_dir = Path::new("data");
    let fst_path = data_dir.join("shan.fst");
    let entries_path = data_dir.join("shan.bincode");

    let wordlist = if fst_path.exists() && entries_path.exists() {
        match Wordlist::load(&fst_path, &entries_path) {
            Ok(wl) => {
                println!("✓ Loaded wordlist from artifacts ({} words)", wl.len());
                wl
            }
            Err(e) => {
                eprintln!("⚠ Failed to load wordlist: {}", e);
                demo_wordlist()
            }
        }
    } else {
        println!("ℹ Using fallback demo wordlist");
        demo_wordlist()
    };

    // Learned words persist under the user profile when possible.
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let store_dir = std::path::PathBuf::from(home).join(".libshan");
    let _ = std::fs::create_dir_all(&store_dir);
    let store = match WordStore::open(store_dir.join("learned.redb")) {
        Ok(s) => {
            println!("✓ Opened learned-word store");
            s
        }
        Err(e) => {
            eprintln!("⚠ Failed to open learned-word store: {}", e);
            WordStore::new_in_memory()
        }
    };

    let config = match ShanConfig::load_toml(data_dir.join("shan.toml")) {
        Ok(c) => {
            println!("✓ Loaded keyboard config");
            c
        }
        Err(_) => ShanConfig::default(),
    };

    let phonetics = PhoneticTable::load(data_dir.join("pronunciations.txt"));
    println!("ℹ Pronunciation table: {} entries", phonetics.len());

    let suggester = Suggester::new(wordlist, store, config.base().clone());
    ShanKeyboard::new(suggester, phonetics, config)
}

fn main() {
    println!("═══════════════════════════════════════════════════");
    println!("  libshan - Interactive Shan Keyboard Test");
    println!("═══════════════════════════════════════════════════");
    println!();

    let mut keyboard = build_demo_keyboard();

    println!("Ready! Type visual-order text and press Enter.");
    println!("Each codepoint is fed as one key press; the corrected");
    println!("text and the current suggestions are printed back.");
    println!("Press Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(raw) => {
                let input = raw.trim();
                if input.is_empty() {
                    continue;
                }

                let mut sink = String::new();
                for ch in input.chars() {
                    let reply = keyboard.handle_key(&Key::character(ch));
                    for _ in 0..reply.edit.delete {
                        sink.pop();
                    }
                    sink.push_str(&reply.edit.insert);
                }

                println!("  → {}", strip_placeholders(&sink));
                let hits = keyboard.suggestions();
                for (i, s) in hits.iter().enumerate().take(5) {
                    println!("  {}. {} (weight: {})", i + 1, s.text, s.weight);
                }
                println!();

                // Commit the remainder so the next line starts fresh.
                keyboard.handle_key(&Key::control(ControlKey::Enter));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }
}
