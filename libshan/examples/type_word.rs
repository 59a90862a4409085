use libmyanmar_core::{Suggester, WordStore, Wordlist};
use libshan::{ControlKey, Key, PhoneticTable, ShanConfig, ShanKeyboard};

fn main() {
    let config = ShanConfig::default();
    let suggester = Suggester::new(
        Wordlist::empty(),
        WordStore::new_in_memory(),
        config.base().clone(),
    );
    let mut keyboard = ShanKeyboard::new(suggester, PhoneticTable::built_in(), config);

    // "kaw" typed the way the phonetic layout emits it: pre-base vowel first.
    let presses = ['\u{1031}', '\u{1000}', '\u{102C}'];

    let mut sink = String::new();
    for ch in presses {
        let reply = keyboard.handle_key(&Key::character(ch));
        for _ in 0..reply.edit.delete {
            sink.pop();
        }
        sink.push_str(&reply.edit.insert);
        println!(
            "key U+{:04X}: delete {}, insert {:?} -> screen {:?}",
            ch as u32, reply.edit.delete, reply.edit.insert, sink
        );
        if let Some(name) = reply.pronunciation {
            println!("  speak: {}", name);
        }
    }

    let reply = keyboard.handle_key(&Key::control(ControlKey::Enter));
    if let Some(word) = reply.flushed {
        println!("committed word: {}", word);
    }
}
