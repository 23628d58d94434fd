//! Build script to generate embedded word lists
//!
//! Reads the difficulty word lists and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words4.txt",
        &Path::new(&out_dir).join("easy.rs"),
        "EASY",
        "Common four-letter words (easy difficulty)",
    );

    generate_word_list(
        "data/words4-medium.txt",
        &Path::new(&out_dir).join("medium.rs"),
        "MEDIUM",
        "Mixed common and uncommon four-letter words (medium difficulty)",
    );

    generate_word_list(
        "data/words4-hard.txt",
        &Path::new(&out_dir).join("hard.rs"),
        "HARD",
        "Mostly uncommon four-letter words (hard difficulty)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words4.txt");
    println!("cargo:rerun-if-changed=data/words4-medium.txt");
    println!("cargo:rerun-if-changed=data/words4-hard.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines are dropped here; case and whitespace are left to the runtime normalizer.
    let words: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {:?},", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
