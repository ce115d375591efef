//! Build script to generate embedded word lists
//!
//! Reads the `word : clue` files under `data/` and generates Rust source code
//! with const arrays of raw lines. Parsing happens at runtime so embedded and
//! user-supplied lists go through the same loader.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_line_list(
        "data/hangman.txt",
        &Path::new(&out_dir).join("hangman.rs"),
        "HANGMAN",
        "Default Hangman word list (word : clue lines)",
    );

    generate_line_list(
        "data/words.txt",
        &Path::new(&out_dir).join("scramble.rs"),
        "SCRAMBLE",
        "Default Word Scramble word list (word : hint lines)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/hangman.txt");
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_line_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        // Debug formatting yields a correctly escaped string literal
        writeln!(output, "    {:?},", line.trim_end()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
