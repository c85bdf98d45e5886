mod dictionary;
mod trie;

use crate::dictionary::{Dictionary, LoadLimits, DEFAULT_MAX_WORDS, DEFAULT_MAX_WORD_LEN};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Queries answered when no subcommand is given
const DEMO_QUERIES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

/// CLI for counting word occurrences in a dictionary file
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Read at most this many words
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Keep at most this many characters per word
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Print the occurrence count for each given word
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List the words loaded from the dictionary
    Words,
}

/// Renders one query result as a report line
fn report_line(word: &str, count: usize) -> String {
    format!("\t{word} : {count}")
}

/// Report printed by a run with no subcommand
fn demo_report(dictionary: &Dictionary) -> Vec<String> {
    DEMO_QUERIES
        .into_iter()
        .map(|word| report_line(word, dictionary.occurrences(word)))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let limits = LoadLimits {
        max_words: cli.max_words,
        max_word_len: cli.max_word_len,
    };
    let dictionary = Dictionary::load(&cli.dictionary, limits)?;

    match cli.command {
        Some(Commands::Lookup { words }) => {
            for word in &words {
                println!("{}", report_line(word, dictionary.occurrences(word)));
            }
        }
        Some(Commands::Words) => {
            for word in dictionary.words() {
                println!("{word}");
            }
        }
        None => {
            for line in demo_report(&dictionary) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_report_line_formats_word_and_count() {
        assert_eq!(report_line("no", 3), "\tno : 3");
        assert_eq!(report_line("notaword", 0), "\tnotaword : 0");
    }

    #[test]
    fn test_demo_report_renders_every_fixed_query() {
        let input = Cursor::new("count\nfaq\nmaybe\nmuch\nno\n");
        let dictionary = Dictionary::from_reader(input, LoadLimits::default()).unwrap();

        assert_eq!(
            demo_report(&dictionary),
            [
                "\tnotaword : 0",
                "\tucf : 0",
                "\tno : 1",
                "\tnote : 0",
                "\tcorg : 0",
            ]
        );
    }
}
