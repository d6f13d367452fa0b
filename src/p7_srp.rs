// Single Responsibility Principle - Journal
// The journal manages entries; persistence is somebody else's job. Moving
// save/load into PersistenceManager leaves each type one reason to change.

use colored::Colorize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Journal - entry bookkeeping only
// ============================================================================

#[derive(Debug, Default)]
struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    fn new() -> Self {
        Self::default()
    }

    fn add_entry(&mut self, text: &str) {
        self.entries.push(format!("{}: {}", self.count, text));
        self.count += 1;
    }

    fn remove_entry(&mut self, pos: usize) -> Option<String> {
        if pos < self.entries.len() {
            Some(self.entries.remove(pos))
        } else {
            None
        }
    }

    #[allow(dead_code)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

// ============================================================================
// PersistenceManager - the split-out file concern
// ============================================================================

#[derive(Debug, Error)]
enum PersistenceError {
    #[error("journal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed journal entry at line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },
}

struct PersistenceManager;

impl PersistenceManager {
    fn save_to_file(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
        fs::write(path, journal.to_string())?;
        Ok(())
    }

    fn load_from_file(path: &Path) -> Result<Journal, PersistenceError> {
        let contents = fs::read_to_string(path)?;
        let mut entries = Vec::new();
        let mut next_count = 0;

        for (line_no, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let number = line
                .split_once(": ")
                .and_then(|(number, _)| number.parse::<usize>().ok())
                .ok_or_else(|| PersistenceError::MalformedEntry {
                    line: line_no + 1,
                    content: line.to_string(),
                })?;
            next_count = next_count.max(number + 1);
            entries.push(line.to_string());
        }

        Ok(Journal {
            entries,
            count: next_count,
        })
    }
}

fn journal_example() -> Result<(), PersistenceError> {
    let mut journal = Journal::new();
    journal.add_entry("I cried today.");
    journal.add_entry("I ate a bug.");
    println!("Journal entries:\n{}\n", journal);

    let path = std::env::temp_dir().join("journal.txt");
    PersistenceManager::save_to_file(&journal, &path)?;

    // verify!
    let loaded = PersistenceManager::load_from_file(&path)?;
    println!("{}", "Reloaded from disk:".bold());
    println!("{}", loaded);

    fs::remove_file(&path)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================


fn main() -> Result<(), PersistenceError> {
    println!("Single Responsibility Principle - Journal");
    println!("==========================================\n");

    journal_example()
}
