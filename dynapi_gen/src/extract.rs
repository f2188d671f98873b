use std::{collections::{HashMap, HashSet}, io::{self, BufRead}};

use log::{debug, trace};

use crate::header::{LineMatch, LineMatcher};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read header at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Function names in the order they were first seen, without duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionList {
    seen: HashSet<String>,
    funcs: Vec<String>,
}

impl FunctionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the name was already in the list.
    pub fn push(&mut self, func: &str) -> bool {
        if self.seen.contains(func) {
            return false;
        }
        self.seen.insert(func.to_owned());
        self.funcs.push(func.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.funcs.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.funcs
    }

    /// name -> jump table slot, the same map the hooking layer builds from DYNAPI_FUNCS
    pub fn index(&self) -> HashMap<String, usize> {
        let mut map = HashMap::new();
        for (i, func) in self.funcs.iter().enumerate() {
            map.insert(func.clone(), i);
        }
        map
    }

    /// Slots the hooking layer walks for a jump table of `tablesize` entries.
    /// It only skips `i > tablesize`, so slot `tablesize` itself is kept even
    /// though it sits one past the end of the table.
    pub fn within_table(&self, tablesize: usize) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate().filter(move |(i, _)| *i <= tablesize)
    }
}

impl<'a> FromIterator<&'a str> for FunctionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = FunctionList::new();
        for func in iter {
            list.push(func);
        }
        list
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub funcs: FunctionList,
    pub lines_read: usize,
    pub lines_matched: usize,
    pub duplicates: usize,
    pub empty: usize,
}

pub fn extract<R: BufRead>(reader: R, matcher: &LineMatcher) -> Result<ExtractReport, ExtractError> {
    let mut report = ExtractReport::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ExtractError::Read { line: i + 1, source })?;
        report.lines_read += 1;
        match matcher.match_line(&line) {
            LineMatch::Token(func) => {
                report.lines_matched += 1;
                if !report.funcs.push(func) {
                    report.duplicates += 1;
                    trace!("line {}: {} already seen", i + 1, func);
                }
            }
            LineMatch::Empty => {
                report.lines_matched += 1;
                report.empty += 1;
                debug!("line {}: matched but empty, skipping: {}", i + 1, line.trim());
            }
            LineMatch::NoMatch => {}
        }
    }
    debug!(
        "read {} lines, {} matched, {} duplicates, {} empty",
        report.lines_read, report.lines_matched, report.duplicates, report.empty
    );
    Ok(report)
}
