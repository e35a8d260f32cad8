//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LiteArgs, OutputFormat};
use crate::error::Result;
use crate::index::IndexStats;
use crate::query::Hit;

/// Result structure for table creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct InitResult {
    pub database: String,
    pub table: String,
    pub dialect: String,
}

/// Result structure for document indexing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IndexingResult {
    pub documents_indexed: usize,
    pub batches: usize,
    pub terms_written: usize,
    pub skipped_lines: usize,
    pub duration_ms: u64,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<Hit>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// One term and the number of postings stored for it.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub postings: usize,
}

/// Result structure for term listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub field: String,
    pub terms: Vec<TermEntry>,
}

/// Result structure for truncation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TruncateResult {
    pub table: String,
}

impl fmt::Display for InitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database: {}", self.database)?;
        writeln!(f, "Table:    {}", self.table)?;
        write!(f, "Dialect:  {}", self.dialect)
    }
}

impl fmt::Display for IndexingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Documents indexed: {}", self.documents_indexed)?;
        writeln!(f, "Batches:           {}", self.batches)?;
        writeln!(f, "Terms written:     {}", self.terms_written)?;
        if self.skipped_lines > 0 {
            writeln!(f, "Skipped lines:     {}", self.skipped_lines)?;
        }
        write!(f, "Duration:          {} ms", self.duration_ms)
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Query: {}", self.query)?;
        writeln!(
            f,
            "Found {} matching documents in {} ms",
            self.total_hits, self.duration_ms
        )?;
        for (rank, hit) in self.hits.iter().enumerate() {
            write!(f, "\n{:>4}. doc {:<10} score {:.4}", rank + 1, hit.doc_id, hit.score)?;
        }
        Ok(())
    }
}

impl fmt::Display for TermsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {}: {} terms", self.field, self.terms.len())?;
        for entry in &self.terms {
            write!(f, "\n  {:<40} {}", entry.term, entry.postings)?;
        }
        Ok(())
    }
}

impl fmt::Display for TruncateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {} truncated", self.table)
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table:       {}", self.table_name)?;
        writeln!(f, "Dialect:     {}", self.dialect)?;
        writeln!(f, "Total docs:  {}", self.total_docs)?;
        write!(f, "Terms:       {}", self.term_count)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LiteArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => {
            output_human(message, result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &LiteArgs) {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    println!("{result}");
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LiteArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_human() {
        let results = SearchResults {
            query: "(name/sofia AND name/amsterdam)".to_string(),
            hits: vec![Hit { doc_id: 3, score: 1.5 }],
            total_hits: 1,
            duration_ms: 0,
        };
        let text = results.to_string();
        assert!(text.starts_with("Query: (name/sofia AND name/amsterdam)"));
        assert!(text.contains("Found 1 matching documents"));
        assert!(text.contains("doc 3"));
        assert!(text.contains("1.5000"));
    }

    #[test]
    fn test_indexing_result_hides_zero_skips() {
        let result = IndexingResult {
            documents_indexed: 4,
            batches: 1,
            terms_written: 6,
            ..Default::default()
        };
        assert!(!result.to_string().contains("Skipped"));
    }

    #[test]
    fn test_json_shape() {
        let terms = TermsResult {
            field: "name".to_string(),
            terms: vec![TermEntry { term: "name/london".to_string(), postings: 997 }],
        };
        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["terms"][0]["postings"], 997);
    }
}
