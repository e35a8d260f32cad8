//! Command implementations for the sarissa-lite CLI.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::SimpleDocument;
use crate::error::{LiteIndexError, Result};
use crate::index::LiteIndex;
use crate::query::{Query, QueryExpr};
use crate::term_key::TermKey;

/// Execute a CLI command.
pub fn execute_command(args: LiteArgs) -> Result<()> {
    match &args.command {
        Command::Init(init_args) => init_index(init_args, &args),
        Command::Index(index_args) => index_documents(index_args, &args),
        Command::Search(search_args) => search_index(search_args, &args),
        Command::Query(query_args) => run_query(query_args, &args),
        Command::Terms(terms_args) => show_terms(terms_args, &args),
        Command::Truncate(truncate_args) => truncate_index(truncate_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

fn open_index(options: &IndexOptions) -> Result<LiteIndex> {
    let config = options.index_config()?;
    info!("opening {}", options.database.display());
    LiteIndex::open(&options.database, config, None)
}

/// Create the posting table.
fn init_index(args: &InitArgs, cli_args: &LiteArgs) -> Result<()> {
    let index = open_index(&args.index)?;
    let result = InitResult {
        database: args.index.database.to_string_lossy().to_string(),
        table: index.config().table_name.clone(),
        dialect: index.config().dialect.to_string(),
    };
    index.close()?;

    output_result("Index ready", &result, cli_args)
}

/// Index a JSON Lines document file, one transaction per batch.
fn index_documents(args: &IndexArgs, cli_args: &LiteArgs) -> Result<()> {
    if args.batch_size == 0 {
        return Err(LiteIndexError::invalid_argument("batch size must be at least 1"));
    }

    let index = open_index(&args.index)?;
    let start_time = Instant::now();
    let mut result = IndexingResult::default();
    let mut batch = Vec::with_capacity(args.batch_size);

    let reader = BufReader::new(File::open(&args.document_file)?);
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SimpleDocument>(&line) {
            Ok(doc) => batch.push(doc),
            Err(e) => {
                warn!("skipping line {}: {e}", line_num + 1);
                result.skipped_lines += 1;
                continue;
            }
        }

        if batch.len() == args.batch_size {
            flush_batch(&index, &mut batch, &mut result, cli_args)?;
        }
    }
    if !batch.is_empty() {
        flush_batch(&index, &mut batch, &mut result, cli_args)?;
    }

    result.duration_ms = start_time.elapsed().as_millis() as u64;
    index.close()?;

    output_result("Documents indexed", &result, cli_args)
}

fn flush_batch(
    index: &LiteIndex,
    batch: &mut Vec<SimpleDocument>,
    result: &mut IndexingResult,
    cli_args: &LiteArgs,
) -> Result<()> {
    let summary = index.index(batch.iter())?;
    batch.clear();

    result.batches += 1;
    result.documents_indexed += summary.documents;
    result.terms_written += summary.terms;
    if cli_args.verbosity() > 1 {
        eprintln!("Indexed {} documents...", result.documents_indexed);
    }
    Ok(())
}

fn run_and_collect(index: &LiteIndex, mut query: Box<dyn Query>, limit: usize) -> SearchResults {
    let start_time = Instant::now();
    let description = query.describe();
    let top = index.search(query.as_mut(), limit);

    SearchResults {
        query: description,
        hits: top.hits,
        total_hits: top.total_hits,
        duration_ms: start_time.elapsed().as_millis() as u64,
    }
}

/// Search one field for analyzed text.
fn search_index(args: &SearchArgs, cli_args: &LiteArgs) -> Result<()> {
    let index = open_index(&args.index)?;
    let query = index.text_query(&args.field, &args.text, args.mode);
    let results = run_and_collect(&index, query, args.limit);
    index.close()?;

    output_result("Search results", &results, cli_args)
}

/// Run a query expression read from a JSON file.
fn run_query(args: &QueryArgs, cli_args: &LiteArgs) -> Result<()> {
    let expr = QueryExpr::from_json(&fs::read_to_string(&args.query_file)?)?;
    let index = open_index(&args.index)?;
    let query = index.parse(&expr)?;
    let results = run_and_collect(&index, query, args.limit);
    index.close()?;

    output_result("Query results", &results, cli_args)
}

/// List stored terms of a field, or the terms some text resolves to.
fn show_terms(args: &TermsArgs, cli_args: &LiteArgs) -> Result<()> {
    let index = open_index(&args.index)?;
    let terms = term_entries(&index, &args.field, args.text.as_deref())?;
    index.close()?;

    let result = TermsResult {
        field: args.field.clone(),
        terms,
    };
    output_result("Terms", &result, cli_args)
}

/// Looked-up terms are named by key or miss tag; stored terms by their token.
fn term_entries(index: &LiteIndex, field: &str, text: Option<&str>) -> Result<Vec<TermEntry>> {
    let entries = match text {
        Some(text) => index
            .terms(field, text)
            .into_iter()
            .map(|term| TermEntry {
                term: term.name().to_string(),
                postings: term.postings().len(),
            })
            .collect(),
        None => index
            .field_terms(field)?
            .into_iter()
            .map(|row| TermEntry {
                term: TermKey::parse(&row.key).map_or(row.key, |(_, token)| token),
                postings: row.postings,
            })
            .collect(),
    };
    Ok(entries)
}

/// Drop every posting.
fn truncate_index(args: &TruncateArgs, cli_args: &LiteArgs) -> Result<()> {
    let index = open_index(&args.index)?;
    index.truncate()?;
    let result = TruncateResult {
        table: index.config().table_name.clone(),
    };
    index.close()?;

    output_result("Index truncated", &result, cli_args)
}

/// Show index statistics.
fn show_stats(args: &StatsArgs, cli_args: &LiteArgs) -> Result<()> {
    let index = open_index(&args.index)?;
    let stats = index.stats()?;
    index.close()?;

    output_result("Index statistics", &stats, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::index::IndexConfig;

    fn parse(args: &[&str]) -> LiteArgs {
        LiteArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_index_then_search() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("cities.sqlite");
        let docs = dir.path().join("cities.jsonl");
        let mut file = File::create(&docs).unwrap();
        writeln!(file, r#"{{"id": 0, "fields": {{"name": ["Amsterdam"]}}}}"#).unwrap();
        writeln!(file, r#"{{"id": 3, "fields": {{"name": ["Sofia Amsterdam"]}}}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "not json").unwrap();
        drop(file);

        let db_arg = db.to_str().unwrap();
        let docs_arg = docs.to_str().unwrap();
        execute_command(parse(&["sarissa-lite", "-q", "init", db_arg])).unwrap();
        execute_command(parse(&[
            "sarissa-lite", "-q", "index", db_arg, docs_arg, "--batch-size", "1",
        ]))
        .unwrap();
        execute_command(parse(&[
            "sarissa-lite", "-q", "-f", "json", "search", db_arg, "name", "sofia",
        ]))
        .unwrap();

        let index = LiteIndex::open(&db, IndexConfig::default(), None).unwrap();
        assert_eq!(index.terms("name", "amsterdam")[0].postings(), &[0, 3]);
        assert_eq!(index.terms("name", "sofia")[0].postings(), &[3]);
    }

    #[test]
    fn test_stored_terms_are_listed_by_token() {
        let index = LiteIndex::open_in_memory(IndexConfig::default(), None).unwrap();
        index
            .index(vec![SimpleDocument::new(1).add_field("a/b", "new york york")])
            .unwrap();

        let listed = term_entries(&index, "a/b", None).unwrap();
        let listed: Vec<(&str, usize)> =
            listed.iter().map(|e| (e.term.as_str(), e.postings)).collect();
        assert_eq!(listed, vec![("new", 1), ("york", 2)]);

        let looked_up = term_entries(&index, "a/b", Some("york paris")).unwrap();
        assert_eq!(looked_up[0].term, "a\\/b/york");
        assert_eq!(looked_up[1].term, "missing(a/b:paris)");
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.sqlite");
        let result = execute_command(parse(&[
            "sarissa-lite",
            "-q",
            "index",
            db.to_str().unwrap(),
            "missing.jsonl",
            "--batch-size",
            "0",
        ]));
        assert!(matches!(result, Err(LiteIndexError::InvalidArgument(_))));
    }

    #[test]
    fn test_truncate_and_stats() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("db.sqlite");
        {
            let index = LiteIndex::open(&db, IndexConfig::default(), None).unwrap();
            index
                .index(vec![SimpleDocument::new(1).add_field("name", "london")])
                .unwrap();
            index.close().unwrap();
        }

        let db_arg = db.to_str().unwrap();
        execute_command(parse(&["sarissa-lite", "-q", "stats", db_arg])).unwrap();
        execute_command(parse(&["sarissa-lite", "-q", "truncate", db_arg])).unwrap();

        let index = LiteIndex::open(&db, IndexConfig::default(), None).unwrap();
        assert_eq!(index.stats().unwrap().term_count, 0);
    }
}
