//! Scenarios exercising the SQL table directly: schema reuse, rollback and
//! concurrent writers.

use std::sync::Arc;
use std::thread;

use rusqlite::Connection;
use tempfile::TempDir;

use sarissa_lite::codec::decode_postings;
use sarissa_lite::document::SimpleDocument;
use sarissa_lite::error::{LiteIndexError, Result};
use sarissa_lite::index::{IndexConfig, LiteIndex};
use sarissa_lite::storage::MergeDialect;
use sarissa_lite::DocId;

#[test]
fn test_reopen_keeps_existing_rows() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("index.sqlite");

    let index = LiteIndex::open(&path, IndexConfig::default(), None)?;
    index.index(vec![SimpleDocument::new(1).add_field("name", "london")])?;
    index.close()?;

    // creating the index again against the existing table is a no-op
    let index = LiteIndex::open(&path, IndexConfig::default(), None)?;
    assert_eq!(index.term_query("name", "london").postings(), &[1]);
    index.index(vec![SimpleDocument::new(2).add_field("name", "london")])?;
    assert_eq!(index.term_query("name", "london").postings(), &[1, 2]);
    index.close()
}

#[test]
fn test_stored_blob_keeps_append_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("index.sqlite");

    let index = LiteIndex::open(&path, IndexConfig::default(), None)?;
    index.index(vec![SimpleDocument::new(9).add_field("name", "york")])?;
    index.index(vec![
        SimpleDocument::new(4).add_field("name", "york"),
        SimpleDocument::new(1).add_field("name", "new york"),
    ])?;
    index.close()?;

    let conn = Connection::open(&path)?;
    let blob: Vec<u8> = conn.query_row(
        "SELECT list FROM postings WHERE id = ?",
        ["name/york"],
        |row| row.get(0),
    )?;
    assert_eq!(decode_postings(&blob), vec![9, 4, 1]);
    Ok(())
}

#[test]
fn test_tables_are_independent() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("index.sqlite");

    let cities = LiteIndex::open(&path, IndexConfig::default().with_table_name("cities"), None)?;
    let people = LiteIndex::open(&path, IndexConfig::default().with_table_name("people"), None)?;
    cities.index(vec![SimpleDocument::new(1).add_field("name", "paris")])?;
    people.index(vec![SimpleDocument::new(5).add_field("name", "paris")])?;

    assert_eq!(cities.term_query("name", "paris").postings(), &[1]);
    assert_eq!(people.term_query("name", "paris").postings(), &[5]);

    people.truncate()?;
    assert_eq!(cities.term_query("name", "paris").postings(), &[1]);
    assert!(people.term_query("name", "paris").is_empty());
    Ok(())
}

#[test]
fn test_failed_batch_rolls_back_every_term() -> Result<()> {
    let conn = Connection::open_in_memory()?;
    conn.execute(&MergeDialect::Sqlite.create_table_statement("postings"), [])?;
    conn.execute_batch(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON postings
         WHEN NEW.id = 'name/poison'
         BEGIN SELECT RAISE(ABORT, 'poisoned term'); END;",
    )?;

    let index = LiteIndex::new(conn, IndexConfig::default(), None)?;
    index.index(vec![SimpleDocument::new(1).add_field("name", "alpha")])?;
    let total_docs = index.total_docs();

    // keys are written in order: alpha is appended to, then poison aborts
    let err = index
        .index(vec![SimpleDocument::new(2).add_field("name", "alpha poison zulu")])
        .unwrap_err();
    assert!(matches!(err, LiteIndexError::Sql(_)), "{err}");

    assert_eq!(index.term_query("name", "alpha").postings(), &[1]);
    assert!(index.term_query("name", "zulu").is_empty());
    assert_eq!(index.stats()?.term_count, 1);
    assert_eq!(index.total_docs(), total_docs);

    // the index stays usable after a failed batch
    index.index(vec![SimpleDocument::new(3).add_field("name", "alpha zulu")])?;
    assert_eq!(index.term_query("name", "alpha").postings(), &[1, 3]);
    assert_eq!(index.term_query("name", "zulu").postings(), &[3]);
    Ok(())
}

#[test]
fn test_concurrent_batches_on_one_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("index.sqlite");
    LiteIndex::open(&path, IndexConfig::default(), None)?.close()?;

    let writers: Vec<_> = (0..4u32)
        .map(|writer| {
            let path = path.clone();
            thread::spawn(move || -> Result<()> {
                let index = LiteIndex::open(&path, IndexConfig::default(), None)?;
                for batch in 0..10u32 {
                    let docs: Vec<SimpleDocument> = (0..5u32)
                        .map(|i| {
                            let id = writer * 1000 + batch * 10 + i;
                            SimpleDocument::new(id).add_field("body", format!("shared w{writer}"))
                        })
                        .collect();
                    index.index(docs)?;
                }
                index.close()
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer thread panicked")?;
    }

    let index = LiteIndex::open(&path, IndexConfig::default(), None)?;
    let shared = index.term_query("body", "shared");
    assert_eq!(shared.postings().len(), 4 * 10 * 5);
    for writer in 0..4u32 {
        let own = index.term_query("body", &format!("w{writer}"));
        assert_eq!(own.postings().len(), 50);
        assert!(own.postings().iter().all(|id| id / 1000 == writer));
    }
    index.close()
}

#[test]
fn test_shared_index_between_threads() -> Result<()> {
    let index = Arc::new(LiteIndex::open_in_memory(IndexConfig::default(), None)?);

    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let docs: Vec<SimpleDocument> = (0..25u32)
                    .map(|i| SimpleDocument::new(t * 100 + i).add_field("name", "common"))
                    .collect();
                index.index(docs).map(|_| ())
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("indexing thread panicked")?;
    }

    let postings: Vec<DocId> = index.term_query("name", "common").postings().to_vec();
    assert_eq!(postings.len(), 100);
    assert_eq!(index.total_docs(), 100);
    Ok(())
}
