use std::error::Error;

use matcher::{Document, MatchConfig, MatchResult, MatchStrategy, Matcher};
use tracing_subscriber::EnvFilter;

fn print_hits(label: &str, hits: &[MatchResult]) {
    println!("{label}: {} match(es)", hits.len());
    for hit in hits {
        match hit.distance {
            Some(distance) => println!(
                "  {:<12} similarity={:.3} distance={}",
                hit.doc_id, hit.similarity, distance
            ),
            None => println!("  {:<12} similarity={:.3}", hit.doc_id, hit.similarity),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=matcher=debug shows the per-query span and IDF stats.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let corpus = vec![
        Document::new(
            "invoice-01",
            "Invoice for consulting services rendered in March",
        ),
        Document::new(
            "invoice-02",
            "Invoice for consulting services rendered in April",
        ),
        Document::new(
            "memo-07",
            "Memo: the office will be closed for the holidays",
        ),
        Document::new(
            "report-q1",
            "Quarterly report on consulting revenue and services",
        ),
    ];
    let candidate = Document::new(
        "upload-99",
        "Invoice for consulting services rendered in May",
    );

    let lexical = Matcher::new(MatchConfig::new(MatchStrategy::Lexical, 0.5))?;
    print_hits("lexical", &lexical.find_matches(&candidate, &corpus));

    let semantic = Matcher::new(
        MatchConfig::new("Advanced Scan".parse()?, 0.2)
            .with_max_results(2)
            .with_parallel(true),
    )?;
    print_hits("semantic", &semantic.find_matches(&candidate, &corpus));

    Ok(())
}
