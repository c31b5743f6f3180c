//! Concurrency and thread safety tests for docmatch

use std::sync::Arc;
use std::thread;

use docmatch::{Document, MatchConfig, MatchStrategy, Matcher, Stemmer, normalize};

fn shared_corpus() -> Arc<Vec<Document>> {
    Arc::new(
        (0..40)
            .map(|i| {
                Document::new(
                    format!("doc-{i}"),
                    format!("report number {i} covers topic{} in region{}", i % 4, i % 3),
                )
            })
            .collect(),
    )
}

#[test]
fn concurrent_normalize_same_text() {
    let text = "Concurrent normalization keeps producing identical tokens";
    let expected = normalize(text);

    let handles: Vec<_> = (0..10)
        .map(|_| thread::spawn(move || normalize(text)))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), expected, "thread {i} diverged");
    }
}

#[test]
fn shared_stemmer_across_threads() {
    let stemmer = Stemmer::english();
    let words = ["running", "connection", "documents", "happily"];
    let expected: Vec<String> = words.iter().map(|w| stemmer.stem(w)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                words
                    .iter()
                    .map(|w| Stemmer::english().stem(w))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn one_matcher_serves_many_threads() {
    let corpus = shared_corpus();
    let matcher = Arc::new(
        Matcher::new(MatchConfig::new(MatchStrategy::Semantic, 0.0)).expect("valid config"),
    );
    let candidate = Document::new("q", "topic2 region1 summary");
    let expected = matcher.find_matches(&candidate, corpus.as_slice());
    assert!(!expected.is_empty());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            let corpus = Arc::clone(&corpus);
            let candidate = candidate.clone();
            thread::spawn(move || matcher.find_matches(&candidate, corpus.as_slice()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn independent_queries_do_not_interfere() {
    let corpus = shared_corpus();

    let handles: Vec<_> = (0..4)
        .map(|topic| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                let matcher = Matcher::new(
                    MatchConfig::new(MatchStrategy::Lexical, 0.0).with_parallel(topic % 2 == 0),
                )
                .expect("valid config");
                let candidate = Document::new(format!("q-{topic}"), format!("topic{topic}"));
                (topic, matcher.find_matches(&candidate, corpus.as_slice()))
            })
        })
        .collect();

    for handle in handles {
        let (topic, hits) = handle.join().unwrap();
        assert_eq!(hits.len(), 10, "topic{topic}");
        let suffix = format!("topic{topic}");
        for hit in &hits {
            let doc = corpus
                .iter()
                .find(|d| d.id == hit.doc_id)
                .expect("hit refers to a corpus document");
            assert!(doc.text.contains(&suffix));
        }
    }
}
