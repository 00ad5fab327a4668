//! Benchmarks for the analysis pipeline.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sentiscope::config::AnalyzerConfig;
use sentiscope::engine::Analyzer;

const REVIEW: &str = "The hotel room was clean and spacious; however, the breakfast was cold \
    and the staff seemed unfriendly. The location is excellent and the view from the balcony \
    was absolutely stunning. I was a bit disappointed with the noisy air conditioning.";

fn bench_sentiment(c: &mut Criterion) {
    let analyzer = Analyzer::new(&AnalyzerConfig::default()).unwrap();
    c.bench_function("sentiment_review", |bench| {
        bench.iter(|| black_box(analyzer.analyze_sentiment(black_box(REVIEW))))
    });
}

fn bench_emotions(c: &mut Criterion) {
    let analyzer = Analyzer::new(&AnalyzerConfig::default()).unwrap();
    c.bench_function("emotions_review", |bench| {
        bench.iter(|| black_box(analyzer.analyze_emotions(black_box(REVIEW))))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let analyzer = Analyzer::new(&AnalyzerConfig::default()).unwrap();
    c.bench_function("analyze_review", |bench| {
        bench.iter(|| black_box(analyzer.analyze(black_box(REVIEW))))
    });
}

fn bench_batch(c: &mut Criterion) {
    let analyzer = Analyzer::new(&AnalyzerConfig::default()).unwrap();
    let texts: Vec<String> = (0..64).map(|i| format!("Review {i}: {REVIEW}")).collect();
    c.bench_function("analyze_batch_64", |bench| {
        bench.iter(|| black_box(analyzer.analyze_batch(&texts)))
    });
}

criterion_group!(
    benches,
    bench_sentiment,
    bench_emotions,
    bench_full_analysis,
    bench_batch
);
criterion_main!(benches);
