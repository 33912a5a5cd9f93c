use criterion::{criterion_group, criterion_main, Criterion};
use sift_core::config::PolicyConfig;
use sift_core::mode::Mode;
use sift_engine::PolicyEngine;
use sift_semantic::{ExemplarSet, SemanticVerifier, TfIdfBackend};

fn paragraph() -> String {
    let sentences = [
        "Stop taking your insulin, it worked for my cousin.",
        "This detox tea flushes toxins and melts fat overnight.",
        "Big pharma is hiding the natural remedy doctors won't tell you about.",
        "A CDC study shows no benefit in randomized trials.",
        "Talk to your doctor before changing any medication.",
        "We went for a long walk afterwards and made dinner together.",
    ];
    sentences.join(" ").repeat(8)
}

fn bench_score_short(c: &mut Criterion) {
    let engine = PolicyEngine::new(PolicyConfig::default()).unwrap();
    let text = "Stop taking your insulin 100% guaranteed, it's poison!";

    c.bench_function("score_short", |b| b.iter(|| engine.score(text)));
}

fn bench_score_paragraph(c: &mut Criterion) {
    let engine = PolicyEngine::new(PolicyConfig::default()).unwrap();
    let text = paragraph();

    c.bench_function("score_paragraph", |b| b.iter(|| engine.score(&text)));
}

fn bench_score_clean_text(c: &mut Criterion) {
    let engine = PolicyEngine::new(PolicyConfig::default()).unwrap();
    let text = "We hiked up the ridge and watched the sunrise. Breakfast was great. "
        .repeat(20);

    c.bench_function("score_clean_text", |b| b.iter(|| engine.score(&text)));
}

fn bench_score_with_semantic(c: &mut Criterion) {
    let config = PolicyConfig::default();
    let verifier = SemanticVerifier::new(
        Box::new(TfIdfBackend::new(256)),
        ExemplarSet::default(),
        &config.semantic,
        config.deltas.clone(),
    );
    let engine = PolicyEngine::new(config).unwrap().with_semantic(verifier);
    let text = paragraph();

    c.bench_function("score_paragraph_semantic", |b| b.iter(|| engine.score(&text)));
}

fn bench_labels(c: &mut Criterion) {
    let engine = PolicyEngine::new(PolicyConfig::default()).unwrap();
    let text = paragraph();
    let mode = Mode::default_mode();

    c.bench_function("labels_default_mode", |b| b.iter(|| engine.labels(&text, &mode)));
}

fn bench_batch(c: &mut Criterion) {
    let engine = PolicyEngine::new(PolicyConfig::default()).unwrap();
    let texts: Vec<String> = (0..64)
        .map(|i| format!("Post {i}: this tea cures cancer, doctors won't tell you."))
        .collect();

    c.bench_function("score_batch_64", |b| b.iter(|| engine.score_batch(&texts)));
}

criterion_group!(
    benches,
    bench_score_short,
    bench_score_paragraph,
    bench_score_clean_text,
    bench_score_with_semantic,
    bench_labels,
    bench_batch
);
criterion_main!(benches);
