// ===== lingo/crates/lingo-core/benches/detect_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use lingo_core::normalize::normalize;
use lingo_core::{DetectorOptions, LangProfile, ProfileRegistry};
use std::hint::black_box;

fn setup_registry() -> ProfileRegistry {
    let corpora = [
        ("en", "the quick brown fox jumps over the lazy dog "),
        ("fr", "portez ce vieux whisky au juge blond qui fume "),
        ("de", "zwoelf boxkaempfer jagen viktor quer ueber den sylter deich "),
    ];

    let profiles: Vec<LangProfile> = corpora
        .iter()
        .map(|(name, line)| {
            let mut profile = LangProfile::new(name);
            for _ in 0..50 {
                profile.update(line);
            }
            profile
        })
        .collect();

    ProfileRegistry::from_profiles(&profiles).expect("Failed to build registry")
}

fn seeded() -> DetectorOptions {
    DetectorOptions {
        seed: Some(42),
        ..Default::default()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let registry = setup_registry();
    let short = "the cat sat on the mat and looked out of the window";
    let long = "the quick brown fox jumps over the lazy dog ".repeat(220);

    c.bench_function("detect (50 chars)", |b| {
        b.iter(|| {
            let mut detector = registry.detector_with(seeded()).unwrap();
            detector.append(black_box(short));
            detector.probabilities().unwrap()
        })
    });

    c.bench_function("detect (10k chars)", |b| {
        b.iter(|| {
            let mut detector = registry.detector_with(seeded()).unwrap();
            detector.append(black_box(&long));
            detector.probabilities().unwrap()
        })
    });

    c.bench_function("normalize (mixed scripts)", |b| {
        let text = "Hello, 世界! こんにちは カタカナ 한국어 tiếng Việt فارسی".repeat(50);
        b.iter(|| {
            text.chars()
                .map(|ch| normalize(black_box(ch)))
                .filter(|&ch| ch != ' ')
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
