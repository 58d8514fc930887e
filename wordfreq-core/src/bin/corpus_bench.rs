//! Corpus Benchmarking Tool
//!
//! Measures the extraction stages on a large plain-text file, one diary
//! entry per line, to get throughput numbers for full-corpus runs.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: lowercasing plus every noise-phrase pass
//! 2. **Tokenize**: whitespace splitting of the normalized text
//! 3. **Pipeline**: normalize, tokenize, filter, count and select
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/entries.txt          # all stages
//! ./target/release/corpus_bench /path/to/entries.txt normalize
//! ./target/release/corpus_bench /path/to/entries.txt pipeline
//! ```
//!
//! Build with `--release`; debug numbers are meaningless.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use wordfreq_core::analyzer::{TextNormalizer, Tokenizer};
use wordfreq_core::{Corpus, RunStats, WordFrequencyPipeline};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [normalize|tokenize|pipeline|all]");
        return ExitCode::FAILURE;
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let input = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    let corpus = Corpus::from_bodies(input.lines());

    println!("File size: {}", fmt_bytes(corpus.byte_len() as u64));
    println!("Records:   {}\n", fmt_count(corpus.len() as u64));

    match mode {
        "normalize" => bench_normalize(&corpus),
        "tokenize" => bench_tokenize(&corpus),
        "pipeline" => bench_pipeline(&corpus),
        "all" => {
            bench_normalize(&corpus);
            bench_tokenize(&corpus);
            bench_pipeline(&corpus);
        }
        other => {
            eprintln!("unknown mode: {}", other);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn bench_normalize(corpus: &Corpus) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(corpus.byte_len());

    println!("=== Normalize ({} steps) ===", normalizer.steps().len());

    warmup(|| normalizer.normalize_into(corpus.text(), &mut out));
    let elapsed = measure(|| normalizer.normalize_into(corpus.text(), &mut out));

    print_perf("Normalize", corpus.byte_len(), elapsed, 0);
}

fn bench_tokenize(corpus: &Corpus) {
    let normalized = TextNormalizer::default().normalize(corpus.text());
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(tokenizer.iter(&normalized).count());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = tokenizer.iter(&normalized).count() as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens);
}

fn bench_pipeline(corpus: &Corpus) {
    let pipeline = WordFrequencyPipeline::default();

    println!("=== Pipeline ===");

    warmup(|| {
        std::hint::black_box(pipeline.run(corpus));
    });

    let mut stats = RunStats::default();
    let elapsed = measure(|| {
        stats = std::hint::black_box(pipeline.run(corpus)).stats;
    });

    print_perf("Pipeline", corpus.byte_len(), elapsed, stats.tokens);
    println!("Kept        : {}", fmt_count(stats.kept()));
    println!("Selected    : {}", fmt_count(stats.selected as u64));
    println!();
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
