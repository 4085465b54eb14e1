//! Serializer benchmarks.
//!
//! Generates one graph up front and measures rendering it into memory in a
//! handful of representative formats.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use kauwhata_benches::{
    error::BenchSetupError,
    params::{GenerateBenchParams, seeded_rng},
};
use kauwhata_core::{Multiplicity, OutputFormat, generate};
use kauwhata_formats::{GraphHeader, write_graph};

const FORMATS: &[OutputFormat] = &[
    OutputFormat::Dimacs,
    OutputFormat::Csv,
    OutputFormat::Json,
    OutputFormat::Yaml,
    OutputFormat::Pickle,
    OutputFormat::Gexf,
];

const PARAMS: GenerateBenchParams = GenerateBenchParams {
    vertices: 5_000,
    min_edge: 1,
    max_edge: 8,
    multiplicity: Multiplicity::Simple,
};

fn serialize_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let config = PARAMS.config();
    let graph = generate(&config, &mut seeded_rng())?;
    let header = GraphHeader::new("bench", &config, &graph);

    let mut group = c.benchmark_group("serialize");
    group.sample_size(20);

    for &format in FORMATS {
        // Size the buffer once so growth is not measured.
        let mut probe = Vec::new();
        write_graph(format, &header, &graph, &mut probe)?;
        let capacity = probe.len();

        group.bench_with_input(BenchmarkId::from_parameter(format), &format, |b, &fmt| {
            b.iter(|| {
                let mut out = Vec::with_capacity(capacity);
                if let Err(err) = write_graph(fmt, &header, &graph, &mut out) {
                    panic!("write_graph failed during benchmark: {err}");
                }
                out
            });
        });
    }

    group.finish();
    Ok(())
}

fn serialize(c: &mut Criterion) {
    if let Err(err) = serialize_impl(c) {
        panic!("serialize benchmark setup failed: {err}");
    }
}

criterion_group!(benches, serialize);
criterion_main!(benches);
