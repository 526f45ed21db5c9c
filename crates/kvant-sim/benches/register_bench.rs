//! Benchmarks for statevector operations
//!
//! Run with: cargo bench -p kvant-sim

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvant_ir::{Circuit, QubitId, StandardGate};
use kvant_sim::{Register, Simulator};

/// Benchmark single-qubit kernels at increasing register widths
fn bench_gate_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_kernels");

    for num_qubits in &[8u32, 12, 16, 20] {
        group.bench_with_input(
            BenchmarkId::new("hadamard", num_qubits),
            num_qubits,
            |b, &n| {
                let mut reg = Register::new(n).unwrap();
                b.iter(|| reg.apply(black_box(StandardGate::H), black_box(&[0])).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cx", num_qubits),
            num_qubits,
            |b, &n| {
                let mut reg = Register::new(n).unwrap();
                b.iter(|| {
                    reg.apply(black_box(StandardGate::CX), black_box(&[0, 1]))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark GHZ preparation plus sampling end to end
fn bench_ghz_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_sampling");

    for num_qubits in &[8u32, 12, 16] {
        let mut circuit = Circuit::with_size("ghz", *num_qubits, 0);
        circuit.h(QubitId(0)).unwrap();
        for i in 0..*num_qubits - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::new("sample_1024", num_qubits),
            &circuit,
            |b, circuit| {
                let simulator = Simulator::default();
                b.iter(|| black_box(simulator.sample(circuit, 1024).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark the Grover diffusion primitive
fn bench_invert_about_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert_about_mean");

    for num_qubits in &[8u32, 12, 16, 20] {
        group.bench_with_input(
            BenchmarkId::new("diffusion", num_qubits),
            num_qubits,
            |b, &n| {
                let mut reg = Register::new(n).unwrap();
                for q in 0..n {
                    reg.apply(StandardGate::H, &[q]).unwrap();
                }
                b.iter(|| reg.invert_about_mean());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gate_kernels,
    bench_ghz_sampling,
    bench_invert_about_mean,
);

criterion_main!(benches);
