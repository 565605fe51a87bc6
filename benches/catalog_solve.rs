// SPDX-License-Identifier: MPL-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use depsolve::{solve, BruteForceOracle, Catalog, RawPackage, Request, SolverConfig};

/// A linear chain `p0 -> p1 -> ... -> p(n-1)`, each depending on the next.
fn chain_catalog(n: usize) -> Catalog {
    let raw: Vec<RawPackage> = (0..n)
        .map(|i| RawPackage {
            name: format!("p{i}"),
            version: "1".to_string(),
            size: 1,
            depends: if i + 1 < n {
                vec![vec![format!("p{}", i + 1)]]
            } else {
                Vec::new()
            },
            conflicts: Vec::new(),
        })
        .collect();
    Catalog::build(raw).unwrap()
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_install");
    for n in [4usize, 8, 12] {
        let catalog = chain_catalog(n);
        let request = Request::from_raw(&catalog, &[], &["+p0".to_string()]).unwrap();
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let plan = solve(
                    black_box(&catalog),
                    black_box(&request),
                    &BruteForceOracle,
                    SolverConfig::default(),
                )
                .unwrap();
                black_box(plan.cost);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);
