use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use streetmatch::matching::StreetDescription;
use streetmatch::model::{StreetLink, StreetNetwork, StreetNode};
use streetmatch::routing::find_paths;

/// Square grid of two-way streets: horizontal "ROW r ST", vertical
/// "COL c ST", unit link distances
fn grid_network(size: i64) -> StreetNetwork {
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let node_id = |row: i64, col: i64| row * size + col + 1;
    for row in 0..size {
        for col in 0..size {
            nodes.push(StreetNode::new(node_id(row, col), col as f64, row as f64));
        }
    }
    let mut two_way = |a: i64, b: i64, name: String| {
        let link = StreetLink::new(Some(name), Some("ST".into()), 1.0);
        links.push((a, b, link.clone()));
        links.push((b, a, link));
    };
    for row in 0..size {
        for col in 0..size - 1 {
            two_way(
                node_id(row, col),
                node_id(row, col + 1),
                format!("ROW {row}"),
            );
        }
    }
    for col in 0..size {
        for row in 0..size - 1 {
            two_way(
                node_id(row, col),
                node_id(row + 1, col),
                format!("COL {col}"),
            );
        }
    }
    StreetNetwork::from_tables(nodes, links).expect("grid network is well formed")
}

fn bench_find_paths(c: &mut Criterion) {
    let network = grid_network(40);

    c.bench_function("find_paths direct match", |b| {
        let primary = StreetDescription::name_only("ROW 15");
        let cross1 = StreetDescription::name_only("COL 3");
        let cross2 = StreetDescription::name_only("COL 4");
        b.iter(|| find_paths(black_box(&network), &primary, &cross1, &cross2));
    });

    c.bench_function("find_paths shortest path fallback", |b| {
        // cross streets several blocks apart force the routing fallback
        let primary = StreetDescription::name_only("ROW 15");
        let cross1 = StreetDescription::name_only("COL 3");
        let cross2 = StreetDescription::name_only("COL 9");
        b.iter(|| find_paths(black_box(&network), &primary, &cross1, &cross2));
    });
}

criterion_group!(benches, bench_find_paths);
criterion_main!(benches);
