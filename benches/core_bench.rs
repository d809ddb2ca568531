use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cityplan_editor::{
    CityMap, HitTestRegistry, Road, RoadClass, SnapGeometry, SnapIndex, Station, StationKind,
};
use glam::Vec2;

fn build_synthetic_snap_index(segment_count: usize) -> SnapIndex {
    let mut index = SnapIndex::empty();
    for i in 0..segment_count {
        let row = (i / 100) as f32;
        let column = (i % 100) as f32;
        let start = Vec2::new(column * 50.0, row * 50.0);
        index.insert_polyline(
            i as u64,
            SnapGeometry::Road,
            &[start, start + Vec2::new(45.0, 0.0)],
            false,
        );
    }
    index
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 5000) as f32 + 0.37;
            let y = ((i * 73) % 5000) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_snap_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_queries");

    for &segment_count in &[1_000usize, 10_000usize] {
        let index = build_synthetic_snap_index(segment_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("find_snap_point_batch", segment_count),
            &index,
            |b, index| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if index.find_snap_point(black_box(*point), 20.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn build_synthetic_city_map(station_count: usize) -> CityMap {
    let mut map = CityMap::new();
    // Direkt einfügen und Indizes einmalig aufbauen (statt pro Insert)
    for i in 0..station_count {
        let id = (i as u64) + 1;
        let row = (i / 100) as f32;
        let column = (i % 100) as f32;
        let kind = if i % 2 == 0 {
            StationKind::Rail
        } else {
            StationKind::Subway
        };
        map.stations
            .insert(id, Station::new(id, kind, Vec2::new(column * 40.0, row * 40.0)));
    }
    for i in 0..(station_count / 10).max(1) {
        let id = 1_000_000 + i as u64;
        let y = (i as f32) * 80.0;
        map.roads.insert(
            id,
            Road::new(
                id,
                RoadClass::Street,
                vec![Vec2::new(0.0, y), Vec2::new(4000.0, y)],
            ),
        );
    }
    map.rebuild_indices();
    map
}

fn bench_hit_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_tests");

    for &station_count in &[1_000usize, 10_000usize] {
        let map = build_synthetic_city_map(station_count);
        let registry = HitTestRegistry::new(15.0);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("layered_hit_test_batch", station_count),
            &map,
            |b, map| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if registry.hit_test(map, black_box(*point)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_station_batch", station_count),
            &map,
            |b, map| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if map.nearest_station(black_box(*point)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_snap_queries, bench_hit_tests);
criterion_main!(benches);
