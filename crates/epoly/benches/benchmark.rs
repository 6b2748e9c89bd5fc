use criterion::{black_box, criterion_group, criterion_main, Criterion};

use epoly::{contains_point, pos2, rebuild_mesh, vec2, Color32, Mesh, Polygon, Rect, Vec2};

fn regular_outline(n: usize) -> Polygon {
    let points = (0..n)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / n as f32;
            pos2(50.0 + 40.0 * angle.cos(), 50.0 + 40.0 * angle.sin())
        })
        .collect();
    Polygon::new(points)
}

fn tessellate_polygon(c: &mut Criterion) {
    let polygon = regular_outline(64);
    let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));

    c.bench_function("tessellate_polygon_64", move |b| {
        let mut mesh = Mesh::default();
        b.iter(|| {
            rebuild_mesh(&polygon, rect, Vec2::ZERO, None, Color32::WHITE, &mut mesh);
            black_box(&mesh);
        });
    });
}

fn hit_test_polygon(c: &mut Criterion) {
    let polygon = regular_outline(64);

    c.bench_function("hit_test_polygon_64", move |b| {
        b.iter(|| {
            let mut hits = 0;
            for x in 0..100 {
                for y in 0..100 {
                    if contains_point(polygon.points(), pos2(x as f32, y as f32)) {
                        hits += 1;
                    }
                }
            }
            black_box(hits);
        });
    });
}

criterion_group!(benches, tessellate_polygon, hit_test_polygon);
criterion_main!(benches);
