use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxstrip::prelude::*;

fn small_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 3.0),
        Vec3::new(10.0, 20.0, 6.0),
    )
}

fn large_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(400.0, 50.0, 30.0),
        Vec3::new(100.0, 300.0, 80.0),
    )
}

// Thin in x: exercises the axis reordering.
fn steep_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 200.0, 10.0),
        Vec3::new(1.0, 30.0, 250.0),
    )
}

fn slices(count: usize) -> Vec<Vec<Vec3>> {
    (0..count)
        .map(|k| {
            let points = 60 + 8 * (k % 4);
            (0..points)
                .map(|i| {
                    let angle = i as f64 / points as f64 * std::f64::consts::TAU;
                    Vec3::new(80.0 * angle.cos(), 80.0 * angle.sin(), k as f64 * 3.0)
                })
                .collect()
        })
        .collect()
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let triangles = [
        ("small", small_triangle()),
        ("large", large_triangle()),
        ("steep", steep_triangle()),
    ];

    for width in [1.0, 3.0] {
        let rasterizer = SurfaceRasterizer::new(RasterConfig::new(width).unwrap());
        for (name, triangle) in &triangles {
            group.bench_with_input(
                BenchmarkId::new(format!("width_{width}"), name),
                triangle,
                |b, tri| b.iter(|| rasterizer.rasterize(black_box(tri)).unwrap()),
            );
        }
    }

    group.finish();
}

fn benchmark_slice_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_stack");
    let rasterizer = SurfaceRasterizer::default();
    let slices = slices(16);
    let triangles = build_triangles(&slices);

    group.bench_function("build_triangles_16_slices", |b| {
        b.iter(|| build_triangles(black_box(&slices)))
    });

    group.bench_function("rasterize_all_16_slices", |b| {
        b.iter(|| rasterize_all(&rasterizer, black_box(&triangles)).unwrap())
    });

    group.bench_function("rasterize_sequential_16_slices", |b| {
        b.iter(|| {
            let mut voxels = VoxelSet::new();
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut voxels).unwrap();
            }
            voxels
        })
    });

    group.finish();
}

fn benchmark_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh");
    let rasterizer = SurfaceRasterizer::default();

    for half_extent in [8.0, 32.0] {
        let triangles: Vec<Triangle> = Mesh::cube(half_extent).triangles().collect();
        group.bench_with_input(
            BenchmarkId::new("cube", half_extent),
            &triangles,
            |b, tris| b.iter(|| rasterize_all(&rasterizer, black_box(tris)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_slice_stack,
    benchmark_mesh
);
criterion_main!(benches);
