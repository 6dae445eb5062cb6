use std::collections::HashSet;

use approx::assert_relative_eq;
use voxstrip::bench::{AxisOrder, Boundary};
use voxstrip::prelude::*;

fn triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ),
        Triangle::new(
            Vec3::new(3.0, -2.0, 1.0),
            Vec3::new(12.0, 4.0, 5.0),
            Vec3::new(-1.0, 9.0, 3.0),
        ),
        Triangle::new(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 10.0, 2.0),
            Vec3::new(6.0, 3.0, 12.0),
        ),
        Triangle::new(
            Vec3::new(-4.0, -4.0, 7.0),
            Vec3::new(8.0, 1.0, 9.0),
            Vec3::new(0.0, 11.0, -3.0),
        ),
    ]
}

fn boundary_in_scan_frame(triangle: &Triangle) -> (AxisOrder, Boundary) {
    let order = AxisOrder::by_extent(triangle.extents());
    let local = order.apply_triangle(triangle);
    let [p0, p1, p2] = local.points;
    let boundary = Boundary::from_vertices([
        Vec2::new(p0.x, p0.y),
        Vec2::new(p1.x, p1.y),
        Vec2::new(p2.x, p2.y),
    ]);
    (order, boundary)
}

#[test]
fn plane_passes_through_vertices() {
    for t in triangles() {
        let plane = PlaneEquation::try_from_triangle(&t).unwrap();
        for p in &t.points {
            assert_relative_eq!(plane.evaluate(p), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn accepted_voxels_are_within_width_and_inside() {
    for width in [1.0, 2.0, 3.5] {
        let rasterizer = SurfaceRasterizer::new(RasterConfig::new(width).unwrap());
        for t in triangles() {
            let plane = PlaneEquation::from_triangle(&t);
            let (order, boundary) = boundary_in_scan_frame(&t);
            let voxels = rasterizer.rasterize(&t).unwrap();
            assert!(!voxels.is_empty());
            for v in &voxels {
                let p = Vec3::from_lattice(*v);
                assert!(plane.distance(&p) < width * 3f64.sqrt() / 2.0);
                let local = order.apply(p);
                assert!(boundary.contains(&Vec2::new(local.x, local.y)));
            }
        }
    }
}

#[test]
fn flat_triangle_coverage() {
    let voxels = SurfaceRasterizer::default()
        .rasterize(&triangles()[0])
        .unwrap();
    for v in [[0, 0, 0], [1, 0, 0], [0, 1, 0]] {
        assert!(voxels.contains(&v));
    }
    assert!(!voxels.contains(&[0, 0, 5]));
    assert!(voxels.iter().all(|v| v[2] == 0));
}

#[test]
fn strip_of_equal_slices() {
    let s1 = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
    let s2 = vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
    assert_eq!(build_triangles(&[s1, s2]).len(), 2);
}

#[test]
fn strip_of_single_point_slice_is_a_fan() {
    let s1 = vec![Vec3::new(0.0, 0.0, 0.0)];
    let s2 = vec![
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
    ];
    let triangles = build_triangles(&[s1.clone(), s2]);
    assert_eq!(triangles.len(), 2);
    assert!(triangles.iter().all(|t| t.points[0] == s1[0]));
}

#[test]
fn swapping_unequal_slices_keeps_vertex_sets() {
    let s1: Vec<Vec3> = (0..3).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect();
    let s2: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f64, 2.0, 1.0)).collect();

    let key = |t: &Triangle| {
        let mut k: Vec<[i64; 3]> = t
            .points
            .iter()
            .map(|p| [p.x as i64, p.y as i64, p.z as i64])
            .collect();
        k.sort_unstable();
        k
    };
    let forward: HashSet<_> = build_triangles(&[s1.clone(), s2.clone()]).iter().map(key).collect();
    let backward: HashSet<_> = build_triangles(&[s2, s1]).iter().map(key).collect();
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 6);
}

#[test]
fn batch_matches_per_triangle_concatenation() {
    let slices: Vec<Vec<Vec3>> = (0..4)
        .map(|k| {
            (0..(5 + k))
                .map(|i| Vec3::new(i as f64 * 3.0, k as f64 * 4.0, (i + k) as f64))
                .collect()
        })
        .collect();
    let rasterizer = SurfaceRasterizer::default();
    let triangles = build_triangles(&slices);

    let mut expected = VoxelSet::new();
    for t in &triangles {
        rasterizer.fill_triangle(t, &mut expected).unwrap();
    }
    let batch = rasterize_slices(&rasterizer, &slices).unwrap();
    assert_eq!(batch, expected);
}

#[test]
fn degenerate_triangles_in_batch() {
    let mut batch = triangles();
    batch.push(Triangle::new(Vec3::ZERO, Vec3::ONE, Vec3::ONE * 2.0));

    let strict = SurfaceRasterizer::default();
    assert!(matches!(
        rasterize_all(&strict, &batch),
        Err(RasterError::DegenerateTriangle { .. })
    ));

    let lenient = SurfaceRasterizer::new(
        RasterConfig::default().with_degenerate_policy(DegeneratePolicy::Skip),
    );
    let with_skip = rasterize_all(&lenient, &batch).unwrap();
    let without = rasterize_all(&lenient, &batch[..batch.len() - 1]).unwrap();
    assert_eq!(with_skip, without);
}

#[test]
fn load_obj_and_rasterize() {
    let path = std::env::temp_dir().join(format!("voxstrip-quad-{}.obj", std::process::id()));
    std::fs::write(
        &path,
        "o quad\nv 0 0 0\nv 8 0 0\nv 8 8 0\nv 0 8 0\nf 1 2 3 4\n",
    )
    .unwrap();
    let meshes = Mesh::load_all_from_obj(&path);
    std::fs::remove_file(&path).unwrap();

    let meshes = meshes.unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].name(), "quad");
    assert_eq!(meshes[0].faces().len(), 2);

    let triangles: Vec<Triangle> = meshes[0].triangles().collect();
    let mut voxels = rasterize_all(&SurfaceRasterizer::default(), &triangles).unwrap();
    voxels.dedup();
    assert_eq!(voxels.len(), 81);
    assert_eq!(voxels.bounds(), Some(([0, 0, 0], [8, 8, 0])));
}

#[test]
fn cube_mesh_surface_is_closed() {
    let cube = Mesh::cube(4.0);
    let triangles: Vec<Triangle> = cube.triangles().collect();
    assert_eq!(triangles.len(), 12);

    let mut voxels = rasterize_all(&SurfaceRasterizer::default(), &triangles).unwrap();
    voxels.dedup();
    // Every lattice point on the faces of [-4, 4]^3 and nothing inside.
    assert_eq!(voxels.len(), 9 * 9 * 9 - 7 * 7 * 7);
    assert_eq!(voxels.bounds(), Some(([-4, -4, -4], [4, 4, 4])));
    assert!(!voxels.contains(&[0, 0, 0]));
    assert!(voxels.iter().all(|v| v.iter().any(|c| c.abs() == 4)));
}

#[test]
fn load_missing_obj_fails() {
    assert!(matches!(
        Mesh::load_all_from_obj("/nonexistent/voxstrip.obj"),
        Err(RasterError::Load(_))
    ));
}
