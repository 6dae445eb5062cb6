//! Indexed triangle meshes, loaded from Wavefront OBJ files.
//!
//! A mesh is a second source of triangles next to [`build_triangles`]:
//! its faces can be handed straight to the batch rasterizer.
//!
//! [`build_triangles`]: crate::strip::build_triangles

use std::path::Path;

use log::debug;

use crate::error::RasterError;
use crate::math::Vec3;
use crate::triangle::Triangle;

// A triangle given as three 0-based indices into the mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const CUBE_FACES: [Face; 12] = [
    // Front
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // Right
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // Back
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // Left
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // Top
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // Bottom
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, checking that every face index is in range.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Result<Self, RasterError> {
        let vertex_count = vertices.len();
        if let Some(face) = faces
            .iter()
            .find(|f| f.indices().iter().any(|&i| i as usize >= vertex_count))
        {
            return Err(RasterError::InvalidFace {
                face: face.indices(),
                vertex_count,
            });
        }
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
        })
    }

    /// Axis-aligned cube centered on the origin with the given half extent.
    pub fn cube(half_extent: f64) -> Self {
        Self {
            name: "cube".to_string(),
            vertices: CUBE_VERTICES.iter().map(|&v| v * half_extent).collect(),
            faces: CUBE_FACES.to_vec(),
        }
    }

    /// Load every object of an OBJ file as a separate mesh.
    ///
    /// Polygons are triangulated on load.
    pub fn load_all_from_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, RasterError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)?;
        debug!("Loaded {} objects from {}", models.len(), path.display());

        models
            .into_iter()
            .map(|model| {
                let vertices = model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
                    .collect();
                let faces = model
                    .mesh
                    .indices
                    .chunks_exact(3)
                    .map(|f| Face::new(f[0], f[1], f[2]))
                    .collect();
                Self::new(model.name, vertices, faces)
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Uniformly scale every vertex about the origin, e.g. to map model units
    /// onto the voxel lattice.
    pub fn scaled(mut self, factor: f64) -> Self {
        for v in &mut self.vertices {
            *v = *v * factor;
        }
        self
    }

    /// The faces as triangles, in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(move |f| {
            Triangle::new(
                self.vertices[f.a as usize],
                self.vertices[f.b as usize],
                self.vertices[f.c as usize],
            )
        })
    }
}
