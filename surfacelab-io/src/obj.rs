//! OBJ format support

use crate::{IoError, MeshReader, MeshWriter, ProgressReader};
use obj::ObjData;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use surfacelab_core::{Point3f, Result, TriangleMesh};

pub struct ObjReader;
pub struct ObjWriter;

impl ObjReader {
    /// Read an OBJ file, reporting progress as a fraction of the file size
    pub fn read_mesh_with_progress<P: AsRef<Path>>(
        path: P,
        progress: &mut dyn FnMut(f32),
    ) -> Result<TriangleMesh> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let file = File::open(path)?;
        let total = file.metadata()?.len();
        let reader = ProgressReader::new(BufReader::new(file), total, progress);
        let mesh = Self::parse(reader)?;
        log::debug!(
            "read {} vertices, {} faces from {}",
            mesh.vertex_count(),
            mesh.face_count(),
            path.display()
        );
        Ok(mesh)
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<TriangleMesh> {
        let raw = ObjData::load_buf(reader).map_err(|e| IoError::ParseError {
            message: e.to_string(),
        })?;

        let vertices: Vec<Point3f> = raw
            .position
            .iter()
            .map(|&[x, y, z]| Point3f::new(x, y, z))
            .collect();

        let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, Vec::new());
        let polygons = raw
            .objects
            .iter()
            .flat_map(|object| object.groups.iter())
            .flat_map(|group| group.polys.iter());
        for polygon in polygons {
            let indices: Vec<usize> = polygon.0.iter().map(|tuple| tuple.0).collect();
            if let Some(&bad) = indices.iter().find(|&&i| i >= mesh.vertex_count()) {
                return Err(IoError::ParseError {
                    message: format!(
                        "face references vertex {} but only {} vertices exist",
                        bad + 1,
                        mesh.vertex_count()
                    ),
                }
                .into());
            }
            // Fan triangulation around the first corner
            for k in 1..indices.len().saturating_sub(1) {
                mesh.add_face([indices[0], indices[k], indices[k + 1]]);
            }
        }

        Ok(mesh)
    }
}

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
        Self::read_mesh_with_progress(path, &mut |_| {})
    }
}

impl MeshWriter for ObjWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "# {} vertices, {} faces", mesh.vertex_count(), mesh.face_count())?;
        for v in &mesh.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for f in mesh.valid_faces() {
            writeln!(out, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use surfacelab_core::Error;

    const QUAD: &str = "\
# unit quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = ObjReader::parse(QUAD.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert_relative_eq!(mesh.vertices[2].x, 1.0);
        assert_relative_eq!(mesh.vertices[2].y, 1.0);
    }

    #[test]
    fn test_textured_faces() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n";
        let mesh = ObjReader::parse(src.as_bytes()).unwrap();
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_faces_collected_across_objects_and_groups() {
        let src = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 2 3
g lid
f 1 2 4
o second
f 2 3 4
";
        let mesh = ObjReader::parse(src.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 3);
        assert!(mesh.faces.contains(&[0, 1, 2]));
        assert!(mesh.faces.contains(&[0, 1, 3]));
        assert!(mesh.faces.contains(&[1, 2, 3]));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let src = "v 0 0 0\nv 1 0 0\nf 1 2 3\n";
        assert!(matches!(
            ObjReader::parse(src.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_progress_reaches_completion() {
        let path = std::env::temp_dir().join("surfacelab_obj_progress.obj");
        std::fs::write(&path, QUAD).unwrap();

        let mut last = 0.0f32;
        let mut calls = 0;
        let mesh = ObjReader::read_mesh_with_progress(&path, &mut |f| {
            assert!(f >= last);
            last = f;
            calls += 1;
        })
        .unwrap();

        assert_eq!(mesh.face_count(), 2);
        assert!(calls > 0);
        assert_relative_eq!(last, 1.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_writer_skips_dangling_faces() {
        let path = std::env::temp_dir().join("surfacelab_obj_writer.obj");
        let mut mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        mesh.add_face([0, 1, 7]);

        ObjWriter::write_mesh(&mesh, &path).unwrap();
        let loaded = ObjReader::read_mesh(&path).unwrap();
        assert_eq!(loaded.faces, vec![[0, 1, 2]]);
        let _ = std::fs::remove_file(&path);
    }
}
