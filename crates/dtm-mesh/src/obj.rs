//! ASCII OBJ output.

use crate::Mesh;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `mesh` as an ASCII OBJ.
///
/// Each entry of `comments` becomes a `#` line in the header. Vertex and face
/// counts are recorded before their sections.
pub fn write_obj<W: Write>(mut out: W, mesh: &Mesh, comments: &[String]) -> io::Result<()> {
    for comment in comments {
        writeln!(out, "# {}", comment)?;
    }
    writeln!(out, "#")?;

    writeln!(out, "# Vertices")?;
    writeln!(out, "# No. Vertices: {}", mesh.vertices().len())?;
    for [x, y, z] in mesh.vertices() {
        writeln!(out, "v {} {} {}", x, y, z)?;
    }

    writeln!(out, "#")?;
    writeln!(out, "# Faces")?;
    writeln!(out, "# No. Faces: {}", mesh.faces().len())?;
    writeln!(out, "#")?;
    for face in mesh.faces() {
        out.write_all(b"f")?;
        for index in face {
            write!(out, " {}", index)?;
        }
        out.write_all(b"\n")?;
    }

    out.flush()
}

/// Write `mesh` to a file at `path`, replacing any existing file.
pub fn save_obj<P: AsRef<Path>>(path: P, mesh: &Mesh, comments: &[String]) -> io::Result<()> {
    let file = File::create(path)?;
    write_obj(BufWriter::new(file), mesh, comments)
}
