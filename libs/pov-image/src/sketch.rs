//! Writes an assembled program as a sketch directory.
//!
//! A sketch named `heart` becomes `heart/heart.ino`. The directory must not
//! exist yet; an existing one is reported and left untouched.

use crate::encoder::{assemble_program, serialize_volume};
use crate::error::{PovError, PovResult};
use crate::grid::VoxelGrid;
use config::constants::SKETCH_EXTENSION;
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory and file name for a sketch called `name`.
///
/// # Examples
/// ```
/// use pov_image::sketch::sketch_paths;
///
/// assert_eq!(sketch_paths("heart"), ("heart".to_string(), "heart.ino".to_string()));
/// assert_eq!(sketch_paths("heart.ino"), ("heart".to_string(), "heart.ino".to_string()));
/// ```
pub fn sketch_paths(name: &str) -> (String, String) {
    let dirname = name.replace(SKETCH_EXTENSION, "");
    let filename = if name.ends_with(SKETCH_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{SKETCH_EXTENSION}")
    };
    (dirname, filename)
}

/// Renders `grid` with `template` and writes it to `parent/<name>/<name>.ino`.
///
/// Returns the path of the written file.
pub fn write_sketch(
    grid: &VoxelGrid,
    template: &str,
    parent: &Path,
    name: &str,
) -> PovResult<PathBuf> {
    let program = assemble_program(&serialize_volume(grid)?, template);
    write_program(&program, parent, name)
}

/// Writes already assembled program text to `parent/<name>/<name>.ino`.
pub fn write_program(program: &str, parent: &Path, name: &str) -> PovResult<PathBuf> {
    let (dirname, filename) = sketch_paths(name);
    let dir = parent.join(dirname);

    fs::create_dir(&dir).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => PovError::DestinationExists(dir.clone()),
        _ => PovError::Io(err),
    })?;

    let path = dir.join(filename);
    let mut out = BufWriter::new(File::create(&path)?);
    out.write_all(program.as_bytes())?;
    out.flush()?;

    info!("Wrote sketch to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Colour, PolarCoordinate};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "pov-image-{tag}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_sketch_paths_append_extension_once() {
        assert_eq!(sketch_paths("cube").1, "cube.ino");
        assert_eq!(sketch_paths("cube.ino").1, "cube.ino");
        assert_eq!(sketch_paths("cube.ino").0, "cube");
    }

    #[test]
    fn test_write_sketch_creates_directory_and_file() {
        let parent = scratch_dir("write");
        let mut grid = VoxelGrid::new();
        grid.or_at(PolarCoordinate::new(0, 0, 0).unwrap(), Colour::WHITE);

        let path = write_sketch(&grid, "// template\n", &parent, "demo").unwrap();
        assert_eq!(path, parent.join("demo").join("demo.ino"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#include <SPI.h>\n\nconst byte image[100][10][16] = {\n"));
        assert!(written.contains("\t\t{0b11100000,"));
        assert!(written.ends_with("};\n\n// template\n"));

        fs::remove_dir_all(&parent).unwrap();
    }

    #[test]
    fn test_existing_directory_is_not_overwritten() {
        let parent = scratch_dir("exists");
        let existing = parent.join("demo");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("demo.ino"), "keep me").unwrap();

        let err = write_program("new program", &parent, "demo.ino").unwrap_err();
        assert!(matches!(err, PovError::DestinationExists(ref dir) if *dir == existing));
        assert_eq!(
            fs::read_to_string(existing.join("demo.ino")).unwrap(),
            "keep me"
        );

        fs::remove_dir_all(&parent).unwrap();
    }
}
