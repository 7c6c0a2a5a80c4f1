use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::dataset::{Dataset, Reference};
use crate::error::Result;

pub const DEFAULT_DATA_DIR: &str = "data/";
const EXTENSION: &str = ".data";

/// `{path}/{name}.data`; a name that already carries the suffix is kept.
pub fn dataset_path(name: &str, path: &Path) -> PathBuf {
    if name.ends_with(EXTENSION) {
        path.join(name)
    } else {
        path.join(format!("{}{}", name, EXTENSION))
    }
}

/// Save a dataset to disk as one bincode blob, overwriting any existing file.
///
/// The blob is written next to the destination first and renamed into place,
/// so an interrupted save never leaves a truncated dataset behind.
pub fn save(dataset: &Dataset, name: &str, path: &Path) -> Result<PathBuf> {
    let filename = dataset_path(name, path);

    // dropped (and removed) on any error before persist
    let mut tmp = NamedTempFile::new_in(path)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        bincode::serialize_into(&mut writer, dataset)?;
        writer.flush()?;
    }
    tmp.persist(&filename).map_err(|e| e.error)?;

    info!("Saved to {}", filename.display());
    Ok(filename)
}

pub fn load_dataset(name: &str, path: &Path) -> Result<Dataset> {
    let reader = BufReader::new(File::open(dataset_path(name, path))?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Load a dataset as (inputs, outputs, reference): couplings, densities in
/// the same order, and the shared grid.
pub fn load(name: &str, path: &Path) -> Result<(Vec<f64>, Vec<Vec<f64>>, Reference)> {
    Ok(load_dataset(name, path)?.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BecError;
    use std::fs;
    use tempfile::tempdir;

    fn example() -> Dataset {
        Dataset::new(
            Reference { x: vec![0.0, 1.0, 2.0] },
            vec![(1.5, vec![0.1, 0.9, 0.1]), (2.5, vec![0.2, 1.0, 0.3])],
        )
    }

    #[test]
    fn test_dataset_path() {
        let dir = Path::new("data");
        assert_eq!(dataset_path("t1", dir), PathBuf::from("data/t1.data"));
        assert_eq!(dataset_path("t1.data", dir), PathBuf::from("data/t1.data"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let written = save(&example(), "example", dir).unwrap();
        assert_eq!(written, dir.join("example.data"));
        assert!(written.exists());

        let (inputs, outputs, reference) = load("example", dir).unwrap();
        assert_eq!(inputs, vec![1.5, 2.5]);
        assert_eq!(outputs, vec![vec![0.1, 0.9, 0.1], vec![0.2, 1.0, 0.3]]);
        assert_eq!(reference, Reference { x: vec![0.0, 1.0, 2.0] });

        assert_eq!(load_dataset("example.data", dir).unwrap(), example());
    }

    #[test]
    fn test_save_overwrites_and_cleans_up() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        save(&example(), "ds", dir).unwrap();

        let smaller = Dataset::new(Reference { x: vec![5.0] }, vec![(9.0, vec![1.0])]);
        save(&smaller, "ds.data", dir).unwrap();

        assert_eq!(load_dataset("ds", dir).unwrap(), smaller);
        // no temp blobs left next to the dataset
        let names: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names, vec![std::ffi::OsString::from("ds.data")]);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        assert!(matches!(load("nothing-here", dir), Err(BecError::Io(_))));
    }

    #[test]
    fn test_load_corrupt_blob() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        // length prefix far larger than the payload
        fs::write(dir.join("broken.data"), [0xffu8; 12]).unwrap();
        assert!(matches!(load("broken", dir), Err(BecError::Serialization(_))));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("does").join("not").join("exist");
        assert!(matches!(save(&example(), "x", &dir), Err(BecError::Io(_))));
        assert!(!tmp.path().join("does").exists());
    }
}
