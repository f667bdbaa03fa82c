//! Puzzle inputs read from a local directory tree

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{root}/{year}/day_{DD}/{name}.txt`, where `name` is
/// `part_{N}_input` when a part has its own input and `input` otherwise.
/// Example mode reads `example_part_{N}_input` / `example_input` instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    root: PathBuf,
    example: bool,
}

impl InputStore {
    pub fn new(root: PathBuf, example: bool) -> Self {
        Self { root, example }
    }

    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("day_{day:02}"))
    }

    /// Paths tried for a part, most specific first
    pub fn candidates(&self, year: u16, day: u8, part: u8) -> [PathBuf; 2] {
        let prefix = if self.example { "example_" } else { "" };
        let dir = self.day_dir(year, day);
        [
            dir.join(format!("{prefix}part_{part}_input.txt")),
            dir.join(format!("{prefix}input.txt")),
        ]
    }

    /// First existing candidate for a part
    pub fn resolve(&self, year: u16, day: u8, part: u8) -> Option<PathBuf> {
        self.candidates(year, day, part)
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Input for a part, or the list of paths that were tried
    pub fn locate(&self, year: u16, day: u8, part: u8) -> Result<PathBuf, InputError> {
        self.resolve(year, day, part)
            .ok_or_else(|| InputError::Missing {
                year,
                day,
                part,
                tried: self.candidates(year, day, part).to_vec(),
            })
    }

    /// File contents with trailing whitespace stripped
    pub fn read(&self, path: PathBuf) -> Result<String, InputError> {
        match fs::read_to_string(&path) {
            Ok(mut content) => {
                content.truncate(content.trim_end().len());
                Ok(content)
            }
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &TempDir, relative: &str, content: &str) {
        let path = root.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_candidate_paths() {
        let store = InputStore::new(PathBuf::from("data"), false);
        let [part, shared] = store.candidates(2023, 5, 2);
        assert_eq!(part, PathBuf::from("data/2023/day_05/part_2_input.txt"));
        assert_eq!(shared, PathBuf::from("data/2023/day_05/input.txt"));

        let store = InputStore::new(PathBuf::from("data"), true);
        let [part, shared] = store.candidates(2023, 12, 1);
        assert_eq!(part, PathBuf::from("data/2023/day_12/example_part_1_input.txt"));
        assert_eq!(shared, PathBuf::from("data/2023/day_12/example_input.txt"));
    }

    #[test]
    fn test_part_specific_input_wins() {
        let temp = TempDir::new().unwrap();
        write(&temp, "2023/day_01/input.txt", "shared\n");
        write(&temp, "2023/day_01/part_2_input.txt", "second\n\n");
        let store = InputStore::new(temp.path().to_path_buf(), false);

        let first = store.locate(2023, 1, 1).unwrap();
        let second = store.locate(2023, 1, 2).unwrap();
        assert!(first.ends_with("input.txt") && !first.ends_with("part_2_input.txt"));
        assert!(second.ends_with("part_2_input.txt"));

        assert_eq!(store.read(first).unwrap(), "shared");
        assert_eq!(store.read(second).unwrap(), "second");
    }

    #[test]
    fn test_example_mode_ignores_real_inputs() {
        let temp = TempDir::new().unwrap();
        write(&temp, "2023/day_06/input.txt", "real");
        write(&temp, "2023/day_06/example_input.txt", "example  \n");

        let real = InputStore::new(temp.path().to_path_buf(), false);
        let example = InputStore::new(temp.path().to_path_buf(), true);
        assert_eq!(real.read(real.locate(2023, 6, 1).unwrap()).unwrap(), "real");
        assert_eq!(example.read(example.locate(2023, 6, 1).unwrap()).unwrap(), "example");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), false);

        assert!(store.resolve(2023, 3, 1).is_none());
        match store.locate(2023, 3, 1) {
            Err(InputError::Missing { tried, .. }) => assert_eq!(tried.len(), 2),
            other => panic!("expected Missing, got {other:?}"),
        }
        assert!(matches!(
            store.read(temp.path().join("nope.txt")),
            Err(InputError::Read { .. })
        ));
    }
}
