use std::path::Path;

/// True if the path itself or any of its ancestors is a symlink. The static
/// file handler refuses such paths so a link inside `public/` can never point
/// requests out of the served tree.
pub trait HasAnySymlinks {
    fn has_any_symlinks(&self) -> bool;
}

impl<P: AsRef<Path>> HasAnySymlinks for P {
    fn has_any_symlinks(&self) -> bool {
        self.as_ref().ancestors().any(Path::is_symlink)
    }
}

#[cfg(test)]
mod test {
    use super::HasAnySymlinks;
    use std::{env, fs, path::PathBuf};

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("mdblog-symlinks-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("creating scratch dir");
        dir
    }

    #[test]
    fn plain_paths_have_no_symlinks() {
        let dir = scratch("plain");
        let file = dir.join("inner").join("styles.css");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "body {}").unwrap();

        assert!(!file.has_any_symlinks());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn nonexistent_paths_have_no_symlinks() {
        assert!(!PathBuf::from("/no/such/path/anywhere").has_any_symlinks());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_ancestor_is_detected() {
        let dir = scratch("linked");
        let target = dir.join("target");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("styles.css"), "body {}").unwrap();

        let link = dir.join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        // the file itself is real, but it is reached through a symlink
        assert!(link.join("styles.css").has_any_symlinks());
        assert!(!target.join("styles.css").has_any_symlinks());

        fs::remove_dir_all(&dir).unwrap();
    }
}
