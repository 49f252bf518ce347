use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct Verbosity {
    pub json: bool,
    pub verbose: bool,
}

/// Renders `path` relative to `base` when it lives underneath it.
pub fn display_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_prefers_relative_form() {
        let base = Path::new("/work/project");
        assert_eq!(
            display_path(base, Path::new("/work/project/src/Button.tsx")),
            "src/Button.tsx"
        );
        assert_eq!(display_path(base, Path::new("/elsewhere/file")), "/elsewhere/file");
        assert_eq!(display_path(base, base), "/work/project");
    }
}
