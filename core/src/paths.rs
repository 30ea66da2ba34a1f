//! Input path selection and relative path rendering.

use std::path::{Component, Path, PathBuf};

/// Returns `true` if `path` ends in `.{ext}` for any of `extensions`,
/// ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use stylx_core::has_extension;
///
/// let exts = vec!["stylx".to_string()];
/// assert!(has_extension("Styles/Basic.STYLX", &exts));
/// assert!(!has_extension("notes.txt", &exts));
/// ```
pub fn has_extension(path: &str, extensions: &[String]) -> bool {
    let lower = path.to_ascii_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.');
        !ext.is_empty() && lower.ends_with(&format!(".{}", ext.to_ascii_lowercase()))
    })
}

/// Keeps the arguments that name style files, resolved against `cwd`.
///
/// Non-matching arguments are dropped without notice. Order is preserved.
pub fn select_inputs<I, S>(args: I, extensions: &[String], cwd: &Path) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter(|arg| has_extension(arg.as_ref(), extensions))
        .map(|arg| normalize(&cwd.join(arg.as_ref())))
        .collect()
}

/// Lexically normalizes a path, folding `.` and `..` without touching the
/// filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Renders `path` relative to `base`, emitting `..` segments when `path` lies
/// outside `base`. Both paths are normalized first.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use stylx_core::relative_to;
///
/// let base = Path::new("/work/project");
/// assert_eq!(relative_to(Path::new("/work/project/a/b.stylx"), base), Path::new("a/b.stylx"));
/// assert_eq!(relative_to(Path::new("/work/other/c.stylx"), base), Path::new("../other/c.stylx"));
/// ```
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &path_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}
