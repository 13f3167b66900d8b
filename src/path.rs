use std::path::{Component, Path, PathBuf};

/// Resolves `p` against `base` and normalizes the result lexically.
///
/// Absolute paths ignore `base`. Nothing touches the filesystem, so symlinks
/// are kept as they are and missing paths resolve just fine. An empty result
/// becomes `.`.
pub fn canonicalize(base: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        normalize(p)
    } else {
        normalize(&base.join(p))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut rooted = false;
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                rooted = true;
                parts.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ if rooted => {}
                _ => parts.push(component),
            },
            Component::Normal(_) => parts.push(component),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
