use std::path::{Component, Path, PathBuf};

/// Maps a request path onto a file inside the static root. `/` and
/// directory paths resolve to `index.html`, paths with an extension are
/// served verbatim, and extension-less paths fall back to the same-named
/// `.html` page (so `/team` serves `team-details`-style pages saved as
/// `team.html`). Paths that try to climb out of the root resolve to `None`.
pub fn resolve_page(root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = Path::new(trimmed);

    if relative
        .components()
        .any(|part| !matches!(part, Component::Normal(_)))
    {
        return None;
    }

    if trimmed.is_empty() || request_path.ends_with('/') {
        return Some(root.join(trimmed).join("index.html"));
    }

    if relative.extension().is_some() {
        Some(root.join(relative))
    } else {
        Some(root.join(relative).with_extension("html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Option<PathBuf> {
        resolve_page(Path::new("./public"), path)
    }

    #[test]
    fn root_serves_the_index_page() {
        assert_eq!(resolve("/"), Some(PathBuf::from("./public/index.html")));
    }

    #[test]
    fn asset_paths_are_served_verbatim() {
        assert_eq!(
            resolve("/js/main.js"),
            Some(PathBuf::from("./public/js/main.js"))
        );
    }

    #[test]
    fn extensionless_paths_fall_back_to_html_pages() {
        assert_eq!(resolve("/team"), Some(PathBuf::from("./public/team.html")));
        assert_eq!(
            resolve("/add-match"),
            Some(PathBuf::from("./public/add-match.html"))
        );
    }

    #[test]
    fn traversal_attempts_are_refused() {
        assert_eq!(resolve("/../etc/passwd"), None);
        assert_eq!(resolve("/js/../../secret"), None);
    }
}
