//! In-place source formatting
//!
//! Walks the project tree, collects every directory that directly contains
//! at least one source file, and runs the auto-formatter once per directory
//! over that directory's source files. Rewrites files on disk; there is no
//! dry-run mode.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ProjectConfig;
use crate::exec::{CommandLine, CommandRunner};
use crate::types::ChoreResult;

const DEFAULT_EXCLUDE_GLOBS: &[&str] = &["**/.git/**", "**/.tox/**", "**/.venv/**"];

/// Format every source directory under the project root. Returns the
/// directories that were formatted, in the order they were processed.
pub fn run(
    root: &Path,
    config: &ProjectConfig,
    runner: &dyn CommandRunner,
) -> ChoreResult<Vec<PathBuf>> {
    let targets = collect_source_dirs(root, &config.format_extensions(), &config.format_excludes())?;

    for (_, files) in &targets {
        let mut args = vec!["-i".to_string()];
        args.extend(files.iter().map(|f| f.display().to_string()));
        runner.run(&CommandLine::new("autopep8", args).in_dir(root))?;
    }

    Ok(targets.into_iter().map(|(dir, _)| dir).collect())
}

/// Collect every directory under `root` that directly contains at least one
/// file with a matching extension, paired with those files. Directories and
/// files are returned sorted for deterministic formatter invocations.
pub fn collect_source_dirs(
    root: &Path,
    extensions: &[String],
    exclude_globs: &[String],
) -> ChoreResult<Vec<(PathBuf, Vec<PathBuf>)>> {
    let exclude_set = build_exclude_set(exclude_globs);

    let mut targets = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(current_dir) = queue.pop_front() {
        let mut source_files = Vec::new();

        for entry in std::fs::read_dir(&current_dir)? {
            let path = entry?.path();
            let relative_path = path.strip_prefix(root).unwrap_or(&path);

            if exclude_set.is_match(relative_path) {
                continue;
            }

            if path.is_dir() {
                queue.push_back(path);
            } else if has_matching_extension(&path, extensions) {
                source_files.push(path);
            }
        }

        if !source_files.is_empty() {
            source_files.sort();
            targets.push((current_dir, source_files));
        }
    }

    targets.sort();
    Ok(targets)
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

fn build_exclude_set(exclude_globs: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_EXCLUDE_GLOBS {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    for pattern in exclude_globs {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::exec::testing::RecordingRunner;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/utils")).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join("setup.py"), "").unwrap();
        fs::write(root.join("pkg/__init__.py"), "").unwrap();
        fs::write(root.join("pkg/models.py"), "").unwrap();
        fs::write(root.join("pkg/utils/helpers.py"), "").unwrap();
        fs::write(root.join("docs/index.rst"), "").unwrap();
        fs::write(root.join(".git/objects/stray.py"), "").unwrap();
        dir
    }

    #[test]
    fn test_selects_exactly_dirs_with_source_files() {
        let dir = fixture();
        let root = dir.path();

        let extensions = vec!["py".to_string()];
        let targets = collect_source_dirs(root, &extensions, &[]).unwrap();
        let dirs: Vec<_> = targets.iter().map(|(d, _)| d.clone()).collect();

        assert_eq!(
            dirs,
            vec![
                root.to_path_buf(),
                root.join("pkg"),
                root.join("pkg/utils"),
            ]
        );
    }

    #[test]
    fn test_dirs_without_source_files_never_targeted() {
        let dir = fixture();
        let extensions = vec!["py".to_string()];
        let targets = collect_source_dirs(dir.path(), &extensions, &[]).unwrap();

        assert!(targets.iter().all(|(d, _)| d != &dir.path().join("docs")));
        assert!(targets
            .iter()
            .all(|(d, _)| !d.starts_with(dir.path().join(".git"))));
    }

    #[test]
    fn test_one_formatter_invocation_per_directory() {
        let dir = fixture();
        let config = ProjectConfig::default();
        let runner = RecordingRunner::default();

        let formatted = run(dir.path(), &config, &runner).unwrap();

        assert_eq!(formatted.len(), 3);
        assert_eq!(runner.recorded().len(), 3);
        for command in runner.recorded() {
            assert_eq!(command.program, "autopep8");
            assert_eq!(command.args.first().map(String::as_str), Some("-i"));
            assert!(command.args.len() >= 2);
        }
    }

    #[test]
    fn test_formatter_receives_only_matching_files() {
        let dir = fixture();
        let config = ProjectConfig::default();
        let runner = RecordingRunner::default();

        run(dir.path(), &config, &runner).unwrap();

        for command in runner.recorded() {
            for file in &command.args[1..] {
                assert!(file.ends_with(".py"), "unexpected formatter target {file}");
            }
        }
    }

    #[test]
    fn test_configured_excludes_respected() {
        let dir = fixture();
        let extensions = vec!["py".to_string()];
        let excludes = vec!["**/pkg/**".to_string(), "**/pkg".to_string()];

        let targets = collect_source_dirs(dir.path(), &extensions, &excludes).unwrap();
        let dirs: Vec<_> = targets.iter().map(|(d, _)| d.clone()).collect();

        assert_eq!(dirs, vec![dir.path().to_path_buf()]);
    }
}
