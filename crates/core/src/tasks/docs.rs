//! Documentation build

use std::path::Path;

use crate::config::ProjectConfig;
use crate::exec::{CommandLine, CommandRunner};
use crate::types::ChoreResult;

/// Build the documentation site from the configured source directory into
/// the configured output directory. `-W` turns every build warning into a
/// failure. The README conversion step only runs when `docs.convertReadme`
/// is set.
pub fn run(root: &Path, config: &ProjectConfig, runner: &dyn CommandRunner) -> ChoreResult<()> {
    if config.convert_readme() {
        let convert = CommandLine::new(
            "pandoc",
            [
                "-s".to_string(),
                "-w".to_string(),
                "rst".to_string(),
                "README.md".to_string(),
                "-o".to_string(),
                "README.rest".to_string(),
            ],
        )
        .in_dir(root);
        runner.run(&convert)?;
    }

    let build = CommandLine::new(
        "sphinx-build",
        [
            "-E".to_string(),
            "-a".to_string(),
            "-W".to_string(),
            config.docs_source().to_string(),
            config.docs_output().to_string(),
        ],
    )
    .in_dir(root);
    runner.run(&build)
}
