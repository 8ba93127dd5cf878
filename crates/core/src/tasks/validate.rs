//! Style and static-analysis checks

use std::path::Path;

use crate::config::ProjectConfig;
use crate::exec::{CommandLine, CommandRunner};
use crate::types::ChoreResult;

/// Run the style checker and the static analyzer over the package sources.
///
/// Every command is pinned to the project root via its working directory,
/// so the result does not depend on where the caller happens to be. The
/// optional test-suite step only runs when `analysis.runTests` is set.
pub fn run(root: &Path, config: &ProjectConfig, runner: &dyn CommandRunner) -> ChoreResult<()> {
    let package = config.package().to_string();

    let style = CommandLine::new(
        "pep8",
        [
            format!("--exclude={}", config.style_exclude().join(",")),
            format!("--ignore={}", config.style_ignore().join(",")),
            package.clone(),
        ],
    )
    .in_dir(root);
    runner.run(&style)?;

    let analysis = CommandLine::new(
        "pyflakes",
        ["-x".to_string(), config.analysis_suppress(), package.clone()],
    )
    .in_dir(root);
    runner.run(&analysis)?;

    if config.run_tests() {
        let tests = CommandLine::new(
            "python",
            [
                "-m".to_string(),
                "unittest".to_string(),
                format!("{}.tests", package),
            ],
        )
        .in_dir(root);
        runner.run(&tests)?;
    }

    Ok(())
}
