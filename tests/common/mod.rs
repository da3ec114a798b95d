//! Common test utilities for grammargen integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use grammargen::test_utils::LayoutFixture;
use std::path::Path;

/// Grammar versions shipped in `tests/fixtures/grammars`, in processing order.
pub const GRAMMARS: &[(&str, &str)] = &[
    ("grammar24", include_str!("../fixtures/grammars/grammar24.jjt_template")),
    ("grammar25", include_str!("../fixtures/grammars/grammar25.jjt_template")),
    ("grammar26", include_str!("../fixtures/grammars/grammar26.jjt_template")),
    ("grammar30", include_str!("../fixtures/grammars/grammar30.jjt_template")),
];

/// A repository with all four PyDev grammar templates.
pub fn pydev_fixture() -> LayoutFixture {
    grammargen::test_utils::init_test_logging(None);
    GRAMMARS
        .iter()
        .fold(LayoutFixture::new(), |fixture, (grammar, text)| fixture.with_template(grammar, text))
}

/// The grammargen binary, run from `root` with colors off.
pub fn grammargen_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("grammargen").expect("grammargen binary is built");
    cmd.arg("--root")
        .arg(root)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GRAMMARGEN_ROOT");
    cmd
}

/// Python interpreter available on this machine, if any.
pub fn python() -> Option<&'static str> {
    ["python3", "python"].into_iter().find(|p| which::which(p).is_ok())
}

/// A stand-in `cog` module that marks each file it is given.
pub const FAKE_COG: &str = "
def RunCogInFiles(files):
    for name in files:
        with open(name, 'a') as f:
            f.write('//[[[end]]] expanded\\n')
";
