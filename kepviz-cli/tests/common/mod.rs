//! Common test utilities for CLI integration tests.
//!
//! The binary shells out to `g.region` and `v.out.ogr`, which only exist
//! inside a GRASS session. [`TestEnv`] stubs both with shell scripts on a
//! prepended `PATH` so the full pass can run in isolation.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stub `g.region -cg` output used by the default scripts.
pub const REGION_SCRIPT: &str = "#!/bin/sh
echo \"center_easting=-78.678457\"
echo \"center_northing=35.736201\"
";

/// Stub exporter: writes an empty feature collection to the `output=` path.
pub const EXPORTER_SCRIPT: &str = r#"#!/bin/sh
out=""
for arg in "$@"; do
  case "$arg" in
    output=*) out="${arg#output=}" ;;
  esac
done
printf '{"type": "FeatureCollection", "features": []}' > "$out"
"#;

/// Isolated test environment with stubbed GRASS tools.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates an environment with working `g.region` and `v.out.ogr`
    /// stubs.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let bin_dir = temp_path.join("grass-bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create stub bin dir");

        let env = Self {
            temp_dir,
            temp_path,
            bin_dir,
        };
        env.install_script("g.region", REGION_SCRIPT);
        env.install_script("v.out.ogr", EXPORTER_SCRIPT);
        env
    }

    /// Installs (or replaces) an executable stub script.
    pub fn install_script(&self, name: &str, contents: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, contents).expect("Failed to write stub script");
        let mut perms = fs::metadata(&path)
            .expect("Failed to stat stub script")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to mark stub script executable");
    }

    /// Command builder with the stub tools on `PATH`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("kepviz").expect("Failed to find kepviz binary");
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{path}", self.bin_dir.display()));
        cmd
    }

    /// Path under the temporary directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Writes a file under the temporary directory and returns its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
