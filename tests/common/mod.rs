/// Common test utilities for local-compose integration tests
use local_compose::{ComposeBinary, LocalDockerCompose};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Shell script standing in for docker-compose. It echoes its arguments and
/// the variables the tests care about, and fails when FAKE_COMPOSE_FAIL is set.
const FAKE_COMPOSE: &str = r#"echo "args: $*"
echo "bar=${bar-<unset>}"
echo "foo=${foo-<unset>}"
echo "inherited=${LC_TEST_INHERITED-<unset>}"
if [ -n "$FAKE_COMPOSE_FAIL" ]; then
    echo "failing on purpose" >&2
    exit 2
fi
"#;

/// A temporary working directory with a fake compose binary in it
#[allow(dead_code)]
pub struct TestProject {
    pub temp_dir: TempDir,
    pub script: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let script = temp_dir.path().join("fake-compose.sh");
        std::fs::write(&script, FAKE_COMPOSE).expect("Failed to write fake compose script");

        TestProject { temp_dir, script }
    }

    /// Get the working directory path
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Binary that runs the fake compose script through sh
    pub fn binary(&self) -> ComposeBinary {
        ComposeBinary::Custom {
            program: "sh".to_string(),
            args: vec![self.script.to_string_lossy().to_string()],
        }
    }

    /// Value for --executable / LOCAL_COMPOSE_EXECUTABLE
    #[allow(dead_code)]
    pub fn executable(&self) -> String {
        format!("sh {}", self.script.display())
    }

    /// Compose project wired to the fake binary
    #[allow(dead_code)]
    pub fn compose(&self, files: &[&str], identifier: &str) -> LocalDockerCompose {
        LocalDockerCompose::new(files.iter().copied(), identifier)
            .expect("Failed to build compose project")
            .with_binary(self.binary())
    }

    /// Create a file in the working directory
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        std::fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
    }

    /// Run lc in this project's directory
    #[allow(dead_code)]
    pub fn lc(&self, args: &[&str]) -> CommandResult {
        let output = Command::new(env!("CARGO_BIN_EXE_lc"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("LOCAL_COMPOSE_EXECUTABLE")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute lc command");

        CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            exit_code: output.status.code(),
        }
    }
}

/// Result of running a command
#[allow(dead_code)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

#[allow(dead_code)]
impl CommandResult {
    /// Assert the command succeeded
    pub fn assert_success(&self) {
        if !self.success {
            panic!(
                "Command failed:\nstdout: {}\nstderr: {}\nexit code: {:?}",
                self.stdout, self.stderr, self.exit_code
            );
        }
    }

    /// Assert the command failed
    pub fn assert_failure(&self) {
        if self.success {
            panic!(
                "Command succeeded when it should have failed:\nstdout: {}\nstderr: {}",
                self.stdout, self.stderr
            );
        }
    }

    /// Assert stdout contains text
    pub fn assert_stdout_contains(&self, text: &str) {
        assert!(
            self.stdout.contains(text),
            "stdout does not contain '{}'\nstdout: {}",
            text,
            self.stdout
        );
    }

    /// Assert stderr contains text
    pub fn assert_stderr_contains(&self, text: &str) {
        assert!(
            self.stderr.contains(text),
            "stderr does not contain '{}'\nstderr: {}",
            text,
            self.stderr
        );
    }
}
