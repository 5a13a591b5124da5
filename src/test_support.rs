use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static EXEC_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Hold while spawning anything from a test that does not own a [`FakeTarget`].
pub(crate) fn exec_guard() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|poison| poison.into_inner())
}

/// A fake target executable living in its own temp directory.
pub(crate) struct FakeTarget {
    pub(crate) dir: TempDir,
    pub(crate) path: PathBuf,
    // Writing a script while another test thread forks can leave the write fd
    // open in that child, and exec then fails with ETXTBSY. Serialize.
    _lock: MutexGuard<'static, ()>,
}

impl FakeTarget {
    /// File the script records its arguments into, one per line.
    pub(crate) fn args_file(&self) -> PathBuf {
        self.dir.path().join("args.txt")
    }

    /// Arguments recorded by the last run.
    pub(crate) fn recorded_args(&self) -> Vec<String> {
        let content = std::fs::read_to_string(self.args_file()).unwrap();
        content.lines().map(str::to_string).collect()
    }
}

/// Write an executable `/bin/sh` script named `name` with `body`.
///
/// The script sees `ARGS_FILE` as the path of [`FakeTarget::args_file`].
#[cfg(unix)]
pub(crate) fn fake_target(name: &str, body: &str) -> FakeTarget {
    use std::os::unix::fs::PermissionsExt;

    let lock = exec_guard();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    let args_file = dir.path().join("args.txt");
    let script = format!(
        "#!/bin/sh\nARGS_FILE='{}'\n{}\n",
        args_file.display(),
        body
    );
    write_file(&path, &script);

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();

    FakeTarget {
        dir,
        path,
        _lock: lock,
    }
}

/// Script body that records every argument and exits with `code`.
pub(crate) fn recording_body(code: i32) -> String {
    format!(
        ": > \"$ARGS_FILE\"\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> \"$ARGS_FILE\"; done\nexit {}",
        code
    )
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("failed to write '{}': {}", path.display(), e));
}
