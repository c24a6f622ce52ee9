use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the dedicated configuration file.
pub const CONFIG_FILENAME: &str = ".pystyle.toml";

/// Name of the Python project file that may carry a `[tool.pystyle]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// File extensions styled when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py", "mys"];

/// Set of folders to exclude by default.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("__pycache__");
        s.insert(".git");
        s.insert(".pytest_cache");
        s.insert(".mypy_cache");
        s.insert(".tox");
        s.insert("build");
        s.insert("dist");
        s.insert("*.egg-info");
        s.insert("venv");
        s.insert(".venv");
        s.insert("node_modules");
        s.insert("target");
        s
    })
}

pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
