//! Session configuration: the mandatory header-statement fields, the
//! chunk-rotation threshold, and the directory-creation mode.
//!
//! Mirrors the teacher's `Prefs` (`io/prefs.rs`) — a plain value type
//! instead of a heap-allocated opaque struct, construction-time defaults
//! instead of a setter-returns-new-value C API. No environment variables
//! are consulted anywhere (spec.md §6, binding).

/// Fixed HIF format version this crate writes and accepts. Spec.md §4.3:
/// "The version string is a single well-known constant (`0.0.1` in the
/// current revision)."
pub const HIF_VERSION: &str = "0.0.1";

/// Default chunk-rotation threshold: spec.md §4.4's "estimated number of
/// distinct identifiers plus two per tuple entry would exceed `2^20`".
pub const DEFAULT_ROTATION_THRESHOLD: usize = 1 << 20;

/// Default directory-creation permission mode (spec.md §4.4: "permissive
/// directory permissions (mode 0755 semantics)").
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Per-session configuration for a [`crate::session::Writer`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// `tool` attribute of the mandatory header statement.
    pub tool: String,
    /// `version` attribute of the mandatory header statement.
    pub tool_version: String,
    /// Number of distinct identifiers (plus two per tuple entry, per
    /// spec.md §4.4) tolerated before a chunk rotation is required.
    /// Overridable so tests can exercise the rotation/limit boundary at
    /// small scale without interning a million identifiers.
    pub rotation_threshold: usize,
    /// Directory-creation mode, used only when the session directory does
    /// not already exist.
    pub dir_mode: u32,
}

impl SessionConfig {
    pub fn new(tool: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            tool_version: tool_version.into(),
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }

    pub fn with_rotation_threshold(mut self, threshold: usize) -> Self {
        self.rotation_threshold = threshold;
        self
    }

    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }
}
