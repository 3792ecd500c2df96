//! Settings for Dart model generation.

use std::path::PathBuf;

/// Settings that control where output goes and what gets reported.
///
/// None of these change the generated Dart text.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    /// Directory the `<name>_model.dart` file is written to.
    ///
    /// **Default: empty**, which resolves relative to the current working
    /// directory and keeps the returned path a bare file name.
    pub output_dir: PathBuf,

    /// When true, do not log a warning for class names generated more than
    /// once. Colliding classes are emitted either way.
    ///
    /// **Default: false (warnings on).**
    pub suppress_collision_warnings: bool,
}
