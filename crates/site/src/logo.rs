use crate::error::Result;
use crate::fs_utils;
use std::path::Path;
use tracing::debug;

/// Everything before the payload in the generated module
pub const MODULE_PREFIX: &str = "export const logoBase64 = \"data:image/jpeg;base64,";
/// Closing quote and statement terminator after the payload
pub const MODULE_SUFFIX: &str = "\";";

/// Render the ES module source for a raw base64 payload.
///
/// Leading and trailing whitespace is discarded so that editor-added
/// newlines around the payload never end up inside the data URI. The
/// payload itself is embedded as-is.
pub fn render_module(raw: &str) -> String {
    format!("{MODULE_PREFIX}{}{MODULE_SUFFIX}", raw.trim())
}

/// Read the payload from `input` and write the rendered module to `output`.
///
/// `output` is replaced wholesale on success; if reading `input` fails it
/// is never touched.
pub fn write_module(input: &Path, output: &Path) -> Result<()> {
    let raw = fs_utils::read_text(input)?;
    let module = render_module(&raw);
    debug!(input = ?input, output = ?output, bytes = module.len(), "rendering logo module");
    fs_utils::write_text(output, &module)
}
