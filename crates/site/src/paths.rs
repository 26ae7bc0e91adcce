use std::path::{Path, PathBuf};

/// Raw base64 payload captured from the designer's export
pub const LOGO_BASE64_TXT: &str = "src/utils/logo_base64.txt";
/// Generated ES module the frontend imports the logo from
pub const LOGO_JS: &str = "src/utils/logo.js";
/// Home page stylesheet patched in place by the css commands
pub const HOME_CSS: &str = "src/pages/Home/Home.css";

/// Well-known file locations inside a site checkout.
///
/// Every command resolves its inputs and outputs through here so the
/// layout is spelled out exactly once.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub logo_base64_txt: PathBuf,
    pub logo_js: PathBuf,
    pub home_css: PathBuf,
}

impl SitePaths {
    pub fn new(root: &Path) -> Self {
        Self {
            logo_base64_txt: root.join(LOGO_BASE64_TXT),
            logo_js: root.join(LOGO_JS),
            home_css: root.join(HOME_CSS),
        }
    }
}
