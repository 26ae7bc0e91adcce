pub mod error;
pub mod fs_utils;
pub mod home_css;
pub mod logo;
pub mod paths;

pub use error::{Result, SiteError};
pub use home_css::{MarkerScan, PatchResult};
pub use paths::SitePaths;
