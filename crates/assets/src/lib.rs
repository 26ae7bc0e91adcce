//! Static assets for the satva-tools project
//!
//! This crate provides a centralized location for the CSS fragments the
//! site maintenance commands splice into stylesheets, to avoid duplicate
//! inclusion in the binary.

/// The canonical `.feature-desc-modern` section of Home.css, up to the
/// opening of the tablet media query
pub const FEATURE_DESC_SECTION: &str = include_str!("../css/feature_desc_modern.css");

/// Responsive image rules appended inside the 480px media query
pub const PROMO_IMG_480: &str = r"    .promo-banner-image-only img {
        max-height: 180px;
        object-fit: cover;
    }";

/// Responsive image rules appended inside the 768px media query
pub const PROMO_IMG_768: &str = r"    .promo-banner-image-only img {
        max-height: 220px;
        object-fit: cover;
    }";

/// Get the canonical feature-desc section
pub fn get_feature_desc_section() -> &'static str {
    FEATURE_DESC_SECTION
}

/// Get the 480px promo image rules
pub fn get_promo_img_480() -> &'static str {
    PROMO_IMG_480
}

/// Get the 768px promo image rules
pub fn get_promo_img_768() -> &'static str {
    PROMO_IMG_768
}
