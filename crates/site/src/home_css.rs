use crate::error::Result;
use crate::fs_utils;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

// --- Mobile media-query patches ---

/// One media-query patch: match the last rule of the block together with
/// the closing brace, then re-close the block with extra rules inside.
struct StylePatch {
    /// Block label used in operator-facing messages
    name: &'static str,
    /// Captures the final rule of the block, then consumes the closing brace
    pattern: &'static str,
    /// Rules inserted between the final rule and the closing brace
    fragment: &'static str,
}

fn style_patches() -> [StylePatch; 2] {
    [
        StylePatch {
            name: "480px",
            pattern: r"(\.cat-nav-btn,\s*\.flash-nav-btn\s*\{\s*display:\s*none\s*!important;\s*\})\s*\}",
            fragment: assets::get_promo_img_480(),
        },
        StylePatch {
            name: "768px",
            pattern: r"(\.promo-visual\s*\{\s*display:\s*none;\s*\})\s*\}",
            fragment: assets::get_promo_img_768(),
        },
    ]
}

/// Outcome of a single [`StylePatch`] application.
#[derive(Debug, Clone, Copy)]
pub struct PatchResult {
    pub name: &'static str,
    pub applied: bool,
}

/// Append the responsive promo-image rules to each mobile media query.
///
/// Returns the rewritten stylesheet and one [`PatchResult`] per block, in
/// patch order. A block whose end pattern is missing is left untouched,
/// which also makes a second application a no-op: once the rules are in
/// place the closing brace no longer follows the matched rule directly.
pub fn apply_mobile_styles(css: &str) -> (String, Vec<PatchResult>) {
    let mut css = css.to_string();
    let patches = style_patches();
    let mut results = Vec::with_capacity(patches.len());
    for patch in &patches {
        let re = Regex::new(patch.pattern).expect("media-query end patterns are fixed and valid");
        let applied = re.is_match(&css);
        if applied {
            let replacement = format!("${{1}}\n\n{}\n}}", patch.fragment);
            css = re.replace(&css, replacement.as_str()).into_owned();
            debug!(block = patch.name, "appended promo image rules");
        } else {
            warn!(block = patch.name, "block end pattern not found");
        }
        results.push(PatchResult {
            name: patch.name,
            applied,
        });
    }
    (css, results)
}

/// Patch the stylesheet at `path` in place.
///
/// The file is rewritten even when no block matched, as a plain
/// read-modify-write cycle.
pub fn patch_mobile_styles(path: &Path) -> Result<Vec<PatchResult>> {
    let css = fs_utils::read_text(path)?;
    let (patched, results) = apply_mobile_styles(&css);
    fs_utils::write_text(path, &patched)?;
    Ok(results)
}

// --- Structure repair ---

/// Opening line of the section the repair rewrites
const FEATURE_DESC_START: &str = ".feature-desc-modern {";
/// First line expected after the rewritten section, indentation included
const HERO_SLIDER_LINE: &str = "    .hero-slider-section {";

/// Byte offsets of the two corruption markers, when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerScan {
    pub start: Option<usize>,
    pub next: Option<usize>,
}

impl MarkerScan {
    /// Both markers located, in order.
    pub fn found(&self) -> Option<(usize, usize)> {
        self.start.zip(self.next)
    }
}

/// Locate the corrupted feature-desc section.
///
/// The hero-slider marker is searched from the start marker onwards, so a
/// hero-slider rule earlier in the file can never produce a backwards
/// splice.
pub fn find_corruption(css: &str) -> MarkerScan {
    let start = css.find(FEATURE_DESC_START);
    let next = match start {
        Some(at) => css[at..].find(HERO_SLIDER_LINE).map(|rel| at + rel),
        None => css.find(HERO_SLIDER_LINE),
    };
    MarkerScan { start, next }
}

/// Replace everything from the feature-desc opening up to the hero-slider
/// rule with the canonical section.
///
/// Returns the marker scan and, when both markers were found, the repaired
/// stylesheet. Feeding the repaired output back in reproduces it exactly.
pub fn repair_structure(css: &str) -> (MarkerScan, Option<String>) {
    let scan = find_corruption(css);
    let repaired = scan.found().map(|(start, next)| {
        format!(
            "{}{}\n{}",
            &css[..start],
            assets::get_feature_desc_section(),
            &css[next..]
        )
    });
    (scan, repaired)
}

/// Repair the stylesheet at `path` in place.
///
/// The file is only rewritten when both markers are present.
pub fn fix_structure(path: &Path) -> Result<MarkerScan> {
    let css = fs_utils::read_text(path)?;
    let (scan, repaired) = repair_structure(&css);
    if let Some(repaired) = repaired {
        fs_utils::write_text(path, &repaired)?;
        debug!(path = ?path, "rewrote feature-desc section");
    }
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_css(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("satva_home_{}.css", uuid::Uuid::new_v4()));
        fs::write(&path, content).expect("seed stylesheet");
        path
    }

    const SAMPLE: &str = "\
.header {
    color: #333;
}

@media (max-width: 480px) {
    .cat-nav-btn,
    .flash-nav-btn {
        display: none !important;
    }
}

@media (min-width: 768px) {
    .promo-visual {
        display: none;
    }
}
";

    const PATCHED: &str = "\
.header {
    color: #333;
}

@media (max-width: 480px) {
    .cat-nav-btn,
    .flash-nav-btn {
        display: none !important;
    }

    .promo-banner-image-only img {
        max-height: 180px;
        object-fit: cover;
    }
}

@media (min-width: 768px) {
    .promo-visual {
        display: none;
    }

    .promo-banner-image-only img {
        max-height: 220px;
        object-fit: cover;
    }
}
";

    #[test]
    fn inserts_promo_rules_before_each_closing_brace() {
        let (patched, results) = apply_mobile_styles(SAMPLE);
        assert_eq!(patched, PATCHED);
        assert!(results.iter().all(|r| r.applied));
        assert_eq!(results[0].name, "480px");
        assert_eq!(results[1].name, "768px");
    }

    #[test]
    fn second_application_changes_nothing() {
        let (once, _) = apply_mobile_styles(SAMPLE);
        let (twice, results) = apply_mobile_styles(&once);
        assert_eq!(once, twice);
        assert!(results.iter().all(|r| !r.applied));
    }

    #[test]
    fn untouched_when_no_block_matches() {
        let css = ".header { color: #333; }\n";
        let (patched, results) = apply_mobile_styles(css);
        assert_eq!(patched, css);
        assert!(results.iter().all(|r| !r.applied));
    }

    #[test]
    fn one_block_can_apply_without_the_other() {
        let css = "\
@media (min-width: 768px) {
    .promo-visual {
        display: none;
    }
}
";
        let (patched, results) = apply_mobile_styles(css);
        assert!(!results[0].applied);
        assert!(results[1].applied);
        assert!(patched.contains("max-height: 220px;"));
        assert!(!patched.contains("max-height: 180px;"));
    }

    #[test]
    fn patches_the_stylesheet_file_in_place() {
        let path = scratch_css(SAMPLE);
        let results = patch_mobile_styles(&path).expect("patch succeeds");
        assert!(results.iter().all(|r| r.applied));
        assert_eq!(fs::read_to_string(&path).expect("read back"), PATCHED);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_stylesheet_is_a_read_error() {
        let path = std::env::temp_dir().join(format!("satva_home_{}.css", uuid::Uuid::new_v4()));
        let err = patch_mobile_styles(&path).expect_err("file is absent");
        assert!(matches!(err, SiteError::Read(..)));
    }

    #[test]
    fn locates_markers_in_document_order() {
        let css = "a\n.feature-desc-modern {\n    font-size: 12px;\n\n    .hero-slider-section {\n";
        let scan = find_corruption(css);
        assert_eq!(scan.start, Some(2));
        assert_eq!(scan.next, Some(css.find(HERO_SLIDER_LINE).expect("hero line present")));
        assert_eq!(scan.found(), Some((2, 47)));
    }

    #[test]
    fn hero_rule_before_the_section_is_not_a_corruption() {
        let css = "    .hero-slider-section {\n}\n.feature-desc-modern {\n";
        let scan = find_corruption(css);
        assert!(scan.start.is_some());
        assert_eq!(scan.next, None);
        assert_eq!(scan.found(), None);
    }

    #[test]
    fn missing_start_marker_still_reports_the_hero_offset() {
        let css = "body {}\n    .hero-slider-section {\n";
        let scan = find_corruption(css);
        assert_eq!(scan.start, None);
        assert_eq!(scan.next, Some(8));
        assert_eq!(scan.found(), None);
    }

    #[test]
    fn splices_the_canonical_section_between_the_markers() {
        let css = "\
/* header */
.feature-desc-modern {
    font-size: 12px;

    .hero-slider-section {
        height: 300px;
    }
}
";
        let (scan, repaired) = repair_structure(css);
        let repaired = repaired.expect("both markers present");
        assert!(scan.found().is_some());

        let expected = format!(
            "/* header */\n{}\n    .hero-slider-section {{\n        height: 300px;\n    }}\n}}\n",
            assets::get_feature_desc_section()
        );
        assert_eq!(repaired, expected);
        assert!(repaired.contains(".promo-banner-image-only:hover"));
    }

    #[test]
    fn repair_is_idempotent() {
        let css = ".feature-desc-modern {\n    font-size: 12px;\n\n    .hero-slider-section {\n    }\n";
        let (_, first) = repair_structure(css);
        let first = first.expect("markers present");
        let (_, second) = repair_structure(&first);
        assert_eq!(second.expect("markers still present"), first);
    }

    #[test]
    fn intact_stylesheet_is_left_alone() {
        let css = ".feature-desc-modern {\n    font-size: 12px;\n}\n";
        let (scan, repaired) = repair_structure(css);
        assert!(repaired.is_none());
        assert_eq!(scan.next, None);

        let path = scratch_css(css);
        let scan = fix_structure(&path).expect("scan succeeds");
        assert_eq!(scan.found(), None);
        assert_eq!(fs::read_to_string(&path).expect("read back"), css);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn repairs_the_stylesheet_file_in_place() {
        let css = ".feature-desc-modern {\n    font-size: 12px;\n\n    .hero-slider-section {\n    }\n";
        let path = scratch_css(css);
        let scan = fix_structure(&path).expect("repair succeeds");
        assert!(scan.found().is_some());

        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with(assets::get_feature_desc_section()));
        assert!(content.ends_with("    .hero-slider-section {\n    }\n"));
        let _ = fs::remove_file(path);
    }
}
