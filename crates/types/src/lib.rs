use serde::{Deserialize, Serialize};

/// Channel ceiling for the black-key pass: a pixel whose red, green, and
/// blue are all below this value is keyed out as fully transparent.
pub const KEY_THRESHOLD: u8 = 10;

/// Fill color for the opaque icon canvases (dark gray).
pub const CANVAS_FILL: [u8; 3] = [15, 15, 15];

/// Edge length of the favicon.
pub const FAVICON_SIZE: u32 = 32;

/// Square sizes emitted for the web app manifest, standard and maskable.
pub const MANIFEST_SIZES: [u32; 2] = [192, 512];

/// How one output artifact is derived from the keyed logo.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum IconKind {
    /// Keyed logo at its source dimensions.
    FullSize,
    /// Keyed logo resized to a square.
    Scaled { size: u32 },
    /// Opaque canvas with the logo inset by the maskable safe-zone margin.
    Maskable { size: u32 },
    /// Opaque canvas with the logo at a fixed inner size and corner offset,
    /// flattened to RGB.
    AppleTouch { size: u32, inner: u32, offset: u32 },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub file_name: String,
    pub kind: IconKind,
}

/// Safe-zone layout of a maskable canvas: margin on each side, inner edge
/// length left for the logo.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SafeZone { pub margin: u32, pub inner: u32 }

/// 10% margin per side, truncated. Truncation can leave the inner content
/// off-center by a pixel; that is accepted.
pub fn safe_zone(size: u32) -> SafeZone {
    let margin = size / 10;
    SafeZone { margin, inner: size - 2 * margin }
}

/// The full set of artifacts produced from one source logo, in write order.
pub fn icon_catalog() -> Vec<IconSpec> {
    let mut specs = vec![
        IconSpec { file_name: "logo.png".to_string(), kind: IconKind::FullSize },
        IconSpec { file_name: "favicon.png".to_string(), kind: IconKind::Scaled { size: FAVICON_SIZE } },
    ];
    for size in MANIFEST_SIZES {
        specs.push(IconSpec {
            file_name: format!("manifest-icon-{size}.png"),
            kind: IconKind::Scaled { size },
        });
        specs.push(IconSpec {
            file_name: format!("manifest-icon-{size}.maskable.png"),
            kind: IconKind::Maskable { size },
        });
    }
    specs.push(IconSpec {
        file_name: "apple-icon-180.png".to_string(),
        kind: IconKind::AppleTouch { size: 180, inner: 160, offset: 10 },
    });
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_zone_truncates_ten_percent() {
        assert_eq!(safe_zone(192), SafeZone { margin: 19, inner: 154 });
        assert_eq!(safe_zone(512), SafeZone { margin: 51, inner: 410 });
    }

    #[test]
    fn catalog_lists_every_artifact_in_write_order() {
        let names: Vec<String> = icon_catalog().into_iter().map(|s| s.file_name).collect();
        assert_eq!(
            names,
            [
                "logo.png",
                "favicon.png",
                "manifest-icon-192.png",
                "manifest-icon-192.maskable.png",
                "manifest-icon-512.png",
                "manifest-icon-512.maskable.png",
                "apple-icon-180.png",
            ]
        );
    }

    #[test]
    fn apple_touch_inset_is_fixed_not_proportional() {
        let catalog = icon_catalog();
        let apple = catalog.last().unwrap();
        assert_eq!(apple.kind, IconKind::AppleTouch { size: 180, inner: 160, offset: 10 });
        // A proportional margin at 180 would be 18, not the fixed 10.
        assert_eq!(safe_zone(180).margin, 18);
    }
}
