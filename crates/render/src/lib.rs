use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage, RgbImage};
use types::{safe_zone, IconKind, CANVAS_FILL, KEY_THRESHOLD};

/// A rendered artifact ready to encode. The apple-touch variant is flattened
/// to RGB; everything else keeps its alpha channel.
#[derive(Debug)]
pub enum RenderedIcon {
    Rgba(RgbaImage),
    Rgb(RgbImage),
}

impl RenderedIcon {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            RenderedIcon::Rgba(img) => img.dimensions(),
            RenderedIcon::Rgb(img) => img.dimensions(),
        }
    }
}

/// Key near-black pixels out of the logo in place. A pixel is keyed when
/// red, green, and blue are all below [`KEY_THRESHOLD`]; every other pixel
/// keeps its channels, alpha included.
pub fn key_out_dark(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *px;
        if r < KEY_THRESHOLD && g < KEY_THRESHOLD && b < KEY_THRESHOLD {
            *px = Rgba([0, 0, 0, 0]);
        }
    }
}

/// Square Lanczos resize of the keyed logo.
pub fn scale_square(img: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(img, size, size, FilterType::Lanczos3)
}

/// Maskable variant: opaque canvas with the logo inset by the safe-zone
/// margin on every side.
pub fn compose_maskable(img: &RgbaImage, size: u32) -> RgbaImage {
    let zone = safe_zone(size);
    let logo = scale_square(img, zone.inner);
    let mut canvas = opaque_canvas(size);
    imageops::overlay(&mut canvas, &logo, i64::from(zone.margin), i64::from(zone.margin));
    canvas
}

/// Apple touch variant: opaque canvas, fixed inner size and corner offset,
/// no alpha channel in the result.
pub fn compose_apple_touch(img: &RgbaImage, size: u32, inner: u32, offset: u32) -> RgbImage {
    let logo = scale_square(img, inner);
    let mut canvas = opaque_canvas(size);
    imageops::overlay(&mut canvas, &logo, i64::from(offset), i64::from(offset));
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Render one cataloged artifact from the keyed logo.
pub fn render_icon(keyed: &RgbaImage, kind: &IconKind) -> RenderedIcon {
    match *kind {
        IconKind::FullSize => RenderedIcon::Rgba(keyed.clone()),
        IconKind::Scaled { size } => RenderedIcon::Rgba(scale_square(keyed, size)),
        IconKind::Maskable { size } => RenderedIcon::Rgba(compose_maskable(keyed, size)),
        IconKind::AppleTouch { size, inner, offset } => {
            RenderedIcon::Rgb(compose_apple_touch(keyed, size, inner, offset))
        }
    }
}

fn opaque_canvas(size: u32) -> RgbaImage {
    let [r, g, b] = CANVAS_FILL;
    RgbaImage::from_pixel(size, size, Rgba([r, g, b, 255]))
}
