// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded SVG logo at runtime to produce an RGBA icon for
//! the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Side length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_slideshow.svg");

/// Rasterize the embedded SVG logo into `size`x`size` RGBA pixels.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::warn!("window icon could not be parsed: {}", e);
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

/// Returns the window icon, or `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_rgba_buffer() {
        let pixels = rasterize(ICON_SIZE).expect("logo should render");
        assert_eq!(pixels.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(pixels.chunks(4).any(|px| px[3] > 0), "logo is not blank");
    }

    #[test]
    fn small_sizes_render_too() {
        let pixels = rasterize(16).expect("logo should render");
        assert_eq!(pixels.len(), 16 * 16 * 4);
    }
}
