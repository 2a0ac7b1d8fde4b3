use resvg::tiny_skia::{self, FillRule, Pixmap, PixmapPaint, Transform};

use crate::paint::{BlendMode, Color, Paint};
use crate::path::{Path, PathEl};
use crate::scene::{DrawCmd, DrawList};

use super::RenderError;

/// Allocates a `width × height` pixmap cleared to `clear` and renders `list`
/// into it.
pub fn render_to_pixmap(
    list: &DrawList,
    width: u32,
    height: u32,
    clear: Color,
) -> Result<Pixmap, RenderError> {
    let mut pixmap = new_pixmap(width, height)?;
    pixmap.fill(to_skia_color(clear));
    render_into(list, &mut pixmap)?;
    Ok(pixmap)
}

/// Renders `list` on top of the existing content of `target`.
///
/// Unbalanced layers are composited at the end so nothing recorded is lost.
pub fn render_into(list: &DrawList, target: &mut Pixmap) -> Result<(), RenderError> {
    let (width, height) = (target.width(), target.height());
    let mut layers: Vec<Pixmap> = Vec::new();

    log::trace!("rendering {} draw commands into {}x{}", list.len(), width, height);

    for cmd in list.items() {
        match cmd {
            DrawCmd::FillPath(fill) => {
                let Some(path) = to_skia_path(&fill.path) else {
                    continue;
                };
                let dst = match layers.last_mut() {
                    Some(layer) => layer,
                    None => &mut *target,
                };
                dst.fill_path(&path, &to_skia_paint(&fill.paint), FillRule::Winding, Transform::identity(), None);
            }
            DrawCmd::PushLayer => layers.push(new_pixmap(width, height)?),
            DrawCmd::PopLayer => {
                let Some(layer) = layers.pop() else {
                    log::warn!("PopLayer without matching PushLayer ignored");
                    continue;
                };
                composite(&layer, layers.last_mut().unwrap_or(&mut *target));
            }
        }
    }

    if !layers.is_empty() {
        log::warn!("{} unbalanced layer(s) at end of draw list", layers.len());
    }
    while let Some(layer) = layers.pop() {
        composite(&layer, layers.last_mut().unwrap_or(&mut *target));
    }

    Ok(())
}

/// Converts an engine path to a `tiny_skia` path. `None` for empty paths.
pub fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x, p.y),
            PathEl::LineTo(p) => pb.line_to(p.x, p.y),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x, c.y, p.x, p.y),
            PathEl::Close => pb.close(),
        }
    }
    pb.finish()
}

fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::InvalidTargetSize { width, height })
}

fn composite(layer: &Pixmap, dst: &mut Pixmap) {
    dst.draw_pixmap(0, 0, layer.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.clamped().to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_skia_paint(paint: &Paint) -> tiny_skia::Paint<'static> {
    let mut out = tiny_skia::Paint::default();
    out.set_color(to_skia_color(paint.color));
    out.anti_alias = paint.anti_alias;
    out.blend_mode = match paint.blend {
        BlendMode::SourceOver => tiny_skia::BlendMode::SourceOver,
        BlendMode::DestinationOut => tiny_skia::BlendMode::DestinationOut,
    };
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Corners, Rect};
    use crate::path::{build_round_rect_path, RoundRectSpec};

    fn square(x: f32, w: f32) -> Path {
        build_round_rect_path(&RoundRectSpec::square(Rect::new(x, 0.0, w, 10.0)))
    }

    fn alpha(p: &Pixmap, x: u32, y: u32) -> u8 {
        p.pixel(x, y).map(|c| c.alpha()).unwrap_or(0)
    }

    fn red(p: &Pixmap, x: u32, y: u32) -> u8 {
        p.pixel(x, y).map(|c| c.demultiply().red()).unwrap_or(0)
    }

    #[test]
    fn zero_sized_target_is_an_error() {
        let err = render_to_pixmap(&DrawList::new(), 0, 10, Color::transparent()).unwrap_err();
        assert_eq!(err, RenderError::InvalidTargetSize { width: 0, height: 10 });
    }

    #[test]
    fn fills_paint_source_over() {
        let mut list = DrawList::new();
        list.fill_path(square(0.0, 10.0), Paint::solid(Color::GRAY));
        let px = render_to_pixmap(&list, 20, 10, Color::transparent()).unwrap();
        assert_eq!(alpha(&px, 5, 5), 255);
        assert_eq!(alpha(&px, 15, 5), 0);
    }

    #[test]
    fn eraser_inside_layer_keeps_backdrop() {
        let backdrop = Color::from_srgb_u8(255, 0, 0, 255);
        let mut list = DrawList::new();
        list.push_layer();
        list.fill_path(square(0.0, 20.0), Paint::solid(Color::CYAN));
        list.fill_path(square(8.0, 4.0), Paint::eraser());
        list.pop_layer();

        let px = render_to_pixmap(&list, 20, 10, backdrop).unwrap();
        // Gap shows the red backdrop, not a hole.
        assert_eq!(red(&px, 9, 5), 255);
        assert_eq!(alpha(&px, 9, 5), 255);
        // Outside the gap the cyan fill covers the backdrop.
        assert_eq!(red(&px, 2, 5), 0);
        assert_eq!(red(&px, 16, 5), 0);
    }

    #[test]
    fn eraser_without_layer_cuts_through() {
        let mut list = DrawList::new();
        list.fill_path(square(0.0, 20.0), Paint::solid(Color::CYAN));
        list.fill_path(square(8.0, 4.0), Paint::eraser());
        let px = render_to_pixmap(&list, 20, 10, Color::from_srgb_u8(255, 0, 0, 255)).unwrap();
        assert_eq!(alpha(&px, 9, 5), 0);
    }

    #[test]
    fn empty_path_converts_to_none() {
        assert!(to_skia_path(&Path::empty()).is_none());
        let rounded = build_round_rect_path(&RoundRectSpec::uniform(
            Rect::new(0.0, 0.0, 10.0, 4.0),
            2.0,
            Corners::ALL,
        ));
        assert!(to_skia_path(&rounded).is_some());
    }
}
