// src/report/render.rs

//! PNG rendering of a DAG.

use std::io::Cursor;
use std::path::Path;

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use tracing::{debug, info};

use crate::dag::Dag;
use crate::errors::{DagError, Result};
use crate::fs::FileSystem;
use crate::report::layout::force_directed;
use crate::types::{DUMMY_SINK_D, DUMMY_SOURCE_D, NodeAttrs};

pub const DARK_SLATE_GRAY: Rgb<u8> = Rgb([47, 79, 79]);
pub const SLATE_GRAY: Rgb<u8> = Rgb([112, 128, 144]);
pub const LIGHT_CORAL: Rgb<u8> = Rgb([240, 128, 128]);
pub const SKY_BLUE: Rgb<u8> = Rgb([135, 206, 235]);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE_COLOR: Rgb<u8> = Rgb([64, 64, 64]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

const NODE_RADIUS: i32 = 18;
const ARROW_LENGTH: f32 = 10.0;
const ARROW_HALF_WIDTH: f32 = 5.0;
const GLYPH_SIZE: i32 = 8;

/// Canvas and layout settings for [`render_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Force-directed layout iterations.
    pub iterations: usize,
    /// Seed for the layout's initial positions.
    pub layout_seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            iterations: 200,
            layout_seed: 0,
        }
    }
}

/// Fill color for a node of category `d`.
pub fn node_color(d: i32) -> Rgb<u8> {
    match d {
        DUMMY_SINK_D => DARK_SLATE_GRAY,
        DUMMY_SOURCE_D => SLATE_GRAY,
        0 => LIGHT_CORAL,
        _ => SKY_BLUE,
    }
}

/// Draw `dag` onto a fresh canvas.
pub fn render_image(dag: &Dag, options: &RenderOptions) -> Result<RgbImage> {
    if options.width == 0 || options.height == 0 {
        return Err(DagError::Render(format!(
            "canvas must be non-empty (got {}x{})",
            options.width, options.height
        )));
    }

    let margin = (NODE_RADIUS + 2 * GLYPH_SIZE) as f32;
    let layout = force_directed(
        dag,
        options.width,
        options.height,
        margin,
        options.iterations,
        options.layout_seed,
    );

    let mut canvas = RgbImage::from_pixel(options.width, options.height, BACKGROUND);

    for (from, to) in dag.edges() {
        if let (Some(a), Some(b)) = (layout.position(from), layout.position(to)) {
            draw_arrow(&mut canvas, a, b);
        }
    }

    for (id, attrs) in dag.nodes_with_attrs() {
        let Some((x, y)) = layout.position(id) else {
            continue;
        };
        let center = (x.round() as i32, y.round() as i32);
        draw_filled_circle_mut(&mut canvas, center, NODE_RADIUS, node_color(attrs.d));
        draw_hollow_circle_mut(&mut canvas, center, NODE_RADIUS, EDGE_COLOR);

        let [first, second] = label_lines(&id.to_string(), &attrs);
        draw_text_centered(&mut canvas, &first, center.0, center.1 - GLYPH_SIZE);
        draw_text_centered(&mut canvas, &second, center.0, center.1 + 1);
    }

    debug!(
        nodes = dag.node_count(),
        edges = dag.edge_count(),
        width = options.width,
        height = options.height,
        "rendered DAG image"
    );
    Ok(canvas)
}

/// Render `dag`, encode it as PNG and write it to `path`.
pub fn write_image(
    fs: &dyn FileSystem,
    path: &Path,
    dag: &Dag,
    options: &RenderOptions,
) -> Result<()> {
    let png = encode_png(&render_image(dag, options)?)?;
    fs.write(path, &png)?;
    info!(path = %path.display(), bytes = png.len(), "wrote DAG image");
    Ok(())
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| DagError::Render(format!("PNG encoding failed: {e}")))?;
    Ok(buf.into_inner())
}

/// Node label: the id on the first line, the attributes on the second.
fn label_lines(id: &str, attrs: &NodeAttrs) -> [String; 2] {
    [
        id.to_string(),
        format!("(c={}, q={}, d={})", attrs.c, attrs.q, attrs.d),
    ]
}

fn draw_arrow(canvas: &mut RgbImage, from: (f32, f32), to: (f32, f32)) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= 2.0 * NODE_RADIUS as f32 {
        draw_line_segment_mut(canvas, from, to, EDGE_COLOR);
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let r = NODE_RADIUS as f32;
    let tip = (to.0 - ux * r, to.1 - uy * r);
    draw_line_segment_mut(canvas, from, tip, EDGE_COLOR);

    let base = (tip.0 - ux * ARROW_LENGTH, tip.1 - uy * ARROW_LENGTH);
    let (px, py) = (-uy * ARROW_HALF_WIDTH, ux * ARROW_HALF_WIDTH);
    draw_line_segment_mut(canvas, tip, (base.0 + px, base.1 + py), EDGE_COLOR);
    draw_line_segment_mut(canvas, tip, (base.0 - px, base.1 - py), EDGE_COLOR);
}

/// Draw `text` with the 8x8 bitmap font, horizontally centered on `cx` with
/// its top edge at `top`. Pixels outside the canvas are skipped.
fn draw_text_centered(canvas: &mut RgbImage, text: &str, cx: i32, top: i32) {
    let width = text.chars().count() as i32 * GLYPH_SIZE;
    let mut x0 = cx - width / 2;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1u8 << col) != 0 {
                        put_pixel_checked(canvas, x0 + col, top + row as i32, TEXT_COLOR);
                    }
                }
            }
        }
        x0 += GLYPH_SIZE;
    }
}

fn put_pixel_checked(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::{add_dummy_nodes, identify_frontier};
    use crate::fs::mock::MockFileSystem;
    use crate::types::NodeId;

    fn small_dag() -> Dag {
        let mut dag = Dag::new();
        dag.add_node(NodeId::Original(0), NodeAttrs::new(3, 2, 0));
        dag.add_node(NodeId::Original(1), NodeAttrs::new(5, 4, 1));
        dag.add_edge(NodeId::Original(0), NodeId::Original(1));
        let frontier = identify_frontier(&dag);
        add_dummy_nodes(&mut dag, &frontier);
        dag
    }

    #[test]
    fn colors_are_keyed_by_category() {
        assert_eq!(node_color(-2), DARK_SLATE_GRAY);
        assert_eq!(node_color(-1), SLATE_GRAY);
        assert_eq!(node_color(0), LIGHT_CORAL);
        assert_eq!(node_color(1), SKY_BLUE);
    }

    #[test]
    fn labels_carry_id_and_attributes() {
        let [id, attrs] = label_lines("dummy_sink", &NodeAttrs::dummy_sink());
        assert_eq!(id, "dummy_sink");
        assert_eq!(attrs, "(c=0, q=0, d=-2)");
    }

    #[test]
    fn every_category_color_appears_on_canvas() {
        let options = RenderOptions {
            width: 400,
            height: 400,
            ..RenderOptions::default()
        };
        let image = render_image(&small_dag(), &options).unwrap();
        assert_eq!(image.dimensions(), (400, 400));

        for color in [DARK_SLATE_GRAY, SLATE_GRAY, LIGHT_CORAL, SKY_BLUE] {
            assert!(image.pixels().any(|p| *p == color), "missing {color:?}");
        }
    }

    #[test]
    fn empty_dag_renders_blank_canvas() {
        let image = render_image(&Dag::new(), &RenderOptions::default()).unwrap();
        assert!(image.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn zero_sized_canvas_is_a_render_error() {
        let options = RenderOptions {
            width: 0,
            ..RenderOptions::default()
        };
        assert!(matches!(render_image(&small_dag(), &options), Err(DagError::Render(_))));
    }

    #[test]
    fn writes_png_through_filesystem() {
        let fs = MockFileSystem::new();
        let options = RenderOptions {
            width: 300,
            height: 200,
            iterations: 20,
            layout_seed: 3,
        };
        write_image(&fs, Path::new("dag.png"), &small_dag(), &options).unwrap();

        let bytes = fs.file("dag.png").unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 200));
    }
}
