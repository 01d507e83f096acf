use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
};
use tracking::{FrameReport, Region};

const GRID: Rgb<u8> = Rgb([255, 255, 255]);
const MIDPOINT: Rgb<u8> = Rgb([255, 0, 0]);
const CENTROID: Rgb<u8> = Rgb([0, 255, 0]);
const LINK: Rgb<u8> = Rgb([0, 0, 255]);

/// Draw the 3x3 grid, frame midpoint and (if any) the tracked centroid on a
/// copy of the frame.
///
/// No text is drawn: imageproc needs a font to render glyphs and none ships
/// with the tool. The status lines come from [`overlay_caption`] instead.
pub fn render_overlay(frame: &RgbImage, report: &FrameReport) -> RgbImage {
    let mut canvas = frame.clone();
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);

    for i in 1..3 {
        let x = (i * canvas.width() / 3) as f32;
        let y = (i * canvas.height() / 3) as f32;
        draw_line_segment_mut(&mut canvas, (x, 0.0), (x, height), GRID);
        draw_line_segment_mut(&mut canvas, (0.0, y), (width, y), GRID);
    }

    let (mx, my) = report.midpoint;
    if let Some((cx, cy)) = report.centroid {
        draw_line_segment_mut(
            &mut canvas,
            (mx as f32, my as f32),
            (cx as f32, cy as f32),
            LINK,
        );
        draw_filled_circle_mut(&mut canvas, (cx, cy), 10, CENTROID);
    }
    draw_filled_circle_mut(&mut canvas, (mx, my), 5, MIDPOINT);

    canvas
}

/// Status lines for a processed frame: active color, position label, offsets
/// and the area threshold.
pub fn overlay_caption(report: &FrameReport) -> Vec<String> {
    let offset = |v: Option<i32>| v.map_or_else(|| "None".to_string(), |v| v.to_string());
    vec![
        format!("Detecting Color: {}", report.active_color_name),
        report.label.to_string(),
        format!("X: {}, Y: {}", offset(report.offset_x), offset(report.offset_y)),
        format!("Min Contour Area: {}", report.min_area),
    ]
}

/// Fill every region that passed the area filter onto a black canvas.
pub fn render_region_mask(width: u32, height: u32, regions: &[Region]) -> GrayImage {
    let mut canvas = GrayImage::new(width, height);

    for region in regions {
        let mut points: Vec<Point<i32>> = region
            .boundary
            .iter()
            .map(|&[x, y]| Point::new(x, y))
            .collect();
        // draw_polygon_mut refuses closed rings
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() >= 3 {
            draw_polygon_mut(&mut canvas, &points, Luma([255]));
        } else {
            for p in &points {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
                    canvas.put_pixel(p.x as u32, p.y as u32, Luma([255]));
                }
            }
        }
    }

    canvas
}
