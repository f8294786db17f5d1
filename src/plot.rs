//! PNG rendering of analysed spectra with theoretical mode markers.
//!
//! x axis: 0..max_frequency (Hz), linear. y axis: floor..0 dB.
//! Mode markers are vertical lines shaded by mode kind; each recording
//! is a polyline in its own palette color.

use std::path::Path;

use crate::analysis::ModalReport;
use crate::error::{AnalysisError, AnalysisResult};
use crate::room::ModeKind;

type Rgb = [u8; 3];

const BACKGROUND: Rgb = [255, 255, 255];
const AXIS: Rgb = [0, 0, 0];
const GRID: Rgb = [230, 230, 230];

/// Recording colors, cycled when there are more recordings than entries
const PALETTE: [Rgb; 6] = [
    [31, 119, 180],
    [214, 39, 40],
    [44, 160, 44],
    [255, 127, 14],
    [148, 103, 189],
    [140, 86, 75],
];

/// Plot area margins (pixels): left, right, top, bottom
const MARGINS: (u32, u32, u32, u32) = (50, 20, 20, 30);

/// Spacing of horizontal grid lines (dB)
const GRID_STEP_DB: f64 = 20.0;

fn mode_color(kind: ModeKind) -> Rgb {
    match kind {
        ModeKind::Axial => [90, 90, 90],
        ModeKind::Tangential => [150, 150, 150],
        ModeKind::Oblique => [200, 200, 200],
    }
}

/// Maps frequency and level to pixel coordinates
#[derive(Debug, Clone, Copy)]
pub struct PlotLayout {
    pub width: u32,
    pub height: u32,
    pub max_frequency_hz: f64,
    pub floor_db: f64,
}

impl PlotLayout {
    fn left(&self) -> f64 {
        MARGINS.0 as f64
    }

    fn right(&self) -> f64 {
        (self.width.saturating_sub(MARGINS.1 + 1)) as f64
    }

    fn top(&self) -> f64 {
        MARGINS.2 as f64
    }

    fn bottom(&self) -> f64 {
        (self.height.saturating_sub(MARGINS.3 + 1)) as f64
    }

    pub fn x_for(&self, frequency_hz: f64) -> f64 {
        let t = (frequency_hz / self.max_frequency_hz).clamp(0.0, 1.0);
        self.left() + t * (self.right() - self.left())
    }

    pub fn y_for(&self, level_db: f64) -> f64 {
        let t = (level_db / self.floor_db).clamp(0.0, 1.0);
        self.top() + t * (self.bottom() - self.top())
    }
}

/// RGB8 pixel buffer
struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        let pixels = BACKGROUND
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let offset = ((y as u32 * self.width + x as u32) * 3) as usize;
        self.pixels[offset..offset + 3].copy_from_slice(&color);
    }

    /// Bresenham line
    fn line(&mut self, (x0, y0): (f64, f64), (x1, y1): (f64, f64), color: Rgb) {
        let (mut x, mut y) = (x0.round() as i64, y0.round() as i64);
        let (x1, y1) = (x1.round() as i64, y1.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn save(&self, path: &Path) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

/// Draw every recording of the report and its modes into one image
pub fn render_report(report: &ModalReport, path: &Path, width: u32, height: u32) -> AnalysisResult<()> {
    let floor_db = report
        .recordings
        .iter()
        .flat_map(|r| r.spectrum.levels_db.iter().copied())
        .fold(-GRID_STEP_DB, f64::min);
    let layout = PlotLayout {
        width,
        height,
        max_frequency_hz: report.max_frequency_hz,
        floor_db,
    };

    let mut canvas = Canvas::new(width, height);

    let mut level = -GRID_STEP_DB;
    while level >= floor_db {
        let y = layout.y_for(level);
        canvas.line((layout.left(), y), (layout.right(), y), GRID);
        level -= GRID_STEP_DB;
    }

    for mode in &report.modes {
        let x = layout.x_for(mode.frequency_hz);
        canvas.line((x, layout.top()), (x, layout.bottom()), mode_color(mode.kind));
    }

    for (recording, color) in report.recordings.iter().zip(PALETTE.iter().cycle()) {
        let points: Vec<(f64, f64)> = recording
            .spectrum
            .points()
            .map(|(f, db)| (layout.x_for(f), layout.y_for(db)))
            .collect();
        for segment in points.windows(2) {
            canvas.line(segment[0], segment[1], *color);
        }
    }

    // Axes on top
    canvas.line((layout.left(), layout.top()), (layout.left(), layout.bottom()), AXIS);
    canvas.line((layout.left(), layout.bottom()), (layout.right(), layout.bottom()), AXIS);

    canvas.save(path).map_err(|source| AnalysisError::Plot {
        path: path.to_path_buf(),
        source,
    })
}
