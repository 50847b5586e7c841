//! Bar-chart rasterization.
//!
//! Renders a 256-bin histogram as a bar chart: x-axis intensity 0-255,
//! y-axis frequency, one equal-width bar per bin, dashed horizontal
//! gridlines, and a y-axis capped at a configurable fraction of the
//! maximum count. Capping reveals detail in distributions dominated by a
//! few tall bins; bars taller than the cap are clipped to the plot area.

use medscan_core::GrayImage;
use medscan_ops::histogram::{Histogram, BINS};

/// Y-axis fraction used by the detail variant (2.5% of the max count).
pub const DETAIL_Y_FRACTION: f64 = 0.025;

// Fixed chart geometry (pixels).
const MARGIN_LEFT: u32 = 48;
const MARGIN_RIGHT: u32 = 16;
const MARGIN_TOP: u32 = 16;
const MARGIN_BOTTOM: u32 = 32;

// Shades on the white background.
const SHADE_BACKGROUND: u8 = 255;
const SHADE_BAR: u8 = 64;
const SHADE_GRID: u8 = 200;
const SHADE_AXIS: u8 = 0;

/// Number of horizontal gridlines across the plot area.
const GRID_DIVISIONS: u32 = 4;

/// Chart rendering options.
///
/// # Example
///
/// ```rust
/// use medscan_chart::ChartOptions;
///
/// let full = ChartOptions::default(); // y-axis up to the max count
/// let detail = ChartOptions::detail(); // y-axis capped at 2.5% of max
/// assert!(detail.y_fraction < full.y_fraction);
/// ```
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Total chart width in pixels.
    pub width: u32,
    /// Total chart height in pixels.
    pub height: u32,
    /// Fraction of the maximum count used as the y-axis upper limit.
    pub y_fraction: f64,
    /// Draw dashed horizontal gridlines.
    pub gridlines: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            // 2 pixels per bin plus margins.
            width: MARGIN_LEFT + 2 * BINS as u32 + MARGIN_RIGHT,
            height: MARGIN_TOP + 400 + MARGIN_BOTTOM,
            y_fraction: 1.0,
            gridlines: true,
        }
    }
}

impl ChartOptions {
    /// The low-cap variant: y-axis limited to 2.5% of the maximum count.
    pub fn detail() -> Self {
        Self {
            y_fraction: DETAIL_Y_FRACTION,
            ..Self::default()
        }
    }
}

/// Renders a histogram into a grayscale chart raster.
///
/// Always produces an image of exactly `opts.width x opts.height`. An
/// all-zero histogram renders an empty plot.
pub fn render(hist: &Histogram, opts: &ChartOptions) -> GrayImage {
    let mut img = GrayImage::filled(opts.width, opts.height, SHADE_BACKGROUND);

    let plot_w = opts.width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT);
    let plot_h = opts.height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM);
    if plot_w == 0 || plot_h == 0 {
        return img;
    }
    let base_y = MARGIN_TOP + plot_h;

    // Y-axis upper limit: a fraction of the tallest bin, never below 1.
    let cap = ((hist.max() as f64 * opts.y_fraction).floor() as u64).max(1);

    if opts.gridlines {
        for div in 0..=GRID_DIVISIONS {
            let y = MARGIN_TOP + div * plot_h / GRID_DIVISIONS;
            for x in MARGIN_LEFT..MARGIN_LEFT + plot_w {
                // Dashed: 4 on, 4 off.
                if (x - MARGIN_LEFT) % 8 < 4 {
                    put(&mut img, x, y, SHADE_GRID);
                }
            }
        }
    }

    for (bin, &count) in hist.counts().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let clipped = count.min(cap);
        let bar_h = ((clipped as f64 / cap as f64) * plot_h as f64).round() as u32;
        if bar_h == 0 {
            continue;
        }
        let x0 = MARGIN_LEFT + (bin as u32 * plot_w) / BINS as u32;
        let x1 = MARGIN_LEFT + ((bin as u32 + 1) * plot_w) / BINS as u32;
        fill_rect(&mut img, x0, base_y - bar_h, x1.max(x0 + 1), base_y, SHADE_BAR);
    }

    // Axes drawn last so bars never cover them.
    fill_rect(&mut img, MARGIN_LEFT - 1, MARGIN_TOP, MARGIN_LEFT, base_y, SHADE_AXIS);
    fill_rect(
        &mut img,
        MARGIN_LEFT - 1,
        base_y,
        MARGIN_LEFT + plot_w,
        base_y + 1,
        SHADE_AXIS,
    );

    img
}

/// Fills the half-open rectangle [x0, x1) x [y0, y1).
fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, shade: u8) {
    let (w, h) = img.dimensions();
    let raw = img.as_raw_mut();
    for y in y0..y1.min(h) {
        for x in x0..x1.min(w) {
            raw[y as usize * w as usize + x as usize] = shade;
        }
    }
}

fn put(img: &mut GrayImage, x: u32, y: u32, shade: u8) {
    let (w, h) = img.dimensions();
    if x < w && y < h {
        img.as_raw_mut()[y as usize * w as usize + x as usize] = shade;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Height in pixels of the bar drawn for `bin`.
    fn bar_height(chart: &GrayImage, bin: u32) -> u32 {
        let opts = ChartOptions::default();
        let plot_w = opts.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = opts.height - MARGIN_TOP - MARGIN_BOTTOM;
        let x = MARGIN_LEFT + (bin * plot_w) / BINS as u32;
        (0..plot_h)
            .filter(|dy| chart.pixel(x, MARGIN_TOP + plot_h - 1 - dy).unwrap() == SHADE_BAR)
            .count() as u32
    }

    fn hist_from(samples: &[u8]) -> Histogram {
        let img = GrayImage::from_raw(samples.len() as u32, 1, samples.to_vec()).unwrap();
        Histogram::of(&img)
    }

    #[test]
    fn test_chart_dimensions() {
        let opts = ChartOptions::default();
        let chart = render(&hist_from(&[1, 2, 3]), &opts);
        assert_eq!(chart.dimensions(), (opts.width, opts.height));
    }

    #[test]
    fn test_tallest_bin_fills_plot() {
        let chart = render(&hist_from(&[128, 128, 128, 5]), &ChartOptions::default());
        let plot_h = ChartOptions::default().height - MARGIN_TOP - MARGIN_BOTTOM;
        assert_eq!(bar_height(&chart, 128), plot_h);
    }

    #[test]
    fn test_empty_bins_draw_nothing() {
        let chart = render(&hist_from(&[128]), &ChartOptions::default());
        assert_eq!(bar_height(&chart, 0), 0);
        assert_eq!(bar_height(&chart, 255), 0);
    }

    #[test]
    fn test_detail_cap_clips_and_amplifies() {
        // Bin 10 dominates; bin 200 is tiny.
        let mut samples = vec![10u8; 1000];
        samples.extend(std::iter::repeat(200u8).take(10));
        let hist = hist_from(&samples);

        let full = render(&hist, &ChartOptions::default());
        let detail = render(&hist, &ChartOptions::detail());

        let plot_h = ChartOptions::default().height - MARGIN_TOP - MARGIN_BOTTOM;
        // Full scale: small bin is barely visible.
        assert!(bar_height(&full, 200) <= plot_h / 50);
        // Detail scale (cap = 25): small bin is clearly visible, dominant
        // bin is clipped to the plot area.
        assert!(bar_height(&detail, 200) >= plot_h / 4);
        assert_eq!(bar_height(&detail, 10), plot_h);
    }

    #[test]
    fn test_all_zero_histogram_is_blank_plot() {
        let hist = Histogram::of(&GrayImage::new(0, 0));
        let chart = render(&hist, &ChartOptions::default());
        for bin in 0..BINS as u32 {
            assert_eq!(bar_height(&chart, bin), 0);
        }
    }

    #[test]
    fn test_gridlines_toggle() {
        let opts = ChartOptions {
            gridlines: false,
            ..ChartOptions::default()
        };
        let chart = render(&hist_from(&[7]), &opts);
        assert!(chart.pixels().all(|p| p != SHADE_GRID));
    }
}
