//! Phase-space density versus atom number log-log plot

use crate::{fit::logspace, report::CampaignReport};
use plotters::{coord::Shift, prelude::*};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to draw the figure: {0}")]
    Drawing(String),
}
type Result<T> = std::result::Result<T, PlotError>;

fn drawing<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Atom number axis range
pub const N_RANGE: (f64, f64) = (1e4, 1e10);
/// PSD axis range
pub const PSD_RANGE: (f64, f64) = (1e-8, 1e2);
/// Legend corner
pub const LEGEND_POSITION: SeriesLabelPosition = SeriesLabelPosition::LowerLeft;

/// PSD versus N figure builder
pub struct PsdPlot<'a> {
    reports: &'a [CampaignReport],
    size: (u32, u32),
    fit_lines: bool,
}
impl<'a> PsdPlot<'a> {
    pub fn new(reports: &'a [CampaignReport]) -> Self {
        Self {
            reports,
            size: (1000, 850),
            fit_lines: false,
        }
    }
    /// Sets the figure size in pixels
    pub fn size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    /// Overlays the fitted power laws for N in [10⁴,10⁹]
    pub fn fit_lines(self, fit_lines: bool) -> Self {
        Self { fit_lines, ..self }
    }
    /// Renders the figure to a PNG file if `path` ends with `.png`, to a SVG file otherwise
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_png = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            self.draw(BitMapBackend::new(path, self.size).into_drawing_area())?;
        } else {
            self.draw(SVGBackend::new(path, self.size).into_drawing_area())?;
        }
        log::info!("PSD plot saved to {:?}", path);
        Ok(())
    }
    fn draw<DB: DrawingBackend>(&self, plot: DrawingArea<DB, Shift>) -> Result<()> {
        plot.fill(&WHITE).map_err(drawing)?;
        let mut chart = ChartBuilder::on(&plot)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .margin(20)
            .build_cartesian_2d(
                (N_RANGE.0..N_RANGE.1).log_scale(),
                (PSD_RANGE.0..PSD_RANGE.1).log_scale(),
            )
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .x_desc("Atom Number")
            .y_desc("PSD")
            .axis_desc_style(("sans-serif", 20))
            .label_style(("sans-serif", 16))
            .x_label_formatter(&|x| format!("{:.0e}", x))
            .y_label_formatter(&|y| format!("{:.0e}", y))
            .draw()
            .map_err(drawing)?;

        let n_fit = logspace(4., 9., 50);
        for report in self.reports {
            let color = report.campaign.color();
            let rgb = RGBColor(color.r, color.g, color.b);
            chart
                .draw_series(
                    report
                        .n
                        .iter()
                        .zip(&report.psd)
                        .map(|(&x, &y)| Circle::new((x, y), 4, rgb.filled())),
                )
                .map_err(drawing)?
                .label(report.campaign.label())
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, rgb.filled()));
            if self.fit_lines {
                chart
                    .draw_series(LineSeries::new(
                        n_fit.iter().map(|&n| (n, report.fit.eval(n))),
                        &rgb,
                    ))
                    .map_err(drawing)?;
            }
        }
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .position(LEGEND_POSITION)
            .draw()
            .map_err(drawing)?;
        plot.present().map_err(drawing)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Campaign, trap::QuadrupoleTrap};

    #[test]
    fn figure_layout() -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_eq!(N_RANGE, (1e4, 1e10));
        assert_eq!(PSD_RANGE, (1e-8, 1e2));
        assert!(matches!(LEGEND_POSITION, SeriesLabelPosition::LowerLeft));

        let reports = CampaignReport::all(&QuadrupoleTrap::default())?;
        let plot = PsdPlot::new(&reports);
        assert_eq!(plot.reports.len(), 6);
        assert_eq!(plot.size, (1000, 850));
        assert!(!plot.fit_lines);
        let mut labels: Vec<_> = plot.reports.iter().map(|r| r.campaign.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);
        assert!(labels.iter().all(|label| !label.is_empty()));
        assert!(plot
            .reports
            .iter()
            .flat_map(|r| &r.n)
            .all(|&n| n >= N_RANGE.0 && n <= N_RANGE.1));

        let plot = plot.size(640, 480).fit_lines(true);
        assert_eq!(plot.size, (640, 480));
        assert!(plot.fit_lines);
        Ok(())
    }

    #[test]
    #[ignore = "text rendering needs system fonts"]
    fn svg_figure() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let trap = QuadrupoleTrap::default();
        let reports = vec![
            CampaignReport::new(&trap, &Campaign::Sept19Plug.dataset()?)?,
            CampaignReport::new(&trap, &Campaign::Mit.dataset()?)?,
        ];
        let path = std::env::temp_dir().join("psd-evaporation_test.svg");
        PsdPlot::new(&reports).fit_lines(true).save(&path)?;
        let svg = std::fs::read_to_string(&path)?;
        assert!(svg.starts_with("<svg"));
        std::fs::remove_file(path)?;
        Ok(())
    }
}
