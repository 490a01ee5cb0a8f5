use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoint, PlotPoints, Text};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sizing chart (central panel)
// ---------------------------------------------------------------------------

/// Render the mass/diameter chart for the last successful computation.
pub fn sizing_plot(ui: &mut Ui, state: &AppState) {
    let chart = match &state.chart {
        Some(chart) => chart,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Enter rocket parameters and press Update Plot");
            });
            return;
        }
    };

    let request = &chart.request;
    let result = &chart.result;
    let (lo, hi) = result.diameter_bounds();

    ui.heading(format!(
        "Descent Velocity: {} m/s",
        request.descent_velocity_mps
    ));

    // Room past the right edge of the curve for the size labels.
    let mass_span = (request.max_mass_kg - request.min_mass_kg).max(1.0);
    let label_x = request.max_mass_kg + 0.02 * mass_span;

    Plot::new("sizing_plot")
        .x_axis_label("Rocket Mass [kg]")
        .y_axis_label("Parachute Diameter [m]")
        .include_x(request.min_mass_kg)
        .include_x(request.max_mass_kg + 0.1 * mass_span)
        .include_y(lo - 0.1)
        .include_y(hi + 0.1)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Dashed reference line + inch label per matching catalog size.
            for entry in &result.matching_sizes {
                plot_ui.hline(
                    HLine::new(entry.diameter_m)
                        .color(Color32::BLACK)
                        .style(LineStyle::dashed_loose())
                        .width(0.5),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(label_x, entry.diameter_m),
                        RichText::new(entry.label()).size(10.0),
                    )
                    .anchor(Align2::LEFT_CENTER)
                    .color(Color32::BLACK),
                );
            }

            // Main sizing curve.
            let points: PlotPoints = result
                .masses_kg
                .iter()
                .zip(result.diameters_m.iter())
                .map(|(&m, &d)| [m, d])
                .collect();

            plot_ui.line(Line::new(points).color(Color32::DARK_BLUE).width(1.5));
        });
}
