use eframe::egui::{self, Color32, RichText, Ui};

use crate::sizing::atmosphere::TROPOPAUSE_ALTITUDE;
use crate::sizing::AltitudeBand;
use crate::state::{AppState, DensityModel};

// ---------------------------------------------------------------------------
// Left side panel – sizing input form
// ---------------------------------------------------------------------------

/// Render the input form. All numeric fields are free text; nothing is parsed
/// until the user requests an update.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sizing Inputs");
    ui.separator();

    egui::Grid::new("sizing_inputs")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Minimum Mass (kg)");
            ui.text_edit_singleline(&mut state.min_mass_text);
            ui.end_row();

            ui.label("Maximum Mass (kg)");
            ui.text_edit_singleline(&mut state.max_mass_text);
            ui.end_row();

            ui.label("Descent Velocity (m/s)");
            ui.text_edit_singleline(&mut state.velocity_text);
            ui.end_row();

            ui.label("Drag Coefficient");
            ui.text_edit_singleline(&mut state.drag_coef_text);
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.strong("Atmosphere");

    match state.density_model {
        DensityModel::FixedBand => {
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Apogee Altitude");
                egui::ComboBox::from_id_salt("altitude_band")
                    .selected_text(state.altitude_band.label())
                    .show_ui(ui, |ui: &mut Ui| {
                        for band in AltitudeBand::ALL {
                            if ui
                                .selectable_label(state.altitude_band == band, band.label())
                                .clicked()
                            {
                                state.altitude_band = band;
                            }
                        }
                    });
            });
        }
        DensityModel::Barometric => {
            ui.add(
                egui::Slider::new(&mut state.altitude_m, 0.0..=TROPOPAUSE_ALTITUDE)
                    .text("Apogee Altitude (m)"),
            );
            // Readout of the density the barometric model resolves to.
            if let Some(chart) = &state.chart {
                ui.label(format!(
                    "Air density: {:.4} kg/m³",
                    chart.result.air_density_kgpm3
                ));
            }
        }
    }

    ui.add_space(8.0);
    if ui.button("Update Plot").clicked() {
        state.recompute();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: density model toggle and status message.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Parachute Sizing");
        ui.separator();

        if ui
            .selectable_label(state.density_model == DensityModel::FixedBand, "Fixed band")
            .clicked()
        {
            state.density_model = DensityModel::FixedBand;
        }
        if ui
            .selectable_label(
                state.density_model == DensityModel::Barometric,
                "Barometric",
            )
            .clicked()
        {
            state.density_model = DensityModel::Barometric;
        }

        ui.separator();

        if let Some(chart) = &state.chart {
            ui.label(format!(
                "{} catalog sizes in range",
                chart.result.matching_sizes.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
