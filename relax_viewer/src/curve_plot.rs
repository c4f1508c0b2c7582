use eframe::egui::{Color32, Ui};
use eframe::egui::plot::{Corner, Legend, Line, Plot, PlotPoints};
use relax_sim::config::RelaxationConfig;
use relax_sim::frame::FramePayload;

pub const MZ_COLOR:Color32 = Color32::BLUE;
pub const MXY_COLOR:Color32 = Color32::RED;

/// Mz and Mxy drawn up to the current frame on fixed axes
pub fn magnetization_plot(ui:&mut Ui,frame:&FramePayload,config:&RelaxationConfig){
    ui.label("Magnetization vs Time (s)");
    Plot::new("magnetization_plot")
        .legend(Legend::default().position(Corner::RightTop))
        .include_x(0.0)
        .include_x(config.duration)
        .include_y(0.0)
        .include_y(config.magnetization_y_max)
        .allow_drag(false)
        .allow_zoom(false)
        .view_aspect(1.0)
        .show(ui, |plot_ui| {
            let mz = Line::new(PlotPoints::new(frame.mz_points.clone()))
                .color(MZ_COLOR)
                .name("Longitudinal Magnetization Mz(t)");
            let mxy = Line::new(PlotPoints::new(frame.mxy_points.clone()))
                .color(MXY_COLOR)
                .name("Transverse Magnetization Mxy(t)");
            plot_ui.line(mz);
            plot_ui.line(mxy);
        });
}

pub fn readout(frame:&FramePayload) -> String {
    format!("frame {}   t = {:.3} s   Mz = {:.4}   Mxy = {:.4}",frame.index,frame.time,frame.mz,frame.mxy)
}
