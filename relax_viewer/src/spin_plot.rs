use eframe::egui::{Color32, Ui};
use eframe::egui::plot::{Arrows, Corner, Legend, Plot, PlotPoints};
use relax_sim::config::RelaxationConfig;
use relax_sim::frame::{FramePayload, RelaxationScene};
use relax_sim::spin::SpinKind;

pub fn kind_color(kind:SpinKind) -> Color32 {
    match kind {
        SpinKind::Alpha => Color32::BLUE,
        SpinKind::Beta => Color32::YELLOW,
    }
}

/// Arrow tips for one spin class, scaled to the display length
pub fn arrow_tips(frame:&FramePayload,scene:&RelaxationScene,kind:SpinKind,length:f64) -> Vec<[f64;2]> {
    frame.directions_of(scene,kind).iter().map(|d| (*d*length).to_pair()).collect()
}

/// One arrow per spin from the origin, alpha and beta as separate legend entries
pub fn spin_plot(ui:&mut Ui,frame:&FramePayload,scene:&RelaxationScene,config:&RelaxationConfig){
    let lim = config.spin_axis_limit;
    ui.label("Spin directions (X, Y)");
    Plot::new("spin_plot")
        .legend(Legend::default().position(Corner::RightTop))
        .include_x(-lim)
        .include_x(lim)
        .include_y(-lim)
        .include_y(lim)
        .data_aspect(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .view_aspect(1.0)
        .show(ui, |plot_ui| {
            [SpinKind::Alpha,SpinKind::Beta].iter().for_each(|kind|{
                let tips = arrow_tips(frame,scene,*kind,config.arrow_length);
                if tips.is_empty() {
                    return
                }
                let origins = vec![[0.0,0.0];tips.len()];
                let arrows = Arrows::new(PlotPoints::new(origins),PlotPoints::new(tips))
                    .color(kind_color(*kind))
                    .name(kind.label());
                plot_ui.arrows(arrows);
            });
        });
}
