use eframe::egui;
use log::info;
use rand::Rng;
use relax_sim::config::RelaxationConfig;
use relax_sim::error::Result;
use relax_sim::frame::{FramePayload, RelaxationScene};
use relax_sim::playback::{Clock, PlaybackController, PlaybackMode, TickOutcome};
use relax_sim::spin::SpinEnsemble;
use crate::curve_plot::{magnetization_plot, readout};
use crate::spin_plot::spin_plot;

/// Playback buttons in the bottom panel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Pause => "Pause",
        }
    }
}

/// Insertion order for the right-to-left layout, so Pause hugs the right edge
/// and the row reads "Start Pause"
pub const CONTROLS_RIGHT_TO_LEFT:[Control;2] = [Control::Pause,Control::Start];

/// Owns all animation state. Every event arrives through update() on the UI thread
pub struct RelaxationViewer<C:Clock> {
    config:RelaxationConfig,
    scene:RelaxationScene,
    playback:PlaybackController<C>,
    frame:FramePayload,
}

impl<C:Clock> RelaxationViewer<C> {

    pub fn new<R:Rng + ?Sized>(config:RelaxationConfig,clock:C,rng:&mut R) -> Result<Self> {
        config.validate()?;
        let ensemble = SpinEnsemble::generate(config.particle_count,rng);
        let scene = RelaxationScene::new(&config,ensemble)?;
        let playback = PlaybackController::new(clock,config.duration,config.sample_count);
        let frame = scene.render_frame(0,None);
        info!("viewer ready: m0 = {}, t1 = {} s, t2 = {} s, {} samples over {} s, {} spins",
            config.m0,config.t1,config.t2,config.sample_count,config.duration,config.particle_count);
        Ok(Self {
            config,
            scene,
            playback,
            frame,
        })
    }

    pub fn on_start(&mut self) {
        self.playback.start();
    }

    pub fn on_pause(&mut self) {
        self.playback.pause();
    }

    pub fn on_control(&mut self,control:Control) {
        match control {
            Control::Start => self.on_start(),
            Control::Pause => self.on_pause(),
        }
    }

    /// Timer callback. Redraws whenever the frame moves or playback finishes
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.playback.tick();
        match outcome {
            TickOutcome::Advanced(index) => self.show_frame(index),
            TickOutcome::Finished => self.show_frame(0),
            TickOutcome::Idle => {}
        }
        outcome
    }

    fn show_frame(&mut self,index:usize) {
        self.frame = self.scene.render_frame(index,Some(&self.frame));
    }

    pub fn frame(&self) -> &FramePayload {
        &self.frame
    }

    pub fn mode(&self) -> PlaybackMode {
        self.playback.mode()
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }
}

impl<C:Clock> eframe::App for RelaxationViewer<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(readout(&self.frame));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for control in CONTROLS_RIGHT_TO_LEFT {
                        if ui.button(control.label()).clicked() {
                            self.on_control(control);
                        }
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                magnetization_plot(&mut columns[0],&self.frame,&self.config);
                spin_plot(&mut columns[1],&self.frame,&self.scene,&self.config);
            });
        });

        // the repaint request is the animation timer; it lapses once playback stops
        if self.playback.is_running() {
            ctx.request_repaint_after(self.config.tick_interval());
        }
    }
}
