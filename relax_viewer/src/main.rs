use clap::Parser;
use eframe::egui;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use relax_sim::config::{ConfigFile, RelaxationConfig};
use relax_sim::error::Result;
use relax_sim::playback::SystemClock;
use relax_viewer::args::{Action, NewConfigArgs, RunArgs, ViewerArgs};
use relax_viewer::viewer::RelaxationViewer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ViewerArgs::parse();
    let result = match &args.action {
        Some(Action::Run(args)) => run(args),
        Some(Action::NewConfig(args)) => new_config(args),
        None => run(&RunArgs::default()),
    };
    if let Err(e) = result {
        error!("{}",e);
        std::process::exit(1);
    }
}

fn run(args:&RunArgs) -> Result<()> {
    let config = args.resolve()?;
    let seed = args.seed_or_draw(&mut StdRng::from_entropy());
    info!("spin ensemble seed {} (pass --seed {} to reproduce)",seed,seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let viewer = RelaxationViewer::new(config,SystemClock::new(),&mut rng)?;
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1200.0, 640.0)),
        ..Default::default()
    };
    eframe::run_native(
        "NMR Relaxation",
        options,
        Box::new(|_cc| Box::new(viewer)),
    );
    Ok(())
}

fn new_config(args:&NewConfigArgs) -> Result<()> {
    RelaxationConfig::default().to_file(&args.destination)?;
    info!("wrote default config to {:?}",args.destination.with_extension(RelaxationConfig::file_ext()));
    Ok(())
}
