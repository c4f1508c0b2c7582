use clap;
use rand::Rng;
use std::path::PathBuf;
use relax_sim::config::{ConfigFile, RelaxationConfig};
use relax_sim::error::Result;

#[derive(clap::Parser,Debug)]
#[command(name = "relax_viewer", about = "Animated NMR T1/T2 relaxation")]
pub struct ViewerArgs {
    /// defaults to run when omitted
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(clap::Subcommand,Debug)]
pub enum Action {
    Run(RunArgs),
    NewConfig(NewConfigArgs),
}

#[derive(clap::Args,Debug,Default,Clone)]
pub struct RunArgs {
    /// config file written by new-config
    #[clap(short, long)]
    pub config:Option<PathBuf>,
    #[clap(long)]
    pub m0:Option<f64>,
    #[clap(long)]
    pub t1:Option<f64>,
    #[clap(long)]
    pub t2:Option<f64>,
    #[clap(long)]
    pub duration:Option<f64>,
    #[clap(long)]
    pub samples:Option<usize>,
    #[clap(long)]
    pub particles:Option<usize>,
    /// seed for the random spin targets
    #[clap(long)]
    pub seed:Option<u64>,
}

#[derive(clap::Args,Debug)]
pub struct NewConfigArgs {
    pub destination:PathBuf,
}

impl RunArgs {

    /// Config file (or defaults) with command line overrides applied, then validated
    pub fn resolve(&self) -> Result<RelaxationConfig> {
        let mut config = match &self.config {
            Some(path) => RelaxationConfig::from_file(path)?,
            None => RelaxationConfig::default(),
        };
        if let Some(v) = self.m0 {config.m0 = v}
        if let Some(v) = self.t1 {config.t1 = v}
        if let Some(v) = self.t2 {config.t2 = v}
        if let Some(v) = self.duration {config.duration = v}
        if let Some(v) = self.samples {config.sample_count = v}
        if let Some(v) = self.particles {config.particle_count = v}
        config.validate()?;
        Ok(config)
    }

    /// --seed when given, otherwise a fresh u64 from entropy so the run can still be reproduced
    pub fn seed_or_draw<R:Rng + ?Sized>(&self,entropy:&mut R) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => entropy.gen(),
        }
    }
}
