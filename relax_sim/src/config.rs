use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use toml;
use crate::error::{RelaxError, Result};

/// Simulation and display constants. Everything is fixed once the viewer starts
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
#[serde(default)]
pub struct RelaxationConfig {
    /// equilibrium magnetization
    pub m0:f64,
    /// longitudinal relaxation time (s)
    pub t1:f64,
    /// transverse relaxation time (s)
    pub t2:f64,
    /// length of the animated time axis (s)
    pub duration:f64,
    pub sample_count:usize,
    pub particle_count:usize,
    pub tick_interval_ms:u64,
    pub arrow_length:f64,
    pub magnetization_y_max:f64,
    pub spin_axis_limit:f64,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            m0: 1.0,
            t1: 1.0,
            t2: 0.2,
            duration: 3.0,
            sample_count: 500,
            particle_count: 10,
            tick_interval_ms: 30,
            arrow_length: 0.4,
            magnetization_y_max: 1.1,
            spin_axis_limit: 1.0,
        }
    }
}

impl ConfigFile for RelaxationConfig {

    fn to_file(&self, filename: &Path) -> Result<()> {
        let t = toml::to_string_pretty(&self)?;
        utils::write_to_file(filename,&Self::file_ext(),&t)?;
        Ok(())
    }

    fn from_file(filename: &Path) -> Result<Self> {
        let t = utils::read_to_string(filename,&Self::file_ext())?;
        Ok(toml::from_str(&t)?)
    }

    fn file_ext() -> String {
        String::from("relax_config")
    }

}

impl RelaxationConfig {

    /// Checks the preconditions the closed-form curves and the playback clock rely on
    pub fn validate(&self) -> Result<()> {
        positive("m0",self.m0)?;
        positive("t1",self.t1)?;
        positive("t2",self.t2)?;
        positive("duration",self.duration)?;
        positive("arrow_length",self.arrow_length)?;
        positive("magnetization_y_max",self.magnetization_y_max)?;
        positive("spin_axis_limit",self.spin_axis_limit)?;
        if self.sample_count < 2 {
            return Err(RelaxError::invalid("sample_count",self.sample_count,"need at least 2 samples"));
        }
        if self.particle_count == 0 {
            return Err(RelaxError::invalid("particle_count",self.particle_count,"need at least 1 particle"));
        }
        if self.tick_interval_ms == 0 {
            return Err(RelaxError::invalid("tick_interval_ms",self.tick_interval_ms,"must be positive"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn exists(filename:&Path) -> bool {
        filename.with_extension(Self::file_ext()).exists()
    }

}

fn positive(field:&str,value:f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    }else {
        Err(RelaxError::invalid(field,value,"must be a positive finite number"))
    }
}

pub trait ConfigFile: Sized {
    fn to_file(&self, filename:&Path) -> Result<()>;
    fn from_file(filename:&Path) -> Result<Self>;
    fn file_ext() -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid(){
        let c = RelaxationConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.sample_count,500);
        assert_eq!(c.tick_interval(),Duration::from_millis(30));
    }

    #[test]
    fn rejects_non_positive_constants(){
        let mut c = RelaxationConfig::default();
        c.t1 = 0.0;
        assert!(matches!(c.validate(),Err(RelaxError::InvalidConfig{ref field,..}) if field == "t1"));

        let mut c = RelaxationConfig::default();
        c.t2 = -0.2;
        assert!(c.validate().is_err());

        let mut c = RelaxationConfig::default();
        c.duration = f64::NAN;
        assert!(c.validate().is_err());

        let mut c = RelaxationConfig::default();
        c.m0 = 0.0;
        assert!(c.validate().is_err());

        let mut c = RelaxationConfig::default();
        c.sample_count = 1;
        assert!(c.validate().is_err());

        let mut c = RelaxationConfig::default();
        c.particle_count = 0;
        assert!(c.validate().is_err());

        let mut c = RelaxationConfig::default();
        c.tick_interval_ms = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn file_round_trip(){
        let p = std::env::temp_dir().join("relax_sim_config_round_trip");
        let mut c = RelaxationConfig::default();
        c.t2 = 0.35;
        c.particle_count = 7;
        c.to_file(&p).unwrap();
        assert!(RelaxationConfig::exists(&p));
        let r = RelaxationConfig::from_file(&p).unwrap();
        assert_eq!(c,r);
        std::fs::remove_file(p.with_extension(RelaxationConfig::file_ext())).unwrap();
    }

    #[test]
    fn partial_file_falls_back_to_defaults(){
        let c:RelaxationConfig = toml::from_str("t1 = 2.5\n").unwrap();
        assert_eq!(c.t1,2.5);
        assert_eq!(c.t2,0.2);
        assert_eq!(c.sample_count,500);
    }

    #[test]
    fn missing_file_is_io_error(){
        let p = std::env::temp_dir().join("relax_sim_config_that_does_not_exist");
        assert!(matches!(RelaxationConfig::from_file(&p),Err(RelaxError::Io(_))));
    }
}
