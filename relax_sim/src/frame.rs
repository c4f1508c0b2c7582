use log::warn;
use crate::config::RelaxationConfig;
use crate::error::Result;
use crate::matmath::Vector;
use crate::signal::SignalModel;
use crate::spin::{SpinEnsemble, SpinKind};

/// Everything the viewer needs to draw one instant of the animation
#[derive(Clone, Debug, PartialEq)]
pub struct FramePayload {
    pub index:usize,
    pub time:f64,
    pub mz:f64,
    pub mxy:f64,
    /// [t, Mz] for samples 0..=index
    pub mz_points:Vec<[f64;2]>,
    /// [t, Mxy] for samples 0..=index
    pub mxy_points:Vec<[f64;2]>,
    /// one unit vector per spin, in ensemble order
    pub directions:Vec<Vector>,
}

impl FramePayload {
    pub fn directions_of(&self,scene:&RelaxationScene,kind:SpinKind) -> Vec<Vector> {
        scene.ensemble().spins().iter().zip(self.directions.iter())
            .filter(|(s,_)| s.kind == kind)
            .map(|(_,d)| *d)
            .collect()
    }
}

/// Curves and spins bundled together so a frame can be derived from an index alone
#[derive(Clone, Debug)]
pub struct RelaxationScene {
    signal:SignalModel,
    ensemble:SpinEnsemble,
}

impl RelaxationScene {

    /// Refuses a config that fails validation, so every scene has at least 2 samples
    pub fn new(config:&RelaxationConfig,ensemble:SpinEnsemble) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            signal:SignalModel::new(config),
            ensemble,
        })
    }

    pub fn signal(&self) -> &SignalModel {
        &self.signal
    }

    pub fn ensemble(&self) -> &SpinEnsemble {
        &self.ensemble
    }

    /// Builds the payload for frame_index (clamped to the last sample).
    ///
    /// Spins are blended from their initial to their target direction using
    /// Mz at that instant as the blend factor. This is a visual easing
    /// shortcut and not spin dynamics. When a blend cancels to the zero
    /// vector the spin keeps its direction from `previous`, or its initial
    /// direction if there is no previous frame.
    pub fn render_frame(&self,frame_index:usize,previous:Option<&FramePayload>) -> FramePayload {
        let index = frame_index.min(self.signal.last_index());
        let f = self.signal.mz()[index];
        let directions = self.ensemble.spins().iter().enumerate().map(|(i,spin)|{
            match spin.direction_at(f) {
                Some(d) => d,
                None => {
                    let fallback = previous
                        .and_then(|p| p.directions.get(i).copied())
                        .unwrap_or(spin.initial);
                    warn!("spin {} blend is degenerate at frame {}, keeping {}",i,index,fallback);
                    fallback
                }
            }
        }).collect();
        FramePayload {
            index,
            time:self.signal.time_axis()[index],
            mz:f,
            mxy:self.signal.mxy()[index],
            mz_points:self.signal.mz_points(index),
            mxy_points:self.signal.mxy_points(index),
            directions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::spin::Spin;

    fn scene() -> RelaxationScene {
        let c = RelaxationConfig::default();
        let e = SpinEnsemble::generate(c.particle_count,&mut StdRng::seed_from_u64(7));
        RelaxationScene::new(&c,e).unwrap()
    }

    #[test]
    fn frame_zero_is_a_single_point_at_initial_directions(){
        let s = scene();
        let f = s.render_frame(0,None);
        assert_eq!(f.index,0);
        assert_eq!(f.time,0.0);
        assert_eq!(f.mz_points.len(),1);
        assert_eq!(f.mxy_points.len(),1);
        s.ensemble().spins().iter().zip(f.directions.iter()).for_each(|(spin,d)|{
            assert_eq!(*d,spin.initial);
        });
    }

    #[test]
    fn every_direction_is_unit_length(){
        let s = scene();
        let mut previous:Option<FramePayload> = None;
        for i in 0..s.signal().len() {
            let f = s.render_frame(i,previous.as_ref());
            assert_eq!(f.directions.len(),s.ensemble().len());
            f.directions.iter().for_each(|d|{
                assert!((d.mag() - 1.0).abs() < 1.0E-9,"frame {} direction {}",i,d);
            });
            previous = Some(f);
        }
    }

    #[test]
    fn index_past_end_is_clamped(){
        let s = scene();
        let f = s.render_frame(10_000,None);
        assert_eq!(f.index,s.signal().last_index());
        assert_eq!(f.mz_points.len(),s.signal().len());
    }

    #[test]
    fn degenerate_blend_keeps_previous_direction(){
        // m0 = 1, t1 = 1: Mz crosses 0.5 at t = ln 2, so place a sample exactly there
        let mut c = RelaxationConfig::default();
        c.duration = 2.0*std::f64::consts::LN_2;
        c.sample_count = 3;
        let spin = Spin::new(SpinKind::Alpha,Vector::down());
        let s = RelaxationScene::new(&c,SpinEnsemble::from_spins(vec![spin])).unwrap();
        assert!((s.signal().mz()[1] - 0.5).abs() < 1.0E-12);

        let previous = FramePayload {
            directions:vec![Vector::new(1.0,0.0)],
            ..s.render_frame(0,None)
        };
        let f = s.render_frame(1,Some(&previous));
        assert_eq!(f.directions[0],Vector::new(1.0,0.0));

        let f = s.render_frame(1,None);
        assert_eq!(f.directions[0],Vector::up());
    }

    #[test]
    fn unvalidated_config_is_refused(){
        let mut c = RelaxationConfig::default();
        c.sample_count = 0;
        let e = SpinEnsemble::generate(2,&mut StdRng::seed_from_u64(1));
        assert!(RelaxationScene::new(&c,e.clone()).is_err());
        c.sample_count = 1;
        assert!(RelaxationScene::new(&c,e).is_err());
    }

    #[test]
    fn directions_split_by_kind(){
        let s = scene();
        let f = s.render_frame(100,None);
        assert_eq!(f.directions_of(&s,SpinKind::Alpha).len(),5);
        assert_eq!(f.directions_of(&s,SpinKind::Beta).len(),5);
    }
}
