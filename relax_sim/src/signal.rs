use crate::config::RelaxationConfig;

/// Closed-form relaxation curves sampled on a fixed time axis.
/// Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct SignalModel {
    m0:f64,
    time_axis:Vec<f64>,
    mz:Vec<f64>,
    mxy:Vec<f64>,
}

/** Longitudinal recovery from a saturated start: Mz(t) = M0 (1 - e^(-t/T1)) */
pub fn longitudinal(m0:f64,t1:f64,t:f64) -> f64 {
    m0*(1.0 - (-t/t1).exp())
}

/** Transverse decay: Mxy(t) = M0 e^(-t/T2) */
pub fn transverse(m0:f64,t2:f64,t:f64) -> f64 {
    m0*(-t/t2).exp()
}

impl SignalModel {

    /// Expects a validated config (positive t1, t2, duration and at least 2 samples).
    /// Use `RelaxationScene::new` to get that check.
    ///
    /// # Panics
    /// Does not panic itself, but with `sample_count = 0` the curves are empty
    /// and rendering any frame from them panics.
    pub fn new(config:&RelaxationConfig) -> Self {
        let time_axis = utils::linspace(0.0,config.duration,config.sample_count);
        let mz = time_axis.iter().map(|t| longitudinal(config.m0,config.t1,*t)).collect();
        let mxy = time_axis.iter().map(|t| transverse(config.m0,config.t2,*t)).collect();
        Self {
            m0:config.m0,
            time_axis,
            mz,
            mxy,
        }
    }

    pub fn m0(&self) -> f64 {
        self.m0
    }

    pub fn time_axis(&self) -> &[f64] {
        &self.time_axis
    }

    pub fn mz(&self) -> &[f64] {
        &self.mz
    }

    pub fn mxy(&self) -> &[f64] {
        &self.mxy
    }

    pub fn len(&self) -> usize {
        self.time_axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_axis.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// [t, Mz] pairs for samples 0..=index
    pub fn mz_points(&self,index:usize) -> Vec<[f64;2]> {
        pairs(&self.time_axis,&self.mz,index)
    }

    /// [t, Mxy] pairs for samples 0..=index
    pub fn mxy_points(&self,index:usize) -> Vec<[f64;2]> {
        pairs(&self.time_axis,&self.mxy,index)
    }
}

fn pairs(x:&[f64],y:&[f64],index:usize) -> Vec<[f64;2]> {
    x.iter().zip(y.iter()).take(index + 1).map(|(x,y)| [*x,*y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SignalModel {
        SignalModel::new(&RelaxationConfig::default())
    }

    #[test]
    fn curves_match_time_axis(){
        let m = model();
        assert_eq!(m.len(),500);
        assert_eq!(m.mz().len(),m.len());
        assert_eq!(m.mxy().len(),m.len());
        assert!((m.time_axis()[m.last_index()] - 3.0).abs() < 1.0E-12);
    }

    #[test]
    fn initial_values_are_exact(){
        let m = model();
        assert_eq!(m.mz()[0],0.0);
        assert_eq!(m.mxy()[0],m.m0());
    }

    #[test]
    fn curves_are_bounded_and_monotonic(){
        let m = model();
        for i in 0..m.len() {
            assert!(m.mz()[i] >= 0.0 && m.mz()[i] <= m.m0());
            assert!(m.mxy()[i] >= 0.0 && m.mxy()[i] <= m.m0());
        }
        for i in 1..m.len() {
            assert!(m.mz()[i] >= m.mz()[i-1],"mz decreased at {}",i);
            assert!(m.mxy()[i] <= m.mxy()[i-1],"mxy increased at {}",i);
        }
    }

    #[test]
    fn last_sample_matches_closed_form(){
        let mut c = RelaxationConfig::default();
        c.sample_count = 20000;
        c.m0 = 2.0;
        let m = SignalModel::new(&c);
        let expected = c.m0*(1.0 - (-c.duration/c.t1).exp());
        assert!((m.mz()[m.last_index()] - expected).abs() < 1.0E-9);
    }

    #[test]
    fn partial_points_grow_with_index(){
        let m = model();
        assert_eq!(m.mz_points(0),vec![[0.0,0.0]]);
        assert_eq!(m.mxy_points(0),vec![[0.0,1.0]]);
        assert_eq!(m.mz_points(10).len(),11);
        assert_eq!(m.mxy_points(10_000).len(),m.len());
    }
}
