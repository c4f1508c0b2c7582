use std::fmt;
use log::{debug, warn};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use crate::matmath::Vector;

/// Initial orientation class of a spin
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum SpinKind {
    /// aligned with the field (+y)
    Alpha,
    /// anti-aligned (-y)
    Beta,
}

impl SpinKind {
    pub fn label(&self) -> &'static str {
        match self {
            SpinKind::Alpha => "Alpha",
            SpinKind::Beta => "Beta",
        }
    }

    pub fn initial_direction(&self) -> Vector {
        match self {
            SpinKind::Alpha => Vector::up(),
            SpinKind::Beta => Vector::down(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Spin{
    pub kind:SpinKind,
    pub initial:Vector,
    pub target:Vector,
}

impl Spin{
    pub fn new(kind:SpinKind,target:Vector) -> Spin{
        return Spin{
            kind,
            initial:kind.initial_direction(),
            target,
        }
    }

    /// Direction after blending initial toward target by f. None when the blend cancels out
    pub fn direction_at(&self,f:f64) -> Option<Vector>{
        self.initial.lerp(&self.target,f).normalized()
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "kind:{}\ninitial:{}\ntarget:{}",
        self.kind.label(),self.initial,self.target)
    }
}

impl PartialEq for Spin {
    fn eq(&self, other: &Self) -> bool {
        return self.kind == other.kind &&
        self.initial == other.initial &&
        self.target == other.target;
    }
}

/// Fixed set of spins drawn once at startup
#[derive(Clone, Debug)]
pub struct SpinEnsemble{
    spins:Vec<Spin>,
}

impl SpinEnsemble{

    /// First n/2 spins (floor) are alpha, the remainder beta. Targets are random unit vectors
    pub fn generate<R:Rng + ?Sized>(n:usize,rng:&mut R) -> SpinEnsemble{
        let n_alpha = n/2;
        let spins = (0..n).map(|i|{
            let kind = if i < n_alpha {SpinKind::Alpha} else {SpinKind::Beta};
            Spin::new(kind,random_direction(rng))
        }).collect();
        debug!("generated spin ensemble: {} alpha, {} beta",n_alpha,n - n_alpha);
        SpinEnsemble{spins}
    }

    pub fn from_spins(spins:Vec<Spin>) -> SpinEnsemble{
        SpinEnsemble{spins}
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn count(&self,kind:SpinKind) -> usize {
        self.spins.iter().filter(|s| s.kind == kind).count()
    }
}

/// Isotropic 2D unit vector from two standard normal draws. Zero-length draws are redrawn
pub fn random_direction<R:Rng + ?Sized>(rng:&mut R) -> Vector {
    first_unit(|| Vector::new(rng.sample(StandardNormal),rng.sample(StandardNormal)))
}

fn first_unit(mut draw:impl FnMut() -> Vector) -> Vector {
    loop {
        let v = draw();
        match v.normalized() {
            Some(u) => return u,
            None => warn!("discarding degenerate direction draw {}",v),
        }
    }
}
