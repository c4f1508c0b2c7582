use std::ops;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Magnitudes at or below this are treated as the zero vector
pub const ZERO_TOLERANCE:f64 = 1.0E-12;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct Vector{
    pub x:f64,
    pub y:f64,
}

impl Vector {
    /** Returns a new vector where are fields are defined up-front */
    pub fn new(x:f64,y:f64) -> Vector {
        return Vector{x:x,y:y};
    }

    pub fn up() -> Vector {
        return Vector::new(0.0,1.0);
    }

    pub fn down() -> Vector {
        return Vector::new(0.0,-1.0);
    }

    pub fn mag(&self) -> f64{
        return (self.x*self.x + self.y*self.y).sqrt();
    }

    /** Unit vector pointing the same way, or None for a (near) zero or non-finite vector */
    pub fn normalized(&self) -> Option<Vector>{
        let m = self.mag();
        if !m.is_finite() || m <= ZERO_TOLERANCE {
            return None;
        }
        return Some(*self/m);
    }

    /** Linear blend between self (f = 0) and other (f = 1) */
    pub fn lerp(&self,other:&Vector,f:f64) -> Vector{
        return (1.0 - f)*(*self) + f*(*other);
    }

    pub fn to_pair(&self) -> [f64;2]{
        [self.x,self.y]
    }

    pub fn approx_eq(&self,other:&Vector,tol:f64) -> bool{
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

/** Vector addition */
impl ops::Add<Vector> for Vector {
    type Output = Vector;
    fn add(self, _rhs:Vector) -> Vector {
        return Vector::new(self.x + _rhs.x,self.y + _rhs.y);
    }
}

/** Vector scalar division. Callers guard against zero through normalized() */
impl ops::Div<f64> for Vector {
    type Output = Vector;
    fn div(self, _rhs:f64) -> Vector {
        return Vector::new(self.x/_rhs,self.y/_rhs);
    }
}

/** Vector-scalar multiplication */
impl ops::Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self,_rhs:Vector) -> Vector {
        return Vector::new(self*_rhs.x, self*_rhs.y);
    }
}

/** Vector-scalar multiplication (commutative) */
impl ops::Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self,_rhs:f64) -> Vector {
        return Vector::new(self.x*_rhs, self.y*_rhs);
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x,self.y)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

/** Determines precision conditions for equality to 1e-9 */
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        return self.approx_eq(other,1.0E-9);
    }
}
