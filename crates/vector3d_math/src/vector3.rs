use std::fmt;

use crate::format;

/// A point or direction in 3-space.
///
/// Components are plain `f64` fields with no domain constraints: NaN,
/// infinities and negative zero pass through every operation following
/// IEEE-754 rules, and no operation ever fails.
///
/// Arithmetic comes in pairs. `add`, `sub`, `mul` and `div` return a new
/// vector; `madd`, `msub`, `mmul` and `mdiv` write into `self` and return it
/// so calls can be chained.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    pub fn zero() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }

    pub fn one() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }

    /// Uniform vector with every component set to `value`.
    ///
    /// A falsy scalar (`0.0`, `-0.0` or NaN) produces the zero vector, so
    /// `splat(f64::NAN)` is `(0, 0, 0)` rather than all-NaN.
    pub fn splat(value: f64) -> Vector3 {
        let value = if value == 0.0 || value.is_nan() {
            0.0
        } else {
            value
        };

        Vector3::new(value, value, value)
    }

    /// `x` from the first scalar, `y` and `z` both from the second.
    pub fn from_pair(x: f64, yz: f64) -> Vector3 {
        Vector3::new(x, yz, yz)
    }

    pub fn from_vector(other: &Vector3) -> Vector3 {
        Vector3::new(other.x, other.y, other.z)
    }

    /// Overwrites every component using the same rules as construction.
    ///
    /// ```
    /// use vector3d_math::Vector3;
    ///
    /// let mut v = Vector3::zero();
    /// v.set(5.0);
    /// assert!(v.equals(Vector3::new(5.0, 5.0, 5.0)));
    /// v.set((1.0, 2.0));
    /// assert!(v.equals(Vector3::new(1.0, 2.0, 2.0)));
    /// ```
    pub fn set(&mut self, value: impl Into<Vector3>) -> &mut Self {
        let value = value.into();
        self.x = value.x;
        self.y = value.y;
        self.z = value.z;
        self
    }

    pub fn copy_to(self, target: &mut Vector3) -> &mut Vector3 {
        target.x = self.x;
        target.y = self.y;
        target.z = self.z;
        target
    }

    pub fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    pub fn madd(&mut self, v: Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    pub fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    pub fn msub(&mut self, v: Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    pub fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }

    pub fn mmul(&mut self, v: Vector3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    /// Element-wise division. Zero divisors yield infinities or NaN.
    pub fn div(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x / v.x, self.y / v.y, self.z / v.z)
    }

    pub fn mdiv(&mut self, v: Vector3) -> &mut Self {
        self.x /= v.x;
        self.y /= v.y;
        self.z /= v.z;
        self
    }

    pub fn dot(self, v: Vector3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Dot product with itself, the squared magnitude.
    pub fn dot_self(self) -> f64 {
        self.dot(self)
    }

    pub fn cross(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn mag(self) -> f64 {
        self.dot_self().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The magnitude goes through [`Vector3::splat`], so a zero magnitude
    /// gives all-NaN components and a NaN magnitude divides by zero.
    pub fn normalize(self) -> Vector3 {
        self.div(Vector3::splat(self.mag()))
    }

    pub fn distance(self, v: Vector3) -> f64 {
        v.sub(self).mag()
    }

    /// Azimuth in the x-z plane, `atan2(z, x)`.
    pub fn theta(self) -> f64 {
        self.z.atan2(self.x)
    }

    /// Elevation, `asin(y / mag)`.
    ///
    /// The ratio is not clamped: a zero vector, or rounding that pushes the
    /// ratio past ±1, yields NaN.
    pub fn phi(self) -> f64 {
        (self.y / self.mag()).asin()
    }

    /// Angle in radians between the two directions.
    ///
    /// The dot product of the normalized vectors is handed to `acos`
    /// unclamped, so near-parallel inputs can overshoot ±1 and return NaN.
    /// Zero vectors also return NaN.
    pub fn angle(self, v: Vector3) -> f64 {
        self.normalize().dot(v.normalize()).acos()
    }

    /// Rescales the magnitude by `scale`: each component becomes
    /// `component * scale / mag`. This is not a uniform multiply; see the
    /// `*` operator for that.
    pub fn scale(self, scale: f64) -> Vector3 {
        let mag = self.mag();
        Vector3::new(
            self.x * scale / mag,
            self.y * scale / mag,
            self.z * scale / mag,
        )
    }

    pub fn abs(self) -> Vector3 {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    /// `self + (v - self) * a`. The factor is broadcast with
    /// [`Vector3::splat`] and may leave `[0, 1]` to extrapolate.
    pub fn lerp(self, v: Vector3, a: f64) -> Vector3 {
        self.add(v.sub(self).mul(Vector3::splat(a)))
    }

    /// Rounds each component to the nearest integer, halves toward
    /// positive infinity.
    pub fn round(self) -> Vector3 {
        Vector3::new(
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.z),
        )
    }

    /// Exact component equality, no tolerance.
    pub fn equals(self, v: Vector3) -> bool {
        self == v
    }

    // Ordering compares magnitudes only, direction is ignored.

    pub fn lt(self, v: Vector3) -> bool {
        self.mag() < v.mag()
    }

    pub fn lte(self, v: Vector3) -> bool {
        self.mag() <= v.mag()
    }

    pub fn gt(self, v: Vector3) -> bool {
        self.mag() > v.mag()
    }

    pub fn gte(self, v: Vector3) -> bool {
        self.mag() >= v.mag()
    }

    /// `"x,y,z"` with exactly `digits` fractional digits per component.
    ///
    /// `digits` is clamped to 100, so every `u8` renders without failing.
    pub fn to_fixed(self, digits: u8) -> String {
        format!(
            "{},{},{}",
            format::fixed(self.x, digits),
            format::fixed(self.y, digits),
            format::fixed(self.z, digits)
        )
    }

    /// Debug form, `<Vector3D x: X y: Y z: Z>`.
    pub fn inspect(self) -> String {
        format!("{:?}", self)
    }
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    if rounded == 0.0 && value.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_number(f, self.x)?;
        f.write_str(",")?;
        format::write_number(f, self.y)?;
        f.write_str(",")?;
        format::write_number(f, self.z)
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Vector3D x: ")?;
        format::write_number(f, self.x)?;
        f.write_str(" y: ")?;
        format::write_number(f, self.y)?;
        f.write_str(" z: ")?;
        format::write_number(f, self.z)?;
        f.write_str(">")
    }
}

impl From<f64> for Vector3 {
    fn from(value: f64) -> Self {
        Vector3::splat(value)
    }
}

impl From<(f64, f64)> for Vector3 {
    fn from((x, yz): (f64, f64)) -> Self {
        Vector3::from_pair(x, yz)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}
