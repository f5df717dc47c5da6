use crate::vector3::Vector3;

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec3> for Vector3 {
    fn from(v: glam::DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Vector3> for glam::DVec3 {
    fn from(v: Vector3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use crate::Vector3;

    #[test]
    fn into_plain_tuples() {
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(<(f64, f64, f64)>::from(v), (1.0, 2.0, 3.0));
        assert!(Vector3::from(<[f64; 3]>::from(v)).equals(v));
    }

    #[cfg(feature = "glam")]
    #[test]
    fn glam_round_trip_preserves_specials() {
        let v = Vector3::new(-0.0, f64::INFINITY, 1e-300);
        let g: glam::DVec3 = v.into();

        assert_eq!(g, glam::DVec3::new(-0.0, f64::INFINITY, 1e-300));
        assert!(Vector3::from(g).equals(v));
        assert!(Vector3::from(g).x.is_sign_negative());
    }
}
