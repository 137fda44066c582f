use glam::Vec3;

/// Slope of the segment from `a` to `b`, projected onto the x/y plane
#[inline(always)]
pub fn pitch(a: Vec3, b: Vec3) -> f32 {
    (b.y - a.y) / (b.x - a.x)
}

/// One pitch per segment. The last vertex has no forward slope, so
/// `count` vertices give `count - 1` values.
pub fn segment_pitches(vertices: &[Vec3]) -> Vec<f32> {
    vertices.windows(2).map(|w| pitch(w[0], w[1])).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchSign {
    Rising,
    Flat,
    Falling,
}

impl PitchSign {
    /// NaN (a 0/0 step) counts as flat
    pub fn of(pitch: f32) -> Self {
        if pitch > 0.0 {
            PitchSign::Rising
        } else if pitch < 0.0 {
            PitchSign::Falling
        } else {
            PitchSign::Flat
        }
    }

    /// Value of the shader's sign uniform; only a positive value draws green
    pub fn uniform_value(self) -> f32 {
        match self {
            PitchSign::Rising => 1.0,
            PitchSign::Flat => 0.0,
            PitchSign::Falling => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_less_than_vertices() {
        let v = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        assert_eq!(segment_pitches(&v), vec![2.0, -1.0]);
        assert!(segment_pitches(&v[..1]).is_empty());
    }

    #[test]
    fn sign_tie_break() {
        assert_eq!(PitchSign::of(0.5), PitchSign::Rising);
        assert_eq!(PitchSign::of(-0.5), PitchSign::Falling);
        assert_eq!(PitchSign::of(0.0), PitchSign::Flat);
        assert_eq!(PitchSign::of(-0.0), PitchSign::Flat);
        assert_eq!(PitchSign::of(f32::NAN), PitchSign::Flat);
        assert_eq!(PitchSign::of(f32::INFINITY), PitchSign::Rising);
        assert!(PitchSign::Flat.uniform_value() <= 0.0);
    }
}
