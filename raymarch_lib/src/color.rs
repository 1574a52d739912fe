use nalgebra::{vector, Vector3};

pub type RGB = Vector3<f32>;

pub fn new(r: f32, g: f32, b: f32) -> RGB {
    vector![r, g, b]
}

pub fn zero() -> RGB {
    vector![0.0, 0.0, 0.0]
}

pub fn gray(v: f32) -> RGB {
    vector![v, v, v]
}

/// Clamp each channel to `[0,1]`
pub fn saturate(c: RGB) -> RGB {
    c.map(|ch| ch.clamp(0.0, 1.0))
}

/// Convert a `[0,1]` channel to its 8-bit pixel value
pub fn channel_to_u8(ch: f32) -> u8 {
    (ch * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturate_clamps_both_ends() {
        let c = saturate(new(1.4, -0.5, 0.3));
        assert_eq!(c, new(1.0, 0.0, 0.3));
    }

    #[test]
    fn channel_conversion() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(2.0), 255);
        assert_eq!(channel_to_u8(-1.0), 0);
    }
}
