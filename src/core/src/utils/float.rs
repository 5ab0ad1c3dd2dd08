pub struct FloatUtils;

impl FloatUtils {
    /// Rounds to two decimal places, half away from zero.
    #[inline]
    pub fn round2(value: f32) -> f32 {
        (value * 100.0).round() / 100.0
    }
}
