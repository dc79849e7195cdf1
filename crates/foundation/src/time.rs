/// Duration in whole milliseconds, the unit browser timers work in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Converts a configured, possibly fractional or negative, value.
    ///
    /// Non-finite and negative inputs collapse to zero.
    pub fn from_f64_lossy(ms: f64) -> Self {
        if !ms.is_finite() || ms <= 0.0 {
            return Millis::ZERO;
        }
        Millis(ms.round().min(u32::MAX as f64) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::Millis;

    #[test]
    fn lossy_conversion_rounds_and_clamps() {
        assert_eq!(Millis::from_f64_lossy(120.0), Millis(120));
        assert_eq!(Millis::from_f64_lossy(119.6), Millis(120));
        assert_eq!(Millis::from_f64_lossy(-3.0), Millis::ZERO);
        assert_eq!(Millis::from_f64_lossy(f64::NAN), Millis::ZERO);
        assert_eq!(Millis::from_f64_lossy(1e20), Millis(u32::MAX));
    }
}
