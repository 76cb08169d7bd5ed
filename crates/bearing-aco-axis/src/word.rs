//! AXI4-Stream words
//!
//! Only TDATA, TKEEP and TLAST are modelled; the kernel ignores the other
//! sideband signals.

/// TKEEP for a fully valid 96-bit input word
pub const INPUT_KEEP: u16 = 0xFFF;

/// TKEEP for a fully valid 32-bit output word
pub const OUTPUT_KEEP: u8 = 0xF;

const LANE_MASK: u128 = 0xFFFF_FFFF;

/// One input record: x in bits [31:0], y in [63:32], bearing in [95:64]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputWord {
    /// 96 significant bits
    pub data: u128,
    pub keep: u16,
    pub last: bool,
}

impl InputWord {
    /// Pack three floats into a fully valid word
    pub fn pack(ownship_x: f32, ownship_y: f32, bearing: f32, last: bool) -> Self {
        Self::from_lanes(
            [ownship_x.to_bits(), ownship_y.to_bits(), bearing.to_bits()],
            last,
        )
    }

    /// Build a word from its three raw 32-bit lanes, lowest first
    pub fn from_lanes(lanes: [u32; 3], last: bool) -> Self {
        let data = u128::from(lanes[0])
            | (u128::from(lanes[1]) << 32)
            | (u128::from(lanes[2]) << 64);
        Self {
            data,
            keep: INPUT_KEEP,
            last,
        }
    }

    /// Raw 32-bit lanes, lowest first
    pub fn lanes(&self) -> [u32; 3] {
        [
            (self.data & LANE_MASK) as u32,
            ((self.data >> 32) & LANE_MASK) as u32,
            ((self.data >> 64) & LANE_MASK) as u32,
        ]
    }

    pub fn ownship_x(&self) -> f32 {
        f32::from_bits(self.lanes()[0])
    }

    pub fn ownship_y(&self) -> f32 {
        f32::from_bits(self.lanes()[1])
    }

    pub fn bearing(&self) -> f32 {
        f32::from_bits(self.lanes()[2])
    }

    /// `(ownship_x, ownship_y, bearing)`
    pub fn unpack(&self) -> (f32, f32, f32) {
        (self.ownship_x(), self.ownship_y(), self.bearing())
    }
}

/// One output value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutputWord {
    pub data: u32,
    pub keep: u8,
    pub last: bool,
}

impl OutputWord {
    /// Wrap a float in a fully valid word
    pub fn from_value(value: f32, last: bool) -> Self {
        Self {
            data: value.to_bits(),
            keep: OUTPUT_KEEP,
            last,
        }
    }

    pub fn value(&self) -> f32 {
        f32::from_bits(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_layout() {
        let word = InputWord::pack(1.0, 2.0, -0.5, true);
        assert_eq!(word.data & 0xFFFF_FFFF, u128::from(1.0f32.to_bits()));
        assert_eq!((word.data >> 32) & 0xFFFF_FFFF, u128::from(2.0f32.to_bits()));
        assert_eq!(word.data >> 64, u128::from((-0.5f32).to_bits()));
        assert_eq!(word.keep, 0xFFF);
        assert!(word.last);
    }

    #[test]
    fn test_unpack() {
        let word = InputWord::pack(12.5, -3.25, 1.0e-3, false);
        assert_eq!(word.unpack(), (12.5, -3.25, 1.0e-3));
        assert!(!word.last);
    }

    #[test]
    fn test_nan_bits_preserved() {
        let nan = f32::from_bits(0x7FC0_0001);
        let word = InputWord::pack(nan, 0.0, -0.0, false);
        assert_eq!(word.lanes(), [0x7FC0_0001, 0, 0x8000_0000]);
    }

    #[test]
    fn test_output_word() {
        let word = OutputWord::from_value(3.5, false);
        assert_eq!(word.data, 0x4060_0000);
        assert_eq!(word.keep, 0xF);
        assert_eq!(word.value(), 3.5);
    }
}
