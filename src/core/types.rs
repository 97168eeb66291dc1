//! Basic identifier and value types shared across the crate.

/// An opaque handle to a window owned by the host runtime.
///
/// Tatami never dereferences this; it only reads attributes supplied
/// alongside it and hands it back to the runtime in commands.
pub type WindowId = u64;

/// The index of a physical screen, as numbered by the host runtime.
pub type ScreenId = usize;

/// A direction to traverse an ordered sequence in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices, wrapping at the end.
    Forward,
    /// Towards lower indices, wrapping at the start.
    Backward,
}

/// A 24-bit RGB color, stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    /// Returns the color as its `0xRRGGBB` representation.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the (r, g, b) channels of the color.
    pub fn as_rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl From<u32> for Color {
    fn from(from: u32) -> Color {
        // mask off any stray alpha bits
        Color(from & 0x00ff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels() {
        let c = Color::from(0xff123456);

        assert_eq!(c.as_u32(), 0x123456);
        assert_eq!(c.as_rgb(), (0x12, 0x34, 0x56));
    }
}
