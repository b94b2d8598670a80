/// Error returned when a colour channel lies outside `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("colour channel {channel} out of range: {value} (expected 0..=255)")]
pub struct ChannelOutOfRange {
    /// `'r'`, `'g'` or `'b'`.
    pub channel: char,
    pub value: i32,
}

/// Opaque 8-bit RGB colour.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from untrusted integer channels.
    pub fn try_from_channels(r: i32, g: i32, b: i32) -> Result<Self, ChannelOutOfRange> {
        Ok(Self::new(channel('r', r)?, channel('g', g)?, channel('b', b)?))
    }
}

impl TryFrom<(i32, i32, i32)> for Rgb {
    type Error = ChannelOutOfRange;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Rgb::try_from_channels(r, g, b)
    }
}

fn channel(name: char, value: i32) -> Result<u8, ChannelOutOfRange> {
    u8::try_from(value).map_err(|_| ChannelOutOfRange { channel: name, value })
}
