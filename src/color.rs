// Simple color struct, created from an unsigned 32 representing RRGGBBAA

/// Cyan accent of the page background.
pub const PRIMARY: Color = Color::from_u32(0x00ffd5ff);
/// Violet accent of the page background.
pub const SECONDARY: Color = Color::from_u32(0x7c5cffff);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/shadow styles take CSS color strings. Opaque colors use the
    // short hex form, anything translucent falls back to rgba().
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}
