//! Built-in palettes.

use super::Rgb;

/// The colors of a catalog palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colors {
    /// A fixed list of colors.
    Fixed(&'static [Rgb]),
    /// A green gradient computed from the age limit.
    Gradient,
}

/// A named entry in [`PALETTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub colors: Colors,
}

const fn fixed(name: &'static str, colors: &'static [Rgb]) -> CatalogEntry {
    CatalogEntry {
        name,
        colors: Colors::Fixed(colors),
    }
}

const RAINBOW: [Rgb; 16] = [
    Rgb::hex(0xFF0000),
    Rgb::hex(0xFF4000),
    Rgb::hex(0xFF8000),
    Rgb::hex(0xFFBF00),
    Rgb::hex(0xFFFF00),
    Rgb::hex(0xBFFF00),
    Rgb::hex(0x80FF00),
    Rgb::hex(0x40FF00),
    Rgb::hex(0x00FF00),
    Rgb::hex(0x00FF80),
    Rgb::hex(0x00FFBF),
    Rgb::hex(0x00FFFF),
    Rgb::hex(0x0080FF),
    Rgb::hex(0x0000FF),
    Rgb::hex(0x4B0082),
    Rgb::hex(0x8F00FF),
];

const GAME_BOY: [Rgb; 16] = [
    Rgb::hex(0x9BBC0F),
    Rgb::hex(0x332C50),
    Rgb::hex(0x332C50),
    Rgb::hex(0x8BAC0F),
    Rgb::hex(0x306230),
    Rgb::hex(0x0F380F),
    Rgb::hex(0x0F380F),
    Rgb::hex(0x2D5A2D),
    Rgb::hex(0x4F7F4F),
    Rgb::hex(0x8BAC0F),
    Rgb::hex(0x9BBC0F),
    Rgb::hex(0xADCFAD),
    Rgb::hex(0xE0DBCD),
    Rgb::hex(0xA89F94),
    Rgb::hex(0x706B66),
    Rgb::hex(0x2B2B26),
];

const FIRE: [Rgb; 11] = [
    Rgb::hex(0xFFBA08),
    Rgb::hex(0x03073E),
    Rgb::hex(0x370617),
    Rgb::hex(0x6A040F),
    Rgb::hex(0x9D0208),
    Rgb::hex(0xD00000),
    Rgb::hex(0xDC2F02),
    Rgb::hex(0xE85D04),
    Rgb::hex(0xF48C06),
    Rgb::hex(0xFAA307),
    Rgb::hex(0xFFBA08),
];

const TURQUOISE: [Rgb; 16] = [
    Rgb::hex(0xD9ED92),
    Rgb::hex(0xB5E48C),
    Rgb::hex(0x99D98C),
    Rgb::hex(0x76C893),
    Rgb::hex(0x52B69A),
    Rgb::hex(0x34A0A4),
    Rgb::hex(0x168AAD),
    Rgb::hex(0x1A759F),
    Rgb::hex(0x1E6091),
    Rgb::hex(0x184E77),
    Rgb::hex(0x0F4C75),
    Rgb::hex(0x023E8A),
    Rgb::hex(0x03045E),
    Rgb::hex(0x001D3D),
    Rgb::hex(0x000814),
    Rgb::hex(0x30FFFF),
];

const GREEN_BLUE: [Rgb; 14] = [
    Rgb::hex(0xD9ED92),
    Rgb::hex(0xB5E48C),
    Rgb::hex(0x99D98C),
    Rgb::hex(0x76C893),
    Rgb::hex(0x52B69A),
    Rgb::hex(0x34A0A4),
    Rgb::hex(0x168AAD),
    Rgb::hex(0x1A759F),
    Rgb::hex(0x1E6091),
    Rgb::hex(0x184E77),
    Rgb::hex(0x0F4C75),
    Rgb::hex(0x023E8A),
    Rgb::hex(0x03045E),
    Rgb::hex(0xFFFFFF),
];

const PASTEL: [Rgb; 16] = [
    Rgb::hex(0xFBF8CC),
    Rgb::hex(0xFDE4CF),
    Rgb::hex(0xFFCFD2),
    Rgb::hex(0xF1C0E8),
    Rgb::hex(0xCFBAF0),
    Rgb::hex(0xA3C4F3),
    Rgb::hex(0x90DBF4),
    Rgb::hex(0x8EECF5),
    Rgb::hex(0x98F5E1),
    Rgb::hex(0xB9FBC0),
    Rgb::hex(0xB9FFC0),
    Rgb::hex(0xB9FFDD),
    Rgb::hex(0xB9FFEE),
    Rgb::hex(0xB9FFFF),
    Rgb::hex(0x800000),
    Rgb::hex(0xFFFFFF),
];

const PURPLE: [Rgb; 16] = [
    Rgb::hex(0xF72585),
    Rgb::hex(0xB5179E),
    Rgb::hex(0x7209B7),
    Rgb::hex(0x560BAD),
    Rgb::hex(0x480CA8),
    Rgb::hex(0x3A0CA3),
    Rgb::hex(0x3F37C9),
    Rgb::hex(0x4361EE),
    Rgb::hex(0x4895EF),
    Rgb::hex(0x4CC9F0),
    Rgb::hex(0x7209B7),
    Rgb::hex(0x480CA8),
    Rgb::hex(0x3A0CA3),
    Rgb::hex(0x240046),
    Rgb::hex(0x10002B),
    Rgb::hex(0xFFFF30),
];

const WATERMELON: [Rgb; 16] = [
    Rgb::hex(0xEF476F),
    Rgb::hex(0xFFD166),
    Rgb::hex(0x06D6A0),
    Rgb::hex(0x118AB2),
    Rgb::hex(0x073B4C),
    Rgb::hex(0xF72C25),
    Rgb::hex(0xF8961E),
    Rgb::hex(0xF9C74F),
    Rgb::hex(0x90E0EF),
    Rgb::hex(0x0077B6),
    Rgb::hex(0x023047),
    Rgb::hex(0x8ECAE6),
    Rgb::hex(0x219EBC),
    Rgb::hex(0x126782),
    Rgb::hex(0x0A4D68),
    Rgb::hex(0xDDFFFF),
];

const OCEAN_BLUE: [Rgb; 16] = [
    Rgb::hex(0x03045E),
    Rgb::hex(0x023E8A),
    Rgb::hex(0x0077B6),
    Rgb::hex(0x0096C7),
    Rgb::hex(0x00B4D8),
    Rgb::hex(0x48CAE4),
    Rgb::hex(0x90E0EF),
    Rgb::hex(0xADE8F4),
    Rgb::hex(0xCAF0F8),
    Rgb::hex(0xE0F4FF),
    Rgb::hex(0x87CEEB),
    Rgb::hex(0x5F9EA0),
    Rgb::hex(0x4682B4),
    Rgb::hex(0x1E90FF),
    Rgb::hex(0x0000CD),
    Rgb::hex(0xDDFFFF),
];

const WARM: [Rgb; 16] = [
    Rgb::hex(0xFBF8CC),
    Rgb::hex(0xFFF8DC),
    Rgb::hex(0xFFF0F5),
    Rgb::hex(0xFFE4E1),
    Rgb::hex(0xFFDAB9),
    Rgb::hex(0xFFC0CB),
    Rgb::hex(0xFFA07A),
    Rgb::hex(0xFF7F50),
    Rgb::hex(0xFF6347),
    Rgb::hex(0xFF4500),
    Rgb::hex(0xFF0000),
    Rgb::hex(0xDC143C),
    Rgb::hex(0xB22222),
    Rgb::hex(0x8B0000),
    Rgb::hex(0x800000),
    Rgb::hex(0xFFFFFF),
];

/// Index of the procedural gradient in [`PALETTES`].
pub const GRADIENT_INDEX: usize = 5;

/// The palette catalog.
pub static PALETTES: [CatalogEntry; 11] = [
    fixed("Rainbow", &RAINBOW),
    fixed("Game Boy", &GAME_BOY),
    fixed("Fire", &FIRE),
    fixed("Turquoise", &TURQUOISE),
    fixed("Green-Blue", &GREEN_BLUE),
    CatalogEntry {
        name: "Gradient",
        colors: Colors::Gradient,
    },
    fixed("Pastel", &PASTEL),
    fixed("Purple", &PURPLE),
    fixed("Watermelon", &WATERMELON),
    fixed("Ocean Blue", &OCEAN_BLUE),
    fixed("Warm", &WARM),
];
