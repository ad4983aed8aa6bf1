//! Fixed eight-entry color palette cycled by insertion index.
//!
//! Each entry carries two parallel representations: a utility-class gradient
//! token (stored on areas, emitted by the Tailwind generator) and a literal CSS
//! gradient (emitted by the stylesheet generator). `preview` is the RGB the
//! terminal renderer paints the area with.

pub const PALETTE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub class: &'static str,
    pub gradient: &'static str,
    pub preview: (u8, u8, u8),
}

pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    PaletteEntry {
        name: "violet",
        class: "bg-gradient-to-br from-violet-500 to-purple-600",
        gradient: "linear-gradient(to bottom right, #8b5cf6, #9333ea)",
        preview: (0x8b, 0x5c, 0xf6),
    },
    PaletteEntry {
        name: "sky",
        class: "bg-gradient-to-br from-sky-400 to-blue-500",
        gradient: "linear-gradient(to bottom right, #38bdf8, #3b82f6)",
        preview: (0x38, 0xbd, 0xf8),
    },
    PaletteEntry {
        name: "emerald",
        class: "bg-gradient-to-br from-emerald-400 to-teal-500",
        gradient: "linear-gradient(to bottom right, #34d399, #14b8a6)",
        preview: (0x34, 0xd3, 0x99),
    },
    PaletteEntry {
        name: "amber",
        class: "bg-gradient-to-br from-amber-400 to-orange-500",
        gradient: "linear-gradient(to bottom right, #fbbf24, #f97316)",
        preview: (0xfb, 0xbf, 0x24),
    },
    PaletteEntry {
        name: "rose",
        class: "bg-gradient-to-br from-rose-400 to-pink-500",
        gradient: "linear-gradient(to bottom right, #fb7185, #ec4899)",
        preview: (0xfb, 0x71, 0x85),
    },
    PaletteEntry {
        name: "indigo",
        class: "bg-gradient-to-br from-indigo-400 to-blue-600",
        gradient: "linear-gradient(to bottom right, #818cf8, #2563eb)",
        preview: (0x81, 0x8c, 0xf8),
    },
    PaletteEntry {
        name: "lime",
        class: "bg-gradient-to-br from-lime-400 to-green-500",
        gradient: "linear-gradient(to bottom right, #a3e635, #22c55e)",
        preview: (0xa3, 0xe6, 0x35),
    },
    PaletteEntry {
        name: "fuchsia",
        class: "bg-gradient-to-br from-fuchsia-400 to-pink-600",
        gradient: "linear-gradient(to bottom right, #e879f9, #db2777)",
        preview: (0xe8, 0x79, 0xf9),
    },
];

/// Index into `PALETTE`. Always `< PALETTE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(u8);

impl ColorToken {
    /// Color for the area at registry position `index` (0-based).
    pub fn for_index(index: usize) -> Self {
        Self((index % PALETTE_SIZE) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn entry(self) -> &'static PaletteEntry {
        &PALETTE[self.index()]
    }

    pub fn class(self) -> &'static str {
        self.entry().class
    }
}
