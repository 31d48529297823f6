//! Colour assignment for new nodes
//!
//! Every node receives a colour once, at construction. The arena draws it
//! from an injected [`ColourSource`] so tests can be deterministic.

use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "#{:02x}{:02x}{:02x}", r, g, b)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Supplies the colour for each newly constructed node
pub trait ColourSource {
    fn next_colour(&mut self) -> Colour;
}

/// Uniformly random colours
pub struct RandomColours {
    rng: StdRng,
}

impl RandomColours {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ColourSource for RandomColours {
    fn next_colour(&mut self) -> Colour {
        Colour::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Every node gets the same colour
#[derive(Debug, Clone, Copy)]
pub struct FixedColour(pub Colour);

impl ColourSource for FixedColour {
    fn next_colour(&mut self) -> Colour {
        self.0
    }
}

/// Cycles through a fixed list of colours
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Vec<Colour>,
    next: usize,
}

impl Palette {
    /// An empty list behaves like `FixedColour(Colour::BLACK)`
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours, next: 0 }
    }
}

impl ColourSource for Palette {
    fn next_colour(&mut self) -> Colour {
        if self.colours.is_empty() {
            return Colour::BLACK;
        }
        let colour = self.colours[self.next % self.colours.len()];
        self.next = self.next.wrapping_add(1);
        colour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_display() {
        assert_eq!(Colour::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn test_seeded_colours_repeat() {
        let mut a = RandomColours::seeded(42);
        let mut b = RandomColours::seeded(42);
        let first: Vec<_> = (0..8).map(|_| a.next_colour()).collect();
        let second: Vec<_> = (0..8).map(|_| b.next_colour()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_palette_cycles() {
        let red = Colour::new(255, 0, 0);
        let blue = Colour::new(0, 0, 255);
        let mut palette = Palette::new(vec![red, blue]);
        assert_eq!(palette.next_colour(), red);
        assert_eq!(palette.next_colour(), blue);
        assert_eq!(palette.next_colour(), red);

        let mut empty = Palette::new(Vec::new());
        assert_eq!(empty.next_colour(), Colour::BLACK);
    }
}
