use crate::consts;
use rand::{seq::IndexedRandom, Rng};
use ratatui::{
    layout::Position,
    style::{Color, Style},
};

/// A confetti burst fired when the score reaches a multiple of ten.
///
/// The particles are generated once, when the burst fires, and the burst
/// then decays over a fixed number of ticks.  Firing again replaces the
/// burst wholesale, so the effect re-arms for the next crossing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Confetti {
    particles: Vec<Particle>,
    ticks_left: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Particle {
    pos: Position,
    symbol: char,
    color: Color,
}

impl Confetti {
    pub(super) fn burst<R: Rng>(rng: &mut R) -> Confetti {
        let particles = (0..consts::CONFETTI_PARTICLES)
            .map(|_| Particle {
                pos: Position::new(
                    rng.random_range(0..consts::GRID_SIZE),
                    rng.random_range(0..consts::GRID_SIZE),
                ),
                symbol: consts::CONFETTI_SYMBOLS.choose(rng).copied().unwrap_or('*'),
                color: consts::CONFETTI_PALETTE
                    .choose(rng)
                    .copied()
                    .unwrap_or(Color::LightYellow),
            })
            .collect();
        Confetti {
            particles,
            ticks_left: consts::CONFETTI_TICKS,
        }
    }

    /// Age the burst by one tick.  Returns `false` once it has burned out.
    pub(super) fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }

    /// The cells to draw over the board, with their glyphs and styles
    pub(super) fn cells(&self) -> impl Iterator<Item = (Position, char, Style)> + '_ {
        self.particles
            .iter()
            .map(|p| (p.pos, p.symbol, Style::new().fg(p.color)))
    }
}
