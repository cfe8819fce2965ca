// Hero: one weapon and one movement style, assembled from a single factory

use std::io::{self, Write};

use log::debug;

use super::{HeroFactory, Movement, Weapon};

/// A hero composed of one weapon and one movement style.
///
/// Both pieces come from the same factory at construction time, so they are
/// always a matched pair. The hero owns them exclusively for its whole life;
/// nothing is shared or swapped afterwards.
#[derive(Debug)]
pub struct Hero {
    weapon: Box<dyn Weapon>,
    movement: Box<dyn Movement>,
}

impl Hero {
    /// Assemble a hero from `factory`.
    ///
    /// The factory is borrowed for assembly only and not retained. Each of
    /// its two creation operations runs exactly once: weapon first, then
    /// movement.
    pub fn new(factory: &dyn HeroFactory) -> Self {
        let weapon = factory.create_weapon();
        let movement = factory.create_movement();
        debug!(
            "Hero assembled: moves with '{}', attacks with '{}'",
            movement.action(),
            weapon.action()
        );
        Self { weapon, movement }
    }

    /// Move: delegate to the held movement style.
    pub fn travel(&self, out: &mut dyn Write) -> io::Result<()> {
        self.movement.travel(out)
    }

    /// Attack: delegate to the held weapon.
    pub fn hit(&self, out: &mut dyn Write) -> io::Result<()> {
        self.weapon.hit(out)
    }
}
