// Hero factories: one per archetype, each fixing a matched weapon/movement pair

use std::fmt;

use super::{Arbalet, FlyMovement, Movement, RunMovement, Sword, Weapon};

/// Builds the equipment bundle for one hero archetype.
///
/// Which weapon goes with which movement style is decided here and nowhere
/// else: a hero assembled from one factory always carries that factory's
/// pair. Adding an archetype means adding a new factory variant plus its
/// capability types; `Hero` and existing call sites stay untouched.
pub trait HeroFactory: fmt::Debug {
    /// Build the weapon this archetype fights with.
    fn create_weapon(&self) -> Box<dyn Weapon>;

    /// Build the movement style this archetype travels by.
    fn create_movement(&self) -> Box<dyn Movement>;
}

/// Elves fly and shoot from a distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElfFactory;

impl HeroFactory for ElfFactory {
    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(Arbalet)
    }

    fn create_movement(&self) -> Box<dyn Movement> {
        Box::new(FlyMovement)
    }
}

/// Warriors run and strike up close.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarriorFactory;

impl HeroFactory for WarriorFactory {
    fn create_weapon(&self) -> Box<dyn Weapon> {
        Box::new(Sword)
    }

    fn create_movement(&self) -> Box<dyn Movement> {
        Box::new(RunMovement)
    }
}
