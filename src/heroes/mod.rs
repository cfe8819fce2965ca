// Hero assembly system
//
// This module contains everything needed to put a hero together:
// - Weapon capability and its concrete variants
// - Movement capability and its concrete variants
// - Factories that fix which weapon goes with which movement style
// - The hero itself, holding one matched pair

pub mod factory;
pub mod hero;
pub mod movement;
pub mod weapon;

// Re-export commonly used types
pub use factory::{ElfFactory, HeroFactory, WarriorFactory};
pub use hero::Hero;
pub use movement::{FlyMovement, Movement, RunMovement};
pub use weapon::{Arbalet, Sword, Weapon};
