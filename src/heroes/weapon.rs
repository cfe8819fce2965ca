// Weapon capability and its concrete variants

use std::fmt;
use std::io::{self, Write};

/// Something a hero can attack with.
///
/// Implementors are stateless: the only thing a weapon carries is the fixed
/// line describing its attack. `hit` is provided on top of that line, so a
/// new weapon only has to supply `action`.
pub trait Weapon: fmt::Debug {
    /// The fixed line describing this weapon's attack.
    fn action(&self) -> &'static str;

    /// Perform the attack by writing the action line to `out`.
    fn hit(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.action())
    }
}

/// Ranged weapon: fires bolts from a distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arbalet;

impl Weapon for Arbalet {
    fn action(&self) -> &'static str {
        "Shooting a ranged bolt from the arbalet"
    }
}

/// Melee weapon: strikes up close.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sword;

impl Weapon for Sword {
    fn action(&self) -> &'static str {
        "Striking a melee blow with the sword"
    }
}
