// Movement capability and its concrete variants

use std::fmt;
use std::io::{self, Write};

/// A style of getting around the battlefield.
///
/// Same shape as `Weapon`: stateless variants, one fixed action line, and a
/// provided operation that writes it. The operation is named `travel`
/// because `move` is a reserved word in Rust.
pub trait Movement: fmt::Debug {
    /// The fixed line describing this movement style.
    fn action(&self) -> &'static str;

    /// Perform the move by writing the action line to `out`.
    fn travel(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.action())
    }
}

/// Airborne movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyMovement;

impl Movement for FlyMovement {
    fn action(&self) -> &'static str {
        "Flying over the battlefield"
    }
}

/// Ground movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunMovement;

impl Movement for RunMovement {
    fn action(&self) -> &'static str {
        "Running across the battlefield"
    }
}
