// Demo showcase: one hero per archetype takes a turn on stdout

use std::io::Write;

use anyhow::Result;
use log::info;

use crate::heroes::{ElfFactory, Hero, HeroFactory, WarriorFactory};

/// The archetypes the showcase presents, in order
fn lineup() -> Vec<(&'static str, &'static dyn HeroFactory)> {
    vec![
        ("Elf", &ElfFactory as &dyn HeroFactory),
        ("Warrior", &WarriorFactory),
    ]
}

/// Run the showcase: for every archetype in the lineup, print a labeled
/// header followed by the hero's travel and hit lines.
pub fn run(out: &mut dyn Write) -> Result<()> {
    for (name, factory) in lineup() {
        info!("Assembling the {} hero", name);
        let hero = Hero::new(factory);

        writeln!(out, "{} actions:", name)?;
        hero.travel(out)?;
        hero.hit(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_TRANSCRIPT: &str = "Elf actions:\n\
         Flying over the battlefield\n\
         Shooting a ranged bolt from the arbalet\n\
         Warrior actions:\n\
         Running across the battlefield\n\
         Striking a melee blow with the sword\n";

    #[test]
    fn test_showcase_prints_six_lines_in_fixed_order() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, EXPECTED_TRANSCRIPT);
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_showcase_output_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first).unwrap();
        run(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lineup_presents_elf_before_warrior() {
        let names: Vec<&str> = lineup().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Elf", "Warrior"]);
    }
}
