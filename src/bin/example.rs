//! Laminate example - eight-ply cross-ply layup

use std::sync::Arc;

use anyhow::Context;
use laminate_abd::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Laminate Example: [90/90/0/90/90/0/90/90] ===\n");

    // Illustrative reduced stiffness, stress units
    let ply = Arc::new(
        Ply::from_rows(0.125, [[20.0, 1.0, 0.0], [1.0, 1.5, 0.0], [0.0, 0.0, 0.8]])
            .with_name("UD"),
    );

    let angles = [90.0, 90.0, 0.0, 90.0, 90.0, 0.0, 90.0, 90.0];
    let laminate: Laminate = Laminate::uniform(&angles, &ply).context("Failed to build laminate")?;

    println!("{}\n", laminate);
    println!("Total thickness: {}", laminate.total_thickness());
    println!("Ply boundaries:  {:?}", laminate.z_position());
    println!("Symmetric:       {}\n", laminate.is_symmetric());

    laminate.print_abd()?;

    // The same layup read from a layup document
    let json = laminate.to_json()?;
    let reread = Laminate::from_json(&json).context("Failed to read layup document")?;
    println!("\nLayup document round trip equal: {}", reread == laminate);

    Ok(())
}
