//! Palettes command - list the built-in palettes.

use anyhow::Result;

use quadlens::Palette;

fn describe(palette: &Palette) -> String {
    let hex: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
    format!("{:<8} {:>3} colors  {}", palette.name, palette.len(), hex.join(" "))
}

pub fn cmd_palettes() -> Result<()> {
    for name in Palette::builtin_names() {
        let palette = Palette::builtin(name)?;
        println!("{}", describe(&palette));
    }
    Ok(())
}
