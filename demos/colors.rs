//! Paints every foreground/background combination of the eight basic
//! colors, then shows what the library reports back for a few cells.
//!
//! Run with `cargo run --example colors`.

use ncraii::{colors, Color, Ncurses, A_REVERSE};

const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

fn main() -> ncraii::Result<()> {
    let nc = Ncurses::init()?;
    nc.cbreak(true)?;
    nc.echo(false)?;

    if !nc.has_colors() {
        nc.addstr("this terminal has no colors, press a key")?;
        nc.getch()?;
        return Ok(());
    }
    nc.start_color()?;

    for (fg, fg_name) in NAMES.iter().enumerate() {
        for bg in 0..NAMES.len() {
            let color = Color::new(fg as i16, bg as i16);
            // Small terminals run out of pairs; show what fits.
            let Ok(attr) = nc.color_to_attr(color) else {
                continue;
            };
            nc.attrset(attr)?;
            nc.mvaddstr(fg as i32, bg as i32 * 9, &format!(" {fg_name:<7} "))?;
        }
    }

    let highlight = Color::new(colors::YELLOW, colors::DEFAULT);
    nc.mvchgat(&nc, 0, 0, 9, A_REVERSE, highlight)?;
    nc.attrset(0)?;

    nc.mv(10, 0)?;
    let (attrs, pair) = nc.attr_get()?;
    nc.printw(format_args!(
        "{} pairs registered of {}; current attrs {attrs:#x}, pair {pair}\n",
        nc.color_to_pair_number(highlight)?,
        nc.color_pair_count()
    ))?;
    nc.printw(format_args!(
        "pair 0 is {}, press a key",
        nc.pair_number_to_color(0)?
    ))?;
    nc.refresh()?;
    nc.getch()?;
    Ok(())
}
