//! Reports mouse clicks until a key is pressed.
//!
//! Run with `cargo run --example mouse`.

use ncraii::{key, MouseMask, Ncurses};

fn main() -> ncraii::Result<()> {
    let nc = Ncurses::init()?;
    nc.cbreak(true)?;
    nc.echo(false)?;
    nc.keypad(true)?;

    let (applied, _) = nc.mousemask(MouseMask::ALL_MOUSE_EVENTS)?;
    nc.mouseinterval(200);
    nc.mvaddstr(0, 0, "click anywhere, any key quits")?;

    let target = nc.new_window(5, 20, 4, 10)?;
    target.border(Default::default())?;
    target.mvaddstr(2, 5, "click me")?;
    nc.refresh()?;
    target.refresh()?;

    while nc.getch()? == key::MOUSE {
        let Ok(event) = nc.getmouse() else {
            continue;
        };
        let inside = target.coord_trafo(event.y, event.x, false)?;
        nc.mv(1, 0)?;
        nc.clrtoeol()?;
        nc.printw(format_args!(
            "{:?} at {},{} (window {:?}, mask {:#x})",
            event.state,
            event.y,
            event.x,
            inside,
            applied.bits()
        ))?;
        nc.refresh()?;
    }
    Ok(())
}
