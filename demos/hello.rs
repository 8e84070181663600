//! Opens the terminal, draws a boxed window and waits for a key.
//!
//! Run with `cargo run --example hello`.

use ncraii::{acs, key, BorderChars, CursorVisibility, Ncurses, A_BOLD};

fn main() -> ncraii::Result<()> {
    let nc = Ncurses::init()?;
    nc.cbreak(true)?;
    nc.echo(false)?;
    nc.keypad(true)?;
    // Some terminals can't hide the cursor.
    nc.curs_set(CursorVisibility::Invisible).ok();

    let (lines, cols) = (nc.line_count(), nc.column_count());
    nc.mvprintw(0, 0, format_args!("terminal is {lines}x{cols}, q quits"))?;
    nc.refresh()?;

    let win = nc.new_window(7, 40, (lines - 7) / 2, (cols - 40) / 2)?;
    win.border(BorderChars::default())?;
    win.attron(A_BOLD)?;
    win.mvaddstr(1, 2, "Hello from ncurses-raii")?;
    win.attroff(A_BOLD)?;

    let inner = win.subwindow(3, 36, 3, 2)?;
    inner.mvhline(0, 0, acs::hline(), 36)?;
    inner.mvaddstr(1, 0, "arrow keys beep, any other key echoes")?;
    win.refresh()?;

    loop {
        match nc.getch()? {
            ch if ch == i32::from(b'q') => break,
            key::UP | key::DOWN | key::LEFT | key::RIGHT => nc.beep()?,
            ch => {
                let name = key::name(ch).unwrap_or_default();
                inner.mvaddstr(2, 0, &format!("{name:<36}"))?;
                win.refresh()?;
            }
        }
    }
    Ok(())
}
