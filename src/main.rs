use std::{
    io::{self, BufRead, Write},
    thread,
};

use anyhow::Result;
use dice_tray::{parse_die_type, AnimationSettings, App, DrawSource, TextCanvas};

const CANVAS_COLS: usize = 40;
const CANVAS_ROWS: usize = 20;
const HELP: &str = "\
commands:
  d4 | d6 | d8 | d10 | d12 | d20   choose the die
  qty <number>                     set how many dice to roll
  roll (or an empty line)          roll the dice
  log                              show every roll so far
  help                             show this message
  quit                             exit
";

enum Command<'a> {
    Select(&'a str),
    Quantity(&'a str),
    Roll,
    Log,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "" | "roll" | "r" => Command::Roll,
            "qty" | "quantity" => Command::Quantity(rest.trim()),
            "log" => Command::Log,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            w if w.starts_with('d') => Command::Select(line),
            _ => Command::Unknown(line),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let settings = AnimationSettings::default();
    let mut app = App::new(settings)?;
    let mut canvas = TextCanvas::new(CANVAS_COLS, CANVAS_ROWS);
    let mut stdout = io::stdout().lock();

    write!(stdout, "{HELP}")?;
    prompt(&mut stdout, &app)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Command::Select(code) => match parse_die_type(code) {
                Ok(die) => app.select_die(die),
                Err(e) => eprintln!("{e}"),
            },
            Command::Quantity(text) => app.set_quantity_text(text),
            Command::Roll => match app.roll() {
                Ok(_) => {
                    play_animation(&mut stdout, &mut app, &mut canvas, &settings)?;
                    if let Some(line) = app.log().latest() {
                        write!(stdout, "{line}")?;
                    }
                }
                Err(e) => eprintln!("{e}"),
            },
            Command::Log => write!(stdout, "{}", app.log().text())?,
            Command::Help => write!(stdout, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(text) => eprintln!("unknown command {text:?}, try `help`"),
        }
        prompt(&mut stdout, &app)?;
    }

    Ok(())
}

fn play_animation<S: DrawSource>(
    out: &mut impl Write,
    app: &mut App<S>,
    canvas: &mut TextCanvas,
    settings: &AnimationSettings,
) -> io::Result<()> {
    while let Some(frame) = app.tick() {
        canvas.draw_frame(&frame);
        // home the cursor and clear so each frame overwrites the previous one
        write!(out, "\x1b[H\x1b[2J{}", canvas.render())?;
        out.flush()?;
        thread::sleep(settings.frame_delay);
    }
    Ok(())
}

fn prompt<S: DrawSource>(out: &mut impl Write, app: &App<S>) -> io::Result<()> {
    write!(out, "[{} x {}] > ", app.quantity_text(), app.selected())?;
    out.flush()
}
