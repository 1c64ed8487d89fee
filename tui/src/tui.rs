use crate::cli::reseed;
use bagolife_lib::{Cadence, Error, Pattern, Rgb, World};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Restores the terminal when dropped, even after an error.
struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            DisableLineWrap,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(TermGuard { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A key that waits for a digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Birth,
    Survive,
}

struct App {
    world: World,
    cadence: Cadence,
    pattern: Pattern,
    rng: StdRng,
    pending: Option<Pending>,
    message: String,
    quit: bool,
}

impl App {
    fn report<T>(&mut self, result: Result<T, Error>, success: impl FnOnce(&World) -> String) {
        self.message = match result {
            Ok(_) => success(&self.world),
            Err(e) => {
                warn!("{}", e);
                e.to_string()
            }
        };
    }

    fn handle_key(&mut self, code: KeyCode) {
        if let Some(pending) = self.pending.take() {
            match code {
                KeyCode::Char(c @ '0'..='9') => {
                    let count = c as u8 - b'0';
                    let result = match pending {
                        Pending::Birth => self.world.toggle_birth(count),
                        Pending::Survive => self.world.toggle_survive(count),
                    };
                    self.report(result, |world| format!("Rule: {}", world.rule().life()));
                }
                _ => self.message = String::from("Cancelled"),
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => {
                let running = self.cadence.toggle_running();
                self.message = String::from(if running { "Running" } else { "Paused" });
            }
            KeyCode::Char('n') => {
                self.world.step();
                self.message.clear();
            }
            KeyCode::Char('c') => {
                self.world.clear();
                self.message = String::from("Cleared");
            }
            KeyCode::Char('h') => {
                reseed(&mut self.world, &self.pattern);
                self.message = String::from("Reseeded");
            }
            KeyCode::Char('r') => {
                let result = self.world.randomize(&mut self.rng);
                self.report(result, |world| format!("Random rule: {}", world.rule()));
            }
            KeyCode::Char(c @ '0'..='9') => {
                let result = self.world.select_preset(c as usize - '0' as usize);
                self.report(result, |world| format!("Preset: {}", world.rule()));
            }
            KeyCode::Char('a') => {
                let age_weighted = !self.world.is_age_weighted();
                let result = self.world.set_age_weighted(age_weighted);
                self.report(result, |world| format!("Rule: {}", world.rule()));
            }
            KeyCode::Char('b') => {
                self.pending = Some(Pending::Birth);
                self.message = String::from("Birth count?");
            }
            KeyCode::Char('s') => {
                self.pending = Some(Pending::Survive);
                self.message = String::from("Survival count?");
            }
            KeyCode::Char('p') => {
                let next = self.world.palette_settings().selection.next_catalog();
                let result = self.world.set_palette(next);
                self.report(result, |world| format!("Palette: {}", world.palette().name()));
            }
            KeyCode::Char('v') => {
                let reverse = !self.world.palette_settings().reverse;
                let result = self.world.set_reverse_palette(reverse);
                self.report(result, |_| format!("Reversed: {}", reverse));
            }
            KeyCode::Char('f') => {
                let flicker_reduction = !self.world.palette_settings().flicker_reduction;
                let result = self.world.set_flicker_reduction(flicker_reduction);
                self.report(result, |_| {
                    format!("Flicker reduction: {}", flicker_reduction)
                });
            }
            KeyCode::Char('[') => {
                let result = self.world.set_resolution(self.world.resolution().saturating_sub(1));
                self.report(result, |world| format!("Age limit: {}", world.age_limit()));
            }
            KeyCode::Char(']') => {
                let result = self.world.set_resolution(self.world.resolution() + 1);
                self.report(result, |world| format!("Age limit: {}", world.age_limit()));
            }
            _ => (),
        }
    }

    /// Row 0 is the status line; each cell is two columns wide.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let age = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => 1,
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => 0,
            _ => return,
        };
        if mouse.row == 0 {
            return;
        }
        let coord = (mouse.column as usize / 2, mouse.row as usize - 1);
        if coord.0 < self.world.width() && coord.1 < self.world.height() {
            let result = self.world.set_cell(coord, age);
            if let Err(e) = result {
                warn!("{}", e);
                self.message = e.to_string();
            }
        }
    }

    fn status(&self) -> String {
        let state = if self.cadence.is_running() {
            "running"
        } else {
            "paused"
        };
        let mode = if self.world.is_age_weighted() {
            "aged"
        } else {
            "plain"
        };
        format!(
            "Gen {} | {} | {} | {} | {} | {}",
            self.world.generation(),
            self.world.rule().life(),
            mode,
            self.world.palette().name(),
            state,
            self.message
        )
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let (columns, rows) = terminal::size()?;
        let width = self.world.width().min(columns as usize / 2);
        let height = self.world.height().min((rows as usize).saturating_sub(1));
        let palette = self.world.palette();

        queue!(
            out,
            BeginSynchronizedUpdate,
            cursor::MoveTo(0, 0),
            ResetColor,
            Clear(ClearType::CurrentLine)
        )?;
        let status: String = self.status().chars().take(columns as usize).collect();
        queue!(out, Print(status))?;

        for y in 0..height {
            queue!(out, cursor::MoveTo(0, y as u16 + 1))?;
            let mut last = None;
            for &age in &self.world.grid().row(y)[..width] {
                let rgb = palette.color(age);
                if last != Some(rgb) {
                    queue!(out, SetBackgroundColor(color(rgb)))?;
                    last = Some(rgb);
                }
                queue!(out, Print("  "))?;
            }
            queue!(out, ResetColor)?;
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()
    }
}

/// Runs the automaton in the terminal until the user quits.
pub(crate) fn run(
    world: World,
    cadence: Cadence,
    fps: u32,
    pattern: Pattern,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame = Duration::from_secs(1) / fps.saturating_mul(cadence.frames_per_step()).max(1);
    let mut app = App {
        world,
        cadence,
        pattern,
        rng,
        pending: None,
        message: String::from("Press space to run"),
        quit: false,
    };

    let mut guard = TermGuard::new()?;
    queue!(guard.out, Clear(ClearType::All))?;
    info!("Entered the TUI, {:?} per frame", frame);

    let mut deadline = Instant::now();
    while !app.quit {
        if app.cadence.tick() {
            app.world.step();
        }
        app.draw(&mut guard.out)?;

        deadline = (deadline + frame).max(Instant::now());
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(..) => {
                    queue!(guard.out, ResetColor, Clear(ClearType::All))?;
                }
                _ => (),
            }
            if app.quit {
                break;
            }
        }
    }
    Ok(())
}
