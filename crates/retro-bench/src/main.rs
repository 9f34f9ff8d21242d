use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use retro_wm::{Buttons, Canvas, CellRect, ContentRenderer, Viewport, WindowStack, WmEvent};

#[derive(Parser, Debug)]
#[command(
    name = "retro-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Composite a stack of windows under scripted drags and report throughput"
)]
struct BenchCli {
    /// Windows in the stack.
    #[arg(short = 'w', long = "windows", value_name = "N", default_value_t = 8)]
    windows: usize,

    /// Frames to composite. Each frame routes one drag step.
    #[arg(short = 'f', long = "frames", value_name = "N", default_value_t = 5_000)]
    frames: u64,

    /// Grid width in cells.
    #[arg(long = "width", default_value_t = 160)]
    width: u16,

    /// Grid height in cells.
    #[arg(long = "height", default_value_t = 50)]
    height: u16,

    /// Seed for the drag script.
    #[arg(long = "seed", default_value_t = 0x5EED)]
    seed: u64,
}

struct BenchConfig {
    windows: usize,
    frames: u64,
    viewport: Viewport,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=256).contains(&cli.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        if cli.frames == 0 {
            return Err("frames must be at least 1".to_string());
        }
        if cli.width < 40 || cli.height < 10 {
            return Err("grid must be at least 40x10".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            frames: cli.frames,
            viewport: Viewport::new(cli.width, cli.height),
            seed: cli.seed,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let viewport = config.viewport;
    let mut stack = WindowStack::new();
    let mut rng = XorShift::new(config.seed);
    let content: Rc<dyn ContentRenderer> = Rc::new(checkerboard);
    for i in 0..config.windows {
        let rect = CellRect::new(
            rng.below(viewport.width as u64 - 20) as i32,
            1 + rng.below(viewport.height as u64 - 8) as i32,
            30 + rng.below(20) as u16,
            8 + rng.below(6) as u16,
        );
        stack.create_window(format!("Bench {i}"), rect, Some(Rc::clone(&content)));
    }

    let mut buf = Buffer::empty(Rect::new(0, 0, viewport.width, viewport.height));
    let mut script = DragScript::default();
    let mut stats = BenchStats::new();

    for _ in 0..config.frames {
        let event = script.next(&stack, viewport, &mut rng);
        let frame_start = Instant::now();
        buf.reset();
        let consumed = stack.route_event(&event, &mut buf);
        if !consumed {
            stack.composite(&mut buf);
        }
        stats.record_frame(consumed, frame_start.elapsed());
    }
    stats.mark_completed();
    stats
}

fn checkerboard(canvas: &mut dyn Canvas, interior: CellRect) {
    let style = Style::default();
    for y in interior.y..interior.bottom() {
        for x in interior.x..interior.right() {
            let glyph = if (x + y) % 2 == 0 { '░' } else { ' ' };
            canvas.set_cell(x, y, glyph, style);
        }
    }
}

/// Press on the topmost title bar, drag a few steps, release, repeat.
#[derive(Default)]
struct DragScript {
    pointer: Option<(i32, i32)>,
    steps_left: u32,
}

impl DragScript {
    fn next(&mut self, stack: &WindowStack, viewport: Viewport, rng: &mut XorShift) -> WmEvent {
        match self.pointer {
            Some((x, y)) if self.steps_left > 0 => {
                self.steps_left -= 1;
                let dx = rng.below(3) as i32 - 1;
                let dy = rng.below(3) as i32 - 1;
                let next = (x + dx, y + dy);
                self.pointer = Some(next);
                WmEvent::pointer(next.0, next.1, Buttons::PRIMARY)
            }
            Some((x, y)) => {
                self.pointer = None;
                WmEvent::pointer(x, y, Buttons::empty())
            }
            None => {
                // grab a random window by its title; a covered title lands on whatever is above it
                let target = stack
                    .iter()
                    .nth(rng.below(stack.len() as u64) as usize)
                    .map(|w| w.effective_rect(viewport))
                    .unwrap_or_default();
                let start = (target.x + 3, target.y);
                self.pointer = Some(start);
                self.steps_left = 4 + rng.below(12) as u32;
                WmEvent::pointer(start.0, start.1, Buttons::PRIMARY)
            }
        }
    }
}

struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0xA5A5_A5A5_1234_5678,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next_u64() % bound
    }
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    frame_count: u64,
    consumed: u64,
    total_frame_time: Duration,
    fastest_frame: Duration,
    slowest_frame: Duration,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            frame_count: 0,
            consumed: 0,
            total_frame_time: Duration::ZERO,
            fastest_frame: Duration::MAX,
            slowest_frame: Duration::ZERO,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_frame(&mut self, consumed: bool, frame_time: Duration) {
        self.frame_count = self.frame_count.saturating_add(1);
        if consumed {
            self.consumed += 1;
        }
        self.total_frame_time += frame_time;
        self.fastest_frame = self.fastest_frame.min(frame_time);
        self.slowest_frame = self.slowest_frame.max(frame_time);
    }

    fn average_frame_us(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        (self.total_frame_time.as_secs_f64() / self.frame_count as f64) * 1_000_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let busy = self.total_frame_time.as_secs_f64();
        let fps = if busy > 0.0 {
            self.frame_count as f64 / busy
        } else {
            0.0
        };
        let fastest = if self.frame_count == 0 {
            Duration::ZERO
        } else {
            self.fastest_frame
        };

        indoc::formatdoc!(
            r#"
            Composite bench: {windows} windows on {width}x{height}.
            Wall time: {elapsed:.2}s | Frames: {frames} ({consumed} consumed)
            Composites/s: {fps:.0}
            Avg frame: {avg:.1} us | Best: {best:.1} us | Worst: {worst:.1} us
            "#,
            windows = config.windows,
            width = config.viewport.width,
            height = config.viewport.height,
            elapsed = self.elapsed().as_secs_f64(),
            frames = self.frame_count,
            consumed = self.consumed,
            fps = fps,
            avg = self.average_frame_us(),
            best = fastest.as_secs_f64() * 1_000_000.0,
            worst = self.slowest_frame.as_secs_f64() * 1_000_000.0,
        )
    }
}
