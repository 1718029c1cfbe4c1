//! Top-level display state machine.
//!
//! [`DisplayController`] follows market hours, switching between the live
//! ticker ([`DisplayMode::Open`]) and a scrolling banner
//! ([`DisplayMode::Closed`]). While open it refreshes quotes on a fixed
//! interval. A failed fetch keeps the strip that is already on screen.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::ClockSource;
use crate::config::TickerConfig;
use crate::market::MarketCalendar;
use crate::models::PriceSnapshot;
use crate::quotes::QuoteProvider;
use crate::ticker::{
    DisplaySegment, PriceHistory, ScrollAnimator, SegmentColor, TickerRenderModel,
};

/// Which content the matrix is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Closed,
    Open,
}

impl DisplayMode {
    fn for_market(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Returns a display string for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Closed => "CLOSED",
            DisplayMode::Open => "OPEN",
        }
    }
}

/// A mode change performed by [`DisplayController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

/// The segments currently on screen.
///
/// Content is only ever replaced as a whole; `version` counts the
/// replacements so painters can tell a new strip from a scrolled one.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    segments: Vec<DisplaySegment>,
    version: u64,
}

impl Scene {
    pub fn segments(&self) -> &[DisplaySegment] {
        &self.segments
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn replace(&mut self, segments: Vec<DisplaySegment>) {
        self.segments = segments;
        self.version += 1;
    }

    fn clear(&mut self) {
        self.replace(Vec::new());
    }
}

/// Drives the matrix content from market hours and live quotes.
pub struct DisplayController<Q, C> {
    config: TickerConfig,
    calendar: MarketCalendar,
    renderer: TickerRenderModel,
    animator: ScrollAnimator,
    provider: Q,
    clock: C,
    history: PriceHistory,
    mode: DisplayMode,
    scene: Scene,
    /// Monotonic time of the last successful fetch; `None` forces a fetch.
    last_fetch: Option<Duration>,
    /// Monotonic time of the most recent failed fetch; the next attempt
    /// waits a full refresh interval after it.
    last_failure: Option<Duration>,
}

impl<Q, C> DisplayController<Q, C>
where
    Q: QuoteProvider,
    C: ClockSource,
{
    /// Creates a controller already in the mode matching the current time.
    pub fn new(config: TickerConfig, provider: Q, clock: C) -> Self {
        let calendar = MarketCalendar::new(config.hours, config.tz_offset_hours);
        let renderer = TickerRenderModel::new(config.symbols.clone(), config.display_width);
        let animator = ScrollAnimator::new(config.display_width);
        let mode = DisplayMode::for_market(calendar.is_open(clock.now_utc()));

        let mut controller = Self {
            config,
            calendar,
            renderer,
            animator,
            provider,
            clock,
            history: PriceHistory::new(),
            mode,
            scene: Scene::default(),
            last_fetch: None,
            last_failure: None,
        };
        controller.enter(mode);
        controller
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    /// Time since the last successful fetch in the current open session.
    pub fn last_fetch_age(&self) -> Option<Duration> {
        self.last_fetch
            .map(|at| self.clock.monotonic().saturating_sub(at))
    }

    /// How long the run loop should sleep between ticks.
    pub fn tick_interval(&self) -> Duration {
        match self.mode {
            DisplayMode::Open => self.config.open_tick,
            DisplayMode::Closed => self.config.closed_tick,
        }
    }

    /// Runs one loop iteration: follow market hours, refresh quotes when
    /// due, then scroll.
    ///
    /// Returns the mode change made during this tick, if any.
    pub async fn tick(&mut self) -> Option<Transition> {
        let target = DisplayMode::for_market(self.calendar.is_open(self.clock.now_utc()));

        let transition = if target != self.mode {
            let from = self.mode;
            self.enter(target);
            Some(Transition { from, to: target })
        } else {
            None
        };

        let speed = match self.mode {
            DisplayMode::Open => {
                self.refresh_if_due().await;
                self.config.open_scroll_speed
            }
            DisplayMode::Closed => self.config.closed_scroll_speed,
        };

        if self.animator.tick(&mut self.scene.segments, speed) {
            debug!(mode = self.mode.label(), "Strip wrapped");
        }

        transition
    }

    /// Resets the screen for `mode`.
    fn enter(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.scene.clear();

        match mode {
            DisplayMode::Closed => {
                self.scene.replace(vec![self.closed_banner()]);
                info!("Market closed, showing banner");
            }
            DisplayMode::Open => {
                self.last_fetch = None;
                self.last_failure = None;
                info!("Market open, showing ticker");
            }
        }
    }

    fn closed_banner(&self) -> DisplaySegment {
        let text = format!(
            "MARKET CLOSED           WILL RE-OPEN NEXT WEEKDAY AT {}",
            self.config.hours.open
        );
        DisplaySegment::new(text, SegmentColor::Blue, self.config.display_width)
    }

    fn fetch_due(&self, now: Duration) -> bool {
        if let Some(failed) = self.last_failure
            && now.saturating_sub(failed) < self.config.refresh_interval
        {
            return false;
        }

        match self.last_fetch {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.config.refresh_interval,
        }
    }

    async fn refresh_if_due(&mut self) {
        let now = self.clock.monotonic();
        if !self.fetch_due(now) {
            return;
        }

        match self.provider.fetch_quotes(self.renderer.symbols()).await {
            Ok(snapshot) => {
                let segments = self.renderer.build(&snapshot, &mut self.history);
                self.scene.replace(segments);
                self.last_fetch = Some(now);
                self.last_failure = None;
                info!(
                    priced = snapshot.len(),
                    symbols = self.renderer.symbols().len(),
                    "Ticker refreshed"
                );
            }
            Err(e) => {
                warn!(error = %e, "Quote fetch failed, keeping previous prices");
                self.last_failure = Some(now);

                // Nothing on screen yet: show whatever history knows.
                if self.scene.is_empty() {
                    let segments = self
                        .renderer
                        .build(&PriceSnapshot::empty(), &mut self.history);
                    self.scene.replace(segments);
                }
            }
        }
    }
}
