//! Scene controller.
//!
//! Owns the reveal timeline and the card's RNG, and drives an injected
//! [`SceneSurface`]. The controller is a one-shot: every timeline action
//! fires exactly once, in schedule order, and there is no way to rewind.
//!
//! # Driving
//!
//! The controller never sleeps. A driver moves scene time forward:
//! - headless: [`SceneController::run_to_completion`] or
//!   [`SceneController::advance_to`] on a virtual clock,
//! - browser: one host timer per timeline entry, each calling
//!   [`SceneController::advance_to`] with its own offset.

use tracing::{debug, info, warn};

use super::report::{FiredAction, SceneReport, SceneStats};
use super::{SceneAction, TIMELINE};
use crate::config::CardConfig;
use crate::decoration::{Decoration, DecorationKind};
use crate::engine::{CardRng, EventScheduler, SceneClock, SceneTime};
use crate::error::CardResult;
use crate::placement::{self, Coordinates};
use crate::surface::{RevealScope, SceneSurface, TreeLevel};

/// Orchestrates the card's reveal sequence.
#[derive(Debug)]
pub struct SceneController<S: SceneSurface> {
    /// Document being drawn into.
    surface: S,
    /// Source of every randomized decision.
    rng: CardRng,
    /// Pending timeline actions.
    scheduler: EventScheduler<SceneAction>,
    /// Virtual scene time.
    clock: SceneClock,
    /// Bound on markers cleared per reveal.
    iteration_cap: usize,
    /// Fired actions, in order.
    fired: Vec<FiredAction>,
    /// Counters for the report.
    stats: SceneStats,
}

impl<S: SceneSurface> SceneController<S> {
    /// Create a controller and schedule the full timeline.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS when unset.
    pub fn new(surface: S, config: &CardConfig) -> Self {
        let rng = config.seed.map_or_else(CardRng::from_entropy, CardRng::new);
        Self::with_rng(surface, rng, config.reveal.iteration_cap)
    }

    /// Create a controller with an explicit RNG.
    pub fn with_rng(surface: S, rng: CardRng, iteration_cap: usize) -> Self {
        let mut scheduler = EventScheduler::new();
        for (offset, action) in TIMELINE {
            scheduler.schedule(SceneTime::from_millis(offset), action);
        }

        debug!(seed = rng.seed(), iteration_cap, "scene timeline scheduled");

        Self {
            surface,
            rng,
            scheduler,
            clock: SceneClock::new(),
            iteration_cap,
            fired: Vec::with_capacity(TIMELINE.len()),
            stats: SceneStats::default(),
        }
    }

    /// Get the surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Get mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the controller, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Get the RNG seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Get current scene time.
    #[must_use]
    pub const fn current_time(&self) -> SceneTime {
        self.clock.current_time()
    }

    /// Time of the next pending action, if any.
    #[must_use]
    pub fn next_action_time(&self) -> Option<SceneTime> {
        self.scheduler.next_action_time()
    }

    /// Number of actions not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }

    /// Whether every timeline action has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scheduler.is_empty()
    }

    /// Fired actions, in firing order.
    #[must_use]
    pub fn fired(&self) -> &[FiredAction] {
        &self.fired
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> SceneStats {
        self.stats
    }

    /// Move scene time to `time`, firing every action due by then.
    ///
    /// Returns the number of actions fired. An action is recorded as fired
    /// before it runs, so a failing action is never retried.
    ///
    /// # Errors
    ///
    /// Returns the first surface or placement error; later due actions stay
    /// pending.
    pub fn advance_to(&mut self, time: SceneTime) -> CardResult<usize> {
        let now = self.clock.advance_to(time);
        let mut count = 0;

        while let Some(scheduled) = self.scheduler.next_before(now) {
            self.fired.push(FiredAction {
                time: scheduled.time,
                action: scheduled.action,
            });
            count += 1;
            debug!(at = %scheduled.time, action = %scheduled.action, "firing scene action");
            self.fire(scheduled.action)?;
        }

        if count > 0 && self.is_complete() {
            info!(
                seed = self.seed(),
                ornaments = self.stats.ornaments,
                lights = self.stats.lights,
                "scene timeline complete"
            );
        }

        Ok(count)
    }

    /// Move scene time forward by `millis`.
    ///
    /// # Errors
    ///
    /// See [`Self::advance_to`].
    pub fn advance_by(&mut self, millis: u64) -> CardResult<usize> {
        let target = self.current_time().add_millis(millis);
        self.advance_to(target)
    }

    /// Fire every remaining action, jumping the clock from one to the next.
    ///
    /// Returns the final scene time.
    ///
    /// # Errors
    ///
    /// See [`Self::advance_to`].
    pub fn run_to_completion(&mut self) -> CardResult<SceneTime> {
        while let Some(next) = self.scheduler.next_action_time() {
            self.advance_to(next)?;
        }
        Ok(self.current_time())
    }

    /// Summary of the timeline so far.
    #[must_use]
    pub fn report(&self) -> SceneReport {
        SceneReport {
            seed: self.seed(),
            elapsed: self.current_time(),
            complete: self.is_complete(),
            fired: self.fired.clone(),
            stats: self.stats,
        }
    }

    fn fire(&mut self, action: SceneAction) -> CardResult<()> {
        match action {
            SceneAction::RevealRoot => self.reveal_root().map(drop),
            SceneAction::RevealLevel(level) => self.reveal_level(level).map(drop),
            SceneAction::RevealStar => self.reveal_star(),
            SceneAction::PopulateOrnaments => self.populate_ornaments(),
            SceneAction::PopulateLights => self.populate_lights(),
            SceneAction::RevealText => self.reveal_text().map(drop),
        }
    }

    /// Clear the reveal marker from every element in `scope`.
    ///
    /// Works on a snapshot and clears at most `iteration_cap` elements;
    /// anything past the cap stays hidden and is logged. Returns the number
    /// of markers cleared. With nothing marked this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a query or mutation.
    pub fn reveal(&mut self, scope: RevealScope) -> CardResult<usize> {
        let marked = self.surface.find_marked(scope)?;

        if marked.len() > self.iteration_cap {
            self.stats.cap_hits += 1;
            warn!(
                %scope,
                matched = marked.len(),
                cap = self.iteration_cap,
                "reveal hit iteration cap; remaining elements stay hidden"
            );
        }

        let mut cleared = 0;
        for element in marked.iter().take(self.iteration_cap) {
            self.surface.clear_marker(element, scope)?;
            cleared += 1;
        }

        self.stats.markers_cleared += cleared;
        debug!(%scope, cleared, "reveal");
        Ok(cleared)
    }

    /// Slide in the trunk.
    ///
    /// # Errors
    ///
    /// See [`Self::reveal`].
    pub fn reveal_root(&mut self) -> CardResult<usize> {
        self.reveal(RevealScope::Root)
    }

    /// Slide in one tier of branches.
    ///
    /// # Errors
    ///
    /// See [`Self::reveal`].
    pub fn reveal_level(&mut self, level: TreeLevel) -> CardResult<usize> {
        self.reveal(RevealScope::Level(level))
    }

    /// Show the greeting text.
    ///
    /// # Errors
    ///
    /// See [`Self::reveal`].
    pub fn reveal_text(&mut self) -> CardResult<usize> {
        self.reveal(RevealScope::Text)
    }

    /// Mark the star done.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CardError::MissingElement`] if `#star` is absent.
    pub fn reveal_star(&mut self) -> CardResult<()> {
        self.surface.mark_star_done()
    }

    /// Draw a position with `top` in `[y_min, y_max]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CardError::InvertedBand`] if `y_min > y_max`, or
    /// [`crate::CardError::OutOfBand`] for a `top` beyond the banding table.
    pub fn coordinates_for(&mut self, y_min: i32, y_max: i32) -> CardResult<Coordinates> {
        placement::coordinates_for(&mut self.rng, y_min, y_max)
    }

    /// Create `count` decorations of `kind` in `[y_min, y_max]`, appending
    /// each one's markup as soon as it is created.
    ///
    /// # Errors
    ///
    /// Stops at the first placement or surface error; decorations appended
    /// before it stay on the page.
    pub fn populate_level(
        &mut self,
        y_min: i32,
        y_max: i32,
        count: usize,
        kind: DecorationKind,
    ) -> CardResult<()> {
        for _ in 0..count {
            let Coordinates { top, left } = self.coordinates_for(y_min, y_max)?;
            let decoration = Decoration::new(kind, left, top, &mut self.rng);
            self.surface.append_markup(&decoration.render())?;

            match kind {
                DecorationKind::Light => self.stats.lights += 1,
                DecorationKind::Ornament => self.stats.ornaments += 1,
            }
        }
        Ok(())
    }

    fn populate_tiers(&mut self, kind: DecorationKind) -> CardResult<()> {
        for tier in placement::tiers_for(kind) {
            self.populate_level(tier.y_min, tier.y_max, tier.count, kind)?;
        }
        Ok(())
    }

    /// Scatter 35 ornaments over the three tiers.
    ///
    /// # Errors
    ///
    /// See [`Self::populate_level`].
    pub fn populate_ornaments(&mut self) -> CardResult<()> {
        self.populate_tiers(DecorationKind::Ornament)
    }

    /// Scatter 115 lights over the three tiers.
    ///
    /// # Errors
    ///
    /// See [`Self::populate_level`].
    pub fn populate_lights(&mut self) -> CardResult<()> {
        self.populate_tiers(DecorationKind::Light)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::surface::{MemoryElement, MemorySurface};

    fn controller(seed: u64) -> SceneController<MemorySurface> {
        SceneController::with_rng(MemorySurface::card_skeleton(), CardRng::new(seed), 100)
    }

    fn actions(c: &SceneController<MemorySurface>) -> Vec<SceneAction> {
        c.fired().iter().map(|f| f.action).collect()
    }

    #[test]
    fn test_new_schedules_full_timeline() {
        let c = controller(42);
        assert_eq!(c.pending(), 8);
        assert!(!c.is_complete());
        assert_eq!(c.next_action_time(), Some(SceneTime::from_millis(1_000)));
    }

    #[test]
    fn test_new_uses_config_seed() {
        let config = CardConfig::builder().seed(314).build();
        let c = SceneController::new(MemorySurface::card_skeleton(), &config);
        assert_eq!(c.seed(), 314);
    }

    #[test]
    fn test_nothing_fires_before_first_offset() {
        let mut c = controller(42);
        assert_eq!(c.advance_to(SceneTime::from_millis(999)).unwrap(), 0);
        assert_eq!(c.surface().count_with_classes(&["hidden-slide"]), 7);
    }

    #[test]
    fn test_partial_advance() {
        let mut c = controller(42);
        let fired = c.advance_to(SceneTime::from_millis(3_500)).unwrap();

        assert_eq!(fired, 3);
        assert_eq!(
            actions(&c),
            vec![
                SceneAction::RevealRoot,
                SceneAction::RevealLevel(TreeLevel::Three),
                SceneAction::RevealLevel(TreeLevel::Two),
            ]
        );
        // Bottom tier still hidden
        assert_eq!(
            c.surface().count_with_classes(&["hidden-slide", "level-1"]),
            2
        );
    }

    #[test]
    fn test_advance_by_accumulates() {
        let mut c = controller(42);
        c.advance_by(500).unwrap();
        c.advance_by(500).unwrap();
        assert_eq!(actions(&c), vec![SceneAction::RevealRoot]);
    }

    #[test]
    fn test_full_run_fires_each_action_once_in_order() {
        let mut c = controller(42);
        let end = c.run_to_completion().unwrap();

        assert_eq!(end.as_millis(), 11_000);
        assert!(c.is_complete());
        let expected: Vec<SceneAction> = TIMELINE.iter().map(|(_, a)| *a).collect();
        assert_eq!(actions(&c), expected);

        // Further advances fire nothing
        assert_eq!(c.advance_by(60_000).unwrap(), 0);
        assert_eq!(c.fired().len(), 8);
    }

    #[test]
    fn test_full_run_reveals_everything() {
        let mut c = controller(42);
        c.run_to_completion().unwrap();

        let s = c.surface();
        assert_eq!(s.count_with_classes(&["hidden-slide"]), 0);
        assert_eq!(s.count_with_classes(&["show-text", "hidden"]), 0);
        assert!(s.star_done());
        assert_eq!(s.fragments().len(), 150);
        assert_eq!(c.stats().markers_cleared, 9);
    }

    #[test]
    fn test_populate_ornaments_count() {
        let mut c = controller(42);
        c.populate_ornaments().unwrap();
        assert_eq!(c.surface().fragments().len(), 35);
        assert!(c.surface().fragments().iter().all(|f| f.contains("ornament")));
        assert_eq!(c.stats().ornaments, 35);
    }

    #[test]
    fn test_populate_lights_count() {
        let mut c = controller(42);
        c.populate_lights().unwrap();
        assert_eq!(c.surface().fragments().len(), 115);
        assert!(c.surface().fragments().iter().all(|f| f.contains("lights")));
        assert_eq!(c.stats().lights, 115);
    }

    #[test]
    fn test_populate_level_appends_in_order() {
        let mut c = controller(7);
        c.populate_level(120, 120, 3, DecorationKind::Ornament).unwrap();
        c.populate_level(-30, -30, 2, DecorationKind::Light).unwrap();

        let fragments = c.surface().fragments();
        assert_eq!(fragments.len(), 5);
        assert!(fragments[..3].iter().all(|f| f.contains("top: 120px;")));
        assert!(fragments[3..].iter().all(|f| f.contains("top: -30px;")));
    }

    #[test]
    fn test_populate_level_zero_count() {
        let mut c = controller(7);
        c.populate_level(0, 10, 0, DecorationKind::Light).unwrap();
        assert!(c.surface().fragments().is_empty());
    }

    #[test]
    fn test_populate_level_out_of_band() {
        let mut c = controller(7);
        let err = c
            .populate_level(200, 210, 4, DecorationKind::Ornament)
            .unwrap_err();
        assert!(matches!(err, CardError::OutOfBand { .. }));
        assert!(c.surface().fragments().is_empty());
    }

    #[test]
    fn test_cap_clears_exactly_cap_elements() {
        let skeleton = MemorySurface::card_skeleton;

        let mut at_cap = SceneController::with_rng(skeleton(), CardRng::new(1), 2);
        assert_eq!(at_cap.reveal_level(TreeLevel::Three).unwrap(), 2);
        assert_eq!(at_cap.stats().cap_hits, 0);

        let mut below = SceneController::with_rng(skeleton(), CardRng::new(1), 1);
        assert_eq!(below.reveal_level(TreeLevel::Three).unwrap(), 1);
        assert_eq!(below.stats().cap_hits, 1);
    }

    #[test]
    fn test_populate_level_inverted_band() {
        let mut c = controller(7);
        let err = c
            .populate_level(40, -25, 3, DecorationKind::Light)
            .unwrap_err();
        assert!(matches!(
            err,
            CardError::InvertedBand { y_min: 40, y_max: -25 }
        ));
        assert!(c.surface().fragments().is_empty());
        assert_eq!(c.stats().lights, 0);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut c = controller(42);
        assert_eq!(c.reveal_root().unwrap(), 1);
        assert_eq!(c.reveal_root().unwrap(), 0);
        assert_eq!(c.surface().count_with_classes(&["root"]), 1);
    }

    #[test]
    fn test_reveal_on_empty_document() {
        let mut c = SceneController::with_rng(MemorySurface::new(), CardRng::new(1), 100);
        assert_eq!(c.reveal(RevealScope::Level(TreeLevel::Two)).unwrap(), 0);
    }

    #[test]
    fn test_reveal_stops_at_iteration_cap() {
        let mut surface = MemorySurface::new();
        for _ in 0..150 {
            surface.push(MemoryElement::new("hidden-slide root"));
        }
        let mut c = SceneController::with_rng(surface, CardRng::new(1), 100);

        assert_eq!(c.reveal_root().unwrap(), 100);
        assert_eq!(c.surface().count_with_classes(&["hidden-slide"]), 50);
        assert_eq!(c.stats().cap_hits, 1);
    }

    #[test]
    fn test_reveal_at_cap_is_not_a_hit() {
        let mut surface = MemorySurface::new();
        for _ in 0..3 {
            surface.push(MemoryElement::new("show-text hidden"));
        }
        let mut c = SceneController::with_rng(surface, CardRng::new(1), 3);

        assert_eq!(c.reveal_text().unwrap(), 3);
        assert_eq!(c.stats().cap_hits, 0);
    }

    #[test]
    fn test_missing_star_fails_action_once() {
        let mut surface = MemorySurface::new();
        surface.push(MemoryElement::new("decorations").with_id("decorate"));
        let mut c = SceneController::with_rng(surface, CardRng::new(1), 100);

        let err = c.advance_to(SceneTime::from_millis(6_000)).unwrap_err();
        assert!(matches!(err, CardError::MissingElement { ref id } if id == "star"));
        assert_eq!(c.fired().last().map(|f| f.action), Some(SceneAction::RevealStar));

        // The failed action is not replayed; the rest of the timeline runs
        c.run_to_completion().unwrap();
        assert_eq!(c.fired().len(), 8);
        assert_eq!(c.surface().fragments().len(), 150);
    }

    #[test]
    fn test_missing_container_fails_population() {
        let mut surface = MemorySurface::new();
        surface.push(MemoryElement::new("star").with_id("star"));
        let mut c = SceneController::with_rng(surface, CardRng::new(1), 100);

        let err = c.populate_ornaments().unwrap_err();
        assert!(err.is_surface_fault());
    }

    #[test]
    fn test_same_seed_same_markup() {
        let mut a = controller(2024);
        let mut b = controller(2024);
        a.run_to_completion().unwrap();
        b.run_to_completion().unwrap();
        assert_eq!(a.surface().fragments(), b.surface().fragments());
    }

    #[test]
    fn test_different_seed_different_markup() {
        let mut a = controller(1);
        let mut b = controller(2);
        a.run_to_completion().unwrap();
        b.run_to_completion().unwrap();
        assert_ne!(a.surface().fragments(), b.surface().fragments());
    }

    #[test]
    fn test_report() {
        let mut c = controller(5);
        c.advance_to(SceneTime::from_millis(8_000)).unwrap();

        let report = c.report();
        assert_eq!(report.seed, 5);
        assert!(!report.complete);
        assert_eq!(report.elapsed.as_millis(), 8_000);
        assert_eq!(report.fired.len(), 6);
        assert_eq!(report.stats.ornaments, 35);
        assert_eq!(report.stats.lights, 0);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"populate-ornaments\""));
    }

    #[test]
    fn test_coordinates_for_uses_card_rng() {
        let mut a = controller(11);
        let mut b = controller(11);
        assert_eq!(
            a.coordinates_for(-25, 40).unwrap(),
            b.coordinates_for(-25, 40).unwrap()
        );
    }
}
