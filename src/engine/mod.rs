//! The page-interactivity engine.
//!
//! [`PortfolioEngine`] owns every feature's state: the scroll animator,
//! the timer queue, the visibility observer, the easter-egg trackers, and
//! the element sets wired at attach time. The embedder forwards
//! [`PageEvent`]s and calls [`tick`](PortfolioEngine::tick) once per
//! display frame; all document access goes through the [`DocumentHost`]
//! trait, so the whole engine runs deterministically in tests.

pub mod easter;
pub mod schedule;

use rustc_hash::{FxHashMap, FxHashSet};
use web_time::{Duration, Instant};

use self::easter::{ClickCounter, KonamiMatcher};
use self::schedule::TimerQueue;
use crate::animation::{stagger_delay, staggered_after, ScrollAnimator};
use crate::host::{
    Capabilities, DocumentHost, NodeId, ViewportObserver, VisibilityObserver,
};
use crate::input::PageEvent;
use crate::options::Options;
use crate::util::frame_gate::FrameGate;

/// Gradient painted across headings while secret mode is active.
const SECRET_GRADIENT: &str = "linear-gradient(45deg, #ff6b6b, #4ecdc4, \
                               #45b7d1, #f9ca24, #f0932b, #eb4d4b, #6c5ce7)";

/// Inline style properties secret mode touches on each heading.
const SECRET_STYLE_PROPS: [&str; 5] = [
    "background",
    "background-size",
    "-webkit-background-clip",
    "-webkit-text-fill-color",
    "animation",
];

const ENTRANCE_TRANSITION: &str =
    "opacity 0.8s ease-out, transform 0.8s ease-out";

const OVERLAY_TEXT: &str = "maker secret unlocked! you found the hidden \
                            message - thanks for being curious.";

/// A delayed mutation, executed by `tick` when its timer fires.
#[derive(Debug)]
enum Action {
    AddClass { node: NodeId, class: &'static str },
    RemoveClass { node: NodeId, class: &'static str },
    Reveal { node: NodeId },
    EntranceShow { node: NodeId },
    DeactivateSecret,
    DismissOverlay { node: NodeId },
    RefreshViewportUnit,
}

/// Cancellation keys: at most one pending timer per slot, so re-triggering
/// a feedback animation restarts its timer instead of stacking timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    BounceClick(NodeId),
    ButtonClick(NodeId),
    TagActive(NodeId),
    TouchFeedback(NodeId),
    SecretMode,
    Overlay,
    ViewportRefresh,
}

/// Event-driven interactivity controller for one page.
pub struct PortfolioEngine {
    options: Options,
    caps: Capabilities,
    timers: TimerQueue<Action, Slot>,
    scroll_animator: ScrollAnimator,
    scroll_gate: FrameGate,
    observer: Box<dyn VisibilityObserver>,
    konami: KonamiMatcher,
    logo_clicks: ClickCounter,

    // Element sets wired at attach time
    nav: Option<NodeId>,
    logo: Option<NodeId>,
    contact_button: Option<NodeId>,
    anchors: FxHashMap<NodeId, String>,
    interactive: FxHashSet<NodeId>,
    project_cards: FxHashSet<NodeId>,
    skill_tags: FxHashSet<NodeId>,
    touchable: FxHashSet<NodeId>,
    haptic: FxHashSet<NodeId>,
    overlay: Option<NodeId>,
}

impl PortfolioEngine {
    /// Create an engine with an explicit visibility observer.
    #[must_use]
    pub fn new(options: Options, observer: Box<dyn VisibilityObserver>) -> Self {
        let konami = KonamiMatcher::new(options.easter.konami.clone());
        let logo_clicks = ClickCounter::new(options.easter.logo_click_threshold);
        Self {
            options,
            caps: Capabilities::default(),
            timers: TimerQueue::new(),
            scroll_animator: ScrollAnimator::new(),
            scroll_gate: FrameGate::new(),
            observer,
            konami,
            logo_clicks,
            nav: None,
            logo: None,
            contact_button: None,
            anchors: FxHashMap::default(),
            interactive: FxHashSet::default(),
            project_cards: FxHashSet::default(),
            skill_tags: FxHashSet::default(),
            touchable: FxHashSet::default(),
            haptic: FxHashSet::default(),
            overlay: None,
        }
    }

    /// Create an engine with the production geometric observer, built from
    /// the reveal options.
    #[must_use]
    pub fn with_viewport_observer(options: Options) -> Self {
        let observer = ViewportObserver::new(
            options.reveal.threshold,
            options.reveal.bottom_inset,
        );
        Self::new(options, Box::new(observer))
    }

    /// Wire every feature against the live document.
    ///
    /// Queries the configured element sets, applies the one-time startup
    /// mutations (reveal arming, page hints, decoration, entrance
    /// scheduling, viewport unit), and records host capabilities. Absent
    /// elements silently skip their feature.
    pub fn attach(&mut self, host: &mut dyn DocumentHost, now: Instant) {
        self.caps = host.capabilities();

        self.wire_elements(host);
        self.arm_reveal(host);
        self.spawn_floating_emojis(host);
        self.apply_page_hints(host);
        self.schedule_entrance(host, now);
        self.refresh_viewport_unit(host);

        log::info!(
            "page interactivity attached: {} anchors, {} interactive, \
             touch={}",
            self.anchors.len(),
            self.interactive.len(),
            self.caps.touch
        );
    }

    /// Feed one page event.
    pub fn handle_event(
        &mut self,
        host: &mut dyn DocumentHost,
        event: PageEvent,
        now: Instant,
    ) {
        match event {
            PageEvent::Click { target } => self.on_click(host, target, now),
            PageEvent::PointerEnter { target } => {
                self.on_pointer_enter(host, target);
            }
            PageEvent::PointerLeave { target } => {
                self.on_pointer_leave(host, target);
            }
            PageEvent::TouchStart { target } => {
                self.on_touch_start(host, target);
            }
            PageEvent::TouchEnd { target } => self.on_touch_end(target, now),
            PageEvent::KeyDown { code } => self.on_key_down(host, &code, now),
            PageEvent::Scroll => self.scroll_gate.request(),
            PageEvent::Resize => self.refresh_viewport_unit(host),
            PageEvent::OrientationChange => {
                // Wait for the rotation to settle before re-measuring
                self.timers.schedule_slotted(
                    Slot::ViewportRefresh,
                    now,
                    Duration::from_millis(500),
                    Action::RefreshViewportUnit,
                );
            }
        }
    }

    /// Run one display frame: fire due timers, step the scroll animation,
    /// evaluate coalesced scroll work, and poll the visibility observer.
    pub fn tick(&mut self, host: &mut dyn DocumentHost, now: Instant) {
        for action in self.timers.drain_due(now) {
            self.apply(host, action, now);
        }

        if let Some(y) = self.scroll_animator.step(now) {
            host.set_scroll_y(y);
        }

        if self.scroll_gate.take() {
            self.evaluate_nav(host);
        }

        let entered = self.observer.poll(host);
        for (index, node) in entered.into_iter().enumerate() {
            self.timers.schedule(
                now,
                stagger_delay(index, self.options.reveal.section_stagger_ms),
                Action::Reveal { node },
            );
        }
    }

    /// Whether a smooth-scroll animation is in flight.
    #[must_use]
    pub fn is_scroll_animating(&self) -> bool {
        self.scroll_animator.is_animating()
    }

    /// Number of pending delayed mutations.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── attach-time wiring ──────────────────────────────────────────────

    fn wire_elements(&mut self, host: &dyn DocumentHost) {
        let sel = self.options.selectors.clone();

        self.nav = host.query_first(&sel.nav);
        self.logo = host.query_first(&sel.logo);
        self.contact_button = host.query_first(&sel.contact_button);
        self.interactive = Self::query_set(host, &sel.interactive);
        self.project_cards =
            host.query(&sel.project_card).into_iter().collect();
        self.skill_tags = host.query(&sel.skill_tag).into_iter().collect();
        self.touchable = Self::query_set(host, &sel.touchable);
        self.haptic = Self::query_set(host, &sel.haptic);

        // Same-page fragment anchors drive the smooth-scroll animator
        self.anchors.clear();
        for anchor in host.query("a") {
            let Some(href) = host.attribute(anchor, "href") else {
                continue;
            };
            if let Some(fragment) = href.strip_prefix('#') {
                if !fragment.is_empty() {
                    let _ = self
                        .anchors
                        .insert(anchor, fragment.to_owned());
                }
            }
        }
    }

    fn query_set(
        host: &dyn DocumentHost,
        selectors: &[String],
    ) -> FxHashSet<NodeId> {
        selectors
            .iter()
            .flat_map(|s| host.query(s))
            .collect()
    }

    fn arm_reveal(&mut self, host: &mut dyn DocumentHost) {
        for selector in &self.options.selectors.sections {
            for section in host.query(selector) {
                host.add_class(section, "fade-up");
                self.observer.observe(section);
            }
        }
    }

    fn spawn_floating_emojis(&mut self, host: &mut dyn DocumentHost) {
        let Some(hero) = host.query_first(&self.options.selectors.hero) else {
            return;
        };
        let container = host
            .query_within(hero, ".floating-emojis")
            .first()
            .copied()
            .unwrap_or_else(|| {
                host.append_child(hero, "div", "floating-emojis", "")
            });

        let decor = self.options.decor.clone();
        for (index, emoji) in
            decor.emojis.iter().take(decor.emoji_count).enumerate()
        {
            let span =
                host.append_child(container, "span", "floating-emoji", emoji);
            let delay = index as f32 * decor.emoji_delay_s;
            host.set_style(span, "animation-delay", &format!("{delay}s"));
        }
    }

    fn apply_page_hints(&mut self, host: &mut dyn DocumentHost) {
        for img in host.query(&self.options.selectors.images) {
            if !host.has_attribute(img, "loading") {
                host.set_attribute(img, "loading", "lazy");
            }
        }
        for selector in &self.options.selectors.will_change.clone() {
            for node in host.query(selector) {
                host.set_style(node, "will-change", "transform");
            }
        }
    }

    fn schedule_entrance(&mut self, host: &mut dyn DocumentHost, now: Instant) {
        let decor = self.options.decor.clone();
        let mut index = 0;
        for selector in &self.options.selectors.hero_entrance.clone() {
            for node in host.query(selector) {
                host.set_style(node, "opacity", "0");
                host.set_style(node, "transform", "translateY(30px)");
                self.timers.schedule(
                    now,
                    staggered_after(
                        decor.entrance_base_ms,
                        index,
                        decor.entrance_step_ms,
                    ),
                    Action::EntranceShow { node },
                );
                index += 1;
            }
        }
    }

    fn refresh_viewport_unit(&self, host: &mut dyn DocumentHost) {
        let vh = host.viewport_height() * 0.01;
        host.set_root_property("--vh", &format!("{vh}px"));
    }

    // ── event dispatch ──────────────────────────────────────────────────

    fn on_click(
        &mut self,
        host: &mut dyn DocumentHost,
        target: NodeId,
        now: Instant,
    ) {
        if self.overlay == Some(target) {
            self.dismiss_overlay(host, target);
            return;
        }

        if self.logo == Some(target) && self.logo_clicks.click() {
            self.show_overlay(host, now);
        }

        if let Some(fragment) = self.anchors.get(&target).cloned() {
            self.start_anchor_scroll(host, &fragment, now);
        }

        if self.interactive.contains(&target) {
            host.add_class(target, "bounce-click");
            self.timers.schedule_slotted(
                Slot::BounceClick(target),
                now,
                Duration::from_millis(self.options.feedback.click_revert_ms),
                Action::RemoveClass {
                    node: target,
                    class: "bounce-click",
                },
            );
        }

        if self.contact_button == Some(target) {
            host.add_class(target, "btn-clicked");
            self.timers.schedule_slotted(
                Slot::ButtonClick(target),
                now,
                Duration::from_millis(self.options.feedback.button_revert_ms),
                Action::RemoveClass {
                    node: target,
                    class: "btn-clicked",
                },
            );
        }

        if self.skill_tags.contains(&target) {
            host.toggle_class(target, "skill-active");
            // Repeat clicks restart one revert timer (last writer wins)
            self.timers.schedule_slotted(
                Slot::TagActive(target),
                now,
                Duration::from_millis(self.options.feedback.tag_active_ms),
                Action::RemoveClass {
                    node: target,
                    class: "skill-active",
                },
            );
        }
    }

    fn on_pointer_enter(&mut self, host: &mut dyn DocumentHost, target: NodeId) {
        // Hover styling never applies on touch-driven hosts
        if self.caps.touch {
            return;
        }
        if self.interactive.contains(&target) {
            host.add_class(target, "bounce-hover");
        }
        if self.project_cards.contains(&target) {
            host.add_class(target, "project-hover");
            let parallax = self.options.feedback.tag_parallax_px;
            let tags =
                host.query_within(target, &self.options.selectors.tech_tag);
            for (index, tag) in tags.into_iter().enumerate() {
                let offset = index as f32 * parallax;
                host.set_style(
                    tag,
                    "transform",
                    &format!("translateY(-{offset}px)"),
                );
            }
        }
    }

    fn on_pointer_leave(&mut self, host: &mut dyn DocumentHost, target: NodeId) {
        if self.interactive.contains(&target) {
            host.remove_class(target, "bounce-hover");
        }
        if self.project_cards.contains(&target) {
            host.remove_class(target, "project-hover");
            let tags =
                host.query_within(target, &self.options.selectors.tech_tag);
            for tag in tags {
                host.clear_style(tag, "transform");
            }
        }
    }

    fn on_touch_start(&mut self, host: &mut dyn DocumentHost, target: NodeId) {
        if !self.caps.touch {
            return;
        }
        if self.touchable.contains(&target) {
            host.add_class(target, "touch-feedback");
        }
        if self.caps.vibration && self.haptic.contains(&target) {
            host.vibrate(self.options.feedback.haptic_pulse_ms);
        }
    }

    fn on_touch_end(&mut self, target: NodeId, now: Instant) {
        if !self.caps.touch || !self.touchable.contains(&target) {
            return;
        }
        self.timers.schedule_slotted(
            Slot::TouchFeedback(target),
            now,
            Duration::from_millis(self.options.feedback.touch_revert_ms),
            Action::RemoveClass {
                node: target,
                class: "touch-feedback",
            },
        );
    }

    fn on_key_down(
        &mut self,
        host: &mut dyn DocumentHost,
        code: &str,
        now: Instant,
    ) {
        if self.konami.push(code) {
            self.activate_secret_mode(host, now);
        }
    }

    // ── scroll features ─────────────────────────────────────────────────

    fn start_anchor_scroll(
        &mut self,
        host: &mut dyn DocumentHost,
        fragment: &str,
        now: Instant,
    ) {
        let Some(dest) = host.query_first(&format!("#{fragment}")) else {
            return;
        };
        let nav_height = self.nav.map_or(
            self.options.scroll.nav_fallback_height,
            |nav| host.rect(nav).height(),
        );
        let target = host.rect(dest).top()
            - nav_height
            - self.options.scroll.anchor_margin;

        log::debug!("anchor scroll to #{fragment} (target {target})");
        self.scroll_animator.start(
            host.scroll_y(),
            target,
            now,
            Duration::from_millis(self.options.scroll.duration_ms),
            self.options.scroll.easing,
        );
    }

    fn evaluate_nav(&mut self, host: &mut dyn DocumentHost) {
        let Some(nav) = self.nav else {
            return;
        };
        if host.scroll_y() > self.options.scroll.nav_threshold {
            host.add_class(nav, "nav-scrolled");
        } else {
            host.remove_class(nav, "nav-scrolled");
        }
    }

    // ── easter eggs ─────────────────────────────────────────────────────

    fn activate_secret_mode(
        &mut self,
        host: &mut dyn DocumentHost,
        now: Instant,
    ) {
        log::debug!("secret mode activated");
        let body = host.body();
        host.add_class(body, "secret-mode");

        for heading in host.query(&self.options.selectors.headings.clone()) {
            host.set_style(heading, "background", SECRET_GRADIENT);
            host.set_style(heading, "background-size", "400% 400%");
            host.set_style(heading, "-webkit-background-clip", "text");
            host.set_style(
                heading,
                "-webkit-text-fill-color",
                "transparent",
            );
            host.set_style(heading, "animation", "rainbow 3s ease infinite");
        }

        // Re-activation extends the active window instead of stacking
        self.timers.schedule_slotted(
            Slot::SecretMode,
            now,
            Duration::from_millis(self.options.easter.secret_duration_ms),
            Action::DeactivateSecret,
        );
    }

    fn deactivate_secret_mode(&mut self, host: &mut dyn DocumentHost) {
        let body = host.body();
        host.remove_class(body, "secret-mode");
        for heading in host.query(&self.options.selectors.headings.clone()) {
            for prop in SECRET_STYLE_PROPS {
                host.clear_style(heading, prop);
            }
        }
    }

    fn show_overlay(&mut self, host: &mut dyn DocumentHost, now: Instant) {
        log::debug!("hidden overlay unlocked");
        let body = host.body();
        let overlay =
            host.append_child(body, "div", "maker-secret", OVERLAY_TEXT);
        self.overlay = Some(overlay);
        self.timers.schedule_slotted(
            Slot::Overlay,
            now,
            Duration::from_millis(self.options.easter.overlay_duration_ms),
            Action::DismissOverlay { node: overlay },
        );
    }

    fn dismiss_overlay(&mut self, host: &mut dyn DocumentHost, node: NodeId) {
        // Explicit dismissal and the auto-dismiss timer may both run
        if host.contains(node) {
            host.remove_node(node);
        }
        if self.overlay == Some(node) {
            self.overlay = None;
        }
        self.timers.cancel_slot(&Slot::Overlay);
    }

    // ── delayed-action execution ────────────────────────────────────────

    fn apply(
        &mut self,
        host: &mut dyn DocumentHost,
        action: Action,
        now: Instant,
    ) {
        match action {
            Action::AddClass { node, class } => host.add_class(node, class),
            Action::RemoveClass { node, class } => {
                host.remove_class(node, class);
            }
            Action::Reveal { node } => self.reveal(host, node, now),
            Action::EntranceShow { node } => {
                host.set_style(node, "transition", ENTRANCE_TRANSITION);
                host.set_style(node, "opacity", "1");
                host.set_style(node, "transform", "translateY(0)");
            }
            Action::DeactivateSecret => self.deactivate_secret_mode(host),
            Action::DismissOverlay { node } => {
                self.dismiss_overlay(host, node);
            }
            Action::RefreshViewportUnit => self.refresh_viewport_unit(host),
        }
    }

    fn reveal(&mut self, host: &mut dyn DocumentHost, node: NodeId, now: Instant) {
        host.add_class(node, "animate");

        // Containers fan out into staggered child animations
        if host.has_class(node, "projects") {
            let cards =
                host.query_within(node, &self.options.selectors.project_card);
            for (index, card) in cards.into_iter().enumerate() {
                self.timers.schedule(
                    now,
                    stagger_delay(index, self.options.reveal.card_stagger_ms),
                    Action::AddClass {
                        node: card,
                        class: "bounce-in",
                    },
                );
            }
        }
        if host.has_class(node, "skills-container") {
            let tags =
                host.query_within(node, &self.options.selectors.skill_tag);
            for (index, tag) in tags.into_iter().enumerate() {
                self.timers.schedule(
                    now,
                    stagger_delay(index, self.options.reveal.tag_stagger_ms),
                    Action::AddClass {
                        node: tag,
                        class: "skill-reveal",
                    },
                );
            }
        }
    }
}

impl std::fmt::Debug for PortfolioEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioEngine")
            .field("caps", &self.caps)
            .field("pending_timers", &self.timers.len())
            .field("scroll_animating", &self.scroll_animator.is_animating())
            .field("anchors", &self.anchors.len())
            .finish()
    }
}
