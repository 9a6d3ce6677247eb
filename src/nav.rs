//! Top navigation state: the general/pro mode switch, the active section
//! per mode, and the hover-driven menu preview with its delayed hide.
//!
//! Hiding is deadline-based rather than callback-based: pointer-leave arms
//! a single deadline, any pointer-enter disarms it, and the event loop's
//! periodic [`Navigation::tick`] fires it once the delay elapses. There is
//! never more than one pending deadline.

use std::time::{Duration, Instant};

use crate::constants::{HOVER_HIDE_DELAY, SECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    General,
    Pro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Chart,
    Events,
    Sns,
    News,
    Community,
}

impl Section {
    pub fn label(self) -> &'static str {
        SECTIONS
            .iter()
            .find(|(section, _)| *section == self)
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Navigation {
    mode: Mode,
    active: Section,
    /// Last active section per mode, restored when switching back.
    general_memory: Section,
    pro_memory: Section,
    open_menu: Option<Section>,
    hide_deadline: Option<Instant>,
    hide_delay: Duration,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            mode: Mode::General,
            active: Section::Chart,
            general_memory: Section::Chart,
            pro_memory: Section::Chart,
            open_menu: None,
            hide_deadline: None,
            hide_delay: HOVER_HIDE_DELAY,
        }
    }

    #[cfg(test)]
    fn with_hide_delay(delay: Duration) -> Self {
        Self {
            hide_delay: delay,
            ..Self::new()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn open_menu(&self) -> Option<Section> {
        self.open_menu
    }

    /// Switches mode, remembering the outgoing mode's section and restoring
    /// the incoming one's. Re-selecting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        match self.mode {
            Mode::General => self.general_memory = self.active,
            Mode::Pro => self.pro_memory = self.active,
        }
        self.mode = mode;
        self.active = match mode {
            Mode::General => self.general_memory,
            Mode::Pro => self.pro_memory,
        };
        self.dismiss_menu();
        tracing::debug!(?mode, section = ?self.active, "switched nav mode");
    }

    /// The logo resets navigation to its initial general-mode state.
    pub fn handle_logo_click(&mut self) {
        match self.mode {
            Mode::General => self.general_memory = self.active,
            Mode::Pro => self.pro_memory = self.active,
        }
        self.mode = Mode::General;
        self.active = Section::Chart;
        self.general_memory = Section::Chart;
        self.dismiss_menu();
    }

    /// Clicking a nav entry in general mode only activates it; in pro mode
    /// it also pins the section's menu open.
    pub fn handle_nav_click(&mut self, section: Section) {
        match self.mode {
            Mode::General => {
                self.active = section;
                self.dismiss_menu();
            }
            Mode::Pro => self.show_menu(section),
        }
    }

    /// Hover opens the section's menu preview. The menu is a pro-mode
    /// surface; general-mode hover is inert.
    pub fn handle_nav_pointer_enter(&mut self, section: Section) {
        if self.mode == Mode::Pro {
            self.show_menu(section);
        }
    }

    /// Activates `section` and opens its menu, disarming any pending hide.
    pub fn show_menu(&mut self, section: Section) {
        self.cancel_hover_hide();
        self.active = section;
        self.open_menu = Some(section);
    }

    pub fn dismiss_menu(&mut self) {
        self.cancel_hover_hide();
        self.open_menu = None;
    }

    /// Arms the hide deadline. Replaces any deadline already pending so the
    /// delay is always measured from the latest pointer-leave.
    pub fn schedule_hover_hide(&mut self, now: Instant) {
        if self.open_menu.is_some() {
            self.hide_deadline = Some(now + self.hide_delay);
        }
    }

    pub fn cancel_hover_hide(&mut self) {
        self.hide_deadline = None;
    }

    /// Fires the hide deadline if it has elapsed. Returns true when the menu
    /// was hidden so the caller can redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_deadline {
            Some(deadline) if now >= deadline => {
                self.hide_deadline = None;
                self.open_menu = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_restores_remembered_section() {
        let mut nav = Navigation::new();
        nav.handle_nav_click(Section::News);
        nav.set_mode(Mode::Pro);
        assert_eq!(nav.active_section(), Section::Chart);
        nav.handle_nav_click(Section::Community);
        nav.set_mode(Mode::General);
        assert_eq!(nav.active_section(), Section::News);
        nav.set_mode(Mode::Pro);
        assert_eq!(nav.active_section(), Section::Community);
    }

    #[test]
    fn reselecting_the_current_mode_keeps_the_section() {
        let mut nav = Navigation::new();
        nav.handle_nav_click(Section::Sns);
        nav.set_mode(Mode::General);
        assert_eq!(nav.active_section(), Section::Sns);
    }

    #[test]
    fn logo_click_resets_to_general_chart() {
        let mut nav = Navigation::new();
        nav.set_mode(Mode::Pro);
        nav.handle_nav_click(Section::Events);
        nav.handle_logo_click();
        assert_eq!(nav.mode(), Mode::General);
        assert_eq!(nav.active_section(), Section::Chart);
        assert_eq!(nav.open_menu(), None);
        // The pro section survives for the next mode switch.
        nav.set_mode(Mode::Pro);
        assert_eq!(nav.active_section(), Section::Events);
    }

    #[test]
    fn general_mode_click_activates_without_opening_the_menu() {
        let mut nav = Navigation::new();
        nav.handle_nav_pointer_enter(Section::News);
        assert_eq!(nav.open_menu(), None);
        nav.handle_nav_click(Section::News);
        assert_eq!(nav.active_section(), Section::News);
        assert_eq!(nav.open_menu(), None);
    }

    #[test]
    fn pro_mode_hover_activates_the_section_with_its_menu() {
        let mut nav = Navigation::new();
        nav.set_mode(Mode::Pro);
        nav.handle_nav_pointer_enter(Section::News);
        assert_eq!(nav.active_section(), Section::News);
        assert_eq!(nav.open_menu(), Some(Section::News));
    }

    #[test]
    fn hover_hide_fires_only_after_the_deadline() {
        let mut nav = Navigation::with_hide_delay(Duration::from_millis(150));
        let t0 = Instant::now();
        nav.set_mode(Mode::Pro);
        nav.handle_nav_pointer_enter(Section::News);
        nav.schedule_hover_hide(t0);
        assert!(!nav.tick(t0 + Duration::from_millis(100)));
        assert_eq!(nav.open_menu(), Some(Section::News));
        assert!(nav.tick(t0 + Duration::from_millis(150)));
        assert_eq!(nav.open_menu(), None);
        // A fired deadline does not fire again.
        assert!(!nav.tick(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn re_entering_cancels_a_pending_hide() {
        let mut nav = Navigation::with_hide_delay(Duration::from_millis(150));
        let t0 = Instant::now();
        nav.set_mode(Mode::Pro);
        nav.handle_nav_pointer_enter(Section::Sns);
        nav.schedule_hover_hide(t0);
        nav.handle_nav_pointer_enter(Section::Sns);
        assert!(!nav.tick(t0 + Duration::from_secs(10)));
        assert_eq!(nav.open_menu(), Some(Section::Sns));
    }

    #[test]
    fn leave_without_an_open_menu_arms_nothing() {
        let mut nav = Navigation::new();
        nav.schedule_hover_hide(Instant::now());
        assert!(!nav.tick(Instant::now() + Duration::from_secs(10)));
    }
}
