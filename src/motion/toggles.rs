//! Open/closed state for the mobile menu, the FAQ accordion and the
//! product hotspots. Items are addressed by index.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn on_resize(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        viewport_width > breakpoint && self.close()
    }

    pub fn on_outside_click(&mut self, inside_menu_or_toggle: bool) -> bool {
        !inside_menu_or_toggle && self.close()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    /// Opening an item closes its siblings. Clicking an open item closes it.
    pub fn toggle(&mut self, index: usize) {
        let Some(&was_open) = self.open.get(index) else {
            return;
        };
        if !was_open {
            self.open.iter_mut().for_each(|open| *open = false);
        }
        self.open[index] = !was_open;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn open_items(&self) -> Vec<usize> {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(index, &open)| open.then_some(index))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotspotGroup {
    open: Option<usize>,
}

impl HotspotGroup {
    pub fn hover(&mut self, index: usize) {
        self.open = Some(index);
    }

    pub fn leave(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        }
    }

    pub fn tap(&mut self, index: usize) {
        self.open = match self.open {
            Some(open) if open == index => None,
            _ => Some(index),
        };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_closes_on_escape_only() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
        assert!(!menu.on_key("Escape"));
    }

    #[test]
    fn menu_closes_when_widened_past_breakpoint() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_resize(500.0, 768.0));
        assert!(menu.is_open());
        assert!(menu.on_resize(1024.0, 768.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_ignores_clicks_inside() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_outside_click(true));
        assert!(menu.is_open());
        assert!(menu.on_outside_click(false));
    }

    #[test]
    fn accordion_keeps_only_latest_open() {
        let mut faq = AccordionState::new(4);
        faq.toggle(0);
        faq.toggle(2);
        assert_eq!(faq.open_items(), vec![2]);
    }

    #[test]
    fn accordion_click_on_open_item_closes_it() {
        let mut faq = AccordionState::new(3);
        faq.toggle(1);
        faq.toggle(1);
        assert!(faq.open_items().is_empty());
    }

    #[test]
    fn accordion_ignores_out_of_range() {
        let mut faq = AccordionState::new(2);
        faq.toggle(5);
        assert!(faq.open_items().is_empty());
        assert!(!faq.is_open(5));
    }

    #[test]
    fn tap_switches_to_new_hotspot() {
        let mut spots = HotspotGroup::default();
        spots.tap(1);
        spots.tap(0);
        assert!(spots.is_open(0));
        assert!(!spots.is_open(1));
        spots.tap(0);
        assert_eq!(spots.open(), None);
    }

    #[test]
    fn leaving_another_hotspot_keeps_current() {
        let mut spots = HotspotGroup::default();
        spots.hover(2);
        spots.leave(1);
        assert!(spots.is_open(2));
        spots.leave(2);
        assert_eq!(spots.open(), None);
        spots.tap(3);
        spots.close_all();
        assert_eq!(spots.open(), None);
    }
}
