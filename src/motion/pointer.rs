//! Pointer-driven displacement math for parallax, glow and magnetic buttons.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// `translate(xpx, ypx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate(pub Offset);

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.0.x, self.0.y)
    }
}

/// `translateY(ypx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateY(pub f64);

impl fmt::Display for TranslateY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateY({}px)", self.0)
    }
}

pub fn effects_enabled(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

/// Pointer position relative to the viewport centre, scaled so the edges
/// sit at `±range / 2`.
pub fn parallax_offset(client: Offset, viewport: Offset, range: f64) -> Offset {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Offset::default();
    }
    Offset::new(
        (client.x / viewport.x - 0.5) * range,
        (client.y / viewport.y - 0.5) * range,
    )
}

/// Particles drift in three depth bands.
pub fn particle_factor(index: usize) -> f64 {
    ((index % 3) + 1) as f64 * 0.2
}

/// Pull toward the pointer, measured from the button centre.
pub fn magnetic_offset(pointer: Offset, left: f64, top: f64, width: f64, height: f64, strength: f64) -> Offset {
    Offset::new(pointer.x - left - width / 2.0, pointer.y - top - height / 2.0).scaled(strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_viewport_is_neutral() {
        let offset = parallax_offset(Offset::new(640.0, 360.0), Offset::new(1280.0, 720.0), 30.0);
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn corners_reach_half_range() {
        let viewport = Offset::new(1000.0, 800.0);
        assert_eq!(parallax_offset(Offset::new(0.0, 0.0), viewport, 30.0), Offset::new(-15.0, -15.0));
        assert_eq!(parallax_offset(viewport, viewport, 30.0), Offset::new(15.0, 15.0));
    }

    #[test]
    fn zero_viewport_is_neutral() {
        assert_eq!(parallax_offset(Offset::new(5.0, 5.0), Offset::default(), 30.0), Offset::default());
    }

    #[test]
    fn layers_render_as_css() {
        let offset = Offset::new(10.0, -4.0);
        assert_eq!(Translate(offset.scaled(0.5)).to_string(), "translate(5px, -2px)");
        assert_eq!(TranslateY(300.0 * 0.3).to_string(), format!("translateY({}px)", 300.0 * 0.3));
    }

    #[test]
    fn particles_cycle_through_bands() {
        let factors: Vec<f64> = (0..6).map(particle_factor).collect();
        assert_eq!(factors[0], factors[3]);
        assert!(factors[0] < factors[1] && factors[1] < factors[2]);
    }

    #[test]
    fn magnet_pulls_toward_pointer() {
        let offset = magnetic_offset(Offset::new(150.0, 40.0), 100.0, 20.0, 80.0, 40.0, 0.2);
        assert_eq!(offset, Offset::new(2.0, 0.0));
    }

    #[test]
    fn effects_off_at_breakpoint() {
        assert!(!effects_enabled(768.0, 768.0));
        assert!(effects_enabled(1024.0, 768.0));
    }
}
