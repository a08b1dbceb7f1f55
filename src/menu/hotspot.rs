use glam::Vec4;

/// Marker drawn where a laser meets the menu panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    x: i32,
    y: i32,
    radius: f32,
    color: Vec4,
}

impl Hotspot {
    /// A parked hotspot.
    #[must_use]
    pub fn new(radius: f32, color: Vec4) -> Self {
        let mut hotspot = Self {
            x: 0,
            y: 0,
            radius,
            color,
        };
        hotspot.park();
        hotspot
    }

    /// Pixel position, bottom-left origin.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Place the marker at a panel pixel.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Move the marker far enough off the panel that none of it is drawn.
    pub fn park(&mut self) {
        let off = -(self.radius.max(0.0).ceil() as i32 + 1);
        self.x = off;
        self.y = off;
    }

    /// Whether the marker currently sits on the panel.
    #[must_use]
    pub fn is_on_surface(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Marker radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Change the radius, keeping a parked marker parked.
    pub fn set_radius(&mut self, radius: f32) {
        let parked = !self.is_on_surface();
        self.radius = radius;
        if parked {
            self.park();
        }
    }

    /// Marker color.
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Recolor the marker.
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }
}
