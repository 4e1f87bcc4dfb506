use crate::domain::Rgba;

/// Anything the grid can draw onto: a canvas, a texture, a test log
pub trait Surface {
    /// Blank the whole surface
    fn clear(&mut self, color: Rgba);

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Clear(Rgba),
    Pixel { x: u32, y: u32, color: Rgba },
}

/// Surface that records draw calls instead of drawing
#[derive(Default, Debug)]
pub struct RenderLog {
    pub events: Vec<RenderEvent>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            RenderEvent::Pixel { x, y, color } => Some((x, y, color)),
            RenderEvent::Clear(_) => None,
        })
    }
}

impl Surface for RenderLog {
    fn clear(&mut self, color: Rgba) {
        self.events.push(RenderEvent::Clear(color));
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.events.push(RenderEvent::Pixel { x, y, color });
    }
}
