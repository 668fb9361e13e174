/// Pointer tracking in surface pixels.
///
/// Deltas accumulate only while the pointer is held down and are drained once
/// per frame by the render loop, so event delivery rate never changes how much
/// rotation a drag imparts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub down: bool,
    last_x: f32,
    last_y: f32,
    accum_dx: f32,
    accum_dy: f32,
}

impl PointerState {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.down = true;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        if self.down {
            self.accum_dx += x - self.last_x;
            self.accum_dy += y - self.last_y;
        }
        self.last_x = x;
        self.last_y = y;
    }

    pub fn end(&mut self) {
        self.down = false;
    }

    /// Take the deltas accumulated since the last frame.
    pub fn take_delta(&mut self) -> (f32, f32) {
        let d = (self.accum_dx, self.accum_dy);
        self.accum_dx = 0.0;
        self.accum_dy = 0.0;
        d
    }
}
