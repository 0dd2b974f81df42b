use crate::input::{Key, KeyFrame, KeyTracker};
use crate::window::Window;

/// Geometry submission method.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawMode {
    /// Non-indexed draw of the bound vertex data.
    Arrays,
    /// Indexed draw through the bound element buffer.
    Elements,
}

/// User-selected render state. Starts with no draw mode and filled polygons.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderMode {
    pub draw: Option<DrawMode>,
    pub wireframe: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyBindings {
    pub close: Key,
    pub arrays: Key,
    pub elements: Key,
    pub wireframe: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: Key::Escape,
            arrays: Key::T,
            elements: Key::R,
            wireframe: Key::P,
        }
    }
}

impl KeyBindings {
    pub fn keys(&self) -> [Key; 4] {
        [self.close, self.arrays, self.elements, self.wireframe]
    }

    pub fn close_requested(&self, frame: &KeyFrame) -> bool {
        frame.is_held(self.close)
    }
}

impl RenderMode {
    /// Applies one frame of keyboard input.
    ///
    /// Draw mode follows the held level, arrays first when both keys are
    /// down. Wireframe flips on the key-down edge only, so holding the key
    /// toggles once.
    pub fn update(self, frame: &KeyFrame, bindings: &KeyBindings) -> RenderMode {
        let mut next = self;

        if frame.is_held(bindings.arrays) {
            next.draw = Some(DrawMode::Arrays);
        } else if frame.is_held(bindings.elements) {
            next.draw = Some(DrawMode::Elements);
        }

        if frame.was_pressed(bindings.wireframe) {
            next.wireframe = !next.wireframe;
        }

        next
    }
}

/// Per-frame input processing: close key, draw mode, wireframe.
#[derive(Debug, Default)]
pub struct Controls {
    bindings: KeyBindings,
    tracker: KeyTracker,
    mode: RenderMode,
}

impl Controls {
    pub fn new(bindings: KeyBindings) -> Controls {
        Controls {
            bindings,
            tracker: KeyTracker::default(),
            mode: RenderMode::default(),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn process_input<W: Window + ?Sized>(&mut self, window: &mut W) -> RenderMode {
        let frame = self.tracker.sample(&*window, &self.bindings.keys());

        if self.bindings.close_requested(&frame) && !window.should_close() {
            log::info!("close key pressed");
            window.request_close();
        }

        let next = self.mode.update(&frame, &self.bindings);
        if next != self.mode {
            log::debug!("render mode {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
        next
    }
}
