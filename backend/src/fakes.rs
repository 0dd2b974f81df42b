//! Test doubles for the window and device capabilities.

use std::collections::{HashSet, VecDeque};

use crate::device::{GraphicsDevice, PolygonMode};
use crate::input::Key;
use crate::window::Window;

#[derive(Debug, Default)]
pub struct FakeWindow {
    pub keys: HashSet<Key>,
    /// Key sets applied one per `poll_events`, front first.
    pub script: VecDeque<Vec<Key>>,
    /// Simulates a platform quit event on this poll (1-based).
    pub quit_on_poll: Option<usize>,
    pub closed: bool,
    pub close_requests: usize,
    pub polls: usize,
    pub swaps: usize,
}

impl FakeWindow {
    pub fn with_keys(keys: &[Key]) -> FakeWindow {
        let mut window = FakeWindow::default();
        window.set_keys(keys);
        window
    }

    pub fn scripted(script: Vec<Vec<Key>>) -> FakeWindow {
        FakeWindow {
            script: script.into(),
            ..FakeWindow::default()
        }
    }

    pub fn set_keys(&mut self, keys: &[Key]) {
        self.keys = keys.iter().copied().collect();
    }
}

impl Window for FakeWindow {
    fn poll_events(&mut self) {
        self.polls += 1;
        if let Some(keys) = self.script.pop_front() {
            self.set_keys(&keys);
        }
        if self.quit_on_poll == Some(self.polls) {
            self.closed = true;
        }
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn should_close(&self) -> bool {
        self.closed
    }

    fn request_close(&mut self) {
        self.close_requests += 1;
        self.closed = true;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PolygonMode(PolygonMode),
    Clear([f32; 4]),
    UseProgram(u32),
    BindVertexArray(u32),
    DrawArrays(i32),
    DrawElements(i32),
}

#[derive(Debug, Default)]
pub struct FakeDevice {
    pub calls: Vec<Call>,
}

impl FakeDevice {
    pub fn draws(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::DrawArrays(_) | Call::DrawElements(_)))
            .collect()
    }

    pub fn polygon_modes(&self) -> Vec<PolygonMode> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::PolygonMode(m) => Some(*m),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsDevice for FakeDevice {
    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.calls.push(Call::PolygonMode(mode));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(Call::Clear(color));
    }

    fn use_program(&mut self, program: u32) {
        self.calls.push(Call::UseProgram(program));
    }

    fn bind_vertex_array(&mut self, vertex_array: u32) {
        self.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn draw_arrays(&mut self, count: i32) {
        self.calls.push(Call::DrawArrays(count));
    }

    fn draw_elements(&mut self, count: i32) {
        self.calls.push(Call::DrawElements(count));
    }
}
