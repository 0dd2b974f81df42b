use crate::device::GraphicsDevice;
use crate::mode::Controls;
use crate::render::{render_frame, Scene};
use crate::window::Window;

/// Runs until the window's close latch is set. Returns the number of frames
/// presented.
pub fn run_loop<W, D>(window: &mut W, device: &mut D, scene: &Scene, controls: &mut Controls) -> u64
where
    W: Window + ?Sized,
    D: GraphicsDevice + ?Sized,
{
    let mut frames = 0;
    loop {
        window.poll_events();
        let mode = controls.process_input(window);
        if window.should_close() {
            break;
        }
        render_frame(device, scene, mode);
        window.swap_buffers();
        frames += 1;
    }
    log::info!("render loop finished after {} frame(s)", frames);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{Call, FakeDevice, FakeWindow};
    use crate::input::Key;
    use crate::render::Batch;

    fn scene() -> Scene {
        Scene::new(
            vec![Batch {
                program: 1,
                vertex_array: 1,
                vertex_count: 3,
                index_count: Some(6),
            }],
            true,
        )
    }

    #[test]
    fn stops_on_close_key() {
        let mut window = FakeWindow::scripted(vec![vec![], vec![Key::T], vec![Key::Escape]]);
        let mut device = FakeDevice::default();
        let frames = run_loop(&mut window, &mut device, &scene(), &mut Controls::default());
        assert_eq!(frames, 2);
        assert_eq!(window.swaps, 2);
        assert_eq!(device.draws(), vec![&Call::DrawArrays(3)]);
    }

    #[test]
    fn stops_on_platform_quit() {
        let mut window = FakeWindow {
            quit_on_poll: Some(4),
            ..FakeWindow::default()
        };
        let mut device = FakeDevice::default();
        let frames = run_loop(&mut window, &mut device, &scene(), &mut Controls::default());
        assert_eq!(frames, 3);
        assert!(device.draws().is_empty());
    }

    #[test]
    fn mode_changes_carry_across_frames() {
        let mut window = FakeWindow::scripted(vec![
            vec![Key::R],
            vec![],
            vec![Key::P],
            vec![Key::P],
            vec![Key::T],
            vec![Key::Escape],
        ]);
        let mut device = FakeDevice::default();
        let mut controls = Controls::default();
        run_loop(&mut window, &mut device, &scene(), &mut controls);
        assert_eq!(
            device.draws(),
            vec![
                &Call::DrawElements(6),
                &Call::DrawElements(6),
                &Call::DrawElements(6),
                &Call::DrawElements(6),
                &Call::DrawArrays(3),
            ]
        );
        assert!(controls.mode().wireframe);
    }
}
