use crate::error::{Error, Result};
use crate::glutils::log_opengl_info;
use crate::input::Key;
use crate::window::Window;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::video::{GLProfile, SwapInterval};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub w: u32,
    pub h: u32,
    /// Core profile context version (major, minor).
    pub gl_version: (u8, u8),
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            w: 800,
            h: 600,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}

pub struct System {
    pub w: u32,
    pub h: u32,
    // field order is drop order: the context goes before the window
    pub gl_ctx: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub event_pump: sdl2::EventPump,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
    close_requested: bool,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System> {
        let sdl_context = sdl2::init().map_err(Error::Window)?;
        let video_subsystem = sdl_context.video().map_err(Error::Window)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);

        let window = match video_subsystem
            .window(&config.title, config.w, config.h)
            .opengl()
            .resizable()
            .build()
        {
            Ok(w) => w,
            Err(e) => {
                return Err(Error::Window(format!(
                    "error while building OpenGL window: {e}"
                )))
            }
        };

        let gl_ctx = window.gl_create_context().map_err(Error::Window)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
        if !gl::Viewport::is_loaded() || !gl::CreateShader::is_loaded() {
            return Err(Error::Loader(
                "core GL entry points could not be resolved".to_string(),
            ));
        }

        if config.vsync {
            if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("vsync not available: {e}");
            }
        }

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);

        let event_pump = sdl_context.event_pump().map_err(Error::Window)?;

        log::info!(
            "created window \"{}\" {}x{}, GL {}.{} core",
            config.title,
            config.w,
            config.h,
            config.gl_version.0,
            config.gl_version.1
        );
        log_opengl_info();

        let (fb_w, fb_h) = window.drawable_size();
        resize_viewport(fb_w, fb_h);

        Ok(System {
            w: config.w,
            h: config.h,
            gl_ctx,
            window,
            event_pump,
            video_subsystem,
            sdl_context,
            close_requested: false,
        })
    }
}

fn resize_viewport(w: u32, h: u32) {
    unsafe { gl::Viewport(0, 0, w as i32, h as i32) };
}

fn scancode(key: Key) -> Scancode {
    match key {
        Key::Escape => Scancode::Escape,
        Key::Enter => Scancode::Return,
        Key::Tab => Scancode::Tab,
        Key::Space => Scancode::Space,
        Key::A => Scancode::A,
        Key::B => Scancode::B,
        Key::C => Scancode::C,
        Key::D => Scancode::D,
        Key::E => Scancode::E,
        Key::F => Scancode::F,
        Key::G => Scancode::G,
        Key::H => Scancode::H,
        Key::I => Scancode::I,
        Key::J => Scancode::J,
        Key::K => Scancode::K,
        Key::L => Scancode::L,
        Key::M => Scancode::M,
        Key::N => Scancode::N,
        Key::O => Scancode::O,
        Key::P => Scancode::P,
        Key::Q => Scancode::Q,
        Key::R => Scancode::R,
        Key::S => Scancode::S,
        Key::T => Scancode::T,
        Key::U => Scancode::U,
        Key::V => Scancode::V,
        Key::W => Scancode::W,
        Key::X => Scancode::X,
        Key::Y => Scancode::Y,
        Key::Z => Scancode::Z,
        Key::Digit0 => Scancode::Num0,
        Key::Digit1 => Scancode::Num1,
        Key::Digit2 => Scancode::Num2,
        Key::Digit3 => Scancode::Num3,
        Key::Digit4 => Scancode::Num4,
        Key::Digit5 => Scancode::Num5,
        Key::Digit6 => Scancode::Num6,
        Key::Digit7 => Scancode::Num7,
        Key::Digit8 => Scancode::Num8,
        Key::Digit9 => Scancode::Num9,
    }
}

impl Window for System {
    fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    log::info!("quit requested by the window system");
                    self.close_requested = true;
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } => {
                    log::debug!("framebuffer resized to {w}x{h}");
                    let (fb_w, fb_h) = self.window.drawable_size();
                    resize_viewport(fb_w, fb_h);
                }
                _ => {}
            }
        }
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.event_pump
            .keyboard_state()
            .is_scancode_pressed(scancode(key))
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }
}
