pub mod glsl;
pub mod logging;
pub mod scenes;

use anyhow::Context;
use backend::app::run_loop;
use backend::device::GlDevice;
use backend::mode::{Controls, KeyBindings};
use backend::system::{System, WindowConfig};

use scenes::Loaded;

/// Opens the window, builds the scene, runs the render loop and tears
/// everything down in reverse order.
pub fn run<F>(config: &WindowConfig, build: F) -> anyhow::Result<()>
where
    F: FnOnce() -> backend::Result<Loaded>,
{
    let mut system = System::new(config).context("failed to initialize window and GL context")?;
    let loaded = build().context("failed to build scene")?;

    let bindings = KeyBindings::default();
    log::info!(
        "keys: {:?} arrays, {:?} elements, {:?} wireframe, {:?} quit",
        bindings.arrays,
        bindings.elements,
        bindings.wireframe,
        bindings.close
    );
    let mut controls = Controls::new(bindings);
    run_loop(&mut system, &mut GlDevice, &loaded.scene, &mut controls);

    drop(loaded);
    log::info!("released GL resources");
    Ok(())
}
