use std::time::Duration;

use anyhow::{anyhow, Context};
use ash::vk::{self, Handle};
use log::LevelFilter;

use cinder_core::{PlatformConfig, ShutdownToken, WindowHostEvent, WindowMode};
use cinder_platform_sdl::sdl::{push_window_created, window_rect, SdlEventSource};
use cinder_platform_sdl::{HostWindow, WindowEventState};
use cinder_render_vulkan_ash::{create_instance_with_config, destroy_instance, InstanceSurface};

const CONFIG_PATH: &str = "cinder.toml";
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    cinder_modules_logging::init(LevelFilter::Info);

    let cfg = PlatformConfig::load_or_default(CONFIG_PATH)?;
    log::info!("starting with {:?}", cfg.window);

    sdl2::hint::set("SDL_NO_SIGNAL_HANDLERS", "1");
    let sdl = sdl2::init().map_err(|e| anyhow!(e)).context("SDL init")?;
    let video = sdl.video().map_err(|e| anyhow!(e))?;
    let events = sdl.event().map_err(|e| anyhow!(e))?;

    let mut builder = video.window(&cfg.window.title, cfg.window.width, cfg.window.height);
    builder.vulkan().resizable().allow_highdpi().hidden();
    match cfg.window.position() {
        Some((x, y)) => builder.position(x, y),
        None => builder.position_centered(),
    };
    match cfg.window.mode {
        WindowMode::Windowed => {}
        WindowMode::Borderless => {
            builder.borderless();
        }
        WindowMode::Fullscreen => {
            builder.fullscreen();
        }
    }
    let mut window = builder.build().context("create window")?;
    let window_id = window.id();

    let required = window.vulkan_instance_extensions().map_err(|e| anyhow!(e))?;
    let instance = create_instance_with_config(&video, &required, &cfg.vulkan)?;

    let surface = match window.vulkan_create_surface(instance.as_raw() as usize as sdl2::video::VkInstance) {
        Ok(raw) => vk::SurfaceKHR::from_raw(raw as u64),
        Err(e) => {
            // SAFETY: the instance was created above and owns no children yet.
            unsafe { destroy_instance(&video, instance, None) };
            return Err(anyhow!(e).context("create vk surface"));
        }
    };
    // SAFETY: surface belongs to instance and ownership moves into the guard.
    let gpu = unsafe { InstanceSurface::from_raw(video.clone(), instance, surface) };
    log::info!("vk instance {:#x}, surface {:#x}", gpu.instance().as_raw(), gpu.surface().as_raw());

    push_window_created(&events, window_id)?;

    let mut state = WindowEventState::from_config(window_id, &cfg.tracker, window_rect(&window));
    let mut host = HostWindow::new(window_rect(&window));
    let mut pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let shutdown = ShutdownToken::new();

    while !shutdown.is_requested() {
        if !state.poll_and_update(&mut SdlEventSource::new(&mut pump)) {
            log::info!("quit requested");
            shutdown.request();
        }

        for event in host.process(&mut state, || window_rect(&window)) {
            match event {
                WindowHostEvent::Shown(rect) => {
                    log::info!("window shown at {rect:?}");
                    window.show();
                }
                WindowHostEvent::Resized { width, height } => {
                    let (dw, dh) = window.vulkan_drawable_size();
                    log::info!("resize {width}x{height} (drawable {dw}x{dh})");
                }
                WindowHostEvent::CloseRequested => shutdown.request(),
                other => log::debug!("{other:?}"),
            }
        }

        let (wx, wy) = state.take_wheel();
        if wx != 0 || wy != 0 {
            log::trace!("wheel {wx},{wy}");
        }

        std::thread::sleep(FRAME);
    }

    drop(gpu);
    log::info!("shutdown complete");
    Ok(())
}
