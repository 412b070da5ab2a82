use crate::app::{App, AppResult};
use std::sync::Arc;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopWindowTarget;

pub const WINDOW_TITLE: &str = "Carbon-12";

/// Shared event loop body for native and web.
fn handle_loop_event(app: &mut App, event: Event<()>, target: &EventLoopWindowTarget<()>) {
    match event {
        Event::WindowEvent { event, window_id } if window_id == app.window().id() => {
            if app.handle_event(&event) {
                return;
            }
            match event {
                WindowEvent::CloseRequested => target.exit(),
                WindowEvent::Resized(new_size) => app.resize(new_size),
                WindowEvent::RedrawRequested => {
                    app.update();
                    match app.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("Surface lost, reconfiguring");
                            app.resize(app.size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting");
                            target.exit();
                        }
                        Err(e) => log::warn!("Render error: {e:?}"),
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            // 지속적인 렌더링을 위해 redraw 요청
            app.window().request_redraw();
        }
        _ => {}
    }
}

/// 네이티브 플랫폼 시작 함수
#[cfg(not(target_arch = "wasm32"))]
pub fn start() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run_native() {
        log::error!("Failed to start: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_native() -> AppResult<()> {
    use pollster::block_on;
    use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .build(&event_loop)?,
    );

    let mut app = block_on(App::initialize(window))?;
    event_loop.run(move |event, target| handle_loop_event(&mut app, event, target))?;
    Ok(())
}

// wasm32 타겟에서 필요한 import들
#[cfg(target_arch = "wasm32")]
use {wasm_bindgen::JsCast, wasm_bindgen::prelude::*, wasm_bindgen_futures::spawn_local};

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Couldn't initialize logger: {err}").into());
    }
    console_error_panic_hook::set_once();

    spawn_local(async {
        if let Err(err) = run_web().await {
            log::error!("Failed to start: {err}");
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn run_web() -> AppResult<()> {
    use winit::event_loop::EventLoop;
    use winit::platform::web::{EventLoopExtWebSys, WindowBuilderExtWebSys};
    use winit::window::WindowBuilder;

    let canvas = mount_canvas()?;
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_canvas(Some(canvas))
            .build(&event_loop)?,
    );

    let mut app = App::initialize(window).await?;
    log::info!("Renderer created successfully!");
    event_loop.spawn(move |event, target| handle_loop_event(&mut app, event, target));
    Ok(())
}

/// The page must provide `<canvas id="canvas">`; without it nothing can render.
#[cfg(target_arch = "wasm32")]
fn mount_canvas() -> AppResult<web_sys::HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("No document available")?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| format!("Missing mount target #{CANVAS_ID}"))?;
    canvas
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("#{CANVAS_ID} is not a canvas").into())
}
