// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The host of a strada game.
//!
//! Owns the winit event loop. When the platform resumes the application it
//! creates the window and the render system, then forwards resize and redraw
//! callbacks to the renderer and keeps asking for new frames.

pub mod config;

pub use config::{EngineConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};

use anyhow::Result;
use std::time::Duration;
use strada_core::platform::SurfaceWindow;
use strada_core::renderer::{RenderSettings, RenderSystem};
use strada_core::telemetry::FrameTelemetry;
use strada_infra::{WgpuRenderSystem, WinitWindow, WinitWindowBuilder};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

/// The internal state of the running engine, managed by the winit event loop.
struct EngineState {
    config: EngineConfig,
    window: Option<WinitWindow>,
    renderer: Option<Box<dyn RenderSystem>>,
    telemetry: FrameTelemetry,
    render_settings: RenderSettings,
    minimized: bool,
    startup_error: Option<anyhow::Error>,
}

impl EngineState {
    fn new(config: EngineConfig) -> Self {
        Self {
            telemetry: FrameTelemetry::new(Duration::from_secs(config.telemetry_interval_secs)),
            render_settings: config.render_settings(),
            config,
            window: None,
            renderer: None,
            minimized: false,
            startup_error: None,
        }
    }

    /// Creates the window and brings the renderer up against it.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = WinitWindowBuilder::new()
            .with_title(self.config.window_title.clone())
            .with_dimensions(self.config.window_width, self.config.window_height)
            .build(event_loop)?;

        let mut renderer: Box<dyn RenderSystem> =
            Box::new(WgpuRenderSystem::new(self.config.vsync));
        renderer.init(&window)?;

        if let Some(info) = renderer.get_adapter_info() {
            log::info!(
                "Renderer ready on \"{}\" ({:?}, {:?}).",
                info.name,
                info.backend_type,
                info.device_type
            );
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.minimized = width == 0 || height == 0;
        log::info!("Window resized to: {width}x{height}");
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }

    fn redraw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match renderer.render(&self.render_settings) {
            Ok(stats) => {
                log::trace!("Frame {} rendered.", stats.frame_number);
                self.telemetry.record(&stats);
            }
            Err(e) => log::error!("Rendering error: {e}"),
        }

        if self.telemetry.tick() {
            log::info!("Frame telemetry: {}", self.telemetry.summary());
        }
    }
}

impl Drop for EngineState {
    fn drop(&mut self) {
        log::info!("Stopping the engine...");

        if let Some(mut renderer) = self.renderer.take() {
            renderer.shutdown();
        }

        log::info!("Engine stopped.");
    }
}

impl ApplicationHandler for EngineState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Application resumed. Initializing window and renderer...");
        if let Err(e) = self.start(event_loop) {
            log::error!("Engine startup failed: {e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.winit_id() != id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resized(size.width, size.height),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("Scale factor changed to {scale_factor}.");
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    /// Keeps frames coming while the window is visible. A minimized window
    /// waits for the next resize.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.minimized {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// The public entry point of the engine.
pub struct Engine;

impl Engine {
    /// Opens the window and runs the render loop until it is closed.
    ///
    /// Blocks the current thread. Returns an error if the event loop cannot be
    /// created or if the window or renderer fail to start.
    pub fn run(config: EngineConfig) -> Result<()> {
        log::info!("Strada SDK: Starting...");
        let event_loop = EventLoop::new()?;

        let mut app_state = EngineState::new(config);
        event_loop.run_app(&mut app_state)?;

        match app_state.startup_error.take() {
            Some(e) => Err(e.context("Engine failed to start")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_stops_redraw_requests() {
        let mut state = EngineState::new(EngineConfig::default());
        assert!(!state.minimized);

        state.resized(0, 0);
        assert!(state.minimized);

        state.resized(1280, 0);
        assert!(state.minimized);

        state.resized(1280, 720);
        assert!(!state.minimized);
    }
}
