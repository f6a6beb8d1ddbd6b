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

use strada_core::camera::FixedCamera;
use strada_core::platform::SurfaceWindow;
use strada_core::renderer::{
    GraphicsBackendType, RenderError, RenderSettings, RenderStats, RenderSystem,
    RendererAdapterInfo, RendererDeviceType,
};
use strada_core::Stopwatch;

use super::context::WgpuGraphicsContext;
use super::conversions::{FromWgpu, IntoWgpu};
use super::flat_pass::FlatColorPass;
use super::ground_pass::GroundPass;

/// How many times a lost or outdated surface is reconfigured within one frame
/// before the frame is given up.
const MAX_SURFACE_RECONFIGURATIONS: u32 = 3;

/// Everything that exists only once the window surface does.
#[derive(Debug)]
struct GpuState {
    context: WgpuGraphicsContext,
    depth_view: wgpu::TextureView,
    ground: GroundPass,
    flat: FlatColorPass,
}

/// The wgpu implementation of [`RenderSystem`].
///
/// Draws the ground under the fixed camera every frame, and optionally the
/// decorative primitives on top.
#[derive(Debug)]
pub struct WgpuRenderSystem {
    state: Option<GpuState>,
    camera: FixedCamera,
    vsync: bool,
    current_width: u32,
    current_height: u32,
    frame_count: u64,
    last_frame_stats: RenderStats,
}

impl Default for WgpuRenderSystem {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WgpuRenderSystem {
    /// Creates an uninitialized render system. Nothing touches the GPU until
    /// [`RenderSystem::init`] is called.
    pub fn new(vsync: bool) -> Self {
        Self {
            state: None,
            camera: FixedCamera::new(),
            vsync,
            current_width: 0,
            current_height: 0,
            frame_count: 0,
            last_frame_stats: RenderStats::default(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// True while the window has no drawable area. No frame is acquired then.
    pub fn is_minimized(&self) -> bool {
        self.current_width == 0 || self.current_height == 0
    }

    /// Acquires the next surface texture, reconfiguring the surface when it is
    /// lost or outdated.
    fn acquire_frame(
        context: &mut WgpuGraphicsContext,
        width: u32,
        height: u32,
    ) -> Result<wgpu::SurfaceTexture, RenderError> {
        let mut attempts = 0;
        loop {
            match context.get_current_texture() {
                Ok(texture) => return Ok(texture),
                Err(e @ wgpu::SurfaceError::Lost) | Err(e @ wgpu::SurfaceError::Outdated) => {
                    if attempts == MAX_SURFACE_RECONFIGURATIONS {
                        return Err(RenderError::SurfaceAcquisitionFailed(format!(
                            "surface still {e:?} after {attempts} reconfigurations"
                        )));
                    }
                    attempts += 1;
                    log::warn!("Surface {e:?}, reconfiguring at {width}x{height}.");
                    context.resize(width, height);
                }
                Err(wgpu::SurfaceError::Timeout) => {
                    return Err(RenderError::SurfaceAcquisitionFailed(
                        "timed out waiting for the next frame".to_string(),
                    ));
                }
                Err(e) => return Err(RenderError::Internal(format!("surface error: {e}"))),
            }
        }
    }
}

impl RenderSystem for WgpuRenderSystem {
    fn init(&mut self, window: &dyn SurfaceWindow) -> Result<(), RenderError> {
        if self.state.is_some() {
            log::warn!("Render system already initialized, ignoring init.");
            return Ok(());
        }

        let (width, height) = window.inner_size();
        let context =
            WgpuGraphicsContext::new(window.clone_handle_arc(), (width, height), self.vsync)
                .map_err(|e| RenderError::InitializationFailed(format!("{e:#}")))?;

        let ground = GroundPass::new(&context)?;
        let flat = FlatColorPass::new(&context)?;
        let depth_view = context.create_depth_view();

        (self.current_width, self.current_height) = context.get_size();
        log::info!(
            "Render system up on \"{}\" at {}x{}.",
            context.adapter_name,
            self.current_width,
            self.current_height
        );

        self.state = Some(GpuState {
            context,
            depth_view,
            ground,
            flat,
        });
        Ok(())
    }

    fn resize(&mut self, new_width: u32, new_height: u32) {
        self.current_width = new_width;
        self.current_height = new_height;
        if self.is_minimized() {
            log::debug!("Window minimized ({new_width}x{new_height}), surface left as is.");
            return;
        }

        match self.state.as_mut() {
            Some(state) => {
                state.context.resize(new_width, new_height);
                state.depth_view = state.context.create_depth_view();
            }
            None => log::debug!("Resize before init, size recorded."),
        }
    }

    fn render(&mut self, settings: &RenderSettings) -> Result<RenderStats, RenderError> {
        let (width, height) = (self.current_width, self.current_height);
        let state = self.state.as_mut().ok_or(RenderError::NotInitialized)?;
        if width == 0 || height == 0 {
            return Ok(self.last_frame_stats.clone());
        }

        let preparation_timer = Stopwatch::new();

        // --- 1. Acquire Frame ---
        let output_surface_texture = Self::acquire_frame(&mut state.context, width, height)?;
        let target_texture_view = output_surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // --- 2. Camera and Mesh Upload ---
        let view_info = self.camera.view_info(width, height);
        let mvp = view_info.view_projection();
        state.ground.prepare(state.context.queue(), &mvp);
        if settings.show_primitives {
            state.flat.prepare(state.context.queue(), width, height);
        }
        let cpu_preparation_time_ms = preparation_timer.elapsed_ms();

        log::trace!("Frame {} prepared.", self.frame_count + 1);

        // --- 3. Encode ---
        let submission_timer = Stopwatch::new();
        let mut draw_calls = 0;
        let mut triangles_rendered = 0;

        let mut encoder =
            state
                .context
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Strada Frame Encoder"),
                });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Strada Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target_texture_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(settings.clear_color.into_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &state.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            triangles_rendered += state.ground.draw(&mut render_pass);
            draw_calls += 1;

            if settings.show_primitives {
                let (calls, triangles) = state.flat.draw(&mut render_pass);
                draw_calls += calls;
                triangles_rendered += triangles;
            }
        }

        // --- 4. Submit and Present ---
        state
            .context
            .queue()
            .submit(std::iter::once(encoder.finish()));
        output_surface_texture.present();
        let cpu_render_submission_time_ms = submission_timer.elapsed_ms();

        self.frame_count += 1;
        self.last_frame_stats = RenderStats {
            frame_number: self.frame_count,
            cpu_preparation_time_ms,
            cpu_render_submission_time_ms,
            draw_calls,
            triangles_rendered,
        };

        Ok(self.last_frame_stats.clone())
    }

    fn get_last_frame_stats(&self) -> &RenderStats {
        &self.last_frame_stats
    }

    fn get_adapter_info(&self) -> Option<RendererAdapterInfo> {
        self.state.as_ref().map(|state| RendererAdapterInfo {
            name: state.context.adapter_name.clone(),
            backend_type: GraphicsBackendType::from_wgpu(state.context.adapter_backend),
            device_type: RendererDeviceType::from_wgpu(state.context.adapter_device_type),
        })
    }

    fn shutdown(&mut self) {
        log::info!("Shutting down the render system...");
        if let Some(state) = self.state.take() {
            // Make sure the queue is idle before the buffers go away.
            if let Err(e) = state.context.device().poll(wgpu::PollType::Wait) {
                log::warn!("Device did not go idle before shutdown: {e}");
            }
            drop(state);
        }
        log::info!("Render system stopped after {} frames.", self.frame_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_system_refuses_to_render() {
        let mut system = WgpuRenderSystem::new(true);
        assert!(!system.is_initialized());
        assert!(matches!(
            system.render(&RenderSettings::default()),
            Err(RenderError::NotInitialized)
        ));
        assert!(system.get_adapter_info().is_none());
        assert_eq!(system.get_last_frame_stats().frame_number, 0);
    }

    #[test]
    fn minimizing_records_the_empty_size() {
        let mut system = WgpuRenderSystem::new(false);
        system.resize(800, 600);
        assert!(!system.is_minimized());

        system.resize(0, 0);
        assert!(system.is_minimized());
        assert_eq!((system.current_width, system.current_height), (0, 0));

        system.resize(1024, 0);
        assert!(system.is_minimized());

        system.resize(800, 600);
        assert!(!system.is_minimized());
        assert_eq!((system.current_width, system.current_height), (800, 600));
    }

    #[test]
    fn resize_before_init_is_harmless() {
        let mut system = WgpuRenderSystem::default();
        system.resize(0, 0);
        system.resize(800, 600);
        assert_eq!((system.current_width, system.current_height), (800, 600));
        system.shutdown();
    }
}
