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

use crate::platform::SurfaceWindow;
use crate::renderer::api::{RenderSettings, RenderStats, RendererAdapterInfo};
use crate::renderer::error::RenderError;

/// A renderer driven by the host platform.
///
/// The host never draws on its own schedule. It calls [`init`](Self::init) once
/// the window exists, [`resize`](Self::resize) whenever the surface changes, and
/// [`render`](Self::render) each time the platform asks for a frame. Calls never
/// overlap.
pub trait RenderSystem: std::fmt::Debug + Send + Sync {
    /// Initialize the rendering system against `window`.
    fn init(&mut self, window: &dyn SurfaceWindow) -> Result<(), RenderError>;

    /// Resize the render targets of the render system.
    fn resize(&mut self, new_width: u32, new_height: u32);

    /// Render one frame to the window.
    fn render(&mut self, settings: &RenderSettings) -> Result<RenderStats, RenderError>;

    /// Get the stats of the last rendered frame.
    fn get_last_frame_stats(&self) -> &RenderStats;

    /// Get the adapter information of the rendering system.
    fn get_adapter_info(&self) -> Option<RendererAdapterInfo>;

    /// Clean up and release the resources of the rendering system.
    fn shutdown(&mut self);
}
