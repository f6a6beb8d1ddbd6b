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

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;

/// The pair of raw-handle traits a graphics backend needs to create a surface.
/// Combined into one trait so it can be used as a trait object.
pub trait WindowHandle: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle> WindowHandle for T {}

/// A shared, thread-safe handle to the native window.
pub type SurfaceWindowHandle = Arc<dyn WindowHandle + Send + Sync>;

/// A window the game can present frames into.
///
/// The renderer only sees this trait. The host owns the concrete window and the
/// event loop, and calls into the renderer when the platform asks for a frame.
pub trait SurfaceWindow: HasWindowHandle + HasDisplayHandle + Send + Sync {
    /// Returns the physical dimensions (width, height) of the window's inner area.
    fn inner_size(&self) -> (u32, u32);

    /// Returns the scale factor of the window.
    fn scale_factor(&self) -> f64;

    /// Requests that the window be redrawn.
    fn request_redraw(&self);

    /// Clones an Arc'd, thread-safe handle to the window, used to create the surface.
    fn clone_handle_arc(&self) -> SurfaceWindowHandle;

    /// Returns a stable identifier for the window.
    fn id(&self) -> u64;
}
