//! Rendering collaborator interface.
//!
//! This module contains:
//! - `device`: the [`LinesDevice`] trait and the [`render_items`] driver
//! - `text`: a device writing a line-oriented text dump

pub mod device;
pub mod text;

pub use device::{DeviceEvent, LinesDevice, RecordingDevice, render_items};
pub use text::TextDevice;
