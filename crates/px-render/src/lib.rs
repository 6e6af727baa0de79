/// TUI rendering module for pixscii.
///
/// Provides the art canvas, slider widgets and the screen layout.
pub mod canvas;
pub mod ui;
pub mod widgets;
