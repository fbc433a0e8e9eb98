//! Format-string handling: token extraction, template compilation and rendering,
//! time layouts, and the color palette each live in their own module.

mod color;
pub mod layout;
mod template;
pub mod token;

pub use color::{ColorMode, ColorName, UnknownColorError, colorize};
pub use layout::{STAMP, TimeLayout};
pub use template::{
    CompiledFormat, FormatWarning, MESSAGE, TIME, TemplateSegment, compile, render,
};
