mod canvas;

pub use canvas::{BrailleCanvas, GlyphCell};
