use std::io::Write;

use lookup_core::{RenderTarget, View};

/// Render surface that writes each view's HTML fragment to a `Write` sink.
///
/// A terminal cannot replace the fetching placeholder in place the way a
/// DOM region does, so views are emitted sequentially.
#[derive(Debug)]
pub struct WriteSurface<W> {
    out: W,
}

impl<W: Write> WriteSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderTarget for WriteSurface<W> {
    fn render(&mut self, view: &View) {
        // A failed write has nowhere to be reported; the next render
        // overwrites the region anyway.
        let _ = writeln!(self.out, "{}", view.to_html());
    }
}
