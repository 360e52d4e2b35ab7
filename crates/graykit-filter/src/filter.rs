//! The common filter interface

use graykit_core::Image;

/// A transformation from one grayscale image to another.
///
/// Parameters are fixed when the filter is constructed. `process` never
/// modifies `src`; `dst` is replaced by a new buffer with the dimensions of
/// `src`, whatever it held before.
pub trait ImageFilter {
    /// Filter `src` into `dst`.
    fn process(&self, src: &Image, dst: &mut Image);

    /// Filter `src` into a new image.
    fn apply(&self, src: &Image) -> Image {
        let mut dst = Image::empty();
        self.process(src, &mut dst);
        dst
    }
}
