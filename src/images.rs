/// Asynchronous image source used by realized rows.
///
/// `load` must return immediately; the handle reports a pending state until
/// the fetch completes and a fallback state if it fails. The list core never
/// inspects the handle, it only hands it back through `cancel` when the row
/// that requested it is released.
pub trait ImageLoader {
    type Handle;

    /// Starts (or joins) a fetch for `image_ref`.
    fn load(&mut self, image_ref: &str) -> Self::Handle;

    /// Drops interest in a fetch. Pending work may be skipped and late results
    /// are discarded.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Loader for contexts without images; every row shows its placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageLoader for NoImages {
    type Handle = ();

    fn load(&mut self, _image_ref: &str) -> Self::Handle {}

    fn cancel(&mut self, _handle: Self::Handle) {}
}
