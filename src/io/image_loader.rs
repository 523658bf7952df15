//! Asynchronous image loading.
//!
//! Fetches run on a fixed pool of background threads so the GUI stays
//! responsive. Results come back through a channel and are turned into
//! textures when the UI thread calls `poll` (once per frame).
//!
//! Images are cached per reference for the lifetime of the loader, and
//! concurrent requests for the same reference share one fetch.

use anyhow::{Context, Result};
use eframe::egui;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use usercards::ImageLoader;

/// Longest edge of a decoded image after downscaling
const MAX_IMAGE_EDGE: u32 = 128;

/// Produces decoded images for references. Runs on worker threads.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, image_ref: &str) -> Result<egui::ColorImage>;
}

/// Fetches images over HTTP and decodes them.
pub struct HttpImageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, image_ref: &str) -> Result<egui::ColorImage> {
        let bytes = self
            .client
            .get(image_ref)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .with_context(|| format!("failed to download {image_ref}"))?;

        decode_image(&bytes).with_context(|| format!("failed to decode {image_ref}"))
    }
}

/// Decodes and downscales raw image bytes.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes)?.thumbnail(MAX_IMAGE_EDGE, MAX_IMAGE_EDGE);
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Handle for one row's interest in an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageTicket {
    id: u64,
    image_ref: String,
}

/// What a row should draw for its image.
#[derive(Clone)]
pub enum ImageState {
    /// Still fetching; draw the placeholder
    Pending,
    Ready(egui::TextureHandle),
    /// Fetch or decode failed; draw the placeholder
    Failed,
}

enum CacheEntry {
    Pending {
        /// Tickets waiting on this reference
        waiters: usize,
        cancel: Arc<AtomicBool>,
    },
    Ready(egui::TextureHandle),
    Failed,
}

struct FetchJob {
    image_ref: String,
    cancel: Arc<AtomicBool>,
}

type FetchResult = (String, Result<egui::ColorImage, String>);

/// Manages background image fetches for list rows.
pub struct AsyncImageLoader {
    entries: HashMap<String, CacheEntry>,
    job_sender: Sender<FetchJob>,
    result_receiver: Receiver<FetchResult>,
    /// Context used by workers to request a repaint when a result lands
    repaint: Arc<Mutex<Option<egui::Context>>>,
    next_ticket: u64,
}

impl AsyncImageLoader {
    /// Creates a loader with `workers` background threads.
    pub fn new(fetcher: Arc<dyn ImageFetcher>, workers: usize) -> Self {
        let (job_sender, job_receiver) = channel::<FetchJob>();
        let (result_sender, result_receiver) = channel::<FetchResult>();
        let job_receiver = Arc::new(Mutex::new(job_receiver));
        let repaint: Arc<Mutex<Option<egui::Context>>> = Arc::new(Mutex::new(None));

        for worker in 0..workers.max(1) {
            let jobs = Arc::clone(&job_receiver);
            let results = result_sender.clone();
            let fetcher = Arc::clone(&fetcher);
            let repaint = Arc::clone(&repaint);

            let spawned = thread::Builder::new()
                .name(format!("image-worker-{worker}"))
                .spawn(move || run_worker(&jobs, &results, fetcher.as_ref(), &repaint));
            if let Err(err) = spawned {
                warn!("event=image_worker_spawn_failed module=image_loader worker={} error={}", worker, err);
            }
        }

        Self {
            entries: HashMap::new(),
            job_sender,
            result_receiver,
            repaint,
            next_ticket: 0,
        }
    }

    /// Registers the context workers should wake when a result arrives.
    pub fn set_repaint_context(&mut self, ctx: &egui::Context) {
        if let Ok(mut slot) = self.repaint.lock() {
            *slot = Some(ctx.clone());
        }
    }

    /// Applies finished fetches. Called once per frame on the UI thread.
    ///
    /// Returns the number of results applied; results for canceled
    /// references are dropped and not counted.
    pub fn poll(&mut self, ctx: &egui::Context) -> usize {
        let mut applied = 0;

        while let Ok((image_ref, result)) = self.result_receiver.try_recv() {
            let Some(entry) = self.entries.get_mut(&image_ref) else {
                debug!("event=image_result_discarded module=image_loader ref={}", image_ref);
                continue;
            };
            if !matches!(entry, CacheEntry::Pending { .. }) {
                continue;
            }

            *entry = match result {
                Ok(image) => CacheEntry::Ready(ctx.load_texture(&image_ref, image, egui::TextureOptions::LINEAR)),
                Err(error) => {
                    warn!("event=image_failed module=image_loader ref={} error={}", image_ref, error);
                    CacheEntry::Failed
                }
            };
            applied += 1;
        }

        applied
    }

    /// Returns what the row holding `ticket` should draw.
    pub fn state(&self, ticket: &ImageTicket) -> ImageState {
        match self.entries.get(&ticket.image_ref) {
            Some(CacheEntry::Ready(texture)) => ImageState::Ready(texture.clone()),
            Some(CacheEntry::Failed) => ImageState::Failed,
            Some(CacheEntry::Pending { .. }) | None => ImageState::Pending,
        }
    }

    /// Number of references with a fetch still in flight.
    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| matches!(entry, CacheEntry::Pending { .. }))
            .count()
    }
}

impl ImageLoader for AsyncImageLoader {
    type Handle = ImageTicket;

    fn load(&mut self, image_ref: &str) -> ImageTicket {
        self.next_ticket += 1;
        let ticket = ImageTicket {
            id: self.next_ticket,
            image_ref: image_ref.to_string(),
        };

        match self.entries.get_mut(image_ref) {
            Some(CacheEntry::Pending { waiters, .. }) => *waiters += 1,
            Some(CacheEntry::Ready(_) | CacheEntry::Failed) => {}
            None => {
                let cancel = Arc::new(AtomicBool::new(false));
                let job = FetchJob {
                    image_ref: image_ref.to_string(),
                    cancel: Arc::clone(&cancel),
                };
                if self.job_sender.send(job).is_err() {
                    warn!("event=image_queue_closed module=image_loader ref={}", image_ref);
                    self.entries.insert(image_ref.to_string(), CacheEntry::Failed);
                } else {
                    self.entries
                        .insert(image_ref.to_string(), CacheEntry::Pending { waiters: 1, cancel });
                }
            }
        }

        ticket
    }

    fn cancel(&mut self, ticket: ImageTicket) {
        let Some(CacheEntry::Pending { waiters, cancel }) = self.entries.get_mut(&ticket.image_ref) else {
            return;
        };
        debug!("event=image_ticket_released module=image_loader ticket={} ref={}", ticket.id, ticket.image_ref);

        *waiters = waiters.saturating_sub(1);
        if *waiters == 0 {
            cancel.store(true, Ordering::Relaxed);
            self.entries.remove(&ticket.image_ref);
            debug!("event=image_canceled module=image_loader ref={}", ticket.image_ref);
        }
    }
}

fn run_worker(
    jobs: &Mutex<Receiver<FetchJob>>,
    results: &Sender<FetchResult>,
    fetcher: &dyn ImageFetcher,
    repaint: &Mutex<Option<egui::Context>>,
) {
    loop {
        let job = match jobs.lock() {
            Ok(receiver) => match receiver.recv() {
                Ok(job) => job,
                // Loader dropped
                Err(_) => return,
            },
            Err(_) => return,
        };

        if job.cancel.load(Ordering::Relaxed) {
            continue;
        }

        let result = fetcher.fetch(&job.image_ref).map_err(|e| format!("{e:#}"));
        if results.send((job.image_ref, result)).is_err() {
            return;
        }

        if let Ok(ctx) = repaint.lock() {
            if let Some(ctx) = ctx.as_ref() {
                ctx.request_repaint();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    /// Returns a 1x1 image, or an error for references containing "broken".
    struct FakeFetcher {
        calls: AtomicUsize,
    }

    impl FakeFetcher {
        fn new() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0) })
        }
    }

    impl ImageFetcher for FakeFetcher {
        fn fetch(&self, image_ref: &str) -> Result<egui::ColorImage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            anyhow::ensure!(!image_ref.contains("broken"), "no such image");
            Ok(egui::ColorImage::from_rgba_unmultiplied([1, 1], &[255, 0, 0, 255]))
        }
    }

    /// Polls until `done` holds or two seconds pass.
    fn poll_until(loader: &mut AsyncImageLoader, ctx: &egui::Context, done: impl Fn(&AsyncImageLoader) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !done(loader) && Instant::now() < deadline {
            loader.poll(ctx);
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_load_becomes_ready() {
        let ctx = egui::Context::default();
        let mut loader = AsyncImageLoader::new(FakeFetcher::new(), 2);

        let ticket = loader.load("https://example.test/a.png");
        assert!(matches!(loader.state(&ticket), ImageState::Pending));

        poll_until(&mut loader, &ctx, |l| l.pending_count() == 0);
        assert!(matches!(loader.state(&ticket), ImageState::Ready(_)));
    }

    #[test]
    fn test_failed_fetch_falls_back() {
        let ctx = egui::Context::default();
        let mut loader = AsyncImageLoader::new(FakeFetcher::new(), 1);

        let ticket = loader.load("https://example.test/broken.png");
        poll_until(&mut loader, &ctx, |l| l.pending_count() == 0);

        assert!(matches!(loader.state(&ticket), ImageState::Failed));
    }

    #[test]
    fn test_same_reference_fetched_once() {
        let ctx = egui::Context::default();
        let fetcher = FakeFetcher::new();
        let mut loader = AsyncImageLoader::new(fetcher.clone(), 2);

        let first = loader.load("https://example.test/shared.png");
        let second = loader.load("https://example.test/shared.png");
        poll_until(&mut loader, &ctx, |l| l.pending_count() == 0);
        let third = loader.load("https://example.test/shared.png");

        assert_ne!(first, second);
        assert!(matches!(loader.state(&third), ImageState::Ready(_)));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_discards_result() {
        let ctx = egui::Context::default();
        let mut loader = AsyncImageLoader::new(FakeFetcher::new(), 1);

        let ticket = loader.load("https://example.test/gone.png");
        loader.cancel(ticket.clone());
        assert_eq!(loader.pending_count(), 0);

        thread::sleep(Duration::from_millis(50));
        loader.poll(&ctx);

        assert!(matches!(loader.state(&ticket), ImageState::Pending));
        assert!(loader.entries.is_empty());
    }

    #[test]
    fn test_cancel_keeps_fetch_for_other_waiters() {
        let mut loader = AsyncImageLoader::new(FakeFetcher::new(), 1);

        let first = loader.load("https://example.test/shared.png");
        let _second = loader.load("https://example.test/shared.png");
        loader.cancel(first);

        assert_eq!(loader.pending_count(), 1);
    }
}
