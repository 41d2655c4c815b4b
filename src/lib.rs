use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Instant,
};

use log::debug;

pub use self::{
    error::{Error, Result},
    geometry::{Hit, RaycastResult, Sphere},
    ray::{Ray, RayLike},
    vector::Vector3,
};

mod error;

pub mod geometry;
pub mod ray;
pub mod vector;

/// Casts every ray in `rays` against `sphere`, spreading the work over
/// `threads` scoped workers (one per logical CPU when `threads` is 0).
///
/// The returned hits are in the same order as `rays`.
pub fn raycast_all<R: RayLike + Sync>(
    sphere: &Sphere,
    rays: &[R],
    threads: usize,
) -> Vec<Option<Hit>> {
    let start_time = Instant::now();

    let threads = match threads {
        0 => num_cpus::get(),
        n => n,
    }
    .min(rays.len())
    .max(1);

    let next_ray = AtomicUsize::new(0);

    let chunks: Vec<Vec<(usize, Option<Hit>)>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..threads)
            .map(|_| scope.spawn(|| cast_rays(sphere, rays, &next_ray)))
            .collect();

        workers
            .into_iter()
            .map(|worker| match worker.join() {
                Ok(hits) => hits,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut output = vec![None; rays.len()];
    for (index, hit) in chunks.into_iter().flatten() {
        output[index] = hit;
    }

    debug!(
        "cast {} rays on {} threads in {:.3?}",
        rays.len(),
        threads,
        start_time.elapsed()
    );

    output
}

fn cast_rays<R: RayLike>(
    sphere: &Sphere,
    rays: &[R],
    next_ray: &AtomicUsize,
) -> Vec<(usize, Option<Hit>)> {
    let mut hits = Vec::new();

    loop {
        let index = next_ray.fetch_add(1, Ordering::Relaxed);
        let Some(ray) = rays.get(index) else {
            break;
        };
        hits.push((index, sphere.raycast(ray)));
    }

    hits
}
