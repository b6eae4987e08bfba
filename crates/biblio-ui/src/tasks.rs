use std::future::Future;

/// Runs `task` on the browser event loop. During server rendering nothing is
/// spawned: data is only fetched once the page is hydrated.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(task);

    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
