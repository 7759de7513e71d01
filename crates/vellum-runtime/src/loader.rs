use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use vellum_engine::find_screen;
use vellum_types::{ComponentNode, RemoteComposeConfig};

use crate::error::{Error, FetchError, Result};
use crate::fetch::DocumentFetcher;

/// The host's UI-update channel: exactly one of these fires per load.
pub trait UiCallback: Send + Sync {
    fn on_components(&self, tree: ComponentNode);
    fn on_error(&self, message: String);
}

/// Drives the fetch → decode → publish pipeline.
///
/// Every load spawns an independent task; concurrent loads are neither
/// coalesced nor cancelled, and two overlapping loads may deliver out of
/// request order — last deliverer wins the visible tree. A load in flight
/// when the view detaches is simply abandoned.
pub struct Loader {
    config: RemoteComposeConfig,
    fetcher: Arc<dyn DocumentFetcher>,
    view: Mutex<Option<Arc<dyn UiCallback>>>,
}

impl Loader {
    pub fn new(config: RemoteComposeConfig, fetcher: Arc<dyn DocumentFetcher>) -> Self {
        Loader {
            config,
            fetcher,
            view: Mutex::new(None),
        }
    }

    pub fn attach_view(&self, view: Arc<dyn UiCallback>) {
        *self.lock_view() = Some(view);
    }

    pub fn detach_view(&self) {
        *self.lock_view() = None;
    }

    pub fn config(&self) -> &RemoteComposeConfig {
        &self.config
    }

    /// Fetch and decode the root UI document, then deliver it to the view.
    pub fn load_root(&self) -> JoinHandle<()> {
        let path = self.config.ui_component_path.clone();
        let fetcher = self.fetcher.clone();
        let view = self.lock_view().clone();

        tokio::spawn(async move {
            tracing::debug!(path = %path, "loading root document");
            let outcome = fetch_and_decode(fetcher, path).await;
            let Some(view) = view else { return };
            match outcome {
                Ok(tree) => view.on_components(tree),
                Err(err) => {
                    tracing::warn!(error = %err, "root load failed");
                    view.on_error(format!("Error loading components: {}", err));
                }
            }
        })
    }

    /// Fetch the screen document and resolve `screen_id` inside it.
    ///
    /// `on_done(true)` fires only when the screen was found and delivered;
    /// every failure path reports through `on_error` and `on_done(false)`.
    pub fn load_screen(
        &self,
        screen_id: &str,
        on_done: impl FnOnce(bool) + Send + 'static,
    ) -> JoinHandle<()> {
        let id = screen_id.to_string();
        let path = self.config.screen_path.clone();
        let fetcher = self.fetcher.clone();
        let view = self.lock_view().clone();

        tokio::spawn(async move {
            tracing::debug!(path = %path, screen = %id, "loading screen document");
            let outcome = fetch_and_decode(fetcher, path).await.and_then(|document| {
                match find_screen(&id, &document) {
                    Some(screen) => Ok(ComponentNode::Screen(screen.clone())),
                    None => Err(Error::ScreenNotFound(id.clone())),
                }
            });

            let Some(view) = view else {
                on_done(false);
                return;
            };
            match outcome {
                Ok(screen) => {
                    view.on_components(screen);
                    on_done(true);
                }
                Err(err @ Error::ScreenNotFound(_)) => {
                    tracing::warn!(screen = %id, "screen not resolved");
                    view.on_error(err.to_string());
                    on_done(false);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "screen load failed");
                    view.on_error(format!("Error loading screen: {}", err));
                    on_done(false);
                }
            }
        })
    }

    fn lock_view(&self) -> std::sync::MutexGuard<'_, Option<Arc<dyn UiCallback>>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The strictly ordered half of a load: suspend on the fetch, then decode.
async fn fetch_and_decode(
    fetcher: Arc<dyn DocumentFetcher>,
    path: String,
) -> Result<ComponentNode> {
    let body = tokio::task::spawn_blocking(move || fetcher.fetch(&path))
        .await
        .map_err(|err| FetchError::Network(format!("fetch task failed: {}", err)))??;
    Ok(vellum_decode::decode_document(&body)?)
}
