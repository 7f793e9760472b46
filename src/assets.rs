//! Image cache with preload progress and placeholder fallback
//!
//! Keys are short asset names (`fish3`, `boat1`, `jellyfish`); the file for a
//! key is `assets/<key>.png`. A key that failed to load stays in the cache as
//! `Failed` so the renderer draws the placeholder instead of stalling.

use std::collections::HashMap;

use crate::error::GameError;
use crate::settings::{BoatSkin, HookSkin, Settings};
use crate::tuning::{LevelConfig, ObstacleKind, species};

/// Where an asset lives relative to the page
pub fn asset_path(key: &str) -> String {
    format!("assets/{key}.png")
}

/// Every image a level needs: its species, all obstacle kinds, and the
/// chosen boat and hook skins. Order is stable and duplicate-free.
pub fn level_manifest(level: &LevelConfig, settings: &Settings) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: &str| {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    };

    for id in &level.species_pool {
        match species(*id) {
            Some(s) => push(s.image),
            None => log::warn!("Species {:?} has no image, it will use the placeholder", id),
        }
    }
    for kind in ObstacleKind::ALL {
        push(kind.image());
    }
    push(settings.boat.as_str());
    push(settings.hook.as_str());
    keys
}

/// Every boat and hook skin, for the customization screen previews
pub fn skin_manifest() -> Vec<String> {
    BoatSkin::ALL
        .iter()
        .map(|b| b.as_str())
        .chain(HookSkin::ALL.iter().map(|h| h.as_str()))
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
enum Slot<H> {
    Pending,
    Ready(H),
    Failed,
}

/// What the renderer gets back for a key
#[derive(Debug, PartialEq)]
pub enum ImageRef<'a, H> {
    Ready(&'a H),
    /// Not requested, still loading, or failed
    Placeholder,
}

type ProgressFn = Box<dyn FnMut(usize, usize)>;

/// Image handles keyed by asset key
pub struct ImageCache<H> {
    slots: HashMap<String, Slot<H>>,
    settled: usize,
    on_progress: Option<ProgressFn>,
}

impl<H> Default for ImageCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ImageCache<H> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            settled: 0,
            on_progress: None,
        }
    }

    /// Called with `(settled, total)` after every load or failure
    pub fn set_progress_callback(&mut self, callback: impl FnMut(usize, usize) + 'static) {
        self.on_progress = Some(Box::new(callback));
    }

    /// Register a key for loading. Returns false if it is already known.
    pub fn request(&mut self, key: &str) -> bool {
        if self.slots.contains_key(key) {
            return false;
        }
        self.slots.insert(key.to_string(), Slot::Pending);
        true
    }

    /// Record the outcome of a load. Repeat resolutions are ignored.
    pub fn resolve(&mut self, key: &str, result: Result<H, GameError>) {
        let Some(slot) = self.slots.get_mut(key) else {
            log::warn!("Resolved unrequested image '{}'", key);
            return;
        };
        if !matches!(slot, Slot::Pending) {
            return;
        }

        *slot = match result {
            Ok(handle) => Slot::Ready(handle),
            Err(e) => {
                log::warn!("{}, drawing placeholder", e);
                Slot::Failed
            }
        };
        self.settled += 1;

        let (done, total) = self.progress();
        if let Some(callback) = self.on_progress.as_mut() {
            callback(done, total);
        }
    }

    /// `(settled, total)` where settled counts loads and failures alike
    pub fn progress(&self) -> (usize, usize) {
        (self.settled, self.slots.len())
    }

    pub fn is_settled(&self) -> bool {
        self.settled == self.slots.len()
    }

    pub fn get(&self, key: &str) -> ImageRef<'_, H> {
        match self.slots.get(key) {
            Some(Slot::Ready(handle)) => ImageRef::Ready(handle),
            _ => ImageRef::Placeholder,
        }
    }

    pub fn failed_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .slots
            .iter()
            .filter(|(_, slot)| matches!(slot, Slot::Failed))
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::preload;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlImageElement;

    use super::{ImageCache, asset_path};
    use crate::error::GameError;

    type DoneFn = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Start loading every key; `on_done` runs once after the last one settles
    pub fn preload(
        cache: Rc<RefCell<ImageCache<HtmlImageElement>>>,
        keys: Vec<String>,
        on_done: impl FnOnce() + 'static,
    ) {
        let done: DoneFn = Rc::new(RefCell::new(Some(Box::new(on_done))));

        let fresh: Vec<String> = {
            let mut c = cache.borrow_mut();
            keys.into_iter().filter(|k| c.request(k)).collect()
        };
        if fresh.is_empty() {
            finish_if_settled(&cache, &done);
            return;
        }

        for key in fresh {
            let img = match HtmlImageElement::new() {
                Ok(img) => img,
                Err(e) => {
                    log::warn!("Could not create image element for '{}': {:?}", key, e);
                    cache.borrow_mut().resolve(&key, Err(GameError::Asset { key: key.clone() }));
                    finish_if_settled(&cache, &done);
                    continue;
                }
            };

            let onload = {
                let cache = cache.clone();
                let done = done.clone();
                let img = img.clone();
                let key = key.clone();
                Closure::once(move || {
                    cache.borrow_mut().resolve(&key, Ok(img));
                    finish_if_settled(&cache, &done);
                })
            };
            let onerror = {
                let cache = cache.clone();
                let done = done.clone();
                let key = key.clone();
                Closure::once(move || {
                    cache
                        .borrow_mut()
                        .resolve(&key, Err(GameError::Asset { key: key.clone() }));
                    finish_if_settled(&cache, &done);
                })
            };

            img.set_onload(Some(onload.as_ref().unchecked_ref()));
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onload.forget();
            onerror.forget();
            img.set_src(&asset_path(&key));
        }
    }

    fn finish_if_settled(cache: &Rc<RefCell<ImageCache<HtmlImageElement>>>, done: &DoneFn) {
        if !cache.borrow().is_settled() {
            return;
        }
        let callback = done.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }
}
