// src/gui/worker.rs
//
// One short-lived thread per effect. The thread performs the request,
// sends the resulting `Action` back to the UI thread and asks for a
// repaint; the UI drains the channel at the top of the next frame.

use std::sync::{Arc, mpsc::Sender};
use std::thread;

use eframe::egui;

use crate::{
    api::{ApiError, Backend},
    runner,
    update::{Action, Effect},
};

pub fn spawn(backend: Arc<dyn Backend>, effect: Effect, tx: Sender<Action>, ctx: egui::Context) {
    let fallback = (effect.clone(), tx.clone(), ctx.clone());

    let spawned = thread::Builder::new()
        .name(s!("effect"))
        .spawn(move || {
            deliver(&tx, runner::perform(backend.as_ref(), effect));
            ctx.request_repaint();
        });

    // No thread, no request: resolve the effect as a failure so its
    // pending flag or ticket still settles.
    if let Err(e) = spawned {
        loge!("Worker: spawn failed: {}", e);
        let (effect, tx, ctx) = fallback;
        deliver(&tx, runner::fail(effect, ApiError::Transport(e.to_string())));
        ctx.request_repaint();
    }
}

/// Hands an action to the UI thread. A closed channel is logged, not fatal.
fn deliver(tx: &Sender<Action>, action: Action) -> bool {
    let sent = tx.send(action).is_ok();
    if !sent {
        logw!("Worker: UI gone, response dropped");
    }
    sent
}
