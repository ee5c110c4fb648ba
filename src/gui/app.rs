// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

use eframe::egui;

use crate::{
    api::{ApiClient, Backend},
    config::options::AppOptions,
    state::AppState,
    update::{Action, update},
};

use super::{components, router, worker};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    let backend = ApiClient::new(&app_options.api_url)?;
    logf!("Init: backend={}", backend.base_url());

    eframe::run_native(
        "Mercado Scrape Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, Arc::new(backend))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    backend: Arc<dyn Backend>,

    // workers send their resolved actions here
    tx: Sender<Action>,
    rx: Receiver<Action>,

    ctx: egui::Context,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, backend: Arc<dyn Backend>) -> Self {
        // Product thumbnails are remote URLs
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            state: AppState::default(),
            backend,
            tx,
            rx,
            ctx: cc.egui_ctx.clone(),
        };

        logf!("Init: default view={:?}", app.state.view);
        app.dispatch(Action::Mounted);
        app
    }

    /// Run the reducer and hand every resulting effect to a worker.
    pub fn dispatch(&mut self, action: Action) {
        for effect in update(&mut self.state, action) {
            worker::spawn(self.backend.clone(), effect, self.tx.clone(), self.ctx.clone());
        }
    }

    /// Apply whatever the workers finished since the last frame.
    fn drain(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain();

        let mut out: Vec<Action> = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, &self.state, &mut out);
            ui.separator();
            components::tabs::draw(ui, &self.state, &mut out);
            components::status_bar::draw(ui, &self.state, &mut out);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    router::page_for(self.state.view).draw(ui, &self.state, &mut out);
                });
        });

        if !out.is_empty() {
            for action in out {
                self.dispatch(action);
            }
            ctx.request_repaint();
        }
    }
}
