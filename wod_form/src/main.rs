use libadwaita as adw;
use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::Level;
use wod_core::{get_default_catalog, Catalog, Config, Intensity, Wod, WodGenerator, WodRequest};

struct FormState {
    catalog: Catalog,
    defaults: WodRequest,
    seed: Option<u64>,
}

struct FormWidgets {
    time_entry: gtk::Entry,
    intensity_buttons: Vec<(Intensity, gtk::CheckButton)>,
    wod_box: gtk::Box,
}

fn init_logging() {
    let log_path = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wod")
        .join("wod_form.log");

    let _ = std::fs::create_dir_all(
        log_path
            .parent()
            .unwrap_or_else(|| Path::new(".")),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(move || -> Box<dyn Write + Send> {
            match std::fs::File::options()
                .create(true)
                .append(true)
                .open(&log_path)
            {
                Ok(f) => Box::new(f),
                Err(_) => Box::new(std::io::stderr()),
            }
        })
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder()
        .application_id("com.wod.form")
        .build();

    app.connect_activate(|app| {
        show_form_window(app);
    });

    app.run()
}

fn load_state() -> FormState {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load config: {}; using defaults", err);
            Config::default()
        }
    };

    let catalog = config.catalog().unwrap_or_else(|err| {
        tracing::error!("Custom exercises rejected: {}; using built-in catalog", err);
        get_default_catalog().clone()
    });

    let defaults = config.default_request().unwrap_or_default();

    if let Some(seed) = config.generator.seed {
        tracing::info!("Config seed {} set; every Generate repeats the same WOD", seed);
    }

    FormState {
        catalog,
        defaults,
        seed: config.generator.seed,
    }
}

fn show_form_window(app: &Application) {
    let state = Rc::new(load_state());

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .default_width(560)
        .default_height(480)
        .title("WOD Generator")
        .build();

    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);
    window.set_content(Some(&content));

    let widgets = Rc::new(build_form(&content));

    let generate = gtk::Button::with_label("Generate");
    generate.add_css_class("suggested-action");
    content.append(&generate);

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .child(&widgets.wod_box)
        .build();
    content.append(&scroller);

    {
        let state = state.clone();
        let widgets = widgets.clone();
        generate.connect_clicked(move |_| {
            let request = read_request(&widgets, state.defaults);
            let wod = WodGenerator::new(&state.catalog)
                .with_seed(state.seed)
                .generate(&request);
            show_wod(&widgets.wod_box, &request, &wod, state.seed);
        });
    }

    window.present();
}

fn build_form(container: &gtk::Box) -> FormWidgets {
    let time_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let time_entry = gtk::Entry::new();
    time_entry.set_width_chars(7);
    time_row.append(&time_entry);
    time_row.append(&gtk::Label::new(Some("Time limit (minutes)")));
    container.append(&time_row);

    let intensity_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let mut intensity_buttons: Vec<(Intensity, gtk::CheckButton)> = Vec::new();
    for intensity in Intensity::ALL {
        let button = gtk::CheckButton::with_label(intensity.label());
        if let Some((_, first)) = intensity_buttons.first() {
            button.set_group(Some(first));
        }
        intensity_row.append(&button);
        intensity_buttons.push((intensity, button));
    }
    container.append(&intensity_row);

    let wod_box = gtk::Box::new(gtk::Orientation::Vertical, 4);

    FormWidgets {
        time_entry,
        intensity_buttons,
        wod_box,
    }
}

fn read_request(widgets: &FormWidgets, defaults: WodRequest) -> WodRequest {
    let time = widgets.time_entry.text();
    let tier = widgets
        .intensity_buttons
        .iter()
        .find(|(_, button)| button.is_active())
        .map(|(intensity, _)| intensity.tier());
    request_from_form(time.as_str(), tier, defaults)
}

/// Request from the raw form values; no radio selected counts as missing input
fn request_from_form(time: &str, tier: Option<u8>, defaults: WodRequest) -> WodRequest {
    let tier = tier.map(|t| t.to_string());
    WodRequest::from_input(Some(time), tier.as_deref(), defaults)
}

fn show_wod(container: &gtk::Box, request: &WodRequest, wod: &Wod, seed: Option<u64>) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }

    let title = gtk::Label::new(Some(&format!(
        "WOD for {}",
        chrono::Local::now().format("%A %-d %B")
    )));
    title.add_css_class("title-2");
    title.set_margin_bottom(6);
    container.append(&title);

    let summary = gtk::Label::new(Some(&format!(
        "{} minutes, {} (~{} min)",
        request.time_limit,
        request.intensity.label(),
        wod.total_minutes()
    )));
    summary.add_css_class("dim-label");
    summary.set_margin_bottom(6);
    container.append(&summary);

    if let Some(text) = seed_notice(seed) {
        let notice = gtk::Label::new(Some(&text));
        notice.add_css_class("warning");
        notice.set_wrap(true);
        notice.set_margin_bottom(6);
        container.append(&notice);
    }

    for line in wod.descriptions() {
        let label = gtk::Label::new(Some(&line));
        label.set_xalign(0.0);
        label.set_wrap(true);
        container.append(&label);
    }
}

/// Note shown when a fixed seed makes every WOD identical
fn seed_notice(seed: Option<u64>) -> Option<String> {
    seed.map(|seed| {
        format!(
            "Fixed seed {} from config: remove [generator] seed for a new WOD each time",
            seed
        )
    })
}
