//! Demo binary: runs a scripted visitor session against an in-memory
//! portfolio page and logs what the engine does. Pass a TOML options file
//! as the first argument to override the defaults; set `RUST_LOG=debug`
//! to watch animation preemption and easter-egg activation.

use flourish::host::{Capabilities, DocumentHost, ElementRect, MemoryDocument};
use flourish::{Options, PageEvent, PortfolioEngine};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

struct DemoPage {
    doc: MemoryDocument,
    about_link: flourish::NodeId,
    logo: flourish::NodeId,
}

fn build_demo_page() -> DemoPage {
    let mut doc = MemoryDocument::new(800.0).with_capabilities(Capabilities {
        touch: false,
        vibration: false,
    });
    let body = doc.body();

    let nav = doc.insert_with(
        body,
        "nav",
        &["nav"],
        ElementRect::from_vertical(0.0, 64.0),
    );
    let logo = doc.insert_with(
        nav,
        "a",
        &["nav-logo"],
        ElementRect::from_vertical(0.0, 64.0),
    );
    let about_link = doc.insert_with(
        nav,
        "a",
        &["nav-link"],
        ElementRect::from_vertical(0.0, 64.0),
    );
    doc.set_attribute(about_link, "href", "#about");

    let hero = doc.insert_with(
        body,
        "section",
        &["hero"],
        ElementRect::from_vertical(64.0, 800.0),
    );
    for (class, top) in [
        ("hero-greeting", 120.0),
        ("hero-title", 160.0),
        ("hero-subtitle", 230.0),
        ("hero-cta", 280.0),
    ] {
        let _ = doc.insert_with(
            hero,
            "div",
            &[class],
            ElementRect::from_vertical(top, 40.0),
        );
    }

    let about = doc.insert_with(
        body,
        "section",
        &["about"],
        ElementRect::from_vertical(1000.0, 400.0),
    );
    doc.set_id(about, "about");

    let projects = doc.insert_with(
        body,
        "section",
        &["projects"],
        ElementRect::from_vertical(1500.0, 600.0),
    );
    for i in 0..3 {
        let _ = doc.insert_with(
            projects,
            "div",
            &["project-card"],
            ElementRect::from_vertical(1550.0 + 200.0 * i as f32, 180.0),
        );
    }

    DemoPage {
        doc,
        about_link,
        logo,
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut page = build_demo_page();
    let mut engine = PortfolioEngine::with_viewport_observer(options);

    let mut now = Instant::now();
    engine.attach(&mut page.doc, now);

    // Simulate a visitor clicking the "about" nav link and watching the
    // smooth scroll play out over ~1s of frames.
    engine.handle_event(
        &mut page.doc,
        PageEvent::Click {
            target: page.about_link,
        },
        now,
    );
    for frame in 0..70 {
        now += FRAME;
        engine.handle_event(&mut page.doc, PageEvent::Scroll, now);
        engine.tick(&mut page.doc, now);
        if frame % 10 == 0 {
            log::info!(
                "frame {frame}: scroll_y = {:.1}, pending timers = {}",
                page.doc.scroll_y(),
                engine.pending_timers()
            );
        }
    }

    // The konami code flips the page into secret mode.
    for code in [
        "ArrowUp",
        "ArrowUp",
        "ArrowDown",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "ArrowLeft",
        "ArrowRight",
        "KeyB",
        "KeyA",
    ] {
        engine.handle_event(
            &mut page.doc,
            PageEvent::KeyDown {
                code: code.to_owned(),
            },
            now,
        );
    }
    let body = page.doc.body();
    log::info!(
        "secret mode active: {}",
        page.doc.has_class(body, "secret-mode")
    );

    // Ten logo clicks unlock the hidden overlay.
    for _ in 0..10 {
        engine.handle_event(
            &mut page.doc,
            PageEvent::Click { target: page.logo },
            now,
        );
    }
    log::info!(
        "hidden overlay present: {}",
        !page.doc.query(".maker-secret").is_empty()
    );
}
