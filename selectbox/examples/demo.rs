use std::time::{Duration, Instant};

use formdom::render::{render_lines, render_lines_at};
use formdom::{Document, Element, Event};
use selectbox::Settings;
use simplelog::{Config, LevelFilter, WriteLogger};

fn form() -> Element {
    Element::form()
        .id("order")
        .child(Element::text("Size:"))
        .child(
            Element::select("size")
                .id("size")
                .child(Element::option("Small").value("s"))
                .child(Element::option("Medium").value("m").selected())
                .child(Element::option("Large").value("l")),
        )
        .child(Element::text("Colour:"))
        .child(
            Element::select("colour")
                .id("colour")
                .child(Element::option("Red"))
                .child(Element::option("Green"))
                .child(Element::option("Blue")),
        )
        .child(Element::input("qty", "1"))
}

fn show(title: &str, lines: &[String]) {
    println!("--- {title}");
    for line in lines {
        println!("| {line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so the rendered frames stay readable on stdout
    WriteLogger::init(LevelFilter::Debug, Config::default(), std::io::stderr())?;

    let settings = Settings::from_json(r#"{"animationDuration": 200}"#)?;
    let mut doc = Document::new(form());
    let mut boxes = selectbox::attach_all(&mut doc, &settings)?;

    show("attached", &render_lines(&doc, 30));

    let display = boxes
        .get("size")
        .map(|b| b.mirror().selection_id.clone())
        .ok_or("size selectbox missing")?;
    if !boxes.handle_event(&mut doc, &Event::click(display)).is_consumed() {
        return Err("size selectbox ignored the click".into());
    }

    let opened = Instant::now();
    for ms in [0, 100, 200] {
        let frame = render_lines_at(&doc, 30, opened + Duration::from_millis(ms));
        show(&format!("open +{ms}ms"), &frame);
    }

    let large = boxes
        .get("size")
        .map(|b| b.mirror().options[2].node_id.clone())
        .ok_or("size selectbox missing")?;
    boxes.handle_event(&mut doc, &Event::click(large));

    show("picked Large", &render_lines(&doc, 30));
    println!("submits: {:?}", doc.form_data("order"));
    Ok(())
}
