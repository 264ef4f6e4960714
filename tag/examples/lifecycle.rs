use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use tag::prelude::*;
use tagdom::animation::collect_element_ids;
use tagdom::layout::measure;
use tagdom::{hit_test, Easing, Element, TransitionConfig};

fn describe(root: &Element, driver: &ZoomTransition, now: Instant) {
    match root.child_elements().first() {
        Some(el) => {
            let scale = driver.scale(&el.id, now).unwrap_or(1.0);
            println!(
                "  <{}> class=\"{}\" style=\"{}\" data-show={} width={:?} scale={scale:.2}",
                el.id,
                el.classes,
                el.style.to_inline(),
                el.get_data("show").map(String::as_str).unwrap_or("-"),
                el.width,
            );
        }
        None => println!("  <{}> (empty)", root.id),
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("lifecycle.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut tag = Tag::new(
        TagConfig::new("release-2.0")
            .checkable()
            .closable()
            .color_token("#87d068")
            .on_toggle(|checked| println!("on_toggle({checked})"))
            .on_request_close(|event| println!("on_request_close({})", event.target()))
            .on_closed(|| println!("on_closed()")),
    );
    let mut driver = ZoomTransition::new(
        tag.transition_name(),
        TransitionConfig::new(Duration::from_millis(200), Easing::EaseOut),
    )
    .appear(true);
    let mut geometry = LayoutGeometry::default();

    let start = Instant::now();
    let mut clicks = vec![
        (Duration::from_millis(250), 2u16),
        (Duration::from_millis(300), 12u16),
    ];

    for step in 0..12u64 {
        let now = start + Duration::from_millis(step * 50);

        let root = tag.render();
        geometry.commit(measure(&root));
        driver.sync_tree(&root, now);
        for settled in driver.tick(now) {
            tag.on_transition_settled(&settled.key, settled.present);
        }
        driver.cleanup(&collect_element_ids(&tag.render()));

        println!("t={:>3}ms {:?}", step * 50, tag.phase());
        describe(&tag.render(), &driver, now);

        // Simulated mouse clicks at column x
        if let Some(index) = clicks.iter().position(|(at, _)| now - start >= *at) {
            let (_, x) = clicks.remove(index);
            if let Some(target) = hit_test(geometry.layout(), &root, x, 0) {
                let result = tag.handle_click(&target, &mut geometry)?;
                println!("click {target} -> {result:?}");
            }
        }
    }

    Ok(())
}
