//! End-to-end carousel scenarios through the public host interface.

use logo_carousel::catalog::default_items;
use logo_carousel::engine::{
    AutoplayState, CarouselEngine, EngineOptions, HostEvents, PageSize, indicator_count,
    max_index,
};
use logo_carousel::script::{parse_script, replay};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(5000);

fn mount_stock() -> CarouselEngine {
    CarouselEngine::mount(default_items(), EngineOptions::default())
}

#[test]
fn wide_viewport_four_suppliers() {
    let mut engine = mount_stock();
    engine.on_viewport_resize(1440);

    assert_eq!(engine.page_size(), PageSize::Three);
    assert_eq!(engine.max_index(), 1);
    assert_eq!(indicator_count(engine.item_count(), engine.page_size()), 2);

    let indices: Vec<usize> = (0..3).map(|_| engine.next()).collect();
    assert_eq!(indices, vec![1, 0, 1]);
}

#[test]
fn resize_sequence_keeps_index_in_range() {
    let mut engine = mount_stock();
    engine.on_viewport_resize(500);
    engine.previous();
    assert_eq!(engine.current_index(), 3);

    for (width, page_size) in [
        (1200, PageSize::Three),
        (900, PageSize::Two),
        (500, PageSize::One),
    ] {
        engine.on_viewport_resize(width);
        assert_eq!(engine.page_size(), page_size);
        assert!(engine.current_index() <= max_index(4, page_size));
    }
}

#[test]
fn hover_pause_then_fresh_interval() {
    let mut engine = mount_stock();
    engine.on_viewport_resize(900);

    engine.on_timer_elapsed(Duration::from_millis(4900));
    engine.on_pointer_enter();
    assert_eq!(engine.autoplay_state(), AutoplayState::Paused);
    for _ in 0..10 {
        assert_eq!(engine.on_timer_elapsed(INTERVAL), 0);
    }
    assert_eq!(engine.current_index(), 0);

    engine.on_pointer_leave();
    // 100 ms short of a full interval: the pre-pause 4900 ms do not count
    assert_eq!(engine.on_timer_elapsed(INTERVAL - Duration::from_millis(100)), 0);
    assert_eq!(engine.on_timer_elapsed(Duration::from_millis(100)), 1);
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn teardown_silences_late_callbacks() {
    let mut engine = mount_stock();
    engine.on_viewport_resize(1200);
    engine.on_teardown();

    assert_eq!(engine.on_timer_elapsed(INTERVAL * 10), 0);
    engine.on_pointer_leave();
    engine.on_viewport_resize(500);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.autoplay_state(), AutoplayState::Stopped);
    assert!(engine.view().is_none());
}

#[test]
fn empty_catalog_is_a_quiet_no_op() {
    let mut engine = CarouselEngine::mount(Vec::new(), EngineOptions::default());
    engine.on_viewport_resize(1200);
    assert_eq!(engine.next(), 0);
    assert_eq!(engine.previous(), 0);
    assert_eq!(engine.jump_to_page(3), 0);
    let view = engine.view().unwrap();
    assert!(view.indicators.is_empty());
    assert!(view.items.is_empty());
}

#[test]
fn scripted_session() {
    let events = parse_script(
        r#"
# phone, then tablet
resize 400
wait 15000      # three advances: 1, 2, 3
resize 800      # page size 2, index re-clamped to 2
enter
wait 60000      # paused
leave
jump 0
wait 5000       # one advance
teardown
wait 5000       # ignored
"#,
    )
    .unwrap();

    let mut engine = mount_stock();
    let steps = replay(&mut engine, &events);
    let indices: Vec<usize> = steps.iter().map(|s| s.current_index).collect();
    assert_eq!(indices, vec![0, 3, 2, 2, 2, 2, 0, 1, 1, 1]);
    assert_eq!(steps[1].fires, 3);
    assert_eq!(steps[4].fires, 0);
    assert_eq!(steps[9].fires, 0);
    assert_eq!(steps[9].autoplay, AutoplayState::Stopped);
}
