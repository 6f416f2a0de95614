// Host-side tests for the per-frame gallery loop, using a fixed layout and a
// recording renderer in place of the DOM and the GPU.

mod common;

use common::*;
use gallery_core::*;
use glam::Vec2;

fn five_items() -> GalleryLoop<FakeLayout, RecordingRenderer> {
    GalleryLoop::new(
        unit_config(),
        FakeLayout::column(5, 500.0),
        RecordingRenderer::default(),
    )
    .expect("valid config")
}

#[test]
fn construction_creates_one_plane_per_element() {
    let g = five_items();
    assert_eq!(g.items().len(), 5);
    assert_eq!(g.renderer().footprints.len(), 5);
    for (i, f) in g.renderer().footprints.iter().enumerate() {
        assert_eq!(f.index, i);
        assert!(f.segments > 1);
    }
    assert!(approx(g.viewport().height, 2.0));
    assert!(approx(g.viewport().width, 2.0));
    assert!(approx(g.gallery_length(), 5.0));
}

#[test]
fn initial_resize_pushes_transforms_and_sizes() {
    let g = five_items();
    let r = g.renderer();
    // First item fills the top half of the screen.
    assert!(approx(r.transforms[0].position.y, 0.5));
    assert!(approx(r.transforms[0].scale.y, 1.0));
    assert!(approx(r.transforms[4].position.y, -3.5));
    match r.last_param(0, "u_plane_size") {
        Some(ShaderParam::PlaneSize(v)) => {
            assert!(approx(v.x, 1.0) && approx(v.y, 1.0))
        }
        other => panic!("unexpected {other:?}"),
    }
    match r.last_param(0, "u_viewport_size") {
        Some(ShaderParam::ViewportSize(v)) => assert!(approx(v.y, 2.0)),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        r.last_param(3, "u_image_size"),
        Some(ShaderParam::ImageSize(Vec2::ZERO))
    );
}

#[test]
fn frame_without_input_keeps_layout_still() {
    let mut g = five_items();
    let report = g.frame();
    assert!(report.wraps.is_empty());
    assert_eq!(report.scroll.current, 0.0);
    assert_eq!(g.renderer().frames, 1);
    assert!(approx(g.items()[0].transform.position.y, 0.5));
    assert_eq!(
        g.renderer().last_param(0, "u_strength"),
        Some(ShaderParam::Strength(0.0))
    );
}

#[test]
fn scrolling_down_wraps_by_whole_gallery_lengths() {
    let mut g = five_items();
    g.handle_input(InputEvent::Wheel(8000.0));
    let mut events = Vec::new();
    for _ in 0..200 {
        let report = g.frame();
        assert_eq!(report.scroll.direction, Direction::Down);
        events.extend(report.wraps);
    }
    assert!(!events.is_empty(), "expected items to loop");
    for e in &events {
        assert!(approx(e.delta, 5.0), "delta {}", e.delta);
    }
    for item in g.items() {
        let k = item.wrap.offset / 5.0;
        assert!((k - k.round()).abs() < 1e-4);
    }
}

#[test]
fn items_stay_near_viewport_while_looping() {
    let mut g = five_items();
    for step in 0..600 {
        if step % 50 == 0 {
            let delta = if (step / 150) % 2 == 0 { 1500.0 } else { -1500.0 };
            g.handle_input(InputEvent::Wheel(delta));
        }
        g.frame();
        for item in g.items() {
            let y = item.transform.position.y;
            assert!(y.abs() <= 1.0 + 5.0 + 0.5, "item escaped to y={y}");
        }
    }
}

#[test]
fn transforms_reach_the_renderer_every_frame() {
    let mut g = five_items();
    g.handle_input(InputEvent::Wheel(400.0));
    g.frame();
    for (i, item) in g.items().iter().enumerate() {
        assert_eq!(g.renderer().transforms[item.handle], item.transform, "item {i}");
    }
}

#[test]
fn strength_tracks_scroll_velocity() {
    let mut g = five_items();
    g.handle_input(InputEvent::Wheel(200.0));
    let report = g.frame();
    let expected = report.scroll.velocity() / 1000.0 * 15.0;
    assert!(expected > 0.0);
    match g.renderer().last_param(2, "u_strength") {
        Some(ShaderParam::Strength(s)) => assert!(approx(s, expected)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn resize_resets_wrap_offsets() {
    let mut g = five_items();
    g.handle_input(InputEvent::Wheel(4000.0));
    for _ in 0..40 {
        g.frame();
    }
    assert!(g.items().iter().any(|i| i.wrap.offset != 0.0));

    g.layout_mut().screen = ScreenDimensions::new(1000.0, 800.0);
    g.handle_input(InputEvent::Resize);
    for item in g.items() {
        assert_eq!(item.wrap.offset, 0.0);
        assert_eq!(item.wrap.state, WrapState::InView);
    }
    assert_eq!(g.screen(), ScreenDimensions::new(1000.0, 800.0));
    assert!(approx(g.viewport().width / g.viewport().height, 1000.0 / 800.0));
    // 2500px container on an 800px-tall 2-unit viewport
    assert!(approx(g.gallery_length(), 2.0 * 2500.0 / 800.0));
}

#[test]
fn resize_rereads_element_bounds() {
    let mut g = five_items();
    g.layout_mut().items[1] = ElementBounds::new(600.0, 0.0, 200.0, 100.0);
    g.handle_input(InputEvent::Resize);
    assert_eq!(g.items()[1].bounds, ElementBounds::new(600.0, 0.0, 200.0, 100.0));
    assert!(approx(g.items()[1].transform.scale.x, 0.4));
}

#[test]
fn repeated_resizes_are_independent() {
    let mut a = five_items();
    let mut b = five_items();
    for (w, h) in [(300.0, 900.0), (1600.0, 400.0), (1000.0, 1000.0)] {
        a.layout_mut().screen = ScreenDimensions::new(w, h);
        a.handle_input(InputEvent::Resize);
    }
    b.handle_input(InputEvent::Resize);
    assert_eq!(a.viewport(), b.viewport());
    assert_eq!(a.gallery_length(), b.gallery_length());
    for (x, y) in a.items().iter().zip(b.items()) {
        assert_eq!(x.transform, y.transform);
    }
}

#[test]
fn zero_window_resize_keeps_previous_state() {
    let mut g = five_items();
    let vp = g.viewport();
    g.layout_mut().screen = ScreenDimensions::new(0.0, 0.0);
    g.handle_input(InputEvent::Resize);
    assert_eq!(g.viewport(), vp);
    assert_eq!(g.screen(), ScreenDimensions::new(1000.0, 1000.0));
    g.frame();
    assert!(g.items()[0].transform.position.y.is_finite());
}

#[test]
fn no_projection_before_first_valid_resize() {
    let layout = FakeLayout {
        screen: ScreenDimensions::default(),
        ..FakeLayout::column(3, 500.0)
    };
    let mut g = GalleryLoop::new(unit_config(), layout, RecordingRenderer::default()).unwrap();
    g.handle_input(InputEvent::Wheel(500.0));
    g.frame();
    assert_eq!(g.renderer().frames, 1);
    for item in g.items() {
        assert_eq!(item.transform, PlaneTransform::default());
    }
}

#[test]
fn empty_gallery_frames_without_error() {
    let layout = FakeLayout {
        screen: ScreenDimensions::new(800.0, 600.0),
        items: Vec::new(),
        container: None,
    };
    let mut g = GalleryLoop::new(unit_config(), layout, RecordingRenderer::default()).unwrap();
    g.handle_input(InputEvent::Wheel(300.0));
    for _ in 0..10 {
        let report = g.frame();
        assert!(report.wraps.is_empty());
    }
    assert_eq!(g.renderer().frames, 10);
    assert_eq!(g.gallery_length(), 0.0);
}

#[test]
fn zero_sized_element_is_rendered_as_degenerate_plane() {
    let mut layout = FakeLayout::column(3, 500.0);
    layout.items[1] = ElementBounds::new(500.0, 250.0, 0.0, 0.0);
    let mut g = GalleryLoop::new(unit_config(), layout, RecordingRenderer::default()).unwrap();
    g.frame();
    let t = g.items()[1].transform;
    assert_eq!(t.scale, Vec2::ZERO);
    assert!(t.position.is_finite());
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    let mut g = five_items();
    g.renderer_mut().fail_render = true;
    g.handle_input(InputEvent::Wheel(100.0));
    for _ in 0..3 {
        g.frame();
    }
    assert_eq!(g.renderer().frames, 3);
    assert!(g.scroll().current > 0.0);
}

#[test]
fn attach_texture_sets_image_size() {
    let mut g = five_items();
    g.attach_texture(2, ImageInfo::new(1600.0, 900.0), 42).unwrap();
    assert_eq!(g.renderer().textures[2], Some(42));
    assert_eq!(g.items()[2].image, Some(ImageInfo::new(1600.0, 900.0)));
    assert_eq!(
        g.renderer().last_param(2, "u_image_size"),
        Some(ShaderParam::ImageSize(Vec2::new(1600.0, 900.0)))
    );
}

#[test]
fn attach_texture_out_of_range_is_an_error() {
    let mut g = five_items();
    assert_eq!(
        g.attach_texture(9, ImageInfo::new(1.0, 1.0), 1),
        Err(GalleryError::ItemOutOfRange { index: 9, len: 5 })
    );
}

#[test]
fn failed_texture_keeps_placeholder() {
    let mut g = five_items();
    g.texture_failed(1, "404");
    g.frame();
    assert_eq!(g.renderer().textures[1], None);
    assert_eq!(g.items()[1].image, None);
}

#[test]
fn drag_scrolls_along_the_wrap_axis() {
    let mut g = five_items();
    g.handle_input(InputEvent::DragStart(Vec2::new(10.0, 600.0)));
    g.handle_input(InputEvent::DragMove(Vec2::new(900.0, 500.0)));
    assert!(approx(g.scroll().target, 200.0));
    g.handle_input(InputEvent::DragEnd);
    assert!(!g.scroll().is_pressed());

    let config = GalleryConfig {
        wrap_axis: WrapAxis::Horizontal,
        ..unit_config()
    };
    let mut h = GalleryLoop::new(config, FakeLayout::column(5, 500.0), RecordingRenderer::default())
        .unwrap();
    h.handle_input(InputEvent::DragStart(Vec2::new(600.0, 10.0)));
    h.handle_input(InputEvent::DragMove(Vec2::new(500.0, 900.0)));
    assert!(approx(h.scroll().target, 200.0));
}

#[test]
fn mode_events_switch_scroll_mode() {
    let mut g = five_items();
    g.handle_input(InputEvent::SetMode(ScrollMode::Autoplay));
    assert_eq!(g.scroll().mode, ScrollMode::Autoplay);
    g.frame();
    assert!(g.scroll().target > 0.0);
    g.handle_input(InputEvent::ToggleMode);
    assert_eq!(g.scroll().mode, ScrollMode::Driven);
}

#[test]
fn autoplay_loops_forever() {
    let config = GalleryConfig {
        scroll_mode: ScrollMode::Autoplay,
        autoplay_speed: 40.0,
        ..unit_config()
    };
    let mut g = GalleryLoop::new(config, FakeLayout::column(5, 500.0), RecordingRenderer::default())
        .unwrap();
    let mut wraps = 0;
    for _ in 0..500 {
        wraps += g.frame().wraps.len();
    }
    assert!(wraps >= 5, "only {wraps} wraps");
}

#[test]
fn horizontal_gallery_uses_container_width() {
    let config = GalleryConfig {
        wrap_axis: WrapAxis::Horizontal,
        ..unit_config()
    };
    let items = (0..4)
        .map(|i| ElementBounds::new(250.0, i as f32 * 600.0, 500.0, 500.0))
        .collect::<Vec<_>>();
    let layout = FakeLayout {
        screen: ScreenDimensions::new(1000.0, 1000.0),
        items,
        container: Some(ElementBounds::new(250.0, 0.0, 2400.0, 500.0)),
    };
    let mut g = GalleryLoop::new(config, layout, RecordingRenderer::default()).unwrap();
    assert!(approx(g.gallery_length(), 4.8));
    g.handle_input(InputEvent::Wheel(6000.0));
    let mut events = Vec::new();
    for _ in 0..150 {
        events.extend(g.frame().wraps);
    }
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| approx(e.delta, 4.8)));
}

#[test]
fn invalid_config_is_rejected() {
    let config = GalleryConfig {
        ease: 0.0,
        ..GalleryConfig::default()
    };
    let err = GalleryLoop::new(config, FakeLayout::column(1, 100.0), RecordingRenderer::default())
        .err();
    assert_eq!(err, Some(GalleryError::InvalidEase(0.0)));
}

#[test]
fn resize_after_long_upward_scroll_keeps_items_on_screen() {
    let mut g = five_items();
    g.handle_input(InputEvent::Wheel(40_000.0));
    for _ in 0..300 {
        g.frame();
    }
    g.handle_input(InputEvent::Wheel(-10.0));
    g.frame();
    assert_eq!(g.scroll().direction, Direction::Up);

    g.handle_input(InputEvent::Resize);
    // One loop is 2500px; the scroll is now within half a loop of zero.
    assert!(g.scroll().current.abs() <= 1250.0, "{}", g.scroll().current);
    assert_eq!(g.scroll().direction, Direction::Up);
    assert!(g.items().iter().all(|i| i.wrap.offset == 0.0));

    for _ in 0..60 {
        g.handle_input(InputEvent::Wheel(-20.0));
        g.frame();
        let visible = g
            .items()
            .iter()
            .any(|i| i.transform.position.y.abs() - i.transform.scale.y / 2.0 < 1.0);
        assert!(visible, "no item on screen after resize");
    }
}

#[test]
fn gallery_length_ignores_untracked_layout_items() {
    let mut g = five_items();
    g.layout_mut().container = None;
    g.layout_mut()
        .items
        .push(ElementBounds::new(10_000.0, 250.0, 500.0, 500.0));
    g.handle_input(InputEvent::Resize);
    assert_eq!(g.items().len(), 5);
    // Span of the five tracked 500px items on a 1000px, 2-unit screen.
    assert!(approx(g.gallery_length(), 5.0), "{}", g.gallery_length());
}
