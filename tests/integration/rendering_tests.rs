use remote_image_view::{DisplayImage, SyncTiming, ViewOptions};

use super::{build_remote_image_test, jpeg_bytes, placeholder, png_bytes, url, RED};

#[test]
fn given_no_url_should_render_placeholder_and_never_load() {
    let mut test = build_remote_image_test().build();

    test.complete_loads();

    assert_eq!(test.loads(), 0);
    // Mount, then the resync once subscribed
    assert_eq!(test.renders.count(), 2);
    assert_eq!(test.last_render(), placeholder());
}

#[test]
fn given_a_pending_load_should_render_placeholder() {
    let test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(10, 10, RED))
        .build();

    assert_eq!(test.network.pending(), 1);
    assert_eq!(test.last_render(), placeholder());
}

#[test]
fn given_valid_png_bytes_when_load_completes_should_render_decoded_image() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(10, 10, RED))
        .build();

    test.complete_loads();

    // 1. Mount with nothing fetched
    // 2. Resync once subscribed, the load has landed by now
    // 3. Fetcher reported the bytes
    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0], placeholder());
        assert_eq!(renders[1], DisplayImage::solid(10, 10, RED));
        assert_eq!(renders[2], DisplayImage::solid(10, 10, RED));
    });
}

#[test]
fn given_valid_jpeg_bytes_when_load_completes_should_render_decoded_image() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.jpg"))
        .given_response(url("cat.jpg"), jpeg_bytes(10, 10, [255, 0, 0]))
        .build();

    test.complete_loads();

    let image = test.last_render();
    assert_eq!((image.width(), image.height()), (10, 10));
    let [r, g, b, a] = image.pixel(5, 5).unwrap();
    assert!(r > 200 && g < 60 && b < 60, "expected red, got {r},{g},{b}");
    assert_eq!(a, 255);
}

#[test]
fn given_malformed_bytes_should_keep_rendering_placeholder() {
    let mut test = build_remote_image_test()
        .given_url(url("broken.png"))
        .given_response(url("broken.png"), b"<html>502 Bad Gateway</html>".to_vec())
        .build();

    test.complete_loads();

    assert_eq!(test.renders.count(), 3);
    assert_eq!(test.last_render(), placeholder());
    assert!(!test.driver.state().image_data.is_empty());
}

#[test]
fn given_a_failed_load_should_keep_rendering_placeholder() {
    let mut test = build_remote_image_test()
        .given_url(url("gone.png"))
        .given_failure(url("gone.png"))
        .build();

    test.complete_loads();

    assert_eq!(test.loads(), 1);
    assert_eq!(test.renders.count(), 2);
    assert_eq!(test.last_render(), placeholder());
}

#[test]
fn given_deferred_sync_should_render_image_one_pass_late() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(10, 10, RED))
        .given_options(ViewOptions::default().with_sync(SyncTiming::Deferred))
        .build();

    test.driver.process_events();
    test.complete_loads();

    // 1. Mount
    // 2. Synchronize scheduled by the mount
    // 3. Fetcher change observed, still showing the old snapshot
    // 4. Synchronize scheduled by that pass
    assert_eq!(test.renders.count(), 4);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0], placeholder());
        assert_eq!(renders[1], placeholder());
        assert_eq!(renders[2], placeholder());
        assert_eq!(renders[3], DisplayImage::solid(10, 10, RED));
    });
}

#[test]
fn given_an_immediate_sync_should_render_image_on_the_observing_pass() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(4, 4, RED))
        .build();

    test.driver.process_events();
    assert_eq!(test.renders.count(), 2);

    test.network.run_pending();
    assert_eq!(test.renders.count(), 2);

    test.driver.process_events();
    assert_eq!(test.renders.count(), 3);
    assert_eq!(test.last_render(), DisplayImage::solid(4, 4, RED));
}
