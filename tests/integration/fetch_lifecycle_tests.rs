use remote_image_view::RemoteImageFetcher;

use super::{build_remote_image_test, png_bytes, url, RemoteImageTest, BLUE, RED};

#[test]
fn given_a_mounted_view_should_start_exactly_one_load() {
    let test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(3, 3, RED))
        .build();

    assert_eq!(test.loads(), 1);
    assert_eq!(test.fetcher.observer_count(), 1);
}

#[test]
fn given_many_render_passes_should_not_load_again() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(3, 3, RED))
        .build();
    test.complete_loads();

    for _ in 0..4 {
        test.fetcher.publish(png_bytes(3, 3, BLUE));
    }
    test.driver.process_events();

    // 1 mount + 1 resync + 1 load + 4 publishes
    assert_eq!(test.renders.count(), 7);
    assert_eq!(test.loads(), 1);
}

#[test]
fn given_a_reappearance_should_load_again() {
    let mut test = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), png_bytes(3, 3, RED))
        .build();
    test.complete_loads();

    test.driver.appear();

    assert_eq!(test.loads(), 2);
    assert_eq!(test.network.pending(), 1);
}

#[test]
fn given_a_dropped_view_should_prune_its_observer() {
    let RemoteImageTest {
        driver, fetcher, ..
    } = build_remote_image_test().given_url(url("cat.png")).build();
    assert_eq!(fetcher.observer_count(), 1);

    drop(driver);
    fetcher.publish(vec![1, 2, 3]);

    assert_eq!(fetcher.observer_count(), 0);
}

#[test]
fn given_a_view_dropped_mid_load_should_still_finish_the_load() {
    let bytes = png_bytes(3, 3, RED);
    let RemoteImageTest {
        driver,
        fetcher,
        network,
        renders,
        ..
    } = build_remote_image_test()
        .given_url(url("cat.png"))
        .given_response(url("cat.png"), bytes.clone())
        .build();

    drop(driver);
    network.run_pending();

    assert_eq!(fetcher.image_data(), bytes);
    assert_eq!(renders.count(), 1);
}
