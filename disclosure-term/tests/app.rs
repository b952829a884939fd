use std::time::Duration;

use disclosure::Disclosure;
use disclosure_term::app::next_paint;

async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[test]
fn test_idle_pass_does_not_repaint() {
    let d = Disclosure::new();
    assert_eq!(next_paint(&d, false), None);
}

#[test]
fn test_forced_pass_repaints_current_state() {
    let d = Disclosure::new();
    assert_eq!(next_paint(&d, true), Some(false));
}

#[test]
fn test_click_repaints_once() {
    let d = Disclosure::new();
    d.on_click();

    assert_eq!(next_paint(&d, false), Some(true));
    assert_eq!(next_paint(&d, false), None);
}

#[tokio::test(start_paused = true)]
async fn test_hover_open_after_paint_is_not_lost() {
    let d = Disclosure::new();
    d.on_pointer_enter();
    wait(499).await;

    // A pass paints the closed state just before the timer fires
    assert_eq!(next_paint(&d, true), Some(false));
    wait(2).await;
    assert!(d.is_open());

    // The following pass still sees the change
    assert_eq!(next_paint(&d, false), Some(true));
}

#[tokio::test(start_paused = true)]
async fn test_hover_open_wakes_the_loop() {
    let d = Disclosure::new();
    d.on_pointer_enter();

    let woke = tokio::time::timeout(Duration::from_secs(1), d.hover_opened()).await;
    assert!(woke.is_ok());
    assert_eq!(next_paint(&d, true), Some(true));
}
