// Host-side tests for scroll section tracking and guide messages.

use galaxy_core::*;

const VH: f64 = 800.0;

#[test]
fn scroll_offsets_map_to_sections() {
    assert_eq!(Section::from_scroll(0.0, VH), Section::Hero);
    assert_eq!(Section::from_scroll(0.49 * VH, VH), Section::Hero);
    assert_eq!(Section::from_scroll(0.6 * VH, VH), Section::About);
    assert_eq!(Section::from_scroll(1.5 * VH, VH), Section::Skills);
    assert_eq!(Section::from_scroll(3.0 * VH, VH), Section::Projects);
    assert_eq!(Section::from_scroll(4.0 * VH, VH), Section::Contact);
    assert_eq!(Section::from_scroll(40.0 * VH, VH), Section::Contact);
}

#[test]
fn degenerate_viewport_stays_on_hero() {
    assert_eq!(Section::from_scroll(5000.0, 0.0), Section::Hero);
    assert_eq!(Section::from_scroll(5000.0, -1.0), Section::Hero);
    assert_eq!(Section::from_scroll(f64::NAN, VH), Section::Hero);
    assert_eq!(Section::from_scroll(-200.0, VH), Section::Hero);
}

#[test]
fn new_session_starts_on_hero_with_greeting() {
    let g = GuideTracker::new(0.0);
    assert_eq!(g.section(), Section::Hero);
    assert_eq!(g.click_count(), 0);
    assert!(g.is_visible());
    let m = g.message();
    assert_eq!(m.title, Section::Hero.title());
    assert_eq!(m.body, Section::Hero.message());
    assert_eq!(m.tip, Section::Hero.tip());
}

#[test]
fn section_change_shows_message_then_hides_after_five_seconds() {
    let mut g = GuideTracker::new(0.0);
    g.tick(10.0);
    assert!(!g.is_visible());

    assert_eq!(g.on_scroll(0.6 * VH, VH, 20.0), Some(Section::About));
    assert!(g.is_visible());
    assert_eq!(g.message().title, Section::About.title());

    // same section again is not a change
    assert_eq!(g.on_scroll(0.7 * VH, VH, 21.0), None);

    assert!(!g.tick(24.9));
    assert!(g.is_visible());
    assert!(g.tick(25.0));
    assert!(!g.is_visible());
}

#[test]
fn click_keeps_message_for_eight_seconds() {
    let mut g = GuideTracker::new(0.0);
    g.tick(6.0);
    g.on_click(10.0);
    assert!(g.is_visible());
    g.tick(17.9);
    assert!(g.is_visible());
    g.tick(18.0);
    assert!(!g.is_visible());
}

#[test]
fn click_during_section_message_extends_to_click_timeout() {
    let mut g = GuideTracker::new(0.0);
    g.on_click(1.0);
    assert!(!g.tick(5.0));
    assert!(g.is_visible());
    assert!(!g.tick(8.9));
    assert!(g.is_visible());
    assert!(g.tick(9.0));
    assert!(!g.is_visible());
}

#[test]
fn section_change_during_click_message_shortens_to_section_timeout() {
    let mut g = GuideTracker::new(0.0);
    g.on_click(0.0);
    assert_eq!(g.on_scroll(0.6 * VH, VH, 1.0), Some(Section::About));
    assert!(!g.tick(5.9));
    assert!(g.is_visible());
    assert!(g.tick(6.0));
    assert!(!g.is_visible());
}

#[test]
fn dismissed_guide_reappears_on_next_scroll_or_click() {
    let mut g = GuideTracker::new(0.0);
    g.dismiss();
    assert!(!g.is_visible());

    assert_eq!(g.on_scroll(0.6 * VH, VH, 2.0), Some(Section::About));
    assert!(g.is_visible());
    assert!(!g.tick(6.9));
    assert!(g.tick(7.0));
    assert!(!g.is_visible());

    g.dismiss();
    g.on_click(10.0);
    assert!(g.is_visible());
    assert!(!g.tick(17.9));
    assert!(g.tick(18.0));
    assert!(!g.is_visible());
}

#[test]
fn six_clicks_cycle_all_responses_then_repeat() {
    let mut g = GuideTracker::new(0.0);
    let mut seen = Vec::new();
    for i in 0..6 {
        g.on_click(i as f64);
        let m = g.message();
        assert_eq!(m.title, CLICK_TITLE);
        assert!(!seen.contains(&m.body), "repeated early: {}", m.body);
        seen.push(m.body);
    }
    assert_eq!(seen.len(), CLICK_RESPONSES.len());
    g.on_click(6.0);
    assert_eq!(g.message().body, seen[0]);
    assert_eq!(g.click_count(), 7);
}

#[test]
fn tip_follows_section_even_after_clicks() {
    let mut g = GuideTracker::new(0.0);
    g.on_click(1.0);
    g.on_scroll(3.0 * VH, VH, 2.0);
    let m = g.message();
    assert_eq!(m.title, CLICK_TITLE);
    assert_eq!(m.tip, Section::Projects.tip());
}

#[test]
fn dismiss_hides_and_clears_deadline() {
    let mut g = GuideTracker::new(0.0);
    g.dismiss();
    assert!(!g.is_visible());
    assert!(!g.tick(100.0));
}

#[test]
fn section_ids_are_distinct() {
    let ids: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), Section::ALL.len());
}
