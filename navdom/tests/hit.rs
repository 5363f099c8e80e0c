use navdom::{hit_test, Document, Element, Event, MouseButton, Rect, RegionMap};

/// The demo page: a clickable nav button on the top line, the menu below it.
fn nav_page() -> (Element, RegionMap) {
    let root = Element::box_()
        .id("root")
        .child(Element::text("☰ menu").id("nav").clickable(true))
        .child(
            Element::box_()
                .id("nav-menu")
                .child(Element::text("Home").id("home")),
        );

    let regions = RegionMap::from([
        ("root".to_string(), Rect::from_size(80, 24)),
        ("nav".to_string(), Rect::new(0, 0, 8, 1)),
        ("nav-menu".to_string(), Rect::new(0, 1, 12, 3)),
    ]);

    (root, regions)
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_click_lands_on_the_nav_button() {
    let (root, regions) = nav_page();
    assert_eq!(hit_test(&regions, &root, 3, 0), Some("nav".to_string()));
}

#[test]
fn test_menu_body_is_not_clickable() {
    let (root, regions) = nav_page();

    // Inside the menu, but neither the menu, its items, nor the root are
    // clickable, so the click has no target.
    assert_eq!(hit_test(&regions, &root, 2, 2), None);
}

#[test]
fn test_click_outside_the_page() {
    let (root, regions) = nav_page();
    assert_eq!(hit_test(&regions, &root, 100, 30), None);
}

#[test]
fn test_unplaced_element_cannot_be_hit() {
    // The host reported no placement for the button, so even a click at its
    // usual spot misses.
    let root = Element::box_()
        .id("root")
        .child(Element::text("☰ menu").id("nav").clickable(true));
    let regions = RegionMap::from([("root".to_string(), Rect::from_size(80, 24))]);

    assert_eq!(hit_test(&regions, &root, 3, 0), None);
}

#[test]
fn test_later_sibling_wins_under_an_overlay() {
    // An opened menu drawn over the nav bar: both contain the point, the
    // later (topmost) sibling takes the click.
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bar").clickable(true))
        .child(Element::box_().id("overlay").clickable(true));

    let regions = RegionMap::from([
        ("root".to_string(), Rect::from_size(80, 24)),
        ("bar".to_string(), Rect::new(0, 0, 80, 2)),
        ("overlay".to_string(), Rect::new(0, 0, 12, 5)),
    ]);

    assert_eq!(hit_test(&regions, &root, 4, 1), Some("overlay".to_string()));

    // Past the overlay's right edge the bar is exposed again
    assert_eq!(hit_test(&regions, &root, 40, 1), Some("bar".to_string()));
}

#[test]
fn test_rect_edges_saturate_near_u16_max() {
    // Host-supplied placements can sit at the far edge of the coordinate
    // space; edge math must not overflow.
    let rect = Rect::new(u16::MAX - 4, u16::MAX - 1, 10, 10);
    assert_eq!(rect.right(), u16::MAX);
    assert_eq!(rect.bottom(), u16::MAX);
    assert!(rect.contains(u16::MAX - 1, u16::MAX - 1));
    assert!(!rect.contains(u16::MAX - 5, u16::MAX - 1));
}

// ============================================================================
// Document Click Mapping
// ============================================================================

#[test]
fn test_click_at_produces_targeted_event() {
    let (root, regions) = nav_page();
    let doc = Document::new(root);

    assert_eq!(
        doc.click_at(&regions, 1, 0, MouseButton::Left),
        Event::Click {
            target: Some("nav".to_string()),
            x: 1,
            y: 0,
            button: MouseButton::Left,
        }
    );
}

#[test]
fn test_click_at_miss_is_untargeted() {
    let (root, regions) = nav_page();
    let doc = Document::new(root);

    // A miss still yields a click event, just without a target
    assert_eq!(
        doc.click_at(&regions, 60, 20, MouseButton::Left),
        Event::Click {
            target: None,
            x: 60,
            y: 20,
            button: MouseButton::Left,
        }
    );
}
