use journey_core::{GalleryKey, GalleryState, ImageCdn};

#[test]
fn index_wraps_in_both_directions() {
    let mut gallery = GalleryState::new(3);
    gallery.prev();
    assert_eq!(gallery.index(), 2);
    gallery.next();
    assert_eq!(gallery.index(), 0);
}

#[test]
fn empty_gallery_renders_nothing() {
    let mut gallery = GalleryState::new(0);
    assert!(!gallery.is_renderable());
    gallery.next();
    gallery.prev();
    gallery.open_at(2);
    assert_eq!(gallery.index(), 0);
    assert!(!gallery.is_open());
}

#[test]
fn single_image_has_no_controls() {
    let gallery = GalleryState::new(1);
    assert!(gallery.is_renderable());
    assert!(!gallery.shows_controls());
    assert!(GalleryState::new(2).shows_controls());
}

#[test]
fn keys_only_apply_while_open() {
    let mut gallery = GalleryState::new(3);
    assert!(!gallery.handle_key("ArrowRight"));
    assert_eq!(gallery.index(), 0);

    gallery.open_at(1);
    assert!(gallery.handle_key("ArrowRight"));
    assert_eq!(gallery.index(), 2);
    assert!(gallery.handle_key("ArrowRight"));
    assert_eq!(gallery.index(), 0);
    assert!(gallery.handle_key("ArrowLeft"));
    assert_eq!(gallery.index(), 2);
    assert!(!gallery.handle_key("Enter"));

    gallery.close();
    assert!(!gallery.handle_key("ArrowLeft"));
    assert_eq!(gallery.index(), 2);
}

#[test]
fn key_mapping() {
    assert_eq!(GalleryKey::from_key("ArrowLeft"), Some(GalleryKey::Previous));
    assert_eq!(GalleryKey::from_key("ArrowRight"), Some(GalleryKey::Next));
    assert_eq!(GalleryKey::from_key("a"), None);
}

#[test]
fn cdn_urls() {
    let cdn = ImageCdn::new(Some("portfolio".to_string()));
    assert_eq!(
        cdn.url("nyc/cover", 800, 400),
        "https://res.cloudinary.com/portfolio/image/upload/c_fill,w_800,h_400,f_auto,q_auto/nyc/cover"
    );
    assert_eq!(cdn.url("https://example.com/a.jpg", 800, 400), "https://example.com/a.jpg");
    assert_eq!(ImageCdn::new(Some("  ".to_string())).url("nyc/cover", 1, 1), "nyc/cover");
    assert_eq!(ImageCdn::default().url("nyc/cover", 1, 1), "nyc/cover");
}
