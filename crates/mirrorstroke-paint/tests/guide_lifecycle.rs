use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mirrorstroke_core::{
    AppEvent, Coords, EventBus, EventCategory, EventFilter, Extent, GuideEvent, GuideId,
    Orientation, SymmetryEvent,
};
use mirrorstroke_paint::{Document, TransformKind};
use mirrorstroke_settings::{
    MirrorSettings, SettingValue, HORIZONTAL_POSITION, HORIZONTAL_SYMMETRY, POINT_SYMMETRY,
    VERTICAL_SYMMETRY,
};

fn document() -> Document {
    Document::new(Extent::new(400, 300), Arc::new(EventBus::new()))
}

fn guide_id(doc: &Document, orientation: Orientation) -> GuideId {
    doc.mirror()
        .and_then(|m| m.guide(orientation).handle())
        .expect("guide exists")
        .id
}

#[test]
fn test_mirrored_stroke_session() {
    let mut doc = document();
    doc.install_mirror();
    doc.set_mirror_property(HORIZONTAL_SYMMETRY, true.into()).unwrap();
    doc.set_mirror_property(VERTICAL_SYMMETRY, true.into()).unwrap();
    doc.set_mirror_property(POINT_SYMMETRY, true.into()).unwrap();

    let strokes = doc.begin_stroke(Coords::new(50.0, 20.0)).to_vec();
    let points: Vec<(f64, f64)> = strokes.iter().map(|c| (c.x, c.y)).collect();
    assert_eq!(
        points,
        vec![(50.0, 20.0), (50.0, 280.0), (350.0, 20.0), (350.0, 280.0)]
    );

    let kinds: Vec<Option<TransformKind>> = (0..strokes.len())
        .map(|i| doc.transform_for(i, 24, 24).map(|t| t.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(TransformKind::HorizontalReflect),
            Some(TransformKind::VerticalReflect),
            Some(TransformKind::CentralRotate),
        ]
    );
}

#[test]
fn test_transform_cache_is_stable_across_a_stroke() {
    let mut doc = document();
    doc.install_mirror();
    doc.set_mirror_property(VERTICAL_SYMMETRY, true.into()).unwrap();
    doc.begin_stroke(Coords::new(1.0, 1.0));

    let first = doc.transform_for(1, 32, 32).unwrap();
    let second = doc.transform_for(1, 32, 32).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.kind(), TransformKind::VerticalReflect);
}

#[test]
fn test_disable_transformation_forces_identity() {
    let mut doc = document();
    doc.apply_mirror_settings(&MirrorSettings {
        horizontal_symmetry: true,
        vertical_symmetry: true,
        point_symmetry: true,
        disable_transformation: true,
        horizontal_position: 150.0,
        vertical_position: 200.0,
    })
    .unwrap();

    let count = doc.begin_stroke(Coords::new(10.0, 10.0)).len();
    assert_eq!(count, 4);
    for index in 0..count {
        assert!(doc.transform_for(index, 16, 16).is_none());
    }
}

#[test]
fn test_dragged_guide_applies_to_next_stroke() {
    let mut doc = document();
    doc.install_mirror();
    doc.set_mirror_property(HORIZONTAL_SYMMETRY, true.into()).unwrap();
    let id = guide_id(&doc, Orientation::Horizontal);

    doc.move_guide(id, 100).unwrap();
    assert_eq!(
        doc.mirror_property(HORIZONTAL_POSITION).unwrap(),
        SettingValue::Double(100.0)
    );

    let strokes = doc.begin_stroke(Coords::new(0.0, 30.0));
    assert_eq!(strokes[1].y, 170.0);
}

#[test]
fn test_point_symmetry_off_hides_guides_but_keeps_handles() {
    let mut doc = document();
    doc.install_mirror();
    doc.set_mirror_property(HORIZONTAL_SYMMETRY, true.into()).unwrap();
    doc.set_mirror_property(POINT_SYMMETRY, true.into()).unwrap();
    assert_eq!(doc.image().guides().count(), 2);

    doc.set_mirror_property(POINT_SYMMETRY, false.into()).unwrap();
    let mirror = doc.mirror().unwrap();
    assert!(mirror.guide(Orientation::Horizontal).is_attached());
    assert!(!mirror.guide(Orientation::Vertical).is_attached());
    assert!(mirror.guide(Orientation::Vertical).handle().is_some());
    assert_eq!(doc.image().guides().count(), 1);

    // Showing it again reuses the same guide
    let hidden = guide_id(&doc, Orientation::Vertical);
    doc.set_mirror_property(VERTICAL_SYMMETRY, true.into()).unwrap();
    assert_eq!(guide_id(&doc, Orientation::Vertical), hidden);
    assert!(doc.image().guide(hidden).is_some());
}

#[test]
fn test_deleting_last_guide_removes_mirror_once() {
    let events = Arc::new(EventBus::new());
    let removals = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&removals);
    events.subscribe(
        EventFilter::Categories(vec![EventCategory::Symmetry]),
        move |event| {
            if matches!(event, AppEvent::Symmetry(SymmetryEvent::Removed { .. })) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        },
    );

    let mut doc = Document::new(Extent::new(400, 300), Arc::clone(&events));
    doc.install_mirror();
    doc.set_mirror_property(VERTICAL_SYMMETRY, true.into()).unwrap();
    doc.set_mirror_property(POINT_SYMMETRY, true.into()).unwrap();

    let horizontal = guide_id(&doc, Orientation::Horizontal);
    let vertical = guide_id(&doc, Orientation::Vertical);

    doc.delete_guide(horizontal).unwrap();
    assert!(doc.mirror().is_some());
    assert_eq!(removals.load(Ordering::SeqCst), 0);

    doc.delete_guide(vertical).unwrap();
    assert!(doc.mirror().is_none());
    assert!(doc.image().multi_stroke().is_none());
    assert_eq!(removals.load(Ordering::SeqCst), 1);

    // Strokes now paint only the origin
    assert_eq!(doc.begin_stroke(Coords::new(3.0, 4.0)).len(), 1);
}

#[test]
fn test_guide_events_are_published() {
    let events = Arc::new(EventBus::new());
    let added = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&added);
    events.subscribe(
        EventFilter::Categories(vec![EventCategory::Guide]),
        move |event| {
            if let AppEvent::Guide(GuideEvent::Added { position, .. }) = event {
                assert_eq!(*position, 150);
                counter.fetch_add(1, Ordering::SeqCst);
            }
        },
    );

    let mut doc = Document::new(Extent::new(400, 300), events);
    doc.install_mirror();
    doc.set_mirror_property(HORIZONTAL_SYMMETRY, true.into()).unwrap();
    assert_eq!(added.load(Ordering::SeqCst), 1);
}

#[test]
fn test_restored_settings_place_guides() {
    let mut doc = document();
    let settings = MirrorSettings {
        vertical_symmetry: true,
        vertical_position: 123.0,
        ..MirrorSettings::default()
    };
    doc.apply_mirror_settings(&settings).unwrap();

    let id = guide_id(&doc, Orientation::Vertical);
    assert_eq!(doc.image().guide(id).map(|g| g.position), Some(123));
    assert_eq!(doc.mirror().unwrap().to_settings(), settings);
}
