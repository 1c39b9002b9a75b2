use super::*;
use crate::core::{InMemorySurface, SurfaceCommand};
use crate::shared::options::DESTINATION_ICON_IMAGE;

fn position() -> GeoPoint {
    GeoPoint::from_lng_lat(1.2345, 1.3456)
}

fn tagged(tag: &str) -> MarkerOptions {
    MarkerOptions::new()
        .with_position(position())
        .with_icon_image(tag)
}

#[test]
fn test_new_configures_surface_to_always_show_icons() {
    let registry = MarkerRegistry::new(InMemorySurface::new());

    let surface = registry.surface();
    assert!(surface.icon_allow_overlap());
    assert!(surface.icon_ignore_placement());
    assert_eq!(
        surface.command_log().entries(),
        &[
            SurfaceCommand::SetIconAllowOverlap(true),
            SurfaceCommand::SetIconIgnorePlacement(true),
        ]
    );
    assert!(registry.is_empty());
    assert!(registry.destination().is_none());
}

#[test]
fn test_add_destination_marker_creates_reserved_icon_at_position() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());

    let id = registry
        .add_destination_marker(position())
        .expect("Ziel-Marker sollte erstellt werden");

    let destination = registry.destination().expect("Ziel-Marker erwartet");
    assert_eq!(destination.id, id);
    assert_eq!(destination.icon_image(), Some(DESTINATION_ICON_IMAGE));
    assert_eq!(destination.options.position, Some(position()));
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(id));
}

#[test]
fn test_add_destination_marker_replaces_previous_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());

    let first = registry.add_destination_marker(position()).unwrap();
    let second = registry
        .add_destination_marker(GeoPoint::new(48.137, 11.575))
        .unwrap();

    let log = registry.surface().command_log();
    assert_eq!(log.created_ids(), vec![first, second]);
    assert_eq!(log.deleted_ids(), vec![first]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.destination_id(), Some(second));
    assert!(!registry.contains(first));
}

#[test]
fn test_repeated_destinations_delete_all_but_last() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());

    let ids: Vec<u64> = (0..5)
        .map(|i| {
            registry
                .add_destination_marker(GeoPoint::new(f64::from(i), 0.0))
                .unwrap()
        })
        .collect();

    let log = registry.surface().command_log();
    assert_eq!(log.deleted_ids(), ids[..4].to_vec());
    assert_eq!(registry.destination_id(), ids.last().copied());
    assert_eq!(registry.surface().symbol_count(), 1);
}

#[test]
fn test_add_custom_marker_does_not_touch_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let destination = registry.add_destination_marker(position()).unwrap();

    let custom = registry.add_custom_marker(tagged("feedback")).unwrap();

    assert_eq!(registry.destination_id(), Some(destination));
    let ids: Vec<u64> = registry.markers().map(|m| m.id).collect();
    assert_eq!(ids, vec![destination, custom]);
}

#[test]
fn test_custom_marker_with_destination_tag_is_not_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());

    registry
        .add_custom_marker(tagged(DESTINATION_ICON_IMAGE))
        .unwrap();

    assert!(registry.destination().is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_all_markers_deletes_in_insertion_order() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let a = registry.add_custom_marker(tagged("a")).unwrap();
    let destination = registry.add_destination_marker(position()).unwrap();
    let b = registry.add_custom_marker(tagged("b")).unwrap();

    registry.remove_all_markers().unwrap();

    assert_eq!(
        registry.surface().command_log().deleted_ids(),
        vec![a, destination, b]
    );
    assert!(registry.is_empty());
    assert!(registry.destination().is_none());
    assert_eq!(registry.surface().symbol_count(), 0);
}

#[test]
fn test_remove_all_markers_on_empty_registry_is_noop() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());

    registry.remove_all_markers().unwrap();

    assert!(registry.surface().command_log().deleted_ids().is_empty());
}

#[test]
fn test_remove_marker_by_id_is_idempotent() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let id = registry.add_custom_marker(tagged("feedback")).unwrap();

    assert!(registry.remove_marker_by_id(id).unwrap());
    assert!(!registry.remove_marker_by_id(id).unwrap());

    assert_eq!(registry.surface().command_log().deleted_ids(), vec![id]);
    assert!(registry.is_empty());
}

#[test]
fn test_remove_marker_by_unknown_id_leaves_state_unchanged() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let destination = registry.add_destination_marker(position()).unwrap();

    assert!(!registry.remove_marker_by_id(911).unwrap());

    assert!(registry.surface().command_log().deleted_ids().is_empty());
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.destination_id(), Some(destination));
}

#[test]
fn test_remove_destination_by_id_clears_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let destination = registry.add_destination_marker(position()).unwrap();

    registry.remove_marker_by_id(destination).unwrap();
    registry.add_destination_marker(position()).unwrap();

    // Kein zweites delete für den bereits entfernten Ziel-Marker
    assert_eq!(
        registry.surface().command_log().deleted_ids(),
        vec![destination]
    );
}

#[test]
fn test_remove_markers_by_icon_tag_only_hits_matching_tag() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let a = registry.add_custom_marker(tagged("feedback")).unwrap();
    let b = registry.add_custom_marker(tagged("feedback")).unwrap();
    let c = registry.add_custom_marker(tagged("random")).unwrap();

    let removed = registry.remove_markers_by_icon_tag("feedback").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(registry.surface().command_log().deleted_ids(), vec![a, b]);
    assert!(registry.contains(c));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_markers_by_destination_tag_clears_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    registry.add_destination_marker(position()).unwrap();
    let custom = registry.add_custom_marker(tagged("random")).unwrap();

    let removed = registry
        .remove_markers_by_icon_tag(DESTINATION_ICON_IMAGE)
        .unwrap();

    assert_eq!(removed, 1);
    assert!(registry.destination().is_none());
    assert!(registry.contains(custom));
}

#[test]
fn test_markers_without_icon_never_match_tag() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    registry.add_custom_marker(MarkerOptions::new()).unwrap();

    assert_eq!(registry.remove_markers_by_icon_tag("").unwrap(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_with_options_uses_configured_destination_icon() {
    let options = LayerOptions {
        destination_icon_image: "ziel-flagge".to_string(),
        ..LayerOptions::default()
    };
    let mut registry = MarkerRegistry::with_options(InMemorySurface::new(), options);

    registry.add_destination_marker(position()).unwrap();

    let destination = registry.destination().unwrap();
    assert_eq!(destination.icon_image(), Some("ziel-flagge"));
    assert_eq!(registry.options().destination_icon_image, "ziel-flagge");
}

#[test]
fn test_create_failure_propagates_and_tracks_nothing() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    registry.surface_mut().fail_next_create("Style nicht geladen");

    let err = registry.add_custom_marker(tagged("feedback")).unwrap_err();

    assert_eq!(err.to_string(), "Style nicht geladen");
    assert!(registry.is_empty());
}

#[test]
fn test_destination_create_failure_leaves_no_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let first = registry.add_destination_marker(position()).unwrap();
    registry.surface_mut().fail_next_create("Style nicht geladen");

    assert!(registry.add_destination_marker(position()).is_err());

    assert_eq!(registry.surface().command_log().deleted_ids(), vec![first]);
    assert!(registry.destination().is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_destination_delete_failure_keeps_previous_destination() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let first = registry.add_destination_marker(position()).unwrap();
    registry.surface_mut().fail_delete_of(first);

    assert!(registry.add_destination_marker(position()).is_err());

    assert_eq!(registry.destination_id(), Some(first));
    assert_eq!(registry.surface().command_log().created_ids(), vec![first]);
}

#[test]
fn test_remove_all_failure_keeps_undeleted_markers_tracked() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let a = registry.add_custom_marker(tagged("a")).unwrap();
    let b = registry.add_custom_marker(tagged("b")).unwrap();
    let destination = registry.add_destination_marker(position()).unwrap();
    registry.surface_mut().fail_delete_of(b);

    let err = registry.remove_all_markers().unwrap_err();

    assert!(err.to_string().contains(&b.to_string()));
    assert!(!registry.contains(a));
    assert!(registry.contains(b));
    assert_eq!(registry.destination_id(), Some(destination));

    registry.surface_mut().clear_failures();
    registry.remove_all_markers().unwrap();
    assert_eq!(
        registry.surface().command_log().deleted_ids(),
        vec![a, b, destination]
    );
    assert!(registry.is_empty());
}

#[test]
fn test_remove_by_icon_tag_failure_untracks_only_deleted() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let a = registry.add_custom_marker(tagged("feedback")).unwrap();
    let b = registry.add_custom_marker(tagged("feedback")).unwrap();
    registry.surface_mut().fail_delete_of(b);

    assert!(registry.remove_markers_by_icon_tag("feedback").is_err());

    assert!(!registry.contains(a));
    assert!(registry.contains(b));
}

#[test]
fn test_into_surface_keeps_tracked_markers_drawn() {
    let mut registry = MarkerRegistry::new(InMemorySurface::new());
    let id = registry.add_custom_marker(tagged("feedback")).unwrap();

    let surface = registry.into_surface();

    assert!(surface.has_symbol(id));
}
