use infocam_live::common::{DashboardStats, Detection, LiveMessage, Priority};
use infocam_live::feed::{route, FeedAction};

fn sample_detections() -> Vec<Detection> {
    vec![
        Detection::new("person", 0.95)
            .with_bbox(100.0, 150.0, 200.0, 400.0)
            .with_source_size(1920.0, 1080.0),
        Detection::new("car", 0.88)
            .with_bbox(800.0, 500.0, 300.0, 200.0)
            .with_source_size(1920.0, 1080.0),
    ]
}

#[test]
fn detection_for_active_camera_renders() {
    let detections = sample_detections();
    let message = LiveMessage::Detections {
        camera_id: 3,
        detections: detections.clone(),
    };

    assert_eq!(
        route(message, Some(3)),
        FeedAction::RenderDetections(detections)
    );
}

#[test]
fn detection_for_other_camera_is_ignored() {
    let message = LiveMessage::Detections {
        camera_id: 5,
        detections: sample_detections(),
    };

    assert_eq!(route(message, Some(3)), FeedAction::Ignore);
}

#[test]
fn detection_with_no_active_camera_is_ignored() {
    let message = LiveMessage::Detections {
        camera_id: 3,
        detections: sample_detections(),
    };

    assert_eq!(route(message, None), FeedAction::Ignore);
}

#[test]
fn violation_routes_regardless_of_active_camera() {
    let message = LiveMessage::Violation {
        camera_id: 7,
        violation_type: "No Helmet".to_string(),
        priority: Priority::High,
    };

    let expected = FeedAction::ShowViolationAlert {
        violation_type: "No Helmet".to_string(),
        camera_id: 7,
        priority: Priority::High,
    };

    assert_eq!(route(message.clone(), Some(3)), expected);
    assert_eq!(route(message, None), expected);
}

#[test]
fn stats_and_camera_status_always_route() {
    let stats = DashboardStats {
        top_violation: Some("No Helmet".to_string()),
        violations_count: Some(156),
        ..Default::default()
    };

    assert_eq!(
        route(LiveMessage::Stats {
            stats: stats.clone()
        }, None),
        FeedAction::UpdateStats(stats)
    );

    assert_eq!(
        route(
            LiveMessage::CameraStatus {
                camera_id: 2,
                status: "Offline".to_string(),
            },
            Some(9)
        ),
        FeedAction::UpdateCameraStatus {
            camera_id: 2,
            status: "Offline".to_string(),
        }
    );
}

#[test]
fn unknown_kind_is_ignored() {
    let message = LiveMessage::from_wire(r#"{"type":"bogus"}"#).unwrap();
    assert_eq!(
        message,
        LiveMessage::Unknown {
            kind: "bogus".to_string()
        }
    );
    assert_eq!(route(message, Some(3)), FeedAction::Ignore);
}

#[test]
fn wire_detection_message_parses() {
    let raw = r#"{
        "type": "detection",
        "camera_id": 3,
        "detections": [{
            "class": "person",
            "confidence": 0.95,
            "x": 100, "y": 150, "width": 200, "height": 400,
            "image_width": 1920, "image_height": 1080
        }]
    }"#;

    let message = LiveMessage::from_wire(raw).unwrap();
    match message {
        LiveMessage::Detections {
            camera_id,
            detections,
        } => {
            assert_eq!(camera_id, 3);
            assert_eq!(detections.len(), 1);
            assert_eq!(detections[0].class, "person");
            assert_eq!(detections[0].confidence, 0.95);
            assert!(detections[0].is_scalable());
        }
        other => panic!("expected a detection message, got {other:?}"),
    }
}

#[test]
fn wire_violation_message_parses() {
    let raw = r#"{"type":"violation","camera_id":7,"violation_type":"No Helmet","priority":"high"}"#;
    assert_eq!(
        LiveMessage::from_wire(raw).unwrap(),
        LiveMessage::Violation {
            camera_id: 7,
            violation_type: "No Helmet".to_string(),
            priority: Priority::High,
        }
    );
}

#[test]
fn missing_discriminant_is_unknown() {
    let message = LiveMessage::from_wire(r#"{"camera_id":1}"#).unwrap();
    assert_eq!(
        message,
        LiveMessage::Unknown {
            kind: String::new()
        }
    );
}

#[test]
fn broken_payload_of_known_kind_is_an_error() {
    // Recognized discriminant, payload missing required fields.
    assert!(LiveMessage::from_wire(r#"{"type":"violation","camera_id":7}"#).is_err());
    assert!(LiveMessage::from_wire("not json at all").is_err());
}

#[test]
fn parse_and_route_ties_the_two_together() {
    let raw = r#"{"type":"camera_status","camera_id":4,"status":"Online"}"#;
    assert_eq!(
        infocam_live::parse_and_route(raw, None).unwrap(),
        FeedAction::UpdateCameraStatus {
            camera_id: 4,
            status: "Online".to_string(),
        }
    );

    assert_eq!(
        infocam_live::parse_and_route(r#"{"type":"bogus"}"#, Some(1)).unwrap(),
        FeedAction::Ignore
    );
    assert!(infocam_live::parse_and_route("{{", Some(1)).is_err());
}

#[test]
fn stats_update_only_overwrites_present_fields() {
    let mut held = DashboardStats {
        top_violation: Some("No Helmet".to_string()),
        violations_count: Some(156),
        high_priority: Some(45),
        medium_priority: Some(78),
        low_priority: Some(33),
    };

    let update: DashboardStats =
        serde_json::from_str(r#"{"violations_count":157,"high_priority":46}"#).unwrap();
    held.apply(&update);

    assert_eq!(held.top_violation.as_deref(), Some("No Helmet"));
    assert_eq!(held.violations_count, Some(157));
    assert_eq!(held.high_priority, Some(46));
    assert_eq!(held.medium_priority, Some(78));
    assert_eq!(held.low_priority, Some(33));
}
