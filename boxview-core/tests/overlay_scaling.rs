use boxview_core::{
    layout_overlays, AnnotationBox, BoxSet, ImageSize, OverlayRect, ScaleFactors, ViewState,
};

fn rect(left: f64, top: f64, width: f64, height: f64) -> OverlayRect {
    OverlayRect {
        left,
        top,
        width,
        height,
    }
}

#[test]
fn page_data_box_scaled_to_half_size_display() {
    let state = ViewState::from_json(
        r#"{"image_url": "/file/receipt.png", "boxes": [[[100, 100], [300, 200]]]}"#,
    )
    .unwrap();
    let (_, boxes) = state.annotated_image().unwrap();

    let scale = ScaleFactors::between(ImageSize::new(400.0, 300.0), ImageSize::new(800.0, 600.0));
    let placements = layout_overlays(boxes, scale);

    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].index, 0);
    assert_eq!(placements[0].rect, rect(50.0, 50.0, 100.0, 50.0));
}

#[test]
fn repeated_layout_is_identical() {
    let boxes: BoxSet = (0..25)
        .map(|i| {
            let o = i as f64 * 13.0;
            AnnotationBox::from_corners(o, o / 2.0, o + 40.0, o / 2.0 + 17.0)
        })
        .collect();
    let scale = ScaleFactors::between(ImageSize::new(640.0, 360.0), ImageSize::new(1920.0, 1080.0));

    let first = layout_overlays(&boxes, scale);
    let second = layout_overlays(&boxes, scale);

    assert_eq!(first.len(), 25);
    assert_eq!(first, second);
}

#[test]
fn upscaled_display_grows_boxes() {
    let boxes = BoxSet::new(vec![AnnotationBox::from_corners(10.0, 10.0, 20.0, 15.0)]);
    let scale = ScaleFactors::between(ImageSize::new(300.0, 300.0), ImageSize::new(100.0, 150.0));

    let placements = layout_overlays(&boxes, scale);

    assert_eq!(placements[0].rect, rect(30.0, 20.0, 30.0, 10.0));
}

#[test]
fn every_placement_matches_componentwise_product() {
    let scale = ScaleFactors::new(0.8125, 1.25);
    let boxes: BoxSet = [
        [3.0, 4.0, 50.0, 60.0],
        [0.0, 0.0, 0.0, 0.0],
        [700.5, 20.25, 701.0, 500.0],
    ]
    .into_iter()
    .map(|[x1, y1, x2, y2]| AnnotationBox::from_corners(x1, y1, x2, y2))
    .collect();

    for placement in layout_overlays(&boxes, scale) {
        let b = boxes.get(placement.index).unwrap();
        assert_eq!(placement.rect.left, b.top_left.x * scale.x);
        assert_eq!(placement.rect.top, b.top_left.y * scale.y);
        assert_eq!(placement.rect.width, (b.bottom_right.x - b.top_left.x) * scale.x);
        assert_eq!(placement.rect.height, (b.bottom_right.y - b.top_left.y) * scale.y);
    }
}
