use std::cell::Cell;

use lfx_pager::web::{self, RenderOptions};
use lfx_pager::{Callbacks, Control, PageSlot, PaginationRequest, compute, dispatch};

/// Clicking through the bar and recomputing walks the window along.
#[test]
fn clicking_next_moves_the_window() {
    let mut page = 3;
    let mut view = compute(&PaginationRequest::new(page, 10, 120)).unwrap();

    for _ in 0..2 {
        let mut next_page = None;
        let mut handler = Callbacks::new(|p| next_page = Some(p), |_| {});
        assert!(dispatch(&view, Control::Next, &mut handler));
        page = next_page.unwrap();
        view = compute(&PaginationRequest::new(page, 10, 120)).unwrap();
    }

    assert_eq!(page, 5);
    let numbers: Vec<_> = view.items.iter().map(PageSlot::page_number).collect();
    assert_eq!(
        numbers,
        vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(12)]
    );
}

/// Jumping to the last page disables next in the view and in the markup.
#[test]
fn last_page_disables_next_everywhere() {
    let view = compute(&PaginationRequest::new(42, 10, 420)).unwrap();
    assert!(!view.can_go_next);

    let fired = Cell::new(false);
    let mut handler = Callbacks::new(|_| fired.set(true), |_| fired.set(true));
    assert!(!dispatch(&view, Control::Next, &mut handler));
    assert!(!fired.get());

    let html = web::initialize()
        .unwrap()
        .render(&view, &RenderOptions::default())
        .unwrap();
    assert!(html.contains(r#"<span class="pagination-next disabled" aria-disabled="true">Next</span>"#));
    assert!(html.contains("411–420 of 420"));
}

/// A dataset that fits on one page yields no markup and no live controls.
#[test]
fn single_page_dataset_renders_nothing() {
    let view = compute(&PaginationRequest::new(1, 10, 7).with_page_size_options(vec![10, 20])).unwrap();
    assert!(!view.is_visible);

    let html = web::initialize()
        .unwrap()
        .render(&view, &RenderOptions::default())
        .unwrap();
    assert!(html.is_empty());

    let mut handler = Callbacks::new(
        |_| panic!("hidden pagination must not navigate"),
        |_| panic!("hidden pagination must not resize"),
    );
    assert!(!dispatch(&view, Control::PageSize(20), &mut handler));
}

/// The JSON shape handed to client-side renderers.
#[test]
fn view_serializes_for_clients() {
    let request: PaginationRequest = serde_json::from_str(
        r#"{"page": 1, "page_size": 10, "total_items": 42, "page_size_options": [10, 20, 50]}"#,
    )
    .unwrap();
    let json = serde_json::to_value(compute(&request).unwrap()).unwrap();

    assert_eq!(json["is_visible"], true);
    assert_eq!(json["total_pages"], 5);
    assert_eq!(json["range_start"], 1);
    assert_eq!(json["range_end"], 10);
    assert_eq!(json["can_go_previous"], false);
    assert_eq!(json["previous_page"], serde_json::Value::Null);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
    assert_eq!(
        json["page_size_choices"][0],
        serde_json::json!({"size": 10, "is_active": true})
    );
}

/// Invalid input fails with InvalidArgument through the public API.
#[test]
fn zero_page_size_is_invalid_argument() {
    let err = compute(&PaginationRequest::new(1, 0, 10)).unwrap_err();
    assert!(matches!(err, lfx_pager::PagerError::InvalidArgument(_)));
}
