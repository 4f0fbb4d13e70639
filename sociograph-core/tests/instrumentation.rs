//! Spans and events emitted by the traversal engine.

mod common;

use common::{id, ids, lattice, members};
use sociograph_core::{highest_engagement_path, shortest_distances, shortest_path};
use sociograph_test_support::capture::{CaptureLayer, with_capture};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn shortest_path_span_records_network_size() {
    let network = members(3);
    let (path, layer) = with_capture(|| shortest_path(&network, id(1), id(3)));
    assert_eq!(path.expect("members exist"), None);

    let span = layer.span("traversal.shortest_path").expect("span closed");
    assert_eq!(span.field("members"), Some("3"));
    let event = layer
        .event("no path between members")
        .expect("missing path is logged");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("start"), Some("1"));
    assert_eq!(event.field("end"), Some("3"));
}

#[test]
fn engagement_search_reports_pruning() {
    let mut network = members(4);
    network.ensure_path(&ids(&[1, 2, 3, 4])).expect("members exist");

    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let best = tracing::subscriber::with_default(subscriber, || {
        highest_engagement_path(&network, id(1), id(4), 2)
    })
    .expect("members exist");
    assert!(best.is_empty());

    assert!(layer.span("traversal.engagement").is_some());
    let event = layer
        .event("engagement search finished")
        .expect("summary is logged");
    assert_eq!(event.field("pruned"), Some("1"));
    assert_eq!(event.field("arrivals"), Some("0"));
    assert_eq!(event.field("found"), Some("false"));
}

#[test]
fn dijkstra_reports_stale_entries() {
    let graph = lattice();
    let ((), layer) = with_capture(|| {
        let _ = shortest_distances(&graph, 0);
    });
    let span = layer.span("traversal.dijkstra").expect("span closed");
    assert_eq!(span.field("nodes"), Some("8"));
    assert!(layer.event("dijkstra finished").is_some());
}
