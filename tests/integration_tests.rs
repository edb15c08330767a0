use relay_engine::coverage::max_overlap;
use relay_engine::graph::graph::RelayGraph;
use relay_engine::graph::pathfinder::shortest_paths;
use relay_engine::input::{parse_coverage_input, parse_route_input, EARTH, ZEARTH};

#[test]
fn integration_route_text_to_distance() {
    // Zearth at (1,1,1), two far-away relay stations. The closest other
    // vertex from Earth is Zearth itself, sqrt(3) away.
    let text = "1.0 1.0 1.0\n2\n5.0 5.0 5.0\n-4.0 2.0 7.0\n";
    let input = parse_route_input(text).expect("input");
    assert_eq!(input.stations.len(), 4);

    let graph = RelayGraph::complete(input.stations).expect("graph");
    assert_eq!(graph.edge_count(), 6);

    let paths = shortest_paths(&graph, EARTH).expect("paths");
    assert_eq!(paths.closest_other(), Some(1.73));
    assert_eq!(paths.distance_to(ZEARTH), Some(1.73));
    assert_eq!(paths.route_to(ZEARTH), Some(vec![EARTH, ZEARTH]));
}

#[test]
fn integration_route_single_station() {
    let text = "2.0 0.0 0.0\n1\n8.0 0.0 0.0\n";
    let input = parse_route_input(text).expect("input");
    let graph = RelayGraph::complete(input.stations).expect("graph");
    let paths = shortest_paths(&graph, EARTH).expect("paths");
    assert_eq!(paths.closest_other(), Some(2.00));
}

#[test]
fn integration_coverage_text_to_overlap() {
    let text = "5 2\n3 3 2\n1 1 2\n";
    let input = parse_coverage_input(text).expect("input");
    assert_eq!(max_overlap(input.dimension, &input.deliveries), 2);
}
