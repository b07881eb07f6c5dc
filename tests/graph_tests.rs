use catalist::graph::{self, GraphError};

fn lines(text: &str) -> Vec<String> {
    text.lines().map(|l| l.to_string()).collect()
}

#[test]
fn test_parse_two_graphs() {
    let input = lines(
        "new graph\n\
         add vertex 1\n\
         add vertex 2\n\
         add edge 1 - 2\n\
         \n\
         new graph\n\
         add vertex a\n\
         add vertex b\n\
         add vertex c\n\
         add edge a - b 3\n\
         add edge b - c 4\n",
    );

    let outcome = graph::parse_commands(&input);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.graphs.len(), 2);
    assert_eq!(outcome.graphs[0].vertex_count(), 2);
    assert_eq!(outcome.graphs[1].vertex_count(), 3);
    assert_eq!(outcome.graphs[1].edges().len(), 2);
}

#[test]
fn test_parse_compact_edge_form() {
    let input = lines(
        "new graph\n\
         add vertex 1\n\
         add vertex 2\n\
         add edge 1-2\n",
    );

    let outcome = graph::parse_commands(&input);
    assert!(outcome.warnings.is_empty());

    let graph = &outcome.graphs[0];
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].weight, 1);
}

#[test]
fn test_parse_collects_warnings() {
    let input = lines(
        "add vertex orphan\n\
         new graph\n\
         add vertex 1\n\
         add edge 1 - ghost\n\
         add edge what even is this line\n\
         launch missiles\n",
    );

    let outcome = graph::parse_commands(&input);
    assert_eq!(outcome.graphs.len(), 1);
    assert_eq!(outcome.warnings.len(), 4);
    assert!(outcome.warnings[0].contains("line 1"));
    assert!(outcome.warnings[1].contains("undefined vertices"));
    assert!(outcome.warnings[2].contains("invalid edge format"));
    assert!(outcome.warnings[3].contains("unrecognized command"));
}

#[test]
fn test_shortest_paths_from_parsed_file() {
    // Weighted digraph with a shortcut: 1 -> 3 direct costs 10, but
    // 1 -> 2 -> 3 costs 5.
    let input = lines(
        "new graph\n\
         add vertex 1\n\
         add vertex 2\n\
         add vertex 3\n\
         add vertex 4\n\
         add edge 1 - 3 10\n\
         add edge 1 - 2 2\n\
         add edge 2 - 3 3\n\
         add edge 3 - 4 1\n",
    );

    let outcome = graph::parse_commands(&input);
    let graph = &outcome.graphs[0];
    let paths = graph.bellman_ford("1").unwrap();

    assert_eq!(paths.distance("3"), Some(5));
    assert_eq!(paths.path_to("3").unwrap(), vec!["1", "2", "3"]);
    assert_eq!(paths.distance("4"), Some(6));
    assert_eq!(paths.path_to("4").unwrap(), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_negative_weights_relax_correctly() {
    let input = lines(
        "new graph\n\
         add vertex 1\n\
         add vertex 2\n\
         add vertex 3\n\
         add edge 1 - 2 5\n\
         add edge 2 - 3 -4\n\
         add edge 1 - 3 2\n",
    );

    let outcome = graph::parse_commands(&input);
    let paths = outcome.graphs[0].bellman_ford("1").unwrap();

    // The longer route through 2 undercuts the direct edge.
    assert_eq!(paths.distance("3"), Some(1));
    assert_eq!(paths.path_to("3").unwrap(), vec!["1", "2", "3"]);
}

#[test]
fn test_negative_cycle_is_an_error() {
    let input = lines(
        "new graph\n\
         add vertex 1\n\
         add vertex 2\n\
         add edge 1 - 2 1\n\
         add edge 2 - 1 -3\n",
    );

    let outcome = graph::parse_commands(&input);
    assert!(matches!(
        outcome.graphs[0].bellman_ford("1"),
        Err(GraphError::NegativeCycle)
    ));
}

#[test]
fn test_matrix_rendering_matches_vertex_order() {
    let input = lines(
        "new graph\n\
         add vertex 2\n\
         add vertex 5\n\
         add vertex 9\n\
         add edge 2 - 5\n\
         add edge 5 - 9\n",
    );

    let outcome = graph::parse_commands(&input);
    let rendered = outcome.graphs[0].render_matrix();
    let rows: Vec<&str> = rendered.lines().collect();

    assert_eq!(rows[0], "       2   5   9");
    assert_eq!(rows[1], "   2   .   1   .");
    assert_eq!(rows[2], "   5   1   .   1");
    assert_eq!(rows[3], "   9   .   1   .");
}

#[test]
fn test_empty_input_parses_to_nothing() {
    let outcome = graph::parse_commands(&[]);
    assert!(outcome.graphs.is_empty());
    assert!(outcome.warnings.is_empty());
}
