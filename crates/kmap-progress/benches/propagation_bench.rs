use criterion::{criterion_group, criterion_main, Criterion};

use kmap_core::models::{ConceptNode, DependencyEdge, MapNode, TopicNode};
use kmap_graph::MapGraph;
use kmap_progress::{ProgressState, PropagationEngine, Recommender, SeededRandom};

/// Build a layered DAG: 10 layers of 30 concepts, each concept depending on
/// up to 3 concepts in the layer above.
fn build_layered_dag() -> MapGraph {
    let (layers, width) = (10, 30);
    let mut graph = MapGraph::new();
    graph
        .add_node(MapNode::Topic(TopicNode::new("t", "Topic", "#336699")), None)
        .unwrap();
    for l in 0..layers {
        for w in 0..width {
            let id = format!("l{l}w{w}");
            graph
                .add_node(MapNode::Concept(ConceptNode::new(id.clone(), id, "t")), None)
                .unwrap();
        }
    }
    for l in 1..layers {
        for w in 0..width {
            for k in 0..3 {
                let src = format!("l{}w{}", l - 1, (w + k * 7) % width);
                let tgt = format!("l{l}w{w}");
                let id = format!("{src}-{tgt}");
                if graph.find_edge(&src, &tgt).is_none() {
                    graph.add_edge(DependencyEdge::new(id, src, tgt)).unwrap();
                }
            }
        }
    }
    graph
}

fn bench_toggle_learned(c: &mut Criterion) {
    let graph = build_layered_dag();
    let engine = PropagationEngine::new(&graph);

    c.bench_function("toggle_learned_deep_concept", |b| {
        b.iter(|| {
            let mut state = ProgressState::new();
            engine.toggle_learned(&mut state, "l9w0").unwrap();
        });
    });
}

fn bench_goals(c: &mut Criterion) {
    let graph = build_layered_dag();
    let engine = PropagationEngine::new(&graph);

    c.bench_function("set_and_unset_five_goals", |b| {
        b.iter(|| {
            let mut state = ProgressState::new();
            for w in 0..5 {
                engine.set_goal(&mut state, &format!("l9w{w}")).unwrap();
            }
            for w in 0..5 {
                engine.unset_goal(&mut state, &format!("l9w{w}")).unwrap();
            }
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let graph = build_layered_dag();
    let engine = PropagationEngine::new(&graph);
    let mut state = ProgressState::new();
    engine.set_goal(&mut state, "l9w3").unwrap();
    engine.toggle_learned(&mut state, "l4w3").unwrap();
    let recommender = Recommender::new(&graph);
    let mut rng = SeededRandom::new(Some(42));

    c.bench_function("next_node_to_learn", |b| {
        b.iter(|| {
            recommender.next_node_to_learn(&state, None, &mut rng).unwrap();
        });
    });
}

criterion_group!(benches, bench_toggle_learned, bench_goals, bench_recommend);
criterion_main!(benches);
