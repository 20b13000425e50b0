use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trailgraph::{BreadthFirst, DepthFirst, EdgeSelector, Graph, Overrides, Search, Traversal};

const SIDE: usize = 32;

fn chain(size: usize) -> Graph<usize> {
    Graph::from_keys(0..size, (1..size).map(|i| (i - 1, i))).unwrap()
}

fn grid(side: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            if col + 1 < side {
                graph.add_edge((node, node + 1), trailgraph::Payload::Keep);
            }
            if row + 1 < side {
                graph.add_edge((node, node + side), trailgraph::Payload::Keep);
            }
        }
    }
    graph
}

fn hooks() -> Overrides<usize, (), ()> {
    Overrides::new()
}

fn bench_traversal(c: &mut Criterion) {
    let size = 1000;
    let line = chain(size);
    let mesh = grid(SIDE);
    let outward = || Traversal::new().with_edge_selector(EdgeSelector::Outward);

    c.bench_function("bfs_chain_outward", |b| {
        let bfs = BreadthFirst::new(outward());
        b.iter(|| black_box(bfs.call(&line, [0], hooks()).unwrap().nodes().len()));
    });

    c.bench_function("dfs_chain_outward", |b| {
        let dfs = DepthFirst::new(outward());
        b.iter(|| black_box(dfs.call(&line, [0], hooks()).unwrap().nodes().len()));
    });

    c.bench_function("bfs_grid_incident", |b| {
        let bfs = BreadthFirst::default();
        b.iter(|| black_box(bfs.call(&mesh, [0], hooks()).unwrap().backedges().len()));
    });

    c.bench_function("dfs_grid_incident", |b| {
        let dfs = DepthFirst::default();
        b.iter(|| black_box(dfs.call(&mesh, [0], hooks()).unwrap().backedges().len()));
    });

    c.bench_function("dfs_grid_ingress_stop", |b| {
        let dfs = DepthFirst::new(outward());
        let target = SIDE * SIDE - 1;
        b.iter(|| {
            let trail = dfs
                .call(&mesh, [0], hooks().ingress(move |_, node, _| Ok(*node == target)))
                .unwrap();
            black_box(trail.result().cloned())
        });
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("graph_build_and_delete_grid", |b| {
        b.iter(|| {
            let mut mesh = grid(SIDE);
            // Remove the middle row.
            for col in 0..SIDE {
                mesh.del_node(&((SIDE / 2) * SIDE + col)).unwrap();
            }
            black_box(mesh.edge_count())
        });
    });
}

criterion_group!(benches, bench_traversal, bench_construction);
criterion_main!(benches);
