// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use overstory_capture::props::{PropMap, PropValue};
use overstory_capture::resolver::Resolver;
use overstory_capture::types::{InstanceLookup, InteractionEvent, LABEL_PROP};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(usize);

/// A linear chain where every `stride`-th node carries a label and a handful
/// of mixed-type props; the rest are anonymous containers.
struct Chain {
    props: Vec<Option<PropMap>>,
}

impl Chain {
    fn new(depth: usize, stride: usize) -> Self {
        let props = (0..depth)
            .map(|i| {
                (i % stride == 0).then(|| {
                    let mut p = PropMap::new();
                    p.insert(LABEL_PROP.into(), PropValue::from("Row"));
                    p.insert("index".into(), PropValue::from(i as f64));
                    p.insert("visible".into(), PropValue::from(true));
                    p.insert("onPress".into(), PropValue::Opaque);
                    p
                })
            })
            .collect();
        Self { props }
    }
}

impl InstanceLookup<Node> for Chain {
    fn display_name(&self, _node: &Node) -> Option<&str> {
        None
    }
    fn type_name(&self, _node: &Node) -> Option<&str> {
        None
    }
    fn props(&self, node: &Node) -> Option<&PropMap> {
        self.props.get(node.0)?.as_ref()
    }
    fn parent_of(&self, node: &Node) -> Option<Node> {
        (node.0 + 1 < self.props.len()).then(|| Node(node.0 + 1))
    }
}

fn bench_resolver_walk(c: &mut Criterion) {
    let event = InteractionEvent {
        target: Some(Node(0)),
        point: Point::new(10.0, 20.0),
    };

    let mut group = c.benchmark_group("resolver_walk");
    for (name, depth, stride) in [
        ("shallow_dense", 5usize, 1usize),
        ("deep_dense", 200, 1),
        ("deep_sparse", 200, 8),
    ] {
        let resolver = Resolver::new(Chain::new(depth, stride));
        group.throughput(Throughput::Elements(1));
        group.bench_function(name, |b| {
            b.iter(|| black_box(resolver.resolve(black_box(&event))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolver_walk);
criterion_main!(benches);
