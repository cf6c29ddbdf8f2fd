use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use canopy::{BinarySearchTree, EditNode, NTree, Tree};

/// Values in an order that keeps the search tree close to balanced.
fn scrambled(num_nodes: usize) -> Vec<i32> {
    let mut values = Vec::with_capacity(num_nodes);
    let mut ranges = std::collections::VecDeque::from([(0, num_nodes as i32)]);
    while let Some((low, high)) = ranges.pop_front() {
        if low < high {
            let mid = low + (high - low) / 2;
            values.push(mid);
            ranges.push_back((low, mid));
            ranges.push_back((mid + 1, high));
        }
    }

    values
}

/// A complete n-ary tree with `fan_out` children per inner node.
fn wide(num_nodes: usize, fan_out: usize) -> NTree<usize> {
    let mut tree = NTree::with_root(0);
    let mut added = 1;
    let mut level = vec![Vec::new()];
    while added < num_nodes {
        let mut next = Vec::new();
        for path in &level {
            for index in 0..fan_out {
                if added == num_nodes {
                    break;
                }

                let Some(mut node) = tree.root_mut() else {
                    return tree;
                };
                descend(&mut node, path, added);
                added += 1;

                let mut child = path.clone();
                child.push(index);
                next.push(child);
            }
        }
        level = next;
    }

    tree
}

fn descend(node: &mut canopy::GenericMut<'_, usize>, path: &[usize], value: usize) {
    match path.split_first() {
        Some((&index, rest)) => {
            if let Ok(Some(mut child)) = node.visit_mut(index) {
                descend(&mut child, rest, value);
            }
        }
        None => {
            let _ = node.add(value);
        }
    }
}

/// Helper to bench search tree construction.
/// It creates a group for the given name and benches building a tree of various sizes from the
/// values `order` produces before finishing the group.
fn bench_build(c: &mut Criterion, name: &str, order: impl Fn(usize) -> Vec<i32>) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let values = order(num_nodes);
        let id = BenchmarkId::from_parameter(num_nodes);

        group.bench_with_input(id, &values, |b, values| {
            b.iter(|| BinarySearchTree::try_from(black_box(&values[..])))
        });
    }

    group.finish();
}

/// Helper to bench a walk over a tree.
fn bench_walk<T: Tree>(c: &mut Criterion, name: &str, trees: &[(usize, T)]) {
    let mut group = c.benchmark_group(name);

    for (num_nodes, tree) in trees {
        group.bench_with_input(BenchmarkId::new("pre-order", num_nodes), tree, |b, tree| {
            b.iter(|| black_box(tree.traverse()).len())
        });
        group.bench_with_input(
            BenchmarkId::new("breadth-first", num_nodes),
            tree,
            |b, tree| b.iter(|| black_box(tree.traverse_breadth_first()).len()),
        );
        group.bench_with_input(BenchmarkId::new("height", num_nodes), tree, |b, tree| {
            b.iter(|| black_box(tree.height()))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_build(c, "build-sorted", |n| (0..n as i32).collect());
    bench_build(c, "build-scrambled", scrambled);

    let degenerate: Vec<_> = [127, 2047]
        .into_iter()
        .filter_map(|n| Some((n, BinarySearchTree::from_values(0..n as i32).ok()?)))
        .collect();
    bench_walk(c, "walk-degenerate", &degenerate);

    let balanced: Vec<_> = [127, 2047, 32767]
        .into_iter()
        .filter_map(|n| Some((n, BinarySearchTree::try_from(scrambled(n)).ok()?)))
        .collect();
    bench_walk(c, "walk-balanced", &balanced);

    let wide: Vec<_> = [127, 2047, 32767].into_iter().map(|n| (n, wide(n, 8))).collect();
    bench_walk(c, "walk-wide", &wide);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
