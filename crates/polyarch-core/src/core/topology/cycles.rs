use petgraph::graph::{DiGraph, NodeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Finds one directed cycle with an iterative depth-first search.
///
/// Returns the nodes along the cycle, closed (first node repeated at the
/// end), or `None` if the graph is acyclic. Parallel edges do not affect the
/// result; a self-loop is reported as `[n, n]`.
pub fn find_cycle<N, E>(graph: &DiGraph<N, E>) -> Option<Vec<NodeIndex>> {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];

    for start in graph.node_indices() {
        if marks[start.index()] != Mark::Unvisited {
            continue;
        }
        marks[start.index()] = Mark::OnStack;
        let mut stack = vec![(start, graph.neighbors(start))];

        loop {
            let Some((node, neighbors)) = stack.last_mut() else {
                break;
            };
            let node = *node;
            match neighbors.next() {
                Some(next) => match marks[next.index()] {
                    Mark::Unvisited => {
                        marks[next.index()] = Mark::OnStack;
                        stack.push((next, graph.neighbors(next)));
                    }
                    Mark::OnStack => {
                        let from = stack.iter().rposition(|(n, _)| *n == next).unwrap_or(0);
                        let mut cycle: Vec<NodeIndex> =
                            stack[from..].iter().map(|(n, _)| *n).collect();
                        cycle.push(next);
                        return Some(cycle);
                    }
                    Mark::Done => {}
                },
                None => {
                    marks[node.index()] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    None
}
